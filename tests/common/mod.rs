// tests/common/mod.rs
#![allow(dead_code)]

/// One level with the gameplay layer at index 1, cells laid out row-major.
pub fn level_json(identifier: &str, rows: &[&[u32]]) -> String {
    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    let mut cells = Vec::new();
    for (y, row) in rows.iter().enumerate() {
        for (x, t) in row.iter().enumerate() {
            cells.push(format!(
                r#"{{ "px": [{}, {}], "src": [0, 0], "f": 0, "t": {t}, "d": [0] }}"#,
                x * 32,
                y * 32
            ));
        }
    }
    format!(
        r#"{{
          "identifier": "{identifier}",
          "pxWid": {},
          "pxHei": {},
          "layerInstances": [
            {{ "__identifier": "Entities", "__gridSize": 32, "gridTiles": [] }},
            {{ "__identifier": "ActualLevel", "__gridSize": 32, "gridTiles": [{}] }}
          ]
        }}"#,
        width * 32,
        rows.len() * 32,
        cells.join(", ")
    )
}

/// Full project around `levels`. Tile ids: 0 Wall, 1 Floor, 2 PlayerSpawn,
/// 3 Goal, 4 Box, 5 Empty, 6..=9 mirrors UL UR DL DR.
pub fn project_json(levels: &[String]) -> String {
    format!(
        r#"{{
          "jsonVersion": "1.5.3",
          "defs": {{
            "layers": [],
            "tilesets": [
              {{ "identifier": "Internal_Icons", "customData": [] }},
              {{
                "identifier": "Lucyban_tileset",
                "customData": [
                  {{ "tileId": 0, "data": "Wall" }},
                  {{ "tileId": 1, "data": "Floor" }},
                  {{ "tileId": 2, "data": "PlayerSpawn" }},
                  {{ "tileId": 3, "data": "Goal" }},
                  {{ "tileId": 4, "data": "Box" }},
                  {{ "tileId": 5, "data": "Empty" }},
                  {{ "tileId": 6, "data": "MirrorUL" }},
                  {{ "tileId": 7, "data": "MirrorUR" }},
                  {{ "tileId": 8, "data": "MirrorDL" }},
                  {{ "tileId": 9, "data": "MirrorDR" }}
                ]
              }}
            ]
          }},
          "levels": [{}]
        }}"#,
        levels.join(", ")
    )
}
