use crate::error::{ExportError, Result};
use crate::ir_level::{IrTileLabel, IrTileset};
use std::fmt;
use std::str::FromStr;

/// Tileset that carries the gameplay tile labels.
pub const TILESET_IDENTIFIER: &str = "Lucyban_tileset";
/// Position of that tileset in `defs.tilesets`.
pub const TILESET_INDEX: usize = 1;

/// Semantic tile kinds understood by the game's `.lvl` reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileType {
    /// Player start, `P`.
    PlayerSpawn,
    /// Box target, `G`.
    Goal,
    /// Walkable ground, `F`.
    Floor,
    /// Pushable box, `B`.
    Box,
    /// Solid wall, `W`.
    Wall,
    /// Outside the level, `.`.
    Empty,
    /// Mirror facing up-left, `<`.
    MirrorUL,
    /// Mirror facing up-right, `>`.
    MirrorUR,
    /// Mirror facing down-left, `[`.
    MirrorDL,
    /// Mirror facing down-right, `]`.
    MirrorDR,
}

impl TileType {
    /// Every tile type, in `.lvl` table order.
    pub const ALL: [TileType; 10] = [
        TileType::PlayerSpawn,
        TileType::Goal,
        TileType::Floor,
        TileType::Box,
        TileType::Wall,
        TileType::Empty,
        TileType::MirrorUL,
        TileType::MirrorUR,
        TileType::MirrorDL,
        TileType::MirrorDR,
    ];

    /// Character written to the `.lvl` file for this tile.
    pub fn glyph(self) -> char {
        match self {
            TileType::PlayerSpawn => 'P',
            TileType::Goal => 'G',
            TileType::Floor => 'F',
            TileType::Box => 'B',
            TileType::Wall => 'W',
            TileType::Empty => '.',
            TileType::MirrorUL => '<',
            TileType::MirrorUR => '>',
            TileType::MirrorDL => '[',
            TileType::MirrorDR => ']',
        }
    }

    /// Tag as written in the tileset's custom data.
    pub fn tag(self) -> &'static str {
        match self {
            TileType::PlayerSpawn => "PlayerSpawn",
            TileType::Goal => "Goal",
            TileType::Floor => "Floor",
            TileType::Box => "Box",
            TileType::Wall => "Wall",
            TileType::Empty => "Empty",
            TileType::MirrorUL => "MirrorUL",
            TileType::MirrorUR => "MirrorUR",
            TileType::MirrorDL => "MirrorDL",
            TileType::MirrorDR => "MirrorDR",
        }
    }
}

impl FromStr for TileType {
    type Err = ExportError;

    fn from_str(tag: &str) -> Result<Self> {
        TileType::ALL
            .into_iter()
            .find(|tt| tt.tag() == tag)
            .ok_or_else(|| ExportError::UnknownTileType(tag.to_owned()))
    }
}

impl fmt::Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// The tileset's custom-data table, tile id -> semantic tag.
#[derive(Debug, Clone, Copy)]
pub struct TileLabels<'a> {
    rows: &'a [IrTileLabel],
}

impl<'a> TileLabels<'a> {
    /// Wrap a custom-data table as read from the tileset.
    pub fn new(rows: &'a [IrTileLabel]) -> Self {
        Self { rows }
    }

    /// Pick the labelled tileset by position and check that it is the right one.
    pub fn from_tilesets(tilesets: &'a [IrTileset]) -> Result<Self> {
        let tileset = tilesets
            .get(TILESET_INDEX)
            .ok_or(ExportError::MissingTileset {
                index: TILESET_INDEX,
            })?;
        if tileset.identifier != TILESET_IDENTIFIER {
            return Err(ExportError::TilesetMismatch {
                expected: TILESET_IDENTIFIER,
                found: tileset.identifier.clone(),
            });
        }
        Ok(Self::new(&tileset.custom_data))
    }

    /// Tag of the first row matching `tile_id`.
    pub fn resolve(&self, tile_id: u32) -> Option<&'a str> {
        self.rows
            .iter()
            .find(|row| row.tile_id == tile_id)
            .map(|row| row.data.as_str())
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(tile_id: u32, data: &str) -> IrTileLabel {
        IrTileLabel {
            tile_id,
            data: data.to_owned(),
        }
    }

    fn tileset(identifier: &str, rows: Vec<IrTileLabel>) -> IrTileset {
        IrTileset {
            identifier: identifier.to_owned(),
            custom_data: rows,
        }
    }

    #[test]
    fn glyph_table_is_exhaustive_and_distinct() {
        let glyphs: String = TileType::ALL.iter().map(|tt| tt.glyph()).collect();
        assert_eq!(glyphs, "PGFBW.<>[]");
    }

    #[test]
    fn every_tag_parses_back_to_its_variant() {
        for tt in TileType::ALL {
            assert_eq!(tt.tag().parse::<TileType>().expect("known tag"), tt);
        }
    }

    #[test]
    fn unknown_tag_is_an_error_naming_the_tag() {
        for tag in ["Lava", "wall", "", " Wall"] {
            let err = tag.parse::<TileType>().unwrap_err();
            assert!(matches!(&err, ExportError::UnknownTileType(t) if t == tag));
        }
        assert_eq!(
            "Lava".parse::<TileType>().unwrap_err().to_string(),
            "Found Unknown tile type: Lava"
        );
    }

    #[test]
    fn resolve_returns_first_match() {
        let rows = vec![label(5, "Wall"), label(7, "Floor"), label(5, "Goal")];
        let labels = TileLabels::new(&rows);
        assert_eq!(labels.resolve(5), Some("Wall"));
        assert_eq!(labels.resolve(7), Some("Floor"));
        assert_eq!(labels.resolve(6), None);
        assert_eq!(labels.len(), 3);
    }

    #[test]
    fn from_tilesets_selects_index_one() {
        let sets = vec![
            tileset("Lucyban_tileset", vec![label(0, "Box")]),
            tileset("Lucyban_tileset", vec![label(0, "Wall")]),
        ];
        let labels = TileLabels::from_tilesets(&sets).expect("tileset");
        assert_eq!(labels.resolve(0), Some("Wall"));
    }

    #[test]
    fn from_tilesets_checks_identity_and_presence() {
        let sets = vec![tileset("Lucyban_tileset", vec![])];
        assert!(matches!(
            TileLabels::from_tilesets(&sets).unwrap_err(),
            ExportError::MissingTileset { index: 1 }
        ));

        let sets = vec![tileset("A", vec![]), tileset("Other_tileset", vec![])];
        assert!(matches!(
            TileLabels::from_tilesets(&sets).unwrap_err(),
            ExportError::TilesetMismatch { found, .. } if found == "Other_tileset"
        ));
    }
}
