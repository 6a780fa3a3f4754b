// src/loader/json_loader.rs
use crate::error::ExportError;
use crate::ir_level::*;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize)]
struct JsonProject {
    #[serde(alias = "definitions")]
    defs: JsonDefs,
    levels: Vec<JsonLevel>,
}

#[derive(Deserialize)]
struct JsonDefs {
    tilesets: Vec<JsonTileset>,
}

#[derive(Deserialize)]
struct JsonTileset {
    identifier: String,
    #[serde(rename = "customData")]
    custom_data: Vec<JsonCustomData>,
}

#[derive(Deserialize)]
struct JsonCustomData {
    #[serde(rename = "tileId")]
    tile_id: u32,
    data: String,
}

#[derive(Deserialize)]
struct JsonLevel {
    identifier: String,
    #[serde(rename = "pxWid")]
    px_wid: u32,
    #[serde(rename = "pxHei")]
    px_hei: u32,
    // null for levels saved in separate files
    #[serde(default, rename = "layerInstances")]
    layer_instances: Option<Vec<JsonLayer>>,
}

#[derive(Deserialize)]
struct JsonLayer {
    #[serde(rename = "__identifier")]
    identifier: String,
    #[serde(rename = "__gridSize")]
    grid_size: u32,
    #[serde(rename = "gridTiles")]
    grid_tiles: Vec<JsonGridTile>,
}

#[derive(Deserialize)]
struct JsonGridTile {
    px: [u32; 2],
    t: u32,
}

/// `null`, `false`, `0`, `""`, `[]` and `{}` all count as an empty project.
fn is_falsy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::Bool(b) => !b,
        JsonValue::Number(n) => n.as_f64() == Some(0.0),
        JsonValue::String(s) => s.is_empty(),
        JsonValue::Array(a) => a.is_empty(),
        JsonValue::Object(o) => o.is_empty(),
    }
}

fn layer_to_ir(layer: JsonLayer) -> IrLayer {
    IrLayer {
        identifier: layer.identifier,
        grid_size: layer.grid_size,
        tiles: layer
            .grid_tiles
            .into_iter()
            .map(|cell| IrGridTile {
                px: cell.px,
                tile_id: cell.t,
            })
            .collect(),
    }
}

fn project_to_ir(j: JsonProject) -> IrDocument {
    let tilesets = j
        .defs
        .tilesets
        .into_iter()
        .map(|ts| IrTileset {
            identifier: ts.identifier,
            custom_data: ts
                .custom_data
                .into_iter()
                .map(|row| IrTileLabel {
                    tile_id: row.tile_id,
                    data: row.data,
                })
                .collect(),
        })
        .collect();

    let levels = j
        .levels
        .into_iter()
        .map(|level| IrLevel {
            identifier: level.identifier,
            px_wid: level.px_wid,
            px_hei: level.px_hei,
            layers: level
                .layer_instances
                .unwrap_or_default()
                .into_iter()
                .map(layer_to_ir)
                .collect(),
        })
        .collect();

    IrDocument { tilesets, levels }
}

/// Decode LDtk text that was read from `origin`. `origin` only labels errors.
pub fn decode_project_str_to_ir(txt: &str, origin: &Path) -> Result<IrDocument, ExportError> {
    let json_err = |source| ExportError::Json {
        path: origin.to_path_buf(),
        source,
    };

    let value: JsonValue = serde_json::from_str(txt).map_err(json_err)?;
    if is_falsy(&value) {
        return Err(ExportError::EmptyDocument {
            path: origin.to_path_buf(),
        });
    }

    let j: JsonProject = serde_json::from_value(value).map_err(json_err)?;
    let doc = project_to_ir(j);
    debug!(
        tilesets = doc.tilesets.len(),
        levels = doc.levels.len(),
        "decoded {}",
        origin.display()
    );
    Ok(doc)
}

/// Read and decode the LDtk project at `path`.
pub fn decode_project_file_to_ir(path: &Path) -> Result<IrDocument, ExportError> {
    let txt = std::fs::read_to_string(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_project_str_to_ir(&txt, path)
}
