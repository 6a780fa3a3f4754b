#![warn(missing_docs)]

//! LDtk level export to the plain-text `.lvl` format read by Lucyban.

mod config;
mod error;
mod export;
mod ir_level;
mod loader {
    pub mod json_loader;
}
mod lvl;
mod raster;
mod tile_type;

pub use config::{ExportConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};
pub use error::{ExportError, Result};
pub use export::{
    display_name, export_document, export_file, Export, ExportOptions, ExportSummary, LevelKind,
    DEBUG_PREFIX,
};
pub use ir_level::{IrDocument, IrGridTile, IrLayer, IrLevel, IrTileLabel, IrTileset};
pub use loader::json_loader::{decode_project_file_to_ir, decode_project_str_to_ir};
pub use lvl::{parse_lvl, LvlLevel};
pub use raster::{gameplay_layer, rasterize, CELL_SIZE, GAMEPLAY_LAYER, GAMEPLAY_LAYER_INDEX};
pub use tile_type::{TileLabels, TileType, TILESET_IDENTIFIER, TILESET_INDEX};
