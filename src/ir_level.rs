// src/ir_level.rs

/// The slice of an LDtk project this exporter reads.
#[derive(Debug, Clone)]
pub struct IrDocument {
    /// Tileset definitions, in definition order and selected by position.
    pub tilesets: Vec<IrTileset>,
    /// Levels in export order: array order.
    pub levels: Vec<IrLevel>,
}

/// One tileset definition.
#[derive(Debug, Clone)]
pub struct IrTileset {
    /// Tileset name given in the editor.
    pub identifier: String,
    /// Per-tile custom data, kept in file order so the first match wins.
    pub custom_data: Vec<IrTileLabel>,
}

/// A tile id and the semantic tag attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrTileLabel {
    /// Tile id within the tileset.
    pub tile_id: u32,
    /// Tag text, e.g. `Wall`.
    pub data: String,
}

/// A level and its layers.
#[derive(Debug, Clone)]
pub struct IrLevel {
    /// Level name; `_` become spaces in the exported name.
    pub identifier: String,
    /// Width in pixels.
    pub px_wid: u32,
    /// Height in pixels.
    pub px_hei: u32,
    /// Layer instances in LDtk order: top-most first.
    pub layers: Vec<IrLayer>,
}

/// One layer instance of a level.
#[derive(Debug, Clone)]
pub struct IrLayer {
    /// Layer name.
    pub identifier: String,
    /// Cell size in pixels.
    pub grid_size: u32,
    /// Placed tiles in file order, assumed row-major.
    pub tiles: Vec<IrGridTile>,
}

/// One placed tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IrGridTile {
    /// Pixel-space position of the cell's top-left corner.
    pub px: [u32; 2],
    /// Tile id within the tileset.
    pub tile_id: u32,
}
