use std::path::PathBuf;

/// Every way an export run can fail. None of these are recoverable.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Source file could not be read or output could not be written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Source is not JSON, or does not have the expected LDtk shape.
    #[error("Failed to parse {}: {source}", path.display())]
    Json {
        /// File the text came from.
        path: PathBuf,
        /// Parser or schema error, naming the missing or mistyped key.
        #[source]
        source: serde_json::Error,
    },

    /// Source parsed, but the top-level value is empty.
    #[error("level file not valid: {} is empty", path.display())]
    EmptyDocument {
        /// File the text came from.
        path: PathBuf,
    },

    /// `defs.tilesets` is too short to hold the labelled tileset.
    #[error("no tileset at definitions index {index}")]
    MissingTileset {
        /// Position that was looked up.
        index: usize,
    },

    /// The tileset at the expected position is not the labelled one.
    #[error("tileset identifier mismatch: expected '{expected}', found '{found}'")]
    TilesetMismatch {
        /// Identifier the exporter requires.
        expected: &'static str,
        /// Identifier found at that position.
        found: String,
    },

    /// A level has too few layers to hold the gameplay layer.
    #[error("level '{level}' has no layer at index {index}")]
    MissingLayer {
        /// Level identifier.
        level: String,
        /// Position that was looked up.
        index: usize,
    },

    /// The layer at the gameplay position has the wrong name.
    #[error("level '{level}': expected layer '{expected}', found '{found}'")]
    LayerMismatch {
        /// Level identifier.
        level: String,
        /// Layer name the exporter requires.
        expected: &'static str,
        /// Layer name found at that position.
        found: String,
    },

    /// The gameplay layer does not use 32 pixel cells.
    #[error("level '{level}': expected grid size {expected}, found {found}")]
    GridSizeMismatch {
        /// Level identifier.
        level: String,
        /// Cell size the exporter requires.
        expected: u32,
        /// Cell size of the layer.
        found: u32,
    },

    /// A cell references a tile id missing from the tileset's custom data.
    #[error("level '{level}': tile id {tile_id} has no custom data in the tileset")]
    UnknownTileId {
        /// Level identifier.
        level: String,
        /// Unresolved tile id.
        tile_id: u32,
    },

    /// Custom data holds a tag with no `.lvl` character.
    #[error("Found Unknown tile type: {0}")]
    UnknownTileType(String),
}

/// Result of any export step.
pub type Result<T> = std::result::Result<T, ExportError>;
