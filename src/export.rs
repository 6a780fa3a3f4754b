use crate::error::{ExportError, Result};
use crate::ir_level::{IrDocument, IrLevel};
use crate::loader::json_loader::decode_project_file_to_ir;
use crate::raster::rasterize;
use crate::tile_type::TileLabels;
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

/// Identifier prefix that marks a level as internal test content.
pub const DEBUG_PREFIX: &str = "Debug_";

/// Opens every level block in a `.lvl` document.
pub const LEVEL_SEPARATOR: &str = "---\n";
/// Sits between a level's name and its tile rows.
pub const PLANE_SEPARATOR: &str = "--\n";

/// Whether a level ships with the game or is internal test content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelKind {
    /// Always exported.
    Real,
    /// Exported only with `--debug`.
    Debug,
}

impl LevelKind {
    /// Classify a level by its identifier.
    pub fn of(identifier: &str) -> Self {
        if identifier.starts_with(DEBUG_PREFIX) {
            LevelKind::Debug
        } else {
            LevelKind::Real
        }
    }
}

/// Name shown in game: the identifier with underscores turned into spaces.
pub fn display_name(identifier: &str) -> String {
    identifier.replace('_', " ")
}

/// Switches for one conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Include `Debug_` levels in the output.
    pub include_debug: bool,
}

/// Number of exported levels per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Real levels written.
    pub real: usize,
    /// Debug levels written.
    pub debug: usize,
}

impl ExportSummary {
    /// Count a level, returning whether it should be written out.
    fn admit(&mut self, kind: LevelKind, options: &ExportOptions) -> bool {
        match kind {
            LevelKind::Real => {
                self.real += 1;
                true
            }
            LevelKind::Debug if options.include_debug => {
                self.debug += 1;
                true
            }
            LevelKind::Debug => false,
        }
    }
}

impl fmt::Display for ExportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} real levels and {} debug levels exported.",
            self.real, self.debug
        )
    }
}

/// A finished `.lvl` document and what went into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    /// Complete `.lvl` document.
    pub text: String,
    /// Level counts for the run.
    pub summary: ExportSummary,
}

fn write_level(out: &mut String, level: &IrLevel, labels: &TileLabels<'_>) -> Result<()> {
    let rows = rasterize(level, labels)?;
    out.push_str(LEVEL_SEPARATOR);
    out.push_str(&display_name(&level.identifier));
    out.push('\n');
    out.push_str(PLANE_SEPARATOR);
    out.push_str(&rows);
    Ok(())
}

/// Convert every selected level of `doc` into one `.lvl` document.
pub fn export_document(doc: &IrDocument, options: &ExportOptions) -> Result<Export> {
    let labels = TileLabels::from_tilesets(&doc.tilesets)?;
    debug!(labels = labels.len(), "tile labels loaded");

    let mut summary = ExportSummary::default();
    let mut text = String::new();

    for level in &doc.levels {
        let kind = LevelKind::of(&level.identifier);
        if !summary.admit(kind, options) {
            debug!(level = %level.identifier, "skipping debug level");
            continue;
        }
        write_level(&mut text, level, &labels)?;
        info!(level = %level.identifier, ?kind, "exported");
    }
    text.push('\n');

    Ok(Export { text, summary })
}

/// Read `input`, convert it, and write the result to `output`.
///
/// The output file is only created once the whole document converted.
pub fn export_file(input: &Path, output: &Path, options: &ExportOptions) -> Result<ExportSummary> {
    let doc = decode_project_file_to_ir(input)?;
    let export = export_document(&doc, options)?;

    std::fs::write(output, export.text.as_bytes()).map_err(|source| ExportError::Io {
        path: output.to_path_buf(),
        source,
    })?;
    info!("wrote {}", output.display());

    Ok(export.summary)
}
