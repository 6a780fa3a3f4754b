use crate::export::ExportOptions;
use std::path::PathBuf;

/// LDtk project read by the exporter, relative to the working directory.
pub const DEFAULT_INPUT: &str = "levels.ldtk";
/// Level pack written for the game.
pub const DEFAULT_OUTPUT: &str = "../assets/levels/1.lvl";

/// Everything one export run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// LDtk project to read.
    pub input: PathBuf,
    /// `.lvl` file to write.
    pub output: PathBuf,
    /// Set by `--debug`.
    pub include_debug: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            include_debug: false,
        }
    }
}

impl ExportConfig {
    /// Conversion options for this run.
    pub fn options(&self) -> ExportOptions {
        ExportOptions {
            include_debug: self.include_debug,
        }
    }
}
