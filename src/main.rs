use anyhow::Context;
use clap::Parser;
use lucyban_level_export::{export_file, ExportConfig};
use tracing::Level;

/// Level importer
#[derive(Debug, Parser)]
#[command(about = "Level importer")]
struct Cli {
    /// Bring in debug levels
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ExportConfig {
        include_debug: cli.debug,
        ..Default::default()
    };

    let summary = export_file(&config.input, &config.output, &config.options()).with_context(
        || {
            format!(
                "Exporting {} to {}",
                config.input.display(),
                config.output.display()
            )
        },
    )?;

    println!("{summary}");
    Ok(())
}
