//! CLI entry point for the camouflage pattern generator

use camogen::io::cli::{BatchProcessor, Cli};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> camogen::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut processor = BatchProcessor::new(cli);
    processor.process()?;
    Ok(())
}
