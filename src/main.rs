use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use cache_plotter::config::{PlotConfig, DEFAULT_OUTPUT};
use cache_plotter::plotter;

/// Plot cache benchmark output (cycles per access against buffer size).
#[derive(Debug, Parser)]
#[command(name = "cache-plotter", version, about)]
struct Cli {
    /// Benchmark output: three header lines, then `<size> ... <cycles>` per line.
    #[arg(long)]
    filename: PathBuf,

    /// PNG to write; replaced if it exists.
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = PlotConfig::with_output(cli.output);

    plotter::process_file_to(&cli.filename, &config)
        .with_context(|| format!("plotting {}", cli.filename.display()))
}
