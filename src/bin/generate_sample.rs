use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use cache_plotter::data::sample::{write_sample, CacheProfile};

/// Write a synthetic cache benchmark file in the benchmark's own format.
#[derive(Debug, Parser)]
#[command(name = "generate_sample", version, about)]
struct Args {
    /// Destination text file.
    #[arg(default_value = "sample_measurements.txt")]
    output: PathBuf,

    /// Seed for the measurement noise.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let rows = write_sample(BufWriter::new(file), &CacheProfile::default(), args.seed)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!(
        "Wrote {rows} measurements (seed {}) to {}",
        args.seed,
        args.output.display()
    );
    Ok(())
}
