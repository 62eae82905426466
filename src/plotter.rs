use std::path::Path;

use crate::config::PlotConfig;
use crate::data::loader;
use crate::data::model::Measurements;
use crate::error::Result;
use crate::plot::Figure;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read `filename` and write the plot to the default output path.
pub fn process_file(filename: impl AsRef<Path>) -> Result<()> {
    process_file_to(filename, &PlotConfig::default())
}

/// Read `filename` and write the plot described by `config`.
pub fn process_file_to(filename: impl AsRef<Path>, config: &PlotConfig) -> Result<()> {
    let path = filename.as_ref();
    let measurements = loader::load_file(path)?;
    log::info!(
        "Loaded {} measurements from {}",
        measurements.len(),
        path.display()
    );

    plot(&measurements, config)?.save(&config.output)
}

/// Build a figure for `measurements` without touching the filesystem.
pub fn plot(measurements: &Measurements, config: &PlotConfig) -> Result<Figure> {
    let mut figure = Figure::new(config.clone());
    figure.plot(measurements)?;
    Ok(figure)
}
