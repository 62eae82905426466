use std::path::PathBuf;

/// Where the plot lands when no output path is given.
pub const DEFAULT_OUTPUT: &str = "time_vs_size_of_buffer.png";

pub const DEFAULT_DPI: u32 = 400;

// ---------------------------------------------------------------------------
// Plot configuration
// ---------------------------------------------------------------------------

/// Everything about the produced image that is not the data itself.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// Destination PNG, overwritten if it exists.
    pub output: PathBuf,
    /// Resolution; pixel size is `inches × dpi`.
    pub dpi: u32,
    /// Figure width in inches.
    pub width_in: f64,
    /// Figure height in inches.
    pub height_in: f64,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            dpi: DEFAULT_DPI,
            width_in: 6.4,
            height_in: 4.8,
            title: "Cache size measurement".to_string(),
            x_label: "Size of buffer".to_string(),
            y_label: "Time in cycles".to_string(),
        }
    }
}

impl PlotConfig {
    /// Default configuration writing to `output`.
    pub fn with_output(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            ..Self::default()
        }
    }

    /// Image size in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        (
            (self.width_in * dpi).round().max(1.0) as u32,
            (self.height_in * dpi).round().max(1.0) as u32,
        )
    }
}
