use std::io;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Everything that can go wrong between reading a measurement file and
/// writing the finished plot.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read measurement data")]
    Read(#[source] io::Error),

    #[error("cannot write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A data line had fewer than the two columns (size, cycles) we need.
    #[error("line {line}: expected at least 2 columns, found {found}")]
    MissingColumns { line: usize, found: usize },

    #[error("line {line}: {column} value '{token}' is not a finite number")]
    InvalidNumber {
        line: usize,
        column: &'static str,
        token: String,
    },

    #[error("no measurements found after the header")]
    NoData,

    /// The values are finite but the axis around them is not representable.
    #[error("{axis} values from {min} to {max} span too wide a range to plot")]
    AxisOverflow {
        axis: &'static str,
        min: f64,
        max: f64,
    },

    #[error("failed to draw chart: {0}")]
    Render(String),

    #[error("failed to encode PNG")]
    Encode(#[from] png::EncodingError),

    #[error("embedded font could not be registered")]
    Font,
}

pub type Result<T> = std::result::Result<T, Error>;
