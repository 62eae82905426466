use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

use super::model::Measurements;

/// Lines at the top of every benchmark file that are skipped unread.
pub const HEADER_LINES: usize = 3;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load measurements from a benchmark output file.
///
/// The file is closed again before this returns, whether or not parsing
/// succeeded.
pub fn load_file(path: &Path) -> Result<Measurements> {
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let measurements = read_measurements(BufReader::new(file))?;

    log::debug!(
        "Read {} measurements from {}",
        measurements.len(),
        path.display()
    );
    Ok(measurements)
}

/// Layout:
///
/// ```text
/// <header line 1>            ─┐
/// <header line 2>             │ ignored, whatever they contain
/// <header line 3>            ─┘
/// <size> [...] <cycles>
/// <size> [...] <cycles>
/// ```
///
/// Tokens are separated by any run of whitespace. Only the first and the
/// last token of a data line are used. Blank lines are skipped.
pub fn read_measurements<R: BufRead>(reader: R) -> Result<Measurements> {
    let mut measurements = Measurements::new();

    for (index, line) in reader.lines().enumerate().skip(HEADER_LINES) {
        let line = line.map_err(Error::Read)?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let (size, cycles) = parse_line(trimmed, index + 1)?;
        measurements.push(size, cycles);
    }

    Ok(measurements)
}

// ---------------------------------------------------------------------------
// Line parsing
// ---------------------------------------------------------------------------

fn parse_line(line: &str, line_no: usize) -> Result<(f64, f64)> {
    let mut tokens = line.split_whitespace();
    let (first, last) = match (tokens.next(), tokens.next_back()) {
        (Some(first), Some(last)) => (first, last),
        (first, _) => {
            return Err(Error::MissingColumns {
                line: line_no,
                found: usize::from(first.is_some()),
            })
        }
    };

    let size = parse_value(first, line_no, "size")?;
    let cycles = parse_value(last, line_no, "cycles")?;
    Ok((size, cycles))
}

fn parse_value(token: &str, line_no: usize, column: &'static str) -> Result<f64> {
    token
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| Error::InvalidNumber {
            line: line_no,
            column,
            token: token.to_string(),
        })
}
