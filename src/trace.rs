//! # Trace Module
//!
//! Reading of raw one-dimensional detector traces as exported by GC data
//! systems (for example an Agilent `.ch` file exported to CSV by ChemStation).
//!
//! ## Input Layout
//!
//! ```text
//! Time (min),Signal (pA)        <- column-name line
//! <metadata row>                <- discarded
//! <metadata row>                <- discarded
//! 0.0000,12.31                  <- first sample
//! 0.0017,12.29
//! ...
//! ```
//!
//! The first [`HEADER_ROWS`] rows are never interpreted: the column-name line
//! plus [`DISCARDED_ROWS`] further rows are dropped unconditionally. Column 0
//! is time in minutes, column 1 is the detector signal; any further columns
//! are ignored.

mod error;
mod reader;

#[cfg(test)]
mod tests;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub use error::ParseError;
pub use reader::{parse_trace, TraceReaderConfig};

/// Rows dropped after the column-name line before samples begin.
pub const DISCARDED_ROWS: usize = 2;

/// Total header rows at the top of every trace export.
pub const HEADER_ROWS: usize = 1 + DISCARDED_ROWS;

/// Minimum number of samples a trace must contain.
pub const MIN_SAMPLES: usize = 2;

/// A raw 1D detector trace: strictly increasing time (minutes) and signal.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTrace {
    time: Vec<f64>,
    signal: Vec<f64>,
}

impl RawTrace {
    /// Build a trace from parallel time and signal vectors.
    ///
    /// Rows in errors are reported as 1-based sample indices.
    pub fn new(time: Vec<f64>, signal: Vec<f64>) -> Result<Self, ParseError> {
        if time.len() != signal.len() {
            return Err(ParseError::ArrayLengthMismatch {
                time_len: time.len(),
                signal_len: signal.len(),
            });
        }
        for (i, (t, s)) in time.iter().zip(&signal).enumerate() {
            for (column, value) in [(0, t), (1, s)] {
                if !value.is_finite() {
                    return Err(ParseError::InvalidNumber {
                        row: i + 1,
                        column,
                        value: value.to_string(),
                    });
                }
            }
        }
        check_samples(&time, |i| i + 1)?;
        Ok(Self { time, signal })
    }

    /// Assemble an already-validated trace.
    pub(crate) fn from_parts(time: Vec<f64>, signal: Vec<f64>) -> Self {
        Self { time, signal }
    }

    /// Parse a trace export from a file path using the default layout.
    pub fn from_csv_file<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        Self::from_csv_file_with(path, &TraceReaderConfig::default())
    }

    /// Parse a trace export from a file path with an explicit reader configuration.
    pub fn from_csv_file_with<P: AsRef<Path>>(
        path: P,
        config: &TraceReaderConfig,
    ) -> Result<Self, ParseError> {
        let file = File::open(path)?;
        config.parse(BufReader::new(file))
    }

    /// Parse a trace export from any reader using the default layout.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ParseError> {
        parse_trace(reader)
    }

    /// Number of samples (`numpoints`).
    pub fn len(&self) -> usize {
        self.signal.len()
    }

    /// Whether the trace holds no samples. Never true for a parsed trace.
    pub fn is_empty(&self) -> bool {
        self.signal.is_empty()
    }

    /// Time values in minutes
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Detector signal values
    pub fn signal(&self) -> &[f64] {
        &self.signal
    }

    /// Last time value in minutes.
    pub fn runtime(&self) -> f64 {
        self.time.last().copied().unwrap_or(0.0)
    }

    /// Iterate over `(time, signal)` pairs.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time.iter().copied().zip(self.signal.iter().copied())
    }
}

/// Check sample count and strict time ordering. `row_of` maps a sample index
/// to the row number reported in errors.
pub(crate) fn check_samples(
    time: &[f64],
    row_of: impl Fn(usize) -> usize,
) -> Result<(), ParseError> {
    if time.len() < MIN_SAMPLES {
        return Err(ParseError::TooFewSamples(time.len()));
    }
    for (i, pair) in time.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(ParseError::NonMonotonicTime {
                row: row_of(i + 1),
                time: pair[1],
                previous: pair[0],
            });
        }
    }
    Ok(())
}
