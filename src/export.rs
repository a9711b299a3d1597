//! # Export Module
//!
//! Hands a [`Reconstruction`](crate::pipeline::Reconstruction) to an external
//! renderer, either as one JSON bundle or as a set of CSV tables.
//!
//! ## JSON Bundle
//!
//! ```json
//! {
//!   "provenance": {
//!     "software": "gcxgc", "version": "0.1.0", "generated_at": "...", "source": "run.csv"
//!   },
//!   "parameters": { "numpoints": 6000, "runtime": 10.0, "rate": 10, "modulation_period": 3.0 },
//!   "shape": { "rows": 200, "columns": 30 },
//!   "heatmap": {
//!     "x": [...], "y": [...], "z": [[...], ...],
//!     "colorscale": "rainbow", "smoothing": true, "power": 10.0
//!   },
//!   "slice": { "time": 0.0, "index": 0, "x": [...], "y": [...] },
//!   "projection": { "x": [...], "y": [...], "marker": { "x": 0.0, "y_max": 1234.5 } }
//! }
//! ```
//!
//! ## CSV Tables
//!
//! | File | Layout |
//! |------|--------|
//! | `heatmap.csv` | header row of first-dimension times, then one row per second-dimension time |
//! | `slice.csv` | `second_dimension_s,signal` |
//! | `projection.csv` | `first_dimension_min,signal` |

mod bundle;
mod tables;


pub use bundle::{
    write_json, HeatmapView, Provenance, ProjectionMarker, ProjectionView, RenderBundle,
    SliceView,
};
pub use tables::{
    write_csv_tables, write_heatmap_csv, write_projection_csv, write_slice_csv, HEATMAP_FILE,
    PROJECTION_FILE, SLICE_FILE,
};

use std::fmt;
use std::str::FromStr;

/// Errors that can occur while exporting a reconstruction
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// I/O error writing output
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV writing error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Output format for exported reconstructions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Single JSON bundle
    #[default]
    Json,
    /// Directory of CSV tables
    Csv,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(format!("Unknown export format '{}'. Valid options: json, csv", s)),
        }
    }
}
