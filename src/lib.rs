//! # gcxgc - GCxGC Reconstruction from 1D Detector Traces
//!
//! `gcxgc` turns the flat detector trace of a comprehensive two-dimensional
//! gas chromatography (GCxGC) run into the 2D representation analysts read:
//! a heatmap of first-dimension against second-dimension retention time.
//!
//! ## Key Features
//!
//! - **Trace Parsing**: Reads CSV/TSV exports with a fixed three-row header
//!   and validates sample ordering.
//!
//! - **Reshaping**: Derives the acquisition rate from the trace, pads the
//!   signal to a whole number of modulation cycles and reshapes it into a
//!   matrix with one column per cycle.
//!
//! - **Views**: Contrast enhancement by fractional power, extracted 2D
//!   chromatograms at a chosen first-dimension time and the projected 1D
//!   chromatogram.
//!
//! - **Export**: JSON render bundles and CSV tables for external plotting.
//!
//! - **Diagnostics**: A validation report explaining distorted heatmaps
//!   (irregular sampling, fractional cycles, heavy padding).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gcxgc::prelude::*;
//!
//! let trace = RawTrace::from_csv_file("run.csv")?;
//!
//! let request = ReconstructRequest::new(Preset::Gasoline)
//!     .with_power(10.0)
//!     .with_slice_time(12.5);
//! let result = reconstruct(&trace, &request)?;
//!
//! println!(
//!     "{} cycles of {} samples",
//!     result.matrix.first_dimension_len(),
//!     result.matrix.second_dimension_len()
//! );
//!
//! let bundle = RenderBundle::new(&result, false, Provenance::now(None));
//! std::fs::write("run.json", bundle.to_json(true)?)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Stages
//!
//! Each stage is also available on its own:
//!
//! ```rust
//! use gcxgc::prelude::*;
//!
//! let time: Vec<f64> = (0..6000).map(|i| 10.0 * i as f64 / 5999.0).collect();
//! let trace = RawTrace::new(time, vec![1.0; 6000])?;
//!
//! let params = derive_acquisition_parameters(&trace, 3.0)?;
//! let shape = compute_grid_shape(&params)?;
//! let matrix = pad_and_reshape(trace.signal(), &shape)?;
//! let axes = build_axes(&matrix, params.runtime, params.modulation_period)?;
//!
//! assert_eq!(params.rate, 10);
//! assert_eq!(axes.first_dimension_len(), 200);
//! assert_eq!(project(&matrix).len(), 200);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod acquisition;
pub mod axes;
pub mod colorscale;
pub mod error;
pub mod export;
pub mod grid;
pub mod matrix;
pub mod pipeline;
pub mod preset;
pub mod trace;
pub mod validator;
pub mod views;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::acquisition::{derive_acquisition_parameters, AcquisitionParameters};
    pub use crate::axes::{build_axes, AxisCoordinates};
    pub use crate::colorscale::Colorscale;
    pub use crate::error::InvalidParameterError;
    pub use crate::export::{
        write_csv_tables, write_json, ExportError, ExportFormat, Provenance, RenderBundle,
    };
    pub use crate::grid::{compute_grid_shape, GridShape};
    pub use crate::matrix::{pad_and_reshape, Matrix2D};
    pub use crate::pipeline::{
        reconstruct, reconstruct_file, ReconstructError, ReconstructRequest, Reconstruction,
    };
    pub use crate::preset::{ModulationPeriod, Preset};
    pub use crate::trace::{parse_trace, ParseError, RawTrace, TraceReaderConfig};
    pub use crate::validator::{validate_trace, ValidationReport};
    pub use crate::views::{enhance, enhance_with, extract_slice, project, NegativePolicy};
}
