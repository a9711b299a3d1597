//! # Reconstruction Pipeline
//!
//! Runs every reshaping stage for one request:
//!
//! ```text
//! RawTrace ─► AcquisitionParameters ─► GridShape ─► Matrix2D
//!
//! Matrix2D ─┬─► AxisCoordinates
//!           ├─► enhanced Matrix2D
//!           ├─► extracted slice
//!           └─► projection
//! ```
//!
//! The result is either a complete [`Reconstruction`] or an error; no stage
//! output is returned on its own. Nothing is cached between calls: a caller
//! changing any parameter calls [`reconstruct`] again.
//!
//! ```rust
//! use gcxgc::pipeline::{reconstruct, ReconstructRequest};
//! use gcxgc::preset::Preset;
//! use gcxgc::trace::RawTrace;
//!
//! // Ten minutes at 10 Hz
//! let time: Vec<f64> = (0..6000).map(|i| 10.0 * i as f64 / 5999.0).collect();
//! let signal = vec![1.0; 6000];
//! let trace = RawTrace::new(time, signal)?;
//!
//! let request = ReconstructRequest::new(Preset::Gasoline).with_power(4.0);
//! let result = reconstruct(&trace, &request)?;
//! assert_eq!(result.matrix.shape(), (30, 200));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::path::Path;

use log::info;

use crate::acquisition::{derive_acquisition_parameters, AcquisitionParameters};
use crate::axes::{build_axes, AxisCoordinates};
use crate::colorscale::Colorscale;
use crate::error::InvalidParameterError;
use crate::grid::{compute_grid_shape, GridShape};
use crate::matrix::{pad_and_reshape, Matrix2D};
use crate::preset::ModulationPeriod;
use crate::trace::{ParseError, RawTrace};
use crate::views::{enhance_with, project, slice_index, NegativePolicy};

/// Enhancement power used when none is chosen.
pub const DEFAULT_POWER: f64 = 10.0;

/// Errors from a full reconstruction
#[derive(Debug, thiserror::Error)]
pub enum ReconstructError {
    /// The trace file could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// A parameter is out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(#[from] InvalidParameterError),
}

/// User-chosen parameters for one reconstruction.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconstructRequest {
    /// Modulation period (explicit seconds or a preset)
    pub modulation_period: ModulationPeriod,

    /// Enhancement exponent; the heatmap shows `x^(1/power)`
    pub power: f64,

    /// First-dimension time of the extracted 2D chromatogram, in minutes
    pub slice_time: f64,

    /// Heatmap colorscale hint
    pub colorscale: Colorscale,

    /// Heatmap smoothing hint
    pub smoothing: bool,

    /// Treatment of negative values during enhancement
    pub negative_policy: NegativePolicy,
}

impl ReconstructRequest {
    /// Request with default display settings for the given modulation period.
    pub fn new(modulation_period: impl Into<ModulationPeriod>) -> Self {
        Self {
            modulation_period: modulation_period.into(),
            power: DEFAULT_POWER,
            slice_time: 0.0,
            colorscale: Colorscale::default(),
            smoothing: true,
            negative_policy: NegativePolicy::default(),
        }
    }

    /// Set the enhancement power
    pub fn with_power(mut self, power: f64) -> Self {
        self.power = power;
        self
    }

    /// Set the extracted-slice time in minutes
    pub fn with_slice_time(mut self, slice_time: f64) -> Self {
        self.slice_time = slice_time;
        self
    }

    /// Set the colorscale hint
    pub fn with_colorscale(mut self, colorscale: Colorscale) -> Self {
        self.colorscale = colorscale;
        self
    }

    /// Enable or disable the smoothing hint
    pub fn with_smoothing(mut self, smoothing: bool) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Set the negative-value policy
    pub fn with_negative_policy(mut self, policy: NegativePolicy) -> Self {
        self.negative_policy = policy;
        self
    }
}

/// Every array the renderer needs, computed consistently from one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconstruction {
    /// Derived acquisition parameters
    pub params: AcquisitionParameters,

    /// Row-major grid the signal was reshaped into
    pub shape: GridShape,

    /// Reshaped, transposed signal
    pub matrix: Matrix2D,

    /// Enhanced matrix for the heatmap
    pub enhanced: Matrix2D,

    /// Exponent `enhanced` was computed with
    pub power: f64,

    /// Heatmap axes
    pub axes: AxisCoordinates,

    /// Requested slice time in minutes (marker position on the projection)
    pub slice_time: f64,

    /// Matrix column the slice was taken from
    pub slice_index: usize,

    /// Extracted 2D chromatogram at `slice_time`, from the unenhanced matrix
    pub slice: Vec<f64>,

    /// Projected 1D chromatogram, from the unenhanced matrix
    pub projection: Vec<f64>,

    /// Colorscale hint
    pub colorscale: Colorscale,

    /// Smoothing hint
    pub smoothing: bool,
}

impl Reconstruction {
    /// Height of the slice marker line on the projection plot.
    pub fn projection_max(&self) -> f64 {
        self.projection
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max)
    }
}

/// Run the full pipeline on a parsed trace.
pub fn reconstruct(
    trace: &RawTrace,
    request: &ReconstructRequest,
) -> Result<Reconstruction, ReconstructError> {
    let modulation_period = request.modulation_period.seconds();

    let params = derive_acquisition_parameters(trace, modulation_period)?;
    info!("Found {} data points", params.numpoints);
    info!("Runtime is {} minutes", params.runtime);
    info!("Acquisition rate is {} Hz", params.rate);

    let shape = compute_grid_shape(&params)?;
    let matrix = pad_and_reshape(trace.signal(), &shape)?;
    info!("A {} array was created", shape);

    let axes = build_axes(&matrix, params.runtime, params.modulation_period)?;
    let enhanced = enhance_with(&matrix, request.power, request.negative_policy)?;
    let slice_index = slice_index(&matrix, &axes, request.slice_time)?;
    let slice = matrix.column(slice_index).unwrap_or_default();
    let projection = project(&matrix);

    Ok(Reconstruction {
        params,
        shape,
        matrix,
        enhanced,
        power: request.power,
        axes,
        slice_time: request.slice_time,
        slice_index,
        slice,
        projection,
        colorscale: request.colorscale,
        smoothing: request.smoothing,
    })
}

/// Parse a trace export and run the full pipeline on it.
pub fn reconstruct_file<P: AsRef<Path>>(
    path: P,
    request: &ReconstructRequest,
) -> Result<Reconstruction, ReconstructError> {
    let trace = RawTrace::from_csv_file(path)?;
    reconstruct(&trace, request)
}
