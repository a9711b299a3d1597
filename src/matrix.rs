//! # Matrix Module
//!
//! Padding and reshaping of the flat detector signal into the GCxGC matrix.
//!
//! The signal is a concatenation of second-dimension separations, one per
//! modulation cycle. It is padded to a whole number of cycles, filled
//! row-major into a `rows × columns` grid (one row per cycle) and transposed:
//!
//! ```text
//! signal: s0 s1 s2 s3 s4 s5 s6 [p p]      columns = 3, rows = 3, padding = 2
//!
//! row-major            transposed (heatmap)
//! s0 s1 s2             s0 s3 s6      <- second-dimension index 0
//! s3 s4 s5      =>     s1 s4 p
//! s6 p  p              s2 s5 p
//!                      ^ first-dimension index (cycle)
//! ```
//!
//! Padding values are the mean of the last [`PADDING_WINDOW`] real samples,
//! so the filled tail sits at the baseline level of the end of the run.

use log::debug;
use ndarray::{Array2, Axis};

use crate::error::InvalidParameterError;
use crate::grid::GridShape;

/// Number of trailing samples averaged to produce padding values.
pub const PADDING_WINDOW: usize = 21;

/// The reshaped signal: rows index second-dimension time, columns index
/// first-dimension time (modulation cycle).
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix2D {
    data: Array2<f64>,
    padding: usize,
}

impl Matrix2D {
    /// Wrap an existing `second dimension × first dimension` array with no padding.
    pub fn from_array(data: Array2<f64>) -> Self {
        Self { data, padding: 0 }
    }

    /// `(second-dimension extent, first-dimension extent)`
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Number of matrix rows (samples per modulation cycle).
    pub fn second_dimension_len(&self) -> usize {
        self.data.nrows()
    }

    /// Number of matrix columns (modulation cycles).
    pub fn first_dimension_len(&self) -> usize {
        self.data.ncols()
    }

    /// Number of trailing synthetic samples in the last column.
    pub fn padding(&self) -> usize {
        self.padding
    }

    /// Borrow the underlying array.
    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    /// Consume the matrix and return the underlying array.
    pub fn into_array(self) -> Array2<f64> {
        self.data
    }

    /// Value at second-dimension index `row` and first-dimension index `column`.
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.data.get((row, column)).copied()
    }

    /// One first-dimension column (an extracted 2D chromatogram).
    pub fn column(&self, index: usize) -> Option<Vec<f64>> {
        (index < self.first_dimension_len())
            .then(|| self.data.column(index).to_vec())
    }

    /// Matrix rows in heatmap order (one vector per second-dimension index).
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    /// Column-wise sums over the second dimension.
    pub fn column_sums(&self) -> Vec<f64> {
        self.data.sum_axis(Axis(0)).to_vec()
    }

    /// Largest finite value, if any.
    pub fn max(&self) -> Option<f64> {
        self.data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .reduce(f64::max)
    }

    /// Undo the transpose and strip padding, recovering the original signal.
    pub fn unpadded_signal(&self) -> Vec<f64> {
        let real = self.data.len() - self.padding;
        self.data.t().iter().copied().take(real).collect()
    }

    /// Apply `f` to every element, keeping the padding count.
    pub(crate) fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            data: self.data.mapv(f),
            padding: self.padding,
        }
    }
}

/// Mean of the last [`PADDING_WINDOW`] samples, or of every sample when the
/// signal is shorter than the window. `None` for an empty signal.
pub fn padding_value(signal: &[f64]) -> Option<f64> {
    let tail = &signal[signal.len().saturating_sub(PADDING_WINDOW)..];
    if tail.is_empty() {
        return None;
    }
    Some(tail.iter().sum::<f64>() / tail.len() as f64)
}

/// Extend `signal` to exactly `shape.len()` samples with [`padding_value`].
pub fn pad_signal(signal: &[f64], shape: &GridShape) -> Result<Vec<f64>, InvalidParameterError> {
    let numpoints = signal.len();
    let mismatch = || InvalidParameterError::ShapeMismatch {
        signal_len: numpoints,
        rows: shape.rows,
        columns: shape.columns,
    };

    let total = shape.checked_len().ok_or_else(mismatch)?;
    if shape.columns == 0 || numpoints > total {
        return Err(mismatch());
    }
    let extra = total - numpoints;
    if extra >= shape.columns {
        return Err(mismatch());
    }

    let mut padded = Vec::with_capacity(total);
    padded.extend_from_slice(signal);
    if extra > 0 {
        let fill = padding_value(signal).ok_or_else(mismatch)?;
        debug!("Padding signal with {} samples of {}", extra, fill);
        padded.resize(total, fill);
    }
    Ok(padded)
}

/// Pad `signal` to fill `shape`, reshape row-major into `rows × columns`
/// and transpose so that the result is `columns × rows`.
pub fn pad_and_reshape(
    signal: &[f64],
    shape: &GridShape,
) -> Result<Matrix2D, InvalidParameterError> {
    let padded = pad_signal(signal, shape)?;
    let padding = padded.len() - signal.len();

    let data = Array2::from_shape_vec((shape.rows, shape.columns), padded).map_err(|_| {
        InvalidParameterError::ShapeMismatch {
            signal_len: signal.len(),
            rows: shape.rows,
            columns: shape.columns,
        }
    })?;

    Ok(Matrix2D {
        data: data.reversed_axes(),
        padding,
    })
}
