//! Grid geometry for the reshaped signal.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::acquisition::AcquisitionParameters;
use crate::error::InvalidParameterError;

/// Row-major layout of the padded signal before transposition.
///
/// `columns` is the number of samples in one modulation cycle and `rows` the
/// number of cycles. After transposition the heatmap has `columns` rows
/// (second dimension) and `rows` columns (first dimension).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridShape {
    /// Modulation cycles (first-dimension extent)
    pub rows: usize,

    /// Samples per modulation cycle (second-dimension extent)
    pub columns: usize,
}

impl GridShape {
    /// Build the smallest grid with `columns` per row that holds `numpoints`.
    pub fn for_points(numpoints: usize, columns: usize) -> Result<Self, InvalidParameterError> {
        if columns == 0 {
            return Err(InvalidParameterError::DegenerateGrid {
                modulation_period: 0.0,
                rate: 0,
                columns: 0.0,
            });
        }
        let rows = numpoints.div_ceil(columns);
        let shape = Self { rows, columns };
        if shape.checked_len().is_none() {
            return Err(InvalidParameterError::ShapeMismatch {
                signal_len: numpoints,
                rows,
                columns,
            });
        }
        Ok(shape)
    }

    /// Total number of cells, `rows * columns`, or `None` on overflow.
    pub fn checked_len(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns)
    }

    /// Total number of cells, `rows * columns` (saturating).
    pub fn len(&self) -> usize {
        self.rows.saturating_mul(self.columns)
    }

    /// Whether the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of synthetic samples needed to fill the grid from `numpoints`.
    pub fn padding_for(&self, numpoints: usize) -> usize {
        self.len().saturating_sub(numpoints)
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Reported the way the heatmap is laid out: second dimension first.
        write!(f, "{} x {}", self.columns, self.rows)
    }
}

/// Compute `columns = round(modulation_period * rate)` and
/// `rows = ceil(numpoints / columns)`.
///
/// A cycle longer than the whole trace is rejected: it could only produce a
/// single column made mostly of padding.
pub fn compute_grid_shape(
    params: &AcquisitionParameters,
) -> Result<GridShape, InvalidParameterError> {
    let columns = params.samples_per_cycle().round_ties_even();
    if columns.is_nan() || columns < 1.0 {
        return Err(InvalidParameterError::DegenerateGrid {
            modulation_period: params.modulation_period,
            rate: params.rate,
            columns,
        });
    }
    if columns > params.numpoints as f64 {
        return Err(InvalidParameterError::CycleExceedsTrace {
            modulation_period: params.modulation_period,
            columns,
            numpoints: params.numpoints,
        });
    }
    GridShape::for_points(params.numpoints, columns as usize)
}
