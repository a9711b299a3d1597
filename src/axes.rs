//! Axis coordinates for the reshaped matrix.

use serde::{Deserialize, Serialize};

use crate::error::InvalidParameterError;
use crate::matrix::Matrix2D;

/// Coordinates for both heatmap axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisCoordinates {
    /// First-dimension retention time for each matrix column, in minutes
    pub first_dimension: Vec<f64>,

    /// Second-dimension retention time for each matrix row, in seconds
    pub second_dimension: Vec<f64>,

    /// Upper bound of the first-dimension axis (trace runtime, minutes)
    pub runtime: f64,

    /// Upper bound of the second-dimension axis (modulation period, seconds)
    pub modulation_period: f64,
}

impl AxisCoordinates {
    /// Number of first-dimension points.
    pub fn first_dimension_len(&self) -> usize {
        self.first_dimension.len()
    }

    /// Number of second-dimension points.
    pub fn second_dimension_len(&self) -> usize {
        self.second_dimension.len()
    }
}

/// `count` evenly spaced values over `[0, stop)`.
///
/// Each value is computed from its index so the length is always `count`,
/// whatever rounding the step carries.
pub fn evenly_spaced(stop: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let step = stop / count as f64;
    (0..count).map(|i| i as f64 * step).collect()
}

/// Build axes for `matrix`: first dimension over `[0, runtime)` with one
/// point per column, second dimension over `[0, modulation_period)` with one
/// point per row.
pub fn build_axes(
    matrix: &Matrix2D,
    runtime: f64,
    modulation_period: f64,
) -> Result<AxisCoordinates, InvalidParameterError> {
    if !(runtime.is_finite() && runtime > 0.0) {
        return Err(InvalidParameterError::NonPositiveRuntime(runtime));
    }
    if !(modulation_period.is_finite() && modulation_period > 0.0) {
        return Err(InvalidParameterError::NonPositiveModulationPeriod(
            modulation_period,
        ));
    }

    Ok(AxisCoordinates {
        first_dimension: evenly_spaced(runtime, matrix.first_dimension_len()),
        second_dimension: evenly_spaced(modulation_period, matrix.second_dimension_len()),
        runtime,
        modulation_period,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn test_evenly_spaced_excludes_stop() {
        assert_eq!(evenly_spaced(1.0, 4), vec![0.0, 0.25, 0.5, 0.75]);
        assert!(evenly_spaced(3.0, 0).is_empty());
    }

    #[test]
    fn test_evenly_spaced_exact_length_with_inexact_step() {
        for count in 1..500 {
            let axis = evenly_spaced(0.9, count);
            assert_eq!(axis.len(), count);
            assert!(axis[count - 1] < 0.9);
        }
    }

    #[test]
    fn test_axes_match_matrix() {
        let matrix = Matrix2D::from_array(Array2::zeros((30, 400)));
        let axes = build_axes(&matrix, 20.0, 3.0).unwrap();

        assert_eq!(axes.first_dimension_len(), 400);
        assert_eq!(axes.second_dimension_len(), 30);
        assert_eq!(axes.first_dimension[1], 0.05);
        assert_eq!(axes.second_dimension[1], 0.1);
        assert_eq!(axes.runtime, 20.0);
        assert_eq!(axes.modulation_period, 3.0);
    }

    #[test]
    fn test_rejects_invalid_bounds() {
        let matrix = Matrix2D::from_array(Array2::zeros((2, 2)));
        assert!(matches!(
            build_axes(&matrix, 0.0, 3.0),
            Err(InvalidParameterError::NonPositiveRuntime(_))
        ));
        assert!(matches!(
            build_axes(&matrix, 1.0, -3.0),
            Err(InvalidParameterError::NonPositiveModulationPeriod(_))
        ));
    }
}
