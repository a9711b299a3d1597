//! # Derived Views
//!
//! Views computed from the reshaped matrix for display:
//!
//! - **Enhanced matrix**: elementwise `x^(1/power)`, compressing the dynamic
//!   range so low-intensity second-dimension peaks become visible
//! - **Extracted 2D chromatogram**: one matrix column, picked by a
//!   first-dimension time
//! - **Projected 1D chromatogram**: the sum of each column, which
//!   reconstructs the conventional 1D trace at modulation resolution
//!
//! ## Negative Signal
//!
//! A fractional power of a negative number has no real value. Detector
//! signals dip below zero after baseline offsets, so [`enhance`] applies
//! [`NegativePolicy::SignPreserving`]: `sign(x) * |x|^(1/power)`. Zero stays
//! zero under every policy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::axes::AxisCoordinates;
use crate::error::InvalidParameterError;
use crate::matrix::Matrix2D;

/// How [`enhance_with`] treats negative values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NegativePolicy {
    /// `sign(x) * |x|^(1/power)`
    #[default]
    SignPreserving,
    /// Negative values become 0
    ClampToZero,
    /// Negative values become NaN
    Nan,
}

impl NegativePolicy {
    /// Returns all available policy names.
    pub fn variants() -> &'static [&'static str] {
        &["sign-preserving", "clamp-to-zero", "nan"]
    }

    fn apply(&self, value: f64, exponent: f64) -> f64 {
        if value >= 0.0 {
            return value.powf(exponent);
        }
        match self {
            NegativePolicy::SignPreserving => -(-value).powf(exponent),
            NegativePolicy::ClampToZero => 0.0,
            NegativePolicy::Nan => f64::NAN,
        }
    }
}

impl fmt::Display for NegativePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NegativePolicy::SignPreserving => write!(f, "sign-preserving"),
            NegativePolicy::ClampToZero => write!(f, "clamp-to-zero"),
            NegativePolicy::Nan => write!(f, "nan"),
        }
    }
}

impl FromStr for NegativePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sign-preserving" => Ok(NegativePolicy::SignPreserving),
            "clamp-to-zero" | "clamp" => Ok(NegativePolicy::ClampToZero),
            "nan" => Ok(NegativePolicy::Nan),
            _ => Err(format!(
                "Unknown negative policy '{}'. Valid options: {}",
                s,
                NegativePolicy::variants().join(", ")
            )),
        }
    }
}

/// Elementwise `x^(1/power)` with the default [`NegativePolicy`].
pub fn enhance(matrix: &Matrix2D, power: f64) -> Result<Matrix2D, InvalidParameterError> {
    enhance_with(matrix, power, NegativePolicy::default())
}

/// Elementwise `x^(1/power)` with an explicit negative-value policy.
///
/// `power = 1` returns the matrix unchanged.
pub fn enhance_with(
    matrix: &Matrix2D,
    power: f64,
    policy: NegativePolicy,
) -> Result<Matrix2D, InvalidParameterError> {
    if !(power.is_finite() && power > 0.0) {
        return Err(InvalidParameterError::NonPositivePower(power));
    }
    if power == 1.0 {
        return Ok(matrix.clone());
    }
    let exponent = 1.0 / power;
    Ok(matrix.map(|x| policy.apply(x, exponent)))
}

/// Column index for first-dimension time `time_value`:
/// `round(time_value / runtime * ncols)` clamped to the last column.
pub fn slice_index(
    matrix: &Matrix2D,
    axes: &AxisCoordinates,
    time_value: f64,
) -> Result<usize, InvalidParameterError> {
    let runtime = axes.runtime;
    if !(0.0..=runtime).contains(&time_value) {
        return Err(InvalidParameterError::SliceTimeOutOfRange {
            time: time_value,
            runtime,
        });
    }
    let ncols = matrix.first_dimension_len();
    let index = (time_value / runtime * ncols as f64).round_ties_even() as usize;
    Ok(index.min(ncols.saturating_sub(1)))
}

/// Extract the 2D chromatogram (matrix column) nearest to `time_value` minutes.
pub fn extract_slice(
    matrix: &Matrix2D,
    axes: &AxisCoordinates,
    time_value: f64,
) -> Result<Vec<f64>, InvalidParameterError> {
    let index = slice_index(matrix, axes, time_value)?;
    Ok(matrix.column(index).unwrap_or_default())
}

/// Sum over the second dimension for each first-dimension index.
pub fn project(matrix: &Matrix2D) -> Vec<f64> {
    matrix.column_sums()
}
