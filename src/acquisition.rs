//! Acquisition parameters derived from a raw trace.
//!
//! The trace time column is in **minutes** while the modulation period and
//! the acquisition rate are in **seconds**. The rate is therefore
//! `numpoints / runtime / 60`, rounded to the nearest whole number of
//! samples per second. Halfway cases round to even.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::InvalidParameterError;
use crate::trace::RawTrace;

/// Seconds in one minute of trace time.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Scalar acquisition settings for one reshaping request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcquisitionParameters {
    /// Number of samples in the trace
    pub numpoints: usize,

    /// Last time value of the trace, in minutes
    pub runtime: f64,

    /// Samples per second, rounded to the nearest integer
    pub rate: usize,

    /// Seconds per second-dimension cycle
    pub modulation_period: f64,
}

impl AcquisitionParameters {
    /// Unrounded samples per second implied by `numpoints` and `runtime`.
    pub fn exact_rate(&self) -> f64 {
        exact_rate(self.numpoints, self.runtime)
    }

    /// Unrounded samples per modulation cycle (`modulation_period * rate`).
    pub fn samples_per_cycle(&self) -> f64 {
        self.modulation_period * self.rate as f64
    }
}

/// Derive `numpoints`, `runtime` and `rate` from a trace and pair them with
/// the requested modulation period.
pub fn derive_acquisition_parameters(
    trace: &RawTrace,
    modulation_period: f64,
) -> Result<AcquisitionParameters, InvalidParameterError> {
    let numpoints = trace.len();
    let runtime = trace.runtime();

    if !(runtime.is_finite() && runtime > 0.0) {
        return Err(InvalidParameterError::NonPositiveRuntime(runtime));
    }
    if !(modulation_period.is_finite() && modulation_period > 0.0) {
        return Err(InvalidParameterError::NonPositiveModulationPeriod(
            modulation_period,
        ));
    }

    let rate = exact_rate(numpoints, runtime).round_ties_even();
    if rate < 1.0 {
        return Err(InvalidParameterError::ZeroAcquisitionRate { numpoints, runtime });
    }
    let rate = rate as usize;

    debug!(
        "Found {} data points, runtime {} min, acquisition rate {} Hz",
        numpoints, runtime, rate
    );

    Ok(AcquisitionParameters {
        numpoints,
        runtime,
        rate,
        modulation_period,
    })
}

fn exact_rate(numpoints: usize, runtime: f64) -> f64 {
    numpoints as f64 / runtime / SECONDS_PER_MINUTE
}
