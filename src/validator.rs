//! # Trace Validation Module
//!
//! Diagnostics for a trace and a proposed modulation period, run before
//! reshaping to explain a distorted heatmap.
//!
//! ## Checklist
//!
//! 1. **Sample count**: enough samples for the padding window
//! 2. **Start time**: the rate formula assumes sampling from 0 min
//! 3. **Sampling uniformity**: time steps are evenly spaced
//! 4. **Acquisition rate**: runtime and rate are valid and rounding is small
//! 5. **Modulation alignment**: a cycle is close to a whole number of samples
//! 6. **Grid shape**: the grid is not degenerate
//! 7. **Padding**: the padded tail is a small share of the grid
//! 8. **Signal sign**: negative samples that enhancement has to handle
//!
//! Checks 5–7 are skipped when the acquisition rate cannot be derived.
//!
//! ```rust
//! use gcxgc::trace::RawTrace;
//! use gcxgc::validator::validate_trace;
//!
//! let time: Vec<f64> = (0..6000).map(|i| 10.0 * i as f64 / 5999.0).collect();
//! let trace = RawTrace::new(time, vec![1.0; 6000])?;
//!
//! let report = validate_trace(&trace, 3.0, "example");
//! assert!(!report.has_failures());
//! println!("{}", report);
//! # Ok::<(), gcxgc::trace::ParseError>(())
//! ```

mod checks;
mod report;


pub use checks::{
    MAX_CYCLE_DRIFT, MAX_PADDING_FRACTION, MAX_RATE_ROUNDING, MAX_START_FRACTION,
    MAX_STEP_DEVIATION,
};
pub use report::{Check, Finding, Outcome, ValidationReport, Verdict};

use log::debug;

use crate::trace::RawTrace;

/// Run every diagnostic check on `trace` with `modulation_period` seconds.
pub fn validate_trace(
    trace: &RawTrace,
    modulation_period: f64,
    source: impl Into<String>,
) -> ValidationReport {
    let mut report = ValidationReport::new(source, modulation_period);

    report.record(checks::check_sample_count(trace));
    report.record(checks::check_start_time(trace));
    report.record(checks::check_sampling_uniformity(trace));

    let (finding, params) = checks::check_acquisition(trace, modulation_period);
    report.record(finding);
    report.params = params;

    if let Some(params) = params {
        report.record(checks::check_modulation_alignment(&params));
        let (finding, shape) = checks::check_grid(&params);
        report.record(finding);
        report.shape = shape;
        if let Some(shape) = shape {
            report.record(checks::check_padding(&shape, params.numpoints));
        }
    }

    report.record(checks::check_signal_sign(trace));

    debug!(
        "Validation of {}: {} passed, {} warnings, {} failed",
        report.source,
        report.passed(),
        report.warnings(),
        report.failures()
    );
    report
}
