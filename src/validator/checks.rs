use crate::acquisition::{derive_acquisition_parameters, AcquisitionParameters};
use crate::grid::{compute_grid_shape, GridShape};
use crate::matrix::PADDING_WINDOW;
use crate::trace::RawTrace;

use super::{Check, Finding};

/// Relative deviation of a single time step from the mean step before warning
pub const MAX_STEP_DEVIATION: f64 = 0.01;

/// Relative difference between exact and rounded acquisition rate before warning
pub const MAX_RATE_ROUNDING: f64 = 0.05;

/// Distance of samples-per-cycle from an integer (in samples) before warning
pub const MAX_CYCLE_DRIFT: f64 = 0.05;

/// Share of the grid filled with padding before warning
pub const MAX_PADDING_FRACTION: f64 = 0.01;

/// Start time as a share of runtime before warning
pub const MAX_START_FRACTION: f64 = 0.01;

pub(super) fn check_sample_count(trace: &RawTrace) -> Finding {
    let check = Check::SampleCount;
    if trace.len() < PADDING_WINDOW {
        Finding::warn(
            check,
            format!(
                "Only {} samples; padding will average all of them instead of the last {}",
                trace.len(),
                PADDING_WINDOW
            ),
        )
    } else {
        Finding::pass(check)
    }
}

pub(super) fn check_start_time(trace: &RawTrace) -> Finding {
    let check = Check::StartTime;
    let start = trace.time()[0];
    let runtime = trace.runtime();
    if runtime > 0.0 && start > MAX_START_FRACTION * runtime {
        Finding::warn(
            check,
            format!(
                "Trace starts at {} min; the acquisition rate assumes sampling from 0 min",
                start
            ),
        )
    } else {
        Finding::pass(check)
    }
}

pub(super) fn check_sampling_uniformity(trace: &RawTrace) -> Finding {
    let check = Check::SamplingUniformity;
    let time = trace.time();
    let mean_step = (time[time.len() - 1] - time[0]) / (time.len() - 1) as f64;

    let worst = time
        .windows(2)
        .map(|pair| ((pair[1] - pair[0]) - mean_step).abs() / mean_step)
        .fold(0.0, f64::max);

    if worst > MAX_STEP_DEVIATION {
        Finding::warn(
            check,
            format!(
                "Time steps deviate up to {:.1}% from the mean step of {:.6} min",
                worst * 100.0,
                mean_step
            ),
        )
    } else {
        Finding::pass(check)
    }
}

/// Runtime, modulation period and acquisition rate. Returns the parameters
/// when they can be derived so later checks can build on them.
pub(super) fn check_acquisition(
    trace: &RawTrace,
    modulation_period: f64,
) -> (Finding, Option<AcquisitionParameters>) {
    let check = Check::AcquisitionRate;
    let params = match derive_acquisition_parameters(trace, modulation_period) {
        Ok(params) => params,
        Err(e) => return (Finding::fail(check, e.to_string()), None),
    };

    let exact = params.exact_rate();
    let rounded = params.rate as f64;
    let finding = if (exact - rounded).abs() / rounded > MAX_RATE_ROUNDING {
        Finding::warn(
            check,
            format!(
                "Exact rate {:.3} Hz is rounded to {} Hz; cycle boundaries will drift",
                exact, params.rate
            ),
        )
    } else {
        Finding::pass(check)
    };
    (finding, Some(params))
}

pub(super) fn check_modulation_alignment(params: &AcquisitionParameters) -> Finding {
    let check = Check::ModulationAlignment;
    let per_cycle = params.samples_per_cycle();
    let drift = (per_cycle - per_cycle.round_ties_even()).abs();
    if drift > MAX_CYCLE_DRIFT {
        Finding::warn(
            check,
            format!(
                "{} s at {} Hz is {:.2} samples per cycle; \
                 rounding shifts each cycle by {:.2} samples",
                params.modulation_period,
                params.rate,
                per_cycle,
                drift
            ),
        )
    } else {
        Finding::pass(check)
    }
}

pub(super) fn check_grid(params: &AcquisitionParameters) -> (Finding, Option<GridShape>) {
    let check = Check::GridShape;
    match compute_grid_shape(params) {
        Ok(shape) => (Finding::pass(check), Some(shape)),
        Err(e) => (Finding::fail(check, e.to_string()), None),
    }
}

pub(super) fn check_padding(shape: &GridShape, numpoints: usize) -> Finding {
    let check = Check::Padding;
    let padding = shape.padding_for(numpoints);
    let fraction = padding as f64 / shape.len() as f64;
    if fraction > MAX_PADDING_FRACTION {
        Finding::warn(
            check,
            format!(
                "{} of {} cells ({:.1}%) are padding",
                padding,
                shape.len(),
                fraction * 100.0
            ),
        )
    } else {
        Finding::pass(check)
    }
}

pub(super) fn check_signal_sign(trace: &RawTrace) -> Finding {
    let check = Check::SignalSign;
    let negative = trace.signal().iter().filter(|v| **v < 0.0).count();
    if negative > 0 {
        Finding::warn(
            check,
            format!(
                "{} negative samples; fractional-power enhancement follows the negative policy",
                negative
            ),
        )
    } else {
        Finding::pass(check)
    }
}
