//! Parameter validation errors shared by every reshaping stage.

/// Errors raised when a user-supplied or derived parameter cannot produce
/// a valid reconstruction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidParameterError {
    /// Runtime (last time value of the trace) is zero, negative or not finite
    #[error("Runtime must be positive, got {0} min")]
    NonPositiveRuntime(f64),

    /// Modulation period is zero, negative or not finite
    #[error("Modulation period must be positive, got {0} s")]
    NonPositiveModulationPeriod(f64),

    /// Acquisition rate rounded to zero samples per second
    #[error("Acquisition rate rounds to 0 Hz ({numpoints} points over {runtime} min)")]
    ZeroAcquisitionRate {
        /// Number of samples in the trace
        numpoints: usize,
        /// Runtime in minutes
        runtime: f64,
    },

    /// Modulation period is too short for the acquisition rate
    #[error(
        "Degenerate grid: modulation period {modulation_period} s at {rate} Hz \
         gives {columns} samples per cycle"
    )]
    DegenerateGrid {
        /// Modulation period in seconds
        modulation_period: f64,
        /// Acquisition rate in Hz
        rate: usize,
        /// Rounded samples per modulation cycle
        columns: f64,
    },

    /// Modulation cycle holds more samples than the whole trace
    #[error(
        "Modulation period {modulation_period} s gives {columns} samples per cycle, \
         more than the {numpoints} samples in the trace"
    )]
    CycleExceedsTrace {
        /// Modulation period in seconds
        modulation_period: f64,
        /// Rounded samples per modulation cycle
        columns: f64,
        /// Number of samples in the trace
        numpoints: usize,
    },

    /// Signal length is incompatible with the requested grid
    #[error("Signal of {signal_len} samples does not fit a {rows} x {columns} grid")]
    ShapeMismatch {
        /// Number of real samples
        signal_len: usize,
        /// Grid rows (modulation cycles)
        rows: usize,
        /// Grid columns (samples per cycle)
        columns: usize,
    },

    /// Enhancement power is zero, negative or not finite
    #[error("Enhancement power must be positive, got {0}")]
    NonPositivePower(f64),

    /// Requested slice time lies outside the run
    #[error("Slice time {time} min is outside [0, {runtime}] min")]
    SliceTimeOutOfRange {
        /// Requested first-dimension time in minutes
        time: f64,
        /// Runtime in minutes
        runtime: f64,
    },

    /// No modulation period was supplied or selected
    #[error("Please input the modulation period")]
    MissingModulationPeriod,
}
