/// Errors that can occur while reading an instrument trace export
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// I/O error reading the trace file
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV/TSV parsing error
    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    /// Not enough rows to cover the header block
    #[error("Trace file has {found} rows, at least {required} are required")]
    TooFewRows {
        /// Rows found (header line included)
        found: usize,
        /// Minimum number of rows
        required: usize,
    },

    /// A data row has fewer than two columns
    #[error("Row {row} has {found} column(s), expected time and signal")]
    MissingColumn {
        /// 1-based line number in the file
        row: usize,
        /// Number of columns found
        found: usize,
    },

    /// A time or signal cell is not a finite floating-point number
    #[error("Row {row}, column {column}: '{value}' is not a finite number")]
    InvalidNumber {
        /// 1-based line number in the file
        row: usize,
        /// 0-based column index
        column: usize,
        /// Offending cell contents
        value: String,
    },

    /// Time and signal arrays differ in length
    #[error(
        "Array length mismatch: time array has {time_len} elements, \
         signal array has {signal_len} elements"
    )]
    ArrayLengthMismatch {
        /// Length of the time array
        time_len: usize,
        /// Length of the signal array
        signal_len: usize,
    },

    /// Fewer samples than needed to derive a sampling rate
    #[error("Trace has {0} sample(s), at least 2 are required")]
    TooFewSamples(usize),

    /// Time column is not strictly increasing
    #[error("Row {row}: time {time} does not increase on previous time {previous}")]
    NonMonotonicTime {
        /// 1-based line number in the file
        row: usize,
        /// Time on the offending row
        time: f64,
        /// Time on the previous data row
        previous: f64,
    },
}
