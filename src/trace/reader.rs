use std::io::Read;

use log::debug;

use super::{check_samples, ParseError, RawTrace, HEADER_ROWS};

/// Configuration for reading trace exports
#[derive(Debug, Clone)]
pub struct TraceReaderConfig {
    /// Field delimiter (comma for CSV exports, tab for TSV)
    pub delimiter: u8,
}

impl Default for TraceReaderConfig {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl TraceReaderConfig {
    /// Configuration for tab-separated exports
    pub fn tsv() -> Self {
        Self { delimiter: b'\t' }
    }

    /// Parse a trace from a reader using this configuration
    pub fn parse<R: Read>(&self, reader: R) -> Result<RawTrace, ParseError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .has_headers(false)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut time = Vec::new();
        let mut signal = Vec::new();
        let mut lines = Vec::new();
        let mut rows = 0usize;

        for (index, record) in csv_reader.records().enumerate() {
            let record = record?;
            rows += 1;
            if index < HEADER_ROWS {
                continue;
            }

            let line = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(index + 1);

            if record.len() < 2 {
                return Err(ParseError::MissingColumn {
                    row: line,
                    found: record.len(),
                });
            }

            time.push(parse_cell(&record, line, 0)?);
            signal.push(parse_cell(&record, line, 1)?);
            lines.push(line);
        }

        if rows < HEADER_ROWS {
            return Err(ParseError::TooFewRows {
                found: rows,
                required: HEADER_ROWS,
            });
        }

        check_samples(&time, |i| lines[i])?;
        debug!("Parsed {} samples after {} header rows", time.len(), HEADER_ROWS);

        Ok(RawTrace::from_parts(time, signal))
    }
}

/// Parse a trace export (three header rows, then `time, signal, ...`).
pub fn parse_trace<R: Read>(reader: R) -> Result<RawTrace, ParseError> {
    TraceReaderConfig::default().parse(reader)
}

fn parse_cell(record: &csv::StringRecord, row: usize, column: usize) -> Result<f64, ParseError> {
    let raw = record.get(column).unwrap_or_default();
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::InvalidNumber {
            row,
            column,
            value: raw.to_string(),
        }),
    }
}
