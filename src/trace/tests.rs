use super::*;

const AGILENT_EXPORT: &str = "Time (min),Signal (pA)
Sample,Gasoline
Detector,FID1 A
0.000,10.5
0.100,11.0
0.200,12.5
0.300,11.5";

#[test]
fn test_parse_skips_header_rows() {
    let trace = parse_trace(AGILENT_EXPORT.as_bytes()).unwrap();

    assert_eq!(trace.len(), 4);
    assert_eq!(trace.time(), &[0.0, 0.1, 0.2, 0.3]);
    assert_eq!(trace.signal(), &[10.5, 11.0, 12.5, 11.5]);
    assert_eq!(trace.runtime(), 0.3);
}

#[test]
fn test_parse_ignores_extra_columns() {
    let data = "t,s,extra\nx\ny\n0.0,1.0,99\n0.5,2.0,98,97\n1.0,3.0";
    let trace = parse_trace(data.as_bytes()).unwrap();

    assert_eq!(trace.signal(), &[1.0, 2.0, 3.0]);
}

#[test]
fn test_numeric_header_rows_are_still_dropped() {
    // The header block is positional, never detected from content.
    let data = "0.0,100.0\n0.1,200.0\n0.2,300.0\n0.3,1.0\n0.4,2.0";
    let trace = parse_trace(data.as_bytes()).unwrap();

    assert_eq!(trace.time(), &[0.3, 0.4]);
    assert_eq!(trace.signal(), &[1.0, 2.0]);
}

#[test]
fn test_whitespace_around_cells() {
    let data = "a,b\nc\nd\n 0.0 , 5.0\n 0.1 ,\t6.0 ";
    let trace = parse_trace(data.as_bytes()).unwrap();

    assert_eq!(trace.signal(), &[5.0, 6.0]);
}

#[test]
fn test_tab_delimited() {
    let data = "time\tsignal\nmeta\nmeta\n0.0\t1.0\n0.1\t2.0";
    let trace = TraceReaderConfig::tsv().parse(data.as_bytes()).unwrap();

    assert_eq!(trace.len(), 2);
}

#[test]
fn test_too_few_rows() {
    let err = parse_trace("time,signal\nmeta".as_bytes()).unwrap_err();

    assert!(matches!(
        err,
        ParseError::TooFewRows {
            found: 2,
            required: 3
        }
    ));
}

#[test]
fn test_header_only_has_no_samples() {
    let err = parse_trace("a,b\nc,d\ne,f".as_bytes()).unwrap_err();
    assert!(matches!(err, ParseError::TooFewSamples(0)));
}

#[test]
fn test_single_sample_rejected() {
    let err = parse_trace("a,b\nc,d\ne,f\n0.0,1.0".as_bytes()).unwrap_err();
    assert!(matches!(err, ParseError::TooFewSamples(1)));
}

#[test]
fn test_non_numeric_signal_reports_line() {
    let data = "a,b\nc,d\ne,f\n0.0,1.0\n0.1,oops";
    let err = parse_trace(data.as_bytes()).unwrap_err();

    match err {
        ParseError::InvalidNumber { row, column, value } => {
            assert_eq!(row, 5);
            assert_eq!(column, 1);
            assert_eq!(value, "oops");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_non_finite_values_rejected() {
    let data = "a,b\nc,d\ne,f\n0.0,NaN\n0.1,1.0";
    let err = parse_trace(data.as_bytes()).unwrap_err();
    assert!(matches!(err, ParseError::InvalidNumber { column: 1, .. }));
}

#[test]
fn test_single_column_row_rejected() {
    let data = "a,b\nc,d\ne,f\n0.0,1.0\n0.1";
    let err = parse_trace(data.as_bytes()).unwrap_err();
    assert!(matches!(err, ParseError::MissingColumn { found: 1, .. }));
}

#[test]
fn test_non_monotonic_time() {
    let data = "a,b\nc,d\ne,f\n0.0,1.0\n0.2,1.0\n0.1,1.0";
    let err = parse_trace(data.as_bytes()).unwrap_err();

    match err {
        ParseError::NonMonotonicTime { row, time, previous } => {
            assert_eq!(row, 6);
            assert_eq!(time, 0.1);
            assert_eq!(previous, 0.2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_new_validates_arrays() {
    assert!(RawTrace::new(vec![0.0, 1.0], vec![5.0, 6.0]).is_ok());
    assert!(matches!(
        RawTrace::new(vec![0.0, 1.0], vec![5.0]),
        Err(ParseError::ArrayLengthMismatch {
            time_len: 2,
            signal_len: 1
        })
    ));
    assert!(matches!(
        RawTrace::new(vec![0.0, 0.0], vec![5.0, 6.0]),
        Err(ParseError::NonMonotonicTime { row: 2, .. })
    ));
    assert!(matches!(
        RawTrace::new(vec![0.0, f64::INFINITY], vec![5.0, 6.0]),
        Err(ParseError::InvalidNumber { row: 2, column: 0, .. })
    ));
}

#[test]
fn test_samples_iterator() {
    let trace = RawTrace::new(vec![0.0, 0.5], vec![3.0, 4.0]).unwrap();
    let pairs: Vec<_> = trace.samples().collect();
    assert_eq!(pairs, vec![(0.0, 3.0), (0.5, 4.0)]);
}
