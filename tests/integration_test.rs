//! Integration tests for gcxgc
//!
//! These tests run the full pipeline from a trace file on disk to exported
//! render data.

use gcxgc::export::{write_csv_tables, write_json, Provenance, RenderBundle, HEATMAP_FILE};
use gcxgc::grid::GridShape;
use gcxgc::matrix::pad_and_reshape;
use gcxgc::pipeline::{reconstruct_file, ReconstructError, ReconstructRequest};
use gcxgc::preset::Preset;
use gcxgc::trace::{ParseError, RawTrace};
use gcxgc::views::{enhance, project};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::tempdir;

/// Write a trace file with the usual three header rows.
fn write_trace_file(path: &Path, numpoints: usize, runtime: f64, signal: impl Fn(usize) -> f64) {
    let mut file = File::create(path).unwrap();
    writeln!(file, "Time (min),Signal (pA)").unwrap();
    writeln!(file, "Detector,FID1A").unwrap();
    writeln!(file, ",").unwrap();
    let last = (numpoints - 1) as f64;
    for i in 0..numpoints {
        writeln!(file, "{},{}", runtime * i as f64 / last, signal(i)).unwrap();
    }
}

/// Test the complete file-to-bundle cycle
#[test]
fn test_file_to_json_bundle() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gasoline.csv");
    write_trace_file(&path, 6010, 10.0, |i| (i % 30) as f64);

    let request = ReconstructRequest::new(Preset::Gasoline).with_slice_time(5.0);
    let result = reconstruct_file(&path, &request).unwrap();

    assert_eq!(result.params.numpoints, 6010);
    assert_eq!(result.params.rate, 10);
    assert_eq!(result.shape, GridShape { rows: 201, columns: 30 });
    assert_eq!(result.matrix.padding(), 20);
    assert_eq!(result.axes.first_dimension_len(), 201);
    assert_eq!(result.axes.second_dimension_len(), 30);
    // every full cycle is the ramp 0..29
    assert_eq!(result.slice, (0..30).map(f64::from).collect::<Vec<_>>());

    let out = dir.path().join("gasoline.json");
    let provenance = Provenance::now(Some("gasoline.csv".to_string()));
    let bundle = RenderBundle::new(&result, true, provenance);
    write_json(File::create(&out).unwrap(), &bundle, true).unwrap();

    let restored = RenderBundle::from_json(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(restored.shape, bundle.shape);
    assert_eq!(restored.heatmap.power, request.power);
    assert_eq!(restored.heatmap.z.len(), 30);
    assert_eq!(restored.heatmap.z[0].len(), 201);
    let raw = restored.heatmap.raw.unwrap();
    assert_eq!(raw[29][0], 29.0);
    assert!((raw[29][200] - 309.0 / 21.0).abs() < 1e-9);
    assert_eq!(restored.slice.index, result.slice_index);
    assert_eq!(restored.provenance.source.as_deref(), Some("gasoline.csv"));
}

/// Test CSV table export from a parsed file
#[test]
fn test_file_to_csv_tables() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("biodiesel.csv");
    write_trace_file(&path, 6000, 10.0, |i| 1.0 + (i as f64 * 0.01).sin().abs());

    let result = reconstruct_file(&path, &ReconstructRequest::new(Preset::Biodiesel)).unwrap();
    // 10 Hz * 3.3 s = 33 samples per cycle
    assert_eq!(result.matrix.shape(), (33, 182));

    let out = dir.path().join("tables");
    write_csv_tables(&out, &result).unwrap();

    let heatmap = fs::read_to_string(out.join(HEATMAP_FILE)).unwrap();
    assert_eq!(heatmap.lines().count(), 34);
    assert_eq!(heatmap.lines().next().unwrap().split(',').count(), 183);
}

/// Ten samples in rows of five: the documented reshape example
#[test]
fn test_ten_sample_reshape() {
    let signal: Vec<f64> = (1..=10).map(f64::from).collect();
    let shape = GridShape::for_points(signal.len(), 5).unwrap();
    assert_eq!(shape, GridShape { rows: 2, columns: 5 });

    let matrix = pad_and_reshape(&signal, &shape).unwrap();
    assert_eq!(matrix.shape(), (5, 2));
    assert_eq!(matrix.column(0).unwrap(), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(matrix.column(1).unwrap(), vec![6.0, 7.0, 8.0, 9.0, 10.0]);
    assert_eq!(matrix.padding(), 0);
    assert_eq!(project(&matrix), vec![15.0, 40.0]);
}

/// Seven samples in rows of three: two padding cells hold the tail mean
#[test]
fn test_seven_sample_padding() {
    let signal: Vec<f64> = (1..=7).map(f64::from).collect();
    let shape = GridShape::for_points(signal.len(), 3).unwrap();

    let matrix = pad_and_reshape(&signal, &shape).unwrap();
    assert_eq!(matrix.shape(), (3, 3));
    assert_eq!(matrix.padding(), 2);
    assert_eq!(matrix.to_rows(), vec![
        vec![1.0, 4.0, 7.0],
        vec![2.0, 5.0, 4.0],
        vec![3.0, 6.0, 4.0],
    ]);
}

/// Enhancement at power 2 is an elementwise square root
#[test]
fn test_square_root_enhancement() {
    let signal = vec![4.0, 9.0, 16.0, 25.0];
    let matrix = pad_and_reshape(&signal, &GridShape::for_points(4, 2).unwrap()).unwrap();

    let enhanced = enhance(&matrix, 2.0).unwrap().to_rows();
    let expected = [[2.0, 4.0], [3.0, 5.0]];
    for (row, expected_row) in enhanced.iter().zip(expected) {
        for (value, expected) in row.iter().zip(expected_row) {
            assert!((value - expected).abs() < 1e-12);
        }
    }
}

/// Parse failures surface through the pipeline error
#[test]
fn test_truncated_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("truncated.csv");
    fs::write(&path, "Time (min),Signal\nmeta,meta\n").unwrap();

    let err = reconstruct_file(&path, &ReconstructRequest::new(3.0)).unwrap_err();
    assert!(matches!(
        err,
        ReconstructError::Parse(ParseError::TooFewRows { found: 2, .. })
    ));
}

/// A missing file is an I/O error, not a panic
#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let err = RawTrace::from_csv_file(dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, ParseError::IoError(_)));
}

/// A period shorter than one sample is rejected
#[test]
fn test_degenerate_period() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fast.csv");
    write_trace_file(&path, 600, 1.0, |_| 1.0);

    let err = reconstruct_file(&path, &ReconstructRequest::new(0.01)).unwrap_err();
    assert!(matches!(err, ReconstructError::InvalidParameter(_)));
}
