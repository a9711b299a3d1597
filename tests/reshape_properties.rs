//! Property tests for the reshaping stages.

use gcxgc::axes::build_axes;
use gcxgc::grid::GridShape;
use gcxgc::matrix::{pad_and_reshape, PADDING_WINDOW};
use gcxgc::views::{enhance, extract_slice, project, slice_index};
use proptest::prelude::*;

/// A signal and a row width no larger than it.
fn signal_and_columns() -> impl Strategy<Value = (Vec<f64>, usize)> {
    prop::collection::vec(-1e6f64..1e6, 1..400).prop_flat_map(|signal| {
        let len = signal.len();
        (Just(signal), 1..=len)
    })
}

proptest! {
    #[test]
    fn test_grid_holds_every_sample((signal, columns) in signal_and_columns()) {
        let shape = GridShape::for_points(signal.len(), columns).unwrap();
        prop_assert!(shape.len() >= signal.len());
        prop_assert!(shape.padding_for(signal.len()) < columns);
        prop_assert_eq!(shape.rows, signal.len().div_ceil(columns));
    }

    #[test]
    fn test_reshape_preserves_signal((signal, columns) in signal_and_columns()) {
        let shape = GridShape::for_points(signal.len(), columns).unwrap();
        let matrix = pad_and_reshape(&signal, &shape).unwrap();

        prop_assert_eq!(matrix.shape(), (shape.columns, shape.rows));
        prop_assert_eq!(matrix.unpadded_signal(), signal.clone());

        // element (j, i) is sample i * columns + j
        for i in 0..shape.rows {
            for j in 0..shape.columns {
                let k = i * shape.columns + j;
                if k < signal.len() {
                    prop_assert_eq!(matrix.get(j, i), Some(signal[k]));
                }
            }
        }
    }

    #[test]
    fn test_padding_is_tail_mean((signal, columns) in signal_and_columns()) {
        let shape = GridShape::for_points(signal.len(), columns).unwrap();
        let matrix = pad_and_reshape(&signal, &shape).unwrap();

        let window = &signal[signal.len().saturating_sub(PADDING_WINDOW)..];
        let mean = window.iter().sum::<f64>() / window.len() as f64;
        let cells = matrix.as_array();
        for k in signal.len()..shape.len() {
            let value = cells[[k % shape.columns, k / shape.columns]];
            prop_assert!((value - mean).abs() <= 1e-9 * mean.abs().max(1.0));
        }
    }

    #[test]
    fn test_projection_matches_cycle_sums((signal, columns) in signal_and_columns()) {
        let shape = GridShape::for_points(signal.len(), columns).unwrap();
        let matrix = pad_and_reshape(&signal, &shape).unwrap();
        let projection = project(&matrix);

        prop_assert_eq!(projection.len(), shape.rows);
        let cells = matrix.as_array();
        for (i, total) in projection.iter().enumerate() {
            let expected: f64 = (0..shape.columns).map(|j| cells[[j, i]]).sum();
            let scale: f64 = (0..shape.columns).map(|j| cells[[j, i]].abs()).sum();
            prop_assert!((total - expected).abs() <= 1e-9 * scale.max(1.0));
        }
    }

    #[test]
    fn test_axes_match_matrix(
        (signal, columns) in signal_and_columns(),
        runtime in 0.1f64..120.0,
        modulation_period in 0.5f64..12.0,
    ) {
        let shape = GridShape::for_points(signal.len(), columns).unwrap();
        let matrix = pad_and_reshape(&signal, &shape).unwrap();
        let axes = build_axes(&matrix, runtime, modulation_period).unwrap();

        prop_assert_eq!(axes.first_dimension_len(), matrix.first_dimension_len());
        prop_assert_eq!(axes.second_dimension_len(), matrix.second_dimension_len());
        prop_assert_eq!(axes.first_dimension[0], 0.0);
        prop_assert!(axes.first_dimension.iter().all(|t| *t < runtime));
        prop_assert!(axes.second_dimension.iter().all(|t| *t < modulation_period));
        prop_assert!(axes.first_dimension.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_unit_power_is_identity((signal, columns) in signal_and_columns()) {
        let shape = GridShape::for_points(signal.len(), columns).unwrap();
        let matrix = pad_and_reshape(&signal, &shape).unwrap();
        prop_assert_eq!(enhance(&matrix, 1.0).unwrap(), matrix);
    }

    #[test]
    fn test_enhancement_keeps_order(
        (signal, columns) in signal_and_columns(),
        power in 1.0f64..100.0,
    ) {
        let shape = GridShape::for_points(signal.len(), columns).unwrap();
        let matrix = pad_and_reshape(&signal, &shape).unwrap();
        let enhanced = enhance(&matrix, power).unwrap();

        let before = matrix.as_array();
        let after = enhanced.as_array();
        for (a, b) in before.iter().zip(after.iter()) {
            prop_assert!(*a == 0.0 || a.signum() == b.signum());
            prop_assert!(b.abs() <= a.abs().max(1.0));
        }
    }

    #[test]
    fn test_slice_endpoints(
        (signal, columns) in signal_and_columns(),
        runtime in 0.1f64..120.0,
    ) {
        let shape = GridShape::for_points(signal.len(), columns).unwrap();
        let matrix = pad_and_reshape(&signal, &shape).unwrap();
        let axes = build_axes(&matrix, runtime, 3.0).unwrap();

        prop_assert_eq!(slice_index(&matrix, &axes, 0.0).unwrap(), 0);
        prop_assert_eq!(
            slice_index(&matrix, &axes, runtime).unwrap(),
            matrix.first_dimension_len() - 1
        );
        prop_assert_eq!(extract_slice(&matrix, &axes, 0.0).unwrap(), matrix.column(0).unwrap());
        prop_assert!(slice_index(&matrix, &axes, runtime * 1.01).is_err());
        prop_assert!(slice_index(&matrix, &axes, -0.1).is_err());
    }
}
