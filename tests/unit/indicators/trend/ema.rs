//! Unit tests for the adjusted-weight EMA

use aurix::indicators::ema;

#[test]
fn test_ema_defined_from_first_value() {
    let out = ema(&[1.0, 2.0, 3.0], 3);
    assert_eq!(out[0], 1.0);
    // alpha = 0.5: prefix averages with weights 1, 0.5, 0.25, ...
    assert!((out[1] - 5.0 / 3.0).abs() < 1e-12);
    assert!((out[2] - 4.25 / 1.75).abs() < 1e-12);
}

#[test]
fn test_ema_span_one_tracks_input() {
    let out = ema(&[4.0, 7.0, 2.0], 1);
    assert_eq!(out, vec![4.0, 7.0, 2.0]);
}

#[test]
fn test_ema_constant_series_is_constant() {
    let values = vec![5.0; 30];
    let out = ema(&values, 20);
    for v in out {
        assert!((v - 5.0).abs() < 1e-9);
    }
}

#[test]
fn test_ema_weights_recent_values() {
    let values: Vec<f64> = (1..=20).map(|v| v as f64).collect();
    let out = ema(&values, 5);
    let last = out[19];
    assert!(last > 10.5);
    assert!(last < 20.0);
}

#[test]
fn test_ema_span_zero_undefined() {
    let out = ema(&[1.0, 2.0], 0);
    assert!(out.iter().all(|v| v.is_nan()));
    assert!(ema(&[], 5).is_empty());
}
