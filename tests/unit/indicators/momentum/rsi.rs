//! Unit tests for the rolling-mean RSI

use aurix::indicators::rsi;

#[test]
fn test_rsi_warmup_boundary() {
    let closes: Vec<f64> = (1..=20).map(|v| v as f64).collect();
    let out = rsi(&closes, 14);
    assert!(out[13].is_nan());
    assert!(out[14].is_finite());
}

#[test]
fn test_rsi_all_gains_is_hundred() {
    let closes: Vec<f64> = (1..=20).map(|v| v as f64).collect();
    let out = rsi(&closes, 14);
    for i in 14..20 {
        assert_eq!(out[i], 100.0);
    }
}

#[test]
fn test_rsi_all_losses_is_zero() {
    let closes: Vec<f64> = (1..=20).rev().map(|v| v as f64).collect();
    let out = rsi(&closes, 14);
    for i in 14..20 {
        assert_eq!(out[i], 0.0);
    }
}

#[test]
fn test_rsi_balanced_swings_is_fifty() {
    // Deltas alternate +1/-1, so every 14-delta window splits evenly.
    let closes: Vec<f64> = (0..20)
        .map(|i| if i % 2 == 0 { 100.0 } else { 101.0 })
        .collect();
    let out = rsi(&closes, 14);
    for i in 14..20 {
        assert_eq!(out[i], 50.0);
    }
}

#[test]
fn test_rsi_flat_window_reads_no_losses() {
    // Zero average loss maps to 100, same as an all-gain window.
    let closes = vec![100.0; 16];
    let out = rsi(&closes, 14);
    assert_eq!(out[14], 100.0);
    assert_eq!(out[15], 100.0);
}

#[test]
fn test_rsi_insufficient_data() {
    let closes = vec![100.0; 14];
    let out = rsi(&closes, 14);
    assert!(out.iter().all(|v| v.is_nan()));
}
