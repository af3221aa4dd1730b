//! Unit tests for true range and ATR

use aurix::indicators::{atr, true_range};
use aurix::models::Candle;
use chrono::{TimeZone, Utc};

fn bar(index: usize, high: f64, low: f64, close: f64) -> Candle {
    let timestamp = Utc
        .timestamp_opt(1_262_304_000 + index as i64 * 86_400, 0)
        .unwrap();
    Candle::new(timestamp, close, high, low, close, 1000.0)
}

#[test]
fn test_true_range_intrabar_dominates() {
    assert_eq!(true_range(12.0, 8.0, 10.0), 4.0);
}

#[test]
fn test_true_range_gap_up() {
    assert_eq!(true_range(20.0, 18.0, 10.0), 10.0);
}

#[test]
fn test_true_range_gap_down() {
    assert_eq!(true_range(5.0, 4.0, 10.0), 6.0);
}

#[test]
fn test_atr_constant_bars() {
    let candles: Vec<Candle> = (0..20).map(|i| bar(i, 101.0, 99.0, 100.0)).collect();
    let out = atr(&candles, 14);
    assert!(out[13].is_nan());
    assert_eq!(out[14], 2.0);
    assert_eq!(out[19], 2.0);
}

#[test]
fn test_atr_needs_previous_close() {
    // Period bars alone are not enough: the first true range is undefined.
    let candles: Vec<Candle> = (0..14).map(|i| bar(i, 101.0, 99.0, 100.0)).collect();
    let out = atr(&candles, 14);
    assert!(out.iter().all(|v| v.is_nan()));
}
