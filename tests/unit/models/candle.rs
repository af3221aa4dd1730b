//! Unit tests for candle and interval models

use aurix::models::{normalize_series, BarInterval, Candle};
use chrono::{TimeZone, Utc};

fn candle_at(secs: i64, close: f64) -> Candle {
    let timestamp = Utc.timestamp_opt(secs, 0).unwrap();
    Candle::new(timestamp, close, close + 0.5, close - 0.5, close, 1000.0)
}

#[test]
fn test_valid_candle() {
    let candle = candle_at(1_262_304_000, 100.0);
    assert!(candle.is_valid());
}

#[test]
fn test_candle_with_nan_close_is_invalid() {
    let mut candle = candle_at(1_262_304_000, 100.0);
    candle.close = f64::NAN;
    assert!(!candle.is_valid());
}

#[test]
fn test_candle_with_high_below_low_is_invalid() {
    let mut candle = candle_at(1_262_304_000, 100.0);
    candle.high = 99.0;
    candle.low = 101.0;
    assert!(!candle.is_valid());
}

#[test]
fn test_interval_tokens() {
    assert_eq!(BarInterval::Day1.as_str(), "1d");
    assert_eq!(BarInterval::Week1.as_str(), "1wk");
    assert_eq!(BarInterval::Month1.as_str(), "1mo");
}

#[test]
fn test_interval_parse_aliases() {
    assert_eq!(BarInterval::parse("1d"), Some(BarInterval::Day1));
    assert_eq!(BarInterval::parse("daily"), Some(BarInterval::Day1));
    assert_eq!(BarInterval::parse("1wk"), Some(BarInterval::Week1));
    assert_eq!(BarInterval::parse("w"), Some(BarInterval::Week1));
    assert_eq!(BarInterval::parse("monthly"), Some(BarInterval::Month1));
    assert_eq!(BarInterval::parse("5m"), None);
}

#[test]
fn test_interval_default_and_display() {
    assert_eq!(BarInterval::default(), BarInterval::Day1);
    assert_eq!(format!("{}", BarInterval::Week1), "1wk");
}

#[test]
fn test_normalize_sorts_chronologically() {
    let candles = vec![
        candle_at(300_000, 3.0),
        candle_at(100_000, 1.0),
        candle_at(200_000, 2.0),
    ];
    let normalized = normalize_series(candles);
    assert_eq!(normalized.len(), 3);
    assert_eq!(normalized[0].close, 1.0);
    assert_eq!(normalized[1].close, 2.0);
    assert_eq!(normalized[2].close, 3.0);
}

#[test]
fn test_normalize_drops_duplicate_timestamps_keeping_first() {
    let candles = vec![
        candle_at(200_000, 2.0),
        candle_at(100_000, 1.0),
        candle_at(200_000, 9.0),
    ];
    let normalized = normalize_series(candles);
    assert_eq!(normalized.len(), 2);
    assert_eq!(normalized[0].close, 1.0);
    // The stable sort keeps the earlier-listed bar for a duplicated timestamp.
    assert_eq!(normalized[1].close, 2.0);
}
