//! Unit tests for the feature frame

use aurix::features::{FeatureConfig, FeatureFrame};
use aurix::models::Candle;
use chrono::{TimeZone, Utc};

fn create_test_candles(count: usize, base_price: f64) -> Vec<Candle> {
    let mut candles = Vec::new();
    for i in 0..count {
        let price = base_price + (i as f64 * 0.1);
        let timestamp = Utc
            .timestamp_opt(1_262_304_000 + i as i64 * 86_400, 0)
            .unwrap();
        candles.push(Candle::new(
            timestamp,
            price,
            price + 0.5,
            price - 0.5,
            price,
            1000.0 + i as f64,
        ));
    }
    candles
}

#[test]
fn test_feature_names_and_order() {
    let frame = FeatureFrame::compute(&create_test_candles(120, 100.0), &FeatureConfig::default());
    let expected = [
        "return_1",
        "log_return_1",
        "cum_return_5",
        "volatility_20",
        "distance_ma50",
        "distance_ema20",
        "ma_gap_10_50",
        "rsi_14",
        "atr_pct_14",
        "volume_roc_5",
    ];
    assert_eq!(frame.names, expected);
    assert_eq!(frame.columns.len(), expected.len());
}

#[test]
fn test_names_follow_configured_periods() {
    let config = FeatureConfig {
        slow_sma_window: 100,
        rsi_period: 7,
        ..FeatureConfig::default()
    };
    let frame = FeatureFrame::compute(&create_test_candles(120, 100.0), &config);
    assert!(frame.names.contains(&"distance_ma100".to_string()));
    assert!(frame.names.contains(&"rsi_7".to_string()));
}

#[test]
fn test_first_complete_row_after_slow_warmup() {
    let frame = FeatureFrame::compute(&create_test_candles(120, 100.0), &FeatureConfig::default());
    // The 50-session SMA is the longest warmup in the default set.
    assert_eq!(frame.first_complete_row(), Some(49));
    assert!(!frame.is_complete_row(48));
    assert!(frame.is_complete_row(49));
    assert!(frame.is_complete_row(119));
}

#[test]
fn test_frame_len_matches_series() {
    let frame = FeatureFrame::compute(&create_test_candles(80, 100.0), &FeatureConfig::default());
    assert_eq!(frame.len(), 80);
    assert_eq!(frame.timestamps.len(), 80);
    for column in &frame.columns {
        assert_eq!(column.len(), 80);
    }
}

#[test]
fn test_column_lookup() {
    let frame = FeatureFrame::compute(&create_test_candles(80, 100.0), &FeatureConfig::default());
    let rsi = frame.column("rsi_14").unwrap();
    assert_eq!(rsi.len(), 80);
    assert_eq!(rsi[20], 100.0);
    assert!(frame.column("no_such_column").is_none());
}

#[test]
fn test_empty_series() {
    let frame = FeatureFrame::compute(&[], &FeatureConfig::default());
    assert!(frame.is_empty());
    assert_eq!(frame.first_complete_row(), None);
    assert!(!frame.is_complete_row(0));
}
