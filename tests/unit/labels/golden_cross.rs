//! Unit tests for cross detection and regime classification

use aurix::labels::{classify_regimes, detect_crosses, CrossKind, TrendRegime};
use chrono::{DateTime, TimeZone, Utc};

fn ts_series(count: usize) -> Vec<DateTime<Utc>> {
    (0..count)
        .map(|i| {
            Utc.timestamp_opt(1_262_304_000 + i as i64 * 86_400, 0)
                .unwrap()
        })
        .collect()
}

#[test]
fn test_golden_cross_detected() {
    let fast = [1.0, 3.0];
    let slow = [2.0, 2.0];
    let events = detect_crosses(&fast, &slow, &ts_series(2));
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].index, 1);
    assert_eq!(events[0].kind, CrossKind::Golden);
    assert_eq!(events[0].fast, 3.0);
    assert_eq!(events[0].slow, 2.0);
}

#[test]
fn test_death_cross_detected() {
    let fast = [3.0, 1.0];
    let slow = [2.0, 2.0];
    let events = detect_crosses(&fast, &slow, &ts_series(2));
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, CrossKind::Death);
}

#[test]
fn test_touch_then_separate_crosses_on_separating_bar() {
    // Equality on the earlier bar still counts as "not yet above".
    let fast = [1.0, 2.0, 3.0];
    let slow = [2.0, 2.0, 2.0];
    let events = detect_crosses(&fast, &slow, &ts_series(3));
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].index, 2);
    assert_eq!(events[0].kind, CrossKind::Golden);
}

#[test]
fn test_plateau_produces_single_event() {
    let fast = [1.0, 2.0, 2.0, 3.0];
    let slow = [2.0, 2.0, 2.0, 2.0];
    let events = detect_crosses(&fast, &slow, &ts_series(4));
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].index, 3);
}

#[test]
fn test_warmup_nan_bars_skipped() {
    let fast = [f64::NAN, 1.0, 3.0];
    let slow = [f64::NAN, 2.0, 2.0];
    let events = detect_crosses(&fast, &slow, &ts_series(3));
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].index, 2);
}

#[test]
fn test_event_carries_bar_timestamp() {
    let fast = [1.0, 3.0];
    let slow = [2.0, 2.0];
    let timestamps = ts_series(2);
    let events = detect_crosses(&fast, &slow, &timestamps);
    assert_eq!(events[0].timestamp, timestamps[1]);
}

#[test]
fn test_regimes_follow_ma_relation() {
    let fast = [3.0, 1.0];
    let slow = [2.0, 2.0];
    let regimes = classify_regimes(&fast, &slow);
    assert_eq!(regimes, vec![TrendRegime::Bullish, TrendRegime::Bearish]);
}

#[test]
fn test_regime_tie_carries_previous() {
    let fast = [f64::NAN, 3.0, 2.0, 1.0];
    let slow = [f64::NAN, 2.0, 2.0, 2.0];
    let regimes = classify_regimes(&fast, &slow);
    assert_eq!(
        regimes,
        vec![
            TrendRegime::Undefined,
            TrendRegime::Bullish,
            TrendRegime::Bullish,
            TrendRegime::Bearish,
        ]
    );
}

#[test]
fn test_regimes_start_undefined() {
    let fast = [f64::NAN, f64::NAN];
    let slow = [f64::NAN, f64::NAN];
    let regimes = classify_regimes(&fast, &slow);
    assert!(regimes.iter().all(|r| *r == TrendRegime::Undefined));
}
