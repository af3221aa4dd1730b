//! Unit tests for the temporal split

use aurix::dataset::{temporal_split, Dataset, DatasetError, SplitConfig};
use aurix::features::{FeatureConfig, FeatureFrame};
use aurix::labels::{LabelConfig, LabelSet};
use aurix::models::Candle;
use chrono::{TimeZone, Utc};

fn build_dataset(count: usize) -> Dataset {
    let candles: Vec<Candle> = (0..count)
        .map(|i| {
            let timestamp = Utc
                .timestamp_opt(1_262_304_000 + i as i64 * 86_400, 0)
                .unwrap();
            Candle::new(timestamp, 100.0, 100.5, 99.5, 100.0, 1000.0 + i as f64)
        })
        .collect();
    let frame = FeatureFrame::compute(&candles, &FeatureConfig::default());
    let labels = LabelSet::compute(&candles, &LabelConfig::default());
    Dataset::from_frame(&frame, &labels).unwrap()
}

#[test]
fn test_ratio_split_with_purge() {
    // 120 bars leave 61 usable rows; boundary = ceil(61 * 0.8) = 49.
    let dataset = build_dataset(120);
    assert_eq!(dataset.n_samples(), 61);

    let split = temporal_split(&dataset, &SplitConfig::default()).unwrap();
    assert_eq!(split.train.n_samples(), 39);
    assert_eq!(split.test.n_samples(), 12);
    assert_eq!(split.purged_rows, 10);
}

#[test]
fn test_train_strictly_precedes_test() {
    let dataset = build_dataset(120);
    let split = temporal_split(&dataset, &SplitConfig::default()).unwrap();

    let train_end = *split.train.timestamps.last().unwrap();
    let test_start = split.test.timestamps[0];
    assert!(train_end < test_start);
}

#[test]
fn test_split_date_overrides_ratio() {
    let dataset = build_dataset(120);
    let config = SplitConfig {
        train_ratio: 0.5,
        split_date: Some(dataset.timestamps[50]),
        purge: 10,
    };
    let split = temporal_split(&dataset, &config).unwrap();
    assert_eq!(split.train.n_samples(), 40);
    assert_eq!(split.test.n_samples(), 11);
    assert_eq!(split.test.timestamps[0], dataset.timestamps[50]);
}

#[test]
fn test_split_date_after_last_row_rejected() {
    let dataset = build_dataset(120);
    let config = SplitConfig {
        train_ratio: 0.8,
        split_date: Some(Utc.timestamp_opt(2_000_000_000, 0).unwrap()),
        purge: 10,
    };
    match temporal_split(&dataset, &config) {
        Err(DatasetError::InvalidSplit(_)) => {}
        other => panic!("expected InvalidSplit, got {other:?}"),
    }
}

#[test]
fn test_split_date_before_first_row_rejected() {
    let dataset = build_dataset(120);
    let config = SplitConfig {
        train_ratio: 0.8,
        split_date: Some(Utc.timestamp_opt(0, 0).unwrap()),
        purge: 10,
    };
    assert!(temporal_split(&dataset, &config).is_err());
}

#[test]
fn test_invalid_ratio_rejected() {
    let dataset = build_dataset(120);
    for ratio in [0.0, 1.0, -0.2, 1.5] {
        let config = SplitConfig {
            train_ratio: ratio,
            split_date: None,
            purge: 10,
        };
        assert!(temporal_split(&dataset, &config).is_err());
    }
}

#[test]
fn test_purge_consuming_train_side_rejected() {
    let dataset = build_dataset(120);
    let config = SplitConfig {
        train_ratio: 0.1,
        split_date: None,
        purge: 10,
    };
    match temporal_split(&dataset, &config) {
        Err(DatasetError::InvalidSplit(message)) => {
            assert!(message.contains("purge"));
        }
        other => panic!("expected InvalidSplit, got {other:?}"),
    }
}

#[test]
fn test_summary_counts_and_bounds() {
    let dataset = build_dataset(120);
    let split = temporal_split(&dataset, &SplitConfig::default()).unwrap();
    let summary = split.summary();

    assert_eq!(summary.train_rows, 39);
    assert_eq!(summary.test_rows, 12);
    assert_eq!(summary.purged_rows, 10);
    assert_eq!(summary.train_start, dataset.timestamps[0]);
    assert_eq!(summary.test_end, *dataset.timestamps.last().unwrap());
    assert_eq!(summary.train_positive_rate, 0.0);
    assert_eq!(summary.test_positive_rate, 0.0);
}
