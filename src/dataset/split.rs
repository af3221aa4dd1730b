//! Temporal train/test split with a leakage purge.
//!
//! The split is chronological only: train strictly earlier than test, no
//! shuffling, no k-fold. Targets look `horizon` sessions ahead, so the
//! last `purge` train rows see into the test window and are dropped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dataset::{Dataset, DatasetError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Fraction of rows in the train side when no split date is given.
    pub train_ratio: f64,
    /// First timestamp of the test side, overriding the ratio.
    pub split_date: Option<DateTime<Utc>>,
    /// Rows dropped from the train tail, normally the target horizon.
    pub purge: usize,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            train_ratio: 0.8,
            split_date: None,
            purge: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TemporalSplit {
    pub train: Dataset,
    pub test: Dataset,
    pub purged_rows: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitSummary {
    pub train_rows: usize,
    pub test_rows: usize,
    pub purged_rows: usize,
    pub train_start: DateTime<Utc>,
    pub train_end: DateTime<Utc>,
    pub test_start: DateTime<Utc>,
    pub test_end: DateTime<Utc>,
    pub train_positive_rate: f64,
    pub test_positive_rate: f64,
}

impl TemporalSplit {
    pub fn summary(&self) -> SplitSummary {
        SplitSummary {
            train_rows: self.train.n_samples(),
            test_rows: self.test.n_samples(),
            purged_rows: self.purged_rows,
            train_start: self.train.timestamps[0],
            train_end: self.train.timestamps[self.train.n_samples() - 1],
            test_start: self.test.timestamps[0],
            test_end: self.test.timestamps[self.test.n_samples() - 1],
            train_positive_rate: self.train.class_balance().positive_rate,
            test_positive_rate: self.test.class_balance().positive_rate,
        }
    }
}

/// Split a chronological dataset into earlier-train / later-test halves.
pub fn temporal_split(
    dataset: &Dataset,
    config: &SplitConfig,
) -> Result<TemporalSplit, DatasetError> {
    let n = dataset.n_samples();
    if n == 0 {
        return Err(DatasetError::Empty);
    }

    let boundary = match config.split_date {
        Some(date) => dataset
            .timestamps
            .iter()
            .position(|&t| t >= date)
            .ok_or_else(|| {
                DatasetError::InvalidSplit(format!(
                    "split date {} is after the last row",
                    date.date_naive()
                ))
            })?,
        None => {
            if !(config.train_ratio > 0.0 && config.train_ratio < 1.0) {
                return Err(DatasetError::InvalidSplit(format!(
                    "train ratio must be in (0, 1), got: {}",
                    config.train_ratio
                )));
            }
            (n as f64 * config.train_ratio).ceil() as usize
        }
    };

    if boundary == 0 {
        return Err(DatasetError::InvalidSplit(
            "train side is empty".to_string(),
        ));
    }
    if boundary >= n {
        return Err(DatasetError::InvalidSplit("test side is empty".to_string()));
    }
    if config.purge >= boundary {
        return Err(DatasetError::InvalidSplit(format!(
            "purge of {} rows consumes the whole train side of {}",
            config.purge, boundary
        )));
    }

    let train_end = boundary - config.purge;
    let split = TemporalSplit {
        train: dataset.slice_rows(0, train_end),
        test: dataset.slice_rows(boundary, n),
        purged_rows: config.purge,
    };

    info!(
        train_rows = split.train.n_samples(),
        test_rows = split.test.n_samples(),
        purged = split.purged_rows,
        "temporal split"
    );
    Ok(split)
}
