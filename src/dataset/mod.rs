//! Dataset assembly from features and labels.

pub mod export;
pub mod split;

use chrono::{DateTime, Utc};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::features::FeatureFrame;
use crate::labels::LabelSet;

pub use export::{read_forecasts, write_dataset, write_feature_frame, write_forecasts};
pub use split::{temporal_split, SplitConfig, SplitSummary, TemporalSplit};

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("no rows with complete features and a defined target")]
    Empty,

    #[error("feature frame has {frame} rows but labels have {labels}")]
    LengthMismatch { frame: usize, labels: usize },

    #[error("timestamps are not strictly increasing at row {index}")]
    NonMonotonic { index: usize },

    #[error("invalid split: {0}")]
    InvalidSplit(String),

    #[error("matrix shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

/// Positive/negative breakdown of a binary target vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassBalance {
    pub positives: usize,
    pub negatives: usize,
    pub positive_rate: f64,
}

/// Feature matrix, target vector, and row timestamps, chronological order.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub x: Array2<f64>,
    pub y: Array1<f64>,
    pub feature_names: Vec<String>,
    pub timestamps: Vec<DateTime<Utc>>,
}

impl Dataset {
    /// Join a feature frame with its label set, keeping only rows where
    /// every feature is finite and the target is defined.
    pub fn from_frame(frame: &FeatureFrame, labels: &LabelSet) -> Result<Self, DatasetError> {
        if frame.len() != labels.target.len() {
            return Err(DatasetError::LengthMismatch {
                frame: frame.len(),
                labels: labels.target.len(),
            });
        }

        let rows: Vec<usize> = (0..frame.len())
            .filter(|&i| frame.is_complete_row(i) && labels.target[i].is_some())
            .collect();
        if rows.is_empty() {
            return Err(DatasetError::Empty);
        }

        let n_features = frame.columns.len();
        let mut x_data = Vec::with_capacity(rows.len() * n_features);
        let mut y_data = Vec::with_capacity(rows.len());
        let mut timestamps = Vec::with_capacity(rows.len());

        for &i in &rows {
            for column in &frame.columns {
                x_data.push(column[i]);
            }
            let positive = labels.target[i] == Some(true);
            y_data.push(if positive { 1.0 } else { 0.0 });
            timestamps.push(frame.timestamps[i]);
        }

        for i in 1..timestamps.len() {
            if timestamps[i] <= timestamps[i - 1] {
                return Err(DatasetError::NonMonotonic { index: i });
            }
        }

        let x = Array2::from_shape_vec((rows.len(), n_features), x_data)?;
        let y = Array1::from_vec(y_data);
        debug!(rows = rows.len(), features = n_features, "assembled dataset");

        Ok(Self {
            x,
            y,
            feature_names: frame.names.clone(),
            timestamps,
        })
    }

    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.x.ncols()
    }

    pub fn class_balance(&self) -> ClassBalance {
        let positives = self.y.iter().filter(|&&v| v == 1.0).count();
        let negatives = self.n_samples() - positives;
        let positive_rate = if self.n_samples() == 0 {
            0.0
        } else {
            positives as f64 / self.n_samples() as f64
        };
        ClassBalance {
            positives,
            negatives,
            positive_rate,
        }
    }

    /// Z-score every column in place and return per-column (mean, std) so
    /// a test split can reuse the train-side statistics.
    pub fn standardize(&mut self) -> Vec<(f64, f64)> {
        let stats: Vec<(f64, f64)> = (0..self.n_features())
            .map(|j| {
                let col = self.x.column(j);
                let mean = col.mean().unwrap_or(0.0);
                let std = col.std(0.0);
                (mean, std)
            })
            .collect();
        self.apply_standardization(&stats);
        stats
    }

    /// Apply externally computed (mean, std) column statistics.
    pub fn apply_standardization(&mut self, stats: &[(f64, f64)]) {
        for (j, &(mean, std)) in stats.iter().enumerate().take(self.n_features()) {
            let divisor = if std > 0.0 { std } else { 1.0 };
            for v in self.x.column_mut(j) {
                *v = (*v - mean) / divisor;
            }
        }
    }

    /// Contiguous row range as a new dataset.
    pub(crate) fn slice_rows(&self, start: usize, end: usize) -> Self {
        Self {
            x: self.x.slice(ndarray::s![start..end, ..]).to_owned(),
            y: self.y.slice(ndarray::s![start..end]).to_owned(),
            feature_names: self.feature_names.clone(),
            timestamps: self.timestamps[start..end].to_vec(),
        }
    }
}
