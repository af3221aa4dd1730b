//! Confusion matrix and point metrics for binary predictions.

use serde::{Deserialize, Serialize};

/// Binary confusion counts over aligned actual/predicted streams.
///
/// Sessions where either side is undefined are skipped and counted
/// separately so reports can show coverage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    pub true_negatives: usize,
    pub skipped: usize,
}

impl ConfusionMatrix {
    pub fn from_labels(actual: &[Option<bool>], predicted: &[Option<bool>]) -> Self {
        let mut matrix = Self::default();
        for (a, p) in actual.iter().zip(predicted.iter()) {
            match (a, p) {
                (Some(true), Some(true)) => matrix.true_positives += 1,
                (Some(false), Some(true)) => matrix.false_positives += 1,
                (Some(true), Some(false)) => matrix.false_negatives += 1,
                (Some(false), Some(false)) => matrix.true_negatives += 1,
                _ => matrix.skipped += 1,
            }
        }
        matrix
    }

    pub fn total(&self) -> usize {
        self.true_positives + self.false_positives + self.false_negatives + self.true_negatives
    }

    /// precision = TP / (TP + FP)
    pub fn precision(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_positives)
    }

    /// recall = TP / (TP + FN)
    pub fn recall(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_negatives)
    }

    /// F1 = 2 * (precision * recall) / (precision + recall)
    pub fn f1(&self) -> f64 {
        let p = self.precision();
        let r = self.recall();
        if p + r == 0.0 {
            0.0
        } else {
            2.0 * p * r / (p + r)
        }
    }

    pub fn accuracy(&self) -> f64 {
        ratio(self.true_positives + self.true_negatives, self.total())
    }

    /// Actual positives among scored sessions.
    pub fn support_pos(&self) -> usize {
        self.true_positives + self.false_negatives
    }

    /// Actual negatives among scored sessions.
    pub fn support_neg(&self) -> usize {
        self.false_positives + self.true_negatives
    }

    pub fn positive_rate(&self) -> f64 {
        ratio(self.support_pos(), self.total())
    }

    pub fn predicted_positive_rate(&self) -> f64 {
        ratio(self.true_positives + self.false_positives, self.total())
    }
}

fn ratio(num: usize, denom: usize) -> f64 {
    if denom == 0 {
        0.0
    } else {
        num as f64 / denom as f64
    }
}
