//! Evaluation reports with precision-first rendering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::confirm::ConfirmedEvent;
use crate::eval::metrics::ConfusionMatrix;
use crate::signals::SessionForecast;

/// Align a forecast list to a bar series by timestamp. Sessions without a
/// prediction stay `None`; the second value counts predictions whose
/// timestamp matches no bar.
pub fn align_predictions(
    timestamps: &[DateTime<Utc>],
    forecasts: &[SessionForecast],
) -> (Vec<Option<bool>>, usize) {
    let positions: std::collections::HashMap<DateTime<Utc>, usize> = timestamps
        .iter()
        .enumerate()
        .map(|(i, &t)| (t, i))
        .collect();

    let mut predicted: Vec<Option<bool>> = vec![None; timestamps.len()];
    let mut unmatched = 0usize;
    for forecast in forecasts {
        match positions.get(&forecast.timestamp) {
            Some(&i) => predicted[i] = Some(forecast.predicted),
            None => unmatched += 1,
        }
    }
    (predicted, unmatched)
}

/// Point metrics over scored sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub accuracy: f64,
    pub support_pos: usize,
    pub support_neg: usize,
    pub positive_rate: f64,
    pub predicted_positive_rate: f64,
    pub skipped: usize,
    pub confusion: ConfusionMatrix,
}

impl ClassificationReport {
    pub fn from_matrix(matrix: ConfusionMatrix) -> Self {
        Self {
            precision: matrix.precision(),
            recall: matrix.recall(),
            f1: matrix.f1(),
            accuracy: matrix.accuracy(),
            support_pos: matrix.support_pos(),
            support_neg: matrix.support_neg(),
            positive_rate: matrix.positive_rate(),
            predicted_positive_rate: matrix.predicted_positive_rate(),
            skipped: matrix.skipped,
            confusion: matrix,
        }
    }
}

/// Confirmation events matched against actual golden crosses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventReport {
    pub confirmations: usize,
    pub justified: usize,
    pub event_precision: f64,
    pub matched_crosses: usize,
    pub total_crosses: usize,
    pub event_recall: f64,
}

/// Match confirmations to crosses. A confirmation at session `t` is
/// justified when a golden cross falls in `[t - window + 1, t + horizon]`:
/// the span its window voted over plus the prediction horizon. A cross is
/// matched when at least one confirmation justifies against it.
pub fn match_events(
    confirmations: &[ConfirmedEvent],
    golden_indices: &[usize],
    window: usize,
    horizon: usize,
) -> EventReport {
    let mut justified = 0usize;
    let mut matched = vec![false; golden_indices.len()];

    for confirmation in confirmations {
        let t = confirmation.index;
        let lo = t.saturating_sub(window.saturating_sub(1));
        let hi = t + horizon;
        let mut hit = false;
        for (k, &cross) in golden_indices.iter().enumerate() {
            if cross >= lo && cross <= hi {
                matched[k] = true;
                hit = true;
            }
        }
        if hit {
            justified += 1;
        }
    }

    let matched_crosses = matched.iter().filter(|&&m| m).count();
    EventReport {
        confirmations: confirmations.len(),
        justified,
        event_precision: safe_ratio(justified, confirmations.len()),
        matched_crosses,
        total_crosses: golden_indices.len(),
        event_recall: safe_ratio(matched_crosses, golden_indices.len()),
    }
}

/// Full evaluation output: point metrics plus optional event matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub classification: ClassificationReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<EventReport>,
}

impl EvaluationReport {
    /// Text rendering, precision first: with positives this rare, a high
    /// accuracy from predicting all-negative is worthless.
    pub fn render(&self) -> String {
        let c = &self.classification;
        let mut out = String::new();
        out.push_str(&format!("precision             {:.4}\n", c.precision));
        out.push_str(&format!("recall                {:.4}\n", c.recall));
        out.push_str(&format!("f1                    {:.4}\n", c.f1));
        out.push_str(&format!("accuracy              {:.4}\n", c.accuracy));
        out.push_str(&format!(
            "class balance         {} positive / {} negative ({:.1}% positive)\n",
            c.support_pos,
            c.support_neg,
            c.positive_rate * 100.0
        ));
        out.push_str(&format!(
            "predicted positive    {:.1}%\n",
            c.predicted_positive_rate * 100.0
        ));
        out.push_str(&format!(
            "confusion             tp={} fp={} fn={} tn={} (skipped {})\n",
            c.confusion.true_positives,
            c.confusion.false_positives,
            c.confusion.false_negatives,
            c.confusion.true_negatives,
            c.skipped
        ));
        if let Some(e) = &self.events {
            out.push_str(&format!(
                "confirmed events      {} ({} justified, precision {:.4})\n",
                e.confirmations, e.justified, e.event_precision
            ));
            out.push_str(&format!(
                "crosses matched       {}/{} (recall {:.4})\n",
                e.matched_crosses, e.total_crosses, e.event_recall
            ));
        }
        out
    }
}

fn safe_ratio(num: usize, denom: usize) -> f64 {
    if denom == 0 {
        0.0
    } else {
        num as f64 / denom as f64
    }
}
