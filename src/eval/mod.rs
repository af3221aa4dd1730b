//! Imbalance-aware evaluation of session predictions.

pub mod metrics;
pub mod report;

pub use metrics::ConfusionMatrix;
pub use report::{
    align_predictions, match_events, ClassificationReport, EvaluationReport, EventReport,
};
