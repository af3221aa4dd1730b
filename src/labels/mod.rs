//! Cross events, regime spans, and the forward-looking forecast target.

pub mod golden_cross;
pub mod target;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::indicators::sma;
use crate::models::Candle;

pub use golden_cross::{classify_regimes, detect_crosses, CrossEvent, CrossKind, TrendRegime};
pub use target::horizon_target;

/// Parameters for cross detection and target construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelConfig {
    pub fast_window: usize,
    pub slow_window: usize,
    /// Sessions of lookahead for the binary target.
    pub horizon: usize,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            fast_window: 10,
            slow_window: 50,
            horizon: 10,
        }
    }
}

/// Everything the labeler derives from one candle series.
#[derive(Debug, Clone)]
pub struct LabelSet {
    pub regimes: Vec<TrendRegime>,
    pub events: Vec<CrossEvent>,
    pub target: Vec<Option<bool>>,
}

impl LabelSet {
    pub fn compute(candles: &[Candle], config: &LabelConfig) -> Self {
        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        let timestamps: Vec<_> = candles.iter().map(|c| c.timestamp).collect();

        let fast = sma(&closes, config.fast_window);
        let slow = sma(&closes, config.slow_window);

        let events = detect_crosses(&fast, &slow, &timestamps);
        let regimes = classify_regimes(&fast, &slow);

        // Both SMAs exist from the end of the slow warmup.
        let defined_from = config.slow_window.saturating_sub(1);
        let target = horizon_target(&events, candles.len(), defined_from, config.horizon);

        debug!(
            golden = events.iter().filter(|e| e.kind == CrossKind::Golden).count(),
            death = events.iter().filter(|e| e.kind == CrossKind::Death).count(),
            "labeled candle series"
        );

        Self {
            regimes,
            events,
            target,
        }
    }

    pub fn golden_indices(&self) -> Vec<usize> {
        self.events
            .iter()
            .filter(|e| e.kind == CrossKind::Golden)
            .map(|e| e.index)
            .collect()
    }

    /// (defined, positive) counts over the target series.
    pub fn target_counts(&self) -> (usize, usize) {
        let defined = self.target.iter().filter(|t| t.is_some()).count();
        let positives = self.target.iter().filter(|t| **t == Some(true)).count();
        (defined, positives)
    }
}
