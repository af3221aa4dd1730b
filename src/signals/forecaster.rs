//! Rule-based golden-cross proximity forecaster.
//!
//! Scores each session for the likelihood that a golden cross begins
//! within the target horizon. Three bounded components, combined with
//! validated weights: the fast/slow MA gap geometry, RSI momentum, and
//! volume expansion. A fixed rule, not a trained model; it exists so the
//! evaluation harness has a prediction stream before any external model
//! is wired in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::indicators::{roc, rsi, sma_gap};
use crate::models::Candle;
use crate::signals::weights::ForecastWeights;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    pub weights: ForecastWeights,
    /// Scores at or above this threshold become positive predictions.
    pub score_threshold: f64,
    /// Gap magnitude (relative to the slow MA) at which the gap component
    /// reaches zero; smaller gaps score higher.
    pub gap_scale: f64,
    /// Sessions over which the gap must be narrowing.
    pub lookback: usize,
    pub fast_window: usize,
    pub slow_window: usize,
    pub rsi_period: usize,
    pub volume_roc_period: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            weights: ForecastWeights::default(),
            score_threshold: 0.6,
            gap_scale: 0.02,
            lookback: 5,
            fast_window: 10,
            slow_window: 50,
            rsi_period: 14,
            volume_roc_period: 5,
        }
    }
}

/// Weighted component contribution, largest first in the reasons list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastReason {
    pub description: String,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ComponentScores {
    pub gap: f64,
    pub momentum: f64,
    pub volume: f64,
}

/// One session's forecast with its score breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossForecast {
    pub index: usize,
    pub timestamp: DateTime<Utc>,
    pub score: f64,
    pub predicted: bool,
    pub components: ComponentScores,
    pub reasons: Vec<ForecastReason>,
}

/// The flat record written to and read from predictions CSV.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionForecast {
    pub timestamp: DateTime<Utc>,
    pub score: f64,
    pub predicted: bool,
}

impl From<&CrossForecast> for SessionForecast {
    fn from(f: &CrossForecast) -> Self {
        Self {
            timestamp: f.timestamp,
            score: f.score,
            predicted: f.predicted,
        }
    }
}

pub struct CrossForecaster {
    config: ForecastConfig,
}

impl CrossForecaster {
    pub fn new(config: ForecastConfig) -> Self {
        Self { config }
    }

    /// Forecast every session; positions with undefined inputs are `None`.
    pub fn forecast_series(&self, candles: &[Candle]) -> Vec<Option<CrossForecast>> {
        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        let volumes: Vec<f64> = candles.iter().map(|c| c.volume).collect();

        let gap = sma_gap(&closes, self.config.fast_window, self.config.slow_window);
        let rsi_series = rsi(&closes, self.config.rsi_period);
        let vroc = roc(&volumes, self.config.volume_roc_period);

        (0..candles.len())
            .map(|i| self.forecast_at(candles, &gap, &rsi_series, &vroc, i))
            .collect()
    }

    fn forecast_at(
        &self,
        candles: &[Candle],
        gap: &[f64],
        rsi_series: &[f64],
        vroc: &[f64],
        i: usize,
    ) -> Option<CrossForecast> {
        if i < self.config.lookback {
            return None;
        }
        let (g, prev_g, r, v) = (gap[i], gap[i - self.config.lookback], rsi_series[i], vroc[i]);
        if g.is_nan() || prev_g.is_nan() || r.is_nan() || v.is_nan() {
            return None;
        }

        let gap_component = if g >= 0.0 {
            // Fast already above slow: the cross is behind us, not ahead.
            0.0
        } else if g > prev_g {
            (1.0 - g.abs() / self.config.gap_scale).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let momentum_component = ((r - 40.0) / 30.0).clamp(0.0, 1.0);
        let volume_component = (v / 50.0).clamp(0.0, 1.0);

        let weights = &self.config.weights;
        let score = weights.gap_weight * gap_component
            + weights.momentum_weight * momentum_component
            + weights.volume_weight * volume_component;

        let mut reasons = vec![
            ForecastReason {
                description: format!("MA gap closing from below: {:.2}%", g * 100.0),
                weight: weights.gap_weight * gap_component,
            },
            ForecastReason {
                description: format!("RSI momentum: {:.1}", r),
                weight: weights.momentum_weight * momentum_component,
            },
            ForecastReason {
                description: format!("Volume expansion: {:.1}%", v),
                weight: weights.volume_weight * volume_component,
            },
        ];
        reasons.sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Some(CrossForecast {
            index: i,
            timestamp: candles[i].timestamp,
            score,
            predicted: score >= self.config.score_threshold,
            components: ComponentScores {
                gap: gap_component,
                momentum: momentum_component,
                volume: volume_component,
            },
            reasons,
        })
    }

    /// Aligned `Option<bool>` stream for the confirmation rule.
    pub fn predictions(&self, candles: &[Candle]) -> Vec<Option<bool>> {
        self.forecast_series(candles)
            .iter()
            .map(|f| f.as_ref().map(|f| f.predicted))
            .collect()
    }
}
