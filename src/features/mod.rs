//! Feature frame assembly over candle series.
//!
//! Builds the named feature columns consumed by dataset assembly and the
//! cross forecaster. Columns stay aligned with the candle series; warmup
//! positions are NAN and get filtered out at dataset time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::indicators::{
    atr, cumulative_return, distance, ema, log_returns, return_volatility, returns, roc, rsi, sma,
    sma_gap,
};
use crate::models::Candle;

/// Rolling-window parameters for the feature set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureConfig {
    pub fast_sma_window: usize,
    pub slow_sma_window: usize,
    pub ema_span: usize,
    pub rsi_period: usize,
    pub atr_period: usize,
    pub volatility_window: usize,
    pub cumulative_return_period: usize,
    pub volume_roc_period: usize,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            fast_sma_window: 10,
            slow_sma_window: 50,
            ema_span: 20,
            rsi_period: 14,
            atr_period: 14,
            volatility_window: 20,
            cumulative_return_period: 5,
            volume_roc_period: 5,
        }
    }
}

/// Named feature columns aligned with a candle series.
#[derive(Debug, Clone)]
pub struct FeatureFrame {
    pub timestamps: Vec<DateTime<Utc>>,
    pub names: Vec<String>,
    pub columns: Vec<Vec<f64>>,
}

impl FeatureFrame {
    /// Compute every feature column over the candle series.
    pub fn compute(candles: &[Candle], config: &FeatureConfig) -> Self {
        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        let volumes: Vec<f64> = candles.iter().map(|c| c.volume).collect();
        let timestamps: Vec<DateTime<Utc>> = candles.iter().map(|c| c.timestamp).collect();

        let mut names: Vec<String> = Vec::new();
        let mut columns: Vec<Vec<f64>> = Vec::new();

        names.push("return_1".to_string());
        columns.push(returns(&closes));

        names.push("log_return_1".to_string());
        columns.push(log_returns(&closes));

        names.push(format!("cum_return_{}", config.cumulative_return_period));
        columns.push(cumulative_return(&closes, config.cumulative_return_period));

        names.push(format!("volatility_{}", config.volatility_window));
        columns.push(return_volatility(&closes, config.volatility_window));

        let slow = sma(&closes, config.slow_sma_window);
        names.push(format!("distance_ma{}", config.slow_sma_window));
        columns.push(distance(&closes, &slow));

        let ema_series = ema(&closes, config.ema_span);
        names.push(format!("distance_ema{}", config.ema_span));
        columns.push(distance(&closes, &ema_series));

        names.push(format!(
            "ma_gap_{}_{}",
            config.fast_sma_window, config.slow_sma_window
        ));
        columns.push(sma_gap(
            &closes,
            config.fast_sma_window,
            config.slow_sma_window,
        ));

        names.push(format!("rsi_{}", config.rsi_period));
        columns.push(rsi(&closes, config.rsi_period));

        let atr_series = atr(candles, config.atr_period);
        let atr_pct: Vec<f64> = atr_series
            .iter()
            .zip(closes.iter())
            .map(|(a, c)| {
                if a.is_nan() || *c == 0.0 {
                    f64::NAN
                } else {
                    a / c
                }
            })
            .collect();
        names.push(format!("atr_pct_{}", config.atr_period));
        columns.push(atr_pct);

        names.push(format!("volume_roc_{}", config.volume_roc_period));
        columns.push(roc(&volumes, config.volume_roc_period));

        Self {
            timestamps,
            names,
            columns,
        }
    }

    /// Number of rows (candles).
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// A row is complete when every column holds a finite value.
    pub fn is_complete_row(&self, index: usize) -> bool {
        index < self.len() && self.columns.iter().all(|c| c[index].is_finite())
    }

    /// Index of the first complete row, if any.
    pub fn first_complete_row(&self) -> Option<usize> {
        (0..self.len()).find(|&i| self.is_complete_row(i))
    }

    /// Column lookup by name.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.columns[i].as_slice())
    }
}
