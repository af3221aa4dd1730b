//! Aurix: golden-cross regime forecasting research pipeline.
//!
//! Daily OHLC bars go in; leakage-free train/test datasets, confirmation
//! events, and precision-first evaluation reports come out:
//!
//! - `data`: chart API client and CSV bar store
//! - `indicators`: aligned indicator series (SMA, EMA, RSI, ATR, ROC, ...)
//! - `features`: named feature columns over a candle series
//! - `labels`: golden/death crosses, regimes, and the horizon target
//! - `confirm`: the K-of-N confirmation window over session predictions
//! - `dataset`: assembly, temporal split with purge, CSV export
//! - `signals`: the rule-based cross forecaster baseline
//! - `eval`: confusion metrics and event matching
//! - `robustness`: noise-perturbation stability checks
//! - `pipeline`: batch orchestration of the above

pub mod config;
pub mod confirm;
pub mod data;
pub mod dataset;
pub mod eval;
pub mod features;
pub mod indicators;
pub mod labels;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod robustness;
pub mod signals;

pub use confirm::{confirm_series, ConfirmConfig, ConfirmedEvent, Confirmer};
pub use data::{ChartClient, DataError, MarketDataProvider};
pub use dataset::{temporal_split, Dataset, SplitConfig, TemporalSplit};
pub use eval::{ConfusionMatrix, EvaluationReport};
pub use features::{FeatureConfig, FeatureFrame};
pub use labels::{CrossEvent, CrossKind, LabelConfig, LabelSet, TrendRegime};
pub use models::{BarInterval, Candle};
pub use pipeline::{Pipeline, PipelineConfig, PipelineSummary};
pub use robustness::{run_robustness, PerturbConfig, RobustnessReport};
pub use signals::{CrossForecaster, ForecastConfig, ForecastWeights};
