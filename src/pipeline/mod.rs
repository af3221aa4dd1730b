//! Batch orchestration: fetch-or-load through split export.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::data::{load_candles, save_candles, DataError, MarketDataProvider};
use crate::dataset::{
    temporal_split, write_dataset, ClassBalance, Dataset, DatasetError, SplitConfig, SplitSummary,
};
use crate::features::{FeatureConfig, FeatureFrame};
use crate::labels::{CrossKind, LabelConfig, LabelSet};
use crate::models::{BarInterval, Candle};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("data stage failed: {0}")]
    Data(#[from] DataError),

    #[error("dataset stage failed: {0}")]
    Dataset(#[from] DatasetError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub symbol: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub interval: BarInterval,
    /// Load bars from this CSV instead of fetching.
    pub input_csv: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub features: FeatureConfig,
    pub labels: LabelConfig,
    pub split: SplitConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSummary {
    pub symbol: String,
    pub bars: usize,
    pub golden_crosses: usize,
    pub death_crosses: usize,
    pub dataset_rows: usize,
    pub class_balance: ClassBalance,
    pub split: SplitSummary,
    pub bars_path: PathBuf,
    pub train_path: PathBuf,
    pub test_path: PathBuf,
}

pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Run every stage and write bars, train/test datasets, and a JSON
    /// summary under the output directory.
    pub async fn run(
        &self,
        provider: &dyn MarketDataProvider,
    ) -> Result<PipelineSummary, PipelineError> {
        let config = &self.config;
        fs::create_dir_all(&config.output_dir)?;

        let candles = self.acquire_bars(provider).await?;
        info!(symbol = %config.symbol, bars = candles.len(), "bars ready");

        let bars_path = config.output_dir.join(format!("{}_bars.csv", config.symbol));
        save_candles(&bars_path, &candles)?;

        let frame = FeatureFrame::compute(&candles, &config.features);
        info!(columns = frame.names.len(), "features computed");

        let labels = LabelSet::compute(&candles, &config.labels);
        let golden = labels
            .events
            .iter()
            .filter(|e| e.kind == CrossKind::Golden)
            .count();
        let death = labels.events.len() - golden;
        info!(golden, death, "cross events detected");

        let dataset = Dataset::from_frame(&frame, &labels)?;
        let balance = dataset.class_balance();
        info!(
            rows = dataset.n_samples(),
            positive_rate = balance.positive_rate,
            "dataset assembled"
        );

        let split = temporal_split(&dataset, &config.split)?;

        let train_path = config.output_dir.join(format!("{}_train.csv", config.symbol));
        let test_path = config.output_dir.join(format!("{}_test.csv", config.symbol));
        write_dataset(&train_path, &split.train)?;
        write_dataset(&test_path, &split.test)?;

        let summary = PipelineSummary {
            symbol: config.symbol.clone(),
            bars: candles.len(),
            golden_crosses: golden,
            death_crosses: death,
            dataset_rows: dataset.n_samples(),
            class_balance: balance,
            split: split.summary(),
            bars_path,
            train_path,
            test_path,
        };

        let summary_path = config.output_dir.join(format!("{}_summary.json", config.symbol));
        fs::write(&summary_path, serde_json::to_string_pretty(&summary)?)?;
        info!(path = %summary_path.display(), "pipeline complete");

        Ok(summary)
    }

    async fn acquire_bars(
        &self,
        provider: &dyn MarketDataProvider,
    ) -> Result<Vec<Candle>, DataError> {
        let config = &self.config;
        let candles = match &config.input_csv {
            Some(path) => load_candles(path)?,
            None => {
                provider
                    .fetch_bars(&config.symbol, config.start, config.end, config.interval)
                    .await?
            }
        };
        if candles.is_empty() {
            return Err(DataError::NoData(config.symbol.clone()));
        }
        Ok(candles)
    }
}
