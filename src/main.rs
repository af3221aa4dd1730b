//! Aurix CLI: fetch bars, build datasets, score and evaluate forecasts.

use std::path::PathBuf;

use anyhow::{bail, Context};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use aurix::confirm::{confirm_series, ConfirmConfig};
use aurix::data::{bar_store, ChartClient, MarketDataProvider};
use aurix::dataset::{
    read_forecasts, temporal_split, write_dataset, write_feature_frame, write_forecasts, Dataset,
    SplitConfig,
};
use aurix::eval::{
    align_predictions, match_events, ClassificationReport, ConfusionMatrix, EvaluationReport,
};
use aurix::features::{FeatureConfig, FeatureFrame};
use aurix::labels::{LabelConfig, LabelSet, TrendRegime};
use aurix::models::{BarInterval, Candle};
use aurix::pipeline::{Pipeline, PipelineConfig};
use aurix::robustness::{run_robustness, PerturbConfig};
use aurix::signals::{CrossForecaster, ForecastConfig, SessionForecast};
use aurix::{config, logging};

#[derive(Parser)]
#[command(name = "aurix")]
#[command(about = "Golden-cross regime forecasting research pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch daily bars from the chart API into a CSV
    Fetch {
        /// Ticker symbol
        #[arg(short, long, default_value = "SPY")]
        symbol: String,

        /// Window start, YYYY-MM-DD
        #[arg(long, default_value = "2010-01-01")]
        start: String,

        /// Window end, YYYY-MM-DD
        #[arg(long, default_value = "2024-12-31")]
        end: String,

        /// Bar interval (1d, 1wk, 1mo)
        #[arg(short, long, default_value = "1d")]
        interval: String,

        /// Output CSV path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compute the feature frame for a bar CSV
    Features {
        /// Path to bar CSV
        #[arg(short, long)]
        data: PathBuf,

        /// Output CSV path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Detect crosses and summarize regimes and the forecast target
    Label {
        /// Path to bar CSV
        #[arg(short, long)]
        data: PathBuf,

        /// Fast SMA window
        #[arg(long, default_value = "10")]
        fast: usize,

        /// Slow SMA window
        #[arg(long, default_value = "50")]
        slow: usize,

        /// Forward horizon in sessions
        #[arg(long, default_value = "10")]
        horizon: usize,
    },

    /// Build the dataset and export a temporal train/test split
    Dataset {
        /// Path to bar CSV
        #[arg(short, long)]
        data: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Fraction of rows on the train side
        #[arg(long, default_value = "0.8")]
        train_ratio: f64,

        /// First test-side date, YYYY-MM-DD (overrides the ratio)
        #[arg(long)]
        split_date: Option<String>,

        /// Forward horizon in sessions (also the leakage purge)
        #[arg(long, default_value = "10")]
        horizon: usize,
    },

    /// Run the heuristic cross forecaster over a bar CSV
    Signal {
        /// Path to bar CSV
        #[arg(short, long)]
        data: PathBuf,

        /// Output predictions CSV
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Score threshold for a positive prediction
        #[arg(long, default_value = "0.6")]
        threshold: f64,
    },

    /// Evaluate a predictions CSV against recomputed labels
    Evaluate {
        /// Path to bar CSV
        #[arg(short, long)]
        data: PathBuf,

        /// Path to predictions CSV (timestamp,score,predicted)
        #[arg(short, long)]
        predictions: PathBuf,

        /// Forward horizon in sessions
        #[arg(long, default_value = "10")]
        horizon: usize,

        /// Confirmation window length
        #[arg(long, default_value = "10")]
        window: usize,

        /// Positives required inside the window
        #[arg(long, default_value = "7")]
        confirm_threshold: usize,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Noise-perturbation stability study of labels and forecasts
    Robustness {
        /// Path to bar CSV
        #[arg(short, long)]
        data: PathBuf,

        /// Std dev of multiplicative close noise
        #[arg(long, default_value = "0.005")]
        sigma: f64,

        /// Number of perturbation trials
        #[arg(long, default_value = "20")]
        trials: usize,

        /// RNG seed
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Full pipeline: fetch or load, label, split, export
    Run {
        /// Ticker symbol
        #[arg(short, long, default_value = "SPY")]
        symbol: String,

        /// Window start, YYYY-MM-DD
        #[arg(long, default_value = "2010-01-01")]
        start: String,

        /// Window end, YYYY-MM-DD
        #[arg(long, default_value = "2024-12-31")]
        end: String,

        /// Bar interval (1d, 1wk, 1mo)
        #[arg(short, long, default_value = "1d")]
        interval: String,

        /// Load bars from this CSV instead of fetching
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Fraction of rows on the train side
        #[arg(long, default_value = "0.8")]
        train_ratio: f64,

        /// Forward horizon in sessions (also the leakage purge)
        #[arg(long, default_value = "10")]
        horizon: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();
    match cli.command {
        Commands::Fetch {
            symbol,
            start,
            end,
            interval,
            output,
        } => {
            let client = ChartClient::with_base_url(&config::get_chart_base_url());
            let candles = client
                .fetch_bars(
                    &symbol,
                    parse_date(&start)?,
                    parse_date(&end)?,
                    parse_interval(&interval)?,
                )
                .await?;
            let output = output.unwrap_or_else(|| default_path(&format!("{symbol}_bars.csv")));
            bar_store::save_candles(&output, &candles)?;
            info!(bars = candles.len(), path = %output.display(), "fetch complete");
        }

        Commands::Features { data, output } => {
            let candles = load_bars(&data)?;
            let frame = FeatureFrame::compute(&candles, &FeatureConfig::default());
            let output = output.unwrap_or_else(|| default_path("features.csv"));
            write_feature_frame(&output, &frame)?;
            let complete = frame.first_complete_row();
            info!(
                columns = frame.names.len(),
                first_complete_row = ?complete,
                path = %output.display(),
                "features written"
            );
        }

        Commands::Label {
            data,
            fast,
            slow,
            horizon,
        } => {
            let candles = load_bars(&data)?;
            let label_config = LabelConfig {
                fast_window: fast,
                slow_window: slow,
                horizon,
            };
            let labels = LabelSet::compute(&candles, &label_config);
            print_label_summary(&candles, &labels);
        }

        Commands::Dataset {
            data,
            output_dir,
            train_ratio,
            split_date,
            horizon,
        } => {
            let candles = load_bars(&data)?;
            let labels = LabelSet::compute(
                &candles,
                &LabelConfig {
                    horizon,
                    ..LabelConfig::default()
                },
            );
            let frame = FeatureFrame::compute(&candles, &FeatureConfig::default());
            let dataset = Dataset::from_frame(&frame, &labels)?;

            let split_config = SplitConfig {
                train_ratio,
                split_date: split_date.as_deref().map(parse_date).transpose()?,
                purge: horizon,
            };
            let split = temporal_split(&dataset, &split_config)?;

            let dir = output_dir.unwrap_or_else(|| PathBuf::from(config::get_data_dir()));
            std::fs::create_dir_all(&dir)?;
            let train_path = dir.join("train.csv");
            let test_path = dir.join("test.csv");
            write_dataset(&train_path, &split.train)?;
            write_dataset(&test_path, &split.test)?;

            let summary = split.summary();
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }

        Commands::Signal {
            data,
            output,
            threshold,
        } => {
            let candles = load_bars(&data)?;
            let forecaster = CrossForecaster::new(ForecastConfig {
                score_threshold: threshold,
                ..ForecastConfig::default()
            });
            let forecasts: Vec<SessionForecast> = forecaster
                .forecast_series(&candles)
                .iter()
                .flatten()
                .map(SessionForecast::from)
                .collect();
            let positives = forecasts.iter().filter(|f| f.predicted).count();
            let output = output.unwrap_or_else(|| default_path("predictions.csv"));
            write_forecasts(&output, &forecasts)?;
            info!(
                sessions = forecasts.len(),
                positives,
                path = %output.display(),
                "forecasts written"
            );
        }

        Commands::Evaluate {
            data,
            predictions,
            horizon,
            window,
            confirm_threshold,
            json,
        } => {
            let candles = load_bars(&data)?;
            let labels = LabelSet::compute(
                &candles,
                &LabelConfig {
                    horizon,
                    ..LabelConfig::default()
                },
            );

            let forecasts = read_forecasts(&predictions)?;
            let timestamps: Vec<DateTime<Utc>> = candles.iter().map(|c| c.timestamp).collect();
            let (predicted, unmatched) = align_predictions(&timestamps, &forecasts);
            if unmatched > 0 {
                warn!(unmatched, "predictions with no matching bar timestamp");
            }

            let matrix = ConfusionMatrix::from_labels(&labels.target, &predicted);
            let confirm_config = ConfirmConfig::new(window, confirm_threshold)
                .map_err(anyhow::Error::msg)?;
            let confirmations = confirm_series(&predicted, &confirm_config);
            let events = match_events(
                &confirmations,
                &labels.golden_indices(),
                confirm_config.window,
                horizon,
            );

            let report = EvaluationReport {
                classification: ClassificationReport::from_matrix(matrix),
                events: Some(events),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.render());
            }
        }

        Commands::Robustness {
            data,
            sigma,
            trials,
            seed,
        } => {
            let candles = load_bars(&data)?;
            let report = run_robustness(
                &candles,
                &LabelConfig::default(),
                &ForecastConfig::default(),
                &PerturbConfig {
                    sigma,
                    trials,
                    seed,
                },
            )
            .map_err(anyhow::Error::msg)?;
            print!("{}", report.render());
        }

        Commands::Run {
            symbol,
            start,
            end,
            interval,
            input,
            output_dir,
            train_ratio,
            horizon,
        } => {
            let pipeline_config = PipelineConfig {
                symbol,
                start: parse_date(&start)?,
                end: parse_date(&end)?,
                interval: parse_interval(&interval)?,
                input_csv: input,
                output_dir: output_dir.unwrap_or_else(|| PathBuf::from(config::get_data_dir())),
                features: FeatureConfig::default(),
                labels: LabelConfig {
                    horizon,
                    ..LabelConfig::default()
                },
                split: SplitConfig {
                    train_ratio,
                    split_date: None,
                    purge: horizon,
                },
            };
            let client = ChartClient::with_base_url(&config::get_chart_base_url());
            let summary = Pipeline::new(pipeline_config).run(&client).await?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}

fn parse_date(s: &str) -> anyhow::Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("invalid date (expected YYYY-MM-DD): {s}"))?;
    let naive = date
        .and_hms_opt(0, 0, 0)
        .with_context(|| format!("invalid date: {s}"))?;
    Ok(Utc.from_utc_datetime(&naive))
}

fn parse_interval(s: &str) -> anyhow::Result<BarInterval> {
    BarInterval::parse(s).with_context(|| format!("invalid interval: {s}"))
}

fn default_path(name: &str) -> PathBuf {
    PathBuf::from(config::get_data_dir()).join(name)
}

fn load_bars(path: &PathBuf) -> anyhow::Result<Vec<Candle>> {
    let candles = bar_store::load_candles(path)
        .with_context(|| format!("failed to load bars from {}", path.display()))?;
    if candles.is_empty() {
        bail!("no bars in {}", path.display());
    }
    Ok(candles)
}

fn print_label_summary(candles: &[Candle], labels: &LabelSet) {
    let (defined, positives) = labels.target_counts();
    let bullish = labels
        .regimes
        .iter()
        .filter(|r| **r == TrendRegime::Bullish)
        .count();
    let bearish = labels
        .regimes
        .iter()
        .filter(|r| **r == TrendRegime::Bearish)
        .count();

    println!("bars                  {}", candles.len());
    println!(
        "crosses               {} golden / {} death",
        labels.golden_indices().len(),
        labels.events.len() - labels.golden_indices().len()
    );
    println!("regime sessions       {bullish} bullish / {bearish} bearish");
    if defined > 0 {
        println!(
            "target                {positives}/{defined} positive ({:.1}%)",
            positives as f64 / defined as f64 * 100.0
        );
    } else {
        println!("target                undefined (series shorter than warmup + horizon)");
    }
    for event in &labels.events {
        println!(
            "  {:?} cross at {} (index {})",
            event.kind,
            event.timestamp.date_naive(),
            event.index
        );
    }
}
