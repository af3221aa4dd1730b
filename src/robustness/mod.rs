//! Stability of labels and forecasts under price-noise perturbation.
//!
//! Each trial multiplies every close by `(1 + e)` with `e ~ Normal(0,
//! sigma)` from a seeded generator, widens high/low to keep bars coherent,
//! then recomputes labels and heuristic forecasts. A labeling rule whose
//! crosses scatter under sub-percent noise is fitting noise, not regime
//! structure.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::eval::ConfusionMatrix;
use crate::labels::{LabelConfig, LabelSet};
use crate::models::Candle;
use crate::signals::{CrossForecaster, ForecastConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerturbConfig {
    /// Standard deviation of the multiplicative close noise.
    pub sigma: f64,
    pub trials: usize,
    pub seed: u64,
}

impl Default for PerturbConfig {
    fn default() -> Self {
        Self {
            sigma: 0.005,
            trials: 20,
            seed: 42,
        }
    }
}

/// Mean and sample standard deviation over trials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StabilityStat {
    pub mean: f64,
    pub std: f64,
}

impl StabilityStat {
    pub fn from_samples(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self { mean: 0.0, std: 0.0 };
        }
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        let std = if samples.len() > 1 {
            let var = samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
                / (samples.len() as f64 - 1.0);
            var.sqrt()
        } else {
            0.0
        };
        Self { mean, std }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RobustnessReport {
    pub trials: usize,
    pub sigma: f64,
    /// Fraction of defined targets that flipped against the clean run.
    pub label_flip_rate: StabilityStat,
    /// Jaccard similarity of golden-cross index sets, ±1 session tolerance.
    pub event_jaccard: StabilityStat,
    /// Fraction of defined forecasts that flipped against the clean run.
    pub forecast_flip_rate: StabilityStat,
    /// Perturbed-run precision minus clean-run precision.
    pub precision_delta: StabilityStat,
    pub clean_precision: f64,
}

impl RobustnessReport {
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "trials                {} at sigma {:.4}\n",
            self.trials, self.sigma
        ));
        out.push_str(&format!(
            "label flip rate       {:.4} +/- {:.4}\n",
            self.label_flip_rate.mean, self.label_flip_rate.std
        ));
        out.push_str(&format!(
            "event jaccard         {:.4} +/- {:.4}\n",
            self.event_jaccard.mean, self.event_jaccard.std
        ));
        out.push_str(&format!(
            "forecast flip rate    {:.4} +/- {:.4}\n",
            self.forecast_flip_rate.mean, self.forecast_flip_rate.std
        ));
        out.push_str(&format!(
            "precision delta       {:+.4} +/- {:.4} (clean {:.4})\n",
            self.precision_delta.mean, self.precision_delta.std, self.clean_precision
        ));
        out
    }
}

/// Apply one trial's noise to the close series.
pub fn perturb_closes(candles: &[Candle], noise: &Normal<f64>, rng: &mut StdRng) -> Vec<Candle> {
    candles
        .iter()
        .map(|c| {
            let close = c.close * (1.0 + noise.sample(rng));
            Candle {
                high: c.high.max(close),
                low: c.low.min(close),
                close,
                ..c.clone()
            }
        })
        .collect()
}

/// Jaccard similarity of two ascending index sets with a match tolerance.
fn tolerant_jaccard(a: &[usize], b: &[usize], tolerance: usize) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let mut matched = 0usize;
    let (mut i, mut j) = (0usize, 0usize);
    while i < a.len() && j < b.len() {
        if a[i].abs_diff(b[j]) <= tolerance {
            matched += 1;
            i += 1;
            j += 1;
        } else if a[i] < b[j] {
            i += 1;
        } else {
            j += 1;
        }
    }
    matched as f64 / (a.len() + b.len() - matched) as f64
}

fn flip_rate<T: PartialEq>(clean: &[Option<T>], perturbed: &[Option<T>]) -> f64 {
    let mut both = 0usize;
    let mut flipped = 0usize;
    for (c, p) in clean.iter().zip(perturbed.iter()) {
        if let (Some(c), Some(p)) = (c, p) {
            both += 1;
            if c != p {
                flipped += 1;
            }
        }
    }
    if both == 0 {
        0.0
    } else {
        flipped as f64 / both as f64
    }
}

/// Run the full perturbation study against one candle series.
pub fn run_robustness(
    candles: &[Candle],
    label_config: &LabelConfig,
    forecast_config: &ForecastConfig,
    perturb: &PerturbConfig,
) -> Result<RobustnessReport, String> {
    if perturb.trials == 0 {
        return Err("trials must be positive".to_string());
    }
    if !(perturb.sigma > 0.0 && perturb.sigma.is_finite()) {
        return Err(format!("sigma must be positive, got: {}", perturb.sigma));
    }
    let noise = Normal::new(0.0, perturb.sigma).map_err(|e| e.to_string())?;
    let mut rng = StdRng::seed_from_u64(perturb.seed);

    let forecaster = CrossForecaster::new(forecast_config.clone());
    let clean_labels = LabelSet::compute(candles, label_config);
    let clean_golden = clean_labels.golden_indices();
    let clean_predictions = forecaster.predictions(candles);
    let clean_precision =
        ConfusionMatrix::from_labels(&clean_labels.target, &clean_predictions).precision();

    let mut label_flips = Vec::with_capacity(perturb.trials);
    let mut jaccards = Vec::with_capacity(perturb.trials);
    let mut forecast_flips = Vec::with_capacity(perturb.trials);
    let mut precision_deltas = Vec::with_capacity(perturb.trials);

    for trial in 0..perturb.trials {
        let perturbed = perturb_closes(candles, &noise, &mut rng);
        let labels = LabelSet::compute(&perturbed, label_config);
        let predictions = forecaster.predictions(&perturbed);

        label_flips.push(flip_rate(&clean_labels.target, &labels.target));
        jaccards.push(tolerant_jaccard(&clean_golden, &labels.golden_indices(), 1));
        forecast_flips.push(flip_rate(&clean_predictions, &predictions));

        let precision = ConfusionMatrix::from_labels(&labels.target, &predictions).precision();
        precision_deltas.push(precision - clean_precision);

        debug!(trial, "completed perturbation trial");
    }

    Ok(RobustnessReport {
        trials: perturb.trials,
        sigma: perturb.sigma,
        label_flip_rate: StabilityStat::from_samples(&label_flips),
        event_jaccard: StabilityStat::from_samples(&jaccards),
        forecast_flip_rate: StabilityStat::from_samples(&forecast_flips),
        precision_delta: StabilityStat::from_samples(&precision_deltas),
        clean_precision,
    })
}
