use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastWeights {
    pub gap_weight: f64,
    pub momentum_weight: f64,
    pub volume_weight: f64,
}

impl Default for ForecastWeights {
    fn default() -> Self {
        Self {
            gap_weight: 0.5,
            momentum_weight: 0.3,
            volume_weight: 0.2,
        }
    }
}

impl ForecastWeights {
    pub fn new(
        gap_weight: f64,
        momentum_weight: f64,
        volume_weight: f64,
    ) -> Result<Self, String> {
        let total = gap_weight + momentum_weight + volume_weight;
        if (total - 1.0).abs() > 0.001 {
            return Err(format!("Weights must sum to 1.0, got: {}", total));
        }
        if gap_weight < 0.0 || momentum_weight < 0.0 || volume_weight < 0.0 {
            return Err("All weights must be non-negative".to_string());
        }
        Ok(Self {
            gap_weight,
            momentum_weight,
            volume_weight,
        })
    }
}
