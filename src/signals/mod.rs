//! Heuristic cross forecasting: weighted component scores per session.

pub mod forecaster;
pub mod weights;

pub use forecaster::{
    ComponentScores, CrossForecast, CrossForecaster, ForecastConfig, ForecastReason,
    SessionForecast,
};
pub use weights::ForecastWeights;
