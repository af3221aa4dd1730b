//! Shared data models spanning the pipeline stages.

pub mod candle;

pub use candle::{normalize_series, BarInterval, Candle};
