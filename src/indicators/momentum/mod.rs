//! Momentum indicators: RSI, ROC

pub mod roc;
pub mod rsi;

pub use roc::*;
pub use rsi::*;
