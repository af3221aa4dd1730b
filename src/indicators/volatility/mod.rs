//! Volatility indicators: ATR, rolling return volatility

pub mod atr;
pub mod rolling;

pub use atr::*;
pub use rolling::*;
