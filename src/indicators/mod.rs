//! Indicator series over OHLCV bars.
//!
//! Every function returns a `Vec<f64>` aligned with its input, with NAN in
//! warmup positions where the computation is not yet defined.

pub mod returns;

pub mod momentum;
pub mod trend;
pub mod volatility;

pub use momentum::{roc, rsi};
pub use returns::{cumulative_return, distance, log_returns, returns};
pub use trend::{ema, sma, sma_gap};
pub use volatility::{atr, return_volatility, rolling_std, true_range};
