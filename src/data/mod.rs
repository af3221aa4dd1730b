//! Bar ingestion: chart API client and CSV store.

pub mod bar_store;
pub mod chart;
pub mod error;
pub mod provider;

pub use bar_store::{load_candles, save_candles};
pub use chart::ChartClient;
pub use error::{DataError, DataResult};
pub use provider::MarketDataProvider;
