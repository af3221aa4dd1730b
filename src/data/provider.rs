//! Market data provider interface for pluggable bar sources.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::data::error::DataResult;
use crate::models::{BarInterval, Candle};

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch bars for a symbol over a date window, oldest first.
    async fn fetch_bars(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        interval: BarInterval,
    ) -> DataResult<Vec<Candle>>;
}
