//! Chart API client for daily equity bars (Yahoo-style v8 endpoint).

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::data::error::{DataError, DataResult};
use crate::data::provider::MarketDataProvider;
use crate::models::{normalize_series, BarInterval, Candle};

const BASE_URL: &str = "https://query1.finance.yahoo.com";

/// HTTP client for the `/v8/finance/chart/{symbol}` endpoint.
#[derive(Debug, Clone)]
pub struct ChartClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartPayload,
}

#[derive(Debug, Deserialize)]
struct ChartPayload {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartApiError>,
}

#[derive(Debug, Deserialize)]
struct ChartApiError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    quote: Vec<QuoteBlock>,
}

/// Per-field arrays aligned with `timestamp`; the API nulls out holiday and
/// halted sessions instead of omitting them.
#[derive(Debug, Default, Deserialize)]
struct QuoteBlock {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

impl Default for ChartClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Client against a custom base URL (test servers, mirrors).
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn convert(&self, symbol: &str, result: ChartResult) -> DataResult<Vec<Candle>> {
        let timestamps = result.timestamp.unwrap_or_default();
        let quote = result
            .indicators
            .quote
            .into_iter()
            .next()
            .unwrap_or_default();

        let mut candles = Vec::with_capacity(timestamps.len());
        let mut skipped = 0usize;
        for (i, &ts) in timestamps.iter().enumerate() {
            let row = (
                quote.open.get(i).copied().flatten(),
                quote.high.get(i).copied().flatten(),
                quote.low.get(i).copied().flatten(),
                quote.close.get(i).copied().flatten(),
                quote.volume.get(i).copied().flatten(),
            );
            let (Some(open), Some(high), Some(low), Some(close), Some(volume)) = row else {
                skipped += 1;
                continue;
            };
            let Some(timestamp) = Utc.timestamp_opt(ts, 0).single() else {
                skipped += 1;
                continue;
            };
            candles.push(Candle::new(timestamp, open, high, low, close, volume));
        }

        if skipped > 0 {
            debug!(symbol, skipped, "dropped bars with null fields");
        }

        let candles = normalize_series(candles);
        if candles.is_empty() {
            return Err(DataError::NoData(symbol.to_string()));
        }
        Ok(candles)
    }
}

#[async_trait]
impl MarketDataProvider for ChartClient {
    async fn fetch_bars(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        interval: BarInterval,
    ) -> DataResult<Vec<Candle>> {
        if start >= end {
            return Err(DataError::InvalidDateRange);
        }

        let url = format!(
            "{}/v8/finance/chart/{}?period1={}&period2={}&interval={}&events=history",
            self.base_url,
            symbol,
            start.timestamp(),
            end.timestamp(),
            interval.as_str()
        );

        debug!(symbol, %interval, "requesting bars from chart API");
        let response: ChartResponse = self.client.get(&url).send().await?.json().await?;

        if let Some(err) = response.chart.error {
            return Err(DataError::ApiResponseError {
                code: err.code,
                message: err.description,
            });
        }

        let result = response
            .chart
            .result
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| DataError::NoData(symbol.to_string()))?;

        let candles = self.convert(symbol, result)?;
        info!(
            symbol,
            bars = candles.len(),
            from = %candles[0].timestamp.date_naive(),
            to = %candles[candles.len() - 1].timestamp.date_naive(),
            "fetched bar series"
        );
        Ok(candles)
    }
}
