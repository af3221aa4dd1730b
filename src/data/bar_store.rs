//! CSV persistence for candle series.

use std::path::Path;

use tracing::{debug, info};

use crate::data::error::DataResult;
use crate::models::{normalize_series, Candle};

/// Write a candle series as CSV with a header row.
pub fn save_candles(path: &Path, candles: &[Candle]) -> DataResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for candle in candles {
        writer.serialize(candle)?;
    }
    writer.flush()?;
    info!(path = %path.display(), rows = candles.len(), "saved candle series");
    Ok(())
}

/// Load a candle series from CSV, sorted and deduplicated by timestamp.
pub fn load_candles(path: &Path) -> DataResult<Vec<Candle>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut candles = Vec::new();
    for row in reader.deserialize() {
        let candle: Candle = row?;
        candles.push(candle);
    }
    let candles = normalize_series(candles);
    debug!(path = %path.display(), rows = candles.len(), "loaded candle series");
    Ok(candles)
}
