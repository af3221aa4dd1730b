//! Tabular CSV output: feature frames, datasets, forecast streams.

use std::path::Path;

use tracing::info;

use crate::data::error::DataResult;
use crate::dataset::Dataset;
use crate::features::FeatureFrame;
use crate::signals::SessionForecast;

/// Write a dataset as `timestamp,<features...>,target`.
pub fn write_dataset(path: &Path, dataset: &Dataset) -> DataResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["timestamp".to_string()];
    header.extend(dataset.feature_names.iter().cloned());
    header.push("target".to_string());
    writer.write_record(&header)?;

    for i in 0..dataset.n_samples() {
        let mut record = vec![dataset.timestamps[i].to_rfc3339()];
        for j in 0..dataset.n_features() {
            record.push(dataset.x[[i, j]].to_string());
        }
        record.push((dataset.y[i] as i64).to_string());
        writer.write_record(&record)?;
    }
    writer.flush()?;
    info!(path = %path.display(), rows = dataset.n_samples(), "wrote dataset");
    Ok(())
}

/// Write a feature frame as `timestamp,<features...>`, warmup rows
/// included as empty cells.
pub fn write_feature_frame(path: &Path, frame: &FeatureFrame) -> DataResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["timestamp".to_string()];
    header.extend(frame.names.iter().cloned());
    writer.write_record(&header)?;

    for i in 0..frame.len() {
        let mut record = vec![frame.timestamps[i].to_rfc3339()];
        for column in &frame.columns {
            if column[i].is_finite() {
                record.push(column[i].to_string());
            } else {
                record.push(String::new());
            }
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;
    info!(path = %path.display(), rows = frame.len(), "wrote feature frame");
    Ok(())
}

/// Write per-session forecasts as `timestamp,score,predicted`.
pub fn write_forecasts(path: &Path, forecasts: &[SessionForecast]) -> DataResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for forecast in forecasts {
        writer.serialize(forecast)?;
    }
    writer.flush()?;
    info!(path = %path.display(), rows = forecasts.len(), "wrote forecasts");
    Ok(())
}

/// Read a predictions CSV in the `write_forecasts` format. External model
/// output uses the same three columns.
pub fn read_forecasts(path: &Path) -> DataResult<Vec<SessionForecast>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut forecasts = Vec::new();
    for row in reader.deserialize() {
        let forecast: SessionForecast = row?;
        forecasts.push(forecast);
    }
    forecasts.sort_by_key(|f| f.timestamp);
    Ok(forecasts)
}
