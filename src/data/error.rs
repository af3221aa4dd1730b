//! Data retrieval and storage error types

use thiserror::Error;

/// Errors from bar retrieval and CSV persistence.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("chart API returned error: {code} - {message}")]
    ApiResponseError { code: String, message: String },

    #[error("invalid date range: start must come before end")]
    InvalidDateRange,

    #[error("no data returned for {0}")]
    NoData(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;
