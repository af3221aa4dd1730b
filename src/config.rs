//! Environment-backed configuration with defaults.

use std::env;

/// Deployment environment name, used to pick the log format.
pub fn get_environment() -> String {
    env::var("AURIX_ENV").unwrap_or_else(|_| "development".to_string())
}

/// Base URL of the chart API.
pub fn get_chart_base_url() -> String {
    env::var("AURIX_CHART_BASE_URL")
        .unwrap_or_else(|_| "https://query1.finance.yahoo.com".to_string())
}

/// Directory for fetched bars and exported datasets.
pub fn get_data_dir() -> String {
    env::var("AURIX_DATA_DIR").unwrap_or_else(|_| "data".to_string())
}
