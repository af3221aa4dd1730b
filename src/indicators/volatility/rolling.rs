//! Rolling volatility series

/// Rolling sample standard deviation (ddof = 1) over a fixed window.
///
/// A window that contains any NAN is NAN, so feeding 1-step returns keeps
/// the leading undefined return out of the early windows.
pub fn rolling_std(values: &[f64], window: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if window < 2 || values.len() < window {
        return out;
    }

    for i in (window - 1)..values.len() {
        let slice = &values[(i + 1 - window)..=i];
        if slice.iter().any(|v| v.is_nan()) {
            continue;
        }
        let mean: f64 = slice.iter().sum::<f64>() / window as f64;
        let var: f64 = slice.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
            / (window as f64 - 1.0);
        out[i] = var.sqrt();
    }
    out
}

/// Volatility of a close series: rolling sample std of its 1-step returns.
pub fn return_volatility(closes: &[f64], window: usize) -> Vec<f64> {
    let returns = crate::indicators::returns::returns(closes);
    rolling_std(&returns, window)
}
