//! ROC (Rate of Change) series

/// Percent rate of change over `period` steps:
/// `(v[i] - v[i - period]) / v[i - period] * 100`.
///
/// Used on volume here, but works on any positive series. A zero base
/// leaves the position NAN.
pub fn roc(values: &[f64], period: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if period == 0 || values.len() <= period {
        return out;
    }

    for i in period..values.len() {
        let base = values[i - period];
        if base != 0.0 && base.is_finite() {
            out[i] = (values[i] - base) / base * 100.0;
        }
    }
    out
}
