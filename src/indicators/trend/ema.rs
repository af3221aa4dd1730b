//! EMA (Exponential Moving Average) series

/// Exponentially weighted mean with adjusted weighting.
///
/// Each prefix averages the full history with weights `(1 - alpha)^k`,
/// `alpha = 2 / (span + 1)`, so the series is defined from index 0 instead
/// of seeding from an SMA. Computed recursively on a weighted numerator and
/// denominator.
pub fn ema(values: &[f64], span: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if span == 0 || values.is_empty() {
        return out;
    }

    let alpha = 2.0 / (span as f64 + 1.0);
    let decay = 1.0 - alpha;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (i, &v) in values.iter().enumerate() {
        numerator = v + decay * numerator;
        denominator = 1.0 + decay * denominator;
        out[i] = numerator / denominator;
    }
    out
}
