//! SMA (Simple Moving Average) series

/// Rolling mean over a fixed window, aligned with the input.
///
/// Positions before the first full window are NAN.
pub fn sma(values: &[f64], window: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if window == 0 || values.len() < window {
        return out;
    }

    for i in (window - 1)..values.len() {
        let sum: f64 = values[(i + 1 - window)..=i].iter().sum();
        out[i] = sum / window as f64;
    }
    out
}

/// The gap between a fast and a slow SMA, normalized by the slow one:
/// `(fast - slow) / slow`. Negative below, positive above, zero at a cross.
pub fn sma_gap(closes: &[f64], fast_window: usize, slow_window: usize) -> Vec<f64> {
    let fast = sma(closes, fast_window);
    let slow = sma(closes, slow_window);
    fast.iter()
        .zip(slow.iter())
        .map(|(f, s)| {
            if f.is_nan() || s.is_nan() || *s == 0.0 {
                f64::NAN
            } else {
                (f - s) / s
            }
        })
        .collect()
}
