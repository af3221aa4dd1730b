//! Return and distance series

/// 1-step percent change; index 0 is NAN.
pub fn returns(closes: &[f64]) -> Vec<f64> {
    let mut out = vec![f64::NAN; closes.len()];
    for i in 1..closes.len() {
        if closes[i - 1] != 0.0 {
            out[i] = (closes[i] - closes[i - 1]) / closes[i - 1];
        }
    }
    out
}

/// Natural log of (1 + return); index 0 is NAN.
pub fn log_returns(closes: &[f64]) -> Vec<f64> {
    returns(closes)
        .into_iter()
        .map(|r| if r.is_nan() { f64::NAN } else { (1.0 + r).ln() })
        .collect()
}

/// Compounded return over the trailing `period` steps:
/// `prod(1 + r) - 1` over the last `period` 1-step returns.
pub fn cumulative_return(closes: &[f64], period: usize) -> Vec<f64> {
    let r = returns(closes);
    let mut out = vec![f64::NAN; closes.len()];
    if period == 0 || closes.len() <= period {
        return out;
    }

    for i in period..closes.len() {
        let window = &r[(i + 1 - period)..=i];
        if window.iter().any(|v| v.is_nan()) {
            continue;
        }
        out[i] = window.iter().fold(1.0, |acc, v| acc * (1.0 + v)) - 1.0;
    }
    out
}

/// Relative distance of each value from a baseline series:
/// `(value - baseline) / baseline`.
pub fn distance(values: &[f64], baseline: &[f64]) -> Vec<f64> {
    values
        .iter()
        .zip(baseline.iter())
        .map(|(v, b)| {
            if v.is_nan() || b.is_nan() || *b == 0.0 {
                f64::NAN
            } else {
                (v - b) / b
            }
        })
        .collect()
}
