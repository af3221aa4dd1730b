//! ATR (Average True Range) series

use crate::models::Candle;

/// True range of a bar given the previous close.
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    let hl = high - low;
    let hc = (high - prev_close).abs();
    let lc = (low - prev_close).abs();
    hl.max(hc).max(lc)
}

/// ATR as an SMA of true range, aligned with the candle series.
///
/// True range needs the previous close, so the first position is NAN and
/// the ATR itself is defined from index `period`.
pub fn atr(candles: &[Candle], period: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; candles.len()];
    if period == 0 || candles.len() < period + 1 {
        return out;
    }

    let mut tr = vec![f64::NAN; candles.len()];
    for i in 1..candles.len() {
        tr[i] = true_range(candles[i].high, candles[i].low, candles[i - 1].close);
    }

    for i in period..candles.len() {
        let sum: f64 = tr[(i + 1 - period)..=i].iter().sum();
        out[i] = sum / period as f64;
    }
    out
}
