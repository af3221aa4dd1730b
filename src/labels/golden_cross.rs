//! Golden/death cross detection and regime classification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossKind {
    Golden,
    Death,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendRegime {
    Bullish,
    Bearish,
    Undefined,
}

/// A fast/slow moving-average crossing at a specific bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossEvent {
    pub index: usize,
    pub timestamp: DateTime<Utc>,
    pub kind: CrossKind,
    pub fast: f64,
    pub slow: f64,
}

/// Detect crossings between aligned fast and slow MA series.
///
/// A cross at index `i` needs both averages defined at `i - 1` and `i`.
/// Equality on the earlier bar counts as "not yet above", so a
/// touch-then-separate sequence crosses on the separating bar.
pub fn detect_crosses(
    fast: &[f64],
    slow: &[f64],
    timestamps: &[DateTime<Utc>],
) -> Vec<CrossEvent> {
    let mut events = Vec::new();
    for i in 1..fast.len().min(slow.len()) {
        let (pf, ps, f, s) = (fast[i - 1], slow[i - 1], fast[i], slow[i]);
        if pf.is_nan() || ps.is_nan() || f.is_nan() || s.is_nan() {
            continue;
        }
        let kind = if pf <= ps && f > s {
            CrossKind::Golden
        } else if pf >= ps && f < s {
            CrossKind::Death
        } else {
            continue;
        };
        events.push(CrossEvent {
            index: i,
            timestamp: timestamps[i],
            kind,
            fast: f,
            slow: s,
        });
    }
    events
}

/// Classify each bar's regime from the fast/slow MA relation.
///
/// Bullish while fast sits above slow, bearish below; an exact tie carries
/// the previous regime forward. Undefined until the first strict
/// comparison with both averages in place.
pub fn classify_regimes(fast: &[f64], slow: &[f64]) -> Vec<TrendRegime> {
    let len = fast.len().min(slow.len());
    let mut regimes = vec![TrendRegime::Undefined; len];
    let mut current = TrendRegime::Undefined;

    for i in 0..len {
        let (f, s) = (fast[i], slow[i]);
        if f.is_nan() || s.is_nan() {
            regimes[i] = current;
            continue;
        }
        if f > s {
            current = TrendRegime::Bullish;
        } else if f < s {
            current = TrendRegime::Bearish;
        }
        regimes[i] = current;
    }
    regimes
}
