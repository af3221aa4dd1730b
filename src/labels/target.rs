//! Binary forecast target: golden cross within a forward horizon.

use crate::labels::golden_cross::{CrossEvent, CrossKind};

/// `target[i]` is `Some(true)` when a golden cross occurs at some index in
/// `(i, i + horizon]`, `Some(false)` when none does, and `None` when the
/// target is undefined: before `defined_from` (MA warmup) or when the
/// horizon runs past the end of the series. Undefined rows never enter a
/// dataset, so the tail of the series is excluded rather than assumed
/// negative.
pub fn horizon_target(
    events: &[CrossEvent],
    len: usize,
    defined_from: usize,
    horizon: usize,
) -> Vec<Option<bool>> {
    let mut is_golden = vec![false; len];
    for event in events {
        if event.kind == CrossKind::Golden && event.index < len {
            is_golden[event.index] = true;
        }
    }

    // next_golden[i] = nearest golden-cross index strictly after i
    let mut next_golden = vec![usize::MAX; len];
    let mut nearest = usize::MAX;
    for i in (0..len).rev() {
        next_golden[i] = nearest;
        if is_golden[i] {
            nearest = i;
        }
    }

    (0..len)
        .map(|i| {
            if i < defined_from || horizon == 0 || i + horizon >= len {
                None
            } else {
                Some(next_golden[i] != usize::MAX && next_golden[i] <= i + horizon)
            }
        })
        .collect()
}
