//! K-of-N confirmation rule over a stream of session predictions.
//!
//! A transition is confirmed when at least `threshold` of the trailing
//! `window` predictions are positive. The window is strict: nothing can
//! confirm before `window` observations exist, and a missing session
//! clears the accumulated state so confirmations never bridge gaps.
//! Events fire on the rising edge only; while the count stays at or above
//! threshold the episode continues without emitting again, and the trigger
//! re-arms once the count drops below threshold.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmConfig {
    pub window: usize,
    pub threshold: usize,
}

impl Default for ConfirmConfig {
    fn default() -> Self {
        Self {
            window: 10,
            threshold: 7,
        }
    }
}

impl ConfirmConfig {
    pub fn new(window: usize, threshold: usize) -> Result<Self, String> {
        if window == 0 {
            return Err("window must be positive".to_string());
        }
        if threshold == 0 || threshold > window {
            return Err(format!(
                "threshold must be in 1..={}, got: {}",
                window, threshold
            ));
        }
        Ok(Self { window, threshold })
    }
}

/// A confirmed transition at a stream position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmedEvent {
    pub index: usize,
    pub positives_in_window: usize,
}

/// Streaming state machine for the confirmation rule.
#[derive(Debug)]
pub struct Confirmer {
    config: ConfirmConfig,
    window: VecDeque<bool>,
    positives: usize,
    in_episode: bool,
    index: usize,
}

impl Confirmer {
    pub fn new(config: ConfirmConfig) -> Self {
        let capacity = config.window;
        Self {
            config,
            window: VecDeque::with_capacity(capacity + 1),
            positives: 0,
            in_episode: false,
            index: 0,
        }
    }

    /// Feed the next session. `None` marks a missing session and resets
    /// the window. Returns an event when a new episode begins.
    pub fn push(&mut self, prediction: Option<bool>) -> Option<ConfirmedEvent> {
        let index = self.index;
        self.index += 1;

        let Some(positive) = prediction else {
            self.reset_window();
            return None;
        };

        self.window.push_back(positive);
        if positive {
            self.positives += 1;
        }
        if self.window.len() > self.config.window {
            if self.window.pop_front() == Some(true) {
                self.positives -= 1;
            }
        }

        if self.window.len() < self.config.window {
            return None;
        }

        if self.positives >= self.config.threshold {
            if !self.in_episode {
                self.in_episode = true;
                return Some(ConfirmedEvent {
                    index,
                    positives_in_window: self.positives,
                });
            }
        } else {
            self.in_episode = false;
        }
        None
    }

    fn reset_window(&mut self) {
        self.window.clear();
        self.positives = 0;
        self.in_episode = false;
    }
}

/// Run the confirmer over a whole prediction series.
pub fn confirm_series(
    predictions: &[Option<bool>],
    config: &ConfirmConfig,
) -> Vec<ConfirmedEvent> {
    let mut confirmer = Confirmer::new(config.clone());
    predictions
        .iter()
        .filter_map(|p| confirmer.push(*p))
        .collect()
}
