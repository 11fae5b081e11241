//! Collapsing a decoded state sequence into reportable runs.

use serde::Serialize;
use std::fmt;

/// A maximal contiguous stretch of one burst level, with its covering time
/// range `[start, end)` drawn from the original time points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Run {
    pub level: usize,
    pub start: f64,
    pub end: f64,
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State {}: [{} - {})", self.level, self.start, self.end)
    }
}

/// Collapse a per-boundary state sequence into contiguous runs.
///
/// A new run opens whenever the level changes; the previous run closes at
/// the time point where the change occurred, and the final run closes at the
/// last time point. `timestamps` and `states` must be the same length (one
/// state per interval boundary).
pub fn summarize(timestamps: &[f64], states: &[usize]) -> Vec<Run> {
    debug_assert_eq!(timestamps.len(), states.len());
    if states.is_empty() || timestamps.len() != states.len() {
        return Vec::new();
    }

    let mut runs = Vec::new();
    let mut level = states[0];
    let mut start = timestamps[0];
    for i in 1..states.len() {
        if states[i] != level {
            runs.push(Run {
                level,
                start,
                end: timestamps[i],
            });
            level = states[i];
            start = timestamps[i];
        }
    }
    runs.push(Run {
        level,
        start,
        end: timestamps[timestamps.len() - 1],
    });
    runs
}
