//! Rate schedule construction.
//!
//! The decoder hypothesizes a geometric ladder of Poisson rates. Level 0 is
//! the baseline rate `1 / average_gap`; each subsequent level multiplies the
//! rate by `scale`. The ladder height `k` is sized to the dynamic range
//! actually present in the data:
//!
//! ```text
//! k = 1 + round(log_scale(total_duration)) + round(log_scale(1 / min_gap))
//! ```
//!
//! so the slowest level's characteristic time covers the whole span and the
//! fastest level's characteristic time is at or below the smallest observed
//! gap. The rounding applied to the two log terms is an explicit parameter
//! ([`RoundingMode`], default [`RoundingMode::Ceil`]); only `Ceil` guarantees
//! the coverage bounds above, the other modes trade a shorter ladder for
//! possibly clipping the extremes.

use bd_common::{Error, Result};
use serde::{Deserialize, Serialize};

/// Rounding applied to each log term of the level-count formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round toward negative infinity.
    Floor,
    /// Round toward positive infinity (default; guarantees coverage).
    Ceil,
    /// Round half away from zero.
    Nearest,
}

impl RoundingMode {
    fn apply(self, x: f64) -> f64 {
        match self {
            RoundingMode::Floor => x.floor(),
            RoundingMode::Ceil => x.ceil(),
            RoundingMode::Nearest => x.round(),
        }
    }
}

/// An ordered, strictly increasing ladder of per-state event rates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSchedule {
    levels: Vec<f64>,
}

impl RateSchedule {
    /// Build the schedule from the observed time span.
    ///
    /// `total_duration` is the span covered by the events, `num_intervals`
    /// the number of inter-event gaps, and `min_gap` the smallest observed
    /// gap. Fails with `InvalidConfiguration` when `scale <= 1`,
    /// `min_gap <= 0`, `total_duration <= 0`, or `num_intervals == 0`.
    pub fn build(
        total_duration: f64,
        num_intervals: usize,
        scale: f64,
        min_gap: f64,
        rounding: RoundingMode,
    ) -> Result<Self> {
        if !scale.is_finite() || scale <= 1.0 {
            return Err(Error::InvalidConfiguration {
                parameter: "scale",
                value: scale,
                reason: "must be greater than 1",
            });
        }
        if !min_gap.is_finite() || min_gap <= 0.0 {
            return Err(Error::InvalidConfiguration {
                parameter: "min_gap",
                value: min_gap,
                reason: "must be positive",
            });
        }
        if !total_duration.is_finite() || total_duration <= 0.0 {
            return Err(Error::InvalidConfiguration {
                parameter: "total_duration",
                value: total_duration,
                reason: "must be positive",
            });
        }
        if num_intervals == 0 {
            return Err(Error::InvalidConfiguration {
                parameter: "num_intervals",
                value: 0.0,
                reason: "must be at least 1",
            });
        }

        let log_scale = scale.ln();
        let span_term = rounding.apply(total_duration.ln() / log_scale) as i64;
        let gap_term = rounding.apply(min_gap.recip().ln() / log_scale) as i64;
        // Floor rounding can push the sum below zero when the span is short;
        // a single baseline level is the smallest meaningful ladder.
        let k = (1 + span_term + gap_term).max(1) as usize;

        let base_rate = num_intervals as f64 / total_duration;
        let levels = (0..k).map(|i| scale.powi(i as i32) * base_rate).collect();
        tracing::debug!(k, base_rate, scale, "built rate schedule");
        Ok(Self { levels })
    }

    /// Build the schedule directly from a validated gap sequence.
    pub fn from_gaps(gaps: &[f64], scale: f64, rounding: RoundingMode) -> Result<Self> {
        let total: f64 = gaps.iter().sum();
        let min_gap = gaps.iter().copied().fold(f64::INFINITY, f64::min);
        Self::build(total, gaps.len(), scale, min_gap, rounding)
    }

    /// The rate ladder, strictly increasing.
    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    /// Number of levels `k`.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// True when the schedule holds no levels. Never the case for a schedule
    /// returned by [`RateSchedule::build`].
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
