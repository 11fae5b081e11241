//! Burst state decoders.
//!
//! Two implementations of one recurrence: the forward DP decoder
//! ([`ForwardDpDecoder`]) and the explicit-trellis shortest-path decoder
//! ([`TrellisShortestPathDecoder`]). Both consume the same
//! [`CostModel`](crate::cost::CostModel) and are required to produce
//! identical state sequences and total costs for the same input, which the
//! property suite verifies.

pub mod trellis;
pub mod viterbi;

pub use trellis::TrellisShortestPathDecoder;
pub use viterbi::ForwardDpDecoder;

use bd_common::{Error, Result};
use serde::Serialize;

use crate::config::BurstConfig;
use crate::schedule::RateSchedule;

/// A decoded burst state assignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decoded {
    /// One level index per interval boundary, length `gaps.len() + 1`;
    /// `states[0]` is always 0 and `states[t]` is the level attributed to
    /// `gaps[t - 1]`.
    pub states: Vec<usize>,
    /// Cumulative cost of the optimal path.
    pub total_cost: f64,
}

/// A decoder over the (position, level) trellis.
///
/// Implementations must break cost ties toward the smallest level index so
/// that output is deterministic and identical across decoders.
pub trait TrellisDecoder {
    fn decode(&self, gaps: &[f64], schedule: &RateSchedule, penalty: f64) -> Decoded;
}

/// Index of the minimum value, ties broken toward the smallest index.
pub(crate) fn argmin(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v < values[best] {
            best = i;
        }
    }
    best
}

fn validated_schedule(gaps: &[f64], config: &BurstConfig) -> Result<RateSchedule> {
    config.validate()?;
    if gaps.is_empty() {
        return Err(Error::MalformedInput {
            index: 0,
            detail: "need at least 1 gap (2 time points)".into(),
        });
    }
    for (i, &gap) in gaps.iter().enumerate() {
        if !(gap > 0.0) || !gap.is_finite() {
            return Err(Error::MalformedInput {
                index: i,
                detail: format!("gap must be a positive finite number, got {gap}"),
            });
        }
    }
    RateSchedule::from_gaps(gaps, config.scale, config.rounding)
}

/// Decode with an explicit decoder and configuration.
pub fn decode_with<D: TrellisDecoder>(
    decoder: &D,
    gaps: &[f64],
    config: &BurstConfig,
) -> Result<Decoded> {
    let schedule = validated_schedule(gaps, config)?;
    let decoded = decoder.decode(gaps, &schedule, config.penalty);
    tracing::debug!(
        intervals = gaps.len(),
        levels = schedule.len(),
        total_cost = decoded.total_cost,
        "decoded burst states"
    );
    Ok(decoded)
}

/// Decode using the forward DP (Viterbi-style) decoder.
pub fn decode_viterbi(gaps: &[f64], scale: f64, penalty: f64) -> Result<Decoded> {
    let config = BurstConfig {
        scale,
        penalty,
        ..Default::default()
    };
    decode_with(&ForwardDpDecoder, gaps, &config)
}

/// Decode using the explicit-trellis shortest-path decoder.
pub fn decode_trellis(gaps: &[f64], scale: f64, penalty: f64) -> Result<Decoded> {
    let config = BurstConfig {
        scale,
        penalty,
        ..Default::default()
    };
    decode_with(&TrellisShortestPathDecoder, gaps, &config)
}
