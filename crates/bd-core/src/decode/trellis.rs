//! Explicit-trellis shortest-path (Bellman-Ford-style) decoder.

use crate::cost::CostModel;
use crate::decode::{argmin, Decoded, TrellisDecoder};
use crate::schedule::RateSchedule;

/// One directed edge of the trellis, endpoints as flat vertex ids.
#[derive(Debug, Clone, Copy)]
struct Edge {
    from: u32,
    to: u32,
    weight: f64,
}

/// Materializes the trellis as a flat vertex arena (`position * k + level`)
/// with an explicit edge list, then relaxes edges until distances stop
/// changing.
///
/// The graph is a DAG and edges are generated in position order, so the
/// first pass already settles every distance; the relaxation loop is still
/// bounded by `n` rounds, the longest possible path. Tie-breaking matches
/// the DP decoder (edges enumerate source levels in ascending order and only
/// a strict improvement replaces a predecessor), so the result is
/// numerically identical to [`ForwardDpDecoder`](super::ForwardDpDecoder) —
/// at the price of `O(n * k^2)` edge storage, which is why the DP form is
/// preferred in production use.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrellisShortestPathDecoder;

impl TrellisDecoder for TrellisShortestPathDecoder {
    fn decode(&self, gaps: &[f64], schedule: &RateSchedule, penalty: f64) -> Decoded {
        let n = gaps.len();
        let k = schedule.len();
        let model = CostModel::new(schedule, n, penalty);

        let num_vertices = (n + 1) * k;
        let mut edges = Vec::with_capacity(n * k * k);
        for t in 1..=n {
            let gap = gaps[t - 1];
            for src in 0..k {
                let from = ((t - 1) * k + src) as u32;
                for level in 0..k {
                    edges.push(Edge {
                        from,
                        to: (t * k + level) as u32,
                        weight: model.transition_cost(src, level, gap),
                    });
                }
            }
        }

        let mut dist = vec![f64::INFINITY; num_vertices];
        let mut pred = vec![0u32; num_vertices];
        dist[0] = 0.0;

        for round in 1..=n {
            let mut changed = false;
            for edge in &edges {
                let reach = dist[edge.from as usize];
                if reach.is_infinite() {
                    continue;
                }
                let candidate = reach + edge.weight;
                if candidate < dist[edge.to as usize] {
                    dist[edge.to as usize] = candidate;
                    pred[edge.to as usize] = edge.from;
                    changed = true;
                }
            }
            tracing::trace!(round, changed, "trellis relaxation pass");
            if !changed {
                break;
            }
        }

        let last_row = &dist[n * k..num_vertices];
        let terminal = argmin(last_row);
        let total_cost = last_row[terminal];

        let mut states = vec![0usize; n + 1];
        states[n] = terminal;
        let mut vertex = n * k + terminal;
        for t in (1..=n).rev() {
            vertex = pred[vertex] as usize;
            states[t - 1] = vertex % k;
        }
        Decoded { states, total_cost }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::ForwardDpDecoder;
    use crate::schedule::RoundingMode;

    fn decode_both(gaps: &[f64], scale: f64, penalty: f64) -> (Decoded, Decoded) {
        let schedule = RateSchedule::from_gaps(gaps, scale, RoundingMode::Ceil).unwrap();
        (
            ForwardDpDecoder.decode(gaps, &schedule, penalty),
            TrellisShortestPathDecoder.decode(gaps, &schedule, penalty),
        )
    }

    #[test]
    fn matches_dp_decoder_on_clustered_series() {
        let gaps = [1.0, 1.0, 1.0, 7.0, 1.0, 1.0, 8.0];
        let (dp, sp) = decode_both(&gaps, 2.0, 0.5);
        assert_eq!(dp.states, sp.states);
        assert_eq!(dp.total_cost.to_bits(), sp.total_cost.to_bits());
    }

    #[test]
    fn matches_dp_decoder_on_single_gap() {
        let (dp, sp) = decode_both(&[2.5], 3.0, 0.5);
        assert_eq!(dp.states, vec![0, 0]);
        assert_eq!(dp.states, sp.states);
    }

    #[test]
    fn matches_dp_decoder_with_zero_penalty() {
        let gaps = [0.3, 0.2, 4.0, 0.1, 6.0, 0.5];
        let (dp, sp) = decode_both(&gaps, 2.5, 0.0);
        assert_eq!(dp.states, sp.states);
        assert_eq!(dp.total_cost.to_bits(), sp.total_cost.to_bits());
    }
}
