//! Forward dynamic-programming (Viterbi-style) decoder.

use crate::cost::CostModel;
use crate::decode::{argmin, Decoded, TrellisDecoder};
use crate::schedule::RateSchedule;

/// Fills a flat `(position, level)` cost matrix forward, keeping a
/// backpointer to the minimizing source level for every cell, then recovers
/// the optimal level sequence by backtracking from the cheapest terminal
/// cell.
///
/// `O(n * k^2)` time, `O(n * k)` space. Ties are broken toward the smallest
/// source level, and the terminal tie toward the smallest level, so output is
/// deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardDpDecoder;

impl TrellisDecoder for ForwardDpDecoder {
    fn decode(&self, gaps: &[f64], schedule: &RateSchedule, penalty: f64) -> Decoded {
        let n = gaps.len();
        let k = schedule.len();
        let model = CostModel::new(schedule, n, penalty);

        // Row t holds the minimum cumulative cost of reaching (t, level).
        // Only (0, 0) is reachable at the start.
        let mut cost = vec![f64::INFINITY; (n + 1) * k];
        let mut back = vec![0usize; (n + 1) * k];
        cost[0] = 0.0;

        for t in 1..=n {
            let gap = gaps[t - 1];
            let prev_row = (t - 1) * k;
            let row = t * k;
            for level in 0..k {
                let mut best = f64::INFINITY;
                let mut best_src = 0;
                for src in 0..k {
                    let reach = cost[prev_row + src];
                    if reach.is_infinite() {
                        continue;
                    }
                    let candidate = reach + model.transition_cost(src, level, gap);
                    if candidate < best {
                        best = candidate;
                        best_src = src;
                    }
                }
                cost[row + level] = best;
                back[row + level] = best_src;
            }
        }

        let last_row = &cost[n * k..(n + 1) * k];
        let terminal = argmin(last_row);
        let total_cost = last_row[terminal];

        let mut states = vec![0usize; n + 1];
        states[n] = terminal;
        for t in (1..=n).rev() {
            states[t - 1] = back[t * k + states[t]];
        }
        Decoded { states, total_cost }
    }
}
