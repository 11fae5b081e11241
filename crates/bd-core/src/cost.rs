//! Transition cost model shared by both decoders.

use crate::schedule::RateSchedule;

/// Per-transition cost of attributing a gap to a target rate level.
///
/// The cost of moving from `from` to `to` across a gap `g` is
///
/// ```text
/// escalation + rate  where
/// escalation = penalty * (to - from) * ln(num_intervals)   if to > from, else 0
/// rate       = -ln(levels[to]) + levels[to] * g
/// ```
///
/// The rate term is the negative log-likelihood of observing `g` under an
/// exponential distribution with rate `levels[to]`; the escalation term
/// charges for jumping to a higher burst level, while dropping back is free.
/// `num_intervals` and `penalty` are fixed at construction so the cost is a
/// pure function of `(from, to, gap)`.
#[derive(Debug, Clone)]
pub struct CostModel<'a> {
    levels: &'a [f64],
    penalty: f64,
    log_intervals: f64,
}

impl<'a> CostModel<'a> {
    /// Create a cost model over `schedule` for a series of `num_intervals`
    /// gaps.
    pub fn new(schedule: &'a RateSchedule, num_intervals: usize, penalty: f64) -> Self {
        Self {
            levels: schedule.levels(),
            penalty,
            log_intervals: (num_intervals as f64).ln(),
        }
    }

    /// Cost of attributing `gap` to level `to`, coming from level `from`.
    ///
    /// Always finite for levels inside the schedule and a positive gap.
    pub fn transition_cost(&self, from: usize, to: usize, gap: f64) -> f64 {
        let escalation = if to > from {
            self.penalty * (to - from) as f64 * self.log_intervals
        } else {
            0.0
        };
        let rate = self.levels[to];
        escalation - rate.ln() + rate * gap
    }

    /// Number of levels in the underlying schedule.
    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::RoundingMode;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    fn schedule() -> RateSchedule {
        // Levels 0.35, 0.7, 1.4, 2.8, 5.6, 11.2.
        RateSchedule::build(20.0, 7, 2.0, 1.0, RoundingMode::Ceil).unwrap()
    }

    #[test]
    fn downward_and_lateral_moves_carry_no_escalation() {
        let schedule = schedule();
        let model = CostModel::new(&schedule, 7, 0.5);
        for from in 0..model.num_levels() {
            for to in 0..=from {
                let rate = schedule.levels()[to];
                let expected = -rate.ln() + rate * 2.0;
                assert!(
                    approx_eq(model.transition_cost(from, to, 2.0), expected, 1e-12),
                    "no escalation expected for {from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn escalation_scales_with_jump_size() {
        let schedule = schedule();
        let model = CostModel::new(&schedule, 7, 0.5);
        let ln_n = 7f64.ln();
        for to in 1..model.num_levels() {
            let jump = model.transition_cost(0, to, 1.0);
            let rate = schedule.levels()[to];
            let expected = 0.5 * to as f64 * ln_n - rate.ln() + rate;
            assert!(approx_eq(jump, expected, 1e-12));
        }
    }

    #[test]
    fn cost_never_falls_below_rate_term() {
        let schedule = schedule();
        let model = CostModel::new(&schedule, 7, 0.5);
        for from in 0..model.num_levels() {
            for to in 0..model.num_levels() {
                for gap in [0.1, 1.0, 7.5] {
                    let rate = schedule.levels()[to];
                    let floor = -rate.ln() + rate * gap;
                    let cost = model.transition_cost(from, to, gap);
                    assert!(cost >= floor - 1e-12);
                    assert!(cost.is_finite());
                }
            }
        }
    }

    #[test]
    fn single_interval_has_free_escalation() {
        // ln(1) = 0: with one gap there is no evidence threshold to charge.
        let schedule = RateSchedule::build(1.0, 1, 2.0, 1.0, RoundingMode::Ceil).unwrap();
        let model = CostModel::new(&schedule, 1, 0.5);
        let rate = schedule.levels()[0];
        assert!(approx_eq(
            model.transition_cost(0, 0, 1.0),
            -rate.ln() + rate,
            1e-12
        ));
    }
}
