use rand::{rngs::SmallRng, seq::SliceRandom};
use tracing::{debug, instrument, trace};

use crate::solver::{
    arc_costs::ArcCosts,
    deadline::Deadline,
    ls::{
        inter_relocate::InterRelocateOperator,
        inter_swap::InterSwapOperator,
        r#move::{LocalSearchMove, LocalSearchOperator},
        relocate::RelocateOperator,
        two_opt::TwoOptOperator,
    },
    working_solution::{RouteIdx, WorkingSolution},
};

#[derive(Debug, PartialEq, Eq)]
pub enum DescentOutcome {
    /// No move improves the current cost view any further.
    LocalOptimum,
    /// The wall-clock budget expired mid-descent.
    DeadlineReached,
}

type RoutePair = (RouteIdx, RouteIdx);

/// Best-improvement descent over all route pairs with the relocate,
/// swap and 2-opt neighbourhoods. The pair scan order is shuffled per
/// iteration, which only decides ties between equal-delta moves.
pub struct LocalSearch {
    pairs: Vec<RoutePair>,
}

impl LocalSearch {
    pub fn new(num_routes: usize) -> Self {
        let mut pairs = Vec::with_capacity(num_routes * num_routes);

        for r1 in 0..num_routes {
            for r2 in 0..num_routes {
                pairs.push((RouteIdx::new(r1), RouteIdx::new(r2)));
            }
        }

        Self { pairs }
    }

    #[instrument(skip_all, level = "debug")]
    pub fn descend(
        &mut self,
        solution: &mut WorkingSolution,
        costs: &ArcCosts<'_>,
        deadline: &Deadline,
        rng: &mut SmallRng,
    ) -> DescentOutcome {
        let mut applied = 0_usize;

        loop {
            if deadline.expired() {
                debug!(applied, "descent stopped by deadline");
                return DescentOutcome::DeadlineReached;
            }

            self.pairs.shuffle(rng);

            let best = self.best_move(solution, costs, deadline);

            // A sweep cut short by the deadline proves nothing about
            // local optimality.
            if deadline.expired() {
                debug!(applied, "descent stopped by deadline");
                return DescentOutcome::DeadlineReached;
            }

            let Some(best) = best else {
                debug!(applied, "descent reached local optimum");
                return DescentOutcome::LocalOptimum;
            };

            trace!(operator = best.operator_name(), "applying move");
            best.apply(solution);
            applied += 1;
        }
    }

    /// The strictest-improving valid move across all pairs, if any.
    /// Bails between pairs once the deadline passes, so a sweep never
    /// overshoots the budget by more than one pair's neighbourhoods.
    fn best_move(
        &self,
        solution: &WorkingSolution,
        costs: &ArcCosts<'_>,
        deadline: &Deadline,
    ) -> Option<LocalSearchMove> {
        let mut best_delta = 0_i64;
        let mut best: Option<LocalSearchMove> = None;

        for &pair in &self.pairs {
            if deadline.expired() {
                return best;
            }

            RelocateOperator::generate_moves(solution, pair, |op| {
                let delta = op.cost_delta(solution, costs);
                if delta < best_delta && op.is_valid(solution) {
                    best_delta = delta;
                    best = Some(LocalSearchMove::Relocate(op));
                }
            });

            TwoOptOperator::generate_moves(solution, pair, |op| {
                let delta = op.cost_delta(solution, costs);
                if delta < best_delta && op.is_valid(solution) {
                    best_delta = delta;
                    best = Some(LocalSearchMove::TwoOpt(op));
                }
            });

            InterRelocateOperator::generate_moves(solution, pair, |op| {
                let delta = op.cost_delta(solution, costs);
                if delta < best_delta && op.is_valid(solution) {
                    best_delta = delta;
                    best = Some(LocalSearchMove::InterRelocate(op));
                }
            });

            InterSwapOperator::generate_moves(solution, pair, |op| {
                let delta = op.cost_delta(solution, costs);
                if delta < best_delta && op.is_valid(solution) {
                    best_delta = delta;
                    best = Some(LocalSearchMove::InterSwap(op));
                }
            });
        }

        best
    }
}
