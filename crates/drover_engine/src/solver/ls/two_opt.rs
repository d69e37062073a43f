use crate::solver::{
    arc_costs::ArcCosts,
    ls::r#move::LocalSearchOperator,
    working_solution::{RouteIdx, WorkingSolution},
};

/// **Intra-Route 2-Opt**
///
/// Reverses the stops between `from` and `to` (inclusive), removing
/// crossing legs within a single route.
///
/// ```text
/// BEFORE:
///    ... (prev) --x--> [from] -> ... -> [to] --x--> (next) ...
///
/// AFTER (segment reversed):
///    ... (prev) -----> [to] -> ... -> [from] -----> (next) ...
/// ```
///
/// The delta walks every affected leg, so it stays exact when the arc
/// view is asymmetric (one-way matrices, penalty augmentation).
#[derive(Debug)]
pub struct TwoOptOperator {
    pub route_id: RouteIdx,
    pub from: usize,
    pub to: usize,
}

impl LocalSearchOperator for TwoOptOperator {
    fn generate_moves<C>(
        solution: &WorkingSolution,
        (r1, r2): (RouteIdx, RouteIdx),
        mut consumer: C,
    ) where
        C: FnMut(Self),
    {
        if r1 != r2 {
            return;
        }

        let route = solution.route(r1);

        for from in 0..route.len() {
            for to in from + 1..route.len() {
                consumer(TwoOptOperator {
                    route_id: r1,
                    from,
                    to,
                })
            }
        }
    }

    fn cost_delta(&self, solution: &WorkingSolution, costs: &ArcCosts<'_>) -> i64 {
        let route = solution.route(self.route_id);

        let prev = route.before(self.from);
        let next = route.after(self.to);

        let mut current = costs.arc(prev, route.node(self.from))
            + costs.arc(route.node(self.to), next);
        let mut new = costs.arc(prev, route.node(self.to))
            + costs.arc(route.node(self.from), next);

        for pos in self.from..self.to {
            current += costs.arc(route.node(pos), route.node(pos + 1));
            new += costs.arc(route.node(pos + 1), route.node(pos));
        }

        new - current
    }

    fn is_valid(&self, _solution: &WorkingSolution) -> bool {
        true
    }

    fn apply(&self, solution: &mut WorkingSolution) {
        solution
            .route_mut(self.route_id)
            .reverse_segment(self.from, self.to);
    }
}
