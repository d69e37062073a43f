use crate::solver::{
    arc_costs::ArcCosts,
    ls::r#move::{LocalSearchOperator, SLOT_DEMAND},
    working_solution::{RouteIdx, WorkingSolution},
};

/// **Intra-Route Relocate**
///
/// Moves the stop at `from` so it sits at index `to` of the original
/// ordering (inserted before the node currently at `to`).
///
/// ```text
/// BEFORE:
///    Route: ... (A) -> [from] -> (C) ... (X) -> (Y) ...
///
/// AFTER:
///    Route: ... (A) -> (C) ... (X) -> [from] -> (Y) ...
///
/// Edges removed: (A->from), (from->C), (X->Y)
/// Edges created: (A->C),    (X->from), (from->Y)
/// ```
#[derive(Debug)]
pub struct RelocateOperator {
    pub route_id: RouteIdx,
    pub from: usize,
    pub to: usize,
}

impl LocalSearchOperator for RelocateOperator {
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
            for to in 0..=route.len() {
                // to == from + 1 re-inserts at the same place.
                if to == from || to == from + 1 {
                    continue;
                }

                consumer(RelocateOperator {
                    route_id: r1,
                    from,
                    to,
                })
            }
        }
    }

    fn cost_delta(&self, solution: &WorkingSolution, costs: &ArcCosts<'_>) -> i64 {
        let route = solution.route(self.route_id);

        let a = route.before(self.from);
        let node = route.node(self.from);
        let c = route.after(self.from);

        let x = route.before(self.to);
        let y = route.at_or_depot(self.to);

        let current = costs.arc(a, node) + costs.arc(node, c) + costs.arc(x, y);
        let new = costs.arc(a, c) + costs.arc(x, node) + costs.arc(node, y);

        new - current
    }

    fn is_valid(&self, _solution: &WorkingSolution) -> bool {
        // Same route, same load.
        true
    }

    fn apply(&self, solution: &mut WorkingSolution) {
        let route = solution.route_mut(self.route_id);
        let node = route.remove(self.from, SLOT_DEMAND);
        let insert_at = if self.from < self.to {
            self.to - 1
        } else {
            self.to
        };
        route.insert(insert_at, node, SLOT_DEMAND);
    }
}
