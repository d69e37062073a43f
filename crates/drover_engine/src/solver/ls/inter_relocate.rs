use crate::solver::{
    arc_costs::ArcCosts,
    ls::r#move::{LocalSearchOperator, SLOT_DEMAND},
    working_solution::{RouteIdx, WorkingSolution},
};

/// **Inter-Route Relocate**
///
/// Moves the stop at `from` in one route into slot `to` of another
/// route. The receiving route must have a free capacity slot.
#[derive(Debug)]
pub struct InterRelocateOperator {
    pub from_route: RouteIdx,
    pub from: usize,
    pub to_route: RouteIdx,
    pub to: usize,
}

impl LocalSearchOperator for InterRelocateOperator {
    fn generate_moves<C>(
        solution: &WorkingSolution,
        (r1, r2): (RouteIdx, RouteIdx),
        mut consumer: C,
    ) where
        C: FnMut(Self),
    {
        if r1 == r2 {
            return;
        }

        let from_route = solution.route(r1);
        let to_route = solution.route(r2);

        if to_route.load() + SLOT_DEMAND > solution.capacity() {
            return;
        }

        for from in 0..from_route.len() {
            for to in 0..=to_route.len() {
                consumer(InterRelocateOperator {
                    from_route: r1,
                    from,
                    to_route: r2,
                    to,
                })
            }
        }
    }

    fn cost_delta(&self, solution: &WorkingSolution, costs: &ArcCosts<'_>) -> i64 {
        let from_route = solution.route(self.from_route);
        let to_route = solution.route(self.to_route);

        let a = from_route.before(self.from);
        let node = from_route.node(self.from);
        let c = from_route.after(self.from);

        let x = to_route.before(self.to);
        let y = to_route.at_or_depot(self.to);

        let current = costs.arc(a, node) + costs.arc(node, c) + costs.arc(x, y);
        let new = costs.arc(a, c) + costs.arc(x, node) + costs.arc(node, y);

        new - current
    }

    fn is_valid(&self, solution: &WorkingSolution) -> bool {
        solution.route(self.to_route).load() + SLOT_DEMAND <= solution.capacity()
    }

    fn apply(&self, solution: &mut WorkingSolution) {
        let (from_route, to_route) = solution.route_pair_mut(self.from_route, self.to_route);
        let node = from_route.remove(self.from, SLOT_DEMAND);
        to_route.insert(self.to, node, SLOT_DEMAND);
    }
}
