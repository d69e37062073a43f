use crate::solver::{
    arc_costs::ArcCosts,
    ls::r#move::LocalSearchOperator,
    working_solution::{RouteIdx, WorkingSolution},
};

/// **Inter-Route Swap**
///
/// Exchanges one stop of each of two different routes. Unit demands
/// leave both loads unchanged, so the swap is always feasible.
#[derive(Debug)]
pub struct InterSwapOperator {
    pub route_a: RouteIdx,
    pub pos_a: usize,
    pub route_b: RouteIdx,
    pub pos_b: usize,
}

impl LocalSearchOperator for InterSwapOperator {
    fn generate_moves<C>(
        solution: &WorkingSolution,
        (r1, r2): (RouteIdx, RouteIdx),
        mut consumer: C,
    ) where
        C: FnMut(Self),
    {
        // Each unordered pair is enumerated once.
        if r1 >= r2 {
            return;
        }

        let route_a = solution.route(r1);
        let route_b = solution.route(r2);

        for pos_a in 0..route_a.len() {
            for pos_b in 0..route_b.len() {
                consumer(InterSwapOperator {
                    route_a: r1,
                    pos_a,
                    route_b: r2,
                    pos_b,
                })
            }
        }
    }

    fn cost_delta(&self, solution: &WorkingSolution, costs: &ArcCosts<'_>) -> i64 {
        let route_a = solution.route(self.route_a);
        let route_b = solution.route(self.route_b);

        let node_a = route_a.node(self.pos_a);
        let node_b = route_b.node(self.pos_b);

        let prev_a = route_a.before(self.pos_a);
        let next_a = route_a.after(self.pos_a);
        let prev_b = route_b.before(self.pos_b);
        let next_b = route_b.after(self.pos_b);

        let current = costs.arc(prev_a, node_a)
            + costs.arc(node_a, next_a)
            + costs.arc(prev_b, node_b)
            + costs.arc(node_b, next_b);

        let new = costs.arc(prev_a, node_b)
            + costs.arc(node_b, next_a)
            + costs.arc(prev_b, node_a)
            + costs.arc(node_a, next_b);

        new - current
    }

    fn is_valid(&self, _solution: &WorkingSolution) -> bool {
        // Unit demand swap, both loads unchanged.
        true
    }

    fn apply(&self, solution: &mut WorkingSolution) {
        let (route_a, route_b) = solution.route_pair_mut(self.route_a, self.route_b);
        let node_a = route_a.node(self.pos_a);
        let node_b = route_b.swap_node(self.pos_b, node_a);
        route_a.swap_node(self.pos_a, node_b);
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        solver::{
            arc_costs::ArcCosts,
            ls::inter_swap::InterSwapOperator,
            ls::r#move::LocalSearchOperator,
        },
        test_utils,
    };

    #[test]
    fn swaps_the_two_stops() {
        let (_, mut solution) = test_utils::two_route_problem(&[1, 2], &[3, 4]);

        let op = InterSwapOperator {
            route_a: 0.into(),
            pos_a: 0,
            route_b: 1.into(),
            pos_b: 1,
        };
        op.apply(&mut solution);

        assert_eq!(test_utils::node_ids(solution.route(0.into())), vec![4, 2]);
        assert_eq!(test_utils::node_ids(solution.route(1.into())), vec![3, 1]);
    }

    #[test]
    fn delta_matches_recomputed_cost_after_apply() {
        let (problem, solution) = test_utils::two_route_problem(&[5, 1, 3], &[2, 4]);
        let costs = ArcCosts::plain(problem.matrix());
        let before = solution.cost(&costs);

        let mut checked = 0;
        InterSwapOperator::generate_moves(&solution, (0.into(), 1.into()), |op| {
            let delta = op.cost_delta(&solution, &costs);
            let mut candidate = solution.clone();
            op.apply(&mut candidate);
            assert_eq!(candidate.cost(&costs), before + delta);
            checked += 1;
        });

        assert_eq!(checked, 6);
    }

    #[test]
    fn pairs_are_enumerated_once() {
        let (_, solution) = test_utils::two_route_problem(&[1], &[2]);

        let mut moves = 0;
        InterSwapOperator::generate_moves(&solution, (1.into(), 0.into()), |_| {
            moves += 1;
        });
        assert_eq!(moves, 0);
    }
}
