use rand::{SeedableRng, rngs::SmallRng};
use tracing::{debug, instrument};

use crate::{
    error::SolveError,
    problem::{location::NodeIdx, routing_problem::RoutingProblem},
    solver::{
        arc_costs::ArcCosts,
        construction,
        deadline::Deadline,
        guided::GuidedSearch,
        ls::local_search::{DescentOutcome, LocalSearch},
        solver_params::{ConstructionStrategy, ImprovementStrategy, SolverParams},
    },
};

/// The solver's result: one ordered node-index sequence per vehicle
/// (depot sentinel excluded) plus the achieved total scaled cost, so
/// callers can compare runs of the time-bounded search.
#[derive(Debug)]
pub struct VehicleAssignment {
    pub routes: Vec<Vec<NodeIdx>>,
    pub search_cost: i64,
}

/// One capacity-constrained search over a built problem. Holds no state
/// across solve invocations.
pub struct Solver<'a> {
    problem: &'a RoutingProblem,
    params: SolverParams,
}

impl<'a> Solver<'a> {
    pub fn new(problem: &'a RoutingProblem, params: SolverParams) -> Self {
        Self { problem, params }
    }

    /// Construction followed by time-bounded guided local search.
    /// Budget expiry after a feasible solution exists is normal
    /// termination; the best feasible solution seen is returned.
    #[instrument(skip_all, level = "debug")]
    pub fn solve(&self) -> Result<VehicleAssignment, SolveError> {
        let problem = self.problem;

        if problem.num_jobs() > problem.num_vehicles() * problem.capacity() {
            return Err(SolveError::Infeasible {
                jobs: problem.num_jobs(),
                vehicles: problem.num_vehicles(),
                capacity: problem.capacity(),
            });
        }

        if problem.num_jobs() == 0 {
            return Ok(VehicleAssignment {
                routes: Vec::new(),
                search_cost: 0,
            });
        }

        let deadline = Deadline::starting_now(self.params.time_limit);

        let mut solution = match self.params.construction {
            ConstructionStrategy::CheapestArc => construction::cheapest_arc(problem, &deadline)?,
        };

        let plain = ArcCosts::plain(problem.matrix());
        let mut best = solution.clone();
        let mut best_cost = best.cost(&plain);
        debug!(cost = best_cost, "construction solution");

        if let ImprovementStrategy::GuidedLocalSearch(gls_params) = &self.params.improvement {
            let mut rng = SmallRng::seed_from_u64(self.params.seed);
            let mut guided = GuidedSearch::new(*gls_params, problem.matrix());
            let mut search = LocalSearch::new(solution.routes().len());

            loop {
                let outcome = {
                    let costs = guided.arc_costs(problem.matrix());
                    search.descend(&mut solution, &costs, &deadline, &mut rng)
                };

                let cost = solution.cost(&plain);
                if cost < best_cost {
                    best_cost = cost;
                    best = solution.clone();
                    debug!(cost, "improved best solution");
                }

                if outcome == DescentOutcome::DeadlineReached {
                    break;
                }

                guided.penalize_local_optimum(&solution, problem.matrix());
            }
        }

        debug!(cost = best_cost, "search finished");

        Ok(VehicleAssignment {
            routes: best.into_node_sequences(),
            search_cost: best_cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;

    use super::Solver;
    use crate::{
        error::SolveError,
        problem::routing_problem::{ClosingLeg, RoutingProblem},
        solver::solver_params::SolverParams,
        test_utils,
    };

    fn quick_params() -> SolverParams {
        SolverParams::default().with_time_limit(SignedDuration::from_millis(200))
    }

    #[test]
    fn every_job_is_assigned_exactly_once() {
        let problem = RoutingProblem::new(
            test_utils::depot(),
            &test_utils::scattered_stops(9),
            4,
            ClosingLeg::Depot,
        );

        let assignment = Solver::new(&problem, quick_params()).solve().unwrap();

        assert_eq!(assignment.routes.len(), 3);
        let mut nodes: Vec<usize> = assignment
            .routes
            .iter()
            .flatten()
            .map(|node| node.get())
            .collect();
        nodes.sort_unstable();
        assert_eq!(nodes, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn improvement_never_exceeds_construction_cost() {
        let problem = RoutingProblem::new(
            test_utils::depot(),
            &test_utils::scattered_stops(8),
            4,
            ClosingLeg::Depot,
        );

        let constructed = Solver::new(&problem, SolverParams::construction_only())
            .solve()
            .unwrap();
        let improved = Solver::new(&problem, quick_params()).solve().unwrap();

        assert!(improved.search_cost <= constructed.search_cost);
    }

    #[test]
    fn construction_only_is_deterministic() {
        let problem = RoutingProblem::new(
            test_utils::depot(),
            &test_utils::scattered_stops(6),
            4,
            ClosingLeg::Depot,
        );

        let first = Solver::new(&problem, SolverParams::construction_only())
            .solve()
            .unwrap();
        let second = Solver::new(&problem, SolverParams::construction_only())
            .solve()
            .unwrap();

        assert_eq!(first.routes, second.routes);
        assert_eq!(first.search_cost, second.search_cost);
    }

    #[test]
    fn zero_jobs_solve_to_an_empty_assignment() {
        let problem = RoutingProblem::new(test_utils::depot(), &[], 4, ClosingLeg::Depot);

        let assignment = Solver::new(&problem, quick_params()).solve().unwrap();

        assert!(assignment.routes.is_empty());
        assert_eq!(assignment.search_cost, 0);
    }

    #[test]
    fn conflicting_capacity_configuration_is_infeasible() {
        // 5 jobs forced onto a single vehicle of capacity 4.
        let problem = RoutingProblem::with_vehicles(
            test_utils::depot(),
            &test_utils::scattered_stops(5),
            4,
            1,
            ClosingLeg::Depot,
        );

        let err = Solver::new(&problem, quick_params()).solve().unwrap_err();
        assert!(matches!(err, SolveError::Infeasible { .. }));
    }
}
