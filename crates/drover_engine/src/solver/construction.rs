use tracing::debug;

use crate::{
    error::SolveError,
    problem::{
        location::{DEPOT_NODE, NodeIdx},
        routing_problem::RoutingProblem,
    },
    solver::{arc_costs::ArcCosts, deadline::Deadline, working_solution::WorkingSolution},
};

/// Path-cheapest-arc construction: each vehicle starts at the depot and
/// repeatedly extends its path with the cheapest arc to an unassigned
/// node, until its capacity is full. Deterministic for identical input
/// ordering; ties break on the lower node index.
pub fn cheapest_arc(
    problem: &RoutingProblem,
    deadline: &Deadline,
) -> Result<WorkingSolution, SolveError> {
    let matrix = problem.matrix();
    let costs = ArcCosts::plain(matrix);
    let mut solution = WorkingSolution::empty(problem.num_vehicles(), problem.capacity());
    let mut assigned = vec![false; matrix.num_nodes()];
    let mut remaining = problem.num_jobs();

    for vehicle in 0..problem.num_vehicles() {
        let mut current = DEPOT_NODE;
        let route = solution.route_mut(vehicle.into());

        while route.load() < problem.capacity() && remaining > 0 {
            if deadline.expired() {
                // The budget ran out before any feasible assignment
                // existed, which is not the same as infeasibility.
                return Err(SolveError::BudgetExhausted);
            }

            let Some(next) = (1..matrix.num_nodes())
                .map(NodeIdx::new)
                .filter(|node| !assigned[node.get()])
                .min_by_key(|&node| (costs.arc(current, node), node))
            else {
                break;
            };

            assigned[next.get()] = true;
            remaining -= 1;
            route.push(next, problem.demand(next));
            current = next;
        }
    }

    if remaining > 0 {
        return Err(SolveError::Infeasible {
            jobs: problem.num_jobs(),
            vehicles: problem.num_vehicles(),
            capacity: problem.capacity(),
        });
    }

    debug!(
        cost = solution.cost(&costs),
        routes = solution.routes().len(),
        "construction finished"
    );

    Ok(solution)
}
