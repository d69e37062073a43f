use crate::{
    problem::{
        job::Stop,
        location::{Location, NodeIdx},
        routing_problem::{ClosingLeg, RoutingProblem},
    },
    solver::{
        ls::r#move::SLOT_DEMAND,
        working_solution::{Route, WorkingSolution},
    },
};

/// The reference depot: Livingston.
pub fn depot() -> Location {
    Location::from_lat_lon(55.899819685016475, -3.5198384054833203)
}

/// The reference one-way end location: Northampton.
pub fn end_location() -> Location {
    Location::from_lat_lon(52.26700759136509, -0.7527653741274775)
}

pub fn locations(coords: &[(f64, f64)]) -> Vec<Location> {
    coords
        .iter()
        .map(|&(lat, lon)| Location::from_lat_lon(lat, lon))
        .collect()
}

/// `count` stops scattered around central Scotland at pairwise-distinct
/// spots, drifting away from the depot as the index grows.
pub fn scattered_stops(count: usize) -> Vec<Stop> {
    (1..=count)
        .map(|i| {
            let spread = i as f64;
            let lon = if i % 2 == 0 {
                -3.5198 + 0.02 * spread
            } else {
                -3.5198 - 0.025 * spread
            };

            Stop {
                job_id: format!("J{i}"),
                location: Location::from_lat_lon(55.8998 + 0.015 * spread, lon),
            }
        })
        .collect()
}

/// Depot plus `count` scattered job locations, matrix-ready.
pub fn depot_and_locations(count: usize) -> Vec<Location> {
    let mut all = vec![depot()];
    all.extend(scattered_stops(count).iter().map(|stop| stop.location));
    all
}

pub fn node_ids(route: &Route) -> Vec<usize> {
    route.stops().iter().map(NodeIdx::get).collect()
}

/// Fills route 0 of a fresh solution with the given nodes, in order.
pub fn solution_with_route(problem: &RoutingProblem, nodes: &[usize]) -> WorkingSolution {
    let mut solution = WorkingSolution::empty(problem.num_vehicles(), problem.capacity());
    for &node in nodes {
        solution
            .route_mut(0.into())
            .push(NodeIdx::new(node), SLOT_DEMAND);
    }
    solution
}

/// A one-vehicle round-trip problem whose single route visits `nodes`.
pub fn single_route_problem(nodes: &[usize]) -> (RoutingProblem, WorkingSolution) {
    let stops = scattered_stops(nodes.len());
    let problem = RoutingProblem::new(depot(), &stops, nodes.len().max(1), ClosingLeg::Depot);
    let solution = solution_with_route(&problem, nodes);
    (problem, solution)
}

/// A two-vehicle, capacity-4 round-trip problem with prefilled routes.
pub fn two_route_problem(
    first: &[usize],
    second: &[usize],
) -> (RoutingProblem, WorkingSolution) {
    let stops = scattered_stops(first.len() + second.len());
    let problem = RoutingProblem::with_vehicles(depot(), &stops, 4, 2, ClosingLeg::Depot);

    let mut solution = WorkingSolution::empty(2, 4);
    for &node in first {
        solution
            .route_mut(0.into())
            .push(NodeIdx::new(node), SLOT_DEMAND);
    }
    for &node in second {
        solution
            .route_mut(1.into())
            .push(NodeIdx::new(node), SLOT_DEMAND);
    }

    (problem, solution)
}
