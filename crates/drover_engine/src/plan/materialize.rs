use crate::{
    plan::trip::{TripPlan, TripStop},
    problem::{job::Stop, location::DEPOT_NODE, routing_problem::RoutingProblem},
    solver::solver::VehicleAssignment,
};

/// Converts solver node sequences back into job stops with real
/// distances. Every leg is recomputed with the unscaled great-circle
/// function; the solver's integer costs are never reported.
pub fn materialize(
    problem: &RoutingProblem,
    stops: &[Stop],
    assignment: &VehicleAssignment,
) -> Vec<TripPlan> {
    let closing_target = problem.closing_target();

    assignment
        .routes
        .iter()
        .enumerate()
        .map(|(vehicle, nodes)| {
            let mut trip_stops = Vec::with_capacity(nodes.len());
            let mut previous = *problem.depot();
            let mut total_distance = 0.0;

            for &node in nodes {
                // Depot bookkeeping entries carry no stop.
                if node == DEPOT_NODE {
                    continue;
                }

                let stop = &stops[node.get() - 1];
                total_distance += previous.miles_to(&stop.location);
                previous = stop.location;

                trip_stops.push(TripStop {
                    job_id: stop.job_id.clone(),
                    lat: stop.location.lat(),
                    lon: stop.location.lon(),
                });
            }

            total_distance += previous.miles_to(&closing_target);

            TripPlan {
                trip_id: vehicle + 1,
                stops: trip_stops,
                total_distance,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::materialize;
    use crate::{
        problem::{
            location::NodeIdx,
            routing_problem::{ClosingLeg, RoutingProblem},
        },
        solver::solver::VehicleAssignment,
        test_utils,
    };

    fn assignment(routes: Vec<Vec<usize>>) -> VehicleAssignment {
        VehicleAssignment {
            routes: routes
                .into_iter()
                .map(|route| route.into_iter().map(NodeIdx::new).collect())
                .collect(),
            search_cost: 0,
        }
    }

    #[test]
    fn trip_totals_sum_real_legs_and_the_return_to_depot() {
        let stops = test_utils::scattered_stops(2);
        let depot = test_utils::depot();
        let problem = RoutingProblem::new(depot, &stops, 4, ClosingLeg::Depot);

        let trips = materialize(&problem, &stops, &assignment(vec![vec![1, 2]]));

        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].trip_id, 1);
        assert_eq!(trips[0].stops.len(), 2);

        let expected = depot.miles_to(&stops[0].location)
            + stops[0].location.miles_to(&stops[1].location)
            + stops[1].location.miles_to(&depot);
        assert!((trips[0].total_distance - expected).abs() < 1e-9);
    }

    #[test]
    fn one_way_closing_leg_lands_on_the_end_location() {
        let stops = test_utils::scattered_stops(1);
        let depot = test_utils::depot();
        let end = test_utils::end_location();
        let problem = RoutingProblem::new(depot, &stops, 4, ClosingLeg::End(end));

        let trips = materialize(&problem, &stops, &assignment(vec![vec![1]]));

        let expected =
            depot.miles_to(&stops[0].location) + stops[0].location.miles_to(&end);
        assert!((trips[0].total_distance - expected).abs() < 1e-9);
    }

    #[test]
    fn unused_vehicle_yields_a_counted_empty_trip() {
        let stops = test_utils::scattered_stops(1);
        let depot = test_utils::depot();
        let problem = RoutingProblem::new(depot, &stops, 4, ClosingLeg::Depot);

        let trips = materialize(&problem, &stops, &assignment(vec![vec![1], vec![]]));

        assert_eq!(trips.len(), 2);
        assert!(trips[1].stops.is_empty());
        // An empty round trip never leaves the depot.
        assert_eq!(trips[1].total_distance, 0.0);
        assert_eq!(trips[1].trip_id, 2);
    }

    #[test]
    fn stray_depot_sentinels_are_skipped() {
        let stops = test_utils::scattered_stops(1);
        let problem =
            RoutingProblem::new(test_utils::depot(), &stops, 4, ClosingLeg::Depot);

        let with_sentinels = materialize(&problem, &stops, &assignment(vec![vec![0, 1, 0]]));
        let without = materialize(&problem, &stops, &assignment(vec![vec![1]]));

        assert_eq!(with_sentinels[0].stops, without[0].stops);
        assert_eq!(
            with_sentinels[0].total_distance,
            without[0].total_distance,
        );
    }
}
