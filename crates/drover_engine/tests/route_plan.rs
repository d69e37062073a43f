use jiff::SignedDuration;

use drover_engine::{
    plan::{SolveConfig, plan_routes},
    problem::{job::JobRecord, location::Location},
    solver::solver_params::SolverParams,
};

fn depot() -> Location {
    Location::from_lat_lon(55.899819685016475, -3.5198384054833203)
}

fn end() -> Location {
    Location::from_lat_lon(52.26700759136509, -0.7527653741274775)
}

fn records(count: usize) -> Vec<JobRecord> {
    (1..=count)
        .map(|i| {
            let spread = i as f64;
            JobRecord {
                job_id: format!("J{i}"),
                lat: 55.8998 + 0.02 * spread,
                lon: -3.5198 - 0.03 * spread,
            }
        })
        .collect()
}

fn quick_config() -> SolveConfig {
    SolveConfig::round_trip(depot()).with_params(
        SolverParams::default().with_time_limit(SignedDuration::from_millis(200)),
    )
}

#[test]
fn five_jobs_capacity_four_split_into_a_four_trip_and_a_one_trip() {
    let plan = plan_routes(&records(5), &quick_config()).unwrap();

    assert_eq!(plan.trips.len(), 2);

    let mut sizes: Vec<usize> = plan.trips.iter().map(|trip| trip.stops.len()).collect();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![1, 4]);

    let mut job_ids: Vec<&str> = plan
        .trips
        .iter()
        .flat_map(|trip| trip.stops.iter().map(|stop| stop.job_id.as_str()))
        .collect();
    job_ids.sort_unstable();
    assert_eq!(job_ids, vec!["J1", "J2", "J3", "J4", "J5"]);
}

#[test]
fn every_valid_job_appears_exactly_once_within_capacity() {
    let input = records(11);
    let plan = plan_routes(&input, &quick_config()).unwrap();

    assert_eq!(plan.trips.len(), 3); // ceil(11 / 4)

    let mut seen: Vec<&str> = Vec::new();
    for trip in &plan.trips {
        assert!(trip.stops.len() <= 4);
        seen.extend(trip.stops.iter().map(|stop| stop.job_id.as_str()));
    }
    seen.sort_unstable();

    let mut expected: Vec<&str> = input.iter().map(|r| r.job_id.as_str()).collect();
    expected.sort_unstable();
    assert_eq!(seen, expected);
}

#[test]
fn zero_jobs_produce_an_empty_plan_without_error() {
    let plan = plan_routes(&[], &quick_config()).unwrap();

    assert!(plan.trips.is_empty());
    assert!(plan.unresolved.is_empty());
    assert_eq!(plan.search_cost, 0);
}

#[test]
fn trip_distance_covers_its_longest_leg() {
    let plan = plan_routes(&records(9), &quick_config()).unwrap();

    for trip in &plan.trips {
        let mut previous = depot();
        let mut longest = 0.0_f64;

        for stop in &trip.stops {
            let at = Location::from_lat_lon(stop.lat, stop.lon);
            longest = longest.max(previous.miles_to(&at));
            previous = at;
        }
        longest = longest.max(previous.miles_to(&depot()));

        assert!(trip.total_distance >= longest);
    }
}

#[test]
fn one_way_trips_close_at_the_end_location() {
    // A single job makes the stop ordering trivial, so the totals can
    // be checked leg by leg.
    let input = records(1);
    let stop = Location::from_lat_lon(input[0].lat, input[0].lon);

    let round = plan_routes(&input, &quick_config()).unwrap();
    let one_way_config = SolveConfig::one_way(depot(), end()).with_params(
        SolverParams::default().with_time_limit(SignedDuration::from_millis(200)),
    );
    let one_way = plan_routes(&input, &one_way_config).unwrap();

    let round_expected = depot().miles_to(&stop) + stop.miles_to(&depot());
    let one_way_expected = depot().miles_to(&stop) + stop.miles_to(&end());

    assert!((round.trips[0].total_distance - round_expected).abs() < 1e-9);
    assert!((one_way.trips[0].total_distance - one_way_expected).abs() < 1e-9);
}

#[test]
fn nan_coordinates_are_reported_and_do_not_block_the_rest() {
    let mut input = records(4);
    input.push(JobRecord {
        job_id: "BROKEN".to_string(),
        lat: f64::NAN,
        lon: -3.5,
    });

    let plan = plan_routes(&input, &quick_config()).unwrap();

    assert_eq!(plan.unresolved.len(), 1);
    assert_eq!(plan.unresolved[0].job_id, "BROKEN");

    let routed: usize = plan.trips.iter().map(|trip| trip.stops.len()).sum();
    assert_eq!(routed, 4);
    assert!(
        plan.trips
            .iter()
            .flat_map(|trip| trip.stops.iter())
            .all(|stop| stop.job_id != "BROKEN"),
    );
}

#[test]
fn more_search_time_never_costs_more() {
    let input = records(10);

    let construction_only = SolveConfig::round_trip(depot())
        .with_params(SolverParams::construction_only());
    let budgeted = quick_config();

    let base = plan_routes(&input, &construction_only).unwrap();
    let improved = plan_routes(&input, &budgeted).unwrap();

    assert!(improved.search_cost <= base.search_cost);
}

#[test]
fn construction_only_plans_are_reproducible() {
    let input = records(7);
    let config = SolveConfig::round_trip(depot())
        .with_params(SolverParams::construction_only());

    let first = plan_routes(&input, &config).unwrap();
    let second = plan_routes(&input, &config).unwrap();

    for (a, b) in first.trips.iter().zip(&second.trips) {
        assert_eq!(a.stops, b.stops);
        assert_eq!(a.total_distance, b.total_distance);
    }
    assert_eq!(first.search_cost, second.search_cost);
}

#[test]
fn plans_serialize_with_trip_ids_stops_and_unresolved_report() {
    let mut input = records(2);
    input.push(JobRecord {
        job_id: "J1".to_string(), // duplicate
        lat: 55.95,
        lon: -3.6,
    });

    let plan = plan_routes(&input, &quick_config()).unwrap();
    let json = serde_json::to_value(&plan).unwrap();

    assert_eq!(json["trips"][0]["trip_id"], 1);
    assert!(json["trips"][0]["stops"].is_array());
    assert!(json["trips"][0]["total_distance"].is_number());
    assert_eq!(json["unresolved"][0]["job_id"], "J1");
    assert_eq!(json["unresolved"][0]["reason"], "duplicate_job_id");
}

#[test]
fn a_failed_solve_leaves_later_solves_untouched() {
    use drover_engine::{
        error::SolveError,
        problem::{
            job::partition_valid,
            routing_problem::{ClosingLeg, RoutingProblem},
        },
        solver::solver::Solver,
    };

    // Force an infeasible configuration directly against the solver.
    let (stops, _) = partition_valid(&records(6));
    let starved =
        RoutingProblem::with_vehicles(depot(), &stops, 4, 1, ClosingLeg::Depot);
    let err = Solver::new(&starved, SolverParams::construction_only())
        .solve()
        .unwrap_err();
    assert!(matches!(err, SolveError::Infeasible { .. }));

    // The failure is a value, not process state: the next independent
    // solve over the same records succeeds.
    let plan = plan_routes(&records(6), &quick_config()).unwrap();
    assert_eq!(plan.trips.len(), 2);
}
