use std::fs;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use drover_engine::{
    plan::{RoutePlan, SolveConfig, plan_routes},
    problem::{location::Location, routing_problem::DEFAULT_CAPACITY},
    solver::solver_params::SolverParams,
};
use serde::Serialize;
use tracing::{error, info};

use crate::{job_file::JobFile, parsers};

/// Reference deployment depot: Livingston.
const DEPOT: (f64, f64) = (55.899819685016475, -3.5198384054833203);
/// Reference deployment delivery end point: Northampton.
const DELIVERY_END: (f64, f64) = (52.26700759136509, -0.7527653741274775);

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Route collection locations, each trip returning to the depot
    Collection,
    /// Route delivery locations, each trip carrying on to the end point
    Delivery,
    /// Both solves from the same job file, independently
    Both,
}

#[derive(Args)]
pub struct RouteArgs {
    /// JSON job file
    #[arg(short, long)]
    input: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Mode::Both)]
    mode: Mode,

    /// Trips per vehicle load
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Wall-clock budget per solve (e.g., "30s", "5m")
    #[arg(short, long, value_parser = parsers::parse_duration, default_value = "30s")]
    budget: jiff::SignedDuration,

    /// Skip improvement: deterministic construction-only solve
    #[arg(long)]
    construction_only: bool,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Write the JSON plan here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Serialize)]
struct RoutingOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    collection: Option<RoutePlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    delivery: Option<RoutePlan>,
}

pub fn run(args: RouteArgs) -> Result<(), anyhow::Error> {
    let file = JobFile::load(&args.input)?;

    let depot = file
        .depot
        .map(|coordinate| coordinate.location())
        .unwrap_or_else(|| Location::from_lat_lon(DEPOT.0, DEPOT.1));
    let end = file
        .end
        .map(|coordinate| coordinate.location())
        .unwrap_or_else(|| Location::from_lat_lon(DELIVERY_END.0, DELIVERY_END.1));

    let params = if args.construction_only {
        SolverParams::construction_only()
    } else {
        SolverParams::default()
    };
    let params = SolverParams {
        seed: args.seed,
        ..params.with_time_limit(args.budget)
    };

    let collection_config = SolveConfig::round_trip(depot)
        .with_capacity(args.capacity)
        .with_params(params.clone());
    let delivery_config = SolveConfig::one_way(depot, end)
        .with_capacity(args.capacity)
        .with_params(params);

    let mut output = RoutingOutput {
        collection: None,
        delivery: None,
    };

    if args.mode == Mode::Collection || args.mode == Mode::Both {
        match plan_routes(&file.collection_records(), &collection_config) {
            Ok(plan) => {
                log_plan("collection", &plan);
                output.collection = Some(plan);
            }
            // The delivery solve is independent; keep going in Both mode.
            Err(solve_error) if args.mode == Mode::Both => {
                error!(%solve_error, "collection solve failed");
            }
            Err(solve_error) => return Err(solve_error.into()),
        }
    }

    if args.mode == Mode::Delivery || args.mode == Mode::Both {
        let plan = plan_routes(&file.delivery_records(), &delivery_config)?;
        log_plan("delivery", &plan);
        output.delivery = Some(plan);
    }

    let rendered = serde_json::to_string_pretty(&output)?;
    match args.output {
        Some(path) => fs::write(path, rendered)?,
        None => println!("{rendered}"),
    }

    Ok(())
}

fn log_plan(side: &str, plan: &RoutePlan) {
    info!(
        side,
        trips = plan.trips.len(),
        unresolved = plan.unresolved.len(),
        total_miles = plan.total_distance(),
        "route plan ready"
    );
}
