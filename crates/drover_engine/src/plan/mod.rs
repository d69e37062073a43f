pub mod materialize;
pub mod trip;

use tracing::{debug, instrument};

pub use trip::{RoutePlan, TripPlan, TripStop};

use crate::{
    error::SolveError,
    problem::{
        job::{self, JobRecord},
        location::Location,
        routing_problem::{ClosingLeg, DEFAULT_CAPACITY, RoutingProblem},
    },
    solver::{solver::Solver, solver_params::SolverParams},
};

/// Per-solve configuration. Everything the pipeline varies between
/// collection and delivery runs lives here; no process-wide state.
#[derive(Clone, Debug)]
pub struct SolveConfig {
    pub depot: Location,
    /// `None` routes round trips back to the depot; `Some` closes every
    /// trip at the shared end location instead.
    pub end: Option<Location>,
    pub capacity: usize,
    pub params: SolverParams,
}

impl SolveConfig {
    /// Collection mode: every trip returns to the depot.
    pub fn round_trip(depot: Location) -> Self {
        Self {
            depot,
            end: None,
            capacity: DEFAULT_CAPACITY,
            params: SolverParams::default(),
        }
    }

    /// Delivery mode: every trip carries on to `end`.
    pub fn one_way(depot: Location, end: Location) -> Self {
        Self {
            end: Some(end),
            ..Self::round_trip(depot)
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_params(mut self, params: SolverParams) -> Self {
        self.params = params;
        self
    }

    fn closing_leg(&self) -> ClosingLeg {
        match self.end {
            Some(end) => ClosingLeg::End(end),
            None => ClosingLeg::Depot,
        }
    }
}

/// The whole pipeline as one synchronous call: validate records, build
/// the distance model, run the capacitated solver, materialize trips.
/// Independent invocations share no state; a failure here never affects
/// a later solve.
#[instrument(skip_all, level = "debug")]
pub fn plan_routes(
    records: &[JobRecord],
    config: &SolveConfig,
) -> Result<RoutePlan, SolveError> {
    let (stops, unresolved) = job::partition_valid(records);
    debug!(
        valid = stops.len(),
        excluded = unresolved.len(),
        "validated job records"
    );

    if stops.is_empty() {
        return Ok(RoutePlan {
            trips: Vec::new(),
            unresolved,
            search_cost: 0,
        });
    }

    let problem =
        RoutingProblem::new(config.depot, &stops, config.capacity, config.closing_leg());
    let assignment = Solver::new(&problem, config.params.clone()).solve()?;
    let trips = materialize::materialize(&problem, &stops, &assignment);

    Ok(RoutePlan {
        trips,
        unresolved,
        search_cost: assignment.search_cost,
    })
}
