use serde::Serialize;

use crate::problem::job::UnresolvedJob;

/// One stop of a materialized trip, in visit order.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TripStop {
    pub job_id: String,
    pub lat: f64,
    pub lon: f64,
}

/// One vehicle's trip: its ordered stops and the real total mileage
/// including the closing leg. A trip with no stops is a valid unused
/// vehicle, not an error.
#[derive(Clone, Debug, Serialize)]
pub struct TripPlan {
    /// 1-based, stable across the plan.
    pub trip_id: usize,
    pub stops: Vec<TripStop>,
    pub total_distance: f64,
}

/// The user-facing solve result. Immutable once produced.
#[derive(Debug, Serialize)]
pub struct RoutePlan {
    pub trips: Vec<TripPlan>,
    /// Jobs excluded before solving; reported so nothing is silently
    /// dropped.
    pub unresolved: Vec<UnresolvedJob>,
    /// The solver's achieved integer-scaled cost, for comparing runs.
    /// Not a distance; trip mileage lives on each [`TripPlan`].
    pub search_cost: i64,
}

impl RoutePlan {
    pub fn total_distance(&self) -> f64 {
        self.trips.iter().map(|trip| trip.total_distance).sum()
    }
}
