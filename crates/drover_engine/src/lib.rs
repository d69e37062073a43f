//! Capacitated trip routing for a transporter fleet.
//!
//! Given a depot, a set of job locations and a fixed per-vehicle
//! capacity, the engine partitions jobs into trips and orders the stops
//! within each trip to minimize total great-circle mileage. Round-trip
//! routes close back at the depot; one-way routes close at a distinct
//! end location.
//!
//! The pipeline is a single synchronous call: build the distance model
//! ([`problem`]), run the capacitated solver ([`solver`]), materialize
//! the trips ([`plan`]). [`plan::plan_routes`] wires the three together.

pub mod error;
pub mod plan;
pub mod problem;
pub mod solver;
mod utils;

#[cfg(test)]
pub(crate) mod test_utils;
