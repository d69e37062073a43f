use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::problem::location::Location;

/// A raw input record: one job on one side (collection or delivery) of
/// the workload. The two routing modes feed disjoint record sets built
/// from the same jobs.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct JobRecord {
    pub job_id: String,
    pub lat: f64,
    pub lon: f64,
}

/// A validated record, ready for the distance model.
#[derive(Clone, Debug)]
pub struct Stop {
    pub job_id: String,
    pub location: Location,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    NonFiniteCoordinate,
    DuplicateJobId,
}

/// A record excluded before solving. Excluded jobs are always reported
/// back to the caller, never silently dropped.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct UnresolvedJob {
    pub job_id: String,
    pub reason: ExclusionReason,
}

/// Splits raw records into solvable stops and excluded jobs. A record
/// with a missing or non-finite coordinate cannot enter the distance
/// model; a job id seen twice keeps its first record only.
pub fn partition_valid(records: &[JobRecord]) -> (Vec<Stop>, Vec<UnresolvedJob>) {
    let mut stops = Vec::with_capacity(records.len());
    let mut unresolved = Vec::new();
    let mut seen: FxHashSet<&str> = FxHashSet::default();

    for record in records {
        let location = Location::from_lat_lon(record.lat, record.lon);

        if !location.is_finite() {
            warn!(job_id = %record.job_id, "excluding job with non-finite coordinate");
            unresolved.push(UnresolvedJob {
                job_id: record.job_id.clone(),
                reason: ExclusionReason::NonFiniteCoordinate,
            });
            continue;
        }

        if !seen.insert(record.job_id.as_str()) {
            warn!(job_id = %record.job_id, "excluding duplicate job record");
            unresolved.push(UnresolvedJob {
                job_id: record.job_id.clone(),
                reason: ExclusionReason::DuplicateJobId,
            });
            continue;
        }

        stops.push(Stop {
            job_id: record.job_id.clone(),
            location,
        });
    }

    (stops, unresolved)
}
