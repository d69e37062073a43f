use std::fs;
use std::path::Path;

use drover_engine::problem::{job::JobRecord, location::Location};
use serde::{Deserialize, Serialize};

/// Coordinate pair as it appears in job files (lat/lon order, unlike
/// the lon/lat order geometry types use internally).
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn location(&self) -> Location {
        Location::from_lat_lon(self.lat, self.lon)
    }
}

/// One job carries both sides of the workload: where it is collected
/// and where it is delivered. Either side may be missing, in which case
/// that side's solve reports the job as unresolved.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct JobEntry {
    pub job_id: String,
    pub coll_lat: Option<f64>,
    pub coll_lon: Option<f64>,
    pub del_lat: Option<f64>,
    pub del_lon: Option<f64>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct JobFile {
    pub jobs: Vec<JobEntry>,
    pub depot: Option<LatLon>,
    pub end: Option<LatLon>,
}

impl JobFile {
    pub fn load(path: &Path) -> Result<Self, anyhow::Error> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Collection-side records. A missing coordinate becomes NaN so the
    /// engine excludes and reports the job instead of the file reader
    /// silently dropping it.
    pub fn collection_records(&self) -> Vec<JobRecord> {
        self.jobs
            .iter()
            .map(|job| JobRecord {
                job_id: job.job_id.clone(),
                lat: job.coll_lat.unwrap_or(f64::NAN),
                lon: job.coll_lon.unwrap_or(f64::NAN),
            })
            .collect()
    }

    /// Delivery-side records, same missing-coordinate convention.
    pub fn delivery_records(&self) -> Vec<JobRecord> {
        self.jobs
            .iter()
            .map(|job| JobRecord {
                job_id: job.job_id.clone(),
                lat: job.del_lat.unwrap_or(f64::NAN),
                lon: job.del_lon.unwrap_or(f64::NAN),
            })
            .collect()
    }
}
