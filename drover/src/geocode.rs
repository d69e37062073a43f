use std::fs;
use std::path::PathBuf;

use clap::Args;
use drover_geocode::{BatchGeocoder, NominatimClient, NominatimParams, Resolution};
use serde::Serialize;
use tracing::info;

/// Environment overrides for the geocoding endpoint: `NOMINATIM_URL`
/// and `NOMINATIM_USER_AGENT`.
fn params_from_env(var: impl Fn(&str) -> Option<String>) -> NominatimParams {
    let mut params = NominatimParams::default();
    if let Some(base_url) = var("NOMINATIM_URL") {
        params.base_url = base_url;
    }
    if let Some(user_agent) = var("NOMINATIM_USER_AGENT") {
        params.user_agent = user_agent;
    }
    params
}

#[derive(Args)]
pub struct GeocodeArgs {
    /// Text file with one postcode query per line
    #[arg(short, long)]
    input: PathBuf,

    /// Concurrent lookups
    #[arg(long, default_value_t = 4)]
    concurrency: usize,

    /// Write the JSON records here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Output record, shaped so the result can feed `route` directly as the
/// collection side of a job file.
#[derive(Serialize)]
struct GeocodedJob {
    job_id: String,
    coll_lat: Option<f64>,
    coll_lon: Option<f64>,
}

#[derive(Serialize)]
struct GeocodeOutput {
    jobs: Vec<GeocodedJob>,
}

pub async fn run(args: GeocodeArgs) -> Result<(), anyhow::Error> {
    let raw = fs::read_to_string(&args.input)?;
    let queries: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();

    let params = params_from_env(|key| std::env::var(key).ok());
    let client = NominatimClient::new(params)?;
    let batch = BatchGeocoder::new(client, args.concurrency);
    let resolutions = batch.resolve_all(&queries).await;

    let jobs: Vec<GeocodedJob> = queries
        .iter()
        .zip(&resolutions)
        .map(|(query, resolution)| match resolution {
            Resolution::Resolved(point) => GeocodedJob {
                job_id: query.clone(),
                coll_lat: Some(point.y()),
                coll_lon: Some(point.x()),
            },
            Resolution::Unresolved => GeocodedJob {
                job_id: query.clone(),
                coll_lat: None,
                coll_lon: None,
            },
        })
        .collect();

    let resolved = jobs.iter().filter(|job| job.coll_lat.is_some()).count();
    info!(
        queries = queries.len(),
        resolved,
        unresolved = queries.len() - resolved,
        "geocoding finished"
    );

    let rendered = serde_json::to_string_pretty(&GeocodeOutput { jobs })?;
    match args.output {
        Some(path) => fs::write(path, rendered)?,
        None => println!("{rendered}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::params_from_env;

    #[test]
    fn env_overrides_both_endpoint_and_user_agent() {
        let params = params_from_env(|key| match key {
            "NOMINATIM_URL" => Some("http://localhost:8080".to_owned()),
            "NOMINATIM_USER_AGENT" => Some("fleet-routing".to_owned()),
            _ => None,
        });

        assert_eq!(params.base_url, "http://localhost:8080");
        assert_eq!(params.user_agent, "fleet-routing");
    }

    #[test]
    fn unset_env_keeps_the_defaults() {
        let defaults = params_from_env(|_| None);

        assert_eq!(defaults.base_url, "https://nominatim.openstreetmap.org");
        assert_eq!(defaults.user_agent, "location_optimizer");
    }
}
