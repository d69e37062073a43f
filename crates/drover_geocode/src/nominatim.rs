use std::future::Future;
use std::time::Duration;

use geo_types::Point;
use serde::Deserialize;
use tracing::warn;

use crate::geocoder::{GeocodeError, Geocoder};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Bounded retry with exponential backoff.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Delay to wait after the given 1-based attempt fails.
    pub fn delay(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt.saturating_sub(1))
    }
}

#[derive(Debug, Clone)]
pub struct NominatimParams {
    pub base_url: String,
    pub user_agent: String,
    pub retry: RetryPolicy,
}

impl Default for NominatimParams {
    fn default() -> Self {
        NominatimParams {
            base_url: "https://nominatim.openstreetmap.org".to_owned(),
            user_agent: "location_optimizer".to_owned(),
            retry: RetryPolicy::default(),
        }
    }
}

/// Client for a Nominatim-compatible `/search` endpoint.
pub struct NominatimClient {
    params: NominatimParams,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

impl NominatimClient {
    pub fn new(params: NominatimParams) -> Result<Self, GeocodeError> {
        let client = reqwest::Client::builder()
            .user_agent(params.user_agent.clone())
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(NominatimClient { params, client })
    }

    async fn search(&self, query: &str) -> Result<Option<Point>, GeocodeError> {
        let url = format!("{}/search", self.params.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(url)
            .query(&[("q", query), ("format", "jsonv2"), ("limit", "1")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let places: Vec<NominatimPlace> = response.json().await?;
        let Some(place) = places.first() else {
            return Ok(None);
        };

        let lat: f64 = place
            .lat
            .parse()
            .map_err(|_| GeocodeError::InvalidCoordinate(place.lat.clone()))?;
        let lon: f64 = place
            .lon
            .parse()
            .map_err(|_| GeocodeError::InvalidCoordinate(place.lon.clone()))?;

        Ok(Some(Point::new(lon, lat)))
    }
}

impl Geocoder for NominatimClient {
    fn resolve(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Option<Point>, GeocodeError>> + Send {
        async move {
            let retry = &self.params.retry;
            for attempt in 1..=retry.max_attempts {
                match self.search(query).await {
                    Ok(result) => return Ok(result),
                    Err(error) if error.is_transient() => {
                        warn!(%query, attempt, %error, "geocoding attempt failed");
                        if attempt < retry.max_attempts {
                            tokio::time::sleep(retry.delay(attempt)).await;
                        }
                    }
                    Err(error) => return Err(error),
                }
            }

            Err(GeocodeError::RetriesExhausted {
                attempts: retry.max_attempts,
            })
        }
    }
}
