use std::sync::Arc;

use geo_types::Point;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::warn;

use crate::geocoder::Geocoder;

/// Outcome of geocoding a single query within a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Resolved(Point),
    Unresolved,
}

/// Resolves many queries concurrently against a shared [`Geocoder`].
///
/// At most `max_in_flight` requests run at once. A query that fails or has no
/// match becomes [`Resolution::Unresolved`] without affecting the rest of the
/// batch, and results come back in input order.
pub struct BatchGeocoder<G> {
    geocoder: Arc<G>,
    max_in_flight: usize,
}

impl<G: Geocoder + 'static> BatchGeocoder<G> {
    pub fn new(geocoder: G, max_in_flight: usize) -> Self {
        BatchGeocoder {
            geocoder: Arc::new(geocoder),
            max_in_flight: max_in_flight.max(1),
        }
    }

    pub async fn resolve_all(&self, queries: &[String]) -> Vec<Resolution> {
        let semaphore = Arc::new(Semaphore::new(self.max_in_flight));
        let mut tasks = JoinSet::new();

        for (index, query) in queries.iter().cloned().enumerate() {
            let geocoder = Arc::clone(&self.geocoder);
            let semaphore = Arc::clone(&semaphore);

            tasks.spawn(async move {
                // The semaphore is never closed, so acquisition cannot fail.
                let _permit = semaphore.acquire_owned().await.ok();
                let result = geocoder.resolve(&query).await;
                (index, query, result)
            });
        }

        let mut resolutions = vec![Resolution::Unresolved; queries.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, _, Ok(Some(point)))) => {
                    resolutions[index] = Resolution::Resolved(point);
                }
                Ok((_, query, Ok(None))) => {
                    warn!(%query, "no geocoding match");
                }
                Ok((_, query, Err(error))) => {
                    warn!(%query, %error, "geocoding failed");
                }
                Err(join_error) => {
                    warn!(%join_error, "geocoding task failed to complete");
                }
            }
        }

        resolutions
    }
}
