use std::future::Future;

use geo_types::Point;

#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("geocoding API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("invalid coordinate in geocoding response: {0}")]
    InvalidCoordinate(String),

    #[error("geocoding retries exhausted after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },
}

impl GeocodeError {
    /// Whether retrying the same request can plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            GeocodeError::Request(error) => error.is_timeout() || error.is_connect(),
            GeocodeError::Api { status, .. } => *status >= 500 || *status == 429,
            GeocodeError::InvalidCoordinate(_) | GeocodeError::RetriesExhausted { .. } => false,
        }
    }
}

/// A forward geocoder resolving a free-text query to a coordinate.
///
/// `Ok(None)` means the provider answered but found no match, which is
/// distinct from a transport or API failure.
pub trait Geocoder: Send + Sync {
    fn resolve(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Option<Point>, GeocodeError>> + Send;
}
