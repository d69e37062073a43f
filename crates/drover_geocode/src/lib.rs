//! Forward geocoding for delivery addresses.
//!
//! [`NominatimClient`] resolves a free-text query (typically a UK postcode)
//! to a coordinate through a Nominatim-compatible HTTP endpoint, with bounded
//! retries on transient failures. [`BatchGeocoder`] fans a list of queries out
//! over a bounded number of concurrent requests and degrades per-item failures
//! to [`Resolution::Unresolved`] rather than failing the whole batch.

pub mod batch;
pub mod geocoder;
pub mod nominatim;

pub use batch::{BatchGeocoder, Resolution};
pub use geocoder::{GeocodeError, Geocoder};
pub use nominatim::{NominatimClient, NominatimParams, RetryPolicy};
