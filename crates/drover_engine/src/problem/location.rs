use geo::{Distance, Haversine};

use crate::define_index_newtype;

define_index_newtype!(NodeIdx, Location);

/// Node 0 of every routing problem: the depot all trips depart from.
pub const DEPOT_NODE: NodeIdx = NodeIdx::new(0);

const METERS_PER_MILE: f64 = 1_609.344;

/// A WGS84 coordinate pair. Immutable once built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Location {
    point: geo::Point,
}

impl Location {
    pub fn from_lat_lon(lat: f64, lon: f64) -> Self {
        Self {
            point: geo::Point::new(lon, lat),
        }
    }

    pub fn lon(&self) -> f64 {
        self.point.x()
    }

    pub fn lat(&self) -> f64 {
        self.point.y()
    }

    pub fn is_finite(&self) -> bool {
        self.lat().is_finite() && self.lon().is_finite()
    }

    /// Great-circle distance in miles. Raw lat/lon degrees are not
    /// locally isotropic at UK latitudes, so Euclidean distance on the
    /// coordinates themselves is never used.
    pub fn miles_to(&self, to: &Location) -> f64 {
        let haversine = Haversine;

        haversine.distance(self.point, to.point) / METERS_PER_MILE
    }
}

impl From<&Location> for geo::Point<f64> {
    fn from(location: &Location) -> Self {
        location.point
    }
}
