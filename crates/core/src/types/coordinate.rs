//! Geographic coordinates.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Tokyo Station, the reference point every distance is measured from.
pub const TOKYO_STATION: Coordinate = Coordinate::new(139.767_306_8, 35.680_959_1);

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Longitude (`x` in the geocoding API).
    pub longitude: f64,
    /// Latitude (`y` in the geocoding API).
    pub latitude: f64,
}

impl Coordinate {
    /// Create a coordinate from longitude and latitude.
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Parse a coordinate from the decimal strings the geocoding API returns.
    ///
    /// A field that does not parse as a float becomes `0.0` instead of
    /// failing, so one malformed candidate cannot fail the whole request.
    #[must_use]
    pub fn parse_lenient(x: &str, y: &str) -> Self {
        Self::new(
            x.parse().unwrap_or_default(),
            y.parse().unwrap_or_default(),
        )
    }

    /// Great-circle distance to `other` in kilometers (haversine formula).
    #[must_use]
    pub fn distance_km(&self, other: &Self) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}
