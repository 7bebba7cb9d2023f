//! Geographic point type.

use serde::Serialize;

/// A WGS84 coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a point from latitude and longitude.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Format as `"<lat>,<lng>"`, the query shape used by map-search links.
    ///
    /// Uses Rust's shortest round-trip formatting, so the digits are exactly
    /// those of the recorded coordinate.
    pub fn query_pair(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}
