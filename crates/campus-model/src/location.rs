//! Named campus locations.

use serde::Serialize;

use crate::catalog::LOCATIONS;
use crate::geo::GeoPoint;

/// A named point of interest on campus.
///
/// Records come from the fixed [`LOCATIONS`] table. Ids are unique; some
/// records (the residential bhavans) carry no description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocationRecord {
    /// Stable identifier (e.g., "lib", "mess1").
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    /// Optional free-text description.
    pub description: Option<&'static str>,
}

impl LocationRecord {
    /// The record's coordinate.
    pub const fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// Find a location by id in the static table.
pub fn location_by_id(id: &str) -> Option<&'static LocationRecord> {
    LOCATIONS.iter().find(|record| record.id == id)
}

/// Index of a location in the static table.
pub fn location_index(id: &str) -> Option<usize> {
    LOCATIONS.iter().position(|record| record.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_library() {
        let lib = location_by_id("lib").unwrap();
        assert_eq!(lib.name, "Library");
        assert_eq!(lib.point(), GeoPoint::new(lib.latitude, lib.longitude));
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(location_by_id("nowhere").is_none());
        assert!(location_index("nowhere").is_none());
    }

    #[test]
    fn test_index_matches_table_position() {
        for (i, record) in LOCATIONS.iter().enumerate() {
            assert_eq!(location_index(record.id), Some(i));
        }
    }
}
