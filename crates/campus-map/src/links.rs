//! Deep links into external map applications.

use campus_model::GeoPoint;

/// Google Maps search endpoint. The `api=1&query=<lat>,<lng>` shape is what
/// the Maps apps recognize as a universal link.
pub const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Search URL for a coordinate.
pub fn external_maps_url(point: GeoPoint) -> String {
    format!("{MAPS_SEARCH_URL}{}", point.query_pair())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_shape() {
        insta::assert_snapshot!(
            external_maps_url(GeoPoint::new(17.54090448861708, 78.57527103665713)),
            @"https://www.google.com/maps/search/?api=1&query=17.54090448861708,78.57527103665713"
        );
    }

    #[test]
    fn test_negative_coordinates() {
        assert_eq!(
            external_maps_url(GeoPoint::new(-33.5, -70.25)),
            "https://www.google.com/maps/search/?api=1&query=-33.5,-70.25"
        );
    }
}
