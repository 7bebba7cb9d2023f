//! Spherical Web-Mercator projection.
//!
//! Coordinates are expressed in two spaces:
//! - tile space: fractional tile indices at a zoom level (`0..2^zoom`)
//! - world pixels: tile space scaled by [`TILE_SIZE`]

use std::f64::consts::PI;

use campus_model::GeoPoint;

/// Edge length of a raster tile in pixels.
pub const TILE_SIZE: f64 = 256.0;

/// Latitude limit of the square Web-Mercator world.
pub const MAX_LATITUDE: f64 = 85.051_128_78;

/// Highest zoom level served by the standard tile servers.
pub const MAX_ZOOM: u8 = 19;

/// A position in world pixels at a given zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldPixel {
    pub x: f64,
    pub y: f64,
}

/// Web-Mercator conversions between degrees and tile space.
pub struct WebMercator;

impl WebMercator {
    /// Number of tiles along one axis.
    pub fn tile_count(zoom: u8) -> f64 {
        2.0_f64.powi(i32::from(zoom))
    }

    /// Width (and height) of the world in pixels.
    pub fn world_size(zoom: u8) -> f64 {
        TILE_SIZE * Self::tile_count(zoom)
    }

    /// Longitude to fractional tile x.
    pub fn lon_to_x(lon: f64, zoom: u8) -> f64 {
        (lon + 180.0) / 360.0 * Self::tile_count(zoom)
    }

    /// Latitude to fractional tile y. Latitude is clamped to [`MAX_LATITUDE`].
    pub fn lat_to_y(lat: f64, zoom: u8) -> f64 {
        let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0;
        y * Self::tile_count(zoom)
    }

    /// Fractional tile x to longitude.
    pub fn tile_to_lon(x: f64, zoom: u8) -> f64 {
        x / Self::tile_count(zoom) * 360.0 - 180.0
    }

    /// Fractional tile y to latitude.
    pub fn tile_to_lat(y: f64, zoom: u8) -> f64 {
        let n = PI - 2.0 * PI * y / Self::tile_count(zoom);
        n.sinh().atan().to_degrees()
    }

    /// Project a coordinate to world pixels.
    pub fn to_world(point: GeoPoint, zoom: u8) -> WorldPixel {
        WorldPixel {
            x: Self::lon_to_x(point.longitude, zoom) * TILE_SIZE,
            y: Self::lat_to_y(point.latitude, zoom) * TILE_SIZE,
        }
    }

    /// Inverse of [`WebMercator::to_world`].
    pub fn from_world(pixel: WorldPixel, zoom: u8) -> GeoPoint {
        GeoPoint::new(
            Self::tile_to_lat(pixel.y / TILE_SIZE, zoom),
            Self::tile_to_lon(pixel.x / TILE_SIZE, zoom),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_origin_is_world_center() {
        assert_eq!(WebMercator::lon_to_x(0.0, 1), 1.0);
        assert!((WebMercator::lat_to_y(0.0, 1) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_world_edges() {
        assert_eq!(WebMercator::lon_to_x(-180.0, 3), 0.0);
        assert_eq!(WebMercator::lon_to_x(180.0, 3), 8.0);
        assert!(WebMercator::lat_to_y(MAX_LATITUDE, 3).abs() < 1e-6);
        assert!((WebMercator::lat_to_y(-MAX_LATITUDE, 3) - 8.0).abs() < 1e-6);
    }

    #[test]
    fn test_polar_latitude_is_clamped() {
        assert_eq!(
            WebMercator::lat_to_y(90.0, 4),
            WebMercator::lat_to_y(MAX_LATITUDE, 4)
        );
    }

    #[test]
    fn test_world_size() {
        assert_eq!(WebMercator::world_size(0), 256.0);
        assert_eq!(WebMercator::world_size(18), 256.0 * 262_144.0);
    }

    proptest! {
        #[test]
        fn prop_degrees_survive_projection(
            lat in -85.0f64..85.0,
            lon in -180.0f64..180.0,
            zoom in 0u8..=MAX_ZOOM,
        ) {
            let back = WebMercator::from_world(WebMercator::to_world(GeoPoint::new(lat, lon), zoom), zoom);
            prop_assert!((back.latitude - lat).abs() < 1e-9);
            prop_assert!((back.longitude - lon).abs() < 1e-9);
        }

        #[test]
        fn prop_y_decreases_northward(a in -80.0f64..80.0, delta in 0.001f64..5.0) {
            prop_assert!(WebMercator::lat_to_y(a + delta, 10) < WebMercator::lat_to_y(a, 10));
        }
    }
}
