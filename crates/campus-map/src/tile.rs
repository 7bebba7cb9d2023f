//! Tile addressing and tile-server URLs.

use std::fmt;

use campus_model::GeoPoint;

use crate::error::{MapError, Result};
use crate::projection::{MAX_ZOOM, WebMercator};

/// OpenStreetMap standard tile layer.
pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Attribution required by the OpenStreetMap tile usage policy.
pub const OSM_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Address of one raster tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId {
    pub zoom: u8,
    pub x: u32,
    pub y: u32,
}

impl TileId {
    /// Create a tile id, validating it against its zoom level.
    pub fn new(zoom: u8, x: u32, y: u32) -> Result<Self> {
        if zoom > MAX_ZOOM {
            return Err(MapError::InvalidZoom(zoom));
        }
        let count = 1u32 << zoom;
        if x >= count || y >= count {
            return Err(MapError::InvalidTile { zoom, x, y });
        }
        Ok(Self { zoom, x, y })
    }

    /// The tile that contains `point` at `zoom`.
    pub fn containing(point: GeoPoint, zoom: u8) -> Result<Self> {
        if zoom > MAX_ZOOM {
            return Err(MapError::InvalidZoom(zoom));
        }
        let max = (1u32 << zoom) - 1;
        let x = WebMercator::lon_to_x(point.longitude, zoom).floor().max(0.0) as u32;
        let y = WebMercator::lat_to_y(point.latitude, zoom).floor().max(0.0) as u32;
        Ok(Self {
            zoom,
            x: x.min(max),
            y: y.min(max),
        })
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}

/// A raster tile server described by a URL template.
///
/// The template understands `{s}` (subdomain), `{z}`, `{x}` and `{y}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSource {
    template: String,
    subdomains: Vec<String>,
    attribution: String,
}

impl TileSource {
    pub fn new(template: impl Into<String>, subdomains: Vec<String>) -> Self {
        Self {
            template: template.into(),
            subdomains,
            attribution: OSM_ATTRIBUTION.to_string(),
        }
    }

    /// The OpenStreetMap standard layer on subdomains `a`, `b` and `c`.
    pub fn openstreetmap() -> Self {
        Self::new(
            OSM_TILE_URL,
            ["a", "b", "c"].into_iter().map(String::from).collect(),
        )
    }

    pub fn attribution(&self) -> &str {
        &self.attribution
    }

    /// URL of `tile`. The subdomain is picked from the tile position so the
    /// same tile always maps to the same host.
    pub fn url_for(&self, tile: TileId) -> String {
        let subdomain = if self.subdomains.is_empty() {
            ""
        } else {
            let index = (u64::from(tile.x) + u64::from(tile.y)) % self.subdomains.len() as u64;
            self.subdomains[index as usize].as_str()
        };
        self.template
            .replace("{s}", subdomain)
            .replace("{z}", &tile.zoom.to_string())
            .replace("{x}", &tile.x.to_string())
            .replace("{y}", &tile.y.to_string())
    }
}

impl Default for TileSource {
    fn default() -> Self {
        Self::openstreetmap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_tile_at_zoom_18() {
        let lib = GeoPoint::new(17.545853792704165, 78.57150321231636);
        let tile = TileId::containing(lib, 18).unwrap();
        assert_eq!((tile.x, tile.y), (188_286, 118_090));
        assert_eq!(tile.to_string(), "18/188286/118090");
    }

    #[test]
    fn test_tile_bounds_checked() {
        assert!(TileId::new(1, 1, 1).is_ok());
        assert!(matches!(
            TileId::new(1, 2, 0),
            Err(MapError::InvalidTile { zoom: 1, x: 2, y: 0 })
        ));
        assert!(matches!(TileId::new(20, 0, 0), Err(MapError::InvalidZoom(20))));
    }

    #[test]
    fn test_subdomain_rotation_is_stable() {
        let source = TileSource::openstreetmap();
        let tile = TileId::new(2, 1, 0).unwrap();
        assert_eq!(
            source.url_for(tile),
            "https://b.tile.openstreetmap.org/2/1/0.png"
        );
        assert_eq!(source.url_for(tile), source.url_for(tile));
        assert_eq!(
            source.url_for(TileId::new(2, 1, 1).unwrap()),
            "https://c.tile.openstreetmap.org/2/1/1.png"
        );
    }

    #[test]
    fn test_template_without_subdomains() {
        let source = TileSource::new("http://localhost/{z}/{x}/{y}.png", Vec::new());
        assert_eq!(
            source.url_for(TileId::new(0, 0, 0).unwrap()),
            "http://localhost/0/0/0.png"
        );
        assert_eq!(source.attribution(), OSM_ATTRIBUTION);
    }
}
