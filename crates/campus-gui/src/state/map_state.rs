//! Map viewport state.
//!
//! Holds the single long-lived [`MapViewport`], the decoded tiles and the
//! canvas geometry cache. Selecting a location recenters this viewport at
//! the configured zoom; dragging and scrolling move it from there. It is
//! never rebuilt.

use iced::widget::canvas;
use iced::widget::image;

use campus_map::{DEFAULT_ZOOM, MAX_ZOOM, MapViewport, TILE_SIZE, TileCache, TileClient, TileId};
use campus_model::GeoPoint;

use super::settings::MapSettings;
use crate::theme::{MAP_HEIGHT, MAX_CONTENT_WIDTH};

/// Most tiles the map can show at once: the widest content column, plus one
/// partial tile on each axis.
fn max_visible_tiles() -> usize {
    let span = |pixels: f32| (f64::from(pixels) / TILE_SIZE).ceil() as usize + 1;
    span(MAX_CONTENT_WIDTH) * span(MAP_HEIGHT)
}

/// Map viewport, tile cache and tile client.
pub struct MapState {
    /// The viewport the map canvas draws.
    pub viewport: MapViewport,
    /// Decoded tiles by id.
    pub tiles: TileCache<image::Handle>,
    /// Cached canvas geometry. Cleared when the picture changes.
    pub canvas: canvas::Cache,
    /// Attribution shown under the map.
    pub attribution: String,
    /// Whether the marker's name card is shown.
    pub popup_open: bool,
    /// Zoom a selection resets the viewport to.
    home_zoom: u8,
    /// `None` when the HTTP client could not be built; the map then stays
    /// blank apart from the marker.
    client: Option<TileClient>,
}

impl MapState {
    pub fn new(settings: &MapSettings, center: GeoPoint) -> Self {
        let zoom = if settings.zoom > MAX_ZOOM {
            tracing::warn!(
                zoom = settings.zoom,
                fallback = DEFAULT_ZOOM,
                "Map zoom out of range"
            );
            DEFAULT_ZOOM
        } else {
            settings.zoom
        };

        let source = settings.tile_source();
        let attribution = source.attribution().to_string();
        let client = match TileClient::new(source) {
            Ok(client) => Some(client),
            Err(err) => {
                tracing::warn!(error = %err, "Map tiles disabled");
                None
            }
        };

        let floor = max_visible_tiles();
        let capacity = if settings.cache_capacity < floor {
            tracing::warn!(
                configured = settings.cache_capacity,
                used = floor,
                "Tile cache smaller than one screen of tiles"
            );
            floor
        } else {
            settings.cache_capacity
        };

        Self {
            viewport: MapViewport::clamped(center, zoom),
            tiles: TileCache::new(capacity),
            canvas: canvas::Cache::new(),
            attribution,
            popup_open: false,
            home_zoom: zoom,
            client,
        }
    }

    pub fn client(&self) -> Option<&TileClient> {
        self.client.as_ref()
    }

    /// Recenter on `point` at the configured zoom and hide the marker card.
    /// Returns `false` when the view was already there.
    pub fn show(&mut self, point: GeoPoint) -> bool {
        self.popup_open = false;
        let zoomed = self.viewport.set_zoom(self.home_zoom);
        let moved = self.viewport.recenter(point) || zoomed;
        if moved {
            self.canvas.clear();
        }
        moved
    }

    /// Follow a drag of `dx`/`dy` screen pixels.
    pub fn pan(&mut self, dx: f32, dy: f32) -> bool {
        let moved = self.viewport.pan_by(dx, dy);
        if moved {
            self.canvas.clear();
        }
        moved
    }

    /// Zoom by whole levels around the center.
    pub fn zoom_by(&mut self, steps: i8) -> bool {
        let zoomed = self.viewport.zoom_by(steps);
        if zoomed {
            self.canvas.clear();
        }
        zoomed
    }

    /// Resize the viewport to the on-screen map area.
    pub fn resize(&mut self, width: f32, height: f32) {
        if self.viewport.size() != (width, height) {
            self.viewport.resize(width, height);
            self.canvas.clear();
        }
    }

    /// Mark the visible tiles as wanted. Returns the ones to fetch.
    pub fn wanted_tiles(&mut self) -> Vec<TileId> {
        self.viewport
            .visible_tiles()
            .into_iter()
            .map(|placed| placed.tile)
            .filter(|tile| self.tiles.request(*tile))
            .collect()
    }

    /// Store a decoded tile and redraw.
    pub fn tile_ready(&mut self, tile: TileId, handle: image::Handle) {
        self.tiles.insert_ready(tile, handle);
        self.canvas.clear();
    }

    /// Record a failed fetch. The tile stays blank.
    pub fn tile_failed(&mut self, tile: TileId) {
        self.tiles.mark_failed(tile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campus() -> GeoPoint {
        GeoPoint::new(17.544, 78.571)
    }

    fn offline(settings: &MapSettings) -> MapState {
        let mut map = MapState::new(settings, campus());
        map.resize(600.0, MAP_HEIGHT);
        map
    }

    #[test]
    fn test_show_resets_zoom_and_center() {
        let settings = MapSettings::default();
        let mut map = offline(&settings);

        assert!(map.zoom_by(-3));
        assert!(map.pan(120.0, 40.0));
        map.popup_open = true;

        assert!(map.show(campus()));
        assert_eq!(map.viewport.zoom(), settings.zoom);
        assert_eq!(map.viewport.center(), campus());
        assert!(!map.popup_open);
        assert!(!map.show(campus()));
    }

    #[test]
    fn test_zoom_clamps_at_max() {
        let settings = MapSettings::default();
        let mut map = offline(&settings);
        while map.zoom_by(1) {}
        assert_eq!(map.viewport.zoom(), MAX_ZOOM);
        assert!(!map.zoom_by(1));
    }

    #[test]
    fn test_small_cache_holds_a_full_screen() {
        let settings = MapSettings {
            cache_capacity: 2,
            ..MapSettings::default()
        };
        let mut map = offline(&settings);
        assert_eq!(map.tiles.capacity(), max_visible_tiles());

        // Every visible tile is wanted once and none evicts another.
        let first = map.wanted_tiles();
        assert!(!first.is_empty());
        assert!(first.len() <= max_visible_tiles());
        assert!(map.wanted_tiles().is_empty());
    }

    #[test]
    fn test_large_cache_is_kept() {
        let settings = MapSettings {
            cache_capacity: 1000,
            ..MapSettings::default()
        };
        assert_eq!(offline(&settings).tiles.capacity(), 1000);
    }
}
