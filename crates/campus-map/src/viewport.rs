//! The map viewport: a center coordinate, a zoom level and a pixel size.
//!
//! The viewport is long-lived. Selecting a new location recenters it in
//! place; the widget that draws it is never rebuilt. Drag and wheel input
//! move it with [`MapViewport::pan_by`] and [`MapViewport::zoom_by`].

use campus_model::GeoPoint;

use crate::error::{MapError, Result};
use crate::projection::{MAX_ZOOM, TILE_SIZE, WebMercator, WorldPixel};
use crate::tile::TileId;

/// A screen position relative to the viewport's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

/// A tile together with where its top-left corner lands on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedTile {
    pub tile: TileId,
    pub x: f32,
    pub y: f32,
}

impl PlacedTile {
    /// Edge length of the tile on screen.
    pub const SIZE: f32 = TILE_SIZE as f32;
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapViewport {
    center: GeoPoint,
    zoom: u8,
    width: f32,
    height: f32,
}

impl MapViewport {
    /// Create a zero-sized viewport. Call [`MapViewport::resize`] once the
    /// widget size is known.
    pub fn new(center: GeoPoint, zoom: u8) -> Result<Self> {
        if zoom > MAX_ZOOM {
            return Err(MapError::InvalidZoom(zoom));
        }
        Ok(Self {
            center,
            zoom,
            width: 0.0,
            height: 0.0,
        })
    }

    /// Like [`MapViewport::new`], with `zoom` clamped to [`MAX_ZOOM`].
    pub fn clamped(center: GeoPoint, zoom: u8) -> Self {
        Self {
            center,
            zoom: zoom.min(MAX_ZOOM),
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Move the center. Returns `false` when already centered on `point`.
    pub fn recenter(&mut self, point: GeoPoint) -> bool {
        if self.center == point {
            return false;
        }
        tracing::debug!(from = %self.center, to = %point, "recentering map viewport");
        self.center = point;
        true
    }

    /// Shift the view by a screen-space drag of `dx`/`dy` pixels.
    ///
    /// Dragging right reveals what lies to the west. The center wraps around
    /// the antimeridian and stops at the top and bottom of the world. Returns
    /// `false` when the center did not move.
    pub fn pan_by(&mut self, dx: f32, dy: f32) -> bool {
        if dx == 0.0 && dy == 0.0 {
            return false;
        }
        let world = WebMercator::world_size(self.zoom);
        let center = WebMercator::to_world(self.center, self.zoom);
        let moved = WorldPixel {
            x: (center.x - f64::from(dx)).rem_euclid(world),
            y: (center.y - f64::from(dy)).clamp(0.0, world),
        };
        let point = WebMercator::from_world(moved, self.zoom);
        if point == self.center {
            return false;
        }
        self.center = point;
        true
    }

    /// Set the zoom level, clamped to [`MAX_ZOOM`]. Returns `false` when it
    /// was already at that level.
    pub fn set_zoom(&mut self, zoom: u8) -> bool {
        let zoom = zoom.min(MAX_ZOOM);
        if zoom == self.zoom {
            return false;
        }
        tracing::debug!(from = self.zoom, to = zoom, "changing map zoom");
        self.zoom = zoom;
        true
    }

    /// Zoom in (positive) or out (negative) by whole levels around the
    /// center, staying within `0..=MAX_ZOOM`.
    pub fn zoom_by(&mut self, steps: i8) -> bool {
        let zoom = (i16::from(self.zoom) + i16::from(steps)).clamp(0, i16::from(MAX_ZOOM));
        self.set_zoom(zoom as u8)
    }

    pub fn can_zoom_in(&self) -> bool {
        self.zoom < MAX_ZOOM
    }

    pub fn can_zoom_out(&self) -> bool {
        self.zoom > 0
    }

    /// Update the pixel size. Negative sizes are treated as zero.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    /// A copy of this viewport with a different pixel size.
    #[must_use]
    pub fn with_size(&self, width: f32, height: f32) -> Self {
        let mut viewport = self.clone();
        viewport.resize(width, height);
        viewport
    }

    /// Screen position of `point`. Points outside the viewport yield
    /// coordinates outside `0..width` / `0..height`.
    pub fn project(&self, point: GeoPoint) -> ScreenPoint {
        let center = WebMercator::to_world(self.center, self.zoom);
        let target = WebMercator::to_world(point, self.zoom);
        ScreenPoint {
            x: (target.x - center.x) as f32 + self.width / 2.0,
            y: (target.y - center.y) as f32 + self.height / 2.0,
        }
    }

    /// Tiles covering the viewport, including partially visible edge tiles.
    ///
    /// Columns wrap around the antimeridian; rows beyond the poles are
    /// skipped.
    pub fn visible_tiles(&self) -> Vec<PlacedTile> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Vec::new();
        }

        let center = WebMercator::to_world(self.center, self.zoom);
        let left = center.x - f64::from(self.width) / 2.0;
        let top = center.y - f64::from(self.height) / 2.0;

        let first_col = (left / TILE_SIZE).floor() as i64;
        let last_col = ((left + f64::from(self.width)) / TILE_SIZE).ceil() as i64 - 1;
        let first_row = (top / TILE_SIZE).floor() as i64;
        let last_row = ((top + f64::from(self.height)) / TILE_SIZE).ceil() as i64 - 1;
        let count = 1i64 << self.zoom;

        let mut tiles = Vec::new();
        for row in first_row..=last_row {
            if !(0..count).contains(&row) {
                continue;
            }
            for col in first_col..=last_col {
                let wrapped = col.rem_euclid(count);
                tiles.push(PlacedTile {
                    tile: TileId {
                        zoom: self.zoom,
                        x: wrapped as u32,
                        y: row as u32,
                    },
                    x: (col as f64 * TILE_SIZE - left) as f32,
                    y: (row as f64 * TILE_SIZE - top) as f32,
                });
            }
        }
        tiles
    }
}
