//! Error types for map tiles.

use thiserror::Error;

use crate::projection::MAX_ZOOM;

/// Errors that can occur while addressing or fetching map tiles.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MapError {
    /// Network request failed.
    #[error("network error: {0}")]
    Network(String),

    /// The tile server answered with a non-success status.
    #[error("tile server returned {status} for {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested tile URL.
        url: String,
    },

    /// Zoom level outside the supported range.
    #[error("zoom level {0} is outside 0..={max}", max = MAX_ZOOM)]
    InvalidZoom(u8),

    /// Tile index outside the grid of its zoom level.
    #[error("tile {x},{y} does not exist at zoom {zoom}")]
    InvalidTile { zoom: u8, x: u32, y: u32 },
}

impl From<reqwest::Error> for MapError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Result type alias for map operations.
pub type Result<T> = std::result::Result<T, MapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = MapError::Status {
            status: 404,
            url: "https://a.tile.openstreetmap.org/18/1/1.png".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "tile server returned 404 for https://a.tile.openstreetmap.org/18/1/1.png"
        );
        assert_eq!(
            MapError::InvalidZoom(25).to_string(),
            "zoom level 25 is outside 0..=19"
        );
    }
}
