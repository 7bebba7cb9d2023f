//! Map support for Campus Essentials.
//!
//! This crate knows nothing about the GUI. It turns coordinates into tile
//! addresses and screen offsets, keeps a bounded cache of tiles and fetches
//! them from a raster tile server.
//!
//! # Module Organization
//!
//! - [`projection`]: Web-Mercator math
//! - [`tile`]: Tile ids and tile-server URL templates
//! - [`viewport`]: Center/zoom/size and the tiles it covers
//! - [`cache`]: LRU cache of tile load states
//! - [`client`]: Async tile fetching
//! - [`links`]: External map-search deep links
//! - [`error`]: Error types

pub mod cache;
pub mod client;
pub mod error;
pub mod links;
pub mod projection;
pub mod tile;
pub mod viewport;

pub use cache::{TileCache, TileState};
pub use client::TileClient;
pub use error::{MapError, Result};
pub use links::external_maps_url;
pub use projection::{MAX_ZOOM, TILE_SIZE, WebMercator, WorldPixel};
pub use tile::{OSM_ATTRIBUTION, OSM_TILE_URL, TileId, TileSource};
pub use viewport::{MapViewport, PlacedTile, ScreenPoint};

/// Zoom level used for the campus map.
pub const DEFAULT_ZOOM: u8 = 18;
