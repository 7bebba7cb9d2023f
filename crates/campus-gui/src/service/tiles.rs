//! Map tile loading.
//!
//! Visible tiles that the cache has not seen are fetched in parallel, one
//! task each. Results come back as [`MapMessage::TileLoaded`] and are
//! decoded into image handles for the canvas.

use iced::Task;
use iced::widget::image;

use campus_map::{TileClient, TileId};

use crate::message::{MapMessage, Message};
use crate::state::MapState;

/// Fetch every visible tile not already cached or in flight.
pub fn request_visible_tiles(map: &mut MapState) -> Task<Message> {
    let Some(client) = map.client().cloned() else {
        return Task::none();
    };

    let wanted = map.wanted_tiles();
    if !wanted.is_empty() {
        tracing::debug!(count = wanted.len(), "Requesting map tiles");
    }

    Task::batch(
        wanted
            .into_iter()
            .map(|tile| fetch_tile(client.clone(), tile)),
    )
}

fn fetch_tile(client: TileClient, tile: TileId) -> Task<Message> {
    Task::perform(
        async move { client.fetch(tile).await.map_err(|e| e.to_string()) },
        move |result| Message::Map(MapMessage::TileLoaded { tile, result }),
    )
}

/// Store the outcome of a tile fetch.
pub fn apply_loaded_tile(map: &mut MapState, tile: TileId, result: Result<Vec<u8>, String>) {
    match result {
        Ok(bytes) => map.tile_ready(tile, image::Handle::from_bytes(bytes)),
        Err(reason) => {
            tracing::warn!(%tile, %reason, "Map tile failed to load");
            map.tile_failed(tile);
        }
    }
}
