//! Map page message handler.
//!
//! Handles:
//! - Location selection (recenter the viewport, then load its tiles)
//! - Drag, wheel and zoom buttons on the map
//! - The marker's name card
//! - External map links for the selected or any listed location
//! - Tile fetch results

use iced::Task;

use campus_map::external_maps_url;
use campus_model::location_by_id;

use super::MessageHandler;
use crate::message::{MapMessage, Message};
use crate::service::{apply_loaded_tile, open_logged, request_visible_tiles};
use crate::state::AppState;

/// Handler for map page messages.
pub struct MapHandler;

impl MessageHandler<MapMessage> for MapHandler {
    fn handle(&self, state: &mut AppState, msg: MapMessage) -> Task<Message> {
        match msg {
            MapMessage::SelectLocation(id) => {
                if state.select_location(id) {
                    request_visible_tiles(&mut state.map)
                } else {
                    Task::none()
                }
            }

            MapMessage::Pan { dx, dy } => {
                if state.map.pan(dx, dy) {
                    request_visible_tiles(&mut state.map)
                } else {
                    Task::none()
                }
            }

            MapMessage::Zoom(steps) => {
                if state.map.zoom_by(steps) {
                    tracing::debug!(zoom = state.map.viewport.zoom(), "Map zoom");
                    request_visible_tiles(&mut state.map)
                } else {
                    Task::none()
                }
            }

            MapMessage::ToggleMarkerPopup => {
                state.map.popup_open = !state.map.popup_open;
                Task::none()
            }

            MapMessage::CloseMarkerPopup => {
                state.map.popup_open = false;
                Task::none()
            }

            MapMessage::OpenSelected => {
                open_logged(&state.picker.external_url());
                Task::none()
            }

            MapMessage::OpenLocation(id) => {
                match location_by_id(id) {
                    Some(record) => open_logged(&external_maps_url(record.point())),
                    None => tracing::warn!(id, "Unknown location id"),
                }
                Task::none()
            }

            MapMessage::TileLoaded { tile, result } => {
                apply_loaded_tile(&mut state.map, tile, result);
                Task::none()
            }
        }
    }
}
