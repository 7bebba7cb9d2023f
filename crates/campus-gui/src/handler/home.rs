//! Home page message handler.
//!
//! Handles:
//! - Disclosure panel toggles (measure, then start the transition)

use std::time::Instant;

use iced::Task;

use super::MessageHandler;
use crate::message::{HomeMessage, Message};
use crate::state::{AppState, Measure};
use crate::view::home::PanelContent;

/// Handler for home page messages.
pub struct HomeHandler;

impl MessageHandler<HomeMessage> for HomeHandler {
    fn handle(&self, state: &mut AppState, msg: HomeMessage) -> Task<Message> {
        match msg {
            HomeMessage::TogglePanel(id) => {
                let now = Instant::now();
                state.frame = now;
                let extent = PanelContent::new(id, &state.panels, now)
                    .natural_extent(state.card_inner_width());

                let open = state
                    .panels
                    .toggle(id, extent, now, &state.settings.animation);
                tracing::info!(panel = id.title(), open, extent, "Toggled panel");
                Task::none()
            }
        }
    }
}
