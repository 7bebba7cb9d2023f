//! Main application module for Campus Essentials.
//!
//! This module implements the Iced 0.14.0 application using the builder pattern.
//! The architecture follows the Elm pattern: State → Message → Update → View.
//!
//! # Key Design Principles
//!
//! - **All state changes happen in `update()`** - Views are pure functions
//! - **No channels/polling** - Use `Task::perform` for async operations
//! - **Animation runs off window frames** - Subscribed to only while a panel moves
//!
//! # Module Structure
//!
//! - `subscription` - Frame and resize subscriptions

pub mod subscription;

use iced::{Element, Subscription, Task, Theme, window};

use crate::handler::{HomeHandler, MapHandler, MessageHandler};
use crate::message::Message;
use crate::service::{open_logged, request_visible_tiles, send_page_view};
use crate::state::{AppState, Settings, View};
use crate::theme::campus_theme;
use crate::view::{APP_NAME, view_app};

// =============================================================================
// APPLICATION
// =============================================================================

/// Main application struct.
///
/// This is the root of the Iced application. It holds the application state
/// and implements the Elm architecture methods.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance from loaded settings.
    ///
    /// Returns the initial state and the startup tasks: the analytics beacon,
    /// the first batch of map tiles and a query for the real window size.
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        let mut app = Self {
            state: AppState::new(settings),
        };

        let beacon = send_page_view(&app.state.settings.analytics);
        let tiles = request_visible_tiles(&mut app.state.map);
        // The window may open at a size other than the requested one
        // without a resize event.
        let size = window::latest()
            .and_then(window::size)
            .map(Message::WindowResized);

        tracing::info!(
            theme = %app.state.theme_mode,
            location = app.state.picker.selected().id,
            "Campus Essentials ready"
        );

        (app, Task::batch([beacon, tiles, size]))
    }

    /// Update application state in response to a message.
    ///
    /// This is the core of the Elm architecture - all state changes happen here.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Navigation
            // =================================================================
            Message::Navigate(view) => {
                tracing::info!(%view, "Navigate");
                self.state.view = view;
                self.state.sidebar_open = false;
                if view == View::MessMenu {
                    self.state.refresh_today();
                }
                if view.is_map() {
                    request_visible_tiles(&mut self.state.map)
                } else {
                    Task::none()
                }
            }

            Message::ToggleSidebar => {
                self.state.sidebar_open = !self.state.sidebar_open;
                Task::none()
            }

            Message::CloseSidebar => {
                self.state.sidebar_open = false;
                Task::none()
            }

            Message::ToggleTheme => {
                self.state.theme_mode = self.state.theme_mode.toggled();
                // Background and marker colors are baked into the geometry.
                self.state.map.canvas.clear();
                tracing::info!(theme = %self.state.theme_mode, "Theme changed");
                Task::none()
            }

            // =================================================================
            // View-specific messages
            // =================================================================
            Message::Home(home_msg) => HomeHandler.handle(&mut self.state, home_msg),

            Message::Map(map_msg) => MapHandler.handle(&mut self.state, map_msg),

            // =================================================================
            // External handlers
            // =================================================================
            Message::Dial(phone) => {
                open_logged(&phone.tel_uri());
                Task::none()
            }

            Message::OpenUrl(url) => {
                open_logged(&url);
                Task::none()
            }

            // =================================================================
            // System events
            // =================================================================
            Message::AnimationFrame(now) => {
                self.state.tick(now);
                Task::none()
            }

            Message::WindowResized(size) => {
                self.state.resize(size);
                if self.state.view.is_map() {
                    request_visible_tiles(&mut self.state.map)
                } else {
                    Task::none()
                }
            }

            // =================================================================
            // Background task results
            // =================================================================
            Message::AnalyticsSent(result) => {
                match result {
                    Ok(()) => tracing::debug!("Analytics beacon delivered"),
                    Err(err) => tracing::warn!(error = %err, "Analytics beacon dropped"),
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view_app(&self.state)
    }

    pub fn title(&self) -> String {
        format!("{} - {}", self.state.view.label(), APP_NAME)
    }

    pub fn theme(&self) -> Theme {
        campus_theme(self.state.theme_mode)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{HomeMessage, MapMessage};
    use crate::state::PanelId;
    use crate::theme::ThemeMode;

    fn offline_app() -> App {
        let mut settings = Settings::default();
        settings.analytics.enabled = false;
        App {
            state: AppState::new(settings),
        }
    }

    #[test]
    fn test_navigate_closes_drawer() {
        let mut app = offline_app();
        let _ = app.update(Message::ToggleSidebar);
        assert!(app.state.sidebar_open);

        let _ = app.update(Message::Navigate(View::Thanks));
        assert_eq!(app.state.view, View::Thanks);
        assert!(!app.state.sidebar_open);
    }

    #[test]
    fn test_title_follows_view() {
        let mut app = offline_app();
        assert_eq!(app.title(), "Home - Campus Essentials");
        let _ = app.update(Message::Navigate(View::MessMenu));
        assert_eq!(app.title(), "Mess Menu - Campus Essentials");
    }

    #[test]
    fn test_toggle_theme() {
        let mut app = offline_app();
        let before = app.state.theme_mode;
        let _ = app.update(Message::ToggleTheme);
        assert_eq!(app.state.theme_mode, before.toggled());
        assert_eq!(
            app.theme().extended_palette().is_dark,
            app.state.theme_mode == ThemeMode::Dark
        );
    }

    #[test]
    fn test_toggle_panel_starts_animation() {
        let mut app = offline_app();
        let _ = app.update(Message::Home(HomeMessage::TogglePanel(PanelId::Outlets)));
        assert!(app.state.panels.is_open(PanelId::Outlets));
        assert!(app.state.is_animating());
    }

    #[test]
    fn test_opening_menu_refreshes_weekday() {
        let mut app = offline_app();
        let stale = app.state.today.pred();
        app.state.today = stale;
        let _ = app.update(Message::Navigate(View::MessMenu));
        assert_ne!(app.state.today, stale);
    }

    #[test]
    fn test_reported_window_size_resizes_map() {
        let mut app = offline_app();
        let _ = app.update(Message::WindowResized(iced::Size::new(520.0, 700.0)));
        assert_eq!(app.state.window_size.width, 520.0);
        assert_eq!(app.state.map.viewport.size().0, app.state.card_inner_width());
    }

    #[test]
    fn test_unknown_location_keeps_selection() {
        let mut app = offline_app();
        let before = app.state.picker.selected().id;
        let _ = app.update(Message::Map(MapMessage::SelectLocation("nowhere")));
        assert_eq!(app.state.picker.selected().id, before);
    }
}
