//! Application-level state.
//!
//! This module contains `AppState` which is the root of all state.

use std::time::Instant;

use chrono::{Datelike, Weekday};
use iced::Size;

use crate::theme::{MAP_HEIGHT, MAX_CONTENT_WIDTH, SPACING_LG, SPACING_MD, ThemeMode};

use super::map_state::MapState;
use super::navigation::View;
use super::panel::PanelSet;
use super::picker::{LocationPicker, Selection};
use super::settings::Settings;

/// Initial window size, assumed until the window reports its real size.
pub const DEFAULT_WINDOW_SIZE: Size = Size::new(1024.0, 768.0);

/// Top-level application state.
///
/// This is the root of all state in the application.
pub struct AppState {
    /// Current page
    pub view: View,
    /// Light or dark
    pub theme_mode: ThemeMode,
    /// Whether the navigation drawer is shown
    pub sidebar_open: bool,
    /// Home-page disclosure panels
    pub panels: PanelSet,
    /// Selected campus location
    pub picker: LocationPicker,
    /// Map viewport and tiles
    pub map: MapState,
    /// Settings read at startup
    pub settings: Settings,
    /// Last known window size
    pub window_size: Size,
    /// Local weekday, used to highlight the menu row. Refreshed when the
    /// menu page is opened.
    pub today: Weekday,
    /// Time the current frame is drawn for
    pub frame: Instant,
}

impl AppState {
    /// Create new app state with loaded settings.
    pub fn new(settings: Settings) -> Self {
        let picker = LocationPicker::new();
        let map = MapState::new(&settings.map, picker.selected().point());

        let mut state = Self {
            view: View::default(),
            theme_mode: settings.appearance.theme,
            sidebar_open: false,
            panels: PanelSet::new(),
            picker,
            map,
            settings,
            window_size: DEFAULT_WINDOW_SIZE,
            today: chrono::Local::now().weekday(),
            frame: Instant::now(),
        };
        state.fit_map();
        state
    }

    /// Width of the centered content column.
    pub fn content_width(&self) -> f32 {
        (self.window_size.width - 2.0 * SPACING_MD).clamp(0.0, MAX_CONTENT_WIDTH)
    }

    /// Width available inside a padded card in the content column.
    pub fn card_inner_width(&self) -> f32 {
        (self.content_width() - 2.0 * SPACING_LG).max(0.0)
    }

    /// Record a new window size and resize the map to match.
    pub fn resize(&mut self, size: Size) {
        self.window_size = size;
        self.fit_map();
    }

    fn fit_map(&mut self) {
        let width = self.card_inner_width();
        self.map.resize(width, MAP_HEIGHT);
    }

    /// Select a location and show it on the map at the configured zoom.
    ///
    /// Picking the current location again brings it back into view after
    /// the map was dragged or zoomed. Returns `true` when the selection or
    /// the view changed. Unknown ids are logged and ignored.
    pub fn select_location(&mut self, id: &str) -> bool {
        let (record, changed) = match self.picker.select(id) {
            Selection::Changed(record) => (record, true),
            Selection::Unchanged => (self.picker.selected(), false),
            Selection::Unknown => return false,
        };
        let moved = self.map.show(record.point());
        changed || moved
    }

    /// Re-read the local weekday.
    pub fn refresh_today(&mut self) {
        self.today = chrono::Local::now().weekday();
    }

    /// Advance all animations to `now`. Returns `true` while any is still
    /// running.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.frame = now;
        self.panels.tick(now)
    }

    pub fn is_animating(&self) -> bool {
        self.panels.is_animating()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_width_is_capped() {
        let mut state = AppState::default();
        state.resize(Size::new(2000.0, 900.0));
        assert_eq!(state.content_width(), MAX_CONTENT_WIDTH);

        state.resize(Size::new(400.0, 900.0));
        assert_eq!(state.content_width(), 400.0 - 2.0 * SPACING_MD);
    }

    #[test]
    fn test_map_follows_window_width() {
        let mut state = AppState::default();
        state.resize(Size::new(600.0, 800.0));
        assert_eq!(
            state.map.viewport.size(),
            (state.card_inner_width(), MAP_HEIGHT)
        );
    }

    #[test]
    fn test_reselect_after_drag_recenters() {
        let mut state = AppState::default();
        let home = state.picker.selected().point();
        let zoom = state.map.viewport.zoom();

        assert!(state.map.pan(200.0, 0.0));
        assert!(state.map.zoom_by(-2));
        assert!(state.select_location(state.picker.selected().id));

        assert_eq!(state.map.viewport.center(), home);
        assert_eq!(state.map.viewport.zoom(), zoom);
        assert!(!state.select_location(state.picker.selected().id));
    }

    #[test]
    fn test_refresh_today_reads_local_weekday() {
        let mut state = AppState::default();
        state.today = state.today.succ();
        state.refresh_today();
        // A midnight rollover between the two reads is tolerated.
        let now = chrono::Local::now().weekday();
        assert!(state.today == now || state.today.succ() == now);
    }

    #[test]
    fn test_theme_comes_from_settings() {
        let mut settings = Settings::default();
        settings.appearance.theme = ThemeMode::Light;
        assert_eq!(AppState::new(settings).theme_mode, ThemeMode::Light);
    }
}
