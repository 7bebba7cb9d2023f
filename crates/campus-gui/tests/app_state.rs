//! Scenario tests for panels, the location picker and the map viewport.

use std::time::{Duration, Instant};

use campus_gui::App;
use campus_gui::message::{HomeMessage, MapMessage, Message};
use campus_gui::state::{AnimationSettings, AppState, PanelHeight, PanelId, Settings, View};
use campus_model::LOCATIONS;
use proptest::prelude::*;

fn offline_settings() -> Settings {
    let mut settings = Settings::default();
    settings.analytics.enabled = false;
    settings
}

fn instant_animation() -> AnimationSettings {
    AnimationSettings {
        duration_ms: 0,
        ..Default::default()
    }
}

#[test]
fn startup_shows_home_with_only_mess_timings_open() {
    let state = AppState::new(offline_settings());
    assert_eq!(state.view, View::Home);
    assert!(!state.sidebar_open);

    let open: Vec<_> = state.panels.open_panels().collect();
    assert_eq!(open, vec![PanelId::MessTimings]);
    assert_eq!(
        state.panels.height_at(PanelId::MessTimings, Instant::now()),
        PanelHeight::Auto
    );
    assert_eq!(state.picker.selected().id, LOCATIONS[0].id);
}

#[test]
fn selecting_library_recenters_the_map() {
    let mut state = AppState::new(offline_settings());
    let before = state.map.viewport.center();

    assert!(state.select_location("lib"));

    let library = state.picker.selected();
    assert_eq!(library.name, "Library");
    assert_eq!(state.map.viewport.center(), library.point());
    assert_ne!(state.map.viewport.center(), before);
    assert!(
        state
            .picker
            .external_url()
            .ends_with(&format!("query={},{}", library.latitude, library.longitude))
    );
}

#[test]
fn reselecting_is_a_no_op() {
    let mut state = AppState::new(offline_settings());
    assert!(state.select_location("lib"));
    assert!(!state.select_location("lib"));
    assert_eq!(state.picker.selected().id, "lib");
}

#[test]
fn map_keeps_zoom_across_selections() {
    let mut state = AppState::new(offline_settings());
    let zoom = state.map.viewport.zoom();
    for record in LOCATIONS {
        state.select_location(record.id);
        assert_eq!(state.map.viewport.zoom(), zoom);
        assert_eq!(state.map.viewport.center(), record.point());
    }
}

#[test]
fn menu_photo_survives_outer_toggle() {
    let mut state = AppState::new(offline_settings());
    let now = Instant::now();
    let animation = instant_animation();

    state
        .panels
        .toggle(PanelId::MenuPhoto, 360.0, now, &animation);
    assert!(state.panels.is_open(PanelId::MenuPhoto));

    state
        .panels
        .toggle(PanelId::MessTimings, 600.0, now, &animation);
    assert!(!state.panels.is_open(PanelId::MessTimings));
    assert!(state.panels.is_open(PanelId::MenuPhoto));

    state
        .panels
        .toggle(PanelId::MessTimings, 600.0, now, &animation);
    assert!(state.panels.is_open(PanelId::MessTimings));
    assert!(state.panels.is_open(PanelId::MenuPhoto));
}

#[test]
fn toggling_one_panel_leaves_the_others() {
    let mut app = App {
        state: AppState::new(offline_settings()),
    };

    let _ = app.update(Message::Home(HomeMessage::TogglePanel(PanelId::Wardens)));

    for id in PanelId::ALL {
        let expected = matches!(id, PanelId::MessTimings | PanelId::Wardens);
        assert_eq!(app.state.panels.is_open(id), expected, "{id:?}");
    }
}

#[test]
fn opening_panel_animates_until_duration_elapses() {
    let mut app = App {
        state: AppState::new(offline_settings()),
    };
    let duration = app.state.settings.animation.duration();

    let _ = app.update(Message::Home(HomeMessage::TogglePanel(PanelId::Bus212)));
    assert!(app.state.is_animating());

    let later = Instant::now() + duration + Duration::from_millis(50);
    let _ = app.update(Message::AnimationFrame(later));
    assert!(!app.state.is_animating());
    assert_eq!(
        app.state.panels.height_at(PanelId::Bus212, later),
        PanelHeight::Auto
    );
}

#[test]
fn unknown_location_changes_nothing() {
    let mut app = App {
        state: AppState::new(offline_settings()),
    };
    let center = app.state.map.viewport.center();

    let _ = app.update(Message::Map(MapMessage::SelectLocation("nowhere")));

    assert_eq!(app.state.picker.selected().id, LOCATIONS[0].id);
    assert_eq!(app.state.map.viewport.center(), center);
}

#[test]
fn dragging_and_zooming_then_selecting_resets_the_view() {
    let mut app = App {
        state: AppState::new(offline_settings()),
    };
    let zoom = app.state.map.viewport.zoom();

    let _ = app.update(Message::Map(MapMessage::Pan { dx: 80.0, dy: -40.0 }));
    let _ = app.update(Message::Map(MapMessage::Zoom(-2)));
    assert_eq!(app.state.map.viewport.zoom(), zoom - 2);
    assert_ne!(app.state.map.viewport.center(), LOCATIONS[0].point());

    let _ = app.update(Message::Map(MapMessage::SelectLocation("lib")));
    let library = app.state.picker.selected();
    assert_eq!(app.state.map.viewport.center(), library.point());
    assert_eq!(app.state.map.viewport.zoom(), zoom);
}

#[test]
fn zooming_stops_at_the_deepest_level() {
    let mut app = App {
        state: AppState::new(offline_settings()),
    };
    for _ in 0..10 {
        let _ = app.update(Message::Map(MapMessage::Zoom(1)));
    }
    assert_eq!(app.state.map.viewport.zoom(), campus_map::MAX_ZOOM);
    assert!(!app.state.map.viewport.can_zoom_in());
}

#[test]
fn marker_card_toggles_and_closes_on_new_selection() {
    let mut app = App {
        state: AppState::new(offline_settings()),
    };
    assert!(!app.state.map.popup_open);

    let _ = app.update(Message::Map(MapMessage::ToggleMarkerPopup));
    assert!(app.state.map.popup_open);
    let _ = app.update(Message::Map(MapMessage::ToggleMarkerPopup));
    assert!(!app.state.map.popup_open);

    let _ = app.update(Message::Map(MapMessage::ToggleMarkerPopup));
    let _ = app.update(Message::Map(MapMessage::SelectLocation("lib")));
    assert!(!app.state.map.popup_open);

    let _ = app.update(Message::Map(MapMessage::ToggleMarkerPopup));
    let _ = app.update(Message::Map(MapMessage::CloseMarkerPopup));
    assert!(!app.state.map.popup_open);
}

proptest! {
    #[test]
    fn any_selection_recenters_and_links(first in 0..LOCATIONS.len(), second in 0..LOCATIONS.len()) {
        let mut state = AppState::new(offline_settings());
        for index in [first, second, second] {
            let record = &LOCATIONS[index];
            state.select_location(record.id);
            prop_assert_eq!(state.picker.selected().id, record.id);
            prop_assert_eq!(state.map.viewport.center(), record.point());
            let query = format!("query={},{}", record.latitude, record.longitude);
            prop_assert!(state.picker.external_url().ends_with(&query));
        }
    }
}
