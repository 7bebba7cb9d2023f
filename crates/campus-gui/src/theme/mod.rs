//! Theme module for Campus Essentials.
//!
//! The active [`ThemeMode`] is part of `AppState`. `App::theme` turns it
//! into an Iced [`Theme`], and widgets read colors from the `&Theme` their
//! style closures receive (see [`CampusColors`]). There is no global theme
//! flag.
//!
//! - Light/dark palettes (`palette`)
//! - App-specific colors (`colors`)
//! - Spacing constants (`spacing`)
//! - Widget styles (`styles`)

pub mod colors;
pub mod palette;
pub mod spacing;
pub mod styles;

pub use colors::{CampusColorSet, CampusColors};
pub use palette::{ThemeMode, campus_palette};

pub use spacing::{
    BORDER_RADIUS_FULL, BORDER_RADIUS_LG, BORDER_RADIUS_MD, BORDER_WIDTH_ACCENT,
    BORDER_WIDTH_THIN, HEADER_HEIGHT, ICON_SIZE_LG, ICON_SIZE_MD, ICON_SIZE_SM, MAP_HEIGHT,
    MAX_CONTENT_WIDTH, SIDEBAR_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XS,
    TEXT_SIZE_BODY, TEXT_SIZE_HEADING, TEXT_SIZE_SM, TEXT_SIZE_TITLE,
};

pub use styles::{
    button_ghost, button_on_header, button_primary, container_backdrop, container_card,
    container_header, container_inset, tinted_box,
};

use iced::Theme;

/// Creates the campus theme for a mode.
pub fn campus_theme(mode: ThemeMode) -> Theme {
    Theme::custom(format!("Campus {}", mode.label()), campus_palette(mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_darkness_follows_mode() {
        assert!(campus_theme(ThemeMode::Dark).extended_palette().is_dark);
        assert!(!campus_theme(ThemeMode::Light).extended_palette().is_dark);
    }
}
