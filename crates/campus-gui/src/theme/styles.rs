//! Widget style functions.
//!
//! Style functions receive `&Theme` and use it to access colors:
//!
//! ```rust,ignore
//! use crate::theme::{button_primary, container_card};
//!
//! button(text("Open in Google Maps")).style(button_primary)
//! container(content).style(container_card)
//! ```

use iced::widget::{button, container};
use iced::{Border, Color, Shadow, Theme, Vector};

use super::colors::CampusColors;
use super::spacing::{BORDER_RADIUS_LG, BORDER_RADIUS_MD, BORDER_WIDTH_THIN};

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - main actions (dial, open map).
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let campus = theme.campus();

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => campus.accent_hover,
        _ => palette.primary.base.color,
    };

    button::Style {
        background: Some(background.into()),
        text_color: campus.text_on_accent,
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow {
            color: campus.shadow,
            offset: Vector::new(0.0, 1.0),
            blur_radius: 2.0,
        },
        ..Default::default()
    }
}

/// Ghost button style - transparent until hovered.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let campus = theme.campus();

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(campus.surface_hover.into()),
        _ => None,
    };

    button::Style {
        background,
        text_color: theme.palette().text,
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Header bar button style - white content over the header band.
pub fn button_on_header(theme: &Theme, status: button::Status) -> button::Style {
    let campus = theme.campus();

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Color::from_rgba(1.0, 1.0, 1.0, 0.12).into())
        }
        _ => None,
    };

    button::Style {
        background,
        text_color: campus.text_on_accent,
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Card container style - elevated surface for panels and pages.
pub fn container_card(theme: &Theme) -> container::Style {
    let campus = theme.campus();

    container::Style {
        background: Some(campus.surface.into()),
        border: Border {
            radius: BORDER_RADIUS_LG.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow {
            color: campus.shadow,
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

/// Inset container style - grey box inside a card.
pub fn container_inset(theme: &Theme) -> container::Style {
    let campus = theme.campus();

    container::Style {
        background: Some(campus.surface_hover.into()),
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            width: BORDER_WIDTH_THIN,
            color: campus.border,
        },
        ..Default::default()
    }
}

/// Header bar container style.
pub fn container_header(theme: &Theme) -> container::Style {
    let campus = theme.campus();

    container::Style {
        background: Some(campus.header_bar.into()),
        text_color: Some(campus.text_on_accent),
        shadow: Shadow {
            color: campus.shadow,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Full-window backdrop behind the navigation drawer.
pub fn container_backdrop(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.campus().backdrop.into()),
        ..Default::default()
    }
}

/// Tinted box with a matching border.
pub fn tinted_box(background: Color, border: Color) -> container::Style {
    container::Style {
        background: Some(background.into()),
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            width: BORDER_WIDTH_THIN,
            color: Color { a: 0.6, ..border },
        },
        ..Default::default()
    }
}
