//! Light and dark palettes.

use iced::Color;
use iced::theme::Palette;
use serde::{Deserialize, Serialize};

/// Theme mode for light/dark appearance.
///
/// This is plain application state. It reaches widgets only through the
/// `Theme` returned by `App::theme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Label of the header toggle, which names the mode it switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Self::Light => "Dark Mode",
            Self::Dark => "Light Mode",
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Campus blue (light mode primary)
const BLUE_600: Color = Color::from_rgb(0.15, 0.39, 0.92);
/// Sunset orange (dark mode primary)
const ORANGE_400: Color = Color::from_rgb(0.98, 0.57, 0.24);

/// Palette for a mode.
pub fn campus_palette(mode: ThemeMode) -> Palette {
    match mode {
        ThemeMode::Light => Palette {
            background: Color::from_rgb(0.97, 0.98, 1.0),
            text: Color::from_rgb(0.07, 0.09, 0.15),
            primary: BLUE_600,
            success: Color::from_rgb(0.09, 0.50, 0.24),
            warning: Color::from_rgb(0.79, 0.54, 0.02),
            danger: Color::from_rgb(0.86, 0.15, 0.15),
        },
        ThemeMode::Dark => Palette {
            background: Color::from_rgb(0.03, 0.04, 0.07),
            text: Color::from_rgb(0.95, 0.96, 0.98),
            primary: ORANGE_400,
            success: Color::from_rgb(0.29, 0.87, 0.50),
            warning: Color::from_rgb(0.98, 0.80, 0.08),
            danger: Color::from_rgb(0.97, 0.44, 0.44),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }

    #[test]
    fn test_default_is_dark() {
        assert!(ThemeMode::default().is_dark());
        assert_eq!(ThemeMode::default().toggle_label(), "Light Mode");
    }
}
