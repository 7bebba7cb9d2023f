//! Campus color extension trait for app-specific colors.
//!
//! Provides an extension trait `CampusColors` that adds app-specific color
//! methods to Iced's `Theme`. These are colors not covered by Iced's
//! built-in `ExtendedPalette`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::theme::CampusColors;
//!
//! // In a style closure that receives &Theme:
//! .style(|theme: &Theme| {
//!     let campus = theme.campus();
//!     container::Style {
//!         background: Some(campus.surface.into()),
//!         ..Default::default()
//!     }
//! })
//! ```

use iced::{Color, Theme};

// =============================================================================
// CAMPUS COLOR SET
// =============================================================================

/// App-specific colors derived from the active palette.
#[derive(Debug, Clone, Copy)]
pub struct CampusColorSet {
    // === Surfaces ===
    /// Card and panel background
    pub surface: Color,
    /// Panel header band
    pub surface_header: Color,
    /// Hovered row or card
    pub surface_hover: Color,
    /// Header bar background
    pub header_bar: Color,

    // === Text ===
    /// Secondary text color
    pub text_secondary: Color,
    /// Muted text (hints, captions)
    pub text_muted: Color,
    /// Text on accent color backgrounds
    pub text_on_accent: Color,

    // === Accents ===
    /// Light tint of the primary color (selected nav item, chips)
    pub accent_light: Color,
    /// Accent hover color
    pub accent_hover: Color,
    /// Link and phone-number color
    pub link: Color,

    // === Sections ===
    /// Green tinted box (mess timings, departures from campus)
    pub section_green: Color,
    /// Green box border and heading
    pub section_green_strong: Color,
    /// Blue tinted box (phone contacts, departures from city)
    pub section_blue: Color,
    /// Blue box border and heading
    pub section_blue_strong: Color,
    /// Amber tinted box (important notes)
    pub section_amber: Color,
    /// Amber box border and heading
    pub section_amber_strong: Color,
    /// Row highlight for today in the weekly menu
    pub highlight_today: Color,

    // === Borders & overlays ===
    pub border: Color,
    pub shadow: Color,
    /// Drawer backdrop
    pub backdrop: Color,
}

// =============================================================================
// EXTENSION TRAIT
// =============================================================================

/// Extension trait for campus-specific colors.
///
/// Use it inside style closures that receive a `&Theme`.
pub trait CampusColors {
    /// Get the campus color set for this theme.
    fn campus(&self) -> CampusColorSet;
}

impl CampusColors for Theme {
    fn campus(&self) -> CampusColorSet {
        let palette = self.extended_palette();
        let is_dark = palette.is_dark;
        let pick = |light: Color, dark: Color| if is_dark { dark } else { light };

        CampusColorSet {
            surface: pick(Color::WHITE, Color::from_rgb(0.07, 0.09, 0.15)),
            surface_header: pick(
                Color::from_rgb(0.94, 0.96, 1.0),
                Color::from_rgb(0.12, 0.16, 0.22),
            ),
            surface_hover: pick(
                Color::from_rgb(0.95, 0.96, 0.97),
                Color::from_rgb(0.22, 0.25, 0.32),
            ),
            header_bar: pick(BLUE_600, Color::from_rgb(0.12, 0.16, 0.22)),

            text_secondary: pick(
                Color::from_rgb(0.29, 0.33, 0.39),
                Color::from_rgb(0.82, 0.84, 0.86),
            ),
            text_muted: pick(
                Color::from_rgb(0.42, 0.45, 0.50),
                Color::from_rgb(0.61, 0.64, 0.69),
            ),
            text_on_accent: Color::WHITE,

            accent_light: Color {
                a: if is_dark { 0.20 } else { 0.12 },
                ..palette.primary.base.color
            },
            accent_hover: palette.primary.strong.color,
            link: pick(BLUE_600, Color::from_rgb(0.38, 0.65, 0.98)),

            section_green: pick(
                Color::from_rgb(0.94, 0.99, 0.96),
                Color::from_rgb(0.08, 0.33, 0.18),
            ),
            section_green_strong: pick(
                Color::from_rgb(0.09, 0.40, 0.20),
                Color::from_rgb(0.53, 0.94, 0.67),
            ),
            section_blue: pick(
                Color::from_rgb(0.94, 0.96, 1.0),
                Color::from_rgb(0.12, 0.23, 0.54),
            ),
            section_blue_strong: pick(
                Color::from_rgb(0.12, 0.25, 0.69),
                Color::from_rgb(0.58, 0.77, 0.99),
            ),
            section_amber: pick(
                Color::from_rgb(1.0, 0.98, 0.92),
                Color::from_rgb(0.44, 0.25, 0.07),
            ),
            section_amber_strong: pick(
                Color::from_rgb(0.52, 0.30, 0.05),
                Color::from_rgb(0.99, 0.88, 0.28),
            ),
            highlight_today: Color {
                a: 0.25,
                ..palette.warning.base.color
            },

            border: pick(
                Color::from_rgb(0.82, 0.84, 0.86),
                Color::from_rgb(0.29, 0.33, 0.39),
            ),
            shadow: Color::from_rgba(0.0, 0.0, 0.0, if is_dark { 0.35 } else { 0.10 }),
            backdrop: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
        }
    }
}

const BLUE_600: Color = Color::from_rgb(0.15, 0.39, 0.92);
