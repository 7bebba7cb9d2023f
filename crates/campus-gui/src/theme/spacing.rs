//! Spacing constants for consistent layout throughout the application.
//!
//! All spacing values are in pixels (f32) and follow a consistent scale.

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, major gaps
pub const SPACING_LG: f32 = 24.0;

/// Extra large spacing - page margins, large separations
pub const SPACING_XL: f32 = 32.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================

/// Medium radius - cards, list rows
pub const BORDER_RADIUS_MD: f32 = 8.0;

/// Large radius - panels
pub const BORDER_RADIUS_LG: f32 = 12.0;

/// Full/pill radius - route badges
pub const BORDER_RADIUS_FULL: f32 = 9999.0;

// =============================================================================
// BORDER WIDTHS
// =============================================================================

/// Thin border - subtle separators
pub const BORDER_WIDTH_THIN: f32 = 1.0;

/// Accent border on the leading edge of schedule entries
pub const BORDER_WIDTH_ACCENT: f32 = 4.0;

// =============================================================================
// COMPONENT SIZES
// =============================================================================

/// Icon size - small (inline with text)
pub const ICON_SIZE_SM: f32 = 16.0;

/// Icon size - medium (navigation items)
pub const ICON_SIZE_MD: f32 = 20.0;

/// Icon size - large (panel headers)
pub const ICON_SIZE_LG: f32 = 24.0;

/// Body text size
pub const TEXT_SIZE_BODY: f32 = 14.0;

/// Small text size (hints, chip captions)
pub const TEXT_SIZE_SM: f32 = 12.0;

/// Panel and card title size
pub const TEXT_SIZE_TITLE: f32 = 20.0;

/// Page heading size
pub const TEXT_SIZE_HEADING: f32 = 24.0;

// =============================================================================
// LAYOUT WIDTHS
// =============================================================================

/// Width of the navigation drawer
pub const SIDEBAR_WIDTH: f32 = 320.0;

/// Maximum width of the page content column
pub const MAX_CONTENT_WIDTH: f32 = 896.0;

/// Height of the header bar
pub const HEADER_HEIGHT: f32 = 72.0;

/// Height of the map viewport
pub const MAP_HEIGHT: f32 = 400.0;
