//! Map page messages.

use campus_map::TileId;

/// Messages for the Map page.
#[derive(Debug, Clone)]
pub enum MapMessage {
    // =========================================================================
    // Location picker
    // =========================================================================
    /// User picked a location button
    SelectLocation(&'static str),

    /// "Open in Google Maps" on the selected location card
    OpenSelected,

    /// Quick-access entry; opens the external map without changing the
    /// selection
    OpenLocation(&'static str),

    // =========================================================================
    // Map input
    // =========================================================================
    /// Drag on the map, in screen pixels
    Pan { dx: f32, dy: f32 },

    /// Wheel or zoom button; positive zooms in
    Zoom(i8),

    /// Click on the marker
    ToggleMarkerPopup,

    /// Click on the map away from the marker, or the card's close button
    CloseMarkerPopup,

    // =========================================================================
    // Tiles
    // =========================================================================
    /// A tile fetch finished
    TileLoaded {
        tile: TileId,
        result: Result<Vec<u8>, String>,
    },
}
