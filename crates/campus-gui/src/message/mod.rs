//! Message module for Campus Essentials.
//!
//! This module defines the message hierarchy for the Elm-style architecture.
//! All user interactions and events flow through these message types.

pub mod home;
pub mod map;

use std::time::Instant;

use iced::Size;

use campus_model::PhoneNumber;

use crate::error::GuiError;
use crate::state::View;

pub use home::HomeMessage;
pub use map::MapMessage;

/// Root message enum for the application.
///
/// All user interactions and system events are represented as variants
/// of this enum. The `update` function processes these messages to
/// modify application state.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// Navigate to a different page (also closes the drawer)
    Navigate(View),

    /// Menu button in the header
    ToggleSidebar,

    /// Drawer close button or backdrop click
    CloseSidebar,

    /// Header theme toggle
    ToggleTheme,

    // =========================================================================
    // View-specific messages
    // =========================================================================
    /// Home page messages
    Home(HomeMessage),

    /// Map page messages
    Map(MapMessage),

    // =========================================================================
    // External handlers
    // =========================================================================
    /// Open a `tel:` link for a phone number
    Dial(PhoneNumber),

    /// Open a URL in the browser
    OpenUrl(String),

    // =========================================================================
    // System events
    // =========================================================================
    /// Window frame while a panel is animating
    AnimationFrame(Instant),

    /// Main window resized
    WindowResized(Size),

    // =========================================================================
    // Background task results
    // =========================================================================
    /// Startup analytics beacon finished
    AnalyticsSent(Result<(), GuiError>),
}
