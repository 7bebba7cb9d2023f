//! Home page messages.

use crate::state::PanelId;

/// Messages for the Home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeMessage {
    /// User clicked a panel header
    TogglePanel(PanelId),
}
