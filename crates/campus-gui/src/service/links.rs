//! Opening URLs and `tel:` links with the platform handler.

use crate::error::GuiError;

/// Open `target` (a URL or `tel:` URI) with the platform handler.
pub fn open_external(target: &str) -> Result<(), GuiError> {
    open::that(target).map_err(|e| GuiError::link_open(target, e.to_string()))
}

/// Open `target`, logging instead of returning failures.
pub fn open_logged(target: &str) {
    match open_external(target) {
        Ok(()) => tracing::info!(target, "Opened external link"),
        Err(err) => tracing::warn!(error = %err, "Failed to open external link"),
    }
}
