//! GUI-specific error types.
//!
//! Nothing in the application surfaces an error to the user. These errors
//! are logged where they occur and the app carries on: settings fall back to
//! defaults, a link that fails to open is ignored, a dropped analytics beacon
//! is forgotten.

use std::path::Path;

use thiserror::Error;

/// GUI-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    // =========================================================================
    // SETTINGS
    // =========================================================================
    /// The settings file exists but could not be read.
    #[error("Failed to read settings from {path}: {reason}")]
    SettingsRead {
        /// Settings file path.
        path: String,
        /// Description of what went wrong.
        reason: String,
    },

    /// The settings file is not valid TOML for [`Settings`](crate::state::Settings).
    #[error("Invalid settings file: {reason}")]
    SettingsParse {
        /// Parser message.
        reason: String,
    },

    // =========================================================================
    // EXTERNAL HANDLERS
    // =========================================================================
    /// The platform refused to open a URL or `tel:` link.
    #[error("Could not open {target}: {reason}")]
    LinkOpen {
        /// The URL or URI that was opened.
        target: String,
        /// Description of what went wrong.
        reason: String,
    },

    // =========================================================================
    // NETWORK
    // =========================================================================
    /// The analytics beacon could not be delivered.
    #[error("Analytics beacon failed: {reason}")]
    Analytics {
        /// Description of what went wrong.
        reason: String,
    },

    /// An HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {reason}")]
    HttpClient {
        /// Description of what went wrong.
        reason: String,
    },
}

impl GuiError {
    /// Create a settings read error.
    pub fn settings_read(path: &Path, reason: impl Into<String>) -> Self {
        Self::SettingsRead {
            path: path.display().to_string(),
            reason: reason.into(),
        }
    }

    /// Create a settings parse error.
    pub fn settings_parse(reason: impl Into<String>) -> Self {
        Self::SettingsParse {
            reason: reason.into(),
        }
    }

    /// Create a link open error.
    pub fn link_open(target: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::LinkOpen {
            target: target.into(),
            reason: reason.into(),
        }
    }

    /// Create an analytics error.
    pub fn analytics(reason: impl Into<String>) -> Self {
        Self::Analytics {
            reason: reason.into(),
        }
    }
}

impl From<reqwest::Error> for GuiError {
    fn from(err: reqwest::Error) -> Self {
        Self::analytics(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = GuiError::link_open("tel:70133 34805", "no handler");
        assert_eq!(err.to_string(), "Could not open tel:70133 34805: no handler");

        let err = GuiError::settings_read(Path::new("/tmp/settings.toml"), "permission denied");
        assert!(err.to_string().contains("/tmp/settings.toml"));
    }
}
