//! Application settings - user preferences read at startup.
//!
//! Settings are loaded once from `settings.toml` in the platform config
//! directory. Every section has defaults, so a partial file (or none at all)
//! is fine. Nothing writes the file back.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use campus_map::{DEFAULT_ZOOM, OSM_TILE_URL, TileSource, cache::DEFAULT_CAPACITY};

use crate::error::GuiError;
use crate::theme::ThemeMode;

use super::disclosure::Easing;

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Application settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Theme at startup.
    pub appearance: AppearanceSettings,

    /// Disclosure panel animation.
    pub animation: AnimationSettings,

    /// Map viewport and tile provider.
    pub map: MapSettings,

    /// Startup page-view beacon.
    pub analytics: AnalyticsSettings,

    /// Static asset paths.
    pub assets: AssetSettings,
}

impl Settings {
    /// Load settings from the default path, falling back to defaults.
    pub fn load() -> Self {
        let path = Self::config_path();
        match Self::load_from(&path) {
            Ok(settings) => {
                tracing::debug!(path = %path.display(), "Loaded settings");
                settings
            }
            Err(err) => {
                tracing::warn!(error = %err, "Using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from a specific path.
    ///
    /// A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, GuiError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(GuiError::settings_read(path, err.to_string())),
        };
        Self::parse(&content)
    }

    /// Parse settings from TOML text.
    pub fn parse(content: &str) -> Result<Self, GuiError> {
        toml::from_str(content).map_err(|e| GuiError::settings_parse(e.to_string()))
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("in", "BitsHyderabad", "CampusEssentials")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

// =============================================================================
// SECTIONS
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceSettings {
    pub theme: ThemeMode,
}

/// Disclosure animation timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Transition length in milliseconds. Zero disables the animation.
    pub duration_ms: u64,
    pub easing: Easing,
}

impl AnimationSettings {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            duration_ms: 500,
            easing: Easing::EaseInOut,
        }
    }
}

/// Map viewport settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    /// Zoom level a selected location is shown at.
    pub zoom: u8,
    /// Tile URL template with `{s}`, `{z}`, `{x}`, `{y}` placeholders.
    pub tile_url: String,
    /// Values substituted for `{s}`.
    pub subdomains: Vec<String>,
    /// Maximum number of tiles kept in memory.
    pub cache_capacity: usize,
}

impl MapSettings {
    /// Tile source described by these settings.
    pub fn tile_source(&self) -> TileSource {
        TileSource::new(self.tile_url.clone(), self.subdomains.clone())
    }
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            tile_url: OSM_TILE_URL.to_string(),
            subdomains: vec!["a".into(), "b".into(), "c".into()],
            cache_capacity: DEFAULT_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsSettings {
    pub enabled: bool,
    /// Collector measurement id.
    pub measurement_id: String,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            measurement_id: "G-9EG5HKKXP1".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    /// Photographed weekly menu.
    pub menu_photo: PathBuf,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            menu_photo: PathBuf::from("assets/menu-photo.jpg"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.appearance.theme, ThemeMode::Dark);
        assert_eq!(settings.animation.duration(), Duration::from_millis(500));
        assert_eq!(settings.map.zoom, 18);
        assert_eq!(settings.map.cache_capacity, 256);
        assert!(settings.analytics.enabled);
        assert_eq!(settings.analytics.measurement_id, "G-9EG5HKKXP1");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings = Settings::parse("[appearance]\ntheme = \"light\"\n").unwrap();
        assert_eq!(settings.appearance.theme, ThemeMode::Light);
        assert_eq!(settings.animation, AnimationSettings::default());
        assert_eq!(settings.map, MapSettings::default());
    }

    #[test]
    fn test_round_trip() {
        let mut settings = Settings::default();
        settings.animation.easing = Easing::Linear;
        settings.analytics.enabled = false;
        let text = toml::to_string_pretty(&settings).unwrap();
        assert!(text.contains("easing = \"linear\""));
        assert_eq!(Settings::parse(&text).unwrap(), settings);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = Settings::parse("[animation]\nduration_ms = \"slow\"\n").unwrap_err();
        assert!(matches!(err, GuiError::SettingsParse { .. }));
    }

    #[test]
    fn test_default_tile_source_is_openstreetmap() {
        let source = MapSettings::default().tile_source();
        assert_eq!(source, TileSource::openstreetmap());
    }
}
