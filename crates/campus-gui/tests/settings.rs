//! Settings file loading.

use std::fs;

use campus_gui::GuiError;
use campus_gui::state::{Easing, Settings};
use campus_gui::theme::ThemeMode;

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_from(&dir.path().join("settings.toml")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn partial_file_overrides_only_named_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(
        &path,
        r#"
[appearance]
theme = "light"

[animation]
duration_ms = 250
easing = "linear"

[analytics]
enabled = false
"#,
    )
    .unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.appearance.theme, ThemeMode::Light);
    assert_eq!(settings.animation.duration_ms, 250);
    assert_eq!(settings.animation.easing, Easing::Linear);
    assert!(!settings.analytics.enabled);
    assert_eq!(settings.map, Settings::default().map);
}

#[test]
fn invalid_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "[animation]\nduration_ms = \"slow\"\n").unwrap();

    let err = Settings::load_from(&path).unwrap_err();
    assert!(matches!(err, GuiError::SettingsParse { .. }), "{err}");
}
