//! Application state management.
//!
//! All runtime state lives under [`AppState`]:
//!
//! - **Disclosure**: Open/closed state with an animated height
//! - **PanelSet**: One disclosure per home-page panel
//! - **LocationPicker**: The selected campus location
//! - **MapState**: Viewport, tile cache and canvas cache
//! - **Settings**: Preferences read at startup

mod app_state;
pub mod disclosure;
mod map_state;
mod navigation;
mod panel;
mod picker;
mod settings;

// App state
pub use app_state::{AppState, DEFAULT_WINDOW_SIZE};
pub use navigation::View;

// Disclosure panels
pub use disclosure::{Disclosure, Easing, Measure, PanelHeight};
pub use panel::{PanelId, PanelSet};

// Map
pub use map_state::MapState;
pub use picker::{LocationPicker, Selection};

// Settings
pub use settings::{
    AnalyticsSettings, AnimationSettings, AppearanceSettings, AssetSettings, MapSettings, Settings,
};
