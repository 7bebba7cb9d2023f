//! Services for side effects.
//!
//! Network work goes through Iced's `Task::perform` pattern and reports back
//! as a message. Opening links is synchronous and only logged.

pub mod analytics;
pub mod links;
pub mod tiles;

pub use analytics::{page_view_url, send_page_view};
pub use links::{open_external, open_logged};
pub use tiles::{apply_loaded_tile, request_visible_tiles};
