//! Campus Essentials - Desktop GUI Application
//!
//! Mess timings, contacts, bus schedules and a campus map for BITS Pilani,
//! Hyderabad Campus.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message, Update, View).

use anyhow::Context;
use iced::window;
use tracing_subscriber::EnvFilter;

use campus_gui::App;
use campus_gui::state::{DEFAULT_WINDOW_SIZE, Settings};

/// Application entry point.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting Campus Essentials");

    let settings = Settings::load();

    iced::application(move || App::new(settings.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .font(iced_fonts::LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: DEFAULT_WINDOW_SIZE,
            min_size: Some(iced::Size::new(360.0, 480.0)),
            ..Default::default()
        })
        .run()
        .context("Campus Essentials exited with an error")
}
