//! Campus Essentials - GUI Library
//!
//! This module provides the core application types and modules for the
//! Campus Essentials desktop application.
//!
//! Built with Iced 0.14.0 using the Elm architecture.

pub mod app;
pub mod component;
pub mod error;
pub mod handler;
pub mod message;
pub mod service;
pub mod state;
pub mod theme;
pub mod view;

pub use app::App;
pub use error::GuiError;
