//! Application subscriptions.
//!
//! This module centralizes all Iced subscriptions for the application.
//!
//! # Subscription Overview
//!
//! | Subscription | Interval | Condition | Purpose |
//! |--------------|----------|-----------|---------|
//! | Animation Frames | Every frame | A panel is animating | Advance panel heights |
//! | Window Resize | Continuous | Always | Re-measure panels, resize the map |
//!
//! # Architecture
//!
//! Subscriptions are batched together in `create_subscription()`. The frame
//! subscription returns `Subscription::none()` once every transition has
//! finished, so an idle window does not redraw.

use iced::Subscription;
use iced::window;

use crate::message::Message;
use crate::state::AppState;

/// Create all application subscriptions.
pub fn create_subscription(state: &AppState) -> Subscription<Message> {
    Subscription::batch([animation_subscription(state), resize_subscription()])
}

/// Window frames while any disclosure panel is moving.
///
/// # Conditional Behavior
/// - Active: When `state.is_animating()`
/// - Inactive: When every panel has settled
fn animation_subscription(state: &AppState) -> Subscription<Message> {
    if state.is_animating() {
        window::frames().map(Message::AnimationFrame)
    } else {
        Subscription::none()
    }
}

/// Main window resize events.
fn resize_subscription() -> Subscription<Message> {
    window::resize_events().map(|(_id, size)| Message::WindowResized(size))
}
