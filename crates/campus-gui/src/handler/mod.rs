//! Message handler architecture.
//!
//! Message handling is split out of the main `App` struct by feature. Each
//! handler implements [`MessageHandler`] for one message type:
//!
//! ```ignore
//! pub struct HomeHandler;
//!
//! impl MessageHandler<HomeMessage> for HomeHandler {
//!     fn handle(&self, state: &mut AppState, msg: HomeMessage) -> Task<Message> {
//!         match msg {
//!             HomeMessage::TogglePanel(id) => { /* ... */ }
//!         }
//!     }
//! }
//! ```
//!
//! The main `App::update()` dispatches to the appropriate handler:
//!
//! ```ignore
//! pub fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Home(msg) => HomeHandler.handle(&mut self.state, msg),
//!         Message::Map(msg) => MapHandler.handle(&mut self.state, msg),
//!         // ...
//!     }
//! }
//! ```

mod home;
mod map;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use home::HomeHandler;
pub use map::MapHandler;

/// Trait for handling messages in the Iced architecture.
///
/// Each handler is responsible for a specific message type and can access
/// the full application state.
///
/// # Type Parameters
///
/// * `M` - The message type this handler processes
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a follow-up task.
    ///
    /// # Returns
    ///
    /// A `Task<Message>` for any async follow-up work, or `Task::none()` if complete.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
