//! Message handler architecture.
//!
//! Each handler implements [`MessageHandler`] for one view's message type,
//! keeping that logic out of `App::update()`:
//!
//! ```ignore
//! pub fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Practice(msg) => PracticeHandler.handle(&mut self.state, msg),
//!         // ...
//!     }
//! }
//! ```

mod practice;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use practice::PracticeHandler;

/// Trait for handling messages in the Iced architecture.
///
/// # Type Parameters
///
/// * `M` - The message type this handler processes
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a follow-up task.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
