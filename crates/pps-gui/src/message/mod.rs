//! Message types for the Iced update loop.
//!
//! Top-level [`Message`] variants either act on the shell directly or wrap a
//! view-specific message routed to a handler.

mod practice;

pub use practice::PracticeMessage;

use crate::state::View;

/// Root application message.
#[derive(Debug, Clone)]
pub enum Message {
    /// Sidebar or quick-access navigation.
    Navigate(View),

    /// Practice view messages.
    Practice(PracticeMessage),

    /// Close the warning banner.
    DismissError,
}
