//! View functions.
//!
//! Views are pure functions of state returning an `Element<Message>`. All
//! state changes happen in `App::update()`.

mod dashboard;
mod placeholder;
mod practice;
mod shell;

pub use dashboard::view_dashboard;
pub use placeholder::view_placeholder;
pub use practice::view_practice;
pub use shell::view_shell;
