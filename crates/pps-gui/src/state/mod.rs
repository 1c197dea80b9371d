//! Application state.
//!
//! - [`AppState`]: root state holding content, navigation and the mounted
//!   practice session
//! - [`NavigationState`] / [`View`]: which screen is active
//! - [`Settings`]: persisted preferences

mod app_state;
mod navigation;
mod settings;

pub use app_state::AppState;
pub use navigation::{NavigationState, View};
pub use settings::{ContentSettings, DisplaySettings, Settings};
