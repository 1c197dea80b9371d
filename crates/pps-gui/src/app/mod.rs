//! Main application module for Prompt Practice Studio.
//!
//! Implements the Iced 0.14.0 application using the builder pattern.
//! The architecture follows the Elm pattern: State → Message → Update → View.
//!
//! - **All state changes happen in `update()`** - views are pure functions
//! - Every transition completes synchronously; no task is ever spawned

use iced::{Element, Task, Theme};
use tracing::info;

use crate::handler::{MessageHandler, PracticeHandler};
use crate::message::Message;
use crate::state::{AppState, Settings};
use crate::theme::studio_theme;
use crate::view::view_shell;

/// Fallback window title when the catalog has none.
const DEFAULT_TITLE: &str = "Prompt Practice Studio";

// =============================================================================
// APPLICATION
// =============================================================================

/// Main application struct.
///
/// This is the root of the Iced application. It holds the application state
/// and implements the Elm architecture methods.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    ///
    /// Called once at startup. Loads settings and content from disk.
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let state = AppState::with_settings(settings).with_settings_path(Settings::config_path());
        info!(
            steps = state.catalog.steps.len(),
            view = ?state.navigation.active_view(),
            "application ready"
        );
        (Self { state }, Task::none())
    }

    /// Wrap an existing state.
    pub fn from_state(state: AppState) -> Self {
        Self { state }
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(view) => {
                self.state.navigate(view);
                Task::none()
            }

            Message::Practice(practice_msg) => {
                PracticeHandler.handle(&mut self.state, practice_msg)
            }

            Message::DismissError => {
                self.state.dismiss_error();
                Task::none()
            }
        }
    }

    /// Render the current state.
    pub fn view(&self) -> Element<'_, Message> {
        view_shell(&self.state)
    }

    /// Window title.
    pub fn title(&self) -> String {
        if self.state.catalog.title.is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            self.state.catalog.title.clone()
        }
    }

    /// Application theme.
    pub fn theme(&self) -> Theme {
        studio_theme()
    }
}
