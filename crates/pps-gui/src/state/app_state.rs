//! Root application state.

use std::path::PathBuf;
use std::sync::Arc;

use iced::widget::text_editor;
use pps_model::{ContentCatalog, ExerciseStep};
use pps_practice::{FeedbackScorer, PracticeSession};
use tracing::{info, warn};

use super::navigation::{NavigationState, View};
use super::settings::Settings;
use crate::error::GuiError;

/// Everything the application renders from.
///
/// The practice session only exists while [`View::Practice`] is active.
pub struct AppState {
    /// Active view.
    pub navigation: NavigationState,

    /// Loaded content.
    pub catalog: ContentCatalog,

    /// Exercise steps shared with every new practice session.
    steps: Arc<[ExerciseStep]>,

    /// Session for the mounted practice view.
    pub practice: Option<PracticeSession>,

    /// Editor buffer behind the session's draft text.
    pub draft_editor: text_editor::Content,

    /// User preferences.
    pub settings: Settings,

    /// Where settings are written; `None` disables saving.
    pub settings_path: Option<PathBuf>,

    /// Warning shown as a banner until dismissed.
    pub error: Option<GuiError>,
}

impl AppState {
    /// Build state from an already loaded catalog.
    pub fn new(catalog: ContentCatalog, settings: Settings) -> Self {
        let steps: Arc<[ExerciseStep]> = catalog.steps.clone().into();
        let start_view = settings.display.start_view;

        let mut state = Self {
            navigation: NavigationState::new(start_view),
            catalog,
            steps,
            practice: None,
            draft_editor: text_editor::Content::new(),
            settings,
            settings_path: None,
            error: None,
        };
        if start_view == View::Practice {
            state.practice = state.start_session();
        }
        state
    }

    /// Load the catalog named by `settings`, falling back to the embedded
    /// content with a warning banner when it cannot be read.
    pub fn with_settings(settings: Settings) -> Self {
        let path = settings.content.catalog_path.clone();
        let (catalog, error) = match pps_content::load(path.as_deref()) {
            Ok(catalog) => (catalog, None),
            Err(err) => {
                warn!(error = %err, "falling back to embedded content");
                let catalog = pps_content::load_embedded().unwrap_or_else(|embedded| {
                    warn!(error = %embedded, "embedded content is unusable");
                    ContentCatalog::default()
                });
                (catalog, Some(GuiError::content_load(err)))
            }
        };

        let mut state = Self::new(catalog, settings);
        state.error = error;
        state
    }

    /// Enable saving settings to `path`.
    pub fn with_settings_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_path = Some(path.into());
        self
    }

    /// Switch views, mounting or dropping the practice session.
    ///
    /// Returns `false` without touching any state when `view` is already
    /// active.
    pub fn navigate(&mut self, view: View) -> bool {
        let leaving = self.navigation.active_view();
        if !self.navigation.select_view(view) {
            return false;
        }
        info!(from = ?leaving, to = ?view, "navigated");

        if leaving == View::Practice {
            self.practice = None;
        }
        if view == View::Practice {
            self.practice = self.start_session();
            self.draft_editor = text_editor::Content::new();
        }
        self.remember_view(view);
        true
    }

    /// Hide the warning banner.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Apply an editor action and mirror edits into the session draft.
    ///
    /// Trailing line breaks are not part of the draft.
    pub fn edit_draft(&mut self, action: text_editor::Action) {
        let Some(session) = self.practice.as_mut() else {
            return;
        };
        let is_edit = action.is_edit();
        self.draft_editor.perform(action);
        if is_edit {
            session.edit_draft(self.draft_editor.text().trim_end_matches(['\r', '\n']));
        }
    }

    /// Move the session to its next step with an empty editor.
    pub fn advance_step(&mut self) -> bool {
        let advanced = self.practice.as_mut().is_some_and(PracticeSession::advance);
        if advanced {
            self.draft_editor = text_editor::Content::new();
        }
        advanced
    }

    /// Title of the module the learner is currently on.
    pub fn current_module(&self) -> &str {
        &self.catalog.dashboard.progress.current_module
    }

    fn start_session(&self) -> Option<PracticeSession> {
        let scorer = FeedbackScorer::new(self.catalog.scoring.clone());
        match PracticeSession::new(Arc::clone(&self.steps), scorer) {
            Ok(session) => Some(session),
            Err(err) => {
                warn!(error = %err, "practice view has nothing to show");
                None
            }
        }
    }

    fn remember_view(&mut self, view: View) {
        if !self.settings.display.remember_last_view {
            return;
        }
        self.settings.display.start_view = view;
        if let Some(path) = &self.settings_path
            && let Err(err) = self.settings.save_to(path)
        {
            warn!(error = %err, "settings not saved");
            self.error = Some(err);
        }
    }
}
