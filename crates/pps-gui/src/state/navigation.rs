//! Navigation state types.
//!
//! - `View`: the screen shown in the main content area
//! - `NavigationState`: the shell's record of the active view

use serde::{Deserialize, Serialize};

// =============================================================================
// VIEW ENUM
// =============================================================================

/// Top-level screen selectable from the sidebar.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Progress overview
    #[default]
    Dashboard,
    /// Lessons (placeholder)
    Learn,
    /// Prompt writing practice
    Practice,
    /// Achievements (placeholder)
    Achievements,
}

impl View {
    /// Every view in sidebar order.
    pub const ALL: [View; 4] = [
        View::Dashboard,
        View::Learn,
        View::Practice,
        View::Achievements,
    ];

    /// Sidebar label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "대시보드",
            Self::Learn => "학습하기",
            Self::Practice => "실습하기",
            Self::Achievements => "업적",
        }
    }

    /// Position in [`View::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Self::Dashboard => 0,
            Self::Learn => 1,
            Self::Practice => 2,
            Self::Achievements => 3,
        }
    }
}

// =============================================================================
// NAVIGATION STATE
// =============================================================================

/// The active view, owned by the shell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    active_view: View,
}

impl NavigationState {
    /// Start on `view`.
    pub fn new(view: View) -> Self {
        Self { active_view: view }
    }

    /// Currently active view.
    pub fn active_view(&self) -> View {
        self.active_view
    }

    /// Make `view` active.
    ///
    /// Returns `true` if the active view changed. Selecting the view that is
    /// already active is a no-op.
    pub fn select_view(&mut self, view: View) -> bool {
        if self.active_view == view {
            return false;
        }
        self.active_view = view;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_view_changes_active() {
        let mut nav = NavigationState::default();
        assert_eq!(nav.active_view(), View::Dashboard);

        assert!(nav.select_view(View::Practice));
        assert_eq!(nav.active_view(), View::Practice);
    }

    #[test]
    fn test_select_same_view_is_noop() {
        let mut nav = NavigationState::new(View::Learn);
        assert!(!nav.select_view(View::Learn));
        assert!(!nav.select_view(View::Learn));
        assert_eq!(nav.active_view(), View::Learn);
    }

    #[test]
    fn test_view_order_matches_index() {
        for (i, view) in View::ALL.iter().enumerate() {
            assert_eq!(view.index(), i);
        }
    }

    #[test]
    fn test_view_serde_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            view: View,
        }
        let parsed: Wrapper = toml::from_str("view = \"practice\"").unwrap();
        assert_eq!(parsed.view, View::Practice);
    }
}
