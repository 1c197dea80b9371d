//! Progress bar component.
//!
//! Horizontal progress bar with an optional trailing label.
//!
//! # Usage
//!
//! ```rust,ignore
//! ProgressBar::new(0.75).label("75%").view()
//! ```

use iced::widget::{container, progress_bar, row, text};
use iced::{Alignment, Element, Length, Theme};

use crate::theme::{SPACING_SM, StudioColors, progress_bar_primary, progress_bar_success};

/// A horizontal progress bar.
pub struct ProgressBar {
    value: f32,
    girth: f32,
    label: Option<String>,
}

impl ProgressBar {
    /// Create a new progress bar with the given value (0.0 to 1.0).
    pub fn new(value: f32) -> Self {
        Self {
            value: value.clamp(0.0, 1.0),
            girth: 8.0,
            label: None,
        }
    }

    /// Set the thickness of the track.
    pub fn girth(mut self, girth: f32) -> Self {
        self.girth = girth;
        self
    }

    /// Show `label` after the bar.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Build the progress bar element.
    pub fn view<'a, M: 'a>(self) -> Element<'a, M> {
        let style: fn(&Theme) -> progress_bar::Style = if self.value >= 1.0 {
            progress_bar_success
        } else {
            progress_bar_primary
        };
        let bar = progress_bar(0.0..=1.0, self.value)
            .girth(self.girth)
            .style(style);

        match self.label {
            Some(label) => row![
                container(bar).width(Length::Fill),
                text(label).size(12).style(|theme: &Theme| text::Style {
                    color: Some(theme.studio().text_muted),
                }),
            ]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center)
            .into(),
            None => bar.into(),
        }
    }
}
