//! Section card component.
//!
//! A titled card grouping related content.
//!
//! # Usage
//!
//! ```rust,ignore
//! use iced_fonts::lucide;
//!
//! SectionCard::new("최근 활동", content)
//!     .icon(lucide::hourglass())
//!     .view()
//! ```

use iced::widget::{Space, Text, column, container, row, text};
use iced::{Alignment, Element, Length, Theme};

use crate::theme::{SPACING_LG, SPACING_MD, SPACING_SM, container_card};

/// A titled section card with optional icon.
pub struct SectionCard<'a, M> {
    title: String,
    icon: Option<Text<'a>>,
    content: Element<'a, M>,
}

impl<'a, M: 'a> SectionCard<'a, M> {
    /// Create a new section card with title and content.
    pub fn new(title: impl Into<String>, content: impl Into<Element<'a, M>>) -> Self {
        Self {
            title: title.into(),
            icon: None,
            content: content.into(),
        }
    }

    /// Add an icon to the header.
    pub fn icon(mut self, icon: Text<'a>) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Build the element.
    pub fn view(self) -> Element<'a, M> {
        let Self {
            title,
            icon,
            content,
        } = self;

        let title = text(title).size(18);
        let header: Element<'a, M> = match icon {
            Some(icon) => row![
                icon.size(18).style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().primary.base.color),
                }),
                title,
            ]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center)
            .into(),
            None => title.into(),
        };

        container(column![header, Space::new().height(SPACING_MD), content].width(Length::Fill))
            .padding(SPACING_LG)
            .width(Length::Fill)
            .style(container_card)
            .into()
    }
}
