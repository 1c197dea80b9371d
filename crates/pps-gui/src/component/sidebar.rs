//! Sidebar navigation component.
//!
//! A vertical column of icon + label entries with one highlighted entry.

use iced::widget::{Space, Text, button, column, container, row, text};
use iced::{Alignment, Border, Element, Length, Theme};

use crate::theme::{
    BORDER_RADIUS_SM, SIDEBAR_WIDTH, SPACING_MD, SPACING_SM, SPACING_XS, StudioColors,
    container_sidebar,
};

// =============================================================================
// SIDEBAR ITEM
// =============================================================================

/// A sidebar navigation item.
pub struct SidebarItem<'a, M> {
    /// Leading icon
    pub icon: Text<'a>,
    /// Item label text
    pub label: String,
    /// Message to send when clicked
    pub message: M,
}

impl<'a, M> SidebarItem<'a, M> {
    /// Create a new sidebar item.
    pub fn new(icon: Text<'a>, label: impl Into<String>, message: M) -> Self {
        Self {
            icon,
            label: label.into(),
            message,
        }
    }
}

// =============================================================================
// SIDEBAR COMPONENT
// =============================================================================

/// Creates a vertical sidebar navigation.
///
/// `active_index` selects the highlighted entry.
pub fn sidebar<'a, M: Clone + 'a>(
    items: Vec<SidebarItem<'a, M>>,
    active_index: Option<usize>,
) -> Element<'a, M> {
    let mut item_column = column![].spacing(SPACING_XS);

    for (index, item) in items.into_iter().enumerate() {
        let is_active = active_index == Some(index);

        let label_style = move |theme: &Theme| {
            let palette = theme.extended_palette();
            text::Style {
                color: Some(if is_active {
                    palette.primary.base.color
                } else {
                    theme.studio().text_secondary
                }),
            }
        };

        let content = row![
            item.icon.size(16).style(label_style),
            text(item.label).size(14).style(label_style),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center);

        let item_button = button(
            container(content)
                .padding([SPACING_SM, 12.0])
                .width(Length::Fill),
        )
        .on_press(item.message)
        .width(Length::Fill)
        .style(move |theme: &Theme, status| {
            let studio = theme.studio();
            let background = if is_active {
                Some(studio.accent_primary_light.into())
            } else {
                match status {
                    button::Status::Hovered => Some(studio.background_secondary.into()),
                    _ => None,
                }
            };
            button::Style {
                background,
                text_color: studio.text_secondary,
                border: Border {
                    radius: BORDER_RADIUS_SM.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        });

        item_column = item_column.push(item_button);
    }

    container(column![Space::new().height(SPACING_SM), item_column].width(Length::Fill))
        .padding(SPACING_MD)
        .width(Length::Fixed(SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(container_sidebar)
        .into()
}
