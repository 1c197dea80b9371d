//! Bullet list component.

use iced::widget::{Column, column, row, text};
use iced::{Element, Theme};

use crate::theme::{SPACING_SM, SPACING_XS, StudioColors};

/// Renders `items` one per line behind a bullet.
pub fn bullet_list<'a, M: 'a>(items: &'a [String]) -> Element<'a, M> {
    let lines = items.iter().map(|item| -> Element<'a, M> {
        row![
            text("•").size(14).style(|theme: &Theme| text::Style {
                color: Some(theme.studio().text_muted),
            }),
            text(item.as_str()).size(14),
        ]
        .spacing(SPACING_SM)
        .into()
    });

    Column::with_children(lines).spacing(SPACING_XS).into()
}

/// A labelled bullet list, or nothing when `items` is empty.
pub fn titled_list<'a, M: 'a>(title: &'a str, items: &'a [String]) -> Option<Element<'a, M>> {
    if items.is_empty() {
        return None;
    }
    Some(
        column![text(title).size(15), bullet_list(items)]
            .spacing(SPACING_SM)
            .into(),
    )
}
