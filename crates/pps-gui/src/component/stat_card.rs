//! Stat card - a single headline figure with a caption and icon.

use iced::widget::{Text, column, container, row, space, text};
use iced::{Alignment, Element, Length, Theme};

use crate::theme::{SPACING_LG, SPACING_XS, StudioColors, container_card};

/// Creates a dashboard stat card.
pub fn stat_card<'a, M: 'a>(icon: Text<'a>, caption: &'a str, value: String) -> Element<'a, M> {
    let figures = column![
        text(caption).size(13).style(|theme: &Theme| text::Style {
            color: Some(theme.studio().text_muted),
        }),
        text(value).size(24),
    ]
    .spacing(SPACING_XS);

    container(
        row![
            figures,
            space::horizontal(),
            icon.size(28).style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().primary.base.color),
            }),
        ]
        .align_y(Alignment::Center),
    )
    .padding(SPACING_LG)
    .width(Length::Fill)
    .style(container_card)
    .into()
}
