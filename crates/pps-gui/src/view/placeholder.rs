//! Titled page with an empty-state body.

use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use crate::message::Message;
use crate::theme::{SPACING_LG, SPACING_MD, SPACING_XL, StudioColors};

/// Render a page titled `title` whose body is only `notice`.
pub fn view_placeholder<'a>(title: &'a str, notice: &'a str) -> Element<'a, Message> {
    let empty = column![
        lucide::inbox().size(40).style(|theme: &Theme| text::Style {
            color: Some(theme.studio().text_disabled),
        }),
        text(notice).size(14).style(|theme: &Theme| text::Style {
            color: Some(theme.studio().text_muted),
        }),
    ]
    .spacing(SPACING_MD)
    .align_x(Alignment::Center);

    column![
        text(title).size(24),
        container(empty)
            .padding(SPACING_XL)
            .width(Length::Fill)
            .center_x(Length::Fill),
    ]
    .spacing(SPACING_LG)
    .into()
}
