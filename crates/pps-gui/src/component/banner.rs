//! Warning banner shown above the active view.

use iced::widget::{button, column, container, row, space, text};
use iced::{Alignment, Border, Element, Length, Theme};
use iced_fonts::lucide;

use crate::error::GuiError;
use crate::theme::{BORDER_RADIUS_SM, SPACING_MD, SPACING_SM, SPACING_XS, StudioColors};

/// Renders `error` with a dismiss button that emits `on_dismiss`.
pub fn warning_banner<'a, M: Clone + 'a>(error: &'a GuiError, on_dismiss: M) -> Element<'a, M> {
    let body = column![
        text(error.banner_text()).size(14),
        text(error.suggestion())
            .size(12)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.studio().text_secondary),
            }),
    ]
    .spacing(SPACING_XS);

    let close = button(lucide::x().size(14))
        .on_press(on_dismiss)
        .padding(SPACING_XS)
        .style(|_theme: &Theme, _status| button::Style::default());

    container(
        row![
            lucide::triangle_alert()
                .size(18)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().warning.strong.color),
                }),
            body,
            space::horizontal(),
            close,
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
    )
    .padding([SPACING_SM, SPACING_MD])
    .width(Length::Fill)
    .style(|theme: &Theme| {
        let studio = theme.studio();
        container::Style {
            background: Some(studio.status_warning_light.into()),
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                width: 1.0,
                color: theme.extended_palette().warning.base.color,
            },
            ..Default::default()
        }
    })
    .into()
}
