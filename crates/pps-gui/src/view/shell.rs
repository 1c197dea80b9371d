//! Navigation shell.
//!
//! Top bar, sidebar, the active view and the quick-access bar. The shell
//! only decides which view is shown; each view renders its own content.

use iced::widget::{Column, button, column, container, row, scrollable, space, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use crate::component::{SidebarItem, sidebar, warning_banner};
use crate::message::Message;
use crate::state::{AppState, View};
use crate::theme::{
    SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, StudioColors, button_primary,
    button_secondary, container_bar,
};
use crate::view::{view_dashboard, view_placeholder, view_practice};

/// Render the whole window.
pub fn view_shell(state: &AppState) -> Element<'_, Message> {
    let active = state.navigation.active_view();

    let mut main = Column::new().spacing(SPACING_MD);
    if let Some(error) = &state.error {
        main = main.push(warning_banner(error, Message::DismissError));
    }
    main = main.push(view_active(state, active));

    let body = row![
        sidebar(nav_items(), Some(active.index())),
        scrollable(container(main).padding(SPACING_XL).width(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill),
    ]
    .height(Length::Fill);

    column![
        view_top_bar(&state.catalog.title),
        body,
        view_quick_access(state.current_module()),
    ]
    .into()
}

fn view_active(state: &AppState, active: View) -> Element<'_, Message> {
    match active {
        View::Dashboard => view_dashboard(&state.catalog.dashboard),
        View::Practice => view_practice(state.practice.as_ref(), &state.draft_editor),
        View::Learn => view_placeholder(View::Learn.label(), "준비 중인 학습 콘텐츠입니다."),
        View::Achievements => {
            view_placeholder(View::Achievements.label(), "아직 획득한 업적이 없습니다.")
        }
    }
}

fn nav_items() -> Vec<SidebarItem<'static, Message>> {
    View::ALL
        .into_iter()
        .map(|view| {
            let icon = match view {
                View::Dashboard => lucide::house(),
                View::Learn => lucide::book_open(),
                View::Practice => lucide::pencil(),
                View::Achievements => lucide::award(),
            };
            SidebarItem::new(icon, view.label(), Message::Navigate(view))
        })
        .collect()
}

fn view_top_bar(title: &str) -> Element<'_, Message> {
    container(
        row![
            text(title).size(20).style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().primary.base.color),
            }),
            space::horizontal(),
        ]
        .align_y(Alignment::Center),
    )
    .padding([SPACING_MD, SPACING_LG])
    .width(Length::Fill)
    .style(container_bar)
    .into()
}

fn view_quick_access(current_module: &str) -> Element<'_, Message> {
    container(
        row![
            text(format!("현재 진행중: {current_module} 학습"))
                .size(13)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.studio().text_muted),
                }),
            space::horizontal(),
            button(text("학습 이어하기").size(13))
                .on_press(Message::Navigate(View::Learn))
                .padding([6.0, 12.0])
                .style(button_secondary),
            button(text("다음 레슨").size(13))
                .on_press(Message::Navigate(View::Practice))
                .padding([6.0, 12.0])
                .style(button_primary),
        ]
        .spacing(SPACING_MD)
        .align_y(Alignment::Center),
    )
    .padding([SPACING_SM, SPACING_LG])
    .width(Length::Fill)
    .style(container_bar)
    .into()
}
