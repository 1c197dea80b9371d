//! Progress dashboard view.
//!
//! Read-only rendering of the catalog's dashboard content: four stat cards,
//! the module list, recent activity and the "현재 학습중" card.

use iced::widget::{Column, button, column, container, row, space, text};
use iced::{Alignment, Border, Element, Length, Theme};
use iced_fonts::lucide;
use pps_model::{DashboardContent, ModuleStatus, ModuleSummary, RecentActivity};

use crate::component::{ProgressBar, SectionCard, bullet_list, stat_card};
use crate::message::Message;
use crate::state::View;
use crate::theme::{
    BORDER_RADIUS_MD, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, StudioColors,
    button_primary, container_card,
};

/// Render the dashboard.
pub fn view_dashboard(content: &DashboardContent) -> Element<'_, Message> {
    column![
        view_stats(content),
        view_modules(&content.modules),
        view_recent_activities(&content.recent_activities),
        view_current_module(&content.progress.current_module),
    ]
    .spacing(SPACING_LG)
    .width(Length::Fill)
    .into()
}

fn view_stats(content: &DashboardContent) -> Element<'_, Message> {
    let progress = &content.progress;
    row![
        stat_card(lucide::trophy(), "전체 진행률", progress.overall_label()),
        stat_card(lucide::trending_up(), "연속 학습", progress.streak_label()),
        stat_card(lucide::hourglass(), "총 학습 시간", progress.total_time_label()),
        stat_card(lucide::book_open(), "완료한 레슨", progress.lessons_label()),
    ]
    .spacing(SPACING_MD)
    .into()
}

// =============================================================================
// MODULES
// =============================================================================

fn view_modules(modules: &[ModuleSummary]) -> Element<'_, Message> {
    let list = Column::with_children(modules.iter().map(view_module)).spacing(SPACING_MD);

    SectionCard::new("학습 모듈", list)
        .icon(lucide::book_open())
        .view()
}

fn view_module(module: &ModuleSummary) -> Element<'_, Message> {
    let status = module.status;
    let icon = match status {
        ModuleStatus::Completed => lucide::circle_check(),
        ModuleStatus::InProgress => lucide::book_open(),
        ModuleStatus::Locked => lucide::lock(),
    }
    .size(18)
    .style(move |theme: &Theme| {
        let palette = theme.extended_palette();
        text::Style {
            color: Some(match status {
                ModuleStatus::Completed => palette.success.base.color,
                ModuleStatus::InProgress => palette.primary.base.color,
                ModuleStatus::Locked => theme.studio().text_disabled,
            }),
        }
    });

    let header = row![icon, text(module.title.as_str()).size(15)]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center);

    container(
        column![
            header,
            ProgressBar::new(module.progress_fraction())
                .label(module.progress_label())
                .view(),
            bullet_list(&module.lessons),
        ]
        .spacing(SPACING_SM),
    )
    .padding(SPACING_MD)
    .width(Length::Fill)
    .style(|theme: &Theme| container::Style {
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            width: 1.0,
            color: theme.studio().border_subtle,
        },
        ..Default::default()
    })
    .into()
}

// =============================================================================
// RECENT ACTIVITY
// =============================================================================

fn view_recent_activities(activities: &[RecentActivity]) -> Element<'_, Message> {
    let list = Column::with_children(activities.iter().map(view_activity)).spacing(SPACING_SM);

    SectionCard::new("최근 활동", list)
        .icon(lucide::hourglass())
        .view()
}

fn view_activity(activity: &RecentActivity) -> Element<'_, Message> {
    let details = column![
        text(activity.date_label.as_str())
            .size(12)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.studio().text_muted),
            }),
        text(activity.activity.as_str()).size(14),
    ]
    .spacing(SPACING_XS);

    let score = row![
        lucide::star()
            .size(18)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().warning.base.color),
            }),
        text(activity.score.to_string()).size(16),
    ]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center);

    container(row![details, space::horizontal(), score].align_y(Alignment::Center))
        .padding(12.0)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.studio().background_secondary.into()),
            border: Border {
                radius: BORDER_RADIUS_MD.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

// =============================================================================
// CURRENT MODULE
// =============================================================================

fn view_current_module(current_module: &str) -> Element<'_, Message> {
    let continue_button = button(
        row![text("계속하기").size(14), lucide::arrow_right().size(14)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press(Message::Navigate(View::Learn))
    .padding([SPACING_SM, SPACING_MD])
    .style(button_primary);

    let body = row![
        column![
            text("현재 학습중").size(15),
            text(current_module)
                .size(14)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.studio().text_secondary),
                }),
        ]
        .spacing(SPACING_XS),
        space::horizontal(),
        continue_button,
    ]
    .align_y(Alignment::Center);

    container(body)
        .padding(SPACING_LG)
        .width(Length::Fill)
        .style(container_card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_embedded_dashboard() {
        let catalog = pps_content::load_embedded().unwrap();
        let _element = view_dashboard(&catalog.dashboard);
    }

    #[test]
    fn test_builds_empty_dashboard() {
        let content = DashboardContent::default();
        let _element = view_dashboard(&content);
    }
}
