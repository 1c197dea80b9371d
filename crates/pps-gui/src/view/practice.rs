//! Prompt writing practice view.
//!
//! Renders the mounted [`PracticeSession`]: progress header, the current
//! step's requirements and examples, the draft input, and the evaluation
//! once one exists.

use iced::widget::{Column, Text, button, column, container, row, space, text, text_editor};
use iced::{Alignment, Color, Element, Length, Theme};
use iced_fonts::lucide;
use pps_model::{EvaluationResult, ExerciseStep};
use pps_practice::PracticeSession;

use crate::component::{ProgressBar, bullet_list, titled_list};
use crate::message::{Message, PracticeMessage};
use crate::theme::{
    CONTENT_MAX_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, StudioColors,
    button_primary, container_card, container_tinted,
};
use crate::view::view_placeholder;

/// Height of the draft editor; long drafts scroll inside it.
const DRAFT_EDITOR_HEIGHT: f32 = 160.0;

/// Render the practice view, or an empty state when no session is mounted.
pub fn view_practice<'a>(
    session: Option<&'a PracticeSession>,
    editor: &'a text_editor::Content,
) -> Element<'a, Message> {
    let Some(session) = session else {
        return view_placeholder("프롬프트 작성 실습", "실습할 단계가 없습니다.");
    };

    let mut content = column![view_header(session), view_step_card(session, editor)]
        .spacing(SPACING_LG)
        .max_width(CONTENT_MAX_WIDTH);

    if let Some(result) = session.last_evaluation() {
        content = content.push(view_evaluation(result, session.can_advance()));
    }

    content.into()
}

fn view_header(session: &PracticeSession) -> Element<'_, Message> {
    row![
        text("프롬프트 작성 실습").size(24),
        space::horizontal(),
        text(session.position_label())
            .size(13)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.studio().text_muted),
            }),
        container(ProgressBar::new(session.progress_fraction()).girth(6.0).view())
            .width(Length::Fixed(128.0)),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center)
    .into()
}

// =============================================================================
// STEP CARD
// =============================================================================

fn view_step_card<'a>(
    session: &'a PracticeSession,
    editor: &'a text_editor::Content,
) -> Element<'a, Message> {
    let step = session.current_step();

    let heading = column![
        text(step.title.as_str()).size(20),
        text(step.description.as_str())
            .size(14)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.studio().text_secondary),
            }),
    ]
    .spacing(SPACING_XS);

    let requirements =
        column![text("요구사항").size(15), bullet_list(&step.requirements)].spacing(SPACING_SM);

    let draft = column![
        text("프롬프트 작성").size(15),
        text_editor(editor)
            .placeholder("프롬프트를 작성해보세요...")
            .on_action(|action| Message::Practice(PracticeMessage::DraftEdited(action)))
            .padding(12.0)
            .size(14)
            .height(Length::Fixed(DRAFT_EDITOR_HEIGHT)),
        button(
            text("평가받기")
                .size(14)
                .width(Length::Fill)
                .align_x(Alignment::Center),
        )
        .on_press(Message::Practice(PracticeMessage::Submit))
        .padding([SPACING_SM, SPACING_MD])
        .width(Length::Fill)
        .style(button_primary),
    ]
    .spacing(SPACING_SM);

    container(
        column![heading, requirements, view_examples(step), draft].spacing(SPACING_MD),
    )
    .padding(SPACING_LG)
    .width(Length::Fill)
    .style(container_card)
    .into()
}

fn view_examples(step: &ExerciseStep) -> Element<'_, Message> {
    column![
        text("예시").size(15),
        example_panel(
            lucide::circle_check(),
            "좋은 예시",
            &step.example.good,
            |theme| theme.extended_palette().success.base.color,
            |theme| theme.studio().status_success_light,
        ),
        example_panel(
            lucide::circle_alert(),
            "나쁜 예시",
            &step.example.bad,
            |theme| theme.extended_palette().danger.base.color,
            |theme| theme.studio().status_error_light,
        ),
    ]
    .spacing(SPACING_SM)
    .into()
}

fn example_panel<'a>(
    icon: Text<'a>,
    label: &'a str,
    body: &'a str,
    accent: fn(&Theme) -> Color,
    tint: fn(&Theme) -> Color,
) -> Element<'a, Message> {
    let accent_style = move |theme: &Theme| text::Style {
        color: Some(accent(theme)),
    };

    container(
        column![
            row![icon.size(16).style(accent_style), text(label).size(14).style(accent_style)]
                .spacing(SPACING_SM)
                .align_y(Alignment::Center),
            text(body).size(14),
        ]
        .spacing(SPACING_XS),
    )
    .padding(12.0)
    .width(Length::Fill)
    .style(move |theme: &Theme| container_tinted(tint(theme), accent(theme))(theme))
    .into()
}

// =============================================================================
// EVALUATION
// =============================================================================

fn view_evaluation(result: &EvaluationResult, can_advance: bool) -> Element<'_, Message> {
    let header = row![
        text("평가 결과").size(18),
        space::horizontal(),
        lucide::star()
            .size(20)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().warning.base.color),
            }),
        text(result.score_label()).size(20),
    ]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center);

    let sections = [
        feedback_section(
            "잘한 점",
            &result.strengths,
            |theme| theme.studio().status_success_light,
        ),
        feedback_section(
            "개선이 필요한 점",
            &result.weaknesses,
            |theme| theme.studio().status_error_light,
        ),
        feedback_section(
            "제안사항",
            &result.suggestions,
            |theme| theme.studio().accent_primary_light,
        ),
    ];

    let next_step = button(
        row![text("다음 단계").size(14), lucide::arrow_right().size(14)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press_maybe(can_advance.then_some(Message::Practice(PracticeMessage::NextStep)))
    .padding([SPACING_SM, SPACING_MD])
    .width(Length::Fill)
    .style(button_primary);

    let body = Column::new()
        .push(header)
        .extend(sections.into_iter().flatten())
        .push(next_step)
        .spacing(SPACING_MD);

    container(body)
        .padding(SPACING_LG)
        .width(Length::Fill)
        .style(container_card)
        .into()
}

fn feedback_section<'a>(
    title: &'a str,
    items: &'a [String],
    tint: fn(&Theme) -> Color,
) -> Option<Element<'a, Message>> {
    let list = titled_list(title, items)?;
    Some(
        container(list)
            .padding(12.0)
            .width(Length::Fill)
            .style(move |theme: &Theme| {
                let background = tint(theme);
                container_tinted(background, background)(theme)
            })
            .into(),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pps_practice::FeedbackScorer;

    use super::*;

    #[test]
    fn test_builds_evaluated_session() {
        let catalog = pps_content::load_embedded().unwrap();
        let mut session =
            PracticeSession::new(Arc::from(catalog.steps), FeedbackScorer::default()).unwrap();
        session.submit();
        let editor = text_editor::Content::new();

        let _element = view_practice(Some(&session), &editor);
    }

    #[test]
    fn test_builds_without_session() {
        let editor = text_editor::Content::new();
        let _element = view_practice(None, &editor);
    }
}
