//! Practice session state machine tests.

use pps_model::{ExamplePair, ExerciseStep};
use pps_practice::{FeedbackScorer, PracticeError, PracticeSession, SessionPhase};

fn make_step(id: &str, requirements: &[&str]) -> ExerciseStep {
    ExerciseStep {
        id: id.to_string(),
        title: format!("{id} 제목"),
        description: format!("{id} 설명"),
        requirements: requirements.iter().map(|r| (*r).to_string()).collect(),
        example: ExamplePair::new("좋은 예시", "나쁜 예시"),
    }
}

fn two_step_session() -> PracticeSession {
    PracticeSession::new(
        vec![
            make_step("first", &["타겟 독자층 명시", "주제 범위 설정"]),
            make_step("second", &["섹션별 구성 요청"]),
        ],
        FeedbackScorer::default(),
    )
    .unwrap()
}

#[test]
fn test_initial_state() {
    let session = two_step_session();

    assert_eq!(session.current_step_index(), 0);
    assert_eq!(session.draft_text(), "");
    assert!(session.last_evaluation().is_none());
    assert_eq!(session.phase(), SessionPhase::Drafting);
    assert_eq!(session.current_step().id, "first");
    assert_eq!(session.position_label(), "1/2");
    assert!((session.progress_fraction() - 0.5).abs() < f32::EPSILON);
}

#[test]
fn test_empty_steps_rejected() {
    let result = PracticeSession::new(Vec::<ExerciseStep>::new(), FeedbackScorer::default());
    assert_eq!(result.err(), Some(PracticeError::NoSteps));
}

#[test]
fn test_edit_draft_keeps_evaluation_and_step() {
    let mut session = two_step_session();
    session.edit_draft("타겟");
    session.submit();
    let before = session.last_evaluation().cloned();

    session.edit_draft("완전히 다른 내용");

    assert_eq!(session.draft_text(), "완전히 다른 내용");
    assert_eq!(session.last_evaluation().cloned(), before);
    assert_eq!(session.current_step_index(), 0);
    assert_eq!(session.phase(), SessionPhase::Evaluated);
}

#[test]
fn test_submit_uses_current_step_requirements() {
    let mut session = two_step_session();
    session.edit_draft("주제");

    let result = session.submit().clone();

    assert_eq!(result.score, 15);
    assert_eq!(result.strengths, vec!["주제 범위 설정 요구사항 충족"]);
    assert_eq!(session.last_evaluation(), Some(&result));
}

#[test]
fn test_second_submit_replaces_first() {
    let mut session = two_step_session();

    session.edit_draft("타겟 주제");
    let first = session.submit().clone();
    session.edit_draft("");
    let second = session.submit().clone();

    assert_eq!(first.score, 30);
    assert_eq!(second.score, 0);
    assert_eq!(session.last_evaluation(), Some(&second));
    assert_eq!(second.weaknesses.len(), 3);
}

#[test]
fn test_submit_is_idempotent_for_fixed_input() {
    let mut session = two_step_session();
    session.edit_draft("타겟");
    let first = session.submit().clone();
    let again = session.submit().clone();
    assert_eq!(first, again);
}

#[test]
fn test_advance_resets_draft_and_evaluation() {
    let mut session = two_step_session();
    session.edit_draft("타겟");
    session.submit();

    assert!(session.can_advance());
    assert!(session.advance());

    assert_eq!(session.current_step_index(), 1);
    assert_eq!(session.draft_text(), "");
    assert!(session.last_evaluation().is_none());
    assert_eq!(session.phase(), SessionPhase::Drafting);
    assert_eq!(session.current_step().id, "second");
    assert_eq!(session.position_label(), "2/2");
}

#[test]
fn test_advance_without_evaluation_is_allowed() {
    let mut session = two_step_session();
    session.edit_draft("아직 제출하지 않음");
    assert!(session.advance());
    assert_eq!(session.draft_text(), "");
}

#[test]
fn test_advance_on_last_step_is_noop() {
    let mut session = two_step_session();
    session.advance();
    session.edit_draft("섹션");
    session.submit();

    let index = session.current_step_index();
    let draft = session.draft_text().to_string();
    let evaluation = session.last_evaluation().cloned();

    assert!(session.is_last_step());
    assert!(!session.can_advance());
    assert!(!session.advance());

    assert_eq!(session.current_step_index(), index);
    assert_eq!(session.draft_text(), draft);
    assert_eq!(session.last_evaluation().cloned(), evaluation);
    assert_eq!(session.phase(), SessionPhase::Complete);
}

#[test]
fn test_single_step_session() {
    let mut session =
        PracticeSession::new(vec![make_step("only", &["키워드"])], FeedbackScorer::default())
            .unwrap();

    assert!(session.is_last_step());
    assert!(!session.advance());
    assert_eq!(session.position_label(), "1/1");
    assert!((session.progress_fraction() - 1.0).abs() < f32::EPSILON);
}

#[test]
fn test_session_over_embedded_catalog() {
    let catalog = pps_content::load_embedded().unwrap();
    let mut session = PracticeSession::new(
        catalog.steps.clone(),
        FeedbackScorer::new(catalog.scoring.clone()),
    )
    .unwrap();

    session.edit_draft("");
    let result = session.submit();
    assert_eq!(result.weaknesses.len(), 6);
    assert_eq!(result.suggestions.len(), 7);

    assert!(session.advance());
    assert_eq!(session.current_step().title, "콘텐츠 구조화 프롬프트");
    assert!(!session.advance());
}
