//! Practice view messages.

use iced::widget::text_editor;

/// Events raised by the practice view.
#[derive(Debug, Clone)]
pub enum PracticeMessage {
    /// Cursor movement or edit in the draft editor.
    DraftEdited(text_editor::Action),
    /// "평가받기" pressed.
    Submit,
    /// "다음 단계" pressed.
    NextStep,
}
