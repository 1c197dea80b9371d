//! Practice view message handler.

use iced::Task;
use tracing::{debug, info};

use super::MessageHandler;
use crate::message::{Message, PracticeMessage};
use crate::state::AppState;

/// Routes practice messages to the mounted session.
pub struct PracticeHandler;

impl MessageHandler<PracticeMessage> for PracticeHandler {
    fn handle(&self, state: &mut AppState, msg: PracticeMessage) -> Task<Message> {
        if state.practice.is_none() {
            debug!(?msg, "no practice session mounted");
            return Task::none();
        }

        match msg {
            PracticeMessage::DraftEdited(action) => state.edit_draft(action),
            PracticeMessage::Submit => {
                if let Some(session) = state.practice.as_mut() {
                    let step = session.current_step_index() + 1;
                    let result = session.submit();
                    info!(
                        step,
                        score = result.score,
                        strengths = result.strengths.len(),
                        weaknesses = result.weaknesses.len(),
                        "prompt evaluated"
                    );
                }
            }
            PracticeMessage::NextStep => {
                if !state.advance_step() {
                    debug!("already on the last step");
                }
            }
        }

        Task::none()
    }
}
