//! AnswerFlowHandler - applies user input to a running chat.

use std::sync::Arc;

use super::RecommendationFinalizer;
use crate::domain::flow::{FlowError, FlowSession, FlowStep};
use crate::domain::foundation::{FlowSessionId, QuestionId};
use crate::ports::FlowSessionStore;

/// What the user did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowAnswer {
    /// Typed text.
    Text(String),
    /// Clicked an option of a multiple-choice question.
    Select { question_id: QuestionId, option: String },
}

#[derive(Debug, Clone)]
pub struct AnswerFlowCommand {
    pub session_id: FlowSessionId,
    pub answer: FlowAnswer,
}

pub struct AnswerFlowHandler {
    sessions: Arc<dyn FlowSessionStore>,
    finalizer: Arc<RecommendationFinalizer>,
}

impl AnswerFlowHandler {
    pub fn new(sessions: Arc<dyn FlowSessionStore>, finalizer: Arc<RecommendationFinalizer>) -> Self {
        Self { sessions, finalizer }
    }

    /// Applies the answer. When it completes the last question the
    /// recommendation is requested before returning.
    ///
    /// Committing the answer and claiming the recommendation request happen
    /// in one store update, so concurrent answers for the same session can
    /// never both finalize it.
    pub async fn handle(&self, cmd: AnswerFlowCommand) -> Result<FlowSession, FlowError> {
        let session_id = cmd.session_id;
        let answer = cmd.answer;
        let mut step = None;
        let mut ticket = None;

        let session = self
            .sessions
            .update(
                &session_id,
                Box::new(|session: &mut FlowSession| {
                    let next = match &answer {
                        FlowAnswer::Text(text) => session.submit_text(text),
                        FlowAnswer::Select { question_id, option } => {
                            session.select_option(*question_id, option)
                        }
                    }?;
                    if next == FlowStep::ReadyToFinalize {
                        ticket = Some(session.begin_finalization()?);
                    }
                    step = Some(next);
                    Ok(())
                }),
            )
            .await
            .map_err(|e| {
                tracing::debug!(session_id = %session_id, error = %e, "answer rejected");
                e
            })?;

        if let Some(ticket) = ticket {
            return self.finalizer.finalize(ticket).await;
        }

        match step {
            Some(FlowStep::Ask(prompt)) => tracing::debug!(
                session_id = %session_id,
                question_id = %prompt.question_id,
                position = prompt.position,
                "next question"
            ),
            Some(FlowStep::Clarify(prompt)) => tracing::debug!(
                session_id = %session_id,
                question_id = %prompt.question_id,
                "free text on multiple-choice question; options offered again"
            ),
            Some(FlowStep::ReadyToFinalize) | None => {}
        }
        Ok(session)
    }
}
