//! StartFlowHandler - creates or (re)starts a chat flow session.

use std::sync::Arc;

use crate::domain::flow::{FlowError, FlowSession};
use crate::domain::foundation::FlowSessionId;
use crate::ports::{FlowSessionStore, QuestionRepository};

/// Starts `session_id`, or a brand new session when it is `None`.
#[derive(Debug, Clone, Default)]
pub struct StartFlowCommand {
    pub session_id: Option<FlowSessionId>,
}

pub struct StartFlowHandler {
    sessions: Arc<dyn FlowSessionStore>,
    questions: Arc<dyn QuestionRepository>,
}

impl StartFlowHandler {
    pub fn new(sessions: Arc<dyn FlowSessionStore>, questions: Arc<dyn QuestionRepository>) -> Self {
        Self { sessions, questions }
    }

    /// Reads the question list fresh and presents the first question.
    ///
    /// A new session is only stored once it has started.
    ///
    /// # Errors
    ///
    /// - `NotFound` if an existing session was requested and is gone
    /// - `QuestionsUnavailable` if the question store cannot be read
    /// - `NoQuestions` if no question is configured
    pub async fn handle(&self, cmd: StartFlowCommand) -> Result<FlowSession, FlowError> {
        let questions = self.questions.list().await.map_err(|e| {
            tracing::warn!(session_id = ?cmd.session_id, error = %e, "question list unavailable");
            FlowError::QuestionsUnavailable(e.to_string())
        })?;

        let session = match cmd.session_id {
            Some(id) => {
                self.sessions
                    .update(
                        &id,
                        Box::new(move |session: &mut FlowSession| {
                            session.start(questions).map(|_| ())
                        }),
                    )
                    .await?
            }
            None => {
                let mut session = FlowSession::new(FlowSessionId::new());
                session.start(questions)?;
                self.sessions.save(&session).await?;
                session
            }
        };

        tracing::info!(
            session_id = %session.id(),
            generation = session.generation(),
            questions = session.questions().len(),
            "chat started"
        );
        Ok(session)
    }
}
