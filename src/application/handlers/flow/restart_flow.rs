//! RestartFlowHandler - discards a chat run and returns it to the start.

use std::sync::Arc;

use crate::domain::flow::{FlowError, FlowSession};
use crate::domain::foundation::FlowSessionId;
use crate::ports::FlowSessionStore;

#[derive(Debug, Clone)]
pub struct RestartFlowCommand {
    pub session_id: FlowSessionId,
}

pub struct RestartFlowHandler {
    sessions: Arc<dyn FlowSessionStore>,
}

impl RestartFlowHandler {
    pub fn new(sessions: Arc<dyn FlowSessionStore>) -> Self {
        Self { sessions }
    }

    /// Resets the session to `NotStarted`. Any recommendation still in
    /// flight for the previous run is ignored when it arrives.
    pub async fn handle(&self, cmd: RestartFlowCommand) -> Result<FlowSession, FlowError> {
        let mut was_pending = false;
        let session = self
            .sessions
            .update(
                &cmd.session_id,
                Box::new(|session: &mut FlowSession| {
                    was_pending = session.is_recommendation_pending();
                    session.restart();
                    Ok(())
                }),
            )
            .await?;

        tracing::info!(
            session_id = %cmd.session_id,
            generation = session.generation(),
            was_pending,
            "chat restarted"
        );
        Ok(session)
    }
}
