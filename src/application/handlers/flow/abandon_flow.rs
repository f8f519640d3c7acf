//! AbandonFlowHandler - drops a chat session and its answers.

use std::sync::Arc;

use crate::domain::flow::FlowError;
use crate::domain::foundation::FlowSessionId;
use crate::ports::FlowSessionStore;

#[derive(Debug, Clone)]
pub struct AbandonFlowCommand {
    pub session_id: FlowSessionId,
}

pub struct AbandonFlowHandler {
    sessions: Arc<dyn FlowSessionStore>,
}

impl AbandonFlowHandler {
    pub fn new(sessions: Arc<dyn FlowSessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, cmd: AbandonFlowCommand) -> Result<(), FlowError> {
        if !self.sessions.delete(&cmd.session_id).await? {
            return Err(FlowError::NotFound(cmd.session_id));
        }
        tracing::info!(session_id = %cmd.session_id, "chat abandoned");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryFlowSessionStore;
    use crate::domain::flow::FlowSession;

    #[tokio::test]
    async fn abandoning_twice_reports_not_found() {
        let store = Arc::new(InMemoryFlowSessionStore::new());
        let session = FlowSession::new(FlowSessionId::new());
        store.save(&session).await.unwrap();
        let handler = AbandonFlowHandler::new(store.clone());

        let cmd = AbandonFlowCommand { session_id: *session.id() };
        handler.handle(cmd.clone()).await.unwrap();
        assert_eq!(handler.handle(cmd).await, Err(FlowError::NotFound(*session.id())));
        assert_eq!(store.count().await, 0);
    }
}
