//! GetFlowHandler - Query handler for a chat session.

use std::sync::Arc;

use crate::domain::flow::{FlowError, FlowSession};
use crate::domain::foundation::FlowSessionId;
use crate::ports::FlowSessionStore;

#[derive(Debug, Clone)]
pub struct GetFlowQuery {
    pub session_id: FlowSessionId,
}

pub struct GetFlowHandler {
    sessions: Arc<dyn FlowSessionStore>,
}

impl GetFlowHandler {
    pub fn new(sessions: Arc<dyn FlowSessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, query: GetFlowQuery) -> Result<FlowSession, FlowError> {
        self.sessions
            .find(&query.session_id)
            .await?
            .ok_or(FlowError::NotFound(query.session_id))
    }
}
