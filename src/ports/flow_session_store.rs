//! Flow session store port.
//!
//! Sessions are short-lived and kept per process; nothing here promises
//! durability across restarts.

use async_trait::async_trait;

use crate::domain::flow::{FlowError, FlowSession};
use crate::domain::foundation::{DomainError, FlowSessionId};

/// Change applied to a stored session by [`FlowSessionStore::update`].
pub type SessionUpdate<'a> = Box<dyn FnOnce(&mut FlowSession) -> Result<(), FlowError> + Send + 'a>;

#[async_trait]
pub trait FlowSessionStore: Send + Sync {
    /// Inserts or replaces a session.
    async fn save(&self, session: &FlowSession) -> Result<(), DomainError>;

    /// Returns `None` if not found.
    async fn find(&self, id: &FlowSessionId) -> Result<Option<FlowSession>, DomainError>;

    /// Applies `apply` to the stored session and returns the result.
    ///
    /// Updates of one session never interleave: each sees the state the
    /// previous one left. When `apply` fails nothing is written.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the session does not exist
    /// - whatever `apply` returns
    async fn update<'a>(
        &self,
        id: &FlowSessionId,
        apply: SessionUpdate<'a>,
    ) -> Result<FlowSession, FlowError>;

    /// Removes a session. Returns false if it did not exist.
    async fn delete(&self, id: &FlowSessionId) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_session_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn FlowSessionStore) {}
    }
}
