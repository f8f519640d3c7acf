//! RecommendationFinalizer - closes a flow session with a recommendation.
//!
//! The caller marks the session pending and takes a ticket in the same
//! store update that commits the last answer. The service call and the
//! completion then run on their own task, so a dropped request still
//! leaves the session rendered. A restart that happens while the call is
//! in flight bumps the session generation, and the late result is dropped.

use std::sync::Arc;

use crate::domain::flow::{Completion, FinalizationTicket, FlowError, FlowSession};
use crate::domain::recommendation::{
    Explanation, RecommendationOutcome, SERVICE_UNREACHABLE_MESSAGE,
};
use crate::ports::{FlowSessionStore, ProductRepository, RecommendationService};

#[derive(Clone)]
pub struct RecommendationFinalizer {
    sessions: Arc<dyn FlowSessionStore>,
    service: Arc<dyn RecommendationService>,
    products: Arc<dyn ProductRepository>,
}

impl RecommendationFinalizer {
    pub fn new(
        sessions: Arc<dyn FlowSessionStore>,
        service: Arc<dyn RecommendationService>,
        products: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            sessions,
            service,
            products,
        }
    }

    /// Requests the recommendation for `ticket` and stores the rendered
    /// explanation. Waits for the outcome, but the work carries on if the
    /// caller goes away.
    ///
    /// Service failures never surface as errors; they become a fallback
    /// explanation.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the session was abandoned during the call
    /// - `Storage` on persistence failure
    pub async fn finalize(&self, ticket: FinalizationTicket) -> Result<FlowSession, FlowError> {
        let worker = self.clone();
        tokio::spawn(async move { worker.complete(ticket).await })
            .await
            .map_err(|e| FlowError::Storage(format!("finalization task failed: {}", e)))?
    }

    async fn complete(self, ticket: FinalizationTicket) -> Result<FlowSession, FlowError> {
        tracing::info!(
            session_id = %ticket.session_id,
            generation = ticket.generation,
            answers = ticket.answers.len(),
            "requesting recommendation"
        );

        let outcome = match self.service.recommend(&ticket.answers).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(
                    session_id = %ticket.session_id,
                    code = %e.code(),
                    retryable = e.is_retryable(),
                    error = %e,
                    "recommendation service failed"
                );
                RecommendationOutcome::failed(SERVICE_UNREACHABLE_MESSAGE)
            }
        };

        let products = match self.products.list().await {
            Ok(products) => products,
            Err(e) => {
                tracing::warn!(error = %e, "product lookup failed; rendering without details");
                Vec::new()
            }
        };
        let explanation = Explanation::build(outcome, &products);

        let mut completion = Completion::Applied;
        let generation = ticket.generation;
        let session = self
            .sessions
            .update(
                &ticket.session_id,
                Box::new(|session: &mut FlowSession| {
                    completion = session.complete_finalization(generation, explanation)?;
                    Ok(())
                }),
            )
            .await?;

        match completion {
            Completion::Applied => tracing::info!(
                session_id = %session.id(),
                fallback = session.explanation().map(Explanation::is_fallback).unwrap_or(true),
                "consultation finished"
            ),
            Completion::Stale { ticket, current } => tracing::debug!(
                session_id = %session.id(),
                ticket,
                current,
                "discarding recommendation for a restarted session"
            ),
        }
        Ok(session)
    }
}
