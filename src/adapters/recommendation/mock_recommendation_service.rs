//! Scripted recommendation service for tests.
//!
//! Responses are consumed in order; once the script runs out every call
//! fails as `Unavailable`. Every call's answer set is recorded.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::flow::AnswerSet;
use crate::domain::recommendation::RecommendationOutcome;
use crate::ports::{RecommendationError, RecommendationService};

#[derive(Debug, Clone, Default)]
pub struct MockRecommendationService {
    responses: Arc<Mutex<VecDeque<Result<serde_json::Value, RecommendationError>>>>,
    calls: Arc<Mutex<Vec<AnswerSet>>>,
    delay: Duration,
}

fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockRecommendationService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a raw service payload, parsed like a real reply.
    pub fn with_payload(self, payload: serde_json::Value) -> Self {
        locked(&self.responses).push_back(Ok(payload));
        self
    }

    /// Queues a successful recommendation.
    pub fn with_product(self, product: &str, rules: serde_json::Value) -> Self {
        self.with_payload(serde_json::json!({
            "success": true,
            "produto": product,
            "regras": rules,
        }))
    }

    pub fn with_error(self, error: RecommendationError) -> Self {
        locked(&self.responses).push_back(Err(error));
        self
    }

    /// Simulated latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        locked(&self.calls).len()
    }

    pub fn calls(&self) -> Vec<AnswerSet> {
        locked(&self.calls).clone()
    }
}

#[async_trait]
impl RecommendationService for MockRecommendationService {
    async fn recommend(&self, answers: &AnswerSet) -> Result<RecommendationOutcome, RecommendationError> {
        locked(&self.calls).push(answers.clone());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        let next = locked(&self.responses).pop_front();
        match next {
            Some(Ok(payload)) => Ok(RecommendationOutcome::from_json(&payload)),
            Some(Err(err)) => Err(err),
            None => Err(RecommendationError::unavailable("no scripted response")),
        }
    }
}
