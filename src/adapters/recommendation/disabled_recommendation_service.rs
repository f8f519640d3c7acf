//! Stand-in used when recommendations are switched off.

use async_trait::async_trait;

use crate::domain::flow::AnswerSet;
use crate::domain::recommendation::RecommendationOutcome;
use crate::ports::{RecommendationError, RecommendationService};

#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledRecommendationService;

#[async_trait]
impl RecommendationService for DisabledRecommendationService {
    async fn recommend(&self, _answers: &AnswerSet) -> Result<RecommendationOutcome, RecommendationError> {
        Err(RecommendationError::Disabled)
    }
}
