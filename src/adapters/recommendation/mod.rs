//! Recommendation service adapters.

mod disabled_recommendation_service;
mod http_recommendation_service;
mod mock_recommendation_service;

pub use disabled_recommendation_service::DisabledRecommendationService;
pub use http_recommendation_service::{HttpRecommendationConfig, HttpRecommendationService};
pub use mock_recommendation_service::MockRecommendationService;
