//! Recommendation results and the explanation built from them.
//!
//! The service answer is parsed leniently into a [`RecommendationOutcome`];
//! [`Explanation::build`] turns it into a view that adapters render.

mod explanation;
mod result;

pub use explanation::{
    Explanation, FinalAction, NumberedRule, ProductSection, RuleSection, FALLBACK_NOTICE,
    SERVICE_UNREACHABLE_MESSAGE,
};
pub use result::{
    Importance, RecommendationOutcome, RecommendationResult, Rule, DEFAULT_FAILURE_MESSAGE,
};
