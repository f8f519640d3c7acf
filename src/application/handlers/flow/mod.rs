//! Chat flow command and query handlers.

mod abandon_flow;
mod answer_flow;
mod finalize_flow;
mod get_flow;
mod restart_flow;
mod start_flow;

pub use abandon_flow::{AbandonFlowCommand, AbandonFlowHandler};
pub use answer_flow::{AnswerFlowCommand, AnswerFlowHandler, FlowAnswer};
pub use finalize_flow::RecommendationFinalizer;
pub use get_flow::{GetFlowHandler, GetFlowQuery};
pub use restart_flow::{RestartFlowCommand, RestartFlowHandler};
pub use start_flow::{StartFlowCommand, StartFlowHandler};
