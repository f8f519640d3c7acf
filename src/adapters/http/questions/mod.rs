//! HTTP adapter for question endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{NextOrderPayload, QuestionListPayload, QuestionPayload, QuestionRequest, QuestionResponse};
pub(crate) use handlers::handle_catalog_error;
pub use routes::question_router;
