//! HTTP adapter for the recommendation chat.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AbandonPayload, ChatPayload, ChatSessionView, PromptView, SelectionRequest, TextAnswerRequest,
};
pub use routes::chat_router;
