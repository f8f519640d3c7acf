//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers mutate the catalog or a chat session; query handlers read.

pub mod handlers;

pub use handlers::flow::{
    AbandonFlowCommand, AbandonFlowHandler, AnswerFlowCommand, AnswerFlowHandler, FlowAnswer,
    GetFlowHandler, GetFlowQuery, RecommendationFinalizer, RestartFlowCommand, RestartFlowHandler,
    StartFlowCommand, StartFlowHandler,
};
pub use handlers::product::{
    CreateProductCommand, CreateProductHandler, DeleteProductCommand, DeleteProductHandler,
    GetProductHandler, GetProductQuery, ImageUpload, ListProductsHandler, RecentProductsHandler,
    RecentProductsQuery, UpdateProductCommand, UpdateProductHandler,
};
pub use handlers::question::{
    CreateQuestionCommand, CreateQuestionHandler, DeleteQuestionCommand, DeleteQuestionHandler,
    GetQuestionHandler, GetQuestionQuery, ListQuestionsHandler, NextOrderHandler,
    UpdateQuestionCommand, UpdateQuestionHandler,
};
pub use handlers::report::{ProductReportHandler, QuestionReportHandler};
