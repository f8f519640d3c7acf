//! Question command and query handlers.

mod create_question;
mod delete_question;
mod question_queries;
mod update_question;

pub use create_question::{CreateQuestionCommand, CreateQuestionHandler};
pub use delete_question::{DeleteQuestionCommand, DeleteQuestionHandler};
pub use question_queries::{GetQuestionHandler, GetQuestionQuery, ListQuestionsHandler, NextOrderHandler};
pub use update_question::{UpdateQuestionCommand, UpdateQuestionHandler};
