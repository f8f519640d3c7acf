//! Storage adapters.
//!
//! - `JsonLinesFile` - one JSON record per line, rewritten per mutation
//! - File and in-memory catalog repositories
//! - `InMemoryFlowSessionStore` - chat sessions in progress
//! - `LocalImageStorage` - uploaded product pictures

mod file_catalog;
mod in_memory_catalog;
mod in_memory_flow_session_store;
mod jsonl_file;
mod local_image_storage;

pub use file_catalog::{FileProductRepository, FileQuestionRepository, PRODUCTS_FILE, QUESTIONS_FILE};
pub use in_memory_catalog::{InMemoryProductRepository, InMemoryQuestionRepository};
pub use in_memory_flow_session_store::InMemoryFlowSessionStore;
pub use jsonl_file::JsonLinesFile;
pub use local_image_storage::{LocalImageStorage, UPLOADS_ROUTE};
