//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `QuestionRepository` / `ProductRepository` - catalog persistence
//! - `FlowSessionStore` - chat sessions in progress
//! - `RecommendationService` - the external recommender
//! - `ImageStorage` - uploaded product pictures

mod flow_session_store;
mod image_storage;
mod product_repository;
mod question_repository;
mod recommendation_service;

pub use flow_session_store::{FlowSessionStore, SessionUpdate};
pub use image_storage::{ImageStorage, ImageStorageError};
pub use product_repository::{NewProduct, ProductRepository};
pub use question_repository::QuestionRepository;
pub use recommendation_service::{RecommendationError, RecommendationService};
