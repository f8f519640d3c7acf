//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum REST API and chat endpoints
//! - `recommendation` - clients for the external recommendation service
//! - `render` - HTML fragments for the chat window
//! - `storage` - JSON Lines catalog files, in-memory stores, image uploads

pub mod http;
pub mod recommendation;
pub mod render;
pub mod storage;
