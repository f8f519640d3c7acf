//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod flow;
pub mod product;
pub mod question;
pub mod report;
