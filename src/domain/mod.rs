//! Domain layer: catalog entities, the question flow, and recommendation
//! rendering.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, timestamps, errors, state machine)
//! - `catalog` - Questions and products
//! - `flow` - Chat flow session and its state machine
//! - `recommendation` - Service results and the explanation built from them
//! - `report` - Plain-text catalog reports

pub mod catalog;
pub mod flow;
pub mod foundation;
pub mod recommendation;
pub mod report;
