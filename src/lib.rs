//! Catalog Advisor - product catalog with a rule-based recommendation chat
//!
//! Administrators register products and an ordered list of chat questions;
//! users answer the questions one at a time and receive a recommended
//! product together with the answers that led to it.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
