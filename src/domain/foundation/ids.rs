//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Store-assigned identifier of a chat question.
///
/// Numeric because the catalog files assign ids as `max + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u64);

impl QuestionId {
    /// Creates a QuestionId from a raw value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw numeric value.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns the id following this one.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QuestionId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ValidationError::invalid_format("question_id", "must be a positive integer"))
    }
}

/// Store-assigned identifier of a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Creates a ProductId from a raw value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw numeric value.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns the id following this one.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ValidationError::invalid_format("product_id", "must be a positive integer"))
    }
}

/// Unique identifier for one chat flow session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlowSessionId(Uuid);

impl FlowSessionId {
    /// Creates a new random FlowSessionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a FlowSessionId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for FlowSessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FlowSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FlowSessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}
