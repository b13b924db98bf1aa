//! Error types for chore domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain chore values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChoreDomainError {
    /// The chore title is empty after trimming.
    #[error("chore title must not be empty")]
    EmptyTitle,
}

/// Error returned while parsing task statuses from callers or persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing history action tags from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown history action: {0}")]
pub struct ParseHistoryActionError(pub String);
