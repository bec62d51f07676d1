//! Error types for the domain layer

use thiserror::Error;

/// Errors raised while building domain values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A relationship was built from a missing or blank component
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A category name or abbreviation did not resolve
    #[error("Unknown refactoring category: {0}")]
    UnknownCategory(String),
}
