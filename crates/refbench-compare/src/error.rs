//! Error types for comparison and reporting

use thiserror::Error;

/// Errors that can occur while comparing or reporting
#[derive(Error, Debug)]
pub enum CompareError {
    /// Invalid comparator configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Writing a report failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
