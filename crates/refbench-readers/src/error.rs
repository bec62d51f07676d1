//! Error types for the readers

use refbench_domain::DomainError;
use thiserror::Error;

/// Errors that can occur while reading tool output
#[derive(Error, Debug)]
pub enum ReaderError {
    /// A category name outside a closed vocabulary
    #[error("Unknown refactoring type: {0}")]
    UnknownCategory(String),

    /// The live detector reported a kind with no dispatch rule
    #[error("Refactoring not supported: {0}")]
    UnsupportedRefactoring(String),

    /// Structural corruption in a text format
    #[error("Malformed input at line {line}: {reason}")]
    Malformed {
        /// 1-based line number
        line: usize,
        /// What was wrong with it
        reason: String,
    },

    /// The detection engine failed on a commit
    #[error("Detector error: {0}")]
    Detector(String),

    /// A relationship could not be built
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Reading or writing a file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReaderError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        ReaderError::Malformed {
            line,
            reason: reason.into(),
        }
    }
}
