//! Trait definitions for the external detection engine
//!
//! The engine itself lives outside this workspace; it is driven through
//! [`RefactoringDetector`] and reports back through [`RefactoringHandler`].

use crate::detected::DetectedRefactoring;
use std::fmt::Display;

/// Callback receiving a detector's findings, once per analyzed commit
pub trait RefactoringHandler {
    /// Refactorings found at `commit_id`
    fn handle(&mut self, commit_id: &str, refactorings: &[DetectedRefactoring]);

    /// The detector failed while analyzing `commit_id`
    fn handle_exception(&mut self, commit_id: &str, error: &str) {
        let _ = (commit_id, error);
    }
}

/// A refactoring detection engine that can analyze a single commit
pub trait RefactoringDetector {
    /// Error type for detector failures
    type Error: Display;

    /// Identifier of this detector configuration, used to key cached results
    fn config_id(&self) -> &str;

    /// Analyze `revision` of `project`, reporting to `handler`
    fn detect_at_commit(
        &self,
        project: &str,
        revision: &str,
        handler: &mut dyn RefactoringHandler,
    ) -> Result<(), Self::Error>;
}
