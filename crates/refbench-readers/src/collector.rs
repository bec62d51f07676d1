//! Collects relationships from a live detector's callbacks

use crate::error::ReaderError;
use refbench_domain::{
    DetectedRefactoring, RefactoringCategory, RefactoringHandler, RefactoringRelationship,
    RefactoringSet,
};
use tracing::debug;

/// Map one detected refactoring to its relationships
///
/// Kinds without a rule fail with [`ReaderError::UnsupportedRefactoring`].
pub fn relationships_of(
    refactoring: &DetectedRefactoring,
) -> Result<Vec<RefactoringRelationship>, ReaderError> {
    use DetectedRefactoring as D;
    use RefactoringCategory as C;

    let single = |category, before: String, after: String| {
        RefactoringRelationship::new(category, before, after).map(|r| vec![r])
    };

    let relationships = match refactoring {
        D::RenameClass {
            original_class,
            renamed_class,
        } => single(C::RenameClass, original_class.clone(), renamed_class.clone())?,
        D::MoveClass {
            original_class,
            moved_class,
        } => single(C::MoveClass, original_class.clone(), moved_class.clone())?,
        D::RenamePackage {
            original_package,
            renamed_package,
        } => single(C::RenamePackage, original_package.clone(), renamed_package.clone())?,
        D::RenameMethod { original, renamed } => {
            single(C::RenameMethod, original.key(), renamed.key())?
        }
        D::MoveMethod { original, moved } => single(C::MoveMethod, original.key(), moved.key())?,
        D::PullUpMethod { original, moved } => {
            single(C::PullUpMethod, original.key(), moved.key())?
        }
        D::PushDownMethod { original, moved } => {
            single(C::PushDownMethod, original.key(), moved.key())?
        }
        D::ExtractMethod { source, extracted } => {
            single(C::ExtractMethod, source.key(), extracted.key())?
        }
        D::InlineMethod { inlined, target } => {
            single(C::InlineMethod, inlined.key(), target.key())?
        }
        D::MoveAttribute { original, moved } => {
            single(C::MoveAttribute, original.key(), moved.key())?
        }
        D::PullUpAttribute { original, moved } => {
            single(C::PullUpAttribute, original.key(), moved.key())?
        }
        D::PushDownAttribute { original, moved } => {
            single(C::PushDownAttribute, original.key(), moved.key())?
        }
        D::ExtractSuperclass {
            sub_classes,
            extracted_class,
        } => supertype(C::ExtractSuperclass, sub_classes, extracted_class)?,
        D::ExtractInterface {
            sub_classes,
            extracted_class,
        } => supertype(C::ExtractInterface, sub_classes, extracted_class)?,
        other => {
            return Err(ReaderError::UnsupportedRefactoring(other.kind().to_string()));
        }
    };
    Ok(relationships)
}

fn supertype(
    category: RefactoringCategory,
    sub_classes: &[String],
    extracted_class: &str,
) -> Result<Vec<RefactoringRelationship>, ReaderError> {
    sub_classes
        .iter()
        .map(|sub| {
            RefactoringRelationship::new(category, sub, extracted_class).map_err(ReaderError::from)
        })
        .collect()
}

/// Handler that accumulates one commit's relationships
///
/// The first failure, whether reported by the detector or raised while
/// mapping a refactoring, is kept and returned by [`into_result`].
///
/// [`into_result`]: RefactoringCollector::into_result
#[derive(Debug)]
pub struct RefactoringCollector {
    set: RefactoringSet,
    error: Option<ReaderError>,
}

impl RefactoringCollector {
    /// Create a collector for one revision
    pub fn new(project: &str, revision: &str) -> Self {
        Self {
            set: RefactoringSet::new(project, revision),
            error: None,
        }
    }

    /// Relationships collected so far
    pub fn set(&self) -> &RefactoringSet {
        &self.set
    }

    /// The collected set, or the first recorded failure
    pub fn into_result(self) -> Result<RefactoringSet, ReaderError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.set),
        }
    }

    fn record(&mut self, error: ReaderError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}

impl RefactoringHandler for RefactoringCollector {
    fn handle(&mut self, commit_id: &str, refactorings: &[DetectedRefactoring]) {
        for refactoring in refactorings {
            match relationships_of(refactoring) {
                Ok(relationships) => self.set.add_all(relationships),
                Err(e) => {
                    self.record(e);
                    return;
                }
            }
        }
        debug!(commit_id, count = self.set.len(), "Collected refactorings");
    }

    fn handle_exception(&mut self, commit_id: &str, error: &str) {
        self.record(ReaderError::Detector(format!("{}: {}", commit_id, error)));
    }
}
