//! Relationship module - one (category, before, after) refactoring fact

use crate::category::RefactoringCategory;
use crate::error::DomainError;
use crate::signature;
use std::cmp::Ordering;
use std::fmt;

/// After-entity placeholder used by the coarsened view of a set
pub const GROUPED_ENTITY: &str = "*";

/// A single refactoring instance
///
/// Both entities are stored normalized, so two relationships built from
/// different spellings of the same signatures compare equal. Values are
/// never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RefactoringRelationship {
    category: RefactoringCategory,
    entity_before: String,
    entity_after: String,
}

impl RefactoringRelationship {
    /// Build a relationship, normalizing and trimming both entities
    ///
    /// Fails with [`DomainError::InvalidArgument`] when an entity is blank
    /// after normalization.
    pub fn new(
        category: RefactoringCategory,
        entity_before: impl AsRef<str>,
        entity_after: impl AsRef<str>,
    ) -> Result<Self, DomainError> {
        let entity_before = signature::normalize(entity_before.as_ref()).trim().to_string();
        let entity_after = signature::normalize(entity_after.as_ref()).trim().to_string();

        if entity_before.is_empty() {
            return Err(DomainError::InvalidArgument(
                "entity before is empty".to_string(),
            ));
        }
        if entity_after.is_empty() {
            return Err(DomainError::InvalidArgument(
                "entity after is empty".to_string(),
            ));
        }

        Ok(Self {
            category,
            entity_before,
            entity_after,
        })
    }

    /// Build a relationship from components that may be absent
    ///
    /// A missing component is rejected before any normalization runs.
    pub fn from_parts(
        category: Option<RefactoringCategory>,
        entity_before: Option<&str>,
        entity_after: Option<&str>,
    ) -> Result<Self, DomainError> {
        let category = category
            .ok_or_else(|| DomainError::InvalidArgument("category is missing".to_string()))?;
        let before = entity_before
            .ok_or_else(|| DomainError::InvalidArgument("entity before is missing".to_string()))?;
        let after = entity_after
            .ok_or_else(|| DomainError::InvalidArgument("entity after is missing".to_string()))?;
        Self::new(category, before, after)
    }

    /// Kind of refactoring
    pub fn category(&self) -> RefactoringCategory {
        self.category
    }

    /// Normalized signature before the change
    pub fn entity_before(&self) -> &str {
        &self.entity_before
    }

    /// Normalized signature after the change
    pub fn entity_after(&self) -> &str {
        &self.entity_after
    }

    /// Grouping key for relationships that describe the same source location
    pub fn primary_entity(&self) -> &str {
        &self.entity_before
    }

    /// Representative of this relationship's (category, primary entity) group
    pub fn grouped(&self) -> Self {
        Self {
            category: self.category,
            entity_before: self.entity_before.clone(),
            entity_after: GROUPED_ENTITY.to_string(),
        }
    }

    /// Copy with every parameter list removed from both entities
    ///
    /// Returns `None` when an entity would become empty.
    pub fn without_parameters(&self) -> Option<Self> {
        let before = signature::strip_parameters(&self.entity_before);
        let after = signature::strip_parameters(&self.entity_after);
        if before.trim().is_empty() || after.trim().is_empty() {
            return None;
        }
        Some(Self {
            category: self.category,
            entity_before: before,
            entity_after: after,
        })
    }
}

impl Ord for RefactoringRelationship {
    fn cmp(&self, other: &Self) -> Ordering {
        self.entity_before
            .cmp(&other.entity_before)
            .then_with(|| self.entity_after.cmp(&other.entity_after))
            .then_with(|| self.category.cmp(&other.category))
    }
}

impl PartialOrd for RefactoringRelationship {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for RefactoringRelationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}",
            self.category.display_name(),
            self.entity_before,
            self.entity_after
        )
    }
}
