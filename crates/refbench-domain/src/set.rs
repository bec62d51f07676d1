//! RefactoringSet - the relationships found in one (project, revision)

use crate::category::{CategorySet, RefactoringCategory};
use crate::relationship::RefactoringRelationship;
use std::collections::btree_set;
use std::collections::BTreeSet;

/// Relationships reported for one revision of one project
///
/// Members are deduplicated by value and iterate in relationship order.
/// Filtering operations return new sets and leave the receiver untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefactoringSet {
    project: String,
    revision: String,
    refactorings: BTreeSet<RefactoringRelationship>,
}

/// Outcome of grading a candidate set against an oracle set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetDiff {
    /// In both the oracle and the candidate
    pub true_positives: BTreeSet<RefactoringRelationship>,
    /// Reported by the candidate only
    pub false_positives: BTreeSet<RefactoringRelationship>,
    /// Missed by the candidate
    pub false_negatives: BTreeSet<RefactoringRelationship>,
}

impl RefactoringSet {
    /// Create an empty set for a revision
    pub fn new(project: impl Into<String>, revision: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            revision: revision.into(),
            refactorings: BTreeSet::new(),
        }
    }

    /// Repository identity, usually a clone URL
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Commit identifier
    pub fn revision(&self) -> &str {
        &self.revision
    }

    /// Insert a relationship; returns false when an equal one was present
    pub fn add(&mut self, relationship: RefactoringRelationship) -> bool {
        self.refactorings.insert(relationship)
    }

    /// Insert many relationships
    pub fn add_all<I>(&mut self, relationships: I)
    where
        I: IntoIterator<Item = RefactoringRelationship>,
    {
        self.refactorings.extend(relationships);
    }

    /// Members in relationship order
    pub fn refactorings(&self) -> &BTreeSet<RefactoringRelationship> {
        &self.refactorings
    }

    /// Iterate over members in relationship order
    pub fn iter(&self) -> btree_set::Iter<'_, RefactoringRelationship> {
        self.refactorings.iter()
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.refactorings.len()
    }

    /// True when the set has no members
    pub fn is_empty(&self) -> bool {
        self.refactorings.is_empty()
    }

    /// Membership by value
    pub fn contains(&self, relationship: &RefactoringRelationship) -> bool {
        self.refactorings.contains(relationship)
    }

    /// New set without the members whose category is in `excluded`
    pub fn ignoring(&self, excluded: &CategorySet) -> Self {
        self.with_members(
            self.refactorings
                .iter()
                .filter(|r| !excluded.contains(&r.category()))
                .cloned(),
        )
    }

    /// New set restricted to the given categories
    pub fn only(&self, categories: &CategorySet) -> Self {
        self.ignoring(&RefactoringCategory::complement(categories))
    }

    /// New set with parameter lists stripped from every entity
    ///
    /// With `ignore` false this is a plain copy. Relationships whose
    /// entities consist of nothing but a parameter list are dropped.
    pub fn ignoring_method_parameters(&self, ignore: bool) -> Self {
        if !ignore {
            return self.clone();
        }
        self.with_members(
            self.refactorings
                .iter()
                .filter_map(RefactoringRelationship::without_parameters),
        )
    }

    /// Coarsened view: one representative per (category, primary entity)
    pub fn coarsened(&self) -> Self {
        self.with_members(self.refactorings.iter().map(RefactoringRelationship::grouped))
    }

    /// Grade `candidate` against this set, which acts as the oracle
    pub fn diff(&self, candidate: &RefactoringSet) -> SetDiff {
        SetDiff {
            true_positives: self
                .refactorings
                .intersection(&candidate.refactorings)
                .cloned()
                .collect(),
            false_positives: candidate
                .refactorings
                .difference(&self.refactorings)
                .cloned()
                .collect(),
            false_negatives: self
                .refactorings
                .difference(&candidate.refactorings)
                .cloned()
                .collect(),
        }
    }

    fn with_members<I>(&self, members: I) -> Self
    where
        I: IntoIterator<Item = RefactoringRelationship>,
    {
        Self {
            project: self.project.clone(),
            revision: self.revision.clone(),
            refactorings: members.into_iter().collect(),
        }
    }
}

impl Extend<RefactoringRelationship> for RefactoringSet {
    fn extend<I: IntoIterator<Item = RefactoringRelationship>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<'a> IntoIterator for &'a RefactoringSet {
    type Item = &'a RefactoringRelationship;
    type IntoIter = btree_set::Iter<'a, RefactoringRelationship>;

    fn into_iter(self) -> Self::IntoIter {
        self.refactorings.iter()
    }
}
