//! Near-miss false positives
//!
//! A detector can report a member refactoring that is a side effect of a
//! class-level refactoring the oracle already lists, e.g. a pull-up into a
//! superclass that was itself extracted in the same commit. These checks
//! recognise such cases against the unfiltered oracle of the revision.

use refbench_domain::signature::parent_of;
use refbench_domain::{RefactoringCategory, RefactoringRelationship, RefactoringSet};

fn expects(
    oracle: &RefactoringSet,
    category: RefactoringCategory,
    before: Option<&str>,
    after: Option<&str>,
) -> bool {
    match (before, after) {
        (Some(before), Some(after)) => RefactoringRelationship::new(category, before, after)
            .map(|r| oracle.contains(&r))
            .unwrap_or(false),
        _ => false,
    }
}

fn parents(r: &RefactoringRelationship) -> (Option<&str>, Option<&str>) {
    (parent_of(r.entity_before()), parent_of(r.entity_after()))
}

fn grandparents(r: &RefactoringRelationship) -> (Option<&str>, Option<&str>) {
    let (before, after) = parents(r);
    (before.and_then(parent_of), after.and_then(parent_of))
}

fn is_member_move(r: &RefactoringRelationship) -> bool {
    matches!(
        r.category(),
        RefactoringCategory::MoveMethod | RefactoringCategory::MoveAttribute
    )
}

fn parents_extracted(r: &RefactoringRelationship, oracle: &RefactoringSet) -> bool {
    let (before, after) = parents(r);
    expects(oracle, RefactoringCategory::ExtractSuperclass, before, after)
        || expects(oracle, RefactoringCategory::ExtractInterface, before, after)
}

/// A pull-up whose classes match an expected extract superclass or interface
pub fn is_pull_up_to_extracted_supertype(
    r: &RefactoringRelationship,
    oracle: &RefactoringSet,
) -> bool {
    matches!(
        r.category(),
        RefactoringCategory::PullUpMethod | RefactoringCategory::PullUpAttribute
    ) && parents_extracted(r, oracle)
}

/// A member move whose classes, or their containers, match an expected rename
pub fn is_move_to_renamed_type(r: &RefactoringRelationship, oracle: &RefactoringSet) -> bool {
    if !is_member_move(r) {
        return false;
    }
    let (before, after) = parents(r);
    let (outer_before, outer_after) = grandparents(r);
    expects(oracle, RefactoringCategory::RenameClass, before, after)
        || expects(oracle, RefactoringCategory::RenameClass, outer_before, outer_after)
}

/// A member move whose classes, or their containers, match an expected class
/// move, or whose classes match a moved source folder
pub fn is_move_to_moved_type(r: &RefactoringRelationship, oracle: &RefactoringSet) -> bool {
    if !is_member_move(r) {
        return false;
    }
    let (before, after) = parents(r);
    let (outer_before, outer_after) = grandparents(r);
    expects(oracle, RefactoringCategory::MoveClass, before, after)
        || expects(oracle, RefactoringCategory::MoveClass, outer_before, outer_after)
        || expects(oracle, RefactoringCategory::MoveSourceFolder, before, after)
}

/// Tags explaining why a false positive may be a near miss
pub fn annotations(r: &RefactoringRelationship, oracle: &RefactoringSet) -> String {
    let mut tags = String::new();
    if is_pull_up_to_extracted_supertype(r, oracle) {
        tags.push_str("<ES>");
    }
    if is_move_to_renamed_type(r, oracle) {
        tags.push_str("<RT>");
    }
    if is_move_to_moved_type(r, oracle) {
        tags.push_str("<MT>");
    }
    if is_member_move(r) {
        let (before, after) = parents(r);
        if expects(oracle, RefactoringCategory::ExtractSuperclass, before, after) {
            tags.push_str("<ES>");
        }
        if expects(oracle, RefactoringCategory::ExtractInterface, before, after) {
            tags.push_str("<ES>");
        }

        let same = (Some(r.entity_before()), Some(r.entity_after()));
        let hierarchy_moves = [
            (RefactoringCategory::PullUpAttribute, "<PUF>"),
            (RefactoringCategory::PushDownAttribute, "<PDF>"),
            (RefactoringCategory::PullUpMethod, "<PUM>"),
            (RefactoringCategory::PushDownMethod, "<PDM>"),
        ];
        for (category, tag) in hierarchy_moves {
            if expects(oracle, category, same.0, same.1) {
                tags.push_str(tag);
            }
        }
    }
    tags
}
