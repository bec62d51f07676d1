//! Compare results and precision/recall/F1
//!
//! All three metrics are 0.0 whenever there are no true positives, even
//! when there are no false positives or false negatives either.

use refbench_domain::{RefactoringCategory, RefactoringRelationship};
use serde::Serialize;
use std::collections::BTreeSet;

/// TP / (TP + FP), or 0.0 when TP is 0
pub fn precision(tp: usize, fp: usize, _fn_count: usize) -> f64 {
    if tp == 0 {
        0.0
    } else {
        tp as f64 / (tp + fp) as f64
    }
}

/// TP / (TP + FN), or 0.0 when TP is 0
pub fn recall(tp: usize, _fp: usize, fn_count: usize) -> f64 {
    if tp == 0 {
        0.0
    } else {
        tp as f64 / (tp + fn_count) as f64
    }
}

/// Harmonic mean of precision and recall, or 0.0 when TP is 0
pub fn f1(tp: usize, fp: usize, fn_count: usize) -> f64 {
    if tp == 0 {
        return 0.0;
    }
    let p = precision(tp, fp, fn_count);
    let r = recall(tp, fp, fn_count);
    2.0 * p * r / (p + r)
}

/// Raw counts with their derived metrics
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Counts {
    /// Size of the oracle, TP + FN
    pub expected: usize,
    /// True positives
    pub tp: usize,
    /// False positives
    pub fp: usize,
    /// False negatives
    #[serde(rename = "fn")]
    pub fn_count: usize,
    /// Precision
    pub precision: f64,
    /// Recall
    pub recall: f64,
    /// F1 score
    pub f1: f64,
}

impl Counts {
    /// Derive the metrics from raw counts
    pub fn new(tp: usize, fp: usize, fn_count: usize) -> Self {
        Self {
            expected: tp + fn_count,
            tp,
            fp,
            fn_count,
            precision: precision(tp, fp, fn_count),
            recall: recall(tp, fp, fn_count),
            f1: f1(tp, fp, fn_count),
        }
    }

    /// True when nothing was expected, found or missed
    pub fn is_empty(&self) -> bool {
        self.tp == 0 && self.fp == 0 && self.fn_count == 0
    }
}

/// Aggregated outcome of grading one group
///
/// Relationships from different revisions are pooled by value, so two
/// revisions reporting an identical relationship contribute it once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareResult {
    /// Expected and reported
    pub true_positives: BTreeSet<RefactoringRelationship>,
    /// Reported but not expected, after suppressions
    pub false_positives: BTreeSet<RefactoringRelationship>,
    /// Expected but not reported
    pub false_negatives: BTreeSet<RefactoringRelationship>,
    /// Known absent and not reported
    pub true_negatives: BTreeSet<RefactoringRelationship>,
}

impl CompareResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool two results
    pub fn merge(mut self, other: CompareResult) -> Self {
        self.true_positives.extend(other.true_positives);
        self.false_positives.extend(other.false_positives);
        self.false_negatives.extend(other.false_negatives);
        self.true_negatives.extend(other.true_negatives);
        self
    }

    /// Number of true positives
    pub fn tp_count(&self) -> usize {
        self.true_positives.len()
    }

    /// Number of false positives
    pub fn fp_count(&self) -> usize {
        self.false_positives.len()
    }

    /// Number of false negatives
    pub fn fn_count(&self) -> usize {
        self.false_negatives.len()
    }

    /// Number of true negatives
    pub fn tn_count(&self) -> usize {
        self.true_negatives.len()
    }

    /// True positives of one category
    pub fn tp_count_of(&self, category: RefactoringCategory) -> usize {
        count_of(&self.true_positives, category)
    }

    /// False positives of one category
    pub fn fp_count_of(&self, category: RefactoringCategory) -> usize {
        count_of(&self.false_positives, category)
    }

    /// False negatives of one category
    pub fn fn_count_of(&self, category: RefactoringCategory) -> usize {
        count_of(&self.false_negatives, category)
    }

    /// Overall precision
    pub fn precision(&self) -> f64 {
        precision(self.tp_count(), self.fp_count(), self.fn_count())
    }

    /// Overall recall
    pub fn recall(&self) -> f64 {
        recall(self.tp_count(), self.fp_count(), self.fn_count())
    }

    /// Overall F1
    pub fn f1(&self) -> f64 {
        f1(self.tp_count(), self.fp_count(), self.fn_count())
    }

    /// Overall counts
    pub fn counts(&self) -> Counts {
        Counts::new(self.tp_count(), self.fp_count(), self.fn_count())
    }

    /// Counts restricted to one category
    pub fn counts_of(&self, category: RefactoringCategory) -> Counts {
        Counts::new(
            self.tp_count_of(category),
            self.fp_count_of(category),
            self.fn_count_of(category),
        )
    }
}

fn count_of(set: &BTreeSet<RefactoringRelationship>, category: RefactoringCategory) -> usize {
    set.iter().filter(|r| r.category() == category).count()
}
