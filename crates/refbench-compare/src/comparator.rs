//! The comparison engine
//!
//! Holds one oracle set per (project, revision) and any number of candidate
//! sets per (project, revision, group). Grading a group folds the outcome
//! of every revision that has both an oracle and a candidate for that group
//! into one [`CompareResult`].

use crate::config::ComparatorConfig;
use crate::metrics::CompareResult;
use crate::suppression;
use indexmap::{IndexMap, IndexSet};
use refbench_domain::{CategorySet, RefactoringCategory, RefactoringRelationship, RefactoringSet};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, info};

/// Identity of a (project, revision) pair: the project URL without `.git`,
/// then `/commit/`, then the revision
pub fn pair_id(project: &str, revision: &str) -> String {
    let project = project.strip_suffix(".git").unwrap_or(project);
    format!("{}/commit/{}", project, revision)
}

/// Grades candidate result sets against an oracle
#[derive(Debug, Clone, Default)]
pub struct ResultComparator {
    config: ComparatorConfig,
    groups: IndexSet<String>,
    expected: IndexMap<String, RefactoringSet>,
    not_expected: IndexMap<String, RefactoringSet>,
    results: HashMap<(String, String), RefactoringSet>,
}

impl ResultComparator {
    /// Create an empty comparator
    pub fn new(config: ComparatorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Active configuration
    pub fn config(&self) -> &ComparatorConfig {
        &self.config
    }

    /// Register oracle sets; a later set for the same pair replaces the earlier one
    pub fn expect<I>(&mut self, sets: I) -> &mut Self
    where
        I: IntoIterator<Item = RefactoringSet>,
    {
        for set in sets {
            let id = pair_id(set.project(), set.revision());
            debug!(pair = %id, count = set.len(), "Expecting");
            self.expected.insert(id, set);
        }
        self
    }

    /// Register relationships known to be absent from their revision
    pub fn dont_expect<I>(&mut self, sets: I) -> &mut Self
    where
        I: IntoIterator<Item = RefactoringSet>,
    {
        for set in sets {
            let id = pair_id(set.project(), set.revision());
            debug!(pair = %id, count = set.len(), "Not expecting");
            self.not_expected.insert(id, set);
        }
        self
    }

    /// Register candidate sets under `group`
    pub fn compare_with<I>(&mut self, group: &str, sets: I) -> &mut Self
    where
        I: IntoIterator<Item = RefactoringSet>,
    {
        for set in sets {
            self.groups.insert(group.to_string());
            let id = pair_id(set.project(), set.revision());
            debug!(group, pair = %id, count = set.len(), "Comparing with");
            self.results.insert((id, group.to_string()), set);
        }
        self
    }

    /// Groups in registration order
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(String::as_str)
    }

    /// Oracle pairs followed by pairs that only have known-absent sets
    pub fn pair_ids(&self) -> impl Iterator<Item = &str> {
        self.expected.keys().map(String::as_str).chain(
            self.not_expected
                .keys()
                .filter(|id| !self.expected.contains_key(*id))
                .map(String::as_str),
        )
    }

    /// Grade `group` with the configured coarsening
    pub fn compare(&self, group: &str, categories: &CategorySet) -> CompareResult {
        self.compare_result(group, self.config.group_refactorings, categories)
    }

    /// Grade `group` over every oracle pair it has a candidate for
    ///
    /// Only relationships whose category is in `categories` take part. Pairs
    /// without a candidate from `group` are skipped and add nothing, not
    /// even false negatives. Pairs with a known-absent set but no oracle are
    /// not graded; they only show up in the detail report.
    pub fn compare_result(
        &self,
        group: &str,
        coarsen: bool,
        categories: &CategorySet,
    ) -> CompareResult {
        let ignore = RefactoringCategory::complement(categories);
        self.expected
            .keys()
            .map(String::as_str)
            .filter_map(|id| match self.candidate(id, group) {
                Some(actual) => Some(self.grade_pair(id, actual, coarsen, &ignore)),
                None => {
                    info!(group, pair = id, "No result for pair, skipping");
                    None
                }
            })
            .fold(CompareResult::new(), CompareResult::merge)
    }

    pub(crate) fn candidate(&self, id: &str, group: &str) -> Option<&RefactoringSet> {
        self.results.get(&(id.to_string(), group.to_string()))
    }

    pub(crate) fn oracle(&self, id: &str) -> Option<&RefactoringSet> {
        self.expected.get(id)
    }

    pub(crate) fn known_absent(&self, id: &str) -> Option<&RefactoringSet> {
        self.not_expected.get(id)
    }

    /// Filtered, parameter-normalized view of a set
    pub(crate) fn prepare(&self, set: &RefactoringSet, ignore: &CategorySet) -> RefactoringSet {
        set.ignoring(ignore)
            .ignoring_method_parameters(self.config.ignore_method_params)
    }

    /// Oracle of a pair before category filtering
    pub(crate) fn unfiltered_oracle(&self, id: &str) -> RefactoringSet {
        match self.oracle(id) {
            Some(set) => set.ignoring_method_parameters(self.config.ignore_method_params),
            None => RefactoringSet::new("", ""),
        }
    }

    fn grade_pair(
        &self,
        id: &str,
        actual: &RefactoringSet,
        coarsen: bool,
        ignore: &CategorySet,
    ) -> CompareResult {
        let unfiltered = self.unfiltered_oracle(id);
        let expected = unfiltered.ignoring(ignore);
        let candidate = self.prepare(actual, ignore);
        let absent = self.known_absent(id).map(|set| self.prepare(set, ignore));

        let view = |set: &RefactoringSet| if coarsen { set.coarsened() } else { set.clone() };
        let expected_view = view(&expected);
        let candidate_view = view(&candidate);
        let diff = expected_view.diff(&candidate_view);

        let false_positives: BTreeSet<RefactoringRelationship> = diff
            .false_positives
            .into_iter()
            .filter(|r| !self.is_forgiven(r, &candidate, coarsen, &unfiltered))
            .collect();

        let true_negatives = match absent {
            Some(absent) => view(&absent)
                .iter()
                .filter(|r| !candidate_view.contains(r) && !expected_view.contains(r))
                .cloned()
                .collect(),
            None => BTreeSet::new(),
        };

        debug!(
            pair = id,
            tp = diff.true_positives.len(),
            fp = false_positives.len(),
            fn_count = diff.false_negatives.len(),
            tn = true_negatives.len(),
            "Graded pair"
        );

        CompareResult {
            true_positives: diff.true_positives,
            false_positives,
            false_negatives: diff.false_negatives,
            true_negatives,
        }
    }

    /// A coarsened false positive is forgiven only when every relationship
    /// it stands for is
    fn is_forgiven(
        &self,
        r: &RefactoringRelationship,
        candidate: &RefactoringSet,
        coarsen: bool,
        oracle: &RefactoringSet,
    ) -> bool {
        if !coarsen {
            return self.is_near_miss(r, oracle);
        }
        let mut members = candidate.iter().filter(|c| c.grouped() == *r).peekable();
        members.peek().is_some() && members.all(|c| self.is_near_miss(c, oracle))
    }

    fn is_near_miss(&self, r: &RefactoringRelationship, oracle: &RefactoringSet) -> bool {
        (self.config.ignore_move_to_moved_type && suppression::is_move_to_moved_type(r, oracle))
            || (self.config.ignore_move_to_renamed_type
                && suppression::is_move_to_renamed_type(r, oracle))
            || (self.config.ignore_pull_up_to_extracted_supertype
                && suppression::is_pull_up_to_extracted_supertype(r, oracle))
    }
}
