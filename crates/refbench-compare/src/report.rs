//! Plain-text reports

use crate::comparator::ResultComparator;
use crate::error::CompareError;
use crate::metrics::Counts;
use crate::suppression;
use refbench_domain::{CategorySet, RefactoringCategory, RefactoringRelationship};
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::Write;

/// Detail labels, indexed by `expected * 2 + found`
const LABELS: [&str; 4] = ["TN", "FP", "FN", "TP"];

/// Counts of one category within a group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRow {
    /// Report column label, e.g. "MM"
    pub abbreviation: String,
    /// Display name
    pub category: String,
    /// Counts and metrics
    #[serde(flatten)]
    pub counts: Counts,
}

/// Overall and per-category counts of one group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    /// Group identifier
    pub group: String,
    /// Counts over all considered categories
    pub total: Counts,
    /// Categories with at least one TP, FP or FN, in category order
    pub categories: Vec<CategoryRow>,
}

/// One summary line, e.g. `#:   2  TP:   1  FP:   0  FN:   1  Prec.: 1.000  ...`
pub fn result_line(counts: &Counts, decimals: usize) -> String {
    format!(
        "#: {:3}  TP: {:3}  FP: {:3}  FN: {:3}  Prec.: {:.d$}  Recall: {:.d$}  F1: {:.d$}",
        counts.expected,
        counts.tp,
        counts.fp,
        counts.fn_count,
        counts.precision,
        counts.recall,
        counts.f1,
        d = decimals
    )
}

impl ResultComparator {
    /// Summaries of every group, in registration order
    pub fn summaries(&self, categories: &CategorySet) -> Vec<GroupSummary> {
        self.groups()
            .map(|group| {
                let result = self.compare(group, categories);
                let rows = categories
                    .iter()
                    .map(|&category| (category, result.counts_of(category)))
                    .filter(|(_, counts)| !counts.is_empty())
                    .map(|(category, counts)| CategoryRow {
                        abbreviation: category.abbreviation(),
                        category: category.display_name().to_string(),
                        counts,
                    })
                    .collect();
                GroupSummary {
                    group: group.to_string(),
                    total: result.counts(),
                    categories: rows,
                }
            })
            .collect()
    }

    /// Write the per-group totals and the non-empty category lines
    pub fn print_summary<W: Write>(
        &self,
        out: &mut W,
        categories: &CategorySet,
    ) -> Result<(), CompareError> {
        let decimals = self.config().decimals;
        for summary in self.summaries(categories) {
            writeln!(out, "# {} #", summary.group)?;
            writeln!(out, "Total  {}", result_line(&summary.total, decimals))?;
            for row in &summary.categories {
                writeln!(
                    out,
                    "{:<7}{}",
                    row.abbreviation,
                    result_line(&row.counts, decimals)
                )?;
            }
            writeln!(out)?;
        }
        writeln!(out)?;
        Ok(())
    }

    /// Write every relationship of every revision with one label per group
    pub fn print_details<W: Write>(
        &self,
        out: &mut W,
        categories: &CategorySet,
    ) -> Result<(), CompareError> {
        let ignore = RefactoringCategory::complement(categories);
        let groups: Vec<&str> = self.groups().collect();

        let mut header = String::from("Ref Type\tEntity before\tEntity after");
        for group in &groups {
            header.push('\t');
            header.push_str(group);
        }
        let mut header_printed = false;

        for id in self.pair_ids() {
            if !header_printed {
                writeln!(out, "{}", header)?;
                header_printed = true;
            }

            let unfiltered = self.unfiltered_oracle(id);
            let expected = unfiltered.ignoring(&ignore);
            let candidates: Vec<_> = groups
                .iter()
                .map(|group| self.candidate(id, group).map(|set| self.prepare(set, &ignore)))
                .collect();

            let mut all: BTreeSet<RefactoringRelationship> = expected.refactorings().clone();
            if let Some(absent) = self.known_absent(id) {
                all.extend(self.prepare(absent, &ignore).iter().cloned());
            }
            for candidate in candidates.iter().flatten() {
                all.extend(candidate.iter().cloned());
            }
            if all.is_empty() {
                continue;
            }

            writeln!(out, "{}", id)?;
            for r in &all {
                write!(out, "{}", r)?;
                for candidate in &candidates {
                    write!(out, "\t")?;
                    let Some(candidate) = candidate else {
                        continue;
                    };
                    let correct = usize::from(expected.contains(r));
                    let found = usize::from(candidate.contains(r));
                    let label = LABELS[correct * 2 + found];
                    write!(out, "{}", label)?;
                    if label == "FP" {
                        write!(out, "{}", suppression::annotations(r, &unfiltered))?;
                    }
                }
                writeln!(out)?;
            }
        }
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ComparatorConfig;
    use refbench_domain::RefactoringSet;
    use RefactoringCategory::*;

    const PROJECT: &str = "https://github.com/x/y.git";

    fn rel(category: RefactoringCategory, before: &str, after: &str) -> RefactoringRelationship {
        RefactoringRelationship::new(category, before, after).unwrap()
    }

    fn set(rels: Vec<RefactoringRelationship>) -> RefactoringSet {
        let mut s = RefactoringSet::new(PROJECT, "abc");
        s.add_all(rels);
        s
    }

    fn comparator() -> ResultComparator {
        let mut c = ResultComparator::new(ComparatorConfig::strict());
        c.expect([set(vec![
            rel(RenameMethod, "a.B.m()", "a.B.n()"),
            rel(MoveClass, "a.X", "b.X"),
        ])])
        .compare_with(
            "rm",
            [set(vec![
                rel(RenameMethod, "a.B.m()", "a.B.n()"),
                rel(MoveMethod, "a.X.m()", "b.X.m()"),
            ])],
        )
        .compare_with("rc", [set(vec![])]);
        c
    }

    #[test]
    fn test_result_line() {
        let line = result_line(&Counts::new(1, 0, 1), 3);
        assert_eq!(
            line,
            "#:   2  TP:   1  FP:   0  FN:   1  Prec.: 1.000  Recall: 0.500  F1: 0.667"
        );
    }

    #[test]
    fn test_print_summary() {
        let mut out = Vec::new();
        comparator()
            .print_summary(&mut out, &RefactoringCategory::all())
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "# rm #");
        assert!(lines[1].starts_with("Total  #:   2  TP:   1  FP:   1  FN:   1"));
        assert!(lines[2].starts_with("MC     #:   1  TP:   0"));
        assert!(lines[3].starts_with("RM     #:   1  TP:   1"));
        assert!(lines[4].starts_with("MM     #:   0  TP:   0  FP:   1"));
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "# rc #");
        assert!(lines[7].contains("Prec.: 0.000"));
    }

    #[test]
    fn test_summaries_skip_empty_categories() {
        let summaries = comparator().summaries(&RefactoringCategory::all());
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].categories.len(), 3);
        assert_eq!(summaries[1].group, "rc");
        assert_eq!(summaries[1].total.fn_count, 2);
    }

    #[test]
    fn test_print_details() {
        let mut out = Vec::new();
        comparator()
            .print_details(&mut out, &RefactoringCategory::all())
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Ref Type\tEntity before\tEntity after\trm\trc");
        assert_eq!(lines[1], "https://github.com/x/y/commit/abc");
        assert_eq!(lines[2], "Rename Method\ta.B.m()\ta.B.n()\tTP\tFN");
        assert_eq!(lines[3], "Move Class\ta.X\tb.X\tFN\tFN");
        assert_eq!(lines[4], "Move Method\ta.X.m()\tb.X.m()\tFP<MT>\tTN");
    }
}
