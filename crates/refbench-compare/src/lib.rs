//! refbench Compare
//!
//! Grades refactoring detectors against a hand-curated oracle.
//!
//! # Overview
//!
//! The [`ResultComparator`] holds one oracle set per (project, revision) and
//! candidate sets per (project, revision, group). For a group it reports
//! true/false positives and false negatives, overall and per category,
//! with precision, recall and F1.
//!
//! - **Filtering**: only the categories asked for take part
//! - **Coarsening**: optionally one unit per (category, before entity)
//! - **Near misses**: configurable forgiveness for side effects of
//!   class-level refactorings the oracle already lists
//! - **Known-absent revisions**: relationships a tool must not report
//!
//! # Usage
//!
//! ```
//! use refbench_compare::{ComparatorConfig, ResultComparator};
//! use refbench_domain::{RefactoringCategory, RefactoringRelationship, RefactoringSet};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut oracle = RefactoringSet::new("https://github.com/x/y.git", "abc");
//! oracle.add(RefactoringRelationship::new(
//!     RefactoringCategory::RenameMethod,
//!     "a.B#m()",
//!     "a.B#n()",
//! )?);
//! let found = oracle.clone();
//!
//! let mut comparator = ResultComparator::new(ComparatorConfig::default());
//! comparator.expect([oracle]).compare_with("tool", [found]);
//!
//! let result = comparator.compare_result("tool", false, &RefactoringCategory::all());
//! assert_eq!(result.tp_count(), 1);
//! assert_eq!(result.precision(), 1.0);
//!
//! comparator.print_summary(&mut std::io::stdout(), &RefactoringCategory::all())?;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! group_refactorings = false
//! ignore_method_params = false
//! ignore_pull_up_to_extracted_supertype = true
//! ignore_move_to_moved_type = false
//! ignore_move_to_renamed_type = false
//! decimals = 3
//! ```

#![warn(missing_docs)]

mod comparator;
mod config;
mod error;
mod metrics;
mod report;
pub mod suppression;

pub use comparator::{pair_id, ResultComparator};
pub use config::ComparatorConfig;
pub use error::CompareError;
pub use metrics::{f1, precision, recall, CompareResult, Counts};
pub use report::{result_line, CategoryRow, GroupSummary};
