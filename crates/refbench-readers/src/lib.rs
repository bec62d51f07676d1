//! refbench Readers
//!
//! Adapters that turn the output of refactoring detectors into
//! [`RefactoringSet`](refbench_domain::RefactoringSet)s.
//!
//! # Formats
//!
//! - **Tuple**: `predicate("a","b",...)` lines; unknown predicates are skipped
//! - **Marker**: `<refactoring name="...">` blocks; unknown names fail the read
//! - **Description**: the detector's one-line summaries
//! - **Lines**: `Display Name<TAB>before<TAB>after`, also the cache encoding
//! - **Dataset**: hand-authored oracle rows with N × M expansion
//! - **Collector**: typed refactorings pushed by a live detector
//!
//! # Example Usage
//!
//! ```
//! use refbench_readers::{ResultReader, TupleReader};
//!
//! let set = TupleReader
//!     .read("https://github.com/x/y.git", "abc", "rename_method(\"a.B#m()\",\"a.B#n()\",\"a.B\")")
//!     .unwrap();
//! assert_eq!(set.len(), 1);
//! ```

#![warn(missing_docs)]

pub mod cache;
pub mod collector;
pub mod dataset;
pub mod description;
mod error;
pub mod marker;
mod reader;
pub mod tuple;

pub use cache::{LineReader, ResultCache};
pub use collector::RefactoringCollector;
pub use dataset::Dataset;
pub use description::DescriptionReader;
pub use error::ReaderError;
pub use marker::MarkerReader;
pub use reader::{InputFormat, ResultReader};
pub use tuple::TupleReader;
