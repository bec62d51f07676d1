//! refbench Domain Layer
//!
//! Value types for grading refactoring detectors against a hand-curated
//! oracle. Tools print the same code entity in different ways; everything
//! here is built so that equivalent facts compare equal no matter which
//! tool produced them.
//!
//! ## Key Concepts
//!
//! - **Category**: the closed vocabulary of refactoring kinds
//! - **Signature normalization**: one canonical spelling per code entity
//! - **Relationship**: a single (category, before, after) fact
//! - **Set**: the relationships of one (project, revision), with diff and filtering
//! - **Detector traits**: the boundary to the external detection engine
//!
//! This crate has no I/O; readers and the comparator live in other crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod detected;
pub mod error;
pub mod relationship;
pub mod set;
pub mod signature;
pub mod traits;

// Re-exports for convenience
pub use category::{CategorySet, RefactoringCategory};
pub use detected::{AttributeRef, DetectedRefactoring, MethodRef};
pub use error::DomainError;
pub use relationship::{RefactoringRelationship, GROUPED_ENTITY};
pub use set::{RefactoringSet, SetDiff};
pub use traits::{RefactoringDetector, RefactoringHandler};
