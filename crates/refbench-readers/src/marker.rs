//! Marker format: `<refactoring name="...">` blocks
//!
//! Only the textual markers are matched; the surrounding document is never
//! parsed. The vocabulary of refactoring names is closed, so a name without
//! a mapping fails the read.

use crate::error::ReaderError;
use crate::reader::ResultReader;
use once_cell::sync::Lazy;
use refbench_domain::{RefactoringCategory, RefactoringRelationship, RefactoringSet};
use regex::Regex;
use tracing::debug;

static BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"<refactoring name="([^"]*)">\s*<parameter name=\s*"new element">([^<]*)</parameter>\s*<parameter name=\s*"old element">([^<]*)</parameter>"#,
    )
    .expect("marker block pattern is valid")
});

/// Category for a marker name
pub fn category_for(name: &str) -> Option<RefactoringCategory> {
    let category = match name {
        "RenamedClasses" => RefactoringCategory::RenameClass,
        "RenamedMethods" => RefactoringCategory::RenameMethod,
        "RenamedPackages" => RefactoringCategory::RenamePackage,
        "MovedMethods" => RefactoringCategory::MoveMethod,
        "MovedFields" => RefactoringCategory::MoveAttribute,
        "PulledUpMethods" => RefactoringCategory::PullUpMethod,
        "PushedDownMethods" => RefactoringCategory::PushDownMethod,
        _ => return None,
    };
    Some(category)
}

/// Element text up to its first `/`
fn element(value: &str) -> &str {
    value.split('/').next().unwrap_or(value).trim()
}

/// Reader for the marker format
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerReader;

impl ResultReader for MarkerReader {
    fn format_name(&self) -> &'static str {
        "marker"
    }

    fn read(
        &self,
        project: &str,
        revision: &str,
        source: &str,
    ) -> Result<RefactoringSet, ReaderError> {
        let mut set = RefactoringSet::new(project, revision);
        for caps in BLOCK.captures_iter(source) {
            let name = &caps[1];
            let category = category_for(name)
                .ok_or_else(|| ReaderError::UnknownCategory(name.to_string()))?;
            let after = element(&caps[2]);
            let before = element(&caps[3]);
            set.add(RefactoringRelationship::new(category, before, after)?);
        }
        debug!(project, revision, count = set.len(), "Read marker blocks");
        Ok(set)
    }
}
