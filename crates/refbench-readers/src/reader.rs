//! The common read interface shared by the text formats

use crate::error::ReaderError;
use refbench_domain::RefactoringSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// A parser for one external result format
pub trait ResultReader {
    /// Short name of the format, used in logs
    fn format_name(&self) -> &'static str;

    /// Parse `source` into the relationships of one revision
    fn read(&self, project: &str, revision: &str, source: &str)
        -> Result<RefactoringSet, ReaderError>;

    /// Read and parse a file
    fn read_file(
        &self,
        project: &str,
        revision: &str,
        path: &Path,
    ) -> Result<RefactoringSet, ReaderError> {
        let source = std::fs::read_to_string(path)?;
        self.read(project, revision, &source)
    }
}

/// Text formats understood by the readers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// `Display Name<TAB>before<TAB>after` lines, the cache encoding
    Lines,
    /// `predicate("a","b",...)` lines
    Tuple,
    /// `<refactoring name="...">` blocks
    Marker,
    /// Detector description lines
    Description,
}

impl InputFormat {
    /// Reader for this format
    pub fn reader(&self) -> Box<dyn ResultReader> {
        match self {
            InputFormat::Lines => Box::new(crate::cache::LineReader),
            InputFormat::Tuple => Box::new(crate::tuple::TupleReader),
            InputFormat::Marker => Box::new(crate::marker::MarkerReader),
            InputFormat::Description => Box::new(crate::description::DescriptionReader),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputFormat::Lines => "lines",
            InputFormat::Tuple => "tuple",
            InputFormat::Marker => "marker",
            InputFormat::Description => "description",
        };
        f.write_str(name)
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lines" => Ok(InputFormat::Lines),
            "tuple" | "reffinder" => Ok(InputFormat::Tuple),
            "marker" | "crawler" => Ok(InputFormat::Marker),
            "description" => Ok(InputFormat::Description),
            other => Err(format!("Unknown input format: {}", other)),
        }
    }
}
