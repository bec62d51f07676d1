//! Line encoding of relationship sets and the directory-backed result cache
//!
//! One relationship per line, `Display Name<TAB>before<TAB>after`. A cache
//! file holds the detector output for one (configuration, project, revision);
//! when it exists the detector is not invoked again.

use crate::collector::RefactoringCollector;
use crate::error::ReaderError;
use crate::reader::ResultReader;
use refbench_domain::{
    RefactoringCategory, RefactoringDetector, RefactoringRelationship, RefactoringSet,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Encode a set, one line per relationship in relationship order
pub fn encode(set: &RefactoringSet) -> String {
    let mut out = String::new();
    for relationship in set {
        out.push_str(&relationship.to_string());
        out.push('\n');
    }
    out
}

/// Reader for the line encoding
#[derive(Debug, Clone, Copy, Default)]
pub struct LineReader;

impl LineReader {
    /// Parse one line; blank lines yield `None`
    pub fn parse_line(
        &self,
        line_no: usize,
        line: &str,
    ) -> Result<Option<RefactoringRelationship>, ReaderError> {
        if line.trim().is_empty() {
            return Ok(None);
        }
        let fields: Vec<&str> = line.split('\t').collect();
        let [name, before, after] = fields.as_slice() else {
            return Err(ReaderError::malformed(
                line_no,
                format!("expected 3 tab-separated fields, found {}", fields.len()),
            ));
        };
        let category = RefactoringCategory::from_name(name)?;
        Ok(Some(RefactoringRelationship::new(category, before, after)?))
    }
}

impl ResultReader for LineReader {
    fn format_name(&self) -> &'static str {
        "lines"
    }

    fn read(
        &self,
        project: &str,
        revision: &str,
        source: &str,
    ) -> Result<RefactoringSet, ReaderError> {
        let mut set = RefactoringSet::new(project, revision);
        for (idx, line) in source.lines().enumerate() {
            if let Some(relationship) = self.parse_line(idx + 1, line)? {
                set.add(relationship);
            }
        }
        Ok(set)
    }
}

/// Last path segment of a clone URL without its extension
///
/// `https://github.com/x/atmosphere.git` becomes `atmosphere`.
pub fn project_name(project: &str) -> &str {
    let trimmed = project.trim_end_matches('/');
    let segment = trimmed.rsplit('/').next().unwrap_or(trimmed);
    match segment.rfind('.') {
        Some(dot) if dot > 0 => &segment[..dot],
        _ => segment,
    }
}

/// Directory of cached detector results
#[derive(Debug, Clone)]
pub struct ResultCache {
    dir: PathBuf,
}

impl ResultCache {
    /// Cache rooted at `dir`; the directory is created on first save
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Root directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding the result of `config_id` on (project, revision)
    pub fn path_for(&self, config_id: &str, project: &str, revision: &str) -> PathBuf {
        self.dir
            .join(format!("{}-{}-{}", config_id, project_name(project), revision))
    }

    /// Cached result, if present
    pub fn load(
        &self,
        config_id: &str,
        project: &str,
        revision: &str,
    ) -> Result<Option<RefactoringSet>, ReaderError> {
        let path = self.path_for(config_id, project, revision);
        if !path.exists() {
            return Ok(None);
        }
        LineReader.read_file(project, revision, &path).map(Some)
    }

    /// Store a result
    pub fn save(&self, config_id: &str, set: &RefactoringSet) -> Result<PathBuf, ReaderError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(config_id, set.project(), set.revision());
        fs::write(&path, encode(set))?;
        debug!(path = %path.display(), count = set.len(), "Saved result");
        Ok(path)
    }

    /// Result of `detector` on (project, revision), computed at most once
    pub fn collect<D: RefactoringDetector>(
        &self,
        detector: &D,
        project: &str,
        revision: &str,
    ) -> Result<RefactoringSet, ReaderError> {
        let config_id = detector.config_id();
        if let Some(set) = self.load(config_id, project, revision)? {
            info!(config_id, project, revision, "Cache hit");
            return Ok(set);
        }

        info!(config_id, project, revision, "Cache miss, running detector");
        let mut collector = RefactoringCollector::new(project, revision);
        detector
            .detect_at_commit(project, revision, &mut collector)
            .map_err(|e| ReaderError::Detector(e.to_string()))?;
        let set = collector.into_result()?;
        self.save(config_id, &set)?;
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refbench_domain::{DetectedRefactoring, RefactoringHandler};
    use std::cell::Cell;
    use tempfile::TempDir;

    struct CountingDetector {
        calls: Cell<usize>,
    }

    impl RefactoringDetector for CountingDetector {
        type Error = String;

        fn config_id(&self) -> &str {
            "rm-default"
        }

        fn detect_at_commit(
            &self,
            _project: &str,
            revision: &str,
            handler: &mut dyn RefactoringHandler,
        ) -> Result<(), String> {
            self.calls.set(self.calls.get() + 1);
            handler.handle(
                revision,
                &[DetectedRefactoring::RenameClass {
                    original_class: "a.Old".to_string(),
                    renamed_class: "a.New".to_string(),
                }],
            );
            Ok(())
        }
    }

    #[test]
    fn test_project_name() {
        assert_eq!(project_name("https://github.com/x/atmosphere.git"), "atmosphere");
        assert_eq!(project_name("https://github.com/x/atmosphere/"), "atmosphere");
        assert_eq!(project_name("local"), "local");
    }

    #[test]
    fn test_encode_then_read() {
        let mut set = RefactoringSet::new("p", "r");
        set.add(
            RefactoringRelationship::new(RefactoringCategory::MoveAttribute, "a.A#f", "b.B#f")
                .unwrap(),
        );
        let text = encode(&set);
        assert_eq!(text, "Move Attribute\ta.A.f\tb.B.f\n");
        assert_eq!(LineReader.read("p", "r", &text).unwrap(), set);
    }

    #[test]
    fn test_malformed_line() {
        let err = LineReader.read("p", "r", "\nMove Class\ta.X\n").unwrap_err();
        assert!(matches!(err, ReaderError::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_collect_runs_detector_once() {
        let dir = TempDir::new().unwrap();
        let cache = ResultCache::new(dir.path().join("cache"));
        let detector = CountingDetector { calls: Cell::new(0) };
        let project = "https://github.com/x/atmosphere.git";

        let first = cache.collect(&detector, project, "cc2b3f1").unwrap();
        let second = cache.collect(&detector, project, "cc2b3f1").unwrap();

        assert_eq!(detector.calls.get(), 1);
        assert_eq!(first, second);
        assert!(dir
            .path()
            .join("cache")
            .join("rm-default-atmosphere-cc2b3f1")
            .exists());
    }

    #[test]
    fn test_detector_failure_not_cached() {
        struct Failing;
        impl RefactoringDetector for Failing {
            type Error = String;
            fn config_id(&self) -> &str {
                "broken"
            }
            fn detect_at_commit(
                &self,
                _project: &str,
                _revision: &str,
                _handler: &mut dyn RefactoringHandler,
            ) -> Result<(), String> {
                Err("checkout failed".to_string())
            }
        }

        let dir = TempDir::new().unwrap();
        let cache = ResultCache::new(dir.path());
        let err = cache.collect(&Failing, "p", "r").unwrap_err();
        assert!(matches!(err, ReaderError::Detector(_)));
        assert!(cache.load("broken", "p", "r").unwrap().is_none());
    }
}
