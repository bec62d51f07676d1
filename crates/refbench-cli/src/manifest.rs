//! Benchmark manifests
//!
//! A manifest names the oracle of every revision and the result files each
//! tool produced there:
//!
//! ```toml
//! [[revision]]
//! project = "https://github.com/x/y.git"
//! revision = "abc"
//! expected = "oracle/abc.txt"
//!
//! [[revision.actual]]
//! group = "reffinder"
//! path = "reffinder/abc.txt"
//! format = "tuple"
//!
//! [[revision.actual]]
//! group = "rminer"
//! cached = "rminer-default"
//!
//! [[revision]]
//! project = "https://github.com/x/y.git"
//! revision = "def"
//! none = true
//! not_expected = "oracle/def-absent.txt"
//! ```
//!
//! Relative paths are resolved against the manifest's directory. A revision
//! with `none = true` has an empty oracle, so anything a tool reports there
//! is a false positive. The optional `not_expected` file lists relationships
//! no tool should report at the revision; those feed the true negatives.

use crate::config::Config;
use crate::error::{CliError, Result};
use refbench_compare::{ComparatorConfig, ResultComparator};
use refbench_domain::RefactoringSet;
use refbench_readers::{InputFormat, LineReader, ResultReader};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A parsed manifest
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Overrides the configured comparator settings
    #[serde(default)]
    pub comparator: Option<ComparatorConfig>,

    /// Revisions, in grading order
    #[serde(default, rename = "revision")]
    pub revisions: Vec<RevisionEntry>,

    #[serde(skip)]
    base_dir: PathBuf,
}

/// One graded revision
#[derive(Debug, Clone, Deserialize)]
pub struct RevisionEntry {
    /// Project clone URL
    pub project: String,
    /// Revision identifier
    pub revision: String,
    /// Line-format oracle file
    #[serde(default)]
    pub expected: Option<PathBuf>,
    /// The revision has no refactorings
    #[serde(default)]
    pub none: bool,
    /// Line-format file of relationships known to be absent
    #[serde(default)]
    pub not_expected: Option<PathBuf>,
    /// Tool results at this revision
    #[serde(default, rename = "actual")]
    pub actuals: Vec<ActualEntry>,
}

/// A tool's result at one revision
#[derive(Debug, Clone, Deserialize)]
pub struct ActualEntry {
    /// Group the result is graded under
    pub group: String,
    /// Result file
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Format of `path`
    #[serde(default = "default_format")]
    pub format: String,
    /// Configuration id of a cached detector result, instead of `path`
    #[serde(default)]
    pub cached: Option<String>,
}

fn default_format() -> String {
    "lines".to_string()
}

impl Manifest {
    /// Parse manifest text; relative paths resolve against `base_dir`
    pub fn parse(source: &str, base_dir: impl Into<PathBuf>) -> Result<Self> {
        let mut manifest: Manifest = toml::from_str(source)?;
        manifest.base_dir = base_dir.into();
        manifest.validate()?;
        Ok(manifest)
    }

    /// Read a manifest file
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self::parse(&source, base_dir)
    }

    /// Check that every entry names exactly one source
    pub fn validate(&self) -> Result<()> {
        for entry in &self.revisions {
            if entry.none == entry.expected.is_some() {
                return Err(CliError::InvalidInput(format!(
                    "revision {} of {} needs exactly one of `expected` or `none = true`",
                    entry.revision, entry.project
                )));
            }
            for actual in &entry.actuals {
                if actual.path.is_some() == actual.cached.is_some() {
                    return Err(CliError::InvalidInput(format!(
                        "result of group '{}' at {} needs exactly one of `path` or `cached`",
                        actual.group, entry.revision
                    )));
                }
            }
        }
        if let Some(config) = &self.comparator {
            config.validate()?;
        }
        Ok(())
    }

    /// Comparator settings: the manifest's own, else `fallback`
    pub fn comparator_config(&self, fallback: &ComparatorConfig) -> ComparatorConfig {
        self.comparator.clone().unwrap_or_else(|| fallback.clone())
    }

    /// Read every file and register it with a new comparator
    ///
    /// `settings` supplies the result cache, opened only for `cached` entries.
    pub fn build(&self, config: ComparatorConfig, settings: &Config) -> Result<ResultComparator> {
        let mut comparator = ResultComparator::new(config);
        for entry in &self.revisions {
            comparator.expect([self.read_lines(entry, entry.expected.as_deref())?]);
            if let Some(path) = &entry.not_expected {
                comparator.dont_expect([self.read_lines(entry, Some(path))?]);
            }

            for actual in &entry.actuals {
                let set = self.read_actual(entry, actual, settings)?;
                debug!(group = %actual.group, revision = %entry.revision, count = set.len(), "Loaded result");
                comparator.compare_with(&actual.group, [set]);
            }
        }
        Ok(comparator)
    }

    fn read_lines(&self, entry: &RevisionEntry, path: Option<&Path>) -> Result<RefactoringSet> {
        match path {
            Some(path) => Ok(LineReader.read_file(&entry.project, &entry.revision, &self.resolve(path))?),
            None => Ok(RefactoringSet::new(&entry.project, &entry.revision)),
        }
    }

    fn read_actual(
        &self,
        entry: &RevisionEntry,
        actual: &ActualEntry,
        settings: &Config,
    ) -> Result<RefactoringSet> {
        if let Some(config_id) = &actual.cached {
            return settings
                .cache()?
                .load(config_id, &entry.project, &entry.revision)?
                .ok_or_else(|| {
                    CliError::InvalidInput(format!(
                        "no cached result for {} at {}",
                        config_id, entry.revision
                    ))
                });
        }

        let format: InputFormat = actual.format.parse().map_err(CliError::InvalidInput)?;
        let path = actual.path.as_deref().unwrap_or_else(|| Path::new(""));
        Ok(format
            .reader()
            .read_file(&entry.project, &entry.revision, &self.resolve(path))?)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refbench_domain::RefactoringCategory;
    use refbench_readers::ResultCache;
    use tempfile::TempDir;

    const PROJECT: &str = "https://github.com/x/y.git";

    fn write(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    fn settings(cache_dir: &Path) -> Config {
        Config {
            cache_dir: Some(cache_dir.to_path_buf()),
            ..Config::default()
        }
    }

    #[test]
    fn test_parse_entries() {
        let manifest = Manifest::parse(
            r#"
[comparator]
group_refactorings = true

[[revision]]
project = "https://github.com/x/y.git"
revision = "abc"
expected = "oracle.txt"

[[revision.actual]]
group = "reffinder"
path = "rf.txt"
format = "tuple"

[[revision]]
project = "https://github.com/x/y.git"
revision = "def"
none = true
"#,
            "/bench",
        )
        .unwrap();

        assert_eq!(manifest.revisions.len(), 2);
        assert_eq!(manifest.revisions[0].actuals[0].format, "tuple");
        assert!(manifest.revisions[1].none);
        assert!(manifest.revisions[1].actuals.is_empty());
        let config = manifest.comparator_config(&ComparatorConfig::strict());
        assert!(config.group_refactorings);
        assert_eq!(manifest.resolve(Path::new("rf.txt")), PathBuf::from("/bench/rf.txt"));
    }

    #[test]
    fn test_missing_oracle_rejected() {
        let result = Manifest::parse(
            "[[revision]]\nproject = \"p\"\nrevision = \"r\"\n",
            ".",
        );
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_oracle_and_none_conflict() {
        let result = Manifest::parse(
            "[[revision]]\nproject = \"p\"\nrevision = \"r\"\nexpected = \"o.txt\"\nnone = true\n",
            ".",
        );
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_actual_needs_one_source() {
        let result = Manifest::parse(
            "[[revision]]\nproject = \"p\"\nrevision = \"r\"\nnone = true\n\n[[revision.actual]]\ngroup = \"g\"\n",
            ".",
        );
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_build_reads_every_format() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "oracle.txt", "Rename Method\ta.B#m()\ta.B#n()\nMove Class\ta.X\tb.X\n");
        write(
            dir.path(),
            "rf.txt",
            "rename_method(\"a.B#m()\",\"a.B#n()\",\"a.B\")\n",
        );
        write(
            dir.path(),
            "rm.txt",
            "Move Class a.X moved to b.X\n",
        );

        let manifest = Manifest::parse(
            &format!(
                "[[revision]]\nproject = \"{PROJECT}\"\nrevision = \"abc\"\nexpected = \"oracle.txt\"\n\n\
                 [[revision.actual]]\ngroup = \"rf\"\npath = \"rf.txt\"\nformat = \"tuple\"\n\n\
                 [[revision.actual]]\ngroup = \"rm\"\npath = \"rm.txt\"\nformat = \"description\"\n"
            ),
            dir.path(),
        )
        .unwrap();

        // no `cached` entries, so the cache directory is never consulted
        let unused = Config {
            cache_dir: None,
            ..Config::default()
        };
        let comparator = manifest.build(ComparatorConfig::default(), &unused).unwrap();
        assert_eq!(comparator.groups().collect::<Vec<_>>(), vec!["rf", "rm"]);

        let all = RefactoringCategory::all();
        let rf = comparator.compare("rf", &all);
        assert_eq!((rf.tp_count(), rf.fp_count(), rf.fn_count()), (1, 0, 1));
        let rm = comparator.compare("rm", &all);
        assert_eq!((rm.tp_count(), rm.fp_count(), rm.fn_count()), (1, 0, 1));
    }

    #[test]
    fn test_build_from_cache() {
        let dir = TempDir::new().unwrap();
        let cache = ResultCache::new(dir.path());
        let mut found = RefactoringSet::new(PROJECT, "abc");
        found.add(
            refbench_domain::RefactoringRelationship::new(
                RefactoringCategory::MoveClass,
                "a.X",
                "b.X",
            )
            .unwrap(),
        );
        cache.save("rminer", &found).unwrap();

        let manifest = Manifest::parse(
            &format!(
                "[[revision]]\nproject = \"{PROJECT}\"\nrevision = \"abc\"\nnone = true\n\n\
                 [[revision.actual]]\ngroup = \"rminer\"\ncached = \"rminer\"\n"
            ),
            dir.path(),
        )
        .unwrap();
        let comparator = manifest
            .build(ComparatorConfig::default(), &settings(dir.path()))
            .unwrap();
        let result = comparator.compare("rminer", &RefactoringCategory::all());
        assert_eq!(result.fp_count(), 1);
        assert_eq!(result.fn_count(), 0);
    }

    #[test]
    fn test_missing_cache_entry() {
        let dir = TempDir::new().unwrap();
        let manifest = Manifest::parse(
            &format!(
                "[[revision]]\nproject = \"{PROJECT}\"\nrevision = \"abc\"\nnone = true\n\n\
                 [[revision.actual]]\ngroup = \"rminer\"\ncached = \"rminer\"\n"
            ),
            dir.path(),
        )
        .unwrap();
        assert!(matches!(
            manifest.build(ComparatorConfig::default(), &settings(dir.path())),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_not_expected_counts_true_negatives() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "oracle.txt", "Move Class\ta.X\tb.X\n");
        write(dir.path(), "absent.txt", "Rename Class\ta.Y\ta.Z\nMove Class\ta.Q\tb.Q\n");
        write(dir.path(), "found.txt", "Move Class\ta.X\tb.X\nMove Class\ta.Q\tb.Q\n");

        let manifest = Manifest::parse(
            &format!(
                "[[revision]]\nproject = \"{PROJECT}\"\nrevision = \"abc\"\nexpected = \"oracle.txt\"\n\
                 not_expected = \"absent.txt\"\n\n\
                 [[revision.actual]]\ngroup = \"tool\"\npath = \"found.txt\"\n"
            ),
            dir.path(),
        )
        .unwrap();
        let comparator = manifest
            .build(ComparatorConfig::default(), &settings(dir.path()))
            .unwrap();
        let result = comparator.compare("tool", &RefactoringCategory::all());
        assert_eq!((result.tp_count(), result.fp_count(), result.fn_count()), (1, 1, 0));
        assert_eq!(result.tn_count(), 1);
    }
}
