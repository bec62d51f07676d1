//! Integration tests for the refbench CLI
//!
//! Drive the manifest → comparator → formatter pipeline on files in a
//! temporary directory, plus one run of the real binary.

use refbench_cli::commands::compare::parse_categories;
use refbench_cli::config::OutputFormat;
use refbench_cli::{Config, Formatter, Manifest};
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const MANIFEST: &str = r#"
[[revision]]
project = "https://github.com/x/y.git"
revision = "abc"
expected = "oracle/abc.txt"

[[revision.actual]]
group = "crawler"
path = "crawler/abc.xml"
format = "marker"

[[revision.actual]]
group = "reffinder"
path = "reffinder/abc.txt"
format = "tuple"

[[revision]]
project = "https://github.com/x/y.git"
revision = "def"
none = true

[[revision.actual]]
group = "reffinder"
path = "reffinder/def.txt"
format = "tuple"
"#;

fn bench() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    for sub in ["oracle", "crawler", "reffinder"] {
        fs::create_dir_all(root.join(sub)).unwrap();
    }
    write(
        root,
        "oracle/abc.txt",
        "Rename Method\ta.B#m(java.lang.String)\ta.B#n(java.lang.String)\n\
         Move Method\ta.X#f()\tb.Y#f()\n",
    );
    write(
        root,
        "crawler/abc.xml",
        "<refactoring name=\"RenamedMethods\">\n\
         <parameter name= \"new element\">a.B.n(String)</parameter>\n\
         <parameter name= \"old element\">a.B.m(String)</parameter>\n\
         </refactoring>\n",
    );
    write(
        root,
        "reffinder/abc.txt",
        "move_method(\"f()\",\"a%.X\",\"b%.Y\")\nrename_field(\"a\",\"b\")\n",
    );
    write(
        root,
        "reffinder/def.txt",
        "rename_class(\"a%.Old\",\"a%.New\")\n",
    );
    write(root, "bench.toml", MANIFEST);
    dir
}

fn write(root: &Path, name: &str, contents: &str) {
    fs::write(root.join(name), contents).unwrap();
}

#[test]
fn test_manifest_pipeline_text_report() {
    let dir = bench();
    let manifest = Manifest::load(&dir.path().join("bench.toml")).unwrap();
    let mut config = Config::default();
    config.cache_dir = Some(dir.path().join("cache"));

    let comparator = manifest
        .build(manifest.comparator_config(&config.comparator), &config)
        .unwrap();
    let categories = parse_categories(&[]).unwrap();

    let crawler = comparator.compare("crawler", &categories);
    assert_eq!((crawler.tp_count(), crawler.fp_count(), crawler.fn_count()), (1, 0, 1));

    // the revision without refactorings turns the rename into a false positive
    let reffinder = comparator.compare("reffinder", &categories);
    assert_eq!((reffinder.tp_count(), reffinder.fp_count(), reffinder.fn_count()), (1, 1, 1));

    let text = Formatter::new(OutputFormat::Text, false)
        .format_summary(&comparator, &categories)
        .unwrap();
    assert!(text.contains("# crawler #\nTotal  #:   2  TP:   1  FP:   0  FN:   1"));
    assert!(text.contains("# reffinder #\nTotal  #:   2  TP:   1  FP:   1  FN:   1"));
    assert!(text.contains("RC     #:   0  TP:   0  FP:   1  FN:   0"));
}

#[test]
fn test_manifest_pipeline_category_filter() {
    let dir = bench();
    let manifest = Manifest::load(&dir.path().join("bench.toml")).unwrap();
    let comparator = manifest.build(Default::default(), &Config::default()).unwrap();

    let categories = parse_categories(&["MM".to_string()]).unwrap();
    let crawler = comparator.compare("crawler", &categories);
    assert_eq!((crawler.tp_count(), crawler.fp_count(), crawler.fn_count()), (0, 0, 1));

    let json = Formatter::new(OutputFormat::Json, false)
        .format_summary(&comparator, &categories)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[1]["group"], "reffinder");
    assert_eq!(value[1]["total"]["tp"], 1);
    assert_eq!(value[1]["total"]["f1"], 1.0);
}

#[test]
fn test_binary_normalize() {
    let output = Command::new(env!("CARGO_BIN_EXE_refbench"))
        .args(["--format", "text", "--no-color", "normalize", "a.B#m(java.lang.String)"])
        .env("REFBENCH_CONFIG", "/nonexistent/refbench.toml")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "a.B.m(String)");
}

#[test]
fn test_binary_reports_errors() {
    let output = Command::new(env!("CARGO_BIN_EXE_refbench"))
        .args(["compare", "/nonexistent/bench.toml"])
        .env("REFBENCH_CONFIG", "/nonexistent/refbench.toml")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error: "));
}
