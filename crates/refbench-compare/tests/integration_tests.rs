//! Integration tests for refbench-compare
//!
//! Oracles and candidates come through the readers, the way a benchmark
//! run assembles them.

use refbench_compare::{ComparatorConfig, ResultComparator};
use refbench_domain::{CategorySet, RefactoringCategory};
use refbench_readers::dataset::{atmosphere_cc2b3f1, Dataset};
use refbench_readers::{MarkerReader, ResultReader, TupleReader};

const ATMOSPHERE: &str = "https://github.com/aserg-ufmg/atmosphere.git";

#[test]
fn test_tuple_candidate_against_dataset_oracle() {
    let mut dataset = Dataset::new();
    dataset
        .at("https://github.com/x/y.git", "r1")
        .item("Rename Method", "a.B#m()", "a.B#n()")
        .unwrap()
        .item("Move Class", "x.Y", "z.Y")
        .unwrap();

    let candidate = TupleReader
        .read(
            "https://github.com/x/y.git",
            "r1",
            "rename_method(\"a.B#m()\",\"a.B#n()\",\"a.B\")\nextract_method(\"a.B#m()\",\"a.B#e()\",\"a.B\")",
        )
        .unwrap();

    let mut comparator = ResultComparator::default();
    comparator
        .expect(dataset.into_sets())
        .compare_with("reffinder", [candidate]);

    let r = comparator.compare_result("reffinder", false, &RefactoringCategory::all());
    assert_eq!((r.tp_count(), r.fp_count(), r.fn_count()), (1, 1, 1));
    assert_eq!(r.precision(), 0.5);
    assert_eq!(r.recall(), 0.5);
    assert_eq!(r.f1(), 0.5);
}

#[test]
fn test_several_tools_on_atmosphere() {
    let oracle = atmosphere_cc2b3f1().unwrap();

    let crawler = MarkerReader
        .read(
            ATMOSPHERE,
            "cc2b3f1",
            "<refactoring name=\"RenamedClasses\">\n\
             <parameter name= \"new element\">org.atmosphere.jersey.ResourceTest</parameter>\n\
             <parameter name= \"old element\">org.atmosphere.jersey.TestResource</parameter>\n\
             </refactoring>\n\
             <refactoring name=\"RenamedMethods\">\n\
             <parameter name= \"new element\">org.atmosphere.util.IOUtils.readEntirelyBody(org.atmosphere.cpr.AtmosphereResource)</parameter>\n\
             <parameter name= \"old element\">org.atmosphere.util.IOUtils.readEntirely(org.atmosphere.cpr.AtmosphereResource)</parameter>\n\
             </refactoring>",
        )
        .unwrap();

    let reffinder = TupleReader
        .read(
            ATMOSPHERE,
            "cc2b3f1",
            "move_class(\"org%.atmosphere%.util%.CookieUtil\",\"org%.atmosphere%.util%.tools%.CookieUtil\")",
        )
        .unwrap();

    let mut comparator = ResultComparator::new(ComparatorConfig::default());
    comparator
        .expect([oracle.clone()])
        .compare_with("crawler", [crawler])
        .compare_with("reffinder", [reffinder]);

    let considered: CategorySet = [
        RefactoringCategory::RenameClass,
        RefactoringCategory::RenameMethod,
        RefactoringCategory::MoveClass,
    ]
    .into_iter()
    .collect();

    let crawler = comparator.compare_result("crawler", false, &considered);
    assert_eq!(crawler.tp_count(), 2);
    assert_eq!(crawler.fp_count(), 0);
    assert_eq!(crawler.fn_count(), 4);
    assert_eq!(crawler.tp_count_of(RefactoringCategory::RenameMethod), 1);

    let reffinder = comparator.compare_result("reffinder", false, &considered);
    assert_eq!(reffinder.tp_count(), 1);
    assert_eq!(reffinder.fn_count(), 5);

    let mut out = Vec::new();
    comparator.print_summary(&mut out, &considered).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("# crawler #\nTotal  #:   6  TP:   2  FP:   0  FN:   4"));
    assert!(text.contains("# reffinder #\n"));
}

#[test]
fn test_group_with_no_attempted_revisions_scores_zero() {
    let oracle = atmosphere_cc2b3f1().unwrap();
    let mut comparator = ResultComparator::default();
    comparator
        .expect([oracle])
        .compare_with("other", [refbench_domain::RefactoringSet::new(ATMOSPHERE, "ffffff")]);

    let r = comparator.compare_result("other", false, &RefactoringCategory::all());
    assert_eq!((r.tp_count(), r.fp_count(), r.fn_count()), (0, 0, 0));
    assert_eq!(r.precision(), 0.0);
    assert_eq!(r.recall(), 0.0);
    assert_eq!(r.f1(), 0.0);
}
