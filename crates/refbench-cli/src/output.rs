//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use refbench_compare::{Counts, GroupSummary, ResultComparator};
use refbench_domain::{CategorySet, RefactoringSet};
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

#[derive(Serialize)]
struct NormalizedSignature<'a> {
    input: &'a str,
    normalized: String,
}

#[derive(Serialize)]
struct RelationshipRecord<'a> {
    category: &'a str,
    before: &'a str,
    after: &'a str,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the per-group summary of a comparison.
    pub fn format_summary(
        &self,
        comparator: &ResultComparator,
        categories: &CategorySet,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(
                &comparator.summaries(categories),
            )?),
            OutputFormat::Table => {
                Ok(self.format_summary_table(&comparator.summaries(categories), comparator.config().decimals))
            }
            OutputFormat::Text => {
                let mut out = Vec::new();
                comparator.print_summary(&mut out, categories)?;
                Ok(String::from_utf8_lossy(&out).into_owned())
            }
        }
    }

    fn format_summary_table(&self, summaries: &[GroupSummary], decimals: usize) -> String {
        if summaries.is_empty() {
            return self.warning("No tool results to grade.");
        }

        let mut builder = Builder::default();
        builder.push_record([
            "Group", "Type", "#", "TP", "FP", "FN", "Precision", "Recall", "F1",
        ]);

        for summary in summaries {
            let group = self.colorize(&summary.group, "cyan");
            builder.push_record(counts_record(&group, "Total", &summary.total, decimals));
            for row in &summary.categories {
                builder.push_record(counts_record("", &row.abbreviation, &row.counts, decimals));
            }
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format normalized signatures, one per input.
    pub fn format_signatures(&self, inputs: &[String], normalized: &[String]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let records: Vec<NormalizedSignature<'_>> = inputs
                    .iter()
                    .zip(normalized)
                    .map(|(input, normalized)| NormalizedSignature {
                        input,
                        normalized: normalized.clone(),
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&records)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Signature", "Normalized"]);
                for (input, normalized) in inputs.iter().zip(normalized) {
                    builder.push_record([input.as_str(), normalized.as_str()]);
                }
                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
            OutputFormat::Text => Ok(normalized.join("\n")),
        }
    }

    /// Format the relationships of a set.
    pub fn format_set(&self, set: &RefactoringSet) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let records: Vec<RelationshipRecord<'_>> = set
                    .iter()
                    .map(|r| RelationshipRecord {
                        category: r.category().display_name(),
                        before: r.entity_before(),
                        after: r.entity_after(),
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&records)?)
            }
            // the line encoding is the interchange format, tables would break it
            OutputFormat::Table | OutputFormat::Text => {
                Ok(refbench_readers::cache::encode(set).trim_end().to_string())
            }
        }
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn counts_record(group: &str, label: &str, counts: &Counts, decimals: usize) -> Vec<String> {
    vec![
        group.to_string(),
        label.to_string(),
        counts.expected.to_string(),
        counts.tp.to_string(),
        counts.fp.to_string(),
        counts.fn_count.to_string(),
        format!("{:.d$}", counts.precision, d = decimals),
        format!("{:.d$}", counts.recall, d = decimals),
        format!("{:.d$}", counts.f1, d = decimals),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use refbench_compare::ComparatorConfig;
    use refbench_domain::{RefactoringCategory, RefactoringRelationship};

    fn comparator() -> ResultComparator {
        let mut oracle = RefactoringSet::new("https://github.com/x/y.git", "abc");
        oracle.add(
            RefactoringRelationship::new(RefactoringCategory::MoveMethod, "a.X#m()", "b.Y#m()")
                .unwrap(),
        );
        let mut found = RefactoringSet::new("https://github.com/x/y.git", "abc");
        found.add(
            RefactoringRelationship::new(RefactoringCategory::MoveMethod, "a.X#m()", "b.Y#m()")
                .unwrap(),
        );
        let mut c = ResultComparator::new(ComparatorConfig::default());
        c.expect([oracle]).compare_with("tool", [found]);
        c
    }

    #[test]
    fn test_summary_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_summary(&comparator(), &RefactoringCategory::all())
            .unwrap();
        assert!(output.contains("Precision"));
        assert!(output.contains("tool"));
        assert!(output.contains("MM"));
        assert!(output.contains("1.000"));
    }

    #[test]
    fn test_summary_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter
            .format_summary(&comparator(), &RefactoringCategory::all())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["group"], "tool");
        assert_eq!(value[0]["total"]["tp"], 1);
        assert_eq!(value[0]["categories"][0]["abbreviation"], "MM");
    }

    #[test]
    fn test_summary_text() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let output = formatter
            .format_summary(&comparator(), &RefactoringCategory::all())
            .unwrap();
        assert!(output.starts_with("# tool #\nTotal  #:   1  TP:   1"));
    }

    #[test]
    fn test_empty_summary_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let empty = ResultComparator::new(ComparatorConfig::default());
        let output = formatter
            .format_summary(&empty, &RefactoringCategory::all())
            .unwrap();
        assert!(output.contains("No tool results"));
    }

    #[test]
    fn test_signatures_text_and_json() {
        let inputs = vec!["a.B#m(java.lang.String)".to_string()];
        let normalized = vec!["a.B.m(String)".to_string()];

        let text = Formatter::new(OutputFormat::Text, false)
            .format_signatures(&inputs, &normalized)
            .unwrap();
        assert_eq!(text, "a.B.m(String)");

        let json = Formatter::new(OutputFormat::Json, false)
            .format_signatures(&inputs, &normalized)
            .unwrap();
        assert!(json.contains("\"normalized\": \"a.B.m(String)\""));
    }

    #[test]
    fn test_set_as_lines() {
        let mut set = RefactoringSet::new("p", "r");
        set.add(RefactoringRelationship::new(RefactoringCategory::MoveClass, "a.X", "b.X").unwrap());
        let output = Formatter::new(OutputFormat::Table, false).format_set(&set).unwrap();
        assert_eq!(output, "Move Class\ta.X\tb.X");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.warning("careful"), "⚠ careful");
    }
}
