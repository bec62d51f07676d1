//! Description format: the detector's human-readable summary lines
//!
//! ```text
//! Rename Method public m(x int) : void renamed to public n(x int) : void in class a.B
//! Move Class a.X moved to b.X
//! Extract Superclass a.S from classes [a.A, a.B]
//! ```
//!
//! The category is the longest display-name prefix of the line. Method
//! texts are reduced to `name(T1,T2)` and attribute texts to `name` before
//! being joined with their class.

use crate::error::ReaderError;
use crate::reader::ResultReader;
use once_cell::sync::Lazy;
use refbench_domain::signature::strip_type_arguments;
use refbench_domain::{RefactoringCategory, RefactoringRelationship, RefactoringSet};
use regex::{Captures, Regex};
use tracing::debug;

fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("description pattern is valid")
}

static CLASS_RENAMED: Lazy<Regex> = Lazy::new(|| pattern(r"^(\S+) renamed to (\S+)$"));
static CLASS_MOVED: Lazy<Regex> = Lazy::new(|| pattern(r"^(\S+) moved to (\S+)$"));
static CLASS_MOVED_RENAMED: Lazy<Regex> =
    Lazy::new(|| pattern(r"^(\S+) moved and renamed to (\S+)$"));
static PACKAGE_CHANGED: Lazy<Regex> = Lazy::new(|| pattern(r"^(\S+) to (\S+)$"));
static SUPERTYPE_EXTRACTED: Lazy<Regex> =
    Lazy::new(|| pattern(r"^(\S+) from classes? \[(.+)\]$"));
static METHOD_RENAMED: Lazy<Regex> =
    Lazy::new(|| pattern(r"^(.+) renamed to (.+) in class (\S+)$"));
static MEMBER_MOVED: Lazy<Regex> =
    Lazy::new(|| pattern(r"^(.+) from class (\S+) to (.+) from class (\S+)$"));
static METHOD_EXTRACTED_MOVED: Lazy<Regex> =
    Lazy::new(|| pattern(r"^(.+) extracted from (.+) in class (\S+) & moved to class (\S+)$"));
static METHOD_EXTRACTED: Lazy<Regex> =
    Lazy::new(|| pattern(r"^(.+) extracted from (.+) in class (\S+)$"));
static METHOD_INLINED: Lazy<Regex> =
    Lazy::new(|| pattern(r"^(.+) inlined to (.+) in class (\S+)$"));
static ATTRIBUTE_MOVED: Lazy<Regex> =
    Lazy::new(|| pattern(r"^(.+) from class (\S+) to class (\S+)$"));
static ATTRIBUTE_RENAMED: Lazy<Regex> = Lazy::new(|| pattern(r"^(.+) to (.+) in class (\S+)$"));

/// Reduce `[modifiers ]name(p1 T1, p2 T2)[ : R]` to `name(T1,T2)`
pub fn method_signature(text: &str) -> String {
    let text = strip_type_arguments(text.trim());
    let Some(open) = text.find('(') else {
        return last_token(&text).to_string();
    };
    let close = text.rfind(')').filter(|&c| c > open).unwrap_or(text.len());
    let name = last_token(&text[..open]);
    let params: Vec<&str> = text[open + 1..close]
        .split(',')
        .filter_map(|p| p.split_whitespace().last())
        .collect();
    format!("{}({})", name, params.join(","))
}

/// Reduce `[modifiers ]name : T` to `name`
pub fn attribute_name(text: &str) -> String {
    let declaration = text.split(" : ").next().unwrap_or(text);
    last_token(declaration).to_string()
}

fn last_token(text: &str) -> &str {
    text.split_whitespace().last().unwrap_or("")
}

fn member(class: &str, name: String) -> String {
    format!("{}#{}", class, name)
}

type EntityPairs = Vec<(String, String)>;

fn matched<'h>(
    re: &Regex,
    category: RefactoringCategory,
    body: &'h str,
) -> Result<Captures<'h>, String> {
    re.captures(body)
        .ok_or_else(|| format!("{} does not match its pattern", category))
}

fn entity_pairs(category: RefactoringCategory, body: &str) -> Result<EntityPairs, String> {
    use RefactoringCategory::*;

    let pairs = match category {
        RenameClass | MoveClass | MoveAndRenameClass => {
            let re: &Lazy<Regex> = match category {
                RenameClass => &CLASS_RENAMED,
                MoveClass => &CLASS_MOVED,
                _ => &CLASS_MOVED_RENAMED,
            };
            let c = matched(re, category, body)?;
            vec![(c[1].to_string(), c[2].to_string())]
        }
        RenamePackage | MovePackage => {
            let c = matched(&PACKAGE_CHANGED, category, body)?;
            vec![(c[1].to_string(), c[2].to_string())]
        }
        ExtractSuperclass | ExtractInterface => {
            let c = matched(&SUPERTYPE_EXTRACTED, category, body)?;
            let extracted = c[1].to_string();
            c[2].split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|sub| (sub.to_string(), extracted.clone()))
                .collect()
        }
        RenameMethod => {
            let c = matched(&METHOD_RENAMED, category, body)?;
            vec![(
                member(&c[3], method_signature(&c[1])),
                member(&c[3], method_signature(&c[2])),
            )]
        }
        MoveMethod | MoveAndRenameMethod | PullUpMethod | PushDownMethod => {
            let c = matched(&MEMBER_MOVED, category, body)?;
            vec![(
                member(&c[2], method_signature(&c[1])),
                member(&c[4], method_signature(&c[3])),
            )]
        }
        ExtractAndMoveMethod => {
            let c = matched(&METHOD_EXTRACTED_MOVED, category, body)?;
            vec![(
                member(&c[3], method_signature(&c[2])),
                member(&c[4], method_signature(&c[1])),
            )]
        }
        ExtractMethod => {
            let c = matched(&METHOD_EXTRACTED, category, body)?;
            vec![(
                member(&c[3], method_signature(&c[2])),
                member(&c[3], method_signature(&c[1])),
            )]
        }
        InlineMethod => {
            let c = matched(&METHOD_INLINED, category, body)?;
            vec![(
                member(&c[3], method_signature(&c[1])),
                member(&c[3], method_signature(&c[2])),
            )]
        }
        MoveAttribute | PullUpAttribute | PushDownAttribute => {
            let c = matched(&ATTRIBUTE_MOVED, category, body)?;
            let name = attribute_name(&c[1]);
            vec![(member(&c[2], name.clone()), member(&c[3], name))]
        }
        RenameAttribute => {
            let c = matched(&ATTRIBUTE_RENAMED, category, body)?;
            vec![(
                member(&c[3], attribute_name(&c[1])),
                member(&c[3], attribute_name(&c[2])),
            )]
        }
        other => return Err(format!("no parse rule for {}", other)),
    };
    Ok(pairs)
}

/// Reader for description lines
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptionReader;

impl DescriptionReader {
    /// Parse one description line into its relationships
    pub fn parse_line(
        &self,
        line_no: usize,
        line: &str,
    ) -> Result<Vec<RefactoringRelationship>, ReaderError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Vec::new());
        }

        let category = RefactoringCategory::from_description(line)
            .map_err(|_| ReaderError::UnknownCategory(line.to_string()))?;
        let body = line[category.display_name().len()..].trim();

        let pairs =
            entity_pairs(category, body).map_err(|reason| ReaderError::malformed(line_no, reason))?;
        pairs
            .into_iter()
            .map(|(before, after)| {
                RefactoringRelationship::new(category, before, after).map_err(ReaderError::from)
            })
            .collect()
    }
}

impl ResultReader for DescriptionReader {
    fn format_name(&self) -> &'static str {
        "description"
    }

    fn read(
        &self,
        project: &str,
        revision: &str,
        source: &str,
    ) -> Result<RefactoringSet, ReaderError> {
        let mut set = RefactoringSet::new(project, revision);
        for (idx, line) in source.lines().enumerate() {
            set.add_all(self.parse_line(idx + 1, line)?);
        }
        debug!(project, revision, count = set.len(), "Read description lines");
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Vec<(RefactoringCategory, String, String)> {
        DescriptionReader
            .parse_line(1, line)
            .unwrap()
            .into_iter()
            .map(|r| {
                (
                    r.category(),
                    r.entity_before().to_string(),
                    r.entity_after().to_string(),
                )
            })
            .collect()
    }

    #[test]
    fn test_method_signature() {
        assert_eq!(method_signature("public m(x int, y java.lang.String) : void"), "m(int,java.lang.String)");
        assert_eq!(method_signature("private static run() : void"), "run()");
        assert_eq!(method_signature("get(map Map<K, V>) : V"), "get(Map)");
        assert_eq!(method_signature("varargs(xs String...)"), "varargs(String...)");
    }

    #[test]
    fn test_attribute_name() {
        assert_eq!(attribute_name("private count : int"), "count");
        assert_eq!(attribute_name("items : List<String>"), "items");
    }

    #[test]
    fn test_rename_method() {
        assert_eq!(
            parse("Rename Method public m(x int) : void renamed to public n(x int) : void in class a.B"),
            vec![(
                RefactoringCategory::RenameMethod,
                "a.B.m(int)".to_string(),
                "a.B.n(int)".to_string()
            )]
        );
    }

    #[test]
    fn test_move_and_rename_class_beats_shorter_prefix() {
        let got = parse("Move And Rename Class a.X moved and renamed to b.Y");
        assert_eq!(got[0].0, RefactoringCategory::MoveAndRenameClass);
        assert_eq!(got[0].1, "a.X");
        assert_eq!(got[0].2, "b.Y");
    }

    #[test]
    fn test_extract_superclass_expands_sources() {
        let got = parse("Extract Superclass a.S from classes [a.A, a.B]");
        assert_eq!(got.len(), 2);
        assert!(got.iter().all(|(_, _, after)| after == "a.S"));
    }

    #[test]
    fn test_extract_and_inline_method() {
        let got = parse("Extract Method private x() : void extracted from public m() : void in class a.B");
        assert_eq!(got[0].1, "a.B.m()");
        assert_eq!(got[0].2, "a.B.x()");

        let got = parse("Inline Method private x() : void inlined to public m() : void in class a.B");
        assert_eq!(got[0].1, "a.B.x()");
        assert_eq!(got[0].2, "a.B.m()");

        let got = parse(
            "Extract And Move Method x() : void extracted from m() : void in class a.B & moved to class c.D",
        );
        assert_eq!(got[0].0, RefactoringCategory::ExtractAndMoveMethod);
        assert_eq!(got[0].1, "a.B.m()");
        assert_eq!(got[0].2, "c.D.x()");
    }

    #[test]
    fn test_member_moves() {
        let got = parse("Pull Up Method public m() : void from class a.Sub to public m() : void from class a.Super");
        assert_eq!(got[0].1, "a.Sub.m()");
        assert_eq!(got[0].2, "a.Super.m()");

        let got = parse("Move Attribute private f : int from class a.A to class b.B");
        assert_eq!(got[0].0, RefactoringCategory::MoveAttribute);
        assert_eq!(got[0].1, "a.A.f");
        assert_eq!(got[0].2, "b.B.f");
    }

    #[test]
    fn test_errors() {
        let reader = DescriptionReader;
        assert!(matches!(
            reader.parse_line(3, "Split Conditional x"),
            Err(ReaderError::UnknownCategory(_))
        ));
        assert!(matches!(
            reader.parse_line(4, "Move Class a.X"),
            Err(ReaderError::Malformed { line: 4, .. })
        ));
        assert!(matches!(
            reader.parse_line(5, "Extract Variable x : int in method m() from class a.B"),
            Err(ReaderError::Malformed { line: 5, .. })
        ));
    }
}
