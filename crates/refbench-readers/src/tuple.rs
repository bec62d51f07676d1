//! Tuple format: one `predicate("arg1","arg2",...)` fact per line
//!
//! Each predicate has a rule naming which arguments become the before and
//! after entities. Member-level predicates carry the member name and its
//! owning classes as separate arguments; those are joined with `.`.
//! Predicates without a rule are skipped, while structurally broken lines
//! fail the whole read.

use crate::error::ReaderError;
use crate::reader::ResultReader;
use refbench_domain::{RefactoringCategory, RefactoringRelationship, RefactoringSet};
use tracing::{debug, warn};

/// Which argument(s) form an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntitySpec {
    /// A single argument
    Arg(usize),
    /// `args[owner] + "." + args[member]`
    Member {
        /// Index of the owning class
        owner: usize,
        /// Index of the member name
        member: usize,
    },
}

impl EntitySpec {
    /// Build the entity text, or `None` when an index is out of range
    pub fn resolve(&self, args: &[String]) -> Option<String> {
        match *self {
            EntitySpec::Arg(i) => args.get(i).cloned(),
            EntitySpec::Member { owner, member } => {
                Some(format!("{}.{}", args.get(owner)?, args.get(member)?))
            }
        }
    }

    fn highest_index(&self) -> usize {
        match *self {
            EntitySpec::Arg(i) => i,
            EntitySpec::Member { owner, member } => owner.max(member),
        }
    }
}

/// Mapping of one predicate onto a relationship
#[derive(Debug, Clone, Copy)]
pub struct TupleRule {
    /// Predicate name
    pub predicate: &'static str,
    /// Resulting category
    pub category: RefactoringCategory,
    /// Source of the before entity
    pub before: EntitySpec,
    /// Source of the after entity
    pub after: EntitySpec,
}

impl TupleRule {
    /// Number of arguments the rule needs
    pub fn arity(&self) -> usize {
        self.before.highest_index().max(self.after.highest_index()) + 1
    }
}

const fn arg_rule(
    predicate: &'static str,
    category: RefactoringCategory,
    before: usize,
    after: usize,
) -> TupleRule {
    TupleRule {
        predicate,
        category,
        before: EntitySpec::Arg(before),
        after: EntitySpec::Arg(after),
    }
}

const fn member_rule(predicate: &'static str, category: RefactoringCategory) -> TupleRule {
    TupleRule {
        predicate,
        category,
        before: EntitySpec::Member { owner: 1, member: 0 },
        after: EntitySpec::Member { owner: 2, member: 0 },
    }
}

/// Every predicate the reader understands
pub const TUPLE_RULES: &[TupleRule] = &[
    arg_rule("rename_method", RefactoringCategory::RenameMethod, 0, 1),
    arg_rule("extract_method", RefactoringCategory::ExtractMethod, 0, 1),
    arg_rule("inline_method", RefactoringCategory::InlineMethod, 0, 1),
    arg_rule("rename_class", RefactoringCategory::RenameClass, 0, 1),
    arg_rule("move_class", RefactoringCategory::MoveClass, 0, 1),
    arg_rule("extract_superclass", RefactoringCategory::ExtractSuperclass, 0, 1),
    arg_rule("extract_interface", RefactoringCategory::ExtractInterface, 0, 1),
    member_rule("move_method", RefactoringCategory::MoveMethod),
    member_rule("pull_up_method", RefactoringCategory::PullUpMethod),
    member_rule("push_down_method", RefactoringCategory::PushDownMethod),
    member_rule("move_field", RefactoringCategory::MoveAttribute),
    member_rule("pull_up_field", RefactoringCategory::PullUpAttribute),
    member_rule("push_down_field", RefactoringCategory::PushDownAttribute),
];

/// Rule for a predicate name
pub fn rule_for(predicate: &str) -> Option<&'static TupleRule> {
    TUPLE_RULES.iter().find(|r| r.predicate == predicate)
}

/// Reader for the tuple format
#[derive(Debug, Clone, Copy, Default)]
pub struct TupleReader;

impl TupleReader {
    /// Parse one line
    ///
    /// `Ok(None)` means the line is blank or its predicate has no rule.
    pub fn parse_line(
        &self,
        line_no: usize,
        line: &str,
    ) -> Result<Option<RefactoringRelationship>, ReaderError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (predicate, args) = split_tuple(line_no, line)?;
        let Some(rule) = rule_for(predicate) else {
            warn!(line = line_no, predicate, "Skipping unsupported predicate");
            return Ok(None);
        };

        if args.len() < rule.arity() {
            return Err(ReaderError::malformed(
                line_no,
                format!(
                    "{} expects at least {} arguments, found {}",
                    predicate,
                    rule.arity(),
                    args.len()
                ),
            ));
        }

        let before = rule.before.resolve(&args);
        let after = rule.after.resolve(&args);
        let relationship =
            RefactoringRelationship::from_parts(Some(rule.category), before.as_deref(), after.as_deref())?;
        Ok(Some(relationship))
    }
}

impl ResultReader for TupleReader {
    fn format_name(&self) -> &'static str {
        "tuple"
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
        debug!(project, revision, count = set.len(), "Read tuple facts");
        Ok(set)
    }
}

/// Split `name("a","b")` into its predicate and unescaped arguments
fn split_tuple(line_no: usize, line: &str) -> Result<(&str, Vec<String>), ReaderError> {
    let open = line
        .find('(')
        .ok_or_else(|| ReaderError::malformed(line_no, "missing '('"))?;
    let predicate = line[..open].trim();
    if predicate.is_empty() {
        return Err(ReaderError::malformed(line_no, "missing predicate name"));
    }

    let inner = line[open + 1..]
        .strip_suffix(')')
        .ok_or_else(|| ReaderError::malformed(line_no, "missing closing ')'"))?;
    let inner = inner
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or_else(|| ReaderError::malformed(line_no, "arguments must be double-quoted"))?;

    let args = inner
        .split("\",\"")
        .map(|arg| arg.replace("%.", ".").replace('#', "."))
        .collect();
    Ok((predicate, args))
}
