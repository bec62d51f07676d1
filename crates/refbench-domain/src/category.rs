//! Category module - the closed vocabulary of refactoring kinds

use crate::error::DomainError;
use std::collections::BTreeSet;
use std::fmt;

/// A set of categories, ordered by declaration order
pub type CategorySet = BTreeSet<RefactoringCategory>;

/// Kind of refactoring described by a relationship
///
/// The vocabulary is closed: every adapter maps its own names onto these
/// variants. Declaration order is the tie-break order used when sorting
/// relationships, so new variants go at the end of their level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RefactoringCategory {
    /// A type keeps its package but changes its name
    RenameClass,
    /// A type changes package but keeps its name
    MoveClass,
    /// A type changes both package and name
    MoveAndRenameClass,
    /// A source root directory is relocated
    MoveSourceFolder,
    /// A package changes its name
    RenamePackage,
    /// A package is moved under another package
    MovePackage,
    /// Common members of several types move into a new superclass
    ExtractSuperclass,
    /// Common members of several types move into a new interface
    ExtractInterface,
    /// Part of a type moves into a new subclass
    ExtractSubclass,
    /// Part of a type moves into a new class
    ExtractClass,

    /// A method changes its name
    RenameMethod,
    /// A method moves to another type
    MoveMethod,
    /// A method moves to another type and changes its name
    MoveAndRenameMethod,
    /// Part of a method body becomes a new method
    ExtractMethod,
    /// A method body is inlined into its caller
    InlineMethod,
    /// A method moves from a subtype to a supertype
    PullUpMethod,
    /// A method moves from a supertype to a subtype
    PushDownMethod,
    /// Part of a method body becomes a new method in another type
    ExtractAndMoveMethod,
    /// A method is moved and inlined into a caller in another type
    MoveAndInlineMethod,

    /// A field changes its name
    RenameAttribute,
    /// A field moves to another type
    MoveAttribute,
    /// A field moves to another type and changes its name
    MoveAndRenameAttribute,
    /// A field is replaced by a field of another type
    ReplaceAttribute,
    /// A field moves from a subtype to a supertype
    PullUpAttribute,
    /// A field moves from a supertype to a subtype
    PushDownAttribute,
    /// An expression becomes a new field
    ExtractAttribute,
    /// A field is inlined into its usages
    InlineAttribute,

    /// An expression becomes a local variable
    ExtractVariable,
    /// A local variable is inlined into its usages
    InlineVariable,
    /// A local variable changes its name
    RenameVariable,
    /// A method parameter changes its name
    RenameParameter,
}

impl RefactoringCategory {
    /// Every category, in declaration order
    pub const ALL: [RefactoringCategory; 31] = [
        RefactoringCategory::RenameClass,
        RefactoringCategory::MoveClass,
        RefactoringCategory::MoveAndRenameClass,
        RefactoringCategory::MoveSourceFolder,
        RefactoringCategory::RenamePackage,
        RefactoringCategory::MovePackage,
        RefactoringCategory::ExtractSuperclass,
        RefactoringCategory::ExtractInterface,
        RefactoringCategory::ExtractSubclass,
        RefactoringCategory::ExtractClass,
        RefactoringCategory::RenameMethod,
        RefactoringCategory::MoveMethod,
        RefactoringCategory::MoveAndRenameMethod,
        RefactoringCategory::ExtractMethod,
        RefactoringCategory::InlineMethod,
        RefactoringCategory::PullUpMethod,
        RefactoringCategory::PushDownMethod,
        RefactoringCategory::ExtractAndMoveMethod,
        RefactoringCategory::MoveAndInlineMethod,
        RefactoringCategory::RenameAttribute,
        RefactoringCategory::MoveAttribute,
        RefactoringCategory::MoveAndRenameAttribute,
        RefactoringCategory::ReplaceAttribute,
        RefactoringCategory::PullUpAttribute,
        RefactoringCategory::PushDownAttribute,
        RefactoringCategory::ExtractAttribute,
        RefactoringCategory::InlineAttribute,
        RefactoringCategory::ExtractVariable,
        RefactoringCategory::InlineVariable,
        RefactoringCategory::RenameVariable,
        RefactoringCategory::RenameParameter,
    ];

    /// Human-readable name, as used by datasets and description lines
    pub fn display_name(&self) -> &'static str {
        match self {
            RefactoringCategory::RenameClass => "Rename Class",
            RefactoringCategory::MoveClass => "Move Class",
            RefactoringCategory::MoveAndRenameClass => "Move And Rename Class",
            RefactoringCategory::MoveSourceFolder => "Move Source Folder",
            RefactoringCategory::RenamePackage => "Rename Package",
            RefactoringCategory::MovePackage => "Move Package",
            RefactoringCategory::ExtractSuperclass => "Extract Superclass",
            RefactoringCategory::ExtractInterface => "Extract Interface",
            RefactoringCategory::ExtractSubclass => "Extract Subclass",
            RefactoringCategory::ExtractClass => "Extract Class",
            RefactoringCategory::RenameMethod => "Rename Method",
            RefactoringCategory::MoveMethod => "Move Method",
            RefactoringCategory::MoveAndRenameMethod => "Move And Rename Method",
            RefactoringCategory::ExtractMethod => "Extract Method",
            RefactoringCategory::InlineMethod => "Inline Method",
            RefactoringCategory::PullUpMethod => "Pull Up Method",
            RefactoringCategory::PushDownMethod => "Push Down Method",
            RefactoringCategory::ExtractAndMoveMethod => "Extract And Move Method",
            RefactoringCategory::MoveAndInlineMethod => "Move And Inline Method",
            RefactoringCategory::RenameAttribute => "Rename Attribute",
            RefactoringCategory::MoveAttribute => "Move Attribute",
            RefactoringCategory::MoveAndRenameAttribute => "Move And Rename Attribute",
            RefactoringCategory::ReplaceAttribute => "Replace Attribute",
            RefactoringCategory::PullUpAttribute => "Pull Up Attribute",
            RefactoringCategory::PushDownAttribute => "Push Down Attribute",
            RefactoringCategory::ExtractAttribute => "Extract Attribute",
            RefactoringCategory::InlineAttribute => "Inline Attribute",
            RefactoringCategory::ExtractVariable => "Extract Variable",
            RefactoringCategory::InlineVariable => "Inline Variable",
            RefactoringCategory::RenameVariable => "Rename Variable",
            RefactoringCategory::RenameParameter => "Rename Parameter",
        }
    }

    /// Short report column label: the upper-case letters of the display name
    ///
    /// # Examples
    ///
    /// ```
    /// use refbench_domain::RefactoringCategory;
    ///
    /// assert_eq!(RefactoringCategory::MoveMethod.abbreviation(), "MM");
    /// assert_eq!(RefactoringCategory::PullUpAttribute.abbreviation(), "PUA");
    /// ```
    pub fn abbreviation(&self) -> String {
        self.display_name()
            .chars()
            .filter(|c| c.is_ascii_uppercase())
            .collect()
    }

    /// Look up a category by display name, ignoring case
    pub fn from_name(name: &str) -> Result<Self, DomainError> {
        let wanted = name.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.display_name().to_lowercase() == wanted)
            .ok_or_else(|| DomainError::UnknownCategory(name.to_string()))
    }

    /// All categories sharing an abbreviation (e.g. "RP" is both Rename
    /// Package and Rename Parameter)
    pub fn from_abbreviation(abbreviation: &str) -> Vec<Self> {
        let wanted = abbreviation.trim().to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .filter(|c| c.abbreviation() == wanted)
            .collect()
    }

    /// Category whose display name is the longest prefix of a description
    /// line, so "Move And Rename Class ..." wins over "Move Class"-like
    /// shorter prefixes.
    pub fn from_description(description: &str) -> Result<Self, DomainError> {
        Self::ALL
            .iter()
            .copied()
            .filter(|c| description.starts_with(c.display_name()))
            .max_by_key(|c| c.display_name().len())
            .ok_or_else(|| DomainError::UnknownCategory(description.to_string()))
    }

    /// Every category as a set
    pub fn all() -> CategorySet {
        Self::ALL.iter().copied().collect()
    }

    /// Categories not contained in `set`
    pub fn complement(set: &CategorySet) -> CategorySet {
        Self::ALL
            .iter()
            .copied()
            .filter(|c| !set.contains(c))
            .collect()
    }
}

impl fmt::Display for RefactoringCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for RefactoringCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
