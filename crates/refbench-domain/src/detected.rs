//! Typed refactorings as produced by a live detection engine

use std::fmt;

/// A method identified by its declaring class and signature
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodRef {
    /// Fully qualified declaring class
    pub class_name: String,
    /// Signature, e.g. `m(int)`
    pub signature: String,
}

impl MethodRef {
    /// Create a method reference
    pub fn new(class_name: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            signature: signature.into(),
        }
    }

    /// `class#signature`, the key relationships are built from
    pub fn key(&self) -> String {
        format!("{}#{}", self.class_name, self.signature)
    }
}

/// A field identified by its declaring class and name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeRef {
    /// Fully qualified declaring class
    pub class_name: String,
    /// Field name
    pub name: String,
}

impl AttributeRef {
    /// Create a field reference
    pub fn new(class_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            name: name.into(),
        }
    }

    /// `class#name`
    pub fn key(&self) -> String {
        format!("{}#{}", self.class_name, self.name)
    }
}

/// One refactoring reported by the detection engine for a commit
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectedRefactoring {
    RenameClass {
        original_class: String,
        renamed_class: String,
    },
    MoveClass {
        original_class: String,
        moved_class: String,
    },
    RenamePackage {
        original_package: String,
        renamed_package: String,
    },
    RenameMethod {
        original: MethodRef,
        renamed: MethodRef,
    },
    MoveMethod {
        original: MethodRef,
        moved: MethodRef,
    },
    PullUpMethod {
        original: MethodRef,
        moved: MethodRef,
    },
    PushDownMethod {
        original: MethodRef,
        moved: MethodRef,
    },
    ExtractMethod {
        source: MethodRef,
        extracted: MethodRef,
    },
    InlineMethod {
        inlined: MethodRef,
        target: MethodRef,
    },
    MoveAttribute {
        original: AttributeRef,
        moved: AttributeRef,
    },
    PullUpAttribute {
        original: AttributeRef,
        moved: AttributeRef,
    },
    PushDownAttribute {
        original: AttributeRef,
        moved: AttributeRef,
    },
    ExtractSuperclass {
        sub_classes: Vec<String>,
        extracted_class: String,
    },
    ExtractInterface {
        sub_classes: Vec<String>,
        extracted_class: String,
    },
    ExtractVariable {
        operation: MethodRef,
        variable: String,
    },
    RenameVariable {
        operation: MethodRef,
        original_name: String,
        renamed_name: String,
    },
    ChangeReturnType {
        operation: MethodRef,
        original_type: String,
        changed_type: String,
    },
}

impl DetectedRefactoring {
    /// Engine-side name of this kind of refactoring
    pub fn kind(&self) -> &'static str {
        match self {
            DetectedRefactoring::RenameClass { .. } => "Rename Class",
            DetectedRefactoring::MoveClass { .. } => "Move Class",
            DetectedRefactoring::RenamePackage { .. } => "Rename Package",
            DetectedRefactoring::RenameMethod { .. } => "Rename Method",
            DetectedRefactoring::MoveMethod { .. } => "Move Method",
            DetectedRefactoring::PullUpMethod { .. } => "Pull Up Method",
            DetectedRefactoring::PushDownMethod { .. } => "Push Down Method",
            DetectedRefactoring::ExtractMethod { .. } => "Extract Method",
            DetectedRefactoring::InlineMethod { .. } => "Inline Method",
            DetectedRefactoring::MoveAttribute { .. } => "Move Attribute",
            DetectedRefactoring::PullUpAttribute { .. } => "Pull Up Attribute",
            DetectedRefactoring::PushDownAttribute { .. } => "Push Down Attribute",
            DetectedRefactoring::ExtractSuperclass { .. } => "Extract Superclass",
            DetectedRefactoring::ExtractInterface { .. } => "Extract Interface",
            DetectedRefactoring::ExtractVariable { .. } => "Extract Variable",
            DetectedRefactoring::RenameVariable { .. } => "Rename Variable",
            DetectedRefactoring::ChangeReturnType { .. } => "Change Return Type",
        }
    }
}

impl fmt::Display for DetectedRefactoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}
