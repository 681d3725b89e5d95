//! Validation errors.
//!
//! Validation never aborts: every problem found in a document is collected
//! into a [`ValidationFailure`], which carries one [`Violation`] per issue.
//! Authoring tools rely on seeing the complete list in a single pass.

use thiserror::Error;

/// The rule a single field broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViolationKind {
    /// A required field is absent.
    #[error("required field is missing")]
    Missing,

    /// The value has the wrong scalar or container type.
    #[error("expected {expected}")]
    InvalidType {
        /// Human-readable name of the expected shape ("string", "array", ...).
        expected: &'static str,
    },

    /// A top-level or nested record key not declared by the schema.
    #[error("unknown field")]
    UnknownField,

    /// A value outside a closed enumeration.
    #[error("'{}' is not one of: {}", .value, .allowed.join(", "))]
    InvalidVariant {
        value: String,
        allowed: &'static [&'static str],
    },

    /// An icon name absent from the external icon set.
    #[error("unknown icon '{name}'")]
    UnknownIcon { name: String },

    /// A style override key the block's token registry does not recognize.
    #[error("unknown style token '{name}'")]
    UnknownToken { name: String },

    /// The document decoded to an unexpected shape after the schema walk
    /// accepted it. Indicates a descriptor/struct mismatch, not bad content.
    #[error("document did not decode: {0}")]
    Decode(String),
}

/// One violation, anchored to a dotted field path.
///
/// Paths name the offending field the way an authoring tool would display
/// it: `form.submitButton.variant`, `cards.2.icon`. Problems with the
/// document value itself (e.g. the input is not an object) use the path `$`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {kind}")]
pub struct Violation {
    pub path: String,
    pub kind: ViolationKind,
}

impl Violation {
    pub fn new(path: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// A violation against the document root.
    pub fn document(kind: ViolationKind) -> Self {
        Self::new("$", kind)
    }
}

/// Outcome of a failed validation run: every violation found, in document
/// walk order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("document failed validation with {} violation(s)", .violations.len())]
pub struct ValidationFailure {
    violations: Vec<Violation>,
}

impl ValidationFailure {
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { violations }
    }

    pub(crate) fn single(violation: Violation) -> Self {
        Self::new(vec![violation])
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// True if any violation is anchored at `path`.
    pub fn names(&self, path: &str) -> bool {
        self.violations.iter().any(|v| v.path == path)
    }
}
