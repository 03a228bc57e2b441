//! Type-like names that may carry parameters.
//!
//! Column types, engine names, index types and codecs all share one shape: an
//! identifier optionally followed by a parenthesized argument list. Nested
//! column groups (`Nested(a String, b UInt8)`) use the same node with
//! name/type pairs as arguments.

/// `name`, `name(args...)` or `name(col Type, ...)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IdentifierWithParameters {
    /// The identifier.
    pub name: String,
    /// The parenthesized arguments; `None` for a bare identifier.
    pub arguments: Option<TypeArguments>,
}

impl IdentifierWithParameters {
    /// Creates a bare identifier without parameters.
    #[must_use]
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: None,
        }
    }

    /// Returns true if the name was followed by parentheses.
    #[must_use]
    pub const fn has_parameters(&self) -> bool {
        self.arguments.is_some()
    }
}

/// Arguments of an [`IdentifierWithParameters`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TypeArguments {
    /// Function-call-shaped arguments: `Decimal(10, 2)`, `MergeTree()`.
    Expressions(Vec<super::Expr>),
    /// Nested column group: `Nested(a String, b UInt8)`.
    Nested(Vec<NameTypePair>),
}

/// A `name Type` pair inside a nested column group.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NameTypePair {
    /// Column name.
    pub name: String,
    /// Column type.
    pub data_type: IdentifierWithParameters,
}
