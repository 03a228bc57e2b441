//! Dictionary AST types.

use super::expression::{Expr, Literal};
use super::types::IdentifierWithParameters;

/// A dictionary attribute declaration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DictionaryAttribute {
    /// Attribute name.
    pub name: String,
    /// Attribute type.
    pub data_type: IdentifierWithParameters,
    /// Value used when the key is absent from the source.
    pub default: Option<Expr>,
    /// Expression evaluated by the source instead of a plain column.
    pub expression: Option<Expr>,
    /// HIERARCHICAL flag.
    pub hierarchical: bool,
    /// INJECTIVE flag.
    pub injective: bool,
    /// IS_OBJECT_ID flag.
    pub is_object_id: bool,
}

/// A `key value` pair inside SOURCE(...) or LAYOUT(...).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DictionaryParameter {
    /// Parameter key, e.g. `host`.
    pub key: String,
    /// Parameter value.
    pub value: Expr,
}

/// `KIND(key value ...)` as used by SOURCE and LAYOUT.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DictionarySpec {
    /// Source or layout kind, e.g. `CLICKHOUSE` or `HASHED`.
    pub name: String,
    /// Parameters in source order.
    pub parameters: Vec<DictionaryParameter>,
}

impl DictionarySpec {
    /// Looks up a parameter by key, ignoring ASCII case.
    #[must_use]
    pub fn parameter(&self, key: &str) -> Option<&Expr> {
        self.parameters
            .iter()
            .find(|p| p.key.eq_ignore_ascii_case(key))
            .map(|p| &p.value)
    }
}

/// `LIFETIME(n)` or `LIFETIME(MIN a MAX b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DictionaryLifetime {
    /// Minimum lifetime in seconds; 0 for the single-value form.
    pub min: u64,
    /// Maximum lifetime in seconds.
    pub max: u64,
}

/// `RANGE(MIN a MAX b)`: the columns bounding each range.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DictionaryRange {
    /// Column holding the range start.
    pub min: String,
    /// Column holding the range end.
    pub max: String,
}

/// Dictionary clauses following the attribute list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DictionaryBody {
    /// PRIMARY KEY columns.
    pub primary_key: Vec<String>,
    /// SOURCE(...).
    pub source: Option<DictionarySpec>,
    /// LIFETIME(...).
    pub lifetime: Option<DictionaryLifetime>,
    /// LAYOUT(...).
    pub layout: Option<DictionarySpec>,
    /// RANGE(...).
    pub range: Option<DictionaryRange>,
}

impl DictionaryBody {
    /// Returns the literal value of a SOURCE parameter if it is a literal.
    #[must_use]
    pub fn source_literal(&self, key: &str) -> Option<&Literal> {
        match self.source.as_ref()?.parameter(key)? {
            Expr::Literal(lit) => Some(lit),
            _ => None,
        }
    }
}
