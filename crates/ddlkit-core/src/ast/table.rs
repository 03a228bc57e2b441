//! Table property and storage AST types.

use super::expression::{Expr, Literal};
use super::types::IdentifierWithParameters;

/// How a column value is produced when not supplied explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DefaultKind {
    /// `DEFAULT expr`
    Default,
    /// `MATERIALIZED expr`
    Materialized,
    /// `ALIAS expr`
    Alias,
}

impl DefaultKind {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::Materialized => "MATERIALIZED",
            Self::Alias => "ALIAS",
        }
    }
}

/// A column default clause.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColumnDefault {
    /// DEFAULT, MATERIALIZED or ALIAS.
    pub kind: DefaultKind,
    /// The default expression.
    pub expression: Expr,
}

/// A column declaration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColumnDeclaration {
    /// Column name.
    pub name: String,
    /// Column type; may be omitted when a default is given.
    pub data_type: Option<IdentifierWithParameters>,
    /// DEFAULT / MATERIALIZED / ALIAS clause.
    pub default: Option<ColumnDefault>,
    /// COMMENT 'text'.
    pub comment: Option<String>,
    /// CODEC(...) list.
    pub codec: Option<Vec<IdentifierWithParameters>>,
    /// Column-level TTL.
    pub ttl: Option<Expr>,
}

/// `INDEX name expr TYPE type GRANULARITY n`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IndexDeclaration {
    /// Index name.
    pub name: String,
    /// Indexed expression.
    pub expression: Expr,
    /// Index type, e.g. `minmax` or `bloom_filter(0.01)`.
    pub index_type: IdentifierWithParameters,
    /// Granularity; always an unsigned integer literal in the source.
    pub granularity: u64,
}

/// `CONSTRAINT name CHECK expr`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConstraintDeclaration {
    /// Constraint name.
    pub name: String,
    /// Checked expression, parsed at logical-or precedence.
    pub expression: Expr,
}

/// One element of a parenthesized table property list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TableProperty {
    /// A column declaration.
    Column(ColumnDeclaration),
    /// An `INDEX` declaration.
    Index(IndexDeclaration),
    /// A `CONSTRAINT` declaration.
    Constraint(ConstraintDeclaration),
}

/// Table properties split by kind. Each list keeps source order and is empty
/// when no declaration of that kind was present.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Columns {
    /// Column declarations.
    pub columns: Vec<ColumnDeclaration>,
    /// Index declarations.
    pub indices: Vec<IndexDeclaration>,
    /// Constraint declarations.
    pub constraints: Vec<ConstraintDeclaration>,
}

impl Columns {
    /// Total number of declarations of all kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len() + self.indices.len() + self.constraints.len()
    }

    /// Returns true if no declarations are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ColumnDeclaration> {
        self.columns.iter().find(|c| c.name == name)
    }
}

impl FromIterator<TableProperty> for Columns {
    fn from_iter<I: IntoIterator<Item = TableProperty>>(iter: I) -> Self {
        let mut columns = Self::default();
        for property in iter {
            match property {
                TableProperty::Column(c) => columns.columns.push(c),
                TableProperty::Index(i) => columns.indices.push(i),
                TableProperty::Constraint(c) => columns.constraints.push(c),
            }
        }
        columns
    }
}

/// What happens to rows once a TTL expression expires.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TtlAction {
    /// Rows are deleted (the default).
    Delete,
    /// Parts move to the named disk.
    ToDisk(String),
    /// Parts move to the named volume.
    ToVolume(String),
}

/// One element of a table TTL list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TtlElement {
    /// The TTL expression.
    pub expression: Expr,
    /// The action taken when it expires.
    pub action: TtlAction,
}

/// A `name = value` pair from a SETTINGS clause.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SettingChange {
    /// Setting name.
    pub name: String,
    /// Setting value.
    pub value: Literal,
}

/// `ENGINE = name` with its optional PARTITION BY, PRIMARY KEY, ORDER BY,
/// SAMPLE BY, TTL and SETTINGS clauses.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Storage {
    /// Engine name with optional parameters.
    pub engine: IdentifierWithParameters,
    /// PARTITION BY expression.
    pub partition_by: Option<Expr>,
    /// PRIMARY KEY expression.
    pub primary_key: Option<Expr>,
    /// ORDER BY expression.
    pub order_by: Option<Expr>,
    /// SAMPLE BY expression.
    pub sample_by: Option<Expr>,
    /// TTL list.
    pub ttl: Option<Vec<TtlElement>>,
    /// SETTINGS list, in source order.
    pub settings: Option<Vec<SettingChange>>,
}

impl Storage {
    /// Creates a storage clause with only an engine.
    #[must_use]
    pub const fn new(engine: IdentifierWithParameters) -> Self {
        Self {
            engine,
            partition_by: None,
            primary_key: None,
            order_by: None,
            sample_by: None,
            ttl: None,
            settings: None,
        }
    }

    /// Looks up a setting by name.
    #[must_use]
    pub fn setting(&self, name: &str) -> Option<&Literal> {
        self.settings
            .iter()
            .flatten()
            .find(|s| s.name == name)
            .map(|s| &s.value)
    }
}
