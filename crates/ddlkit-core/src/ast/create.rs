//! The root CREATE/ATTACH statement node.

use super::dictionary::{DictionaryAttribute, DictionaryBody};
use super::expression::FunctionCall;
use super::select::SelectWithUnion;
use super::table::{Columns, Storage};

/// A parsed CREATE or ATTACH statement.
///
/// The fields shared by every statement kind live here; the rest is carried
/// by [`CreateKind`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CreateQuery {
    /// True if the statement started with ATTACH instead of CREATE.
    pub attach: bool,
    /// IF NOT EXISTS was given.
    pub if_not_exists: bool,
    /// Database qualifier, or the database name itself for CREATE DATABASE.
    pub database: Option<String>,
    /// Object name; `None` for CREATE DATABASE.
    pub table: Option<String>,
    /// ON CLUSTER target.
    pub cluster: Option<String>,
    /// Statement-kind specific fields.
    pub kind: CreateKind,
}

impl CreateQuery {
    /// Returns the statement kind as an upper-case keyword.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        self.kind.name()
    }

    /// Returns `db.name` or `name`.
    #[must_use]
    pub fn qualified_name(&self) -> Option<String> {
        match (&self.database, &self.table) {
            (Some(db), Some(table)) => Some(format!("{db}.{table}")),
            (None, Some(table)) => Some(table.clone()),
            (Some(db), None) => Some(db.clone()),
            (None, None) => None,
        }
    }

    /// Returns the table definition if this is a table statement.
    #[must_use]
    pub const fn as_table(&self) -> Option<&TableDefinition> {
        match &self.kind {
            CreateKind::Table(def) => Some(def),
            _ => None,
        }
    }

    /// Returns the view definition if this is a view statement.
    #[must_use]
    pub const fn as_view(&self) -> Option<&ViewDefinition> {
        match &self.kind {
            CreateKind::View(def) => Some(def),
            _ => None,
        }
    }

    /// Returns the live view definition if this is a live view statement.
    #[must_use]
    pub const fn as_live_view(&self) -> Option<&LiveViewDefinition> {
        match &self.kind {
            CreateKind::LiveView(def) => Some(def),
            _ => None,
        }
    }

    /// Returns the database definition if this is a database statement.
    #[must_use]
    pub const fn as_database(&self) -> Option<&DatabaseDefinition> {
        match &self.kind {
            CreateKind::Database(def) => Some(def),
            _ => None,
        }
    }

    /// Returns the dictionary definition if this is a dictionary statement.
    #[must_use]
    pub const fn as_dictionary(&self) -> Option<&DictionaryDefinition> {
        match &self.kind {
            CreateKind::Dictionary(def) => Some(def),
            _ => None,
        }
    }
}

/// One variant per statement production.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CreateKind {
    Table(TableDefinition),
    View(ViewDefinition),
    LiveView(LiveViewDefinition),
    Database(DatabaseDefinition),
    Dictionary(DictionaryDefinition),
}

impl CreateKind {
    /// Returns the statement kind as an upper-case keyword.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Table(_) => "TABLE",
            Self::View(_) => "VIEW",
            Self::LiveView(_) => "LIVE VIEW",
            Self::Database(_) => "DATABASE",
            Self::Dictionary(_) => "DICTIONARY",
        }
    }
}

/// `CREATE [TEMPORARY] TABLE ...`
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableDefinition {
    /// TEMPORARY was given.
    pub temporary: bool,
    /// Parenthesized property list.
    pub columns: Option<Columns>,
    /// ENGINE clause.
    pub storage: Option<Storage>,
    /// Database of the `AS [db.]table` source.
    pub as_database: Option<String>,
    /// Table of the `AS [db.]table` source.
    pub as_table: Option<String>,
    /// `AS table_function(...)`.
    pub as_table_function: Option<FunctionCall>,
    /// `AS SELECT ...`.
    pub select: Option<SelectWithUnion>,
}

/// `CREATE [OR REPLACE] [MATERIALIZED] VIEW ...`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ViewDefinition {
    /// MATERIALIZED was given.
    pub is_materialized: bool,
    /// POPULATE was given.
    pub is_populate: bool,
    /// OR REPLACE was given.
    pub replace: bool,
    /// Database of the TO target.
    pub to_database: Option<String>,
    /// Table of the TO target.
    pub to_table: Option<String>,
    /// Explicit column list.
    pub columns: Option<Columns>,
    /// Inner storage of a materialized view without TO.
    pub storage: Option<Storage>,
    /// The view body.
    pub select: SelectWithUnion,
}

/// `CREATE [TEMPORARY] LIVE VIEW ...`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LiveViewDefinition {
    /// TEMPORARY was given.
    pub temporary: bool,
    /// Database of the TO target.
    pub to_database: Option<String>,
    /// Table of the TO target.
    pub to_table: Option<String>,
    /// Explicit column list.
    pub columns: Option<Columns>,
    /// The view body.
    pub select: SelectWithUnion,
}

/// `CREATE DATABASE ...`
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DatabaseDefinition {
    /// Database engine.
    pub storage: Option<Storage>,
}

/// `CREATE DICTIONARY ...`
///
/// Both fields are `None` only for `ATTACH DICTIONARY name`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DictionaryDefinition {
    /// Attribute declarations.
    pub attributes: Option<Vec<DictionaryAttribute>>,
    /// PRIMARY KEY, SOURCE, LIFETIME, LAYOUT and RANGE.
    pub body: Option<DictionaryBody>,
}
