//! SELECT AST types used by view bodies, `CREATE TABLE ... AS SELECT` and
//! subqueries.

use super::expression::{Expr, FunctionCall};

/// Order direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OrderDirection {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// An ORDER BY clause entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OrderBy {
    /// The expression to order by.
    pub expr: Expr,
    /// The direction (ASC or DESC).
    pub direction: OrderDirection,
}

/// Where a SELECT reads rows from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TableSource {
    /// `[db.]table [AS alias]`
    Table {
        database: Option<String>,
        table: String,
        alias: Option<String>,
    },
    /// `function(args) [AS alias]`
    Function {
        call: FunctionCall,
        alias: Option<String>,
    },
    /// `(SELECT ...) [AS alias]`
    Subquery {
        query: Box<SelectWithUnion>,
        alias: Option<String>,
    },
}

/// A projected column.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SelectItem {
    /// The expression.
    pub expr: Expr,
    /// Optional alias.
    pub alias: Option<String>,
}

/// A single SELECT.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SelectStatement {
    /// Whether DISTINCT is specified.
    pub distinct: bool,
    /// The projection.
    pub items: Vec<SelectItem>,
    /// FROM clause.
    pub from: Option<TableSource>,
    /// WHERE clause.
    pub where_clause: Option<Expr>,
    /// GROUP BY clause.
    pub group_by: Vec<Expr>,
    /// HAVING clause.
    pub having: Option<Expr>,
    /// ORDER BY clause.
    pub order_by: Vec<OrderBy>,
    /// LIMIT clause.
    pub limit: Option<Expr>,
    /// OFFSET clause.
    pub offset: Option<Expr>,
}

/// One or more SELECTs joined by `UNION ALL`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SelectWithUnion {
    /// The selects, in source order; never empty.
    pub selects: Vec<SelectStatement>,
}

impl SelectWithUnion {
    /// Returns the first SELECT of the union.
    #[must_use]
    pub fn first(&self) -> Option<&SelectStatement> {
        self.selects.first()
    }
}
