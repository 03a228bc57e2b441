//! # ddlkit-core
//!
//! A backtracking parser for ClickHouse-style schema-definition statements.
//!
//! This crate provides:
//! - A lexer that leaves keyword recognition to the parser, so keywords stay
//!   usable as identifiers
//! - A parser for `CREATE`/`ATTACH` of tables, databases, views, materialized
//!   views, live views and dictionaries
//! - A typed syntax tree for the parsed statements, serializable with the
//!   `serde` feature
//!
//! ## Parsing a statement
//!
//! ```rust
//! use ddlkit_core::parse_create_query;
//!
//! let query = parse_create_query(
//!     "CREATE TABLE db.hits (id UInt64, url String) ENGINE = MergeTree ORDER BY id",
//! )
//! .unwrap();
//!
//! assert_eq!(query.kind_name(), "TABLE");
//! assert_eq!(query.qualified_name().as_deref(), Some("db.hits"));
//!
//! let table = query.as_table().unwrap();
//! assert_eq!(table.columns.as_ref().map(|c| c.columns.len()), Some(2));
//! ```
//!
//! ## Errors
//!
//! A failed parse reports the furthest position reached and everything that
//! would have been accepted there:
//!
//! ```rust
//! use ddlkit_core::parse_create_query;
//!
//! let err = parse_create_query("CREATE TABLE t (a UInt8)").unwrap_err();
//! assert!(err.expected().iter().any(|e| e == "ENGINE"));
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::{CreateKind, CreateQuery, Expr};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{ParseError, ParseOptions, Parser};

/// Parses a single CREATE or ATTACH statement with default options.
///
/// # Errors
///
/// Returns a `ParseError` if `sql` is not exactly one valid statement.
pub fn parse_create_query(sql: &str) -> Result<CreateQuery, ParseError> {
    Parser::new(sql).parse_create_query()
}

/// Parses a `;`-separated script of CREATE and ATTACH statements with
/// default options.
///
/// # Errors
///
/// Returns the error of the first statement that fails to parse.
pub fn parse_create_queries(sql: &str) -> Result<Vec<CreateQuery>, ParseError> {
    Parser::new(sql).parse_create_queries()
}
