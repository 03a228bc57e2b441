#![allow(dead_code)]

use ddlkit_core::ast::{
    DatabaseDefinition, DictionaryDefinition, LiveViewDefinition, TableDefinition,
    ViewDefinition,
};
use ddlkit_core::{CreateQuery, ParseError, ParseOptions, Parser};

pub fn parse(sql: &str) -> CreateQuery {
    Parser::new(sql)
        .parse_create_query()
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    Parser::new(sql)
        .parse_create_query()
        .expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_with_depth(sql: &str, max_depth: usize) -> Result<CreateQuery, ParseError> {
    Parser::with_options(sql, ParseOptions::default().max_depth(max_depth)).parse_create_query()
}

pub fn parse_table(sql: &str) -> (CreateQuery, TableDefinition) {
    let query = parse(sql);
    match query.as_table() {
        Some(table) => {
            let table = table.clone();
            (query, table)
        }
        None => panic!("Expected TABLE, got {query:?}"),
    }
}

pub fn parse_view(sql: &str) -> (CreateQuery, ViewDefinition) {
    let query = parse(sql);
    match query.as_view() {
        Some(view) => {
            let view = view.clone();
            (query, view)
        }
        None => panic!("Expected VIEW, got {query:?}"),
    }
}

pub fn parse_live_view(sql: &str) -> (CreateQuery, LiveViewDefinition) {
    let query = parse(sql);
    match query.as_live_view() {
        Some(view) => {
            let view = view.clone();
            (query, view)
        }
        None => panic!("Expected LIVE VIEW, got {query:?}"),
    }
}

pub fn parse_database(sql: &str) -> (CreateQuery, DatabaseDefinition) {
    let query = parse(sql);
    match query.as_database() {
        Some(database) => {
            let database = database.clone();
            (query, database)
        }
        None => panic!("Expected DATABASE, got {query:?}"),
    }
}

pub fn parse_dictionary(sql: &str) -> (CreateQuery, DictionaryDefinition) {
    let query = parse(sql);
    match query.as_dictionary() {
        Some(dictionary) => {
            let dictionary = dictionary.clone();
            (query, dictionary)
        }
        None => panic!("Expected DICTIONARY, got {query:?}"),
    }
}

/// Returns the `expected` list of a syntax error.
pub fn expected_of(err: &ParseError) -> Vec<String> {
    err.expected().to_vec()
}

/// Parses `sql`, expecting a syntax error at byte `position` where
/// `expected` would have been accepted.
pub fn assert_error_at(sql: &str, position: usize, expected: &str) -> ParseError {
    let err = parse_err(sql);
    assert_eq!(err.position(), position, "wrong position for: {sql}\nError: {err}");
    assert!(
        expected_of(&err).iter().any(|e| e == expected),
        "{expected} not expected for: {sql}\nError: {err}"
    );
    err
}
