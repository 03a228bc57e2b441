//! Tests for CREATE / ATTACH DATABASE.

mod common;
use common::*;

use ddlkit_core::ast::{Expr, Literal, TypeArguments};

#[test]
fn database_by_name() {
    let (query, database) = parse_database("CREATE DATABASE analytics");
    assert_eq!(query.database.as_deref(), Some("analytics"));
    assert!(query.table.is_none());
    assert_eq!(query.qualified_name().as_deref(), Some("analytics"));
    assert!(database.storage.is_none());
}

#[test]
fn database_with_every_option() {
    let (query, database) =
        parse_database("CREATE DATABASE IF NOT EXISTS d ON CLUSTER main ENGINE = Atomic");
    assert!(query.if_not_exists);
    assert_eq!(query.cluster.as_deref(), Some("main"));
    assert_eq!(database.storage.map(|s| s.engine.name), Some("Atomic".to_string()));
}

#[test]
fn attach_database_with_engine_arguments() {
    let (query, database) =
        parse_database("ATTACH DATABASE d ENGINE = MySQL('host:3306', 'db', 'user', 'secret')");
    assert!(query.attach);
    let engine = database.storage.unwrap().engine;
    let Some(TypeArguments::Expressions(arguments)) = engine.arguments else {
        panic!("expected engine arguments");
    };
    assert_eq!(arguments.len(), 4);
    assert_eq!(arguments[1], Expr::Literal(Literal::String("db".into())));
}

#[test]
fn database_name_is_not_qualified() {
    assert_error_at("CREATE DATABASE db.x", "CREATE DATABASE db".len(), "end of input");
}

#[test]
fn database_is_never_temporary() {
    let sql = "CREATE TEMPORARY DATABASE d";
    let err = assert_error_at(sql, sql.find("DATABASE").unwrap(), "TABLE");
    assert!(expected_of(&err).contains(&"LIVE VIEW".to_string()));
}

#[test]
fn database_requires_name() {
    let err = parse_err("CREATE DATABASE");
    assert!(expected_of(&err).contains(&"identifier".to_string()));
}
