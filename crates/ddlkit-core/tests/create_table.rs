//! Tests for CREATE / ATTACH TABLE.

mod common;
use common::*;

use ddlkit_core::ast::{
    DefaultKind, Expr, IdentifierWithParameters, Literal, SelectWithUnion, TypeArguments,
};

#[test]
fn table_with_column_and_index() {
    let (query, table) = parse_table(
        "CREATE TABLE db.t (a Int32, INDEX idx a TYPE minmax GRANULARITY 4) \
         ENGINE = MergeTree() ORDER BY a",
    );
    assert!(!query.attach);
    assert_eq!(query.database.as_deref(), Some("db"));
    assert_eq!(query.table.as_deref(), Some("t"));

    let columns = table.columns.unwrap();
    assert_eq!(columns.columns.len(), 1);
    assert_eq!(columns.columns[0].name, "a");
    assert_eq!(
        columns.columns[0].data_type,
        Some(IdentifierWithParameters::bare("Int32"))
    );
    assert_eq!(columns.indices.len(), 1);
    assert_eq!(columns.indices[0].name, "idx");
    assert_eq!(columns.indices[0].granularity, 4);
    assert_eq!(columns.indices[0].index_type.name, "minmax");
    assert!(columns.constraints.is_empty());

    let storage = table.storage.unwrap();
    assert_eq!(storage.engine.name, "MergeTree");
    assert_eq!(
        storage.engine.arguments,
        Some(TypeArguments::Expressions(vec![]))
    );
    assert!(storage.order_by.unwrap().references("a"));
}

#[test]
fn attach_by_name() {
    let (query, table) = parse_table("ATTACH TABLE db.t;");
    assert!(query.attach);
    assert_eq!(query.qualified_name().as_deref(), Some("db.t"));
    assert!(table.columns.is_none());
    assert!(table.storage.is_none());
    assert!(table.select.is_none());
}

#[test]
fn attach_with_definition() {
    let (query, table) = parse_table("ATTACH TABLE t (a UInt8) ENGINE = Log");
    assert!(query.attach);
    assert_eq!(table.columns.map(|c| c.len()), Some(1));
    assert_eq!(table.storage.map(|s| s.engine.name), Some("Log".to_string()));
}

#[test]
fn create_by_name_alone_is_rejected() {
    let err = assert_error_at("CREATE TABLE t", "CREATE TABLE t".len(), "AS");
    assert!(expected_of(&err).contains(&"'('".to_string()));
    assert!(expected_of(&err).contains(&"ENGINE".to_string()));
}

#[test]
fn temporary_table_may_omit_engine() {
    let (_, table) = parse_table("CREATE TEMPORARY TABLE tmp (x UInt8)");
    assert!(table.temporary);
    assert!(table.storage.is_none());
}

#[test]
fn regular_table_requires_engine() {
    let err = parse_err("CREATE TABLE t (a Int32)");
    assert!(expected_of(&err).contains(&"ENGINE".to_string()));
}

#[test]
fn missing_table_name() {
    let err = parse_err("CREATE TABLE (a Int32)");
    assert!(expected_of(&err).contains(&"identifier".to_string()));
}

#[test]
fn if_not_exists_and_on_cluster() {
    let (query, _) = parse_table(
        "CREATE TABLE IF NOT EXISTS db.t ON CLUSTER main (a UInt8) ENGINE = Memory",
    );
    assert!(query.if_not_exists);
    assert_eq!(query.cluster.as_deref(), Some("main"));

    let (query, _) = parse_table("CREATE TABLE t ON CLUSTER '{cluster}' (a UInt8) ENGINE = Memory");
    assert_eq!(query.cluster.as_deref(), Some("{cluster}"));
}

#[test]
fn keywords_are_case_insensitive() {
    let (query, table) = parse_table("create table if not exists t (a UInt8) engine = Memory");
    assert!(query.if_not_exists);
    assert!(table.storage.is_some());
}

#[test]
fn keywords_usable_as_names() {
    let (query, table) =
        parse_table("CREATE TABLE engine (engine String, type UInt8, table Date) ENGINE = Memory");
    assert_eq!(query.table.as_deref(), Some("engine"));
    let columns = table.columns.unwrap();
    let names: Vec<&str> = columns.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["engine", "type", "table"]);
}

#[test]
fn as_select() {
    let (_, table) = parse_table("CREATE TABLE t ENGINE = Memory AS SELECT 1 AS x");
    assert_eq!(table.storage.map(|s| s.engine.name), Some("Memory".to_string()));
    let select: SelectWithUnion = table.select.unwrap();
    assert_eq!(select.selects.len(), 1);
    assert_eq!(select.selects[0].items[0].alias.as_deref(), Some("x"));
    assert!(table.as_table.is_none());
}

#[test]
fn as_table_function() {
    let (_, table) = parse_table("CREATE TABLE t AS remote('host:9000', db, src)");
    let call = table.as_table_function.unwrap();
    assert_eq!(call.name, "remote");
    assert_eq!(call.arguments.len(), 3);
    assert_eq!(
        call.arguments[0],
        Expr::Literal(Literal::String("host:9000".into()))
    );
    assert!(table.storage.is_none());
}

#[test]
fn as_other_table_with_trailing_engine() {
    let (_, table) = parse_table("CREATE TABLE t AS db.src ENGINE = Log");
    assert_eq!(table.as_database.as_deref(), Some("db"));
    assert_eq!(table.as_table.as_deref(), Some("src"));
    assert_eq!(table.storage.map(|s| s.engine.name), Some("Log".to_string()));
}

#[test]
fn as_other_table_with_leading_engine() {
    let (_, table) = parse_table("CREATE TABLE t ENGINE = Log AS src");
    assert_eq!(table.as_table.as_deref(), Some("src"));
    assert!(table.storage.is_some());
}

#[test]
fn engine_before_and_after_as_is_rejected() {
    let sql = "CREATE TABLE t ENGINE = Memory AS src ENGINE = Log";
    let err = assert_error_at(sql, sql.rfind("ENGINE").unwrap(), "end of input");
    assert!(!expected_of(&err).contains(&"ENGINE".to_string()));
}

#[test]
fn as_requires_a_source() {
    let err = assert_error_at("CREATE TABLE t AS", "CREATE TABLE t AS".len(), "SELECT");
    assert!(expected_of(&err).contains(&"identifier".to_string()));
    let sql = "CREATE TABLE t ENGINE = Memory";
    assert_error_at(sql, sql.len(), "AS");
}

#[test]
fn column_clauses() {
    let (_, table) = parse_table(
        "CREATE TABLE t (\
            id UInt64 COMMENT 'primary id' CODEC(Delta, LZ4), \
            ts DateTime DEFAULT now(), \
            day Date MATERIALIZED toDate(ts), \
            label ALIAS concat('id-', toString(id)), \
            expires DateTime TTL ts + INTERVAL 1 DAY\
         ) ENGINE = MergeTree ORDER BY id",
    );
    let columns = table.columns.unwrap();
    assert_eq!(columns.len(), 5);

    let id = columns.column("id").unwrap();
    assert_eq!(id.comment.as_deref(), Some("primary id"));
    assert_eq!(id.codec.as_ref().map(Vec::len), Some(2));

    let ts = columns.column("ts").unwrap();
    assert_eq!(ts.default.as_ref().map(|d| d.kind), Some(DefaultKind::Default));

    let day = columns.column("day").unwrap();
    assert_eq!(day.default.as_ref().map(|d| d.kind), Some(DefaultKind::Materialized));

    let label = columns.column("label").unwrap();
    assert!(label.data_type.is_none());
    assert_eq!(label.default.as_ref().map(|d| d.kind), Some(DefaultKind::Alias));

    assert!(columns.column("expires").unwrap().ttl.is_some());
}

#[test]
fn parameterized_and_nested_types() {
    let (_, table) = parse_table(
        "CREATE TABLE t (\
            a LowCardinality(Nullable(String)), \
            b Decimal(18, 4), \
            c Enum8('on' = 1, 'off' = 0), \
            n Nested(key String, value UInt64)\
         ) ENGINE = Memory",
    );
    let columns = table.columns.unwrap();

    let a = columns.column("a").and_then(|c| c.data_type.clone()).unwrap();
    assert_eq!(a.name, "LowCardinality");
    assert!(a.has_parameters());

    let b = columns.column("b").and_then(|c| c.data_type.clone()).unwrap();
    assert_eq!(
        b.arguments,
        Some(TypeArguments::Expressions(vec![
            Expr::Literal(Literal::UInt(18)),
            Expr::Literal(Literal::UInt(4)),
        ]))
    );

    let n = columns.column("n").and_then(|c| c.data_type.clone()).unwrap();
    assert_eq!(n.name, "Nested");
    let Some(TypeArguments::Nested(pairs)) = n.arguments else {
        panic!("expected nested type");
    };
    let names: Vec<&str> = pairs.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["key", "value"]);
    assert_eq!(pairs[1].data_type, IdentifierWithParameters::bare("UInt64"));
}

#[test]
fn column_without_type_or_default_is_rejected() {
    let err = parse_err("CREATE TABLE t (a) ENGINE = Memory");
    assert!(expected_of(&err).contains(&"column type".to_string()));
}

#[test]
fn indices_and_constraints_in_any_order() {
    let (_, table) = parse_table(
        "CREATE TABLE t (\
            CONSTRAINT c_first CHECK a > 0, \
            a Int32, \
            INDEX i_a a TYPE minmax GRANULARITY 1, \
            b String, \
            INDEX i_b b TYPE bloom_filter(0.01) GRANULARITY 2, \
            CONSTRAINT c_second CHECK length(b) < 100\
         ) ENGINE = Memory",
    );
    let columns = table.columns.unwrap();
    let constraint_names: Vec<&str> =
        columns.constraints.iter().map(|c| c.name.as_str()).collect();
    let index_names: Vec<&str> = columns.indices.iter().map(|i| i.name.as_str()).collect();
    let column_names: Vec<&str> = columns.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(constraint_names, ["c_first", "c_second"]);
    assert_eq!(index_names, ["i_a", "i_b"]);
    assert_eq!(column_names, ["a", "b"]);
    assert_eq!(columns.len(), 6);
}

#[test]
fn index_requires_type_and_granularity() {
    let sql = "CREATE TABLE t (a Int32, INDEX idx a) ENGINE = Memory";
    assert_error_at(sql, sql.find(')').unwrap(), "TYPE");
    let sql = "CREATE TABLE t (a Int32, INDEX idx a TYPE minmax) ENGINE = Memory";
    assert_error_at(sql, sql.find(')').unwrap(), "GRANULARITY");
    let sql = "CREATE TABLE t (a Int32, INDEX idx a TYPE minmax GRANULARITY) ENGINE = Memory";
    assert_error_at(sql, sql.find(')').unwrap(), "unsigned integer");
}

#[test]
fn empty_column_list_is_rejected() {
    let sql = "CREATE TABLE t () ENGINE = Memory";
    assert_error_at(sql, "CREATE TABLE t (".len(), "identifier");
}

#[test]
fn trailing_comma_is_rejected() {
    let sql = "CREATE TABLE t (a UInt8,) ENGINE = Memory";
    assert_error_at(sql, "CREATE TABLE t (a UInt8,".len(), "identifier");
}
