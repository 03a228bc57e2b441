//! Tests for views, materialized views and live views.

mod common;
use common::*;

use ddlkit_core::ast::{Expr, Literal, TableSource};

#[test]
fn materialized_view_with_target() {
    let (query, view) = parse_view("CREATE MATERIALIZED VIEW mv TO db.target AS SELECT 1");
    assert_eq!(query.table.as_deref(), Some("mv"));
    assert!(view.is_materialized);
    assert_eq!(view.to_database.as_deref(), Some("db"));
    assert_eq!(view.to_table.as_deref(), Some("target"));
    assert!(view.storage.is_none());
    assert!(!view.is_populate);
    assert_eq!(
        view.select.first().map(|s| s.items[0].expr.clone()),
        Some(Expr::Literal(Literal::UInt(1)))
    );
}

#[test]
fn materialized_view_without_target_requires_engine() {
    let err = parse_err("CREATE MATERIALIZED VIEW mv AS SELECT 1");
    assert!(expected_of(&err).contains(&"ENGINE".to_string()));
}

#[test]
fn materialized_view_with_inner_engine_and_populate() {
    let (query, view) = parse_view(
        "CREATE MATERIALIZED VIEW IF NOT EXISTS db.mv \
         ENGINE = SummingMergeTree ORDER BY k POPULATE \
         AS SELECT k, count() AS c FROM db.src GROUP BY k",
    );
    assert!(query.if_not_exists);
    assert_eq!(query.qualified_name().as_deref(), Some("db.mv"));
    assert!(view.is_populate);
    let storage = view.storage.unwrap();
    assert_eq!(storage.engine.name, "SummingMergeTree");
    assert_eq!(storage.order_by, Some(Expr::ident("k")));

    let select = view.select.first().unwrap();
    assert_eq!(select.items.len(), 2);
    assert_eq!(select.group_by, vec![Expr::ident("k")]);
    assert_eq!(
        select.from,
        Some(TableSource::Table {
            database: Some("db".into()),
            table: "src".into(),
            alias: None,
        })
    );
}

#[test]
fn populate_requires_inner_engine() {
    let sql = "CREATE MATERIALIZED VIEW mv TO t POPULATE AS SELECT 1";
    assert_error_at(sql, sql.find("POPULATE").unwrap(), "AS");
}

#[test]
fn plain_view() {
    let (query, view) = parse_view("CREATE VIEW v AS SELECT a FROM t WHERE a > 0");
    assert!(!query.attach);
    assert!(!view.is_materialized);
    assert!(!view.replace);
    assert!(view.columns.is_none());
    assert!(view.select.first().unwrap().where_clause.is_some());
}

#[test]
fn plain_view_takes_no_engine() {
    let sql = "CREATE VIEW v ENGINE = Memory AS SELECT 1";
    let err = assert_error_at(sql, sql.find("ENGINE").unwrap(), "AS");
    assert!(!expected_of(&err).contains(&"ENGINE".to_string()));
}

#[test]
fn view_with_columns() {
    let (_, view) = parse_view("CREATE VIEW v (a UInt8, b String) AS SELECT 1, 'x'");
    let columns = view.columns.unwrap();
    assert_eq!(columns.columns.len(), 2);
    assert_eq!(view.select.first().unwrap().items.len(), 2);
}

#[test]
fn or_replace() {
    let (query, view) = parse_view("CREATE OR REPLACE VIEW v AS SELECT 1");
    assert!(view.replace);
    assert!(!query.if_not_exists);
}

#[test]
fn or_replace_excludes_if_not_exists_and_materialized() {
    // IF is taken as the view name, so the failure is at NOT.
    let sql = "CREATE OR REPLACE VIEW IF NOT EXISTS v AS SELECT 1";
    assert_error_at(sql, sql.find("NOT").unwrap(), "AS");

    let sql = "CREATE OR REPLACE MATERIALIZED VIEW v TO t AS SELECT 1";
    let err = assert_error_at(sql, sql.find("MATERIALIZED").unwrap(), "VIEW");
    assert!(!expected_of(&err).contains(&"MATERIALIZED".to_string()));
}

#[test]
fn view_requires_select() {
    assert_error_at("CREATE VIEW v", "CREATE VIEW v".len(), "AS");
    let err = parse_err("CREATE VIEW v AS");
    assert!(expected_of(&err).contains(&"SELECT".to_string()));
}

#[test]
fn view_on_cluster_and_union() {
    let (query, view) =
        parse_view("ATTACH VIEW v ON CLUSTER c AS SELECT 1 UNION ALL SELECT 2 UNION ALL SELECT 3");
    assert!(query.attach);
    assert_eq!(query.cluster.as_deref(), Some("c"));
    assert_eq!(view.select.selects.len(), 3);
}

#[test]
fn live_view() {
    let (query, view) = parse_live_view("CREATE LIVE VIEW lv AS SELECT sum(x) FROM t");
    assert_eq!(query.kind_name(), "LIVE VIEW");
    assert!(!view.temporary);
    assert!(view.to_table.is_none());
}

#[test]
fn live_view_with_every_option() {
    let (query, view) = parse_live_view(
        "CREATE TEMPORARY LIVE VIEW IF NOT EXISTS db.lv ON CLUSTER c TO db.dst (x UInt64) \
         AS SELECT x FROM src",
    );
    assert!(query.if_not_exists);
    assert!(view.temporary);
    assert_eq!(view.to_database.as_deref(), Some("db"));
    assert_eq!(view.to_table.as_deref(), Some("dst"));
    assert_eq!(view.columns.map(|c| c.len()), Some(1));
}

#[test]
fn live_view_has_no_materialized_form() {
    let sql = "CREATE MATERIALIZED LIVE VIEW lv AS SELECT 1";
    assert_error_at(sql, sql.find("LIVE").unwrap(), "VIEW");
    assert_error_at("CREATE LIVE VIEW lv", "CREATE LIVE VIEW lv".len(), "AS");
}
