//! Column, index and constraint declarations.

use super::combinators::ParseState;
use super::error::{Failure, PResult};
use super::expression::{expression, logical_or_expression};
use super::fragments::identifier_with_optional_parameters;
use crate::ast::{
    ColumnDeclaration, ColumnDefault, Columns, ConstraintDeclaration, DefaultKind,
    IndexDeclaration, TableProperty,
};
use crate::lexer::TokenKind;

/// Words that follow a column name when the type is omitted, or end the
/// type when present.
const COLUMN_CLAUSES: &[&str] = &["DEFAULT", "MATERIALIZED", "ALIAS", "COMMENT", "CODEC", "TTL"];

/// `name [type] [DEFAULT|MATERIALIZED|ALIAS expr] [COMMENT 's'] [CODEC(...)] [TTL expr]`
pub(crate) fn column_declaration(state: &mut ParseState<'_>) -> PResult<ColumnDeclaration> {
    state.attempt(|state| {
        let name = state.identifier()?;

        let data_type = if starts_column_clause(state) {
            None
        } else {
            state.optional(identifier_with_optional_parameters)?
        };

        let default = column_default(state)?;
        if data_type.is_none() && default.is_none() {
            state.expect_here("column type");
            return Err(Failure::Mismatch);
        }

        let comment = if state.try_keyword("COMMENT") {
            Some(state.string_literal()?)
        } else {
            None
        };

        let codec = if state.try_keyword("CODEC") {
            state.token(&TokenKind::LeftParen)?;
            let codecs = state.list(identifier_with_optional_parameters, &TokenKind::Comma, false)?;
            state.token(&TokenKind::RightParen)?;
            Some(codecs)
        } else {
            None
        };

        let ttl = if state.try_keyword("TTL") {
            Some(expression(state)?)
        } else {
            None
        };

        Ok(ColumnDeclaration {
            name,
            data_type,
            default,
            comment,
            codec,
            ttl,
        })
    })
}

fn starts_column_clause(state: &ParseState<'_>) -> bool {
    let token = state.current();
    COLUMN_CLAUSES.iter().any(|clause| token.is_word(clause))
}

fn column_default(state: &mut ParseState<'_>) -> PResult<Option<ColumnDefault>> {
    state.attempt(|state| {
        let kind = if state.try_keyword("DEFAULT") {
            DefaultKind::Default
        } else if state.try_keyword("MATERIALIZED") {
            DefaultKind::Materialized
        } else if state.try_keyword("ALIAS") {
            DefaultKind::Alias
        } else {
            return Ok(None);
        };
        let expression = expression(state)?;
        Ok(Some(ColumnDefault { kind, expression }))
    })
}

/// `name expr TYPE type GRANULARITY n`, after the INDEX keyword.
pub(crate) fn index_declaration(state: &mut ParseState<'_>) -> PResult<IndexDeclaration> {
    state.attempt(|state| {
        let name = state.identifier()?;
        let expression = expression(state)?;
        state.keyword("TYPE")?;
        let index_type = identifier_with_optional_parameters(state)?;
        state.keyword("GRANULARITY")?;
        let granularity = state.unsigned_integer()?;
        Ok(IndexDeclaration {
            name,
            expression,
            index_type,
            granularity,
        })
    })
}

/// `name CHECK expr`, after the CONSTRAINT keyword.
pub(crate) fn constraint_declaration(
    state: &mut ParseState<'_>,
) -> PResult<ConstraintDeclaration> {
    state.attempt(|state| {
        let name = state.identifier()?;
        state.keyword("CHECK")?;
        let expression = logical_or_expression(state)?;
        Ok(ConstraintDeclaration { name, expression })
    })
}

/// One property, routed by its leading keyword. Columns have none, so they
/// are the fallback.
pub(crate) fn table_property_declaration(state: &mut ParseState<'_>) -> PResult<TableProperty> {
    state.attempt(|state| {
        if state.try_keyword("INDEX") {
            index_declaration(state).map(TableProperty::Index)
        } else if state.try_keyword("CONSTRAINT") {
            constraint_declaration(state).map(TableProperty::Constraint)
        } else {
            column_declaration(state).map(TableProperty::Column)
        }
    })
}

/// A comma-separated list of mixed declarations, split by kind.
pub(crate) fn table_properties_declaration_list(state: &mut ParseState<'_>) -> PResult<Columns> {
    let properties = state.list(table_property_declaration, &TokenKind::Comma, false)?;
    Ok(properties.into_iter().collect())
}

/// Comma-separated column declarations.
pub(crate) fn column_declaration_list(
    state: &mut ParseState<'_>,
) -> PResult<Vec<ColumnDeclaration>> {
    state.list(column_declaration, &TokenKind::Comma, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOp, Expr, IdentifierWithParameters, Literal, TypeArguments};
    use crate::lexer::Lexer;
    use crate::parser::ParseOptions;

    fn run<T>(sql: &str, rule: fn(&mut ParseState<'_>) -> PResult<T>) -> (PResult<T>, usize) {
        let tokens = Lexer::new(sql).tokenize();
        let mut state = ParseState::new(sql, &tokens, ParseOptions::default());
        let result = rule(&mut state);
        (result, state.position())
    }

    #[test]
    fn test_column_with_every_clause() {
        let (result, _) = run(
            "ts DateTime DEFAULT now() COMMENT 'event time' \
             CODEC(Delta, ZSTD(3)) TTL ts + INTERVAL 1 DAY",
            column_declaration,
        );
        let column = result.unwrap();
        assert_eq!(column.name, "ts");
        assert_eq!(column.data_type, Some(IdentifierWithParameters::bare("DateTime")));
        let default = column.default.unwrap();
        assert_eq!(default.kind, DefaultKind::Default);
        assert!(matches!(default.expression, Expr::Function(ref call) if call.name == "now"));
        assert_eq!(column.comment.as_deref(), Some("event time"));
        let codec = column.codec.unwrap();
        assert_eq!(codec.len(), 2);
        assert_eq!(
            codec[1].arguments,
            Some(TypeArguments::Expressions(vec![Expr::Literal(Literal::UInt(3))]))
        );
        assert!(column.ttl.is_some());
    }

    #[test]
    fn test_column_without_type() {
        let (result, _) = run("total MATERIALIZED price * qty", column_declaration);
        let column = result.unwrap();
        assert_eq!(column.data_type, None);
        assert_eq!(column.default.unwrap().kind, DefaultKind::Materialized);
    }

    #[test]
    fn test_column_needs_type_or_default() {
        let (result, position) = run("lonely", column_declaration);
        assert_eq!(result, Err(Failure::Mismatch));
        assert_eq!(position, 0);
    }

    #[test]
    fn test_index_declaration() {
        let (result, _) = run(
            "INDEX idx lower(name) TYPE bloom_filter(0.01) GRANULARITY 3",
            table_property_declaration,
        );
        let Ok(TableProperty::Index(index)) = result else {
            panic!("expected index");
        };
        assert_eq!(index.name, "idx");
        assert_eq!(index.index_type.name, "bloom_filter");
        assert_eq!(index.granularity, 3);
    }

    #[test]
    fn test_index_granularity_must_be_integer_literal() {
        let (result, position) = run(
            "INDEX idx a TYPE minmax GRANULARITY 1 + 1",
            table_properties_declaration_list,
        );
        // The list stops before `+`; the granularity itself is still the literal 1.
        assert!(result.is_ok());
        assert_eq!(position, 7);

        let (result, position) =
            run("INDEX idx a TYPE minmax GRANULARITY x", table_property_declaration);
        assert_eq!(result, Err(Failure::Mismatch));
        assert_eq!(position, 0);
    }

    #[test]
    fn test_index_keyword_is_not_a_column() {
        let (result, position) = run("INDEX Int32", table_property_declaration);
        assert_eq!(result, Err(Failure::Mismatch));
        assert_eq!(position, 0);
    }

    #[test]
    fn test_constraint_uses_logical_or_level() {
        let (result, _) = run(
            "CONSTRAINT positive CHECK a > 0 OR b > 0",
            table_property_declaration,
        );
        let Ok(TableProperty::Constraint(constraint)) = result else {
            panic!("expected constraint");
        };
        assert_eq!(constraint.name, "positive");
        assert!(matches!(
            constraint.expression,
            Expr::Binary { op: BinaryOp::Or, .. }
        ));
    }

    #[test]
    fn test_constraint_stops_before_ternary() {
        let (result, position) = run("CONSTRAINT c CHECK a ? 1 : 2", table_property_declaration);
        assert!(result.is_ok());
        assert_eq!(position, 4);
    }

    #[test]
    fn test_partition_preserves_order_within_kind() {
        let (result, _) = run(
            "a Int32, INDEX i1 a TYPE minmax GRANULARITY 1, b String, \
             CONSTRAINT c1 CHECK a > 0, INDEX i2 b TYPE set(10) GRANULARITY 2",
            table_properties_declaration_list,
        );
        let columns = result.unwrap();
        let column_names: Vec<&str> = columns.columns.iter().map(|c| c.name.as_str()).collect();
        let index_names: Vec<&str> = columns.indices.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(column_names, ["a", "b"]);
        assert_eq!(index_names, ["i1", "i2"]);
        assert_eq!(columns.constraints.len(), 1);
        assert_eq!(columns.len(), 5);
    }

    #[test]
    fn test_column_declaration_list() {
        let (result, _) = run("a UInt8, b Nullable(String)", column_declaration_list);
        assert_eq!(result.unwrap().len(), 2);
    }
}
