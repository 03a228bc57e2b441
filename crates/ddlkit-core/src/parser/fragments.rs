//! Grammar fragments shared by several statements.

use super::combinators::ParseState;
use super::error::PResult;
use super::expression::{compound_identifier, expression_list};
use crate::ast::{IdentifierWithParameters, NameTypePair, TypeArguments};
use crate::lexer::TokenKind;

/// `name(col Type, ...)`: a nested column group.
pub(crate) fn nested_table(state: &mut ParseState<'_>) -> PResult<IdentifierWithParameters> {
    state.descend(|state| {
        state.attempt(|state| {
            let name = state.identifier()?;
            state.token(&TokenKind::LeftParen)?;
            let pairs = name_type_pair_list(state)?;
            state.token(&TokenKind::RightParen)?;
            Ok(IdentifierWithParameters {
                name,
                arguments: Some(TypeArguments::Nested(pairs)),
            })
        })
    })
}

/// `name(expr, ...)`, possibly with no arguments.
fn function_shaped(state: &mut ParseState<'_>) -> PResult<IdentifierWithParameters> {
    state.attempt(|state| {
        let name = state.identifier()?;
        state.token(&TokenKind::LeftParen)?;
        let arguments = expression_list(state)?;
        state.token(&TokenKind::RightParen)?;
        Ok(IdentifierWithParameters {
            name,
            arguments: Some(TypeArguments::Expressions(arguments)),
        })
    })
}

fn bare_identifier(state: &mut ParseState<'_>) -> PResult<IdentifierWithParameters> {
    state.identifier().map(IdentifierWithParameters::bare)
}

/// An identifier followed by a parenthesized argument list.
pub(crate) fn identifier_with_parameters(
    state: &mut ParseState<'_>,
) -> PResult<IdentifierWithParameters> {
    state.first_of(&[function_shaped, nested_table])
}

/// Like [`identifier_with_parameters`], also accepting a bare identifier.
pub(crate) fn identifier_with_optional_parameters(
    state: &mut ParseState<'_>,
) -> PResult<IdentifierWithParameters> {
    state.first_of(&[identifier_with_parameters, bare_identifier])
}

fn name_type_pair(state: &mut ParseState<'_>) -> PResult<NameTypePair> {
    state.attempt(|state| {
        let name = state.identifier()?;
        let data_type = identifier_with_optional_parameters(state)?;
        Ok(NameTypePair { name, data_type })
    })
}

pub(crate) fn name_type_pair_list(state: &mut ParseState<'_>) -> PResult<Vec<NameTypePair>> {
    state.list(name_type_pair, &TokenKind::Comma, false)
}

/// Comma-separated compound identifiers.
pub(crate) fn name_list(state: &mut ParseState<'_>) -> PResult<Vec<String>> {
    state.list(compound_identifier, &TokenKind::Comma, false)
}

/// `[db.]name`
pub(crate) fn qualified_name(state: &mut ParseState<'_>) -> PResult<(Option<String>, String)> {
    state.attempt(|state| {
        let first = state.identifier()?;
        if state.try_token(&TokenKind::Dot) {
            let second = state.identifier()?;
            Ok((Some(first), second))
        } else {
            Ok((None, first))
        }
    })
}

/// `[ON CLUSTER name]`, where the name is an identifier or a string.
pub(crate) fn on_cluster(state: &mut ParseState<'_>) -> PResult<Option<String>> {
    state.attempt(|state| {
        if !state.try_keyword("ON CLUSTER") {
            return Ok(None);
        }
        if let TokenKind::StringLiteral(_) = state.current().kind {
            return state.string_literal().map(Some);
        }
        state.identifier().map(Some)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Expr, Literal};
    use crate::lexer::Lexer;
    use crate::parser::error::Failure;
    use crate::parser::ParseOptions;

    fn run<T>(sql: &str, rule: fn(&mut ParseState<'_>) -> PResult<T>) -> (PResult<T>, bool) {
        let tokens = Lexer::new(sql).tokenize();
        let mut state = ParseState::new(sql, &tokens, ParseOptions::default());
        let result = rule(&mut state);
        (result, state.current().is_eof())
    }

    #[test]
    fn test_bare_type() {
        let (result, done) = run("UInt64", identifier_with_optional_parameters);
        assert_eq!(result, Ok(IdentifierWithParameters::bare("UInt64")));
        assert!(done);
    }

    #[test]
    fn test_parameterized_type() {
        let (result, done) = run("Decimal(10, 2)", identifier_with_optional_parameters);
        assert_eq!(
            result,
            Ok(IdentifierWithParameters {
                name: "Decimal".into(),
                arguments: Some(TypeArguments::Expressions(vec![
                    Expr::Literal(Literal::UInt(10)),
                    Expr::Literal(Literal::UInt(2)),
                ])),
            })
        );
        assert!(done);
    }

    #[test]
    fn test_empty_parameter_list() {
        let (result, _) = run("MergeTree()", identifier_with_parameters);
        assert_eq!(
            result.map(|t| t.arguments),
            Ok(Some(TypeArguments::Expressions(vec![])))
        );
    }

    #[test]
    fn test_nested_type_falls_back_to_name_type_pairs() {
        let (result, done) = run(
            "Nested(id UInt32, tags Array(String))",
            identifier_with_optional_parameters,
        );
        assert!(done);
        let Ok(IdentifierWithParameters {
            name,
            arguments: Some(TypeArguments::Nested(pairs)),
        }) = result
        else {
            panic!("expected nested type");
        };
        assert_eq!(name, "Nested");
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1].name, "tags");
        assert_eq!(pairs[1].data_type.name, "Array");
    }

    #[test]
    fn test_identifier_with_parameters_requires_parens() {
        let (result, _) = run("String", identifier_with_parameters);
        assert_eq!(result, Err(Failure::Mismatch));
    }

    #[test]
    fn test_qualified_name() {
        assert_eq!(
            run("db.events", qualified_name).0,
            Ok((Some("db".into()), "events".into()))
        );
        assert_eq!(run("events", qualified_name).0, Ok((None, "events".into())));
        assert_eq!(run("db.", qualified_name).0, Err(Failure::Mismatch));
    }

    #[test]
    fn test_name_list_joins_compound_names() {
        assert_eq!(
            run("a, t.b", name_list).0,
            Ok(vec!["a".to_string(), "t.b".to_string()])
        );
    }

    #[test]
    fn test_on_cluster_accepts_string() {
        assert_eq!(run("ON CLUSTER 'main'", on_cluster).0, Ok(Some("main".into())));
        assert_eq!(run("on cluster main", on_cluster).0, Ok(Some("main".into())));
        assert_eq!(run("", on_cluster).0, Ok(None));
    }
}
