//! SELECT grammar.

use super::combinators::ParseState;
use super::error::PResult;
use super::expression::{expression, function_call};
use super::fragments::qualified_name;
use crate::ast::{
    OrderBy, OrderDirection, SelectItem, SelectStatement, SelectWithUnion, TableSource,
};
use crate::lexer::TokenKind;

/// Words that end a projection or table source instead of naming an alias.
const RESERVED_AFTER_EXPRESSION: &[&str] = &[
    "FROM", "WHERE", "GROUP", "HAVING", "ORDER", "LIMIT", "OFFSET", "UNION", "SETTINGS",
    "FORMAT", "AS", "ASC", "DESC", "JOIN", "ON", "USING", "PREWHERE", "INTO",
];

/// One or more SELECTs joined by `UNION ALL`. Each query is one nesting
/// level, so subqueries in FROM count against the depth limit.
pub(crate) fn select_with_union(state: &mut ParseState<'_>) -> PResult<SelectWithUnion> {
    state.descend(|state| {
        state.attempt(|state| {
            let mut selects = vec![select_statement(state)?];
            while state.try_keyword("UNION ALL") {
                selects.push(select_statement(state)?);
            }
            Ok(SelectWithUnion { selects })
        })
    })
}

/// Parses a SELECT statement.
fn select_statement(state: &mut ParseState<'_>) -> PResult<SelectStatement> {
    state.attempt(|state| {
        state.keyword("SELECT")?;

        let distinct = state.try_keyword("DISTINCT");
        let items = state.list(select_item, &TokenKind::Comma, false)?;

        // FROM clause (optional for expressions like SELECT 1+1)
        let from = if state.try_keyword("FROM") {
            Some(table_source(state)?)
        } else {
            None
        };

        let where_clause = if state.try_keyword("WHERE") {
            Some(expression(state)?)
        } else {
            None
        };

        let group_by = if state.try_keyword("GROUP BY") {
            state.list(expression, &TokenKind::Comma, false)?
        } else {
            vec![]
        };

        let having = if state.try_keyword("HAVING") {
            Some(expression(state)?)
        } else {
            None
        };

        let order_by = if state.try_keyword("ORDER BY") {
            state.list(order_by_element, &TokenKind::Comma, false)?
        } else {
            vec![]
        };

        let limit = if state.try_keyword("LIMIT") {
            Some(expression(state)?)
        } else {
            None
        };

        let offset = if limit.is_some() && state.try_keyword("OFFSET") {
            Some(expression(state)?)
        } else {
            None
        };

        Ok(SelectStatement {
            distinct,
            items,
            from,
            where_clause,
            group_by,
            having,
            order_by,
            limit,
            offset,
        })
    })
}

fn select_item(state: &mut ParseState<'_>) -> PResult<SelectItem> {
    state.attempt(|state| {
        let expr = expression(state)?;
        let alias = alias(state)?;
        Ok(SelectItem { expr, alias })
    })
}

/// `AS name`, or a bare name that is not a clause keyword.
fn alias(state: &mut ParseState<'_>) -> PResult<Option<String>> {
    if state.try_keyword("AS") {
        return state.identifier().map(Some);
    }
    let token = state.current();
    let implicit = match &token.kind {
        TokenKind::QuotedIdentifier(_) => true,
        TokenKind::BareWord(word) => !RESERVED_AFTER_EXPRESSION
            .iter()
            .any(|reserved| reserved.eq_ignore_ascii_case(word)),
        _ => false,
    };
    if implicit {
        state.identifier().map(Some)
    } else {
        Ok(None)
    }
}

fn table_source(state: &mut ParseState<'_>) -> PResult<TableSource> {
    state.first_of(&[subquery_source, function_source, table_source_by_name])
}

fn subquery_source(state: &mut ParseState<'_>) -> PResult<TableSource> {
    state.attempt(|state| {
        state.token(&TokenKind::LeftParen)?;
        let query = select_with_union(state)?;
        state.token(&TokenKind::RightParen)?;
        let alias = alias(state)?;
        Ok(TableSource::Subquery {
            query: Box::new(query),
            alias,
        })
    })
}

fn function_source(state: &mut ParseState<'_>) -> PResult<TableSource> {
    state.attempt(|state| {
        let call = function_call(state)?;
        let alias = alias(state)?;
        Ok(TableSource::Function { call, alias })
    })
}

fn table_source_by_name(state: &mut ParseState<'_>) -> PResult<TableSource> {
    state.attempt(|state| {
        let (database, table) = qualified_name(state)?;
        let alias = alias(state)?;
        Ok(TableSource::Table {
            database,
            table,
            alias,
        })
    })
}

fn order_by_element(state: &mut ParseState<'_>) -> PResult<OrderBy> {
    state.attempt(|state| {
        let expr = expression(state)?;
        let direction = if state.try_keyword("DESC") || state.try_keyword("DESCENDING") {
            OrderDirection::Desc
        } else {
            // ASC is the default; consume it when spelled out
            let _ = state.try_keyword("ASC") || state.try_keyword("ASCENDING");
            OrderDirection::Asc
        };
        Ok(OrderBy { expr, direction })
    })
}
