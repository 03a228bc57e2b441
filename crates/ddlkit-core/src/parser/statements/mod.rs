//! CREATE / ATTACH statement parsers and the dispatcher that picks one.

mod create_database;
mod create_dictionary;
mod create_live_view;
mod create_table;
mod create_view;

use crate::ast::{Columns, CreateQuery};
use crate::lexer::TokenKind;
use crate::parser::combinators::{ParseState, Rule};
use crate::parser::error::{Failure, PResult};
use crate::parser::fragments::qualified_name;
use crate::parser::table_properties::table_properties_declaration_list;

/// Statement rules in the order the dispatcher tries them. Several share the
/// `CREATE`/`ATTACH` prefix, so the order decides which one wins.
const STATEMENTS: [Rule<CreateQuery>; 5] = [
    create_table::create_table,
    create_database::create_database,
    create_view::create_view,
    create_dictionary::create_dictionary,
    create_live_view::create_live_view,
];

/// Parses any CREATE or ATTACH statement.
pub(crate) fn create_query(state: &mut ParseState<'_>) -> PResult<CreateQuery> {
    tracing::trace!(position = state.position(), "dispatching statement");
    let query = state.first_of(&STATEMENTS)?;
    tracing::debug!(
        kind = query.kind_name(),
        name = query.qualified_name().as_deref(),
        attach = query.attach,
        "parsed statement"
    );
    Ok(query)
}

/// `CREATE` or `ATTACH`; true for ATTACH.
fn create_or_attach(state: &mut ParseState<'_>) -> PResult<bool> {
    if state.try_keyword("CREATE") {
        Ok(false)
    } else if state.try_keyword("ATTACH") {
        Ok(true)
    } else {
        Err(Failure::Mismatch)
    }
}

/// `[TO [db.]table]`
fn to_target(state: &mut ParseState<'_>) -> PResult<(Option<String>, Option<String>)> {
    state.attempt(|state| {
        if state.try_keyword("TO") {
            let (database, table) = qualified_name(state)?;
            Ok((database, Some(table)))
        } else {
            Ok((None, None))
        }
    })
}

/// `[(property, ...)]`
fn parenthesized_columns(state: &mut ParseState<'_>) -> PResult<Option<Columns>> {
    state.attempt(|state| {
        if !state.try_token(&TokenKind::LeftParen) {
            return Ok(None);
        }
        let columns = table_properties_declaration_list(state)?;
        state.token(&TokenKind::RightParen)?;
        Ok(Some(columns))
    })
}
