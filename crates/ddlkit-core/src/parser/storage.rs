//! The ENGINE clause shared by tables, databases and materialized views.

use super::combinators::ParseState;
use super::error::{Failure, PResult};
use super::expression::expression;
use super::fragments::identifier_with_optional_parameters;
use super::settings::{settings_list, ttl_list};
use crate::ast::Storage;
use crate::lexer::TokenKind;

/// `ENGINE [=] name [PARTITION BY e] [PRIMARY KEY e] [ORDER BY e] [SAMPLE BY e]`
/// `[TTL ...] [SETTINGS ...]`
///
/// The optional clauses may come in any order, each at most once, and
/// SETTINGS ends the clause. A clause keyword whose body does not parse fails
/// the whole storage. So does a second occurrence of a clause that is already
/// set: it is never consumed nor allowed to overwrite the first one.
pub(crate) fn storage(state: &mut ParseState<'_>) -> PResult<Storage> {
    state.attempt(|state| {
        state.keyword("ENGINE")?;
        state.try_token(&TokenKind::Equals);
        let engine = identifier_with_optional_parameters(state)?;

        let mut storage = Storage::new(engine);
        loop {
            if storage.partition_by.is_none() && state.try_keyword("PARTITION BY") {
                storage.partition_by = Some(expression(state)?);
                continue;
            }
            if storage.primary_key.is_none() && state.try_keyword("PRIMARY KEY") {
                storage.primary_key = Some(expression(state)?);
                continue;
            }
            if storage.order_by.is_none() && state.try_keyword("ORDER BY") {
                storage.order_by = Some(expression(state)?);
                continue;
            }
            if storage.sample_by.is_none() && state.try_keyword("SAMPLE BY") {
                storage.sample_by = Some(expression(state)?);
                continue;
            }
            if storage.ttl.is_none() && state.try_keyword("TTL") {
                storage.ttl = Some(ttl_list(state)?);
                continue;
            }
            if state.try_keyword("SETTINGS") {
                storage.settings = Some(settings_list(state)?);
            }
            break;
        }

        if let Some(clause) = repeated_clause(state, &storage) {
            tracing::trace!(clause, "storage clause repeated");
            return Err(Failure::Mismatch);
        }
        Ok(storage)
    })
}

/// Returns the keyword of an already-set clause found at the cursor.
fn repeated_clause(state: &ParseState<'_>, storage: &Storage) -> Option<&'static str> {
    let set = [
        ("PARTITION BY", storage.partition_by.is_some()),
        ("PRIMARY KEY", storage.primary_key.is_some()),
        ("ORDER BY", storage.order_by.is_some()),
        ("SAMPLE BY", storage.sample_by.is_some()),
        ("TTL", storage.ttl.is_some()),
        ("SETTINGS", storage.settings.is_some()),
    ];
    set.into_iter()
        .find(|(keyword, is_set)| *is_set && state.check_keyword(keyword))
        .map(|(keyword, _)| keyword)
}
