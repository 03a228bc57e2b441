//! `CREATE|ATTACH [TEMPORARY] TABLE`

use super::create_or_attach;
use crate::ast::{
    CreateKind, CreateQuery, FunctionCall, SelectWithUnion, Storage, TableDefinition,
};
use crate::lexer::TokenKind;
use crate::parser::combinators::ParseState;
use crate::parser::error::{Failure, PResult};
use crate::parser::expression::function_call;
use crate::parser::fragments::{on_cluster, qualified_name};
use crate::parser::select::select_with_union;
use crate::parser::storage::storage;
use crate::parser::table_properties::table_properties_declaration_list;

/// What follows `AS` when a table is defined from another object.
enum AsSource {
    Select(SelectWithUnion),
    TableFunction(FunctionCall),
    Table(Option<String>, String),
}

pub(super) fn create_table(state: &mut ParseState<'_>) -> PResult<CreateQuery> {
    state.attempt(|state| {
        let attach = create_or_attach(state)?;
        let temporary = state.try_keyword("TEMPORARY");
        state.keyword("TABLE")?;
        let if_not_exists = state.try_keyword("IF NOT EXISTS");
        let (database, table) = qualified_name(state)?;
        let cluster = on_cluster(state)?;

        let definition = if attach && state.at_statement_end() {
            // ATTACH TABLE name: the definition is loaded from metadata.
            TableDefinition {
                temporary,
                ..TableDefinition::default()
            }
        } else if state.try_token(&TokenKind::LeftParen) {
            with_columns(state, temporary)?
        } else {
            from_source(state, temporary)?
        };

        Ok(CreateQuery {
            attach,
            if_not_exists,
            database,
            table: Some(table),
            cluster,
            kind: CreateKind::Table(definition),
        })
    })
}

/// `(properties) ENGINE ...`, after the opening parenthesis. Only a
/// temporary table may omit the engine.
fn with_columns(state: &mut ParseState<'_>, temporary: bool) -> PResult<TableDefinition> {
    let columns = table_properties_declaration_list(state)?;
    state.token(&TokenKind::RightParen)?;
    let storage = state.optional(storage)?;
    if storage.is_none() && !temporary {
        return Err(Failure::Mismatch);
    }
    Ok(TableDefinition {
        temporary,
        columns: Some(columns),
        storage,
        ..TableDefinition::default()
    })
}

/// `[ENGINE ...] AS source`
fn from_source(state: &mut ParseState<'_>, temporary: bool) -> PResult<TableDefinition> {
    let storage = state.optional(storage)?;
    state.keyword("AS")?;
    let source = state.first_of(&[as_select, as_table_function, as_table])?;

    let definition = TableDefinition {
        temporary,
        ..TableDefinition::default()
    };
    Ok(match source {
        AsSource::Select(select) => TableDefinition {
            storage,
            select: Some(select),
            ..definition
        },
        AsSource::TableFunction(call) => TableDefinition {
            storage,
            as_table_function: Some(call),
            ..definition
        },
        AsSource::Table(as_database, as_table) => TableDefinition {
            storage: trailing_storage(state, storage)?,
            as_database,
            as_table: Some(as_table),
            ..definition
        },
    })
}

/// `AS [db.]table [ENGINE ...]`: the engine may come after the source name
/// when it was not given before AS.
fn trailing_storage(
    state: &mut ParseState<'_>,
    parsed: Option<Storage>,
) -> PResult<Option<Storage>> {
    match parsed {
        Some(parsed) => Ok(Some(parsed)),
        None => state.optional(storage),
    }
}

fn as_select(state: &mut ParseState<'_>) -> PResult<AsSource> {
    select_with_union(state).map(AsSource::Select)
}

fn as_table_function(state: &mut ParseState<'_>) -> PResult<AsSource> {
    function_call(state).map(AsSource::TableFunction)
}

fn as_table(state: &mut ParseState<'_>) -> PResult<AsSource> {
    qualified_name(state).map(|(database, table)| AsSource::Table(database, table))
}
