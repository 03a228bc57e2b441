//! `CREATE|ATTACH [OR REPLACE] [MATERIALIZED] VIEW`

use super::{create_or_attach, parenthesized_columns, to_target};
use crate::ast::{CreateKind, CreateQuery, ViewDefinition};
use crate::parser::combinators::ParseState;
use crate::parser::error::PResult;
use crate::parser::fragments::{on_cluster, qualified_name};
use crate::parser::select::select_with_union;
use crate::parser::storage::storage;

pub(super) fn create_view(state: &mut ParseState<'_>) -> PResult<CreateQuery> {
    state.attempt(|state| {
        let attach = create_or_attach(state)?;
        // OR REPLACE rules out both MATERIALIZED and IF NOT EXISTS.
        let replace = state.try_keyword("OR REPLACE");
        let is_materialized = !replace && state.try_keyword("MATERIALIZED");
        state.keyword("VIEW")?;
        let if_not_exists = !replace && state.try_keyword("IF NOT EXISTS");
        let (database, table) = qualified_name(state)?;
        let cluster = on_cluster(state)?;

        let (to_database, to_table) = to_target(state)?;
        let columns = parenthesized_columns(state)?;

        // A materialized view without a TO target stores its own data.
        let (storage, is_populate) = if is_materialized && to_table.is_none() {
            let storage = storage(state)?;
            (Some(storage), state.try_keyword("POPULATE"))
        } else {
            (None, false)
        };

        state.keyword("AS")?;
        let select = select_with_union(state)?;

        Ok(CreateQuery {
            attach,
            if_not_exists,
            database,
            table: Some(table),
            cluster,
            kind: CreateKind::View(ViewDefinition {
                is_materialized,
                is_populate,
                replace,
                to_database,
                to_table,
                columns,
                storage,
                select,
            }),
        })
    })
}
