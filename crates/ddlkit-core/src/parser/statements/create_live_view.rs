//! `CREATE|ATTACH [TEMPORARY] LIVE VIEW`

use super::{create_or_attach, parenthesized_columns, to_target};
use crate::ast::{CreateKind, CreateQuery, LiveViewDefinition};
use crate::parser::combinators::ParseState;
use crate::parser::error::PResult;
use crate::parser::fragments::{on_cluster, qualified_name};
use crate::parser::select::select_with_union;

pub(super) fn create_live_view(state: &mut ParseState<'_>) -> PResult<CreateQuery> {
    state.attempt(|state| {
        let attach = create_or_attach(state)?;
        let temporary = state.try_keyword("TEMPORARY");
        state.keyword("LIVE VIEW")?;
        let if_not_exists = state.try_keyword("IF NOT EXISTS");
        let (database, table) = qualified_name(state)?;
        let cluster = on_cluster(state)?;
        let (to_database, to_table) = to_target(state)?;
        let columns = parenthesized_columns(state)?;
        state.keyword("AS")?;
        let select = select_with_union(state)?;

        Ok(CreateQuery {
            attach,
            if_not_exists,
            database,
            table: Some(table),
            cluster,
            kind: CreateKind::LiveView(LiveViewDefinition {
                temporary,
                to_database,
                to_table,
                columns,
                select,
            }),
        })
    })
}
