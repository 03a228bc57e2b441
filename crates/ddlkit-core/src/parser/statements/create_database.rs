//! `CREATE|ATTACH DATABASE`

use super::create_or_attach;
use crate::ast::{CreateKind, CreateQuery, DatabaseDefinition};
use crate::parser::combinators::ParseState;
use crate::parser::error::PResult;
use crate::parser::fragments::on_cluster;
use crate::parser::storage::storage;

pub(super) fn create_database(state: &mut ParseState<'_>) -> PResult<CreateQuery> {
    state.attempt(|state| {
        let attach = create_or_attach(state)?;
        state.keyword("DATABASE")?;
        let if_not_exists = state.try_keyword("IF NOT EXISTS");
        let database = state.identifier()?;
        let cluster = on_cluster(state)?;
        let storage = state.optional(storage)?;

        Ok(CreateQuery {
            attach,
            if_not_exists,
            database: Some(database),
            table: None,
            cluster,
            kind: CreateKind::Database(DatabaseDefinition { storage }),
        })
    })
}
