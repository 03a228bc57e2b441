//! `CREATE|ATTACH DICTIONARY`

use super::create_or_attach;
use crate::ast::{CreateKind, CreateQuery, DictionaryDefinition};
use crate::lexer::TokenKind;
use crate::parser::combinators::ParseState;
use crate::parser::dictionary::{dictionary_attribute_list, dictionary_body};
use crate::parser::error::PResult;
use crate::parser::fragments::{on_cluster, qualified_name};

pub(super) fn create_dictionary(state: &mut ParseState<'_>) -> PResult<CreateQuery> {
    state.attempt(|state| {
        let attach = create_or_attach(state)?;
        state.keyword("DICTIONARY")?;
        let if_not_exists = state.try_keyword("IF NOT EXISTS");
        let (database, table) = qualified_name(state)?;
        let cluster = on_cluster(state)?;

        let definition = if attach && state.at_statement_end() {
            DictionaryDefinition::default()
        } else {
            state.token(&TokenKind::LeftParen)?;
            let attributes = dictionary_attribute_list(state)?;
            state.token(&TokenKind::RightParen)?;
            let body = dictionary_body(state)?;
            DictionaryDefinition {
                attributes: Some(attributes),
                body: Some(body),
            }
        };

        Ok(CreateQuery {
            attach,
            if_not_exists,
            database,
            table: Some(table),
            cluster,
            kind: CreateKind::Dictionary(definition),
        })
    })
}
