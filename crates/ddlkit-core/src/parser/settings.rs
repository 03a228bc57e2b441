//! SETTINGS and TTL lists.

use super::combinators::ParseState;
use super::error::PResult;
use super::expression::{expression, signed_literal};
use crate::ast::{SettingChange, TtlAction, TtlElement};
use crate::lexer::TokenKind;

/// `name = literal [, name = literal]*`
pub(crate) fn settings_list(state: &mut ParseState<'_>) -> PResult<Vec<SettingChange>> {
    state.list(setting_change, &TokenKind::Comma, false)
}

fn setting_change(state: &mut ParseState<'_>) -> PResult<SettingChange> {
    state.attempt(|state| {
        let name = state.identifier()?;
        state.token(&TokenKind::Equals)?;
        let value = signed_literal(state)?;
        Ok(SettingChange { name, value })
    })
}

/// `element [, element]*`
pub(crate) fn ttl_list(state: &mut ParseState<'_>) -> PResult<Vec<TtlElement>> {
    state.list(ttl_element, &TokenKind::Comma, false)
}

/// `expr [DELETE | TO DISK 'name' | TO VOLUME 'name']`
fn ttl_element(state: &mut ParseState<'_>) -> PResult<TtlElement> {
    state.attempt(|state| {
        let expression = expression(state)?;
        let action = if state.try_keyword("TO DISK") {
            TtlAction::ToDisk(state.string_literal()?)
        } else if state.try_keyword("TO VOLUME") {
            TtlAction::ToVolume(state.string_literal()?)
        } else {
            // DELETE is the default action and may be omitted
            state.try_keyword("DELETE");
            TtlAction::Delete
        };
        Ok(TtlElement { expression, action })
    })
}
