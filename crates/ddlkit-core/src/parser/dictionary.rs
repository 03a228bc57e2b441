//! Dictionary attribute list and body.

use super::combinators::ParseState;
use super::error::{Failure, PResult};
use super::expression::expression;
use super::fragments::{identifier_with_optional_parameters, name_list};
use crate::ast::{
    DictionaryAttribute, DictionaryBody, DictionaryLifetime, DictionaryParameter,
    DictionaryRange, DictionarySpec,
};
use crate::lexer::TokenKind;

/// `name type [DEFAULT e] [EXPRESSION e] [HIERARCHICAL] [INJECTIVE] [IS_OBJECT_ID]`
fn dictionary_attribute(state: &mut ParseState<'_>) -> PResult<DictionaryAttribute> {
    state.attempt(|state| {
        let name = state.identifier()?;
        let data_type = identifier_with_optional_parameters(state)?;
        let mut attribute = DictionaryAttribute {
            name,
            data_type,
            default: None,
            expression: None,
            hierarchical: false,
            injective: false,
            is_object_id: false,
        };

        loop {
            if attribute.default.is_none() && state.try_keyword("DEFAULT") {
                attribute.default = Some(expression(state)?);
            } else if attribute.expression.is_none() && state.try_keyword("EXPRESSION") {
                attribute.expression = Some(expression(state)?);
            } else if !attribute.hierarchical && state.try_keyword("HIERARCHICAL") {
                attribute.hierarchical = true;
            } else if !attribute.injective && state.try_keyword("INJECTIVE") {
                attribute.injective = true;
            } else if !attribute.is_object_id && state.try_keyword("IS_OBJECT_ID") {
                attribute.is_object_id = true;
            } else {
                break;
            }
        }
        Ok(attribute)
    })
}

pub(crate) fn dictionary_attribute_list(
    state: &mut ParseState<'_>,
) -> PResult<Vec<DictionaryAttribute>> {
    state.list(dictionary_attribute, &TokenKind::Comma, false)
}

/// `PRIMARY KEY names` followed by SOURCE, LIFETIME, LAYOUT and RANGE in any
/// order, each at most once.
pub(crate) fn dictionary_body(state: &mut ParseState<'_>) -> PResult<DictionaryBody> {
    state.attempt(|state| {
        state.keyword("PRIMARY KEY")?;
        let primary_key = name_list(state)?;
        let mut body = DictionaryBody {
            primary_key,
            source: None,
            lifetime: None,
            layout: None,
            range: None,
        };

        loop {
            if body.source.is_none() && state.try_keyword("SOURCE") {
                body.source = Some(dictionary_spec(state)?);
            } else if body.lifetime.is_none() && state.try_keyword("LIFETIME") {
                body.lifetime = Some(lifetime(state)?);
            } else if body.layout.is_none() && state.try_keyword("LAYOUT") {
                body.layout = Some(dictionary_spec(state)?);
            } else if body.range.is_none() && state.try_keyword("RANGE") {
                body.range = Some(range(state)?);
            } else {
                break;
            }
        }
        Ok(body)
    })
}

/// `(KIND(key value [,] ...))`
fn dictionary_spec(state: &mut ParseState<'_>) -> PResult<DictionarySpec> {
    state.attempt(|state| {
        state.token(&TokenKind::LeftParen)?;
        let name = state.identifier()?;
        state.token(&TokenKind::LeftParen)?;
        let mut parameters = Vec::new();
        while !state.check_token(&TokenKind::RightParen) {
            let key = state.identifier()?;
            let value = expression(state)?;
            parameters.push(DictionaryParameter { key, value });
            state.try_token(&TokenKind::Comma);
        }
        state.token(&TokenKind::RightParen)?;
        state.token(&TokenKind::RightParen)?;
        Ok(DictionarySpec { name, parameters })
    })
}

/// `(n)` or `(MIN a MAX b)` in either order.
fn lifetime(state: &mut ParseState<'_>) -> PResult<DictionaryLifetime> {
    state.attempt(|state| {
        state.token(&TokenKind::LeftParen)?;
        let lifetime = if let Some((min, max)) = state.optional(|state| {
            min_max(state, ParseState::unsigned_integer)
        })? {
            DictionaryLifetime { min, max }
        } else {
            DictionaryLifetime {
                min: 0,
                max: state.unsigned_integer()?,
            }
        };
        state.token(&TokenKind::RightParen)?;
        Ok(lifetime)
    })
}

/// `(MIN a MAX b)` in either order.
fn range(state: &mut ParseState<'_>) -> PResult<DictionaryRange> {
    state.attempt(|state| {
        state.token(&TokenKind::LeftParen)?;
        let (min, max) = min_max(state, ParseState::identifier)?;
        state.token(&TokenKind::RightParen)?;
        Ok(DictionaryRange { min, max })
    })
}

fn min_max<'t, T>(
    state: &mut ParseState<'t>,
    mut value: impl FnMut(&mut ParseState<'t>) -> PResult<T>,
) -> PResult<(T, T)> {
    state.attempt(|state| {
        if state.try_keyword("MIN") {
            let min = value(state)?;
            state.keyword("MAX")?;
            let max = value(state)?;
            Ok((min, max))
        } else if state.try_keyword("MAX") {
            let max = value(state)?;
            state.keyword("MIN")?;
            let min = value(state)?;
            Ok((min, max))
        } else {
            Err(Failure::Mismatch)
        }
    })
}
