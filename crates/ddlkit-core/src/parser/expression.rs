//! Expression grammar.

use super::combinators::ParseState;
use super::error::{Failure, PResult};
use super::fragments::identifier_with_optional_parameters;
use super::pratt::{infix_operator, prefix_operator, InfixOperator};
use super::select::select_with_union;
use crate::ast::{Expr, FunctionCall, IntervalUnit, Literal};
use crate::lexer::TokenKind;

/// Full expression: lambda, ternary and everything below.
pub(crate) fn expression(state: &mut ParseState<'_>) -> PResult<Expr> {
    if starts_lambda(state) {
        if let Some(lambda) = state.optional(lambda)? {
            return Ok(lambda);
        }
    }
    ternary(state)
}

/// Expression without the lambda and ternary levels.
pub(crate) fn logical_or_expression(state: &mut ParseState<'_>) -> PResult<Expr> {
    binary_expression(state, 0)
}

/// Comma-separated expressions, possibly none.
pub(crate) fn expression_list(state: &mut ParseState<'_>) -> PResult<Vec<Expr>> {
    state.list(expression, &TokenKind::Comma, true)
}

fn starts_lambda(state: &ParseState<'_>) -> bool {
    match state.current().kind {
        TokenKind::LeftParen => true,
        TokenKind::BareWord(_) | TokenKind::QuotedIdentifier(_) => {
            matches!(state.peek(1).kind, TokenKind::Arrow)
        }
        _ => false,
    }
}

fn lambda(state: &mut ParseState<'_>) -> PResult<Expr> {
    state.attempt(|state| {
        let params = if state.try_token(&TokenKind::LeftParen) {
            let params = state.list(ParseState::identifier, &TokenKind::Comma, false)?;
            state.token(&TokenKind::RightParen)?;
            params
        } else {
            vec![state.identifier()?]
        };
        state.token(&TokenKind::Arrow)?;
        let body = expression(state)?;
        Ok(Expr::Lambda {
            params,
            body: Box::new(body),
        })
    })
}

fn ternary(state: &mut ParseState<'_>) -> PResult<Expr> {
    state.attempt(|state| {
        let condition = binary_expression(state, 0)?;
        if !state.check_token(&TokenKind::QuestionMark) {
            return Ok(condition);
        }
        state.advance();
        let then = expression(state)?;
        state.token(&TokenKind::Colon)?;
        let otherwise = expression(state)?;
        Ok(Expr::Ternary {
            condition: Box::new(condition),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        })
    })
}

/// Parses an expression using Pratt parsing.
fn binary_expression(state: &mut ParseState<'_>, min_bp: u8) -> PResult<Expr> {
    state.descend(|state| {
        state.attempt(|state| {
            let mut lhs = prefix(state)?;

            while let Some((operator, width)) = infix_operator(state.current(), state.peek(1)) {
                let (l_bp, r_bp) = operator.binding_power();
                if l_bp < min_bp {
                    break;
                }
                for _ in 0..width {
                    state.advance();
                }

                lhs = match operator {
                    InfixOperator::Binary(op) => {
                        let rhs = binary_expression(state, r_bp)?;
                        Expr::Binary {
                            left: Box::new(lhs),
                            op,
                            right: Box::new(rhs),
                        }
                    }
                    InfixOperator::IsNull => {
                        let negated = state.try_keyword("NOT");
                        state.keyword("NULL")?;
                        Expr::IsNull {
                            expr: Box::new(lhs),
                            negated,
                        }
                    }
                    InfixOperator::Between { negated } => {
                        let low = binary_expression(state, r_bp)?;
                        state.keyword("AND")?;
                        let high = binary_expression(state, r_bp)?;
                        Expr::Between {
                            expr: Box::new(lhs),
                            low: Box::new(low),
                            high: Box::new(high),
                            negated,
                        }
                    }
                };
            }

            Ok(lhs)
        })
    })
}

/// Parses a prefix expression.
fn prefix(state: &mut ParseState<'_>) -> PResult<Expr> {
    if let Some((op, bp)) = prefix_operator(state.current()) {
        let checkpoint = state.checkpoint();
        state.advance();
        match binary_expression(state, bp) {
            Ok(operand) => {
                return Ok(Expr::Unary {
                    op,
                    operand: Box::new(operand),
                });
            }
            Err(Failure::Mismatch) => state.restore(checkpoint),
            Err(abort) => return Err(abort),
        }
    }
    primary(state)
}

/// Parses a primary expression.
fn primary(state: &mut ParseState<'_>) -> PResult<Expr> {
    let token = state.current();
    match &token.kind {
        TokenKind::Number(text) => match number_literal(text) {
            Some(literal) => {
                state.advance();
                Ok(Expr::Literal(literal))
            }
            None => {
                state.expect_here("number");
                Err(Failure::Mismatch)
            }
        },
        TokenKind::StringLiteral(value) => {
            state.advance();
            Ok(Expr::Literal(Literal::String(value.clone())))
        }
        TokenKind::Star => {
            state.advance();
            Ok(Expr::Asterisk)
        }
        TokenKind::LeftBracket => array(state),
        TokenKind::LeftParen => parenthesized(state),
        TokenKind::BareWord(_) if token.is_word("NULL") => {
            state.advance();
            Ok(Expr::Literal(Literal::Null))
        }
        TokenKind::BareWord(_) | TokenKind::QuotedIdentifier(_) => {
            if token.is_word("INTERVAL") {
                if let Some(interval) = state.optional(interval)? {
                    return Ok(interval);
                }
            }
            if token.is_word("CAST") {
                if let Some(cast) = state.optional(cast)? {
                    return Ok(cast);
                }
            }
            function_or_identifier(state)
        }
        _ => {
            state.expect_here("expression");
            Err(Failure::Mismatch)
        }
    }
}

/// Converts number text to the narrowest literal that holds it.
pub(crate) fn number_literal(text: &str) -> Option<Literal> {
    super::combinators::parse_unsigned(text)
        .map(Literal::UInt)
        .or_else(|| text.parse::<f64>().ok().map(Literal::Float))
}

fn array(state: &mut ParseState<'_>) -> PResult<Expr> {
    state.attempt(|state| {
        state.token(&TokenKind::LeftBracket)?;
        let items = expression_list(state)?;
        state.token(&TokenKind::RightBracket)?;
        Ok(Expr::Array(items))
    })
}

/// `()`, `(SELECT ...)`, `(expr)` or `(a, b, ...)`.
fn parenthesized(state: &mut ParseState<'_>) -> PResult<Expr> {
    state.attempt(|state| {
        state.token(&TokenKind::LeftParen)?;
        if state.check_keyword("SELECT") {
            let query = select_with_union(state)?;
            state.token(&TokenKind::RightParen)?;
            return Ok(Expr::Subquery(Box::new(query)));
        }
        let mut items = expression_list(state)?;
        state.token(&TokenKind::RightParen)?;
        if items.len() == 1 {
            if let Some(single) = items.pop() {
                return Ok(single);
            }
        }
        Ok(Expr::Tuple(items))
    })
}

fn interval(state: &mut ParseState<'_>) -> PResult<Expr> {
    state.attempt(|state| {
        state.keyword("INTERVAL")?;
        let value = prefix(state)?;
        let unit = state
            .current()
            .as_bare_word()
            .and_then(IntervalUnit::from_keyword);
        let Some(unit) = unit else {
            state.expect_here("interval unit");
            return Err(Failure::Mismatch);
        };
        state.advance();
        Ok(Expr::Interval {
            value: Box::new(value),
            unit,
        })
    })
}

fn cast(state: &mut ParseState<'_>) -> PResult<Expr> {
    state.attempt(|state| {
        state.keyword("CAST")?;
        state.token(&TokenKind::LeftParen)?;
        let expr = expression(state)?;
        state.keyword("AS")?;
        let data_type = identifier_with_optional_parameters(state)?;
        state.token(&TokenKind::RightParen)?;
        Ok(Expr::Cast {
            expr: Box::new(expr),
            data_type,
        })
    })
}

/// `name(args)` or `name(params)(args)`.
pub(crate) fn function_call(state: &mut ParseState<'_>) -> PResult<FunctionCall> {
    state.attempt(|state| {
        let name = state.identifier()?;
        let first = parenthesized_arguments(state)?;
        let (parameters, arguments) = match state.optional(parenthesized_arguments)? {
            Some(arguments) => (Some(first), arguments),
            None => (None, first),
        };
        Ok(FunctionCall {
            name,
            parameters,
            arguments,
        })
    })
}

fn parenthesized_arguments(state: &mut ParseState<'_>) -> PResult<Vec<Expr>> {
    state.attempt(|state| {
        state.token(&TokenKind::LeftParen)?;
        let arguments = expression_list(state)?;
        state.token(&TokenKind::RightParen)?;
        Ok(arguments)
    })
}

fn function_or_identifier(state: &mut ParseState<'_>) -> PResult<Expr> {
    if matches!(state.peek(1).kind, TokenKind::LeftParen) {
        return function_call(state).map(Expr::Function);
    }
    let parts = state.list(ParseState::identifier, &TokenKind::Dot, false)?;
    Ok(Expr::Identifier(parts))
}

/// `a`, `db.t` or `db.t.a`, joined with dots.
pub(crate) fn compound_identifier(state: &mut ParseState<'_>) -> PResult<String> {
    let parts = state.list(ParseState::identifier, &TokenKind::Dot, false)?;
    Ok(parts.join("."))
}

/// A literal with an optional leading minus, as used by SETTINGS.
pub(crate) fn signed_literal(state: &mut ParseState<'_>) -> PResult<Literal> {
    state.attempt(|state| {
        let negative = state.try_token(&TokenKind::Minus);
        let token = state.current();
        let literal = match &token.kind {
            TokenKind::Number(text) => number_literal(text).and_then(|literal| {
                if !negative {
                    return Some(literal);
                }
                match literal {
                    Literal::UInt(value) => 0i64
                        .checked_sub_unsigned(value)
                        .map(Literal::Int),
                    Literal::Float(value) => Some(Literal::Float(-value)),
                    other => Some(other),
                }
            }),
            TokenKind::StringLiteral(value) if !negative => Some(Literal::String(value.clone())),
            TokenKind::BareWord(_) if !negative && token.is_word("NULL") => Some(Literal::Null),
            _ => None,
        };
        match literal {
            Some(literal) => {
                state.advance();
                Ok(literal)
            }
            None => {
                state.expect_here("literal");
                Err(Failure::Mismatch)
            }
        }
    })
}
