//! Pratt expression parser tables for operator precedence.
//!
//! Keywords reach the parser as bare words, so operators are recognised from
//! the current token and, for `NOT LIKE` / `NOT IN` / `NOT BETWEEN` and
//! `IS`, the one after it.

use crate::ast::{BinaryOp, UnaryOp};
use crate::lexer::{Token, TokenKind};

/// Binding power of prefix `NOT`: looser than comparisons, tighter than AND.
pub const NOT_PREFIX_BP: u8 = 5;

/// Binding power of unary minus.
pub const NEGATION_BP: u8 = 15;

/// An infix operator and the extra syntax it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOperator {
    /// A plain binary operator.
    Binary(BinaryOp),
    /// `IS [NOT] NULL`; the NOT is read by the parser.
    IsNull,
    /// `[NOT] BETWEEN low AND high`
    Between { negated: bool },
}

impl InfixOperator {
    /// Returns `(left_bp, right_bp)`.
    ///
    /// - Higher binding power = binds tighter
    /// - Left associative: left_bp < right_bp
    #[must_use]
    pub const fn binding_power(&self) -> (u8, u8) {
        match self {
            Self::Binary(op) => binary_binding_power(*op),
            Self::IsNull | Self::Between { .. } => (7, 8),
        }
    }
}

/// Returns the infix binding power of a binary operator.
#[must_use]
pub const fn binary_binding_power(op: BinaryOp) -> (u8, u8) {
    match op {
        // Logical OR (lowest precedence)
        BinaryOp::Or => (1, 2),

        // Logical AND
        BinaryOp::And => (3, 4),

        // Comparison, LIKE, IN
        BinaryOp::Eq
        | BinaryOp::NotEq
        | BinaryOp::Lt
        | BinaryOp::LtEq
        | BinaryOp::Gt
        | BinaryOp::GtEq
        | BinaryOp::Like
        | BinaryOp::NotLike
        | BinaryOp::In
        | BinaryOp::NotIn => (7, 8),

        // String concatenation
        BinaryOp::Concat => (9, 10),

        // Additive
        BinaryOp::Add | BinaryOp::Sub => (11, 12),

        // Multiplicative
        BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => (13, 14),
    }
}

/// Recognises an infix operator at `current`, looking at `next` for
/// two-word forms. Returns the operator and how many tokens it spans.
#[must_use]
pub fn infix_operator(current: &Token, next: &Token) -> Option<(InfixOperator, usize)> {
    let binary = |op| Some((InfixOperator::Binary(op), 1));
    match &current.kind {
        TokenKind::Equals => binary(BinaryOp::Eq),
        TokenKind::NotEquals => binary(BinaryOp::NotEq),
        TokenKind::Less => binary(BinaryOp::Lt),
        TokenKind::LessOrEquals => binary(BinaryOp::LtEq),
        TokenKind::Greater => binary(BinaryOp::Gt),
        TokenKind::GreaterOrEquals => binary(BinaryOp::GtEq),
        TokenKind::Concatenation => binary(BinaryOp::Concat),
        TokenKind::Plus => binary(BinaryOp::Add),
        TokenKind::Minus => binary(BinaryOp::Sub),
        TokenKind::Star => binary(BinaryOp::Mul),
        TokenKind::Slash => binary(BinaryOp::Div),
        TokenKind::Percent => binary(BinaryOp::Mod),
        TokenKind::BareWord(word) => {
            let word = word.to_ascii_uppercase();
            match word.as_str() {
                "OR" => binary(BinaryOp::Or),
                "AND" => binary(BinaryOp::And),
                "LIKE" => binary(BinaryOp::Like),
                "IN" => binary(BinaryOp::In),
                "IS" => Some((InfixOperator::IsNull, 1)),
                "BETWEEN" => Some((InfixOperator::Between { negated: false }, 1)),
                "NOT" if next.is_word("LIKE") => {
                    Some((InfixOperator::Binary(BinaryOp::NotLike), 2))
                }
                "NOT" if next.is_word("IN") => Some((InfixOperator::Binary(BinaryOp::NotIn), 2)),
                "NOT" if next.is_word("BETWEEN") => {
                    Some((InfixOperator::Between { negated: true }, 2))
                }
                _ => None,
            }
        }
        _ => None,
    }
}

/// Recognises a prefix operator and returns it with its binding power.
#[must_use]
pub fn prefix_operator(token: &Token) -> Option<(UnaryOp, u8)> {
    match &token.kind {
        TokenKind::Minus => Some((UnaryOp::Neg, NEGATION_BP)),
        _ if token.is_word("NOT") => Some((UnaryOp::Not, NOT_PREFIX_BP)),
        _ => None,
    }
}
