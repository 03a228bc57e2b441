//! Parser error types.

use thiserror::Error;

/// A parse error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No grammar alternative matched.
    ///
    /// `expected` lists what would have allowed the parse to continue at the
    /// furthest position any alternative reached.
    #[error(
        "expected one of {{{}}} but found {found} at position {position}",
        .expected.join(", ")
    )]
    Syntax {
        /// Sorted, de-duplicated descriptions.
        expected: Vec<String>,
        /// Source text of the offending token, or `end of input`.
        found: String,
        /// Byte offset of the offending token.
        position: usize,
    },

    /// The input could not be tokenized.
    #[error("lexical error at position {position}: {message}")]
    Lexical {
        /// What the lexer rejected.
        message: String,
        /// Byte offset of the rejected input.
        position: usize,
    },

    /// Expressions or subqueries were nested deeper than allowed.
    #[error("maximum nesting depth of {max_depth} exceeded at position {position}")]
    DepthExceeded {
        /// The configured limit.
        max_depth: usize,
        /// Byte offset where the limit was hit.
        position: usize,
    },

    /// A combinator contract was violated. Indicates a grammar bug rather
    /// than bad input.
    #[error("internal parser error at position {position}: {message}")]
    Internal {
        /// Description of the violated contract.
        message: String,
        /// Byte offset where it was detected.
        position: usize,
    },
}

impl ParseError {
    /// Returns the byte offset the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Syntax { position, .. }
            | Self::Lexical { position, .. }
            | Self::DepthExceeded { position, .. }
            | Self::Internal { position, .. } => *position,
        }
    }

    /// Returns the expected descriptions of a syntax error.
    #[must_use]
    pub fn expected(&self) -> &[String] {
        match self {
            Self::Syntax { expected, .. } => expected,
            _ => &[],
        }
    }
}

/// Outcome of a failed grammar rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Failure {
    /// The rule does not match here; enclosing alternatives may try others.
    Mismatch,
    /// Parsing cannot continue; passes through every alternation.
    Abort(ParseError),
}

impl From<ParseError> for Failure {
    fn from(error: ParseError) -> Self {
        Self::Abort(error)
    }
}

/// Result of a grammar rule.
pub(crate) type PResult<T> = Result<T, Failure>;
