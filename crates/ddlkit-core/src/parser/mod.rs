//! CREATE/ATTACH statement parser.
//!
//! A backtracking parser built from small combinators over a token cursor,
//! with Pratt parsing for expressions. Every rule either succeeds or leaves
//! the cursor where it started, and the furthest position any primitive
//! failed at is remembered so that errors can list what would have been
//! accepted there.

mod combinators;
mod cursor;
mod dictionary;
mod error;
mod expected;
mod expression;
mod fragments;
mod pratt;
mod select;
mod settings;
mod statements;
mod storage;
mod table_properties;

pub use error::ParseError;

use crate::ast::{ColumnDeclaration, CreateQuery};
use crate::lexer::{Lexer, Token, TokenKind};
use combinators::ParseState;
use error::PResult;

/// Default bound on expression and subquery nesting.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest nesting of expressions and subqueries accepted before the
    /// parse aborts with [`ParseError::DepthExceeded`].
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Sets the maximum nesting depth.
    #[must_use]
    pub const fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Parser for CREATE and ATTACH statements.
///
/// The input is tokenized once on construction; each `parse_*` call starts
/// from the first token, so a parser can be reused.
pub struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    /// Creates a parser with default options.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self::with_options(source, ParseOptions::default())
    }

    /// Creates a parser with the given options.
    #[must_use]
    pub fn with_options(source: &'a str, options: ParseOptions) -> Self {
        let tokens = Lexer::new(source).tokenize();
        Self {
            source,
            tokens,
            options,
        }
    }

    /// Parses exactly one statement, optionally followed by `;`.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input does not tokenize, is not a
    /// CREATE/ATTACH statement, or has trailing input.
    pub fn parse_create_query(&self) -> Result<CreateQuery, ParseError> {
        self.check_lexical()?;
        let mut state = self.state();
        let result = state.attempt(|state| {
            let query = statements::create_query(state)?;
            state.try_token(&TokenKind::Semicolon);
            state.token(&TokenKind::EndOfStream)?;
            Ok(query)
        });
        self.finish(&state, result)
    }

    /// Parses a `;`-separated script of statements.
    ///
    /// Empty statements are skipped, so an empty script yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns the error of the first statement that fails to parse.
    pub fn parse_create_queries(&self) -> Result<Vec<CreateQuery>, ParseError> {
        self.check_lexical()?;
        let mut state = self.state();
        let result = script(&mut state);
        self.finish(&state, result)
    }

    /// Parses a bare column list such as `id UInt64, name String`, the form
    /// a table structure takes outside a CREATE statement.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is not a non-empty list of column
    /// declarations.
    pub fn parse_column_declarations(&self) -> Result<Vec<ColumnDeclaration>, ParseError> {
        self.check_lexical()?;
        let mut state = self.state();
        let result = state.attempt(|state| {
            let columns = table_properties::column_declaration_list(state)?;
            state.token(&TokenKind::EndOfStream)?;
            Ok(columns)
        });
        self.finish(&state, result)
    }

    fn state(&self) -> ParseState<'_> {
        ParseState::new(self.source, &self.tokens, self.options)
    }

    /// Reports the first unrecognised token, if any.
    fn check_lexical(&self) -> Result<(), ParseError> {
        let error = self.tokens.iter().find_map(|token| match &token.kind {
            TokenKind::Error(message) => Some(ParseError::Lexical {
                message: message.clone(),
                position: token.span.start,
            }),
            _ => None,
        });
        error.map_or(Ok(()), Err)
    }

    fn finish<T>(&self, state: &ParseState<'_>, result: PResult<T>) -> Result<T, ParseError> {
        let result = state.finish(result);
        if let Err(error) = &result {
            tracing::debug!(
                position = error.position(),
                input_len = self.source.len(),
                "parse failed"
            );
        }
        result
    }
}

fn script(state: &mut ParseState<'_>) -> PResult<Vec<CreateQuery>> {
    let mut queries = Vec::new();
    loop {
        while state.try_token(&TokenKind::Semicolon) {}
        if state.current().is_eof() {
            return Ok(queries);
        }
        // Diagnostics are scoped to the statement being parsed.
        state.reset_expected();
        queries.push(statements::create_query(state)?);
        if !state.at_statement_end() {
            state.expect_here(TokenKind::Semicolon.describe());
            return Err(error::Failure::Mismatch);
        }
    }
}
