//! Parse state and primitive combinators.
//!
//! Every rule is a function from `&mut ParseState` to [`PResult`]. A rule
//! that returns `Err` leaves the cursor where it found it: primitives never
//! consume on failure, and composite rules wrap their body in
//! [`ParseState::attempt`].

use super::cursor::{Checkpoint, TokenCursor};
use super::error::{Failure, PResult, ParseError};
use super::expected::Expected;
use super::ParseOptions;
use crate::lexer::{Token, TokenKind};

/// A grammar rule usable in [`ParseState::first_of`].
pub(crate) type Rule<T> = fn(&mut ParseState<'_>) -> PResult<T>;

/// Mutable state threaded through every grammar rule of one parse call.
pub(crate) struct ParseState<'t> {
    source: &'t str,
    cursor: TokenCursor<'t>,
    expected: Expected,
    depth: usize,
    max_depth: usize,
}

impl<'t> ParseState<'t> {
    pub(crate) const fn new(source: &'t str, tokens: &'t [Token], options: ParseOptions) -> Self {
        Self {
            source,
            cursor: TokenCursor::new(tokens),
            expected: Expected::new(),
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    // --- Cursor access ---

    pub(crate) fn current(&self) -> &'t Token {
        self.cursor.current()
    }

    pub(crate) fn peek(&self, n: usize) -> &'t Token {
        self.cursor.peek(n)
    }

    pub(crate) fn advance(&mut self) {
        self.cursor.advance();
    }

    pub(crate) const fn checkpoint(&self) -> Checkpoint {
        self.cursor.checkpoint()
    }

    pub(crate) fn restore(&mut self, checkpoint: Checkpoint) {
        self.cursor.restore(checkpoint);
    }

    /// Token index of the cursor.
    pub(crate) const fn position(&self) -> usize {
        self.cursor.position()
    }

    /// True at end of input or at a `;`.
    pub(crate) fn at_statement_end(&self) -> bool {
        let token = self.current();
        token.is_eof() || matches!(token.kind, TokenKind::Semicolon)
    }

    /// Records that `description` would have been accepted here.
    pub(crate) fn expect_here(&mut self, description: &'static str) {
        self.expected.record(self.cursor.position(), description);
    }

    /// Starts a fresh diagnostic scope at the current position.
    pub(crate) fn reset_expected(&mut self) {
        self.expected.reset(self.cursor.position());
    }

    // --- Primitives ---

    /// Returns true if the current token has the kind of `kind`, without
    /// consuming it or recording anything.
    pub(crate) fn check_token(&self, kind: &TokenKind) -> bool {
        self.current().kind.same_variant(kind)
    }

    /// Matches one token of a payload-free kind.
    pub(crate) fn token(&mut self, kind: &TokenKind) -> PResult<()> {
        if self.check_token(kind) {
            self.advance();
            Ok(())
        } else {
            self.expect_here(kind.describe());
            Err(Failure::Mismatch)
        }
    }

    /// Like [`Self::token`], reporting the outcome as a flag.
    pub(crate) fn try_token(&mut self, kind: &TokenKind) -> bool {
        self.token(kind).is_ok()
    }

    /// Returns true if the words of `keyword` follow, without consuming.
    pub(crate) fn check_keyword(&self, keyword: &str) -> bool {
        keyword
            .split_ascii_whitespace()
            .enumerate()
            .all(|(i, word)| self.peek(i).is_word(word))
    }

    /// Matches a possibly multi-word keyword, ignoring ASCII case. Consumes
    /// every word or none.
    pub(crate) fn keyword(&mut self, keyword: &'static str) -> PResult<()> {
        if self.check_keyword(keyword) {
            for _ in keyword.split_ascii_whitespace() {
                self.advance();
            }
            Ok(())
        } else {
            self.expect_here(keyword);
            Err(Failure::Mismatch)
        }
    }

    /// Like [`Self::keyword`], reporting the outcome as a flag.
    pub(crate) fn try_keyword(&mut self, keyword: &'static str) -> bool {
        self.keyword(keyword).is_ok()
    }

    /// Matches a bare or quoted identifier.
    pub(crate) fn identifier(&mut self) -> PResult<String> {
        match &self.current().kind {
            TokenKind::BareWord(name) | TokenKind::QuotedIdentifier(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => {
                self.expect_here("identifier");
                Err(Failure::Mismatch)
            }
        }
    }

    /// Matches a string literal.
    pub(crate) fn string_literal(&mut self) -> PResult<String> {
        if let TokenKind::StringLiteral(value) = &self.current().kind {
            let value = value.clone();
            self.advance();
            Ok(value)
        } else {
            self.expect_here("string literal");
            Err(Failure::Mismatch)
        }
    }

    /// Matches a number token that is a valid unsigned integer.
    pub(crate) fn unsigned_integer(&mut self) -> PResult<u64> {
        if let TokenKind::Number(text) = &self.current().kind {
            if let Some(value) = parse_unsigned(text) {
                self.advance();
                return Ok(value);
            }
        }
        self.expect_here("unsigned integer");
        Err(Failure::Mismatch)
    }

    // --- Combinators ---

    /// Runs `rule`, rewinding the cursor if it fails.
    pub(crate) fn attempt<T>(&mut self, rule: impl FnOnce(&mut Self) -> PResult<T>) -> PResult<T> {
        let start = self.checkpoint();
        let result = rule(self);
        if result.is_err() {
            self.restore(start);
        }
        result
    }

    /// Runs `rule`, turning a mismatch into `None`.
    pub(crate) fn optional<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> PResult<T>,
    ) -> PResult<Option<T>> {
        match self.attempt(rule) {
            Ok(value) => Ok(Some(value)),
            Err(Failure::Mismatch) => Ok(None),
            Err(abort) => Err(abort),
        }
    }

    /// Ordered alternation: the first rule that matches wins.
    pub(crate) fn first_of<T>(&mut self, rules: &[Rule<T>]) -> PResult<T> {
        for rule in rules {
            match self.attempt(|state| rule(state)) {
                Err(Failure::Mismatch) => {}
                outcome => return outcome,
            }
        }
        Err(Failure::Mismatch)
    }

    /// Parses `element (separator element)*`.
    ///
    /// A separator not followed by an element is left unconsumed and ends the
    /// list. An empty list fails unless `allow_empty` is set.
    pub(crate) fn list<T>(
        &mut self,
        mut element: impl FnMut(&mut Self) -> PResult<T>,
        separator: &TokenKind,
        allow_empty: bool,
    ) -> PResult<Vec<T>> {
        let start = self.checkpoint();
        let mut items = Vec::new();
        let mut last_complete = start;

        loop {
            let before = self.position();
            match self.attempt(&mut element) {
                Ok(item) => {
                    if self.position() == before {
                        self.restore(start);
                        return Err(
                            self.internal_error("list element matched without consuming input")
                        );
                    }
                    items.push(item);
                    last_complete = self.checkpoint();
                }
                Err(Failure::Mismatch) => {
                    self.restore(last_complete);
                    break;
                }
                Err(abort) => {
                    self.restore(start);
                    return Err(abort);
                }
            }
            if !self.try_token(separator) {
                break;
            }
        }

        if items.is_empty() && !allow_empty {
            self.restore(start);
            return Err(Failure::Mismatch);
        }
        Ok(items)
    }

    /// Runs `rule` one nesting level deeper, aborting past the configured
    /// maximum depth.
    pub(crate) fn descend<T>(&mut self, rule: impl FnOnce(&mut Self) -> PResult<T>) -> PResult<T> {
        if self.depth >= self.max_depth {
            return Err(Failure::Abort(ParseError::DepthExceeded {
                max_depth: self.max_depth,
                position: self.current().span.start,
            }));
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    // --- Diagnostics ---

    pub(crate) fn internal_error(&self, message: &str) -> Failure {
        Failure::Abort(ParseError::Internal {
            message: message.to_string(),
            position: self.current().span.start,
        })
    }

    /// Builds the syntax error for the furthest failure recorded so far.
    pub(crate) fn syntax_error(&self) -> ParseError {
        let token = self.cursor.token_at(self.expected.furthest());
        let found = if token.is_eof() {
            "end of input".to_string()
        } else {
            token.span.slice(self.source).to_string()
        };
        ParseError::Syntax {
            expected: self.expected.descriptions(),
            found,
            position: token.span.start,
        }
    }

    /// Converts a rule outcome into the public error type.
    pub(crate) fn finish<T>(&self, result: PResult<T>) -> Result<T, ParseError> {
        result.map_err(|failure| match failure {
            Failure::Mismatch => self.syntax_error(),
            Failure::Abort(error) => error,
        })
    }
}

/// Parses decimal or `0x` hexadecimal unsigned integer text.
pub(crate) fn parse_unsigned(text: &str) -> Option<u64> {
    if let Some(hex) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        return u64::from_str_radix(hex, 16).ok();
    }
    text.parse().ok()
}
