//! Position cursor over a tokenized input.

use crate::lexer::{Span, Token, TokenKind};

static END_OF_STREAM: Token = Token::new(TokenKind::EndOfStream, Span::new(0, 0));

/// A saved cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Checkpoint(usize);

/// Read-only view over a token slice with a movable position.
///
/// The slice is expected to end with an `EndOfStream` token; reading past
/// the end keeps returning the last token.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TokenCursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    pub(crate) const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Returns the token at the current position.
    pub(crate) fn current(&self) -> &'a Token {
        self.peek(0)
    }

    /// Returns the token `n` positions ahead.
    pub(crate) fn peek(&self, n: usize) -> &'a Token {
        let index = self.pos.saturating_add(n);
        self.tokens
            .get(index)
            .or_else(|| self.tokens.last())
            .unwrap_or(&END_OF_STREAM)
    }

    /// Moves to the next token. Stays put at the end of the stream.
    pub(crate) fn advance(&mut self) {
        if !self.is_end() {
            self.pos += 1;
        }
    }

    pub(crate) fn is_end(&self) -> bool {
        self.current().is_eof()
    }

    pub(crate) const fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.pos)
    }

    pub(crate) fn restore(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.0;
    }

    /// Index of the current token.
    pub(crate) const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the token at an absolute index.
    pub(crate) fn token_at(&self, index: usize) -> &'a Token {
        self.tokens
            .get(index)
            .or_else(|| self.tokens.last())
            .unwrap_or(&END_OF_STREAM)
    }
}
