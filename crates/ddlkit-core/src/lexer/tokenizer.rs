//! Tokenizer implementation.

use super::{Span, Token, TokenKind};

/// A lexer that splits a query into tokens.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the character after the current one without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Advances past the current character if it equals `expected`.
    fn advance_if(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skips whitespace and comments.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }

            if self.peek() == Some('-') && self.peek_next() == Some('-') {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
                continue;
            }

            if self.peek() == Some('/') && self.peek_next() == Some('*') {
                self.advance();
                self.advance();
                loop {
                    match self.advance() {
                        Some('*') if self.peek() == Some('/') => {
                            self.advance();
                            break;
                        }
                        None => break,
                        _ => {}
                    }
                }
                continue;
            }

            break;
        }
    }

    /// Creates a token spanning from the token start to the current position.
    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, Span::new(self.start, self.pos))
    }

    fn error(&self, message: impl Into<String>) -> Token {
        self.make_token(TokenKind::Error(message.into()))
    }

    /// Scans a bare word. Keyword or identifier is decided by the parser.
    fn scan_bare_word(&mut self) -> Token {
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '$')
        {
            self.advance();
        }
        let text = &self.input[self.start..self.pos];
        self.make_token(TokenKind::BareWord(text.to_string()))
    }

    /// Scans a quoted identifier (`"name"` or `` `name` ``). The opening quote
    /// is already consumed.
    fn scan_quoted_identifier(&mut self, quote: char) -> Token {
        match self.scan_quoted(quote) {
            Some(name) if name.is_empty() => self.error("Empty quoted identifier"),
            Some(name) => self.make_token(TokenKind::QuotedIdentifier(name)),
            None => self.error("Unterminated quoted identifier"),
        }
    }

    /// Scans a string literal. The opening quote is already consumed.
    fn scan_string(&mut self) -> Token {
        match self.scan_quoted('\'') {
            Some(value) => self.make_token(TokenKind::StringLiteral(value)),
            None => self.error("Unterminated string literal"),
        }
    }

    /// Reads up to the closing `quote`, resolving doubled quotes and
    /// backslash escapes. Returns `None` at end of input.
    fn scan_quoted(&mut self, quote: char) -> Option<String> {
        let mut value = String::new();
        loop {
            match self.advance()? {
                c if c == quote => {
                    if self.advance_if(quote) {
                        value.push(quote);
                    } else {
                        return Some(value);
                    }
                }
                '\\' => match self.advance()? {
                    'n' => value.push('\n'),
                    't' => value.push('\t'),
                    'r' => value.push('\r'),
                    '0' => value.push('\0'),
                    other => value.push(other),
                },
                c => value.push(c),
            }
        }
    }

    /// Scans a number: integer, hexadecimal, decimal or exponent form.
    fn scan_number(&mut self) -> Token {
        if self.peek() == Some('0') && matches!(self.peek_next(), Some('x' | 'X')) {
            self.advance();
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
                self.advance();
            }
        } else {
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
            if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.advance();
                }
            }
            if matches!(self.peek(), Some('e' | 'E')) {
                let checkpoint = self.pos;
                self.advance();
                if matches!(self.peek(), Some('+' | '-')) {
                    self.advance();
                }
                if self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                        self.advance();
                    }
                } else {
                    self.pos = checkpoint;
                }
            }
        }

        if self.peek().is_some_and(|c| c.is_alphabetic() || c == '_') {
            while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
                self.advance();
            }
            return self.error(format!(
                "Invalid number: {}",
                &self.input[self.start..self.pos]
            ));
        }

        let text = &self.input[self.start..self.pos];
        self.make_token(TokenKind::Number(text.to_string()))
    }

    /// Scans the next token.
    #[must_use]
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();
        self.start = self.pos;

        let Some(c) = self.advance() else {
            return self.make_token(TokenKind::EndOfStream);
        };

        match c {
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            '[' => self.make_token(TokenKind::LeftBracket),
            ']' => self.make_token(TokenKind::RightBracket),
            ',' => self.make_token(TokenKind::Comma),
            ';' => self.make_token(TokenKind::Semicolon),
            '.' => self.make_token(TokenKind::Dot),
            '+' => self.make_token(TokenKind::Plus),
            '*' => self.make_token(TokenKind::Star),
            '/' => self.make_token(TokenKind::Slash),
            '%' => self.make_token(TokenKind::Percent),
            '?' => self.make_token(TokenKind::QuestionMark),
            ':' => self.make_token(TokenKind::Colon),
            '-' => {
                if self.advance_if('>') {
                    self.make_token(TokenKind::Arrow)
                } else {
                    self.make_token(TokenKind::Minus)
                }
            }
            '=' => {
                self.advance_if('=');
                self.make_token(TokenKind::Equals)
            }
            '!' => {
                if self.advance_if('=') {
                    self.make_token(TokenKind::NotEquals)
                } else {
                    self.error("Unexpected character: !")
                }
            }
            '<' => {
                if self.advance_if('=') {
                    self.make_token(TokenKind::LessOrEquals)
                } else if self.advance_if('>') {
                    self.make_token(TokenKind::NotEquals)
                } else {
                    self.make_token(TokenKind::Less)
                }
            }
            '>' => {
                if self.advance_if('=') {
                    self.make_token(TokenKind::GreaterOrEquals)
                } else {
                    self.make_token(TokenKind::Greater)
                }
            }
            '|' => {
                if self.advance_if('|') {
                    self.make_token(TokenKind::Concatenation)
                } else {
                    self.error("Unexpected character: |")
                }
            }
            '\'' => self.scan_string(),
            '"' | '`' => self.scan_quoted_identifier(c),
            c if c.is_ascii_digit() => {
                self.pos = self.start;
                self.scan_number()
            }
            c if c.is_alphabetic() || c == '_' => {
                self.pos = self.start;
                self.scan_bare_word()
            }
            _ => self.error(format!("Unexpected character: {c}")),
        }
    }

    /// Tokenizes the entire input. The last token is always
    /// [`TokenKind::EndOfStream`].
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}
