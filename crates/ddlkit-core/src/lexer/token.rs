//! Token types produced by the lexer.

/// A byte range in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the text of `source` covered by this span.
    #[must_use]
    pub fn slice<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.start..self.end).unwrap_or_default()
    }
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Unquoted word: identifiers and keywords alike.
    BareWord(String),
    /// `"name"` or `` `name` `` with the quotes removed.
    QuotedIdentifier(String),
    /// `'text'` with escapes resolved.
    StringLiteral(String),
    /// Numeric literal, kept as written.
    Number(String),

    /// (
    LeftParen,
    /// )
    RightParen,
    /// [
    LeftBracket,
    /// ]
    RightBracket,
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// .
    Dot,
    /// = or ==
    Equals,
    /// != or <>
    NotEquals,
    /// <
    Less,
    /// <=
    LessOrEquals,
    /// >
    Greater,
    /// >=
    GreaterOrEquals,
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,
    /// %
    Percent,
    /// ||
    Concatenation,
    /// ->
    Arrow,
    /// ?
    QuestionMark,
    /// :
    Colon,

    /// End of input. Always the last token of a tokenized input.
    EndOfStream,
    /// Unrecognised input.
    Error(String),
}

impl TokenKind {
    /// Human-readable description used in "expected ..." diagnostics.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::BareWord(_) => "word",
            Self::QuotedIdentifier(_) => "quoted identifier",
            Self::StringLiteral(_) => "string literal",
            Self::Number(_) => "number",
            Self::LeftParen => "'('",
            Self::RightParen => "')'",
            Self::LeftBracket => "'['",
            Self::RightBracket => "']'",
            Self::Comma => "','",
            Self::Semicolon => "';'",
            Self::Dot => "'.'",
            Self::Equals => "'='",
            Self::NotEquals => "'!='",
            Self::Less => "'<'",
            Self::LessOrEquals => "'<='",
            Self::Greater => "'>'",
            Self::GreaterOrEquals => "'>='",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::Percent => "'%'",
            Self::Concatenation => "'||'",
            Self::Arrow => "'->'",
            Self::QuestionMark => "'?'",
            Self::Colon => "':'",
            Self::EndOfStream => "end of input",
            Self::Error(_) => "invalid token",
        }
    }

    /// Returns true if both kinds are the same variant, ignoring payloads.
    #[must_use]
    pub fn same_variant(&self, other: &Self) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }
}

/// A token with its span in the source code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The location in the source code.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns true if this is the end-of-input token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfStream)
    }

    /// Returns the word if this is a bare word.
    #[must_use]
    pub fn as_bare_word(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::BareWord(word) => Some(word),
            _ => None,
        }
    }

    /// Returns true if this is a bare word equal to `word`, ignoring ASCII case.
    #[must_use]
    pub fn is_word(&self, word: &str) -> bool {
        self.as_bare_word()
            .is_some_and(|w| w.eq_ignore_ascii_case(word))
    }
}
