//! Lexer for CREATE/ATTACH statements.
//!
//! Keywords are not recognised here: every word comes out as a
//! [`TokenKind::BareWord`] and the parser matches keywords against it
//! case-insensitively, so words such as `ENGINE` or `TYPE` remain usable as
//! identifiers.

mod token;
mod tokenizer;

pub use token::{Span, Token, TokenKind};
pub use tokenizer::Lexer;
