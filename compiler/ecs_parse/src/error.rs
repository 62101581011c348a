//! Parse diagnostics.
//!
//! Each error renders as a single human-readable line. Hosts print them
//! however they like and must not evaluate a program that produced any.

use ecs_ir::{Span, TokenKind};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        span: Span,
    },

    #[error("no prefix parse function for {kind} found")]
    NoPrefixParse { kind: TokenKind, span: Span },

    #[error("could not parse \"{literal}\" as integer")]
    InvalidInteger { literal: String, span: Span },

    #[error("could not parse \"{literal}\" as float")]
    InvalidFloat { literal: String, span: Span },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::NoPrefixParse { span, .. }
            | ParseError::InvalidInteger { span, .. }
            | ParseError::InvalidFloat { span, .. } => *span,
        }
    }
}
