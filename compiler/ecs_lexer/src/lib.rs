//! Lexer for ECS source text.
//!
//! A `logos` scanner does the raw matching; [`Lexer`] wraps it in the
//! pull interface the parser consumes: one [`Token`] per [`Lexer::next_token`]
//! call, ILLEGAL tokens for unrecognised input, and EOF forever once the
//! input is exhausted. Lexing never fails.

mod keywords;

use ecs_ir::{Span, Token, TokenKind};
use logos::Logos;

/// Raw token from logos, before keyword classification.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    // Operators (two-character forms first for readability; logos takes the longest match)
    #[token("==")]
    Eq,
    #[token("!=")]
    NotEq,
    #[token("&&")]
    And,
    #[token("||")]
    Or,
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("!")]
    Bang,
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    // Delimiters
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(".")]
    Dot,

    // Literals
    #[regex(r"[0-9]+\.[0-9]+")]
    Float,
    #[regex(r"[0-9]+")]
    Int,
    /// Double-quoted, no escapes. An unterminated string runs to end of input.
    #[regex(r#""[^"]*"?"#)]
    String,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Pull lexer over a source string.
pub struct Lexer<'src> {
    source: &'src str,
    raw: logos::Lexer<'src, RawToken>,
    done: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            source,
            raw: RawToken::lexer(source),
            done: false,
        }
    }

    /// Consume and return the next token.
    ///
    /// After end of input every call returns EOF with an empty literal.
    pub fn next_token(&mut self) -> Token {
        if self.done {
            return self.eof();
        }
        let Some(result) = self.raw.next() else {
            self.done = true;
            return self.eof();
        };

        let range = self.raw.span();
        let span = Span::from_range(range.clone());
        let text = self.source.get(range).unwrap_or_default();

        let Ok(raw) = result else {
            tracing::trace!(?span, text, "illegal character");
            return Token::new(TokenKind::Illegal, text, span);
        };
        convert(raw, text, span)
    }

    fn eof(&self) -> Token {
        let end = u32::try_from(self.source.len()).unwrap_or(u32::MAX);
        Token::eof(end)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens up to, not including, EOF.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            None
        } else {
            Some(token)
        }
    }
}

/// Lex a whole source string. The returned list always ends with EOF.
pub fn lex(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let at_end = token.is(TokenKind::Eof);
        tokens.push(token);
        if at_end {
            return tokens;
        }
    }
}

fn convert(raw: RawToken, text: &str, span: Span) -> Token {
    let kind = match raw {
        RawToken::Eq => TokenKind::Eq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::And => TokenKind::And,
        RawToken::Or => TokenKind::Or,
        RawToken::Assign => TokenKind::Assign,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Asterisk => TokenKind::Asterisk,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Colon => TokenKind::Colon,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Float => TokenKind::Float,
        RawToken::Int => TokenKind::Int,
        RawToken::String => {
            return Token::new(TokenKind::String, unquote(text), span);
        }
        RawToken::Ident => keywords::lookup(text).unwrap_or(TokenKind::Ident),
    };
    Token::new(kind, text, span)
}

/// Strip the opening quote and, if present, the closing one.
fn unquote(text: &str) -> &str {
    let inner = text.strip_prefix('"').unwrap_or(text);
    inner.strip_suffix('"').unwrap_or(inner)
}
