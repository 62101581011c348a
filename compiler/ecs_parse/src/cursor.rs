//! Two-token window over the lexer.

use ecs_ir::{Span, Token, TokenKind};
use ecs_lexer::Lexer;

/// Current and lookahead token, refilled from the lexer on [`Cursor::advance`].
///
/// The lexer yields EOF forever once exhausted, so advancing past the end
/// is always safe.
pub struct Cursor<'src> {
    lexer: Lexer<'src>,
    current: Token,
    peek: Token,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Cursor {
            lexer,
            current,
            peek,
        }
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.current
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current.span
    }

    #[inline]
    pub fn peek(&self) -> &Token {
        &self.peek
    }

    #[inline]
    pub fn peek_kind(&self) -> TokenKind {
        self.peek.kind
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    #[inline]
    pub fn check_peek(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Shift the window one token forward.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }
}
