//! Pratt parser for ECS.
//!
//! Consumes tokens straight from [`ecs_lexer::Lexer`] through a current/peek
//! [`Cursor`] and builds an [`ecs_ir::Program`]. Parsing never aborts:
//! problems are recorded as [`ParseError`]s and the parser carries on,
//! resynchronising at the next `;` after a malformed `let` or `return`.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::ParseError;

use ecs_ir::{Program, TokenKind};

/// Parser state.
pub struct Parser<'src> {
    cursor: Cursor<'src>,
    errors: Vec<ParseError>,
}

/// A parsed program plus every diagnostic collected along the way.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Diagnostics as display strings, in the order they were found.
    pub fn diagnostics(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Parser {
            cursor: Cursor::new(source),
            errors: Vec::new(),
        }
    }

    /// Parse statements until EOF.
    pub fn parse_program(mut self) -> ParseOutput {
        let mut program = Program::default();
        while !self.cursor.is_at_end() {
            if let Some(stmt) = self.parse_statement() {
                program.statements.push(stmt);
            }
            self.cursor.advance();
        }
        ParseOutput {
            program,
            errors: self.errors,
        }
    }

    /// Advance only if the lookahead is `kind`; record a diagnostic otherwise.
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.cursor.check_peek(kind) {
            self.cursor.advance();
            true
        } else {
            self.error(ParseError::UnexpectedToken {
                expected: kind,
                found: self.cursor.peek_kind(),
                span: self.cursor.peek().span,
            });
            false
        }
    }

    /// Consume a trailing `;` if one follows.
    fn skip_optional_semicolon(&mut self) {
        if self.cursor.check_peek(TokenKind::Semicolon) {
            self.cursor.advance();
        }
    }

    fn error(&mut self, error: ParseError) {
        tracing::debug!(span = ?error.span(), %error, "parse error");
        self.errors.push(error);
    }

    /// Skip to the next `;` (or EOF) after a malformed statement.
    ///
    /// Braces are not counted, so a bad `let` inside a block can resume
    /// past the block's closing `}`.
    fn synchronize(&mut self) {
        let from = self.cursor.current_span();
        while !self.cursor.check(TokenKind::Semicolon) && !self.cursor.is_at_end() {
            self.cursor.advance();
        }
        tracing::debug!(?from, to = ?self.cursor.current_span(), "resynchronized");
    }
}

/// Parse a whole source string.
pub fn parse(source: &str) -> ParseOutput {
    Parser::new(source).parse_program()
}
