//! Statement parsing.

use ecs_ir::{
    AssignmentStatement, BlockStatement, ClassStatement, ExpressionStatement, Identifier,
    LetStatement, ReturnStatement, Span, Statement, TokenKind,
};

use super::expr::Precedence;
use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        match self.cursor.current_kind() {
            TokenKind::Let => self.parse_let_statement().map(Statement::Let),
            TokenKind::Return => self.parse_return_statement().map(Statement::Return),
            TokenKind::Class => self.parse_class_statement().map(Statement::Class),
            TokenKind::Ident if self.cursor.check_peek(TokenKind::Assign) => {
                self.parse_assignment_statement().map(Statement::Assignment)
            }
            _ => self.parse_expression_statement().map(Statement::Expression),
        }
    }

    /// `let name = value;`
    fn parse_let_statement(&mut self) -> Option<LetStatement> {
        let span = self.cursor.current_span();
        let stmt = self.parse_let_inner(span);
        if stmt.is_none() {
            self.synchronize();
        }
        stmt
    }

    fn parse_let_inner(&mut self, span: Span) -> Option<LetStatement> {
        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = self.current_identifier();
        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.cursor.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Some(LetStatement { name, value, span })
    }

    /// `return value;`
    fn parse_return_statement(&mut self) -> Option<ReturnStatement> {
        let span = self.cursor.current_span();
        self.cursor.advance();
        let Some(value) = self.parse_expression(Precedence::Lowest) else {
            self.synchronize();
            return None;
        };
        self.skip_optional_semicolon();
        Some(ReturnStatement { value, span })
    }

    /// `name = value;`
    fn parse_assignment_statement(&mut self) -> Option<AssignmentStatement> {
        let span = self.cursor.current_span();
        let name = self.current_identifier();
        self.cursor.advance();
        self.cursor.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Some(AssignmentStatement { name, value, span })
    }

    /// `class Name { key: value, ... }`
    fn parse_class_statement(&mut self) -> Option<ClassStatement> {
        let span = self.cursor.current_span();
        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = self.current_identifier();
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_hash_literal()?;
        self.skip_optional_semicolon();
        Some(ClassStatement { name, body, span })
    }

    fn parse_expression_statement(&mut self) -> Option<ExpressionStatement> {
        let span = self.cursor.current_span();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Some(ExpressionStatement { expression, span })
    }

    /// `{ statements }`, entered with the cursor on `{`.
    pub(crate) fn parse_block_statement(&mut self) -> BlockStatement {
        let span = self.cursor.current_span();
        let mut statements = Vec::new();
        self.cursor.advance();

        while !self.cursor.check(TokenKind::RBrace) && !self.cursor.is_at_end() {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.cursor.advance();
        }

        if self.cursor.is_at_end() {
            self.error(ParseError::UnexpectedToken {
                expected: TokenKind::RBrace,
                found: TokenKind::Eof,
                span: self.cursor.current_span(),
            });
        }

        BlockStatement {
            statements,
            span: span.merge(self.cursor.current_span()),
        }
    }

    /// Identifier from the current token. Callers check the kind first.
    pub(crate) fn current_identifier(&self) -> Identifier {
        let token = self.cursor.current();
        Identifier::new(token.literal.clone(), token.span)
    }
}
