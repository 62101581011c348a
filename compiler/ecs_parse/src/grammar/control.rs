//! Control-flow and keyword expressions: `if`, `for`, `while`, `sleep`,
//! `new`, `exec`.

use ecs_ir::{
    BlockStatement, ExecExpression, Expression, ForExpression, IfExpression, NewExpression,
    SleepExpression, TokenKind, WhileExpression,
};

use super::expr::Precedence;
use crate::Parser;

impl Parser<'_> {
    /// `if (cond) { .. } else { .. }`
    pub(crate) fn parse_if(&mut self) -> Option<Expression> {
        let span = self.cursor.current_span();
        let condition = self.parse_parenthesized()?;
        let consequence = self.parse_braced_block()?;

        let alternative = if self.cursor.check_peek(TokenKind::Else) {
            self.cursor.advance();
            Some(self.parse_braced_block()?)
        } else {
            None
        };

        Some(Expression::If(Box::new(IfExpression {
            condition,
            consequence,
            alternative,
            span,
        })))
    }

    /// `for (element, range) { .. }`
    pub(crate) fn parse_for(&mut self) -> Option<Expression> {
        let span = self.cursor.current_span();
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let element = self.expect_identifier()?;
        if !self.expect_peek(TokenKind::Comma) {
            return None;
        }
        self.cursor.advance();
        let range = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        let body = self.parse_braced_block()?;
        Some(Expression::For(Box::new(ForExpression {
            element,
            range,
            body,
            span,
        })))
    }

    /// `while (cond) { .. }`
    pub(crate) fn parse_while(&mut self) -> Option<Expression> {
        let span = self.cursor.current_span();
        let condition = self.parse_parenthesized()?;
        let body = self.parse_braced_block()?;
        Some(Expression::While(Box::new(WhileExpression {
            condition,
            body,
            span,
        })))
    }

    /// `sleep(duration) { .. }`
    pub(crate) fn parse_sleep(&mut self) -> Option<Expression> {
        let span = self.cursor.current_span();
        let duration = self.parse_parenthesized()?;
        let body = self.parse_braced_block()?;
        Some(Expression::Sleep(Box::new(SleepExpression {
            duration,
            body,
            span,
        })))
    }

    /// `new ClassName`
    pub(crate) fn parse_new(&mut self) -> Option<Expression> {
        let span = self.cursor.current_span();
        let class = self.expect_identifier()?;
        Some(Expression::New(NewExpression { class, span }))
    }

    /// `exec command`
    pub(crate) fn parse_exec(&mut self) -> Option<Expression> {
        let span = self.cursor.current_span();
        self.cursor.advance();
        let command = self.parse_expression(Precedence::Prefix)?;
        Some(Expression::Exec(Box::new(ExecExpression { command, span })))
    }

    /// `( expr )` following the keyword under the cursor.
    fn parse_parenthesized(&mut self) -> Option<Expression> {
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.cursor.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(expr)
    }

    /// `{ .. }` following the token under the cursor.
    fn parse_braced_block(&mut self) -> Option<BlockStatement> {
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        Some(self.parse_block_statement())
    }
}
