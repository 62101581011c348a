//! Array, hash and function literals.

use std::rc::Rc;

use ecs_ir::{ArrayLiteral, FunctionLiteral, HashLiteral, Identifier, TokenKind};

use super::expr::Precedence;
use crate::Parser;

impl Parser<'_> {
    /// `[a, b, c]`
    pub(crate) fn parse_array_literal(&mut self) -> Option<ArrayLiteral> {
        let span = self.cursor.current_span();
        let elements = self.parse_expression_list(TokenKind::RBracket)?;
        Some(ArrayLiteral { elements, span })
    }

    /// `{key: value, ...}`, entered with the cursor on `{`. A trailing comma
    /// is accepted.
    pub(crate) fn parse_hash_literal(&mut self) -> Option<HashLiteral> {
        let span = self.cursor.current_span();
        let mut pairs = Vec::new();

        while !self.cursor.check_peek(TokenKind::RBrace) {
            self.cursor.advance();
            let key = self.parse_expression(Precedence::Lowest)?;
            if !self.expect_peek(TokenKind::Colon) {
                return None;
            }
            self.cursor.advance();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if !self.cursor.check_peek(TokenKind::RBrace) && !self.expect_peek(TokenKind::Comma) {
                return None;
            }
        }

        if !self.expect_peek(TokenKind::RBrace) {
            return None;
        }
        Some(HashLiteral { pairs, span })
    }

    /// `fn(a, b) { body }`
    pub(crate) fn parse_function_literal(&mut self) -> Option<FunctionLiteral> {
        let span = self.cursor.current_span();
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let parameters = self.parse_parameters()?;
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block_statement();
        Some(FunctionLiteral {
            parameters: Rc::from(parameters),
            body: Rc::new(body),
            span,
        })
    }

    /// Parameter names, entered on `(` and leaving the cursor on `)`.
    fn parse_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();
        if self.cursor.check_peek(TokenKind::RParen) {
            self.cursor.advance();
            return Some(parameters);
        }

        parameters.push(self.expect_identifier()?);
        while self.cursor.check_peek(TokenKind::Comma) {
            self.cursor.advance();
            parameters.push(self.expect_identifier()?);
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(parameters)
    }
}
