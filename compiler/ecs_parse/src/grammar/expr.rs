//! Expression parsing by precedence climbing.
//!
//! Binding power, loosest first:
//!
//! | Level | Operators |
//! |-------|-----------|
//! | `Or` | `\|\|` |
//! | `And` | `&&` |
//! | `Equals` | `==` `!=` |
//! | `LessGreater` | `<` `>` |
//! | `Sum` | `+` `-` |
//! | `Product` | `*` `/` `%` |
//! | `Prefix` | `!x` `-x` |
//! | `Call` | `f(..)` `a[..]` |

use ecs_ir::{
    BooleanLiteral, CallExpression, Expression, FloatLiteral, Identifier, IndexAssignmentExpression,
    IndexExpression, InfixExpression, InfixOp, IntegerLiteral, PrefixExpression, PrefixOp,
    StringLiteral, TokenKind,
};
use ecs_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Precedence {
    Lowest,
    Or,
    And,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

impl Precedence {
    fn of(kind: TokenKind) -> Precedence {
        match kind {
            TokenKind::Or => Precedence::Or,
            TokenKind::And => Precedence::And,
            TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Asterisk | TokenKind::Slash | TokenKind::Percent => Precedence::Product,
            TokenKind::LParen | TokenKind::LBracket => Precedence::Call,
            _ => Precedence::Lowest,
        }
    }
}

fn infix_op(kind: TokenKind) -> Option<InfixOp> {
    match kind {
        TokenKind::Plus => Some(InfixOp::Add),
        TokenKind::Minus => Some(InfixOp::Sub),
        TokenKind::Asterisk => Some(InfixOp::Mul),
        TokenKind::Slash => Some(InfixOp::Div),
        TokenKind::Percent => Some(InfixOp::Mod),
        TokenKind::Eq => Some(InfixOp::Eq),
        TokenKind::NotEq => Some(InfixOp::NotEq),
        TokenKind::Lt => Some(InfixOp::Lt),
        TokenKind::Gt => Some(InfixOp::Gt),
        TokenKind::And => Some(InfixOp::And),
        TokenKind::Or => Some(InfixOp::Or),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parse an expression whose operators all bind tighter than `precedence`.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        ensure_sufficient_stack(|| self.parse_expression_inner(precedence))
    }

    fn parse_expression_inner(&mut self, precedence: Precedence) -> Option<Expression> {
        let mut left = self.parse_prefix()?;

        while !self.cursor.check_peek(TokenKind::Semicolon)
            && precedence < Precedence::of(self.cursor.peek_kind())
        {
            let kind = self.cursor.peek_kind();
            self.cursor.advance();
            left = match kind {
                TokenKind::LParen => self.parse_call(left)?,
                TokenKind::LBracket => self.parse_index(left)?,
                _ => self.parse_infix(left)?,
            };
        }

        Some(left)
    }

    fn parse_prefix(&mut self) -> Option<Expression> {
        let span = self.cursor.current_span();
        match self.cursor.current_kind() {
            TokenKind::Ident => Some(Expression::Identifier(self.current_identifier())),
            TokenKind::Int => self.parse_integer().map(Expression::Integer),
            TokenKind::Float => self.parse_float().map(Expression::Float),
            TokenKind::String => Some(Expression::String(StringLiteral {
                value: self.cursor.current().literal.clone(),
                span,
            })),
            TokenKind::True | TokenKind::False => Some(Expression::Boolean(BooleanLiteral {
                value: self.cursor.check(TokenKind::True),
                span,
            })),
            TokenKind::Bang => self.parse_prefix_operator(PrefixOp::Not),
            TokenKind::Minus => self.parse_prefix_operator(PrefixOp::Neg),
            TokenKind::LParen => self.parse_grouped(),
            TokenKind::LBracket => self.parse_array_literal().map(Expression::Array),
            TokenKind::LBrace => self.parse_hash_literal().map(Expression::Hash),
            TokenKind::Function => self.parse_function_literal().map(Expression::Function),
            TokenKind::If => self.parse_if(),
            TokenKind::For => self.parse_for(),
            TokenKind::While => self.parse_while(),
            TokenKind::Sleep => self.parse_sleep(),
            TokenKind::New => self.parse_new(),
            TokenKind::Exec => self.parse_exec(),
            kind => {
                self.error(ParseError::NoPrefixParse { kind, span });
                None
            }
        }
    }

    fn parse_integer(&mut self) -> Option<IntegerLiteral> {
        let token = self.cursor.current();
        let span = token.span;
        if let Ok(value) = token.literal.parse::<i64>() {
            return Some(IntegerLiteral { value, span });
        }
        let literal = token.literal.clone();
        self.error(ParseError::InvalidInteger { literal, span });
        None
    }

    fn parse_float(&mut self) -> Option<FloatLiteral> {
        let token = self.cursor.current();
        let span = token.span;
        if let Ok(value) = token.literal.parse::<f64>() {
            return Some(FloatLiteral { value, span });
        }
        let literal = token.literal.clone();
        self.error(ParseError::InvalidFloat { literal, span });
        None
    }

    fn parse_prefix_operator(&mut self, operator: PrefixOp) -> Option<Expression> {
        let span = self.cursor.current_span();
        self.cursor.advance();
        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expression::Prefix(Box::new(PrefixExpression {
            operator,
            right,
            span,
        })))
    }

    /// `( expr )`
    fn parse_grouped(&mut self) -> Option<Expression> {
        self.cursor.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(expr)
    }

    /// Binary operator, entered with the cursor on the operator.
    fn parse_infix(&mut self, left: Expression) -> Option<Expression> {
        let kind = self.cursor.current_kind();
        let span = self.cursor.current_span();
        let operator = infix_op(kind)?;
        let precedence = Precedence::of(kind);
        self.cursor.advance();
        let right = self.parse_expression(precedence)?;
        Some(Expression::Infix(Box::new(InfixExpression {
            left,
            operator,
            right,
            span,
        })))
    }

    /// `callee(args)`, entered with the cursor on `(`.
    fn parse_call(&mut self, function: Expression) -> Option<Expression> {
        let span = self.cursor.current_span();
        let arguments = self.parse_expression_list(TokenKind::RParen)?;
        Some(Expression::Call(Box::new(CallExpression {
            function,
            arguments,
            span,
        })))
    }

    /// `left[index]` or `left[index] = value`, entered with the cursor on `[`.
    fn parse_index(&mut self, left: Expression) -> Option<Expression> {
        let span = self.cursor.current_span();
        self.cursor.advance();
        let index = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RBracket) {
            return None;
        }

        if self.cursor.check_peek(TokenKind::Assign) {
            self.cursor.advance();
            self.cursor.advance();
            let value = self.parse_expression(Precedence::Lowest)?;
            return Some(Expression::IndexAssignment(Box::new(
                IndexAssignmentExpression {
                    left,
                    index,
                    value,
                    span,
                },
            )));
        }

        Some(Expression::Index(Box::new(IndexExpression { left, index, span })))
    }

    /// Comma-separated expressions up to `end`, entered on the opening token.
    pub(crate) fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expression>> {
        let mut items = Vec::new();
        if self.cursor.check_peek(end) {
            self.cursor.advance();
            return Some(items);
        }

        self.cursor.advance();
        items.push(self.parse_expression(Precedence::Lowest)?);
        while self.cursor.check_peek(TokenKind::Comma) {
            self.cursor.advance();
            self.cursor.advance();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }
        Some(items)
    }

    /// Expect an identifier as the next token and return it.
    pub(crate) fn expect_identifier(&mut self) -> Option<Identifier> {
        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        Some(self.current_identifier())
    }
}
