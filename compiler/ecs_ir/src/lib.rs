//! ECS IR - tokens and syntax tree shared by the lexer, parser and evaluator.
//!
//! - [`Span`]: byte range of a token or node in the source
//! - [`Token`] / [`TokenKind`]: the lexer's vocabulary
//! - [`ast`]: the closed set of statement and expression nodes
//!
//! The tree is built once by the parser and never mutated afterwards.
//! Function bodies are reference-counted so a closure value can keep its
//! body alive after the program that defined it is dropped.

pub mod ast;
mod span;
mod token;

pub use ast::{
    ArrayLiteral, AssignmentStatement, BlockStatement, BooleanLiteral, CallExpression,
    ClassStatement, ExecExpression, Expression, ExpressionStatement, FloatLiteral,
    ForExpression, FunctionLiteral, HashLiteral, Identifier, IfExpression,
    IndexAssignmentExpression, IndexExpression, InfixExpression, InfixOp, IntegerLiteral,
    LetStatement, NewExpression, PrefixExpression, PrefixOp, Program, ReturnStatement,
    SleepExpression, Statement, StringLiteral, WhileExpression,
};
pub use span::Span;
pub use token::{Token, TokenKind};
