//! Syntax tree for ECS programs.
//!
//! Statements and expressions are closed enums so every consumer matches
//! exhaustively. Each node records the span of the token that introduced it.
//!
//! Every node implements `Display`, rendering a fully parenthesised source
//! form: `1 + 2 * 3` renders as `(1 + (2 * 3))`.

mod display;
mod operators;

use std::rc::Rc;

use crate::Span;

pub use operators::{InfixOp, PrefixOp};

/// Root node: the statements of one source chunk, in order.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

/// Statement nodes.
#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Assignment(AssignmentStatement),
    Expression(ExpressionStatement),
    Class(ClassStatement),
}

impl Statement {
    pub fn span(&self) -> Span {
        match self {
            Statement::Let(s) => s.span,
            Statement::Return(s) => s.span,
            Statement::Assignment(s) => s.span,
            Statement::Expression(s) => s.span,
            Statement::Class(s) => s.span,
        }
    }
}

/// `let name = value;`
#[derive(Clone, Debug, PartialEq)]
pub struct LetStatement {
    pub name: Identifier,
    pub value: Expression,
    pub span: Span,
}

/// `return value;`
#[derive(Clone, Debug, PartialEq)]
pub struct ReturnStatement {
    pub value: Expression,
    pub span: Span,
}

/// `name = value;` rebinding in the current frame.
#[derive(Clone, Debug, PartialEq)]
pub struct AssignmentStatement {
    pub name: Identifier,
    pub value: Expression,
    pub span: Span,
}

/// A bare expression used as a statement.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Expression,
    pub span: Span,
}

/// `{ stmt; stmt; }` body of functions, branches and loops.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
    pub span: Span,
}

/// `class Name { key: value, ... }`
///
/// The body is an ordinary hash literal. A pair keyed by the class name
/// supplies the constructor.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassStatement {
    pub name: Identifier,
    pub body: HashLiteral,
    pub span: Span,
}

/// Expression nodes.
#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Float(FloatLiteral),
    String(StringLiteral),
    Boolean(BooleanLiteral),
    Array(ArrayLiteral),
    Hash(HashLiteral),
    Function(FunctionLiteral),
    Prefix(Box<PrefixExpression>),
    Infix(Box<InfixExpression>),
    Call(Box<CallExpression>),
    Index(Box<IndexExpression>),
    IndexAssignment(Box<IndexAssignmentExpression>),
    If(Box<IfExpression>),
    For(Box<ForExpression>),
    While(Box<WhileExpression>),
    Sleep(Box<SleepExpression>),
    New(NewExpression),
    /// Reserved: parsed, never evaluated.
    Exec(Box<ExecExpression>),
}

impl Expression {
    pub fn span(&self) -> Span {
        match self {
            Expression::Identifier(e) => e.span,
            Expression::Integer(e) => e.span,
            Expression::Float(e) => e.span,
            Expression::String(e) => e.span,
            Expression::Boolean(e) => e.span,
            Expression::Array(e) => e.span,
            Expression::Hash(e) => e.span,
            Expression::Function(e) => e.span,
            Expression::Prefix(e) => e.span,
            Expression::Infix(e) => e.span,
            Expression::Call(e) => e.span,
            Expression::Index(e) => e.span,
            Expression::IndexAssignment(e) => e.span,
            Expression::If(e) => e.span,
            Expression::For(e) => e.span,
            Expression::While(e) => e.span,
            Expression::Sleep(e) => e.span,
            Expression::New(e) => e.span,
            Expression::Exec(e) => e.span,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

impl Identifier {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Identifier {
            name: name.into(),
            span,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegerLiteral {
    pub value: i64,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloatLiteral {
    pub value: f64,
    pub span: Span,
}

/// String literal with the surrounding quotes removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringLiteral {
    pub value: String,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BooleanLiteral {
    pub value: bool,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArrayLiteral {
    pub elements: Vec<Expression>,
    pub span: Span,
}

/// `{k: v, ...}` in source order. Duplicate keys are kept; the evaluator
/// lets the last one win.
#[derive(Clone, Debug, PartialEq)]
pub struct HashLiteral {
    pub pairs: Vec<(Expression, Expression)>,
    pub span: Span,
}

/// `fn(params) { body }`
///
/// Parameters and body are shared so function values can outlive the
/// [`Program`] they were parsed from.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionLiteral {
    pub parameters: Rc<[Identifier]>,
    pub body: Rc<BlockStatement>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PrefixExpression {
    pub operator: PrefixOp,
    pub right: Expression,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InfixExpression {
    pub left: Expression,
    pub operator: InfixOp,
    pub right: Expression,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CallExpression {
    pub function: Expression,
    pub arguments: Vec<Expression>,
    pub span: Span,
}

/// `left[index]`
#[derive(Clone, Debug, PartialEq)]
pub struct IndexExpression {
    pub left: Expression,
    pub index: Expression,
    pub span: Span,
}

/// `left[index] = value`
#[derive(Clone, Debug, PartialEq)]
pub struct IndexAssignmentExpression {
    pub left: Expression,
    pub index: Expression,
    pub value: Expression,
    pub span: Span,
}

/// `if (condition) { .. } else { .. }`
#[derive(Clone, Debug, PartialEq)]
pub struct IfExpression {
    pub condition: Expression,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
    pub span: Span,
}

/// `for (element, range) { .. }`
#[derive(Clone, Debug, PartialEq)]
pub struct ForExpression {
    pub element: Identifier,
    pub range: Expression,
    pub body: BlockStatement,
    pub span: Span,
}

/// `while (condition) { .. }`
#[derive(Clone, Debug, PartialEq)]
pub struct WhileExpression {
    pub condition: Expression,
    pub body: BlockStatement,
    pub span: Span,
}

/// `sleep(duration) { .. }`
#[derive(Clone, Debug, PartialEq)]
pub struct SleepExpression {
    pub duration: Expression,
    pub body: BlockStatement,
    pub span: Span,
}

/// `new ClassName`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewExpression {
    pub class: Identifier,
    pub span: Span,
}

/// `exec command`
#[derive(Clone, Debug, PartialEq)]
pub struct ExecExpression {
    pub command: Expression,
    pub span: Span,
}

#[cfg(test)]
mod tests;
