//! Source-like rendering of syntax nodes.

use std::fmt::{self, Display, Formatter};

use super::{
    ArrayLiteral, AssignmentStatement, BlockStatement, BooleanLiteral, CallExpression,
    ClassStatement, ExecExpression, Expression, ExpressionStatement, FloatLiteral, ForExpression,
    FunctionLiteral, HashLiteral, Identifier, IfExpression, IndexAssignmentExpression,
    IndexExpression, InfixExpression, IntegerLiteral, LetStatement, NewExpression,
    PrefixExpression, Program, ReturnStatement, SleepExpression, Statement, StringLiteral,
    WhileExpression,
};

/// Write `items` separated by `", "`.
fn comma_list<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(s) => s.fmt(f),
            Statement::Return(s) => s.fmt(f),
            Statement::Assignment(s) => s.fmt(f),
            Statement::Expression(s) => s.fmt(f),
            Statement::Class(s) => s.fmt(f),
        }
    }
}

impl Display for LetStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "let {} = {};", self.name, self.value)
    }
}

impl Display for ReturnStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "return {};", self.value)
    }
}

impl Display for AssignmentStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {};", self.name, self.value)
    }
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.expression.fmt(f)
    }
}

impl Display for BlockStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return f.write_str("{}");
        }
        f.write_str("{ ")?;
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{stmt}")?;
        }
        f.write_str(" }")
    }
}

impl Display for ClassStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "class {} {}", self.name, self.body)
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(e) => e.fmt(f),
            Expression::Integer(e) => e.fmt(f),
            Expression::Float(e) => e.fmt(f),
            Expression::String(e) => e.fmt(f),
            Expression::Boolean(e) => e.fmt(f),
            Expression::Array(e) => e.fmt(f),
            Expression::Hash(e) => e.fmt(f),
            Expression::Function(e) => e.fmt(f),
            Expression::Prefix(e) => e.fmt(f),
            Expression::Infix(e) => e.fmt(f),
            Expression::Call(e) => e.fmt(f),
            Expression::Index(e) => e.fmt(f),
            Expression::IndexAssignment(e) => e.fmt(f),
            Expression::If(e) => e.fmt(f),
            Expression::For(e) => e.fmt(f),
            Expression::While(e) => e.fmt(f),
            Expression::Sleep(e) => e.fmt(f),
            Expression::New(e) => e.fmt(f),
            Expression::Exec(e) => e.fmt(f),
        }
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Display for IntegerLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Display for FloatLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.value)
    }
}

impl Display for StringLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.value)
    }
}

impl Display for BooleanLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Display for ArrayLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        comma_list(f, &self.elements)?;
        f.write_str("]")
    }
}

impl Display for HashLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("}")
    }
}

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        comma_list(f, &self.parameters)?;
        write!(f, ") {}", self.body)
    }
}

impl Display for PrefixExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

impl Display for InfixExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

impl Display for CallExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function)?;
        comma_list(f, &self.arguments)?;
        f.write_str(")")
    }
}

impl Display for IndexExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}[{}])", self.left, self.index)
    }
}

impl Display for IndexAssignmentExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}[{}] = {})", self.left, self.index, self.value)
    }
}

impl Display for IfExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "if {} {}", self.condition, self.consequence)?;
        if let Some(alternative) = &self.alternative {
            write!(f, " else {alternative}")?;
        }
        Ok(())
    }
}

impl Display for ForExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "for ({}, {}) {}", self.element, self.range, self.body)
    }
}

impl Display for WhileExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "while {} {}", self.condition, self.body)
    }
}

impl Display for SleepExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "sleep({}) {}", self.duration, self.body)
    }
}

impl Display for NewExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "new {}", self.class)
    }
}

impl Display for ExecExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "exec {}", self.command)
    }
}
