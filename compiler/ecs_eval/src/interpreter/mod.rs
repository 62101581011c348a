//! Tree-walking evaluator.
//!
//! Every evaluation step returns [`EvalResult`]: `Ok` with a value, or `Err`
//! carrying a [`ControlAction`] (a `return` on its way to the enclosing
//! call, or a runtime error on its way to the host). Blocks, conditionals
//! and loops pass both through untouched; function calls stop returns; the
//! program boundary turns errors back into [`Value::Error`].
//!
//! Each evaluation also threads an object context hash. The program resets
//! it to a fresh empty hash for every top-level statement.

mod builder;
mod call;
mod collections;
mod control;
mod operators;

use std::rc::Rc;

use ecs_ir::{BlockStatement, Expression, Identifier, Program, Statement};
use ecs_stack::ensure_sufficient_stack;

pub use builder::EvaluatorBuilder;

use crate::{
    BuiltinRegistry, ControlAction, Environment, EvalError, EvalResult, FunctionValue, HashObject,
    HashRef, Value,
};

/// Evaluates syntax trees.
///
/// Holds only configuration; all program state lives in the
/// [`Environment`] passed to each call.
pub struct Evaluator {
    builtins: BuiltinRegistry,
}

/// Any node that can be evaluated on its own.
#[derive(Copy, Clone, Debug)]
pub enum Node<'a> {
    Program(&'a Program),
    Statement(&'a Statement),
    Block(&'a BlockStatement),
    Expression(&'a Expression),
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(program: &'a Program) -> Self {
        Node::Program(program)
    }
}

impl<'a> From<&'a Statement> for Node<'a> {
    fn from(stmt: &'a Statement) -> Self {
        Node::Statement(stmt)
    }
}

impl<'a> From<&'a BlockStatement> for Node<'a> {
    fn from(block: &'a BlockStatement) -> Self {
        Node::Block(block)
    }
}

impl<'a> From<&'a Expression> for Node<'a> {
    fn from(expr: &'a Expression) -> Self {
        Node::Expression(expr)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Evaluator with the default builtins.
    pub fn new() -> Self {
        EvaluatorBuilder::new().build()
    }

    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::new()
    }

    pub fn builtins(&self) -> &BuiltinRegistry {
        &self.builtins
    }

    /// Evaluate `node` in `env` with `context` as the object context.
    ///
    /// A stray `return` yields its value; a runtime error yields
    /// [`Value::Error`]. Programs ignore `context` and use a fresh one per
    /// statement.
    pub fn eval<'a>(
        &self,
        node: impl Into<Node<'a>>,
        env: &Environment,
        context: &HashRef,
    ) -> Value {
        let result = match node.into() {
            Node::Program(program) => return self.eval_program(program, env),
            Node::Statement(stmt) => self.eval_statement(stmt, env, context),
            Node::Block(block) => self.eval_block(block, env, context),
            Node::Expression(expr) => self.eval_expression(expr, env, context),
        };
        settle(result)
    }

    /// Run a program's statements in order against `env`.
    ///
    /// Stops at the first top-level `return` (yielding its value) or error
    /// (yielding [`Value::Error`]). Otherwise yields the last statement's
    /// value, or `null` for an empty program.
    pub fn eval_program(&self, program: &Program, env: &Environment) -> Value {
        let mut result = Value::Null;
        for stmt in &program.statements {
            let context = HashRef::new(HashObject::new());
            match self.eval_statement(stmt, env, &context) {
                Ok(value) => result = value,
                Err(ControlAction::Return(value)) => return value,
                Err(ControlAction::Error(error)) => {
                    tracing::debug!(span = ?stmt.span(), %error, "program aborted");
                    return error.into_value();
                }
            }
        }
        result
    }

    /// Call a function or builtin value from host code.
    pub fn call_value(&self, function: &Value, args: Vec<Value>) -> Value {
        let context = HashRef::new(HashObject::new());
        settle(self.apply_function(function, args, &context))
    }

    pub(crate) fn eval_statement(
        &self,
        stmt: &Statement,
        env: &Environment,
        context: &HashRef,
    ) -> EvalResult {
        match stmt {
            Statement::Let(s) => {
                let value = self.eval_expression(&s.value, env, context)?;
                env.set(s.name.name.clone(), value);
                Ok(Value::Null)
            }
            Statement::Assignment(s) => {
                let value = self.eval_expression(&s.value, env, context)?;
                env.set(s.name.name.clone(), value);
                Ok(Value::Null)
            }
            Statement::Return(s) => {
                let value = self.eval_expression(&s.value, env, context)?;
                Err(ControlAction::Return(value))
            }
            Statement::Expression(s) => self.eval_expression(&s.expression, env, context),
            Statement::Class(s) => self.eval_class(s, env, context),
        }
    }

    /// Evaluate statements in order; the block's value is the last one's.
    pub(crate) fn eval_block(
        &self,
        block: &BlockStatement,
        env: &Environment,
        context: &HashRef,
    ) -> EvalResult {
        let mut result = Value::Null;
        for stmt in &block.statements {
            result = self.eval_statement(stmt, env, context)?;
        }
        Ok(result)
    }

    pub(crate) fn eval_expression(
        &self,
        expr: &Expression,
        env: &Environment,
        context: &HashRef,
    ) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expression_inner(expr, env, context))
    }

    fn eval_expression_inner(
        &self,
        expr: &Expression,
        env: &Environment,
        context: &HashRef,
    ) -> EvalResult {
        match expr {
            Expression::Identifier(ident) => self.eval_identifier(ident, env),
            Expression::Integer(lit) => Ok(Value::Integer(lit.value)),
            Expression::Float(lit) => Ok(Value::Float(lit.value)),
            Expression::String(lit) => Ok(Value::string(&lit.value)),
            Expression::Boolean(lit) => Ok(Value::Boolean(lit.value)),
            Expression::Array(lit) => self.eval_array_literal(lit, env, context),
            Expression::Hash(lit) => Ok(Value::Hash(self.build_hash(lit, env, context)?)),
            Expression::Function(lit) => Ok(Value::Function(Rc::new(FunctionValue {
                parameters: Rc::clone(&lit.parameters),
                body: Rc::clone(&lit.body),
                env: env.clone(),
            }))),
            Expression::Prefix(e) => {
                let right = self.eval_expression(&e.right, env, context)?;
                Ok(operators::eval_prefix(e.operator, &right)?)
            }
            Expression::Infix(e) => {
                let left = self.eval_expression(&e.left, env, context)?;
                let right = self.eval_expression(&e.right, env, context)?;
                Ok(operators::eval_infix(e.operator, &left, &right)?)
            }
            Expression::Call(e) => self.eval_call(e, env, context),
            Expression::Index(e) => {
                let left = self.eval_expression(&e.left, env, context)?;
                let index = self.eval_expression(&e.index, env, context)?;
                Ok(collections::eval_index(&left, &index)?)
            }
            Expression::IndexAssignment(_) => {
                Err(EvalError::Unsupported("index assignment").into())
            }
            Expression::If(e) => self.eval_if(e, env, context),
            Expression::For(e) => self.eval_for(e, env, context),
            Expression::While(e) => self.eval_while(e, env, context),
            Expression::Sleep(e) => self.eval_sleep(e, env, context),
            Expression::New(e) => self.eval_new(e, env),
            Expression::Exec(_) => Err(EvalError::Unsupported("exec").into()),
        }
    }

    /// Environment chain first, then the builtin registry.
    fn eval_identifier(&self, ident: &Identifier, env: &Environment) -> EvalResult {
        if let Some(value) = env.get(&ident.name) {
            return Ok(value);
        }
        self.builtins
            .get(&ident.name)
            .ok_or_else(|| EvalError::IdentifierNotFound(ident.name.clone()).into())
    }

    /// Evaluate left to right, stopping at the first error.
    fn eval_expressions(
        &self,
        exprs: &[Expression],
        env: &Environment,
        context: &HashRef,
    ) -> Result<Vec<Value>, ControlAction> {
        exprs
            .iter()
            .map(|expr| self.eval_expression(expr, env, context))
            .collect()
    }
}

/// Collapse a result into the value a host sees.
fn settle(result: EvalResult) -> Value {
    match result {
        Ok(value) | Err(ControlAction::Return(value)) => value,
        Err(ControlAction::Error(error)) => error.into_value(),
    }
}
