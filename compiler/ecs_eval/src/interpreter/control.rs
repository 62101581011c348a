//! Conditionals and loops.
//!
//! Loop variables and loop bodies share the enclosing environment; there is
//! no per-iteration scope. A `return` inside a body always leaves the loop.

use ecs_ir::{BlockStatement, ForExpression, IfExpression, SleepExpression, WhileExpression};

use super::Evaluator;
use crate::{ControlAction, Environment, EvalError, EvalResult, HashRef, Value};

impl Evaluator {
    pub(super) fn eval_if(
        &self,
        e: &IfExpression,
        env: &Environment,
        context: &HashRef,
    ) -> EvalResult {
        let condition = self.eval_expression(&e.condition, env, context)?;
        if condition.is_truthy() {
            self.eval_block(&e.consequence, env, context)
        } else if let Some(alternative) = &e.alternative {
            self.eval_block(alternative, env, context)
        } else {
            Ok(Value::Null)
        }
    }

    /// `for (name, range) { body }`.
    ///
    /// Integer, array and string ranges bind `name` to `0..len`; errors in
    /// those bodies are dropped and the loop moves on. Hash ranges bind the
    /// inspected form of each value and report the last body error once the
    /// loop finishes.
    pub(super) fn eval_for(
        &self,
        e: &ForExpression,
        env: &Environment,
        context: &HashRef,
    ) -> EvalResult {
        let range = self.eval_expression(&e.range, env, context)?;
        let name = &e.element.name;
        let count = match &range {
            Value::Integer(n) => *n,
            Value::Array(items) => index_bound(items.len()),
            Value::String(s) => index_bound(s.len()),
            Value::Hash(hash) => return self.eval_for_hash(name, hash, &e.body, env, context),
            other => return Err(EvalError::UnknownRangeType(other.type_name()).into()),
        };

        for index in 0..count {
            env.set(name.clone(), Value::Integer(index));
            match self.eval_block(&e.body, env, context) {
                Ok(_) => {}
                Err(ControlAction::Error(error)) => {
                    tracing::trace!(%error, index, "for body error dropped");
                }
                Err(ret @ ControlAction::Return(_)) => return Err(ret),
            }
        }
        Ok(Value::Null)
    }

    fn eval_for_hash(
        &self,
        name: &str,
        hash: &HashRef,
        body: &BlockStatement,
        env: &Environment,
        context: &HashRef,
    ) -> EvalResult {
        // Snapshot first: the body may mutate the hash being walked.
        let rendered: Vec<String> = hash
            .borrow()
            .pairs()
            .map(|(_, pair)| pair.value.inspect())
            .collect();

        let mut last_error = None;
        for text in rendered {
            env.set(name, Value::string(&text));
            match self.eval_block(body, env, context) {
                Ok(_) => {}
                Err(ControlAction::Error(error)) => last_error = Some(error),
                Err(ret @ ControlAction::Return(_)) => return Err(ret),
            }
        }

        match last_error {
            Some(error) => Err(EvalError::ForLoop(Box::new(error)).into()),
            None => Ok(Value::Null),
        }
    }

    /// Runs until the condition is falsy. A condition error ends the loop;
    /// body errors are dropped like those of an integer `for`.
    pub(super) fn eval_while(
        &self,
        e: &WhileExpression,
        env: &Environment,
        context: &HashRef,
    ) -> EvalResult {
        loop {
            let condition = self.eval_expression(&e.condition, env, context)?;
            if !condition.is_truthy() {
                return Ok(Value::Null);
            }
            match self.eval_block(&e.body, env, context) {
                Ok(_) => {}
                Err(ControlAction::Error(error)) => {
                    tracing::trace!(%error, "while body error dropped");
                }
                Err(ret @ ControlAction::Return(_)) => return Err(ret),
            }
        }
    }

    /// The duration is evaluated for its errors; the body never runs.
    pub(super) fn eval_sleep(
        &self,
        e: &SleepExpression,
        env: &Environment,
        context: &HashRef,
    ) -> EvalResult {
        let duration = self.eval_expression(&e.duration, env, context)?;
        tracing::trace!(duration = %duration, "sleep skipped");
        Ok(Value::Null)
    }
}

fn index_bound(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}
