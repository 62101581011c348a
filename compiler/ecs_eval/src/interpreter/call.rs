//! Function application, classes and instancing.

use std::rc::Rc;

use ecs_ir::{CallExpression, ClassStatement, NewExpression};

use super::Evaluator;
use crate::{copy_hash_map, ControlAction, Environment, EvalError, EvalResult, HashRef, Value};

impl Evaluator {
    pub(super) fn eval_call(
        &self,
        call: &CallExpression,
        env: &Environment,
        context: &HashRef,
    ) -> EvalResult {
        let function = self.eval_expression(&call.function, env, context)?;
        let args = self.eval_expressions(&call.arguments, env, context)?;
        self.apply_function(&function, args, context)
    }

    /// Invoke a callable value.
    ///
    /// User functions run in a fresh scope enclosing their captured
    /// environment. Extra arguments are ignored; missing ones are an error.
    #[tracing::instrument(level = "trace", skip_all)]
    pub(super) fn apply_function(
        &self,
        function: &Value,
        args: Vec<Value>,
        context: &HashRef,
    ) -> EvalResult {
        match function {
            Value::Function(func) => {
                tracing::trace!(params = func.arity(), args = args.len(), "call");
                if args.len() < func.arity() {
                    return Err(EvalError::WrongArgumentCount {
                        want: func.arity(),
                        got: args.len(),
                    }
                    .into());
                }
                let scope = Environment::enclosed(&func.env);
                for (param, arg) in func.parameters.iter().zip(args) {
                    scope.set(param.name.clone(), arg);
                }
                match self.eval_block(&func.body, &scope, context) {
                    Err(ControlAction::Return(value)) => Ok(value),
                    other => other,
                }
            }
            Value::Builtin(builtin) => {
                tracing::trace!(name = builtin.name(), args = args.len(), "call builtin");
                match builtin.call(None, None, &args) {
                    Value::Error(message) => Err(EvalError::Builtin(message.to_string()).into()),
                    value => Ok(value),
                }
            }
            other => Err(EvalError::NotAFunction(other.type_name()).into()),
        }
    }

    /// `class Name { ... }` binds `Name` to the evaluated hash. A function
    /// stored under the class's own name becomes its constructor.
    pub(super) fn eval_class(
        &self,
        class: &ClassStatement,
        env: &Environment,
        context: &HashRef,
    ) -> EvalResult {
        let name = &class.name.name;
        let hash = self.build_hash(&class.body, env, context)?;
        let constructor = hash.borrow().get_str(name).and_then(|pair| match &pair.value {
            Value::Function(func) => Some(Rc::clone(func)),
            _ => None,
        });
        tracing::debug!(class = %name, constructor = constructor.is_some(), "class defined");
        hash.borrow_mut().set_constructor(constructor);
        env.set(name.clone(), Value::Hash(hash));
        Ok(Value::Null)
    }

    /// `new Name` copies the hash bound to `Name` into a fresh instance.
    pub(super) fn eval_new(&self, new: &NewExpression, env: &Environment) -> EvalResult {
        let class = self.eval_identifier(&new.class, env)?;
        let Value::Hash(template) = &class else {
            return Err(EvalError::NewRequiresHash(class.type_name()).into());
        };
        tracing::debug!(class = %new.class.name, "new instance");
        let instance = copy_hash_map(&template.borrow());
        Ok(Value::Hash(instance))
    }
}
