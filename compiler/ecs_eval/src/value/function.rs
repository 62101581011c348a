//! Callable values: closures and native builtins.

use std::fmt;
use std::rc::Rc;

use ecs_ir::{BlockStatement, Identifier};

use super::{HashRef, Value};
use crate::Environment;

/// A closure: parameters, body, and the environment it was defined in.
pub struct FunctionValue {
    pub parameters: Rc<[Identifier]>,
    pub body: Rc<BlockStatement>,
    pub env: Environment,
}

impl FunctionValue {
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

/// Renders as `fn(a, b) {` + body statements on separate lines + `}`.
impl fmt::Display for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&param.name)?;
        }
        f.write_str(") {\n")?;
        for stmt in &self.body.statements {
            writeln!(f, "{stmt}")?;
        }
        f.write_str("}")
    }
}

// The captured environment usually contains this function again, so it is
// left out of the debug output.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<&str> = self.parameters.iter().map(|p| p.name.as_str()).collect();
        f.debug_struct("FunctionValue")
            .field("parameters", &params)
            .field("statements", &self.body.statements.len())
            .finish_non_exhaustive()
    }
}

/// Native calling convention: host context, host scope, arguments.
///
/// The evaluator passes `None` for both host slots. A builtin validates its
/// own arguments and reports misuse by returning [`Value::Error`].
pub type BuiltinFn = dyn Fn(Option<&HashRef>, Option<&Environment>, &[Value]) -> Value;

/// A named native function.
pub struct BuiltinValue {
    name: Rc<str>,
    func: Box<BuiltinFn>,
}

impl BuiltinValue {
    pub fn new(
        name: &str,
        func: impl Fn(Option<&HashRef>, Option<&Environment>, &[Value]) -> Value + 'static,
    ) -> Self {
        BuiltinValue {
            name: Rc::from(name),
            func: Box::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn call(
        &self,
        context: Option<&HashRef>,
        scope: Option<&Environment>,
        args: &[Value],
    ) -> Value {
        (self.func)(context, scope, args)
    }
}

impl fmt::Debug for BuiltinValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BuiltinValue({})", self.name)
    }
}
