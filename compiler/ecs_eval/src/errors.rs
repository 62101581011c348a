//! Evaluation errors and non-local control flow.

use crate::Value;

/// Result of evaluating a node: a value, or a control action unwinding
/// toward the nearest function call or the program boundary.
pub type EvalResult = Result<Value, ControlAction>;

/// Non-local exits threaded through `Err`.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlAction {
    /// `return value`, unwound to the enclosing call (or the program).
    Return(Value),
    /// A runtime error, unwound all the way to the host.
    Error(EvalError),
}

impl From<EvalError> for ControlAction {
    fn from(error: EvalError) -> Self {
        ControlAction::Error(error)
    }
}

/// Runtime error raised by the evaluator.
///
/// Messages name value kinds by their type tag (`INTEGER`, `STRING`, ...).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch {
        left: &'static str,
        op: &'static str,
        right: &'static str,
    },

    #[error("unknown operator: {left} {op} {right}")]
    UnknownInfixOperator {
        left: &'static str,
        op: &'static str,
        right: &'static str,
    },

    #[error("unknown operator: {op}{operand}")]
    UnknownPrefixOperator {
        op: &'static str,
        operand: &'static str,
    },

    #[error("division by zero")]
    DivisionByZero,

    #[error("modulo by zero")]
    ModuloByZero,

    #[error("identifier not found: {0}")]
    IdentifierNotFound(String),

    #[error("not a function: {0}")]
    NotAFunction(&'static str),

    #[error("wrong number of arguments: want={want}, got={got}")]
    WrongArgumentCount { want: usize, got: usize },

    #[error("index operator not supported: {0}")]
    IndexNotSupported(&'static str),

    #[error("unusable as hash key: {0}")]
    UnusableHashKey(&'static str),

    #[error("new operator can only be used with Class or Hashmap. Invalid type: {0}")]
    NewRequiresHash(&'static str),

    #[error("unknown range type in for loop: {0}")]
    UnknownRangeType(&'static str),

    #[error("error in for loop: {0}")]
    ForLoop(Box<EvalError>),

    #[error("{0} is not supported by the evaluator")]
    Unsupported(&'static str),

    /// Error value handed back by a builtin, message kept verbatim.
    #[error("{0}")]
    Builtin(String),
}

impl EvalError {
    /// Convert into the first-class value a host sees.
    pub fn into_value(self) -> Value {
        Value::error(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let cases = [
            (
                EvalError::TypeMismatch {
                    left: "INTEGER",
                    op: "+",
                    right: "STRING",
                },
                "type mismatch: INTEGER + STRING",
            ),
            (
                EvalError::UnknownPrefixOperator {
                    op: "-",
                    operand: "BOOLEAN",
                },
                "unknown operator: -BOOLEAN",
            ),
            (
                EvalError::IdentifierNotFound("x".into()),
                "identifier not found: x",
            ),
            (
                EvalError::WrongArgumentCount { want: 2, got: 1 },
                "wrong number of arguments: want=2, got=1",
            ),
            (
                EvalError::ForLoop(Box::new(EvalError::DivisionByZero)),
                "error in for loop: division by zero",
            ),
            (
                EvalError::Unsupported("exec"),
                "exec is not supported by the evaluator",
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn into_value_keeps_message() {
        let value = EvalError::NotAFunction("INTEGER").into_value();
        assert_eq!(value, Value::error("not a function: INTEGER"));
        assert_eq!(value.inspect(), "ERROR: not a function: INTEGER");
    }
}
