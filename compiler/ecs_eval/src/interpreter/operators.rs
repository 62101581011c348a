//! Prefix and infix operator semantics.
//!
//! Typed rules are tried in order: integer pairs, float pairs, string
//! pairs. Anything else only supports `==`/`!=`, which compare scalars by
//! value and heap values by identity.

use ecs_ir::{InfixOp, PrefixOp};

use crate::{EvalError, Value};

pub(super) fn eval_prefix(op: PrefixOp, right: &Value) -> Result<Value, EvalError> {
    match (op, right) {
        (PrefixOp::Not, _) => Ok(Value::Boolean(!right.is_truthy())),
        (PrefixOp::Neg, Value::Integer(n)) => Ok(Value::Integer(n.wrapping_neg())),
        (PrefixOp::Neg, _) => Err(EvalError::UnknownPrefixOperator {
            op: op.as_symbol(),
            operand: right.type_name(),
        }),
    }
}

pub(super) fn eval_infix(op: InfixOp, left: &Value, right: &Value) -> Result<Value, EvalError> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => integer_infix(op, *l, *r),
        (Value::Float(l), Value::Float(r)) => float_infix(op, *l, *r),
        (Value::String(l), Value::String(r)) => string_infix(op, l, r),
        _ if op == InfixOp::Eq => Ok(Value::Boolean(left.same_handle(right))),
        _ if op == InfixOp::NotEq => Ok(Value::Boolean(!left.same_handle(right))),
        _ if left.type_name() != right.type_name() => Err(EvalError::TypeMismatch {
            left: left.type_name(),
            op: op.as_symbol(),
            right: right.type_name(),
        }),
        _ => Err(unknown_operator(op, left, right)),
    }
}

fn integer_infix(op: InfixOp, l: i64, r: i64) -> Result<Value, EvalError> {
    let value = match op {
        InfixOp::Add => Value::Integer(l.wrapping_add(r)),
        InfixOp::Sub => Value::Integer(l.wrapping_sub(r)),
        InfixOp::Mul => Value::Integer(l.wrapping_mul(r)),
        InfixOp::Div if r == 0 => return Err(EvalError::DivisionByZero),
        InfixOp::Div => Value::Integer(l.wrapping_div(r)),
        InfixOp::Mod if r == 0 => return Err(EvalError::ModuloByZero),
        InfixOp::Mod => Value::Integer(l.wrapping_rem(r)),
        InfixOp::Lt => Value::Boolean(l < r),
        InfixOp::Gt => Value::Boolean(l > r),
        InfixOp::Eq => Value::Boolean(l == r),
        InfixOp::NotEq => Value::Boolean(l != r),
        InfixOp::And | InfixOp::Or => {
            return Err(unknown_operator(op, &Value::Integer(l), &Value::Integer(r)))
        }
    };
    Ok(value)
}

#[allow(clippy::float_cmp)]
fn float_infix(op: InfixOp, l: f64, r: f64) -> Result<Value, EvalError> {
    let value = match op {
        InfixOp::Add => Value::Float(l + r),
        InfixOp::Sub => Value::Float(l - r),
        InfixOp::Mul => Value::Float(l * r),
        InfixOp::Div => Value::Float(l / r),
        InfixOp::Mod => Value::Float(l % r),
        InfixOp::Lt => Value::Boolean(l < r),
        InfixOp::Gt => Value::Boolean(l > r),
        InfixOp::Eq => Value::Boolean(l == r),
        InfixOp::NotEq => Value::Boolean(l != r),
        InfixOp::And | InfixOp::Or => {
            return Err(unknown_operator(op, &Value::Float(l), &Value::Float(r)))
        }
    };
    Ok(value)
}

fn string_infix(op: InfixOp, l: &str, r: &str) -> Result<Value, EvalError> {
    match op {
        InfixOp::Add => {
            let mut joined = String::with_capacity(l.len() + r.len());
            joined.push_str(l);
            joined.push_str(r);
            Ok(Value::string(&joined))
        }
        InfixOp::Eq => Ok(Value::Boolean(l == r)),
        InfixOp::NotEq => Ok(Value::Boolean(l != r)),
        InfixOp::Lt => Ok(Value::Boolean(l < r)),
        InfixOp::Gt => Ok(Value::Boolean(l > r)),
        _ => Err(EvalError::UnknownInfixOperator {
            left: "STRING",
            op: op.as_symbol(),
            right: "STRING",
        }),
    }
}

fn unknown_operator(op: InfixOp, left: &Value, right: &Value) -> EvalError {
    EvalError::UnknownInfixOperator {
        left: left.type_name(),
        op: op.as_symbol(),
        right: right.type_name(),
    }
}
