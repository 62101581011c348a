//! Array and string helpers: `len`, `first`, `last`, `rest`, `push`, `join`.

use crate::Value;

use super::{arity_error, check_arity};

pub(super) fn len(args: &[Value]) -> Value {
    if let Some(err) = check_arity(args, 1) {
        return err;
    }
    match &args[0] {
        Value::Array(items) => length_value(items.len()),
        Value::String(s) => length_value(s.len()),
        other => Value::error(format!(
            "argument to `len` not supported, got {}",
            other.type_name()
        )),
    }
}

pub(super) fn first(args: &[Value]) -> Value {
    match single_array("first", args) {
        Ok(items) => items.first().cloned().unwrap_or(Value::Null),
        Err(err) => err,
    }
}

pub(super) fn last(args: &[Value]) -> Value {
    match single_array("last", args) {
        Ok(items) => items.last().cloned().unwrap_or(Value::Null),
        Err(err) => err,
    }
}

/// Everything but the first element; `null` for an empty array.
pub(super) fn rest(args: &[Value]) -> Value {
    match single_array("rest", args) {
        Ok([]) => Value::Null,
        Ok([_, tail @ ..]) => Value::array(tail.to_vec()),
        Err(err) => err,
    }
}

/// New array with `args[1]` appended; the input array is left untouched.
pub(super) fn push(args: &[Value]) -> Value {
    if args.len() != 2 {
        return arity_error(args.len(), 2);
    }
    let Value::Array(items) = &args[0] else {
        return must_be_array("push", &args[0]);
    };
    let mut extended = Vec::with_capacity(items.len() + 1);
    extended.extend(items.iter().cloned());
    extended.push(args[1].clone());
    Value::array(extended)
}

/// Join the rendered elements of an array with a separator string.
pub(super) fn join(args: &[Value]) -> Value {
    if args.len() != 2 {
        return arity_error(args.len(), 2);
    }
    let Value::Array(items) = &args[0] else {
        return Value::error(format!(
            "first argument to `join` must be ARRAY, got {}",
            args[0].type_name()
        ));
    };
    let Value::String(separator) = &args[1] else {
        return Value::error(format!(
            "second argument to `join` must be STRING, got {}",
            args[1].type_name()
        ));
    };
    let parts: Vec<String> = items.iter().map(Value::inspect).collect();
    Value::string(&parts.join(&**separator))
}

fn single_array<'a>(name: &str, args: &'a [Value]) -> Result<&'a [Value], Value> {
    if let Some(err) = check_arity(args, 1) {
        return Err(err);
    }
    match &args[0] {
        Value::Array(items) => Ok(items.as_slice()),
        other => Err(must_be_array(name, other)),
    }
}

fn must_be_array(name: &str, got: &Value) -> Value {
    Value::error(format!(
        "argument to `{name}` must be ARRAY, got {}",
        got.type_name()
    ))
}

fn length_value(len: usize) -> Value {
    Value::Integer(i64::try_from(len).unwrap_or(i64::MAX))
}
