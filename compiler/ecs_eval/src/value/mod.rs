//! Runtime values.
//!
//! Scalars are stored inline. Strings, arrays, functions and builtins are
//! immutable and reference-counted, so cloning a `Value` is cheap. Hashes
//! are shared mutable tables ([`HashRef`]); `new` produces independent
//! instances through [`crate::copy_hash_map`].
//!
//! Control flow (`return`, errors raised mid-evaluation) is not a value: it
//! travels as [`crate::ControlAction`]. [`Value::Error`] is what a builtin
//! hands back on misuse and what a host sees when a program fails.

mod function;
mod hash;

use std::fmt;
use std::rc::Rc;

pub use function::{BuiltinFn, BuiltinValue, FunctionValue};
pub use hash::{HashKey, HashObject, HashPair, HashRef, Modifiers};

/// Runtime value of an ECS program.
#[derive(Clone, Debug)]
pub enum Value {
    Integer(i64),
    Float(f64),
    String(Rc<str>),
    Boolean(bool),
    Null,
    /// Replaced wholesale by operations such as `push`, never edited in place.
    Array(Rc<Vec<Value>>),
    Hash(HashRef),
    Function(Rc<FunctionValue>),
    Builtin(Rc<BuiltinValue>),
    Error(Rc<str>),
}

impl Value {
    #[inline]
    pub fn string(s: &str) -> Self {
        Value::String(Rc::from(s))
    }

    #[inline]
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Rc::new(items))
    }

    #[inline]
    pub fn hash(hash: HashObject) -> Self {
        Value::Hash(HashRef::new(hash))
    }

    #[inline]
    pub fn error(message: impl AsRef<str>) -> Self {
        Value::Error(Rc::from(message.as_ref()))
    }

    /// Kind tag used in error messages (`INTEGER`, `STRING`, ...).
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Float(_) => "FLOAT",
            Value::String(_) => "STRING",
            Value::Boolean(_) => "BOOLEAN",
            Value::Null => "NULL",
            Value::Array(_) => "ARRAY",
            Value::Hash(_) => "HASH",
            Value::Function(_) => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
            Value::Error(_) => "ERROR",
        }
    }

    /// Only `null` and `false` are falsy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Null | Value::Boolean(false))
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Human-readable rendering, same as `Display`.
    pub fn inspect(&self) -> String {
        self.to_string()
    }

    /// Identity comparison used by `==`/`!=` when no typed rule applies.
    ///
    /// Booleans and null compare by value; heap values compare by handle.
    pub fn same_handle(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::String(a), Value::String(b)) | (Value::Error(a), Value::Error(b)) => {
                Rc::ptr_eq(a, b)
            }
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            (Value::Hash(a), Value::Hash(b)) => a.ptr_eq(b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n:?}"),
            Value::String(s) => f.write_str(s),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Null => f.write_str("null"),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Hash(hash) => {
                let hash = hash.borrow();
                f.write_str("{")?;
                for (i, (_, pair)) in hash.pairs().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", pair.key, pair.value)?;
                }
                f.write_str("}")
            }
            Value::Function(func) => func.fmt(f),
            Value::Builtin(_) => f.write_str("builtin function"),
            Value::Error(message) => write!(f, "ERROR: {message}"),
        }
    }
}

/// Structural equality for host code and tests. Arrays compare element-wise;
/// hashes, functions and builtins compare by handle.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) | (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            _ => self.same_handle(other),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

#[cfg(test)]
mod tests;
