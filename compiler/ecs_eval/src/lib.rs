//! ECS object model and tree-walking evaluator.
//!
//! - [`Value`]: runtime values, with [`HashObject`] tables for hashes/classes
//! - [`Environment`]: chained scopes captured by closures
//! - [`copy_object`] / [`copy_hash_map`]: the copy protocol behind `new`
//! - [`BuiltinRegistry`]: native functions resolved after the scope chain
//! - [`Evaluator`]: walks an [`ecs_ir::Program`] against an environment
//!
//! Evaluation is single-threaded and synchronous. A host keeps one
//! [`Environment`] alive across calls to get persistent bindings.

mod builtins;
mod copy;
mod environment;
mod errors;
mod interpreter;
mod shared;
mod value;

pub use builtins::{BuiltinRegistry, OutputBuffer, PrintHandler};
pub use copy::{copy_hash_map, copy_object};
pub use environment::Environment;
pub use errors::{ControlAction, EvalError, EvalResult};
pub use interpreter::{Evaluator, EvaluatorBuilder, Node};
pub use shared::Shared;
pub use value::{
    BuiltinFn, BuiltinValue, FunctionValue, HashKey, HashObject, HashPair, HashRef, Modifiers,
    Value,
};

#[cfg(test)]
mod tests;
