//! Builtin registry: native functions resolved by name after the
//! environment chain comes up empty.
//!
//! The defaults cover collections (`len`, `first`, `last`, `rest`, `push`,
//! `join`) and output (`print`). Hosts can register more with
//! [`BuiltinRegistry::register`].

mod collections;
mod print_handler;

use std::rc::Rc;

use rustc_hash::FxHashMap;

pub use print_handler::{OutputBuffer, PrintHandler};

use crate::{BuiltinValue, Environment, HashRef, Value};

/// Name to native function table.
#[derive(Clone, Debug, Default)]
pub struct BuiltinRegistry {
    entries: FxHashMap<Rc<str>, Rc<BuiltinValue>>,
}

impl BuiltinRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        BuiltinRegistry::default()
    }

    /// The default builtins, printing to stdout.
    pub fn with_defaults() -> Self {
        Self::with_print_handler(PrintHandler::Stdout)
    }

    /// The default builtins, with `print` writing to `handler`.
    pub fn with_print_handler(handler: PrintHandler) -> Self {
        let mut registry = BuiltinRegistry::new();
        registry.register_simple("len", collections::len);
        registry.register_simple("first", collections::first);
        registry.register_simple("last", collections::last);
        registry.register_simple("rest", collections::rest);
        registry.register_simple("push", collections::push);
        registry.register_simple("join", collections::join);
        registry.register("print", move |_, _, args| {
            for arg in args {
                handler.println(&arg.inspect());
            }
            Value::Null
        });
        registry
    }

    /// Bind `name` to a native function, replacing any previous binding.
    pub fn register(
        &mut self,
        name: &str,
        func: impl Fn(Option<&HashRef>, Option<&Environment>, &[Value]) -> Value + 'static,
    ) {
        tracing::trace!(name, "register builtin");
        self.entries
            .insert(Rc::from(name), Rc::new(BuiltinValue::new(name, func)));
    }

    /// Register a builtin that only looks at its arguments.
    fn register_simple(&mut self, name: &str, func: fn(&[Value]) -> Value) {
        self.register(name, move |_, _, args| func(args));
    }

    /// The builtin bound to `name`, as a callable value.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.entries.get(name).cloned().map(Value::Builtin)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(|name| &**name).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `wrong number of arguments. got=N, want=M`
pub(crate) fn arity_error(got: usize, want: usize) -> Value {
    Value::error(format!(
        "wrong number of arguments. got={got}, want={want}"
    ))
}

/// `Some(error)` unless exactly `want` arguments were passed.
pub(crate) fn check_arity(args: &[Value], want: usize) -> Option<Value> {
    (args.len() != want).then(|| arity_error(args.len(), want))
}

#[cfg(test)]
mod tests;
