//! Lexical environments.
//!
//! An [`Environment`] is a cheap handle to one scope frame. Frames link to
//! their enclosing frame, forming the chain closures capture. Function
//! values hold their defining environment; each call gets a fresh frame
//! enclosed by it.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{Shared, Value};

/// A single frame of bindings.
///
/// The parent link is strong so closures keep their defining frames alive.
/// A function bound in the frame it captured forms a cycle that is never
/// freed; a weak link would instead drop frames still needed by closures.
struct Scope {
    bindings: FxHashMap<String, Value>,
    parent: Option<Environment>,
}

/// Handle to a scope frame. Clones alias the same frame.
#[derive(Clone)]
pub struct Environment {
    scope: Shared<Scope>,
}

impl Environment {
    /// Create a top-level environment with no parent.
    pub fn new() -> Self {
        Environment {
            scope: Shared::new(Scope {
                bindings: FxHashMap::default(),
                parent: None,
            }),
        }
    }

    /// Create a child frame whose lookups fall back to `outer`.
    pub fn enclosed(outer: &Environment) -> Self {
        Environment {
            scope: Shared::new(Scope {
                bindings: FxHashMap::default(),
                parent: Some(outer.clone()),
            }),
        }
    }

    /// Look up `name`, walking outward through enclosing frames.
    pub fn get(&self, name: &str) -> Option<Value> {
        let scope = self.scope.borrow();
        if let Some(value) = scope.bindings.get(name) {
            return Some(value.clone());
        }
        scope.parent.as_ref()?.get(name)
    }

    /// Bind `name` in this frame, shadowing or overwriting. Enclosing frames
    /// are never modified.
    pub fn set(&self, name: impl Into<String>, value: Value) {
        self.scope.borrow_mut().bindings.insert(name.into(), value);
    }

    /// Whether `name` is bound in this frame itself.
    pub fn has_local(&self, name: &str) -> bool {
        self.scope.borrow().bindings.contains_key(name)
    }

    /// Number of frames from here to the outermost one, inclusive.
    pub fn depth(&self) -> usize {
        self.scope
            .borrow()
            .parent
            .as_ref()
            .map_or(1, |parent| parent.depth() + 1)
    }

    /// Names bound in this frame, sorted.
    pub fn local_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.scope.borrow().bindings.keys().cloned().collect();
        names.sort();
        names
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.scope.ptr_eq(&other.scope)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

// Bindings can hold closures over this very frame, so only names are shown.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("bindings", &self.local_names())
            .field("depth", &self.depth())
            .finish()
    }
}
