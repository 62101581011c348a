//! Hash values: structural keys, pairs with modifiers, and the class
//! constructor slot.

use std::rc::Rc;

use bitflags::bitflags;
use rustc_hash::FxHashMap;

use super::{FunctionValue, Value};
use crate::Shared;

/// Shared, mutable hash. Cloning the handle aliases the same table.
pub type HashRef = Shared<HashObject>;

/// Structural key for a hashable value.
///
/// Only integers, strings and booleans are hashable; equal values produce
/// equal keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HashKey {
    Integer(i64),
    String(Rc<str>),
    Boolean(bool),
}

impl HashKey {
    /// Key for `value`, or `None` if the value kind is not hashable.
    pub fn from_value(value: &Value) -> Option<HashKey> {
        match value {
            Value::Integer(n) => Some(HashKey::Integer(*n)),
            Value::String(s) => Some(HashKey::String(Rc::clone(s))),
            Value::Boolean(b) => Some(HashKey::Boolean(*b)),
            _ => None,
        }
    }

    pub fn string(s: &str) -> HashKey {
        HashKey::String(Rc::from(s))
    }
}

bitflags! {
    /// Per-pair modifier set.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shared by reference between a class and its instances.
        const STATIC = 1;
    }
}

/// One entry of a hash: the original key value, the value, and modifiers.
#[derive(Clone, Debug)]
pub struct HashPair {
    pub key: Value,
    pub value: Value,
    pub modifiers: Modifiers,
}

impl HashPair {
    pub fn new(key: Value, value: Value) -> Self {
        HashPair {
            key,
            value,
            modifiers: Modifiers::empty(),
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[inline]
    pub fn is_static(&self) -> bool {
        self.modifiers.contains(Modifiers::STATIC)
    }
}

/// Unordered key/value table, optionally carrying a class constructor.
#[derive(Clone, Debug, Default)]
pub struct HashObject {
    pairs: FxHashMap<HashKey, HashPair>,
    constructor: Option<Rc<FunctionValue>>,
}

impl HashObject {
    pub fn new() -> Self {
        HashObject::default()
    }

    /// Insert `key: value`. Returns `false` without inserting if `key` is
    /// not hashable. An existing pair under an equal key is replaced.
    pub fn insert(&mut self, key: Value, value: Value) -> bool {
        self.insert_pair(HashPair::new(key, value))
    }

    /// Insert a prepared pair, keeping its modifiers.
    pub fn insert_pair(&mut self, pair: HashPair) -> bool {
        let Some(hash_key) = HashKey::from_value(&pair.key) else {
            return false;
        };
        self.pairs.insert(hash_key, pair);
        true
    }

    pub(crate) fn insert_keyed(&mut self, hash_key: HashKey, pair: HashPair) {
        self.pairs.insert(hash_key, pair);
    }

    pub fn get(&self, key: &HashKey) -> Option<&HashPair> {
        self.pairs.get(key)
    }

    /// Look up by string key.
    pub fn get_str(&self, key: &str) -> Option<&HashPair> {
        self.pairs.get(&HashKey::string(key))
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&HashKey, &HashPair)> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn constructor(&self) -> Option<&Rc<FunctionValue>> {
        self.constructor.as_ref()
    }

    pub fn set_constructor(&mut self, constructor: Option<Rc<FunctionValue>>) {
        self.constructor = constructor;
    }
}
