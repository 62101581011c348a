//! Copy protocol behind `new`.
//!
//! A class is a plain hash. Instancing copies it: function-valued pairs and
//! pairs flagged [`Modifiers::STATIC`](crate::Modifiers::STATIC) stay shared
//! with the class, everything else is copied recursively so each instance
//! owns its data.

use std::rc::Rc;

use ecs_stack::ensure_sufficient_stack;

use crate::{HashObject, HashPair, HashRef, Value};

/// Copy a value: deep for data, shallow for functions and builtins.
pub fn copy_object(value: &Value) -> Value {
    ensure_sufficient_stack(|| match value {
        Value::Integer(_)
        | Value::Float(_)
        | Value::Boolean(_)
        | Value::Null
        | Value::Function(_)
        | Value::Builtin(_) => value.clone(),
        Value::String(s) => Value::String(Rc::from(&**s)),
        Value::Error(message) => Value::Error(Rc::from(&**message)),
        Value::Array(items) => Value::array(items.iter().map(copy_object).collect()),
        Value::Hash(hash) => Value::Hash(copy_hash_map(&hash.borrow())),
    })
}

/// Produce a fresh hash from `source` following the instancing rules. The
/// constructor reference is carried over unchanged.
pub fn copy_hash_map(source: &HashObject) -> HashRef {
    let mut copy = HashObject::new();
    for (hash_key, pair) in source.pairs() {
        let shared = pair.is_static() || matches!(pair.value, Value::Function(_));
        let pair = if shared {
            pair.clone()
        } else {
            HashPair {
                key: pair.key.clone(),
                value: copy_object(&pair.value),
                modifiers: pair.modifiers,
            }
        };
        copy.insert_keyed(hash_key.clone(), pair);
    }
    copy.set_constructor(source.constructor().cloned());
    HashRef::new(copy)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{HashKey, Modifiers};

    fn class_with_data() -> HashObject {
        let mut inner = HashObject::new();
        inner.insert(Value::string("depth"), Value::Integer(1));

        let mut class = HashObject::new();
        class.insert(Value::string("x"), Value::Integer(0));
        class.insert(Value::string("tags"), Value::array(vec![Value::string("a")]));
        class.insert(Value::string("nested"), Value::hash(inner));
        class.insert_pair(
            HashPair::new(Value::string("registry"), Value::hash(HashObject::new()))
                .with_modifiers(Modifiers::STATIC),
        );
        class
    }

    fn field(hash: &HashRef, name: &str) -> Value {
        hash.borrow()
            .get(&HashKey::string(name))
            .map_or(Value::Null, |p| p.value.clone())
    }

    #[test]
    fn scalars_and_strings_copy_by_value() {
        let s = Value::string("abc");
        let copy = copy_object(&s);
        assert_eq!(copy, s);
        assert!(!copy.same_handle(&s));
        assert_eq!(copy_object(&Value::Integer(5)), Value::Integer(5));
    }

    #[test]
    fn arrays_copy_deeply() {
        let mut hash = HashObject::new();
        hash.insert(Value::string("k"), Value::Integer(1));
        let array = Value::array(vec![Value::Integer(1), Value::hash(hash)]);
        let copy = copy_object(&array);
        assert_eq!(copy.inspect(), array.inspect());
        let (Value::Array(original), Value::Array(copied)) = (&array, &copy) else {
            panic!("expected arrays");
        };
        assert!(!original[1].same_handle(&copied[1]));
    }

    #[test]
    fn instance_data_is_independent() {
        let class = HashRef::new(class_with_data());
        let instance = copy_hash_map(&class.borrow());

        instance
            .borrow_mut()
            .insert(Value::string("x"), Value::Integer(99));
        assert_eq!(field(&class, "x"), Value::Integer(0));

        let Value::Hash(class_nested) = field(&class, "nested") else {
            panic!("expected hash");
        };
        let Value::Hash(instance_nested) = field(&instance, "nested") else {
            panic!("expected hash");
        };
        assert!(!class_nested.ptr_eq(&instance_nested));
        assert!(!field(&class, "tags").same_handle(&field(&instance, "tags")));
    }

    #[test]
    fn statics_stay_shared() {
        let class = HashRef::new(class_with_data());
        let instance = copy_hash_map(&class.borrow());
        assert!(field(&class, "registry").same_handle(&field(&instance, "registry")));
        assert!(instance
            .borrow()
            .get_str("registry")
            .is_some_and(HashPair::is_static));
    }
}
