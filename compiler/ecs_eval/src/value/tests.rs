use pretty_assertions::assert_eq;

use super::*;

#[test]
fn type_names() {
    assert_eq!(Value::Integer(1).type_name(), "INTEGER");
    assert_eq!(Value::Float(1.0).type_name(), "FLOAT");
    assert_eq!(Value::string("a").type_name(), "STRING");
    assert_eq!(Value::Boolean(true).type_name(), "BOOLEAN");
    assert_eq!(Value::Null.type_name(), "NULL");
    assert_eq!(Value::array(vec![]).type_name(), "ARRAY");
    assert_eq!(Value::hash(HashObject::new()).type_name(), "HASH");
    assert_eq!(Value::error("x").type_name(), "ERROR");
}

#[test]
fn inspect_forms() {
    assert_eq!(Value::Integer(-3).inspect(), "-3");
    assert_eq!(Value::Float(2.0).inspect(), "2.0");
    assert_eq!(Value::Float(0.25).inspect(), "0.25");
    assert_eq!(Value::string("raw text").inspect(), "raw text");
    assert_eq!(Value::Boolean(false).inspect(), "false");
    assert_eq!(Value::Null.inspect(), "null");
    assert_eq!(
        Value::array(vec![Value::Integer(1), Value::string("b")]).inspect(),
        "[1, b]"
    );
    assert_eq!(Value::error("boom").inspect(), "ERROR: boom");

    let mut hash = HashObject::new();
    hash.insert(Value::string("k"), Value::Integer(1));
    assert_eq!(Value::hash(hash).inspect(), "{k: 1}");
}

#[test]
fn truthiness() {
    assert!(!Value::Null.is_truthy());
    assert!(!Value::Boolean(false).is_truthy());
    assert!(Value::Boolean(true).is_truthy());
    assert!(Value::Integer(0).is_truthy());
    assert!(Value::string("").is_truthy());
    assert!(Value::array(vec![]).is_truthy());
}

#[test]
fn hash_keys_are_structural() {
    assert_eq!(
        HashKey::from_value(&Value::string("name")),
        HashKey::from_value(&Value::string("name"))
    );
    assert_eq!(
        HashKey::from_value(&Value::Integer(7)),
        Some(HashKey::Integer(7))
    );
    assert_ne!(
        HashKey::from_value(&Value::Integer(1)),
        HashKey::from_value(&Value::Boolean(true))
    );
    assert_eq!(HashKey::from_value(&Value::Float(1.0)), None);
    assert_eq!(HashKey::from_value(&Value::array(vec![])), None);
    assert_eq!(HashKey::from_value(&Value::Null), None);
}

#[test]
fn hash_insert_replaces_equal_keys() {
    let mut hash = HashObject::new();
    assert!(hash.insert(Value::string("a"), Value::Integer(1)));
    assert!(hash.insert(Value::string("a"), Value::Integer(2)));
    assert!(!hash.insert(Value::Null, Value::Integer(3)));
    assert_eq!(hash.len(), 1);
    assert_eq!(hash.get_str("a").map(|p| p.value.clone()), Some(Value::Integer(2)));
}

#[test]
fn static_modifier() {
    let pair = HashPair::new(Value::string("count"), Value::Integer(0))
        .with_modifiers(Modifiers::STATIC);
    assert!(pair.is_static());
    assert!(!HashPair::new(Value::Null, Value::Null).is_static());
}

#[test]
fn identity_versus_structure() {
    let a = Value::array(vec![Value::Integer(1)]);
    let b = Value::array(vec![Value::Integer(1)]);
    assert_eq!(a, b);
    assert!(!a.same_handle(&b));
    assert!(a.same_handle(&a.clone()));
    assert!(Value::Null.same_handle(&Value::Null));
    assert!(Value::Boolean(true).same_handle(&Value::Boolean(true)));
}
