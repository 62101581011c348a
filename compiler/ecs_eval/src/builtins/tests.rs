use pretty_assertions::assert_eq;

use super::*;

fn call(registry: &BuiltinRegistry, name: &str, args: &[Value]) -> Value {
    let Some(Value::Builtin(builtin)) = registry.get(name) else {
        panic!("builtin {name} not registered");
    };
    builtin.call(None, None, args)
}

fn ints(values: &[i64]) -> Value {
    Value::array(values.iter().copied().map(Value::Integer).collect())
}

#[test]
fn default_names() {
    let registry = BuiltinRegistry::with_defaults();
    assert_eq!(
        registry.names(),
        vec!["first", "join", "last", "len", "print", "push", "rest"]
    );
    assert!(!registry.contains("Math"));
    assert!(BuiltinRegistry::new().is_empty());
}

#[test]
fn len_of_strings_and_arrays() {
    let registry = BuiltinRegistry::with_defaults();
    assert_eq!(call(&registry, "len", &[Value::string("four")]), Value::Integer(4));
    assert_eq!(call(&registry, "len", &[Value::string("")]), Value::Integer(0));
    assert_eq!(call(&registry, "len", &[ints(&[1, 2, 3])]), Value::Integer(3));
    assert_eq!(
        call(&registry, "len", &[Value::Integer(1)]),
        Value::error("argument to `len` not supported, got INTEGER")
    );
    assert_eq!(
        call(&registry, "len", &[Value::string("a"), Value::string("b")]),
        Value::error("wrong number of arguments. got=2, want=1")
    );
}

#[test]
fn first_last_rest() {
    let registry = BuiltinRegistry::with_defaults();
    let array = ints(&[1, 2, 3]);
    assert_eq!(call(&registry, "first", std::slice::from_ref(&array)), Value::Integer(1));
    assert_eq!(call(&registry, "last", std::slice::from_ref(&array)), Value::Integer(3));
    assert_eq!(call(&registry, "rest", &[array]), ints(&[2, 3]));
    assert_eq!(call(&registry, "first", &[ints(&[])]), Value::Null);
    assert_eq!(call(&registry, "last", &[ints(&[])]), Value::Null);
    assert_eq!(call(&registry, "rest", &[ints(&[])]), Value::Null);
    assert_eq!(
        call(&registry, "first", &[Value::Integer(1)]),
        Value::error("argument to `first` must be ARRAY, got INTEGER")
    );
}

#[test]
fn push_leaves_input_untouched() {
    let registry = BuiltinRegistry::with_defaults();
    let original = ints(&[1]);
    let pushed = call(&registry, "push", &[original.clone(), Value::Integer(2)]);
    assert_eq!(pushed, ints(&[1, 2]));
    assert_eq!(original, ints(&[1]));
    assert_eq!(
        call(&registry, "push", &[original]),
        Value::error("wrong number of arguments. got=1, want=2")
    );
}

#[test]
fn join_renders_elements() {
    let registry = BuiltinRegistry::with_defaults();
    let array = Value::array(vec![Value::Integer(1), Value::string("two"), Value::Null]);
    assert_eq!(
        call(&registry, "join", &[array, Value::string("-")]),
        Value::string("1-two-null")
    );
    assert_eq!(
        call(&registry, "join", &[ints(&[1]), Value::Integer(0)]),
        Value::error("second argument to `join` must be STRING, got INTEGER")
    );
}

#[test]
fn print_goes_to_handler() {
    let (handler, output) = PrintHandler::buffer();
    let registry = BuiltinRegistry::with_print_handler(handler);
    let result = call(&registry, "print", &[Value::string("hi"), Value::Integer(3)]);
    assert_eq!(result, Value::Null);
    assert_eq!(output.contents(), "hi\n3\n");
}

#[test]
fn register_replaces() {
    let mut registry = BuiltinRegistry::new();
    registry.register("answer", |_, _, _| Value::Integer(41));
    registry.register("answer", |_, _, _| Value::Integer(42));
    assert_eq!(registry.len(), 1);
    assert_eq!(call(&registry, "answer", &[]), Value::Integer(42));
}
