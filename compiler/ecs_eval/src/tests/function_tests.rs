use pretty_assertions::assert_eq;

use super::{error_message, run, run_printing};
use crate::Value;

#[test]
fn function_value_renders_source() {
    let value = run("fn(x) { x + 2; }");
    let Value::Function(func) = &value else {
        panic!("expected a function, got {value:?}");
    };
    assert_eq!(func.arity(), 1);
    assert_eq!(func.parameters[0].name, "x");
    assert_eq!(value.inspect(), "fn(x) {\n(x + 2)\n}");
}

#[test]
fn application() {
    let cases = [
        ("let identity = fn(x) { x; }; identity(5);", 5),
        ("let identity = fn(x) { return x; }; identity(5);", 5),
        ("let double = fn(x) { x * 2; }; double(5);", 10),
        ("let add = fn(x, y) { x + y; }; add(5, 5);", 10),
        ("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20),
        ("fn(x) { x; }(5)", 5),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source), Value::Integer(expected), "{source}");
    }
}

#[test]
fn closures_keep_their_environment() {
    let source = "
        let newAdder = fn(x) { fn(y) { x + y } };
        let addTwo = newAdder(2);
        addTwo(3)
    ";
    assert_eq!(run(source), Value::Integer(5));
}

#[test]
fn nested_closures_outlive_their_frames() {
    let source = "
        let outer = fn(a) { fn(b) { fn(c) { a + b + c } } };
        outer(1)(2)(3)
    ";
    assert_eq!(run(source), Value::Integer(6));
}

#[test]
fn calls_do_not_leak_bindings() {
    let source = "
        let x = 1;
        let f = fn(x) { let y = 10; x };
        f(2);
        x
    ";
    assert_eq!(run(source), Value::Integer(1));
    assert_eq!(
        error_message(&run("let f = fn() { let y = 10; y }; f(); y")),
        "identifier not found: y"
    );
}

#[test]
fn recursion() {
    let source = "
        let fib = fn(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } };
        fib(15)
    ";
    assert_eq!(run(source), Value::Integer(610));
}

#[test]
fn deep_recursion_does_not_overflow() {
    let source = "
        let count = fn(n) { if (n == 0) { 0 } else { 1 + count(n - 1) } };
        count(20000)
    ";
    assert_eq!(run(source), Value::Integer(20000));
}

#[test]
fn argument_count() {
    assert_eq!(
        error_message(&run("let add = fn(a, b) { a + b }; add(1)")),
        "wrong number of arguments: want=2, got=1"
    );
    assert_eq!(
        run("let first = fn(a) { a }; first(1, 2, 3)"),
        Value::Integer(1)
    );
}

#[test]
fn calling_a_non_function() {
    assert_eq!(error_message(&run("let x = 5; x(1)")), "not a function: INTEGER");
}

#[test]
fn argument_errors_stop_the_call() {
    let (value, printed) = run_printing("let f = fn(a, b) { print(a) }; f(1, missing)");
    assert_eq!(error_message(&value), "identifier not found: missing");
    assert_eq!(printed, "");
}

#[test]
fn builtins() {
    assert_eq!(run(r#"len("four")"#), Value::Integer(4));
    assert_eq!(run("len([1, 2, 3])"), Value::Integer(3));
    assert_eq!(run("first([7, 8])"), Value::Integer(7));
    assert_eq!(run("last([7, 8])"), Value::Integer(8));
    assert_eq!(run("rest([7, 8])").inspect(), "[8]");
    assert_eq!(run("let a = [1]; let b = push(a, 2); [a, b]").inspect(), "[[1], [1, 2]]");
    assert_eq!(run(r#"join(["a", 1], "-")"#), Value::from("a-1"));
}

#[test]
fn builtin_errors_propagate() {
    assert_eq!(
        error_message(&run("len(1)")),
        "argument to `len` not supported, got INTEGER"
    );
    assert_eq!(
        error_message(&run(r#"let x = len("a", "b"); 5"#)),
        "wrong number of arguments. got=2, want=1"
    );
}

#[test]
fn user_bindings_shadow_builtins() {
    assert_eq!(run("let len = fn(x) { 42 }; len([1])"), Value::Integer(42));
}

#[test]
fn print_writes_each_argument() {
    let (value, printed) = run_printing(r#"print("hello", 1 + 1, [1, 2])"#);
    assert_eq!(value, Value::Null);
    assert_eq!(printed, "hello\n2\n[1, 2]\n");
}
