use pretty_assertions::assert_eq;

use super::{error_message, run};
use crate::Value;

#[test]
fn integer_arithmetic() {
    let cases = [
        ("5", 5),
        ("-10", -10),
        ("1 + 2 * 3", 7),
        ("(1 + 2) * 3", 9),
        ("2 * 2 * 2 * 2", 16),
        ("50 / 2 * 2 + 10", 60),
        ("17 % 5", 2),
        ("3 * (3 * 3) + 10", 37),
        ("-5 + 10", 5),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source), Value::Integer(expected), "{source}");
    }
}

#[test]
fn float_arithmetic() {
    assert_eq!(run("1.5 + 2.25"), Value::Float(3.75));
    assert_eq!(run("1.5 < 2.5"), Value::Boolean(true));
    assert_eq!(
        error_message(&run("1.5 + 1")),
        "type mismatch: FLOAT + INTEGER"
    );
}

#[test]
fn comparisons_and_bang() {
    let cases = [
        ("1 < 2", true),
        ("1 > 2", false),
        ("1 == 1", true),
        ("1 != 1", false),
        ("true == true", true),
        ("true != false", true),
        ("(1 < 2) == true", true),
        ("!true", false),
        ("!!5", true),
        ("!0", false),
        ("1 == \"1\"", false),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source), Value::Boolean(expected), "{source}");
    }
}

#[test]
fn strings() {
    assert_eq!(run(r#""foo" + "bar""#), Value::from("foobar"));
    assert_eq!(run(r#""a" < "b""#), Value::Boolean(true));
    assert_eq!(run(r#""ecs" == "ecs""#), Value::Boolean(true));
    assert_eq!(
        error_message(&run(r#""a" - "b""#)),
        "unknown operator: STRING - STRING"
    );
}

#[test]
fn operator_errors() {
    let cases = [
        ("5 + \"foo\"", "type mismatch: INTEGER + STRING"),
        ("5 + true", "type mismatch: INTEGER + BOOLEAN"),
        ("-true", "unknown operator: -BOOLEAN"),
        ("true + false", "unknown operator: BOOLEAN + BOOLEAN"),
        ("true && false", "unknown operator: BOOLEAN && BOOLEAN"),
        ("1 / 0", "division by zero"),
        ("1 % 0", "modulo by zero"),
    ];
    for (source, expected) in cases {
        assert_eq!(error_message(&run(source)), expected, "{source}");
    }
}

#[test]
fn arrays() {
    assert_eq!(
        run("[1, 2 * 2, 3 + 3]"),
        Value::array(vec![
            Value::Integer(1),
            Value::Integer(4),
            Value::Integer(6)
        ])
    );
    assert_eq!(run("[1, 2, 3][0]"), Value::Integer(1));
    assert_eq!(run("let i = 0; [1][i]"), Value::Integer(1));
    assert_eq!(run("let arr = [1, 2, 3]; arr[2]"), Value::Integer(3));
    assert_eq!(run("let arr = [1, 2, 3]; arr[99]"), Value::Null);
    assert_eq!(run("[1, 2, 3][-1]"), Value::Null);
}

#[test]
fn hashes() {
    let source = r#"
        let two = "two";
        let h = {"one": 10 - 9, two: 1 + 1, 4: 4, true: 5};
        [h["one"], h["two"], h[4], h[true], h["missing"]]
    "#;
    assert_eq!(
        run(source),
        Value::array(vec![
            Value::Integer(1),
            Value::Integer(2),
            Value::Integer(4),
            Value::Integer(5),
            Value::Null,
        ])
    );
    assert_eq!(run(r#"{"a": 1, "a": 2}["a"]"#), Value::Integer(2));
    assert_eq!(run("{}").inspect(), "{}");
}

#[test]
fn index_errors() {
    assert_eq!(
        error_message(&run("{\"a\": 1}[fn(x) { x }]")),
        "unusable as hash key: FUNCTION"
    );
    assert_eq!(
        error_message(&run("{[1]: 1}")),
        "unusable as hash key: ARRAY"
    );
    assert_eq!(
        error_message(&run("1[0]")),
        "index operator not supported: INTEGER"
    );
}

#[test]
fn identifiers() {
    assert_eq!(run("let a = 5; let b = a; b"), Value::Integer(5));
    assert_eq!(run("let a = 5; a = a + 1; a"), Value::Integer(6));
    assert_eq!(error_message(&run("foobar")), "identifier not found: foobar");
}

#[test]
fn unsupported_nodes() {
    assert_eq!(
        error_message(&run("let a = [1]; a[0] = 2")),
        "index assignment is not supported by the evaluator"
    );
    assert_eq!(
        error_message(&run(r#"exec "ls""#)),
        "exec is not supported by the evaluator"
    );
}
