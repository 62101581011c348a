//! End-to-end evaluator tests: source text through the parser into the
//! evaluator.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod expression_tests;
mod function_tests;

use crate::{Environment, Evaluator, PrintHandler, Value};

fn parse_ok(source: &str) -> ecs_ir::Program {
    let output = ecs_parse::parse(source);
    assert!(
        !output.has_errors(),
        "unexpected parse errors in {source:?}: {:?}",
        output.diagnostics()
    );
    output.program
}

/// Evaluate `source` in `env` with printing suppressed.
fn run_in(source: &str, env: &Environment) -> Value {
    let evaluator = Evaluator::builder()
        .print_handler(PrintHandler::Silent)
        .build();
    evaluator.eval_program(&parse_ok(source), env)
}

fn run(source: &str) -> Value {
    run_in(source, &Environment::new())
}

/// Evaluate `source` and return the result with everything it printed.
fn run_printing(source: &str) -> (Value, String) {
    let (handler, buffer) = PrintHandler::buffer();
    let evaluator = Evaluator::builder().print_handler(handler).build();
    let value = evaluator.eval_program(&parse_ok(source), &Environment::new());
    (value, buffer.contents())
}

fn error_message(value: &Value) -> &str {
    match value {
        Value::Error(message) => message,
        other => panic!("expected an error, got {other:?}"),
    }
}
