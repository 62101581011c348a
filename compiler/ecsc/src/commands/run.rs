//! The `run` command: evaluate an ECS source file.

use ecs_eval::Value;

use super::{read_file, CommandError};
use crate::Session;

/// Run a file and print its final value unless it is `null`.
pub fn run_file(path: &str) -> Result<(), CommandError> {
    let source = read_file(path)?;
    let value = run_source(&mut Session::new(), &source)?;
    if !value.is_null() {
        println!("{}", value.inspect());
    }
    Ok(())
}

/// Evaluate `source` in `session`, mapping diagnostics and error results to
/// [`CommandError`].
pub fn run_source(session: &mut Session, source: &str) -> Result<Value, CommandError> {
    match session.eval_source(source) {
        Err(diagnostics) => Err(CommandError::Parse(diagnostics)),
        Ok(Value::Error(message)) => Err(CommandError::Runtime(message.to_string())),
        Ok(value) => Ok(value),
    }
}
