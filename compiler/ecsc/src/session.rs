//! Persistent evaluation across source chunks.

use ecs_eval::{Environment, Evaluator, Value};

/// One top-level environment fed by successive chunks of source.
///
/// Bindings made by one [`eval_source`](Session::eval_source) call are
/// visible to the next, the way a REPL behaves.
pub struct Session {
    env: Environment,
    evaluator: Evaluator,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A session with the default builtins.
    pub fn new() -> Self {
        Self::with_evaluator(Evaluator::new())
    }

    pub fn with_evaluator(evaluator: Evaluator) -> Self {
        Session {
            env: Environment::new(),
            evaluator,
        }
    }

    /// The top-level environment shared by every chunk.
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Parse and evaluate one chunk.
    ///
    /// A chunk with parse diagnostics is not evaluated and leaves the
    /// environment untouched. Runtime errors come back as `Ok(Value::Error)`.
    pub fn eval_source(&mut self, source: &str) -> Result<Value, Vec<String>> {
        let output = ecs_parse::parse(source);
        if output.has_errors() {
            let diagnostics = output.diagnostics();
            tracing::debug!(count = diagnostics.len(), "chunk rejected");
            return Err(diagnostics);
        }
        Ok(self.evaluator.eval_program(&output.program, &self.env))
    }
}
