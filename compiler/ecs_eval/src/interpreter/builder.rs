//! Builder for [`Evaluator`].

use super::Evaluator;
use crate::{BuiltinRegistry, PrintHandler};

/// Configures an [`Evaluator`].
///
/// Without options the evaluator gets the default builtins printing to
/// stdout. An explicit registry takes precedence over a print handler.
#[derive(Default)]
pub struct EvaluatorBuilder {
    builtins: Option<BuiltinRegistry>,
    print_handler: Option<PrintHandler>,
}

impl EvaluatorBuilder {
    pub fn new() -> Self {
        EvaluatorBuilder::default()
    }

    /// Use `registry` for builtin lookups.
    #[must_use]
    pub fn builtins(mut self, registry: BuiltinRegistry) -> Self {
        self.builtins = Some(registry);
        self
    }

    /// Send `print` output to `handler` instead of stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: PrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    pub fn build(self) -> Evaluator {
        let builtins = match (self.builtins, self.print_handler) {
            (Some(registry), _) => registry,
            (None, Some(handler)) => BuiltinRegistry::with_print_handler(handler),
            (None, None) => BuiltinRegistry::with_defaults(),
        };
        Evaluator { builtins }
    }
}
