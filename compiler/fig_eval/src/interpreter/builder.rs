//! `InterpreterBuilder` for configuring an [`Interpreter`].

use fig_ir::Environment;
use fig_stdlib::{standard_library, stdout_handler, SharedPrintHandler};

use super::Interpreter;

/// Builder for [`Interpreter`].
///
/// Defaults: empty starting environment, standard library preloaded,
/// `print` writing to stdout.
pub struct InterpreterBuilder {
    env: Option<Environment>,
    preload_stdlib: bool,
    print_handler: Option<SharedPrintHandler>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            env: None,
            preload_stdlib: true,
            print_handler: None,
        }
    }

    /// Set the starting environment.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Whether to install the standard library over the starting
    /// environment.
    #[must_use]
    pub fn stdlib(mut self, preload: bool) -> Self {
        self.preload_stdlib = preload;
        self
    }

    /// Set the destination of the `print` builtin.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    pub fn build(self) -> Interpreter {
        let print_handler = self.print_handler.unwrap_or_else(stdout_handler);
        let stdlib = self
            .preload_stdlib
            .then(|| standard_library(print_handler.clone()));
        let mut interpreter = Interpreter {
            env: self.env.unwrap_or_default(),
            stdlib,
            print_handler,
        };
        interpreter.install_stdlib();
        interpreter
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
