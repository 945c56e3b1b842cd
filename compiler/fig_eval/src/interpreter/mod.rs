//! Program driver.
//!
//! An [`Interpreter`] owns the environment between top-level forms. Each
//! form is evaluated against a handle to that environment; on success the
//! result replaces it wholesale, on failure it is left exactly as it was.

mod builder;

pub use builder::InterpreterBuilder;

use fig_ir::{Environment, Form, Value};
use fig_stdlib::SharedPrintHandler;

use crate::errors::EvalError;
use crate::evaluate::{evaluate, Evaluation};

pub struct Interpreter {
    env: Environment,
    /// Standard library bindings to (re)install, if preloading is enabled.
    stdlib: Option<Environment>,
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// Interpreter with the standard library, printing to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn into_env(self) -> Environment {
        self.env
    }

    /// Replace the environment wholesale.
    pub fn set_env(&mut self, env: Environment) {
        self.env = env;
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Copy the standard library over the current environment, replacing
    /// any bindings that shadow it. No-op when preloading is disabled.
    pub fn install_stdlib(&mut self) {
        if let Some(stdlib) = &self.stdlib {
            self.env.merge_from(stdlib);
        }
    }

    /// Evaluate one top-level form.
    pub fn eval(&mut self, form: &Form) -> Result<Value, EvalError> {
        let Evaluation { value, env } = evaluate(form, self.env.clone())?;
        self.env = env;
        Ok(value)
    }

    /// Evaluate forms in order, stopping at the first error. Forms before
    /// the failing one keep their effects. Returns the last value.
    #[tracing::instrument(level = "debug", skip_all, fields(forms = forms.len()))]
    pub fn eval_forms(&mut self, forms: &[Form]) -> Result<Value, EvalError> {
        let mut last = Value::unassigned();
        for form in forms {
            last = self.eval(form)?;
        }
        Ok(last)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
