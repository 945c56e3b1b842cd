//! Running several programs in sequence.
//!
//! Every program starts from the environment the previous one left behind,
//! with the standard library installed over it again. A program that fails
//! is reported and the next one still runs.

use std::collections::BTreeMap;
use std::path::Path;

use fig_eval::Interpreter;
use fig_ir::{Environment, Primitive, Value};
use tracing::debug;

use crate::{export, parse_source, Error};

/// Result of running one program.
#[derive(Debug)]
pub struct ProgramOutcome {
    pub name: String,
    pub result: Result<Value, Error>,
}

impl ProgramOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// A sequence of programs sharing one environment.
pub struct Session {
    interpreter: Interpreter,
}

impl Session {
    /// Session with the standard library, printing to stdout.
    pub fn new() -> Self {
        Self::with_interpreter(Interpreter::new())
    }

    /// Session around a configured interpreter.
    pub fn with_interpreter(interpreter: Interpreter) -> Self {
        Session { interpreter }
    }

    pub fn env(&self) -> &Environment {
        self.interpreter.env()
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn into_env(self) -> Environment {
        self.interpreter.into_env()
    }

    /// Run one program, returning the value of its last form.
    ///
    /// A lex or parse error leaves the environment as it was. An evaluation
    /// error keeps the effects of the forms before the failing one.
    pub fn run(&mut self, name: &str, source: &str) -> Result<Value, Error> {
        self.interpreter.install_stdlib();
        let forms = parse_source(source)?;
        debug!(program = name, forms = forms.len(), "evaluating program");
        let value = self.interpreter.eval_forms(&forms)?;
        debug!(program = name, bindings = self.env().len(), "program finished");
        Ok(value)
    }

    /// Read and run a program file.
    pub fn run_file(&mut self, path: &Path) -> Result<Value, Error> {
        let source = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.run(&path.display().to_string(), &source)
    }

    /// Run every program in order, whatever happens to the earlier ones.
    pub fn run_all<'a>(
        &mut self,
        programs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Vec<ProgramOutcome> {
        programs
            .into_iter()
            .map(|(name, source)| {
                let result = self.run(name, source);
                if let Err(err) = &result {
                    debug!(program = name, error = %err, "program failed");
                }
                ProgramOutcome {
                    name: name.to_string(),
                    result,
                }
            })
            .collect()
    }

    /// The current environment, ready for an output writer.
    pub fn export(&self) -> BTreeMap<String, Primitive> {
        export(self.env())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
