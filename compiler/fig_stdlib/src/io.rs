//! Builtins that touch the host: output, process environment, and the
//! export-exclusion flag.

use fig_ir::{wrap, Builtin, NativeError, Primitive, Value};

use crate::args;
use crate::print_handler::SharedPrintHandler;

/// `print`: writes its arguments separated by spaces, then a newline.
pub(crate) struct Print {
    handler: SharedPrintHandler,
}

impl Print {
    pub(crate) fn new(handler: SharedPrintHandler) -> Self {
        Print { handler }
    }
}

impl Builtin for Print {
    fn call(&self, args: &[Primitive]) -> Result<Value, NativeError> {
        let line = args
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        self.handler.println(&line);
        Ok(Value::unassigned())
    }
}

/// `(env "NAME")`: the variable's value, or `""` when unset.
pub(crate) fn env(args: &[Primitive]) -> Result<Value, NativeError> {
    args::exactly("env", args, 1)?;
    let name = args::string("env", &args[0])?;
    Ok(Value::string(std::env::var(name).unwrap_or_default()))
}

pub(crate) fn ignored(args: &[Primitive]) -> Result<Value, NativeError> {
    args::exactly("ignored", args, 1)?;
    Ok(wrap(args[0].clone())?.into_ignored())
}
