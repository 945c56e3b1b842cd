//! The Fig standard library.
//!
//! Every builtin is a native [`Function`] taking unwrapped [`Primitive`]
//! arguments and returning a wrapped [`Value`]. Type and arity mismatches
//! come back as [`NativeError`]s, never panics. Declared parameter names are
//! metadata only.
//!
//! [`Primitive`]: fig_ir::Primitive
//! [`NativeError`]: fig_ir::NativeError

mod args;
mod booleans;
mod io;
mod lists;
mod maps;
mod math;
mod print_handler;
mod strings;

use fig_ir::{Builtin, Environment, Function, NativeFn, Value};

pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};

/// Bindings the standard library reserves. They are never exported.
pub const CONSTANT_NAMES: [&str; 3] = ["true", "false", "pi"];

/// Whether `name` is one of [`CONSTANT_NAMES`].
pub fn is_constant(name: &str) -> bool {
    CONSTANT_NAMES.contains(&name)
}

/// Build an environment holding the constants and every builtin.
///
/// `print` writes through `print_handler`.
pub fn standard_library(print_handler: SharedPrintHandler) -> Environment {
    let mut env = Environment::new();
    env.define("true", Value::bool(true));
    env.define("false", Value::bool(false));
    env.define("pi", Value::float(std::f64::consts::PI));

    // Math
    register(&mut env, "+", &["a", "b"], math::add);
    register(&mut env, "-", &["a", "b"], math::subtract);
    register(&mut env, "*", &["a", "b"], math::multiply);
    register(&mut env, "/", &["a", "b"], math::divide);
    register(&mut env, "%", &["a", "b"], math::modulo);
    register(&mut env, ">", &["a", "b"], math::greater_than);
    register(&mut env, "<", &["a", "b"], math::less_than);
    register(&mut env, ">=", &["a", "b"], math::greater_or_equal);
    register(&mut env, "<=", &["a", "b"], math::less_or_equal);

    // Booleans
    register(&mut env, "not", &["value"], booleans::not);
    register(&mut env, "zero?", &["n"], booleans::is_zero);
    register(&mut env, "and", &["b1", "b2"], booleans::and);
    register(&mut env, "or", &["b1", "b2"], booleans::or);
    register(&mut env, "=", &["a", "b"], booleans::equal);

    // Strings
    register(&mut env, "concat", &["s1", "s2"], strings::concat);
    register(&mut env, "substr", &["str", "start", "end"], strings::substr);
    register(&mut env, "index", &["s1", "s2"], strings::index);
    register(&mut env, "length", &["str"], strings::length);
    register(&mut env, "upcase", &["str"], strings::upcase);
    register(&mut env, "downcase", &["str"], strings::downcase);
    register(&mut env, "split", &["str", "sep"], strings::split);
    register(&mut env, "at", &["str", "index"], strings::at);

    // Lists
    register(&mut env, "list", &[], lists::list);
    register(&mut env, "first", &["list"], lists::first);
    register(&mut env, "tail", &["list"], lists::tail);
    register(&mut env, "append", &["list", "value"], lists::append);
    register(&mut env, "size", &["list"], lists::size);

    // Maps
    register(&mut env, "mapping", &[], maps::mapping);
    register(&mut env, "assoc", &["map", "key", "value"], maps::assoc);
    register(&mut env, "get", &["map", "key"], maps::get);
    register(&mut env, "keys", &["map"], maps::keys);

    // I/O
    register(&mut env, "print", &["msg"], io::Print::new(print_handler));
    register(&mut env, "env", &["var"], io::env);
    register(&mut env, "ignored", &["value"], io::ignored);

    env
}

fn register(env: &mut Environment, name: &str, params: &[&str], builtin: impl Builtin + 'static) {
    let function = Function::native(name, params, NativeFn::new(builtin));
    env.define(name, Value::function(function));
}

#[cfg(test)]
mod tests;
