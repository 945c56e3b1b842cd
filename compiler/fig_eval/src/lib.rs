//! Tree-walking evaluator for Fig.
//!
//! Evaluation is a pure recursive dispatch over parsed [`Form`]s. The
//! current [`Environment`] is threaded by value: every step consumes one and
//! hands back the one that follows it in an [`Evaluation`]. An error drops
//! the environment it was given, so a caller that kept its own handle sees
//! no partial effects.
//!
//! - Names resolve by lookup; other values evaluate to themselves.
//! - `define`, `if` and `function` are special forms ([`SpecialForm`]).
//! - Anything else applies the function bound to the form name. Before the
//!   call the caller's whole environment is merged into the callee's scope,
//!   so callees see every caller binding they do not shadow with a
//!   parameter.
//!
//! [`Interpreter`] drives a program (a forest of forms) and owns the
//! environment between forms.

mod errors;
mod evaluate;
mod function_call;
mod interpreter;
mod special_forms;

pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use evaluate::{evaluate, evaluate_sexpr, evaluate_value, Evaluation};
pub use function_call::apply;
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use special_forms::SpecialForm;

pub use fig_ir::{Environment, Form, Value};
