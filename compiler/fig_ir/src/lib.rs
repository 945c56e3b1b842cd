//! Fig IR - the data model shared by every stage of the Fig pipeline.
//!
//! - [`Token`]: lexer output, either a structural marker or one literal character
//! - [`Name`]: an identifier awaiting resolution
//! - [`Form`] / [`SExpression`]: parser output
//! - [`Value`]: tagged runtime values, each carrying an "ignored" flag
//! - [`Function`]: user-defined closures and native builtins
//! - [`Environment`]: copy-on-write name → value bindings
//! - [`Primitive`]: untyped data crossing the builtin boundary, with
//!   [`wrap`] / [`unwrap`] conversions
//!
//! Data flows source text → tokens → forms → values, and the final
//! [`Environment`] is what gets exported.

mod environment;
mod form;
mod name;
mod token;
mod value;

pub use environment::Environment;
pub use form::{Form, SExpression};
pub use name::Name;
pub use token::Token;
pub use value::{
    unwrap, wrap, Builtin, Function, FunctionBody, NativeError, NativeFn, Primitive, Value,
    ValueKind, WrapError,
};
