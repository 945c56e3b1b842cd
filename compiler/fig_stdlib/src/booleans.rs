//! Boolean logic and equality.

use fig_ir::{NativeError, Primitive, Value};

use crate::args;

pub(crate) fn not(args: &[Primitive]) -> Result<Value, NativeError> {
    args::exactly("not", args, 1)?;
    Ok(Value::bool(!args::boolean("not", &args[0])?))
}

pub(crate) fn is_zero(args: &[Primitive]) -> Result<Value, NativeError> {
    args::exactly("zero?", args, 1)?;
    Ok(Value::bool(args::number("zero?", &args[0])?.is_zero()))
}

fn booleans(builtin: &str, args: &[Primitive]) -> Result<Vec<bool>, NativeError> {
    args::at_least(builtin, args, 2)?;
    args.iter().map(|arg| args::boolean(builtin, arg)).collect()
}

/// Every argument must be a boolean, including the ones after the first
/// `false`.
pub(crate) fn and(args: &[Primitive]) -> Result<Value, NativeError> {
    Ok(Value::bool(booleans("and", args)?.into_iter().all(|b| b)))
}

pub(crate) fn or(args: &[Primitive]) -> Result<Value, NativeError> {
    Ok(Value::bool(booleans("or", args)?.into_iter().any(|b| b)))
}

/// True when every argument equals the first. Arguments of different types
/// are unequal, so `(= 1 1.0)` is false.
pub(crate) fn equal(args: &[Primitive]) -> Result<Value, NativeError> {
    args::at_least("=", args, 2)?;
    let first = &args[0];
    Ok(Value::bool(args[1..].iter().all(|arg| arg == first)))
}
