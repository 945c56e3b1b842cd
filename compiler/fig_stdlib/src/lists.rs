//! List builtins. Lists are immutable; every operation builds a new one.

use fig_ir::{wrap, NativeError, Primitive, Value};

use crate::args;

fn wrap_all<'a>(items: impl IntoIterator<Item = &'a Primitive>) -> Result<Vec<Value>, NativeError> {
    items
        .into_iter()
        .map(|item| wrap(item.clone()).map_err(NativeError::from))
        .collect()
}

#[cold]
fn empty_list(builtin: &str) -> NativeError {
    NativeError::new(format!("{builtin} expects a list with at least one value"))
}

pub(crate) fn list(args: &[Primitive]) -> Result<Value, NativeError> {
    Ok(Value::list(wrap_all(args)?))
}

pub(crate) fn first(args: &[Primitive]) -> Result<Value, NativeError> {
    args::exactly("first", args, 1)?;
    let items = args::list("first", &args[0])?;
    let head = items.first().ok_or_else(|| empty_list("first"))?;
    Ok(wrap(head.clone())?)
}

pub(crate) fn tail(args: &[Primitive]) -> Result<Value, NativeError> {
    args::exactly("tail", args, 1)?;
    let items = args::list("tail", &args[0])?;
    let (_, rest) = items.split_first().ok_or_else(|| empty_list("tail"))?;
    Ok(Value::list(wrap_all(rest)?))
}

/// `(append list value...)`
pub(crate) fn append(args: &[Primitive]) -> Result<Value, NativeError> {
    args::at_least("append", args, 2)?;
    let items = args::list("append", &args[0])?;
    Ok(Value::list(wrap_all(items.iter().chain(&args[1..]))?))
}

pub(crate) fn size(args: &[Primitive]) -> Result<Value, NativeError> {
    args::exactly("size", args, 1)?;
    let items = args::list("size", &args[0])?;
    Ok(Value::int(i64::try_from(items.len()).unwrap_or(i64::MAX)))
}
