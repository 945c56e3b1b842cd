//! Argument checking shared by the builtins.

use std::collections::BTreeMap;

use fig_ir::{NativeError, Primitive};

/// A numeric argument.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    #[allow(clippy::cast_precision_loss, reason = "Fig numbers mix freely")]
    pub(crate) fn to_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(x) => x,
        }
    }

    pub(crate) fn is_zero(self) -> bool {
        match self {
            Number::Int(n) => n == 0,
            Number::Float(x) => x == 0.0,
        }
    }
}

#[cold]
pub(crate) fn wrong_arg_count(
    builtin: &str,
    qualifier: &str,
    expected: usize,
    got: usize,
) -> NativeError {
    let plural = if expected == 1 { "" } else { "s" };
    NativeError::new(format!(
        "{builtin} expects {qualifier} {expected} argument{plural}, got {got}"
    ))
}

#[cold]
pub(crate) fn wrong_arg_type(builtin: &str, expected: &str, got: &Primitive) -> NativeError {
    NativeError::new(format!(
        "{builtin}: expected {expected}, got {}",
        got.type_name()
    ))
}

pub(crate) fn exactly(builtin: &str, args: &[Primitive], n: usize) -> Result<(), NativeError> {
    if args.len() == n {
        Ok(())
    } else {
        Err(wrong_arg_count(builtin, "exactly", n, args.len()))
    }
}

pub(crate) fn at_least(builtin: &str, args: &[Primitive], n: usize) -> Result<(), NativeError> {
    if args.len() >= n {
        Ok(())
    } else {
        Err(wrong_arg_count(builtin, "at least", n, args.len()))
    }
}

pub(crate) fn number(builtin: &str, arg: &Primitive) -> Result<Number, NativeError> {
    match arg {
        Primitive::Int(n) => Ok(Number::Int(*n)),
        Primitive::Float(x) => Ok(Number::Float(*x)),
        other => Err(wrong_arg_type(builtin, "number", other)),
    }
}

pub(crate) fn numbers(builtin: &str, args: &[Primitive]) -> Result<Vec<Number>, NativeError> {
    args.iter().map(|arg| number(builtin, arg)).collect()
}

pub(crate) fn int(builtin: &str, arg: &Primitive) -> Result<i64, NativeError> {
    arg.as_int()
        .ok_or_else(|| wrong_arg_type(builtin, "integer", arg))
}

pub(crate) fn string<'a>(builtin: &str, arg: &'a Primitive) -> Result<&'a str, NativeError> {
    arg.as_str()
        .ok_or_else(|| wrong_arg_type(builtin, "string", arg))
}

pub(crate) fn boolean(builtin: &str, arg: &Primitive) -> Result<bool, NativeError> {
    arg.as_bool()
        .ok_or_else(|| wrong_arg_type(builtin, "boolean", arg))
}

pub(crate) fn list<'a>(builtin: &str, arg: &'a Primitive) -> Result<&'a [Primitive], NativeError> {
    arg.as_list().ok_or_else(|| wrong_arg_type(builtin, "list", arg))
}

pub(crate) fn map<'a>(
    builtin: &str,
    arg: &'a Primitive,
) -> Result<&'a BTreeMap<String, Primitive>, NativeError> {
    arg.as_map().ok_or_else(|| wrong_arg_type(builtin, "map", arg))
}
