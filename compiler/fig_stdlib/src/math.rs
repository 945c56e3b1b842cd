//! Arithmetic and numeric comparison.
//!
//! Arithmetic folds left over two or more numbers. The result is an integer
//! when every argument is an integer and a float as soon as one is not.

use std::cmp::Ordering;

use fig_ir::{NativeError, Primitive, Value};

use crate::args::{self, Number};

type IntOp = fn(i64, i64) -> Option<i64>;
type FloatOp = fn(f64, f64) -> f64;

fn fold(
    builtin: &str,
    args: &[Primitive],
    int_op: IntOp,
    float_op: FloatOp,
) -> Result<Value, NativeError> {
    args::at_least(builtin, args, 2)?;
    let numbers = args::numbers(builtin, args)?;

    let ints: Option<Vec<i64>> = numbers
        .iter()
        .map(|n| match n {
            Number::Int(i) => Some(*i),
            Number::Float(_) => None,
        })
        .collect();

    match ints {
        Some(ints) => {
            let mut acc = ints[0];
            for &next in &ints[1..] {
                acc = int_op(acc, next).ok_or_else(|| integer_overflow(builtin))?;
            }
            Ok(Value::int(acc))
        }
        None => {
            let acc = numbers[1..]
                .iter()
                .fold(numbers[0].to_f64(), |acc, next| float_op(acc, next.to_f64()));
            Ok(Value::float(acc))
        }
    }
}

#[cold]
fn integer_overflow(builtin: &str) -> NativeError {
    NativeError::new(format!("integer overflow in {builtin}"))
}

#[cold]
fn division_by_zero() -> NativeError {
    NativeError::new("cannot divide by zero")
}

#[cold]
fn modulo_by_zero() -> NativeError {
    NativeError::new("cannot take a remainder modulo zero")
}

pub(crate) fn add(args: &[Primitive]) -> Result<Value, NativeError> {
    fold("+", args, i64::checked_add, |a, b| a + b)
}

pub(crate) fn subtract(args: &[Primitive]) -> Result<Value, NativeError> {
    fold("-", args, i64::checked_sub, |a, b| a - b)
}

pub(crate) fn multiply(args: &[Primitive]) -> Result<Value, NativeError> {
    fold("*", args, i64::checked_mul, |a, b| a * b)
}

/// Integer division truncates toward zero.
pub(crate) fn divide(args: &[Primitive]) -> Result<Value, NativeError> {
    for divisor in args.iter().skip(1) {
        if args::number("/", divisor)?.is_zero() {
            return Err(division_by_zero());
        }
    }
    fold("/", args, i64::checked_div, |a, b| a / b)
}

pub(crate) fn modulo(args: &[Primitive]) -> Result<Value, NativeError> {
    args::exactly("%", args, 2)?;
    let dividend = args::int("%", &args[0])?;
    let divisor = args::int("%", &args[1])?;
    if divisor == 0 {
        return Err(modulo_by_zero());
    }
    dividend
        .checked_rem(divisor)
        .map(Value::int)
        .ok_or_else(|| integer_overflow("%"))
}

/// Order two numeric arguments. Integers compare exactly; anything
/// involving a float compares as floats. `None` when a NaN is involved.
fn compare(builtin: &str, args: &[Primitive]) -> Result<Option<Ordering>, NativeError> {
    args::exactly(builtin, args, 2)?;
    let lhs = args::number(builtin, &args[0])?;
    let rhs = args::number(builtin, &args[1])?;
    Ok(match (lhs, rhs) {
        (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
        (a, b) => a.to_f64().partial_cmp(&b.to_f64()),
    })
}

pub(crate) fn greater_than(args: &[Primitive]) -> Result<Value, NativeError> {
    let ordering = compare(">", args)?;
    Ok(Value::bool(ordering == Some(Ordering::Greater)))
}

pub(crate) fn less_than(args: &[Primitive]) -> Result<Value, NativeError> {
    let ordering = compare("<", args)?;
    Ok(Value::bool(ordering == Some(Ordering::Less)))
}

pub(crate) fn greater_or_equal(args: &[Primitive]) -> Result<Value, NativeError> {
    let ordering = compare(">=", args)?;
    Ok(Value::bool(matches!(
        ordering,
        Some(Ordering::Greater | Ordering::Equal)
    )))
}

pub(crate) fn less_or_equal(args: &[Primitive]) -> Result<Value, NativeError> {
    let ordering = compare("<=", args)?;
    Ok(Value::bool(matches!(
        ordering,
        Some(Ordering::Less | Ordering::Equal)
    )))
}
