//! String builtins. Positions and lengths count characters, not bytes.

use fig_ir::{NativeError, Primitive, Value};

use crate::args;

#[cold]
fn index_out_of_range(builtin: &str, index: i64, s: &str) -> NativeError {
    NativeError::new(format!(
        "{builtin}: index {index} is out of range for {s:?}"
    ))
}

fn char_count(s: &str) -> i64 {
    i64::try_from(s.chars().count()).unwrap_or(i64::MAX)
}

/// Byte offset of the character at `index`, which may be one past the end.
fn byte_offset(s: &str, index: i64) -> Option<usize> {
    let index = usize::try_from(index).ok()?;
    s.char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(s.len()))
        .nth(index)
}

pub(crate) fn concat(args: &[Primitive]) -> Result<Value, NativeError> {
    args::at_least("concat", args, 2)?;
    let mut result = String::new();
    for arg in args {
        result.push_str(args::string("concat", arg)?);
    }
    Ok(Value::string(result))
}

/// `(substr s start end)`: characters `start..end`.
pub(crate) fn substr(args: &[Primitive]) -> Result<Value, NativeError> {
    args::exactly("substr", args, 3)?;
    let s = args::string("substr", &args[0])?;
    let start = args::int("substr", &args[1])?;
    let end = args::int("substr", &args[2])?;

    if start < 0 {
        return Err(NativeError::new(
            "substr: cannot start a substring at a negative index",
        ));
    }
    if end > char_count(s) {
        return Err(NativeError::new(
            "substr: cannot end a substring past the end of the string",
        ));
    }
    if start > end {
        return Err(NativeError::new(format!(
            "substr: start {start} is after end {end}"
        )));
    }

    match (byte_offset(s, start), byte_offset(s, end)) {
        (Some(from), Some(to)) => Ok(Value::string(&s[from..to])),
        _ => Err(index_out_of_range("substr", end, s)),
    }
}

/// Character position of the first occurrence of the needle, or -1.
pub(crate) fn index(args: &[Primitive]) -> Result<Value, NativeError> {
    args::exactly("index", args, 2)?;
    let haystack = args::string("index", &args[0])?;
    let needle = args::string("index", &args[1])?;
    let position = haystack
        .find(needle)
        .map_or(-1, |offset| char_count(&haystack[..offset]));
    Ok(Value::int(position))
}

pub(crate) fn length(args: &[Primitive]) -> Result<Value, NativeError> {
    args::exactly("length", args, 1)?;
    Ok(Value::int(char_count(args::string("length", &args[0])?)))
}

pub(crate) fn upcase(args: &[Primitive]) -> Result<Value, NativeError> {
    args::exactly("upcase", args, 1)?;
    Ok(Value::string(args::string("upcase", &args[0])?.to_uppercase()))
}

pub(crate) fn downcase(args: &[Primitive]) -> Result<Value, NativeError> {
    args::exactly("downcase", args, 1)?;
    Ok(Value::string(
        args::string("downcase", &args[0])?.to_lowercase(),
    ))
}

pub(crate) fn split(args: &[Primitive]) -> Result<Value, NativeError> {
    args::exactly("split", args, 2)?;
    let s = args::string("split", &args[0])?;
    let separator = args::string("split", &args[1])?;
    let parts = if separator.is_empty() {
        s.chars().map(|c| Value::string(c.to_string())).collect()
    } else {
        s.split(separator).map(Value::string).collect()
    };
    Ok(Value::list(parts))
}

/// `(at s i)`: the character at position `i` as a one-character string.
pub(crate) fn at(args: &[Primitive]) -> Result<Value, NativeError> {
    args::exactly("at", args, 2)?;
    let s = args::string("at", &args[0])?;
    let index = args::int("at", &args[1])?;
    usize::try_from(index)
        .ok()
        .and_then(|i| s.chars().nth(i))
        .map(|c| Value::string(c.to_string()))
        .ok_or_else(|| index_out_of_range("at", index, s))
}
