//! Map builtins. Keys are strings.

use std::collections::BTreeMap;

use fig_ir::{wrap, NativeError, Primitive, Value};

use crate::args;

/// Insert `key value` pairs from `pairs` into `entries`.
fn insert_pairs(
    builtin: &str,
    entries: &mut BTreeMap<String, Value>,
    pairs: &[Primitive],
) -> Result<(), NativeError> {
    for pair in pairs.chunks(2) {
        let [key, value] = pair else {
            return Err(NativeError::new(format!(
                "{builtin} expects keys and values in pairs"
            )));
        };
        let key = args::string(builtin, key)?;
        entries.insert(key.to_string(), wrap(value.clone())?);
    }
    Ok(())
}

/// `(mapping key value ...)`
pub(crate) fn mapping(args: &[Primitive]) -> Result<Value, NativeError> {
    let mut entries = BTreeMap::new();
    insert_pairs("mapping", &mut entries, args)?;
    Ok(Value::map(entries))
}

/// `(assoc map key value ...)`: a copy of `map` with the pairs added.
pub(crate) fn assoc(args: &[Primitive]) -> Result<Value, NativeError> {
    args::at_least("assoc", args, 3)?;
    let existing = args::map("assoc", &args[0])?;
    let mut entries = existing
        .iter()
        .map(|(key, value)| Ok((key.clone(), wrap(value.clone())?)))
        .collect::<Result<BTreeMap<_, _>, NativeError>>()?;
    insert_pairs("assoc", &mut entries, &args[1..])?;
    Ok(Value::map(entries))
}

pub(crate) fn get(args: &[Primitive]) -> Result<Value, NativeError> {
    args::exactly("get", args, 2)?;
    let entries = args::map("get", &args[0])?;
    let key = args::string("get", &args[1])?;
    let value = entries
        .get(key)
        .ok_or_else(|| NativeError::new(format!("get: key {key:?} not found in map")))?;
    Ok(wrap(value.clone())?)
}

/// Sorted list of keys.
pub(crate) fn keys(args: &[Primitive]) -> Result<Value, NativeError> {
    args::exactly("keys", args, 1)?;
    let entries = args::map("keys", &args[0])?;
    Ok(Value::list(entries.keys().map(Value::string).collect()))
}
