//! The handoff from an environment to output writers.

use std::collections::BTreeMap;

use fig_ir::{unwrap, Environment, Primitive};
use fig_stdlib::is_constant;

/// Bindings worth writing out, as primitives.
///
/// Drops the standard library's constants, values flagged as ignored, and
/// anything with no primitive form (functions, names, unassigned values).
pub fn export(env: &Environment) -> BTreeMap<String, Primitive> {
    env.iter()
        .filter(|(name, value)| !value.is_ignored() && !is_constant(name))
        .filter_map(|(name, value)| {
            let primitive = unwrap(value);
            (!primitive.is_nil()).then(|| (name.to_string(), primitive))
        })
        .collect()
}

#[cfg(test)]
mod tests;
