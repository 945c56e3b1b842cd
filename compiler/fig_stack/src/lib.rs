//! Stack growth for the recursive stages of Fig.
//!
//! The lexer and parser recurse once per nested S-expression and the
//! evaluator recurses once per nested form and per user-defined function
//! call. All three wrap their recursive entry points in [`ensure_sufficient_stack`]
//! so that deeply nested configuration programs grow the stack on demand
//! instead of aborting the process.
//!
//! On `wasm32` the guard is a passthrough.

/// Grow when less than this much stack remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const GROWTH: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if fewer than [`RED_ZONE`] bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

/// Run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
