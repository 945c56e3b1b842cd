//! The native builtin boundary.

use std::fmt;
use std::sync::Arc;

use super::{Primitive, Value, WrapError};

/// Error returned by a builtin. The evaluator surfaces it verbatim.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct NativeError {
    message: String,
}

impl NativeError {
    pub fn new(message: impl Into<String>) -> Self {
        NativeError {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<WrapError> for NativeError {
    fn from(err: WrapError) -> Self {
        NativeError::new(err.to_string())
    }
}

/// A function implemented outside Fig.
///
/// Receives its arguments already evaluated and unwrapped; returns an
/// already wrapped [`Value`].
pub trait Builtin: Send + Sync {
    fn call(&self, args: &[Primitive]) -> Result<Value, NativeError>;
}

impl<F> Builtin for F
where
    F: Fn(&[Primitive]) -> Result<Value, NativeError> + Send + Sync,
{
    fn call(&self, args: &[Primitive]) -> Result<Value, NativeError> {
        self(args)
    }
}

/// Shared handle to a [`Builtin`].
///
/// Two handles are equal when they point at the same builtin instance.
#[derive(Clone)]
pub struct NativeFn(Arc<dyn Builtin>);

impl NativeFn {
    pub fn new(builtin: impl Builtin + 'static) -> Self {
        NativeFn(Arc::new(builtin))
    }

    #[inline]
    pub fn call(&self, args: &[Primitive]) -> Result<Value, NativeError> {
        self.0.call(args)
    }
}

impl PartialEq for NativeFn {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NativeFn(..)")
    }
}
