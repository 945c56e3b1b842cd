//! Identifiers.

use std::borrow::Borrow;
use std::fmt;

/// A reference to a variable or function by identifier.
///
/// Distinguishes "the variable named `x`" from "the string `x`" until the
/// evaluator resolves it against an [`Environment`](crate::Environment).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Name(String);

impl Name {
    /// Create a name from an identifier.
    pub fn new(identifier: impl Into<String>) -> Self {
        Name(identifier.into())
    }

    /// The identifier text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the name, returning the identifier.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Length of the identifier in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({:?})", self.0)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Name {
    fn from(identifier: &str) -> Self {
        Name::new(identifier)
    }
}

impl From<String> for Name {
    fn from(identifier: String) -> Self {
        Name(identifier)
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests;
