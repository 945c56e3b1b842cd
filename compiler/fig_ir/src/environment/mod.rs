//! Name → value bindings.
//!
//! An [`Environment`] is both the program-wide state and a function's local
//! scope. It is threaded through evaluation by value: cloning is an `Arc`
//! bump, and the first write to a shared environment copies the table
//! (`Arc::make_mut`). Two environments therefore never observe each other's
//! later writes, which is what lets a failed form leave the caller's
//! environment untouched and lets a finished program's environment seed the
//! next one without aliasing.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::Value;

/// Copy-on-write mapping from identifier to [`Value`]. Keys are unique.
#[derive(Clone, Default, PartialEq)]
pub struct Environment {
    bindings: Arc<FxHashMap<String, Value>>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a binding.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Bind `name`, replacing any previous binding.
    #[inline]
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        Arc::make_mut(&mut self.bindings).insert(name.into(), value);
    }

    /// Copy every binding of `other` into `self`, overriding on conflict.
    pub fn merge_from(&mut self, other: &Environment) {
        if other.is_empty() || Arc::ptr_eq(&self.bindings, &other.bindings) {
            return;
        }
        if self.is_empty() {
            self.bindings = Arc::clone(&other.bindings);
            return;
        }
        let bindings = Arc::make_mut(&mut self.bindings);
        for (name, value) in other.iter() {
            bindings.insert(name.to_string(), value.clone());
        }
    }

    /// Iterate over all bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// All bound identifiers, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("names", &self.names())
            .finish()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let bindings = iter
            .into_iter()
            .map(|(name, value)| (name.into(), value))
            .collect();
        Environment {
            bindings: Arc::new(bindings),
        }
    }
}

impl<K: Into<String>> Extend<(K, Value)> for Environment {
    fn extend<I: IntoIterator<Item = (K, Value)>>(&mut self, iter: I) {
        let bindings = Arc::make_mut(&mut self.bindings);
        for (name, value) in iter {
            bindings.insert(name.into(), value);
        }
    }
}
