//! Runtime values.
//!
//! [`Value`] pairs a [`ValueKind`] with the "ignored" flag set by the
//! `ignored` builtin. Construct values through the factory methods
//! (`Value::int`, `Value::list`, ...); they always start un-ignored.

mod function;
mod native;
mod primitive;

use std::collections::BTreeMap;
use std::fmt;

pub use function::{Function, FunctionBody};
pub use native::{Builtin, NativeError, NativeFn};
pub use primitive::{unwrap, wrap, Primitive, WrapError};

use crate::Name;

/// The payload of a [`Value`].
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ValueKind {
    /// No value. Produced by comments and by builtins with nothing to return.
    #[default]
    Unassigned,
    Str(String),
    Int(i64),
    Float(f64),
    /// An identifier that has not been resolved yet.
    Name(Name),
    Bool(bool),
    Function(Function),
    List(Vec<Value>),
    /// String-keyed mapping. Key order carries no meaning.
    Map(BTreeMap<String, Value>),
}

/// A runtime value.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Value {
    kind: ValueKind,
    /// Excluded from export when set.
    ignored: bool,
}

// Factory Methods

impl Value {
    #[inline]
    fn from_kind(kind: ValueKind) -> Self {
        Value {
            kind,
            ignored: false,
        }
    }

    pub fn unassigned() -> Self {
        Self::from_kind(ValueKind::Unassigned)
    }

    pub fn string(s: impl Into<String>) -> Self {
        Self::from_kind(ValueKind::Str(s.into()))
    }

    pub fn int(n: i64) -> Self {
        Self::from_kind(ValueKind::Int(n))
    }

    pub fn float(f: f64) -> Self {
        Self::from_kind(ValueKind::Float(f))
    }

    pub fn name(identifier: impl Into<Name>) -> Self {
        Self::from_kind(ValueKind::Name(identifier.into()))
    }

    pub fn bool(b: bool) -> Self {
        Self::from_kind(ValueKind::Bool(b))
    }

    pub fn function(f: Function) -> Self {
        Self::from_kind(ValueKind::Function(f))
    }

    pub fn list(items: Vec<Value>) -> Self {
        Self::from_kind(ValueKind::List(items))
    }

    pub fn map(entries: BTreeMap<String, Value>) -> Self {
        Self::from_kind(ValueKind::Map(entries))
    }
}

// Accessors

impl Value {
    #[inline]
    pub fn kind(&self) -> &ValueKind {
        &self.kind
    }

    /// Whether this value is excluded from export.
    #[inline]
    pub fn is_ignored(&self) -> bool {
        self.ignored
    }

    /// The same value, flagged as excluded from export.
    #[must_use]
    pub fn into_ignored(mut self) -> Self {
        self.ignored = true;
        self
    }

    pub fn is_unassigned(&self) -> bool {
        matches!(self.kind, ValueKind::Unassigned)
    }

    pub fn as_name(&self) -> Option<&Name> {
        match &self.kind {
            ValueKind::Name(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.kind {
            ValueKind::Bool(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self.kind {
            ValueKind::Int(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match &self.kind {
            ValueKind::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match &self.kind {
            ValueKind::Unassigned => "unassigned",
            ValueKind::Str(_) => "string",
            ValueKind::Int(_) => "integer",
            ValueKind::Float(_) => "float",
            ValueKind::Name(_) => "name",
            ValueKind::Bool(_) => "boolean",
            ValueKind::Function(_) => "function",
            ValueKind::List(_) => "list",
            ValueKind::Map(_) => "map",
        }
    }
}

impl From<ValueKind> for Value {
    fn from(kind: ValueKind) -> Self {
        Value::from_kind(kind)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ValueKind::Unassigned => f.write_str("<unassigned>"),
            ValueKind::Str(s) => write!(f, "{s:?}"),
            ValueKind::Int(n) => write!(f, "{n}"),
            ValueKind::Float(x) => write!(f, "{x:?}"),
            ValueKind::Name(name) => write!(f, "{name}"),
            ValueKind::Bool(b) => write!(f, "{b}"),
            ValueKind::Function(func) => write!(f, "<function {}>", func.name()),
            ValueKind::List(items) => {
                f.write_str("(list")?;
                for item in items {
                    write!(f, " {item}")?;
                }
                f.write_str(")")
            }
            ValueKind::Map(entries) => {
                f.write_str("(mapping")?;
                for (key, value) in entries {
                    write!(f, " {key:?} {value}")?;
                }
                f.write_str(")")
            }
        }
    }
}
