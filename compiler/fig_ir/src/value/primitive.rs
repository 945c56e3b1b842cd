//! Untyped data at the builtin and export boundaries.
//!
//! Builtins never see [`Value`]s. Their arguments are [`unwrap`]ped into
//! [`Primitive`]s and whatever they compute is [`wrap`]ped back. The same
//! conversion feeds the output writers.

use std::collections::BTreeMap;
use std::fmt;

use super::{Value, ValueKind};

/// Native data with a direct [`Value`] counterpart, plus `Nil` for values
/// that have none (functions, names, unassigned).
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Primitive {
    #[default]
    Nil,
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    List(Vec<Primitive>),
    Map(BTreeMap<String, Primitive>),
}

impl Primitive {
    pub fn is_nil(&self) -> bool {
        matches!(self, Primitive::Nil)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Primitive::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Integers widen to floats.
    #[allow(clippy::cast_precision_loss, reason = "Fig numbers mix freely")]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Primitive::Int(n) => Some(*n as f64),
            Primitive::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Primitive::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Primitive::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Primitive]> {
        match self {
            Primitive::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Primitive>> {
        match self {
            Primitive::Map(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Primitive::Nil => "nil",
            Primitive::Int(_) => "integer",
            Primitive::Float(_) => "float",
            Primitive::Str(_) => "string",
            Primitive::Bool(_) => "boolean",
            Primitive::List(_) => "list",
            Primitive::Map(_) => "map",
        }
    }
}

/// Plain rendering, as `print` shows it: strings without quotes.
impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Nil => f.write_str("nil"),
            Primitive::Int(n) => write!(f, "{n}"),
            Primitive::Float(x) => write!(f, "{x}"),
            Primitive::Str(s) => f.write_str(s),
            Primitive::Bool(b) => write!(f, "{b}"),
            Primitive::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Primitive::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Primitive {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::Error as _;

        match self {
            Primitive::Nil => serializer.serialize_unit(),
            Primitive::Int(n) => serializer.serialize_i64(*n),
            // JSON has no spelling for these; refuse rather than emit `null`.
            Primitive::Float(x) if !x.is_finite() => Err(S::Error::custom(format!(
                "cannot encode non-finite float {x}"
            ))),
            Primitive::Float(x) => serializer.serialize_f64(*x),
            Primitive::Str(s) => serializer.serialize_str(s),
            Primitive::Bool(b) => serializer.serialize_bool(*b),
            Primitive::List(items) => serializer.collect_seq(items),
            Primitive::Map(entries) => serializer.collect_map(entries),
        }
    }
}

/// A primitive with no [`Value`] counterpart.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("cannot wrap a {type_name} as a Fig value")]
pub struct WrapError {
    pub type_name: &'static str,
}

/// Convert a primitive into the corresponding [`Value`], recursing into
/// lists and maps. Fails on `Nil` anywhere in the structure.
pub fn wrap(primitive: Primitive) -> Result<Value, WrapError> {
    let value = match primitive {
        Primitive::Nil => return Err(WrapError { type_name: "nil" }),
        Primitive::Int(n) => Value::int(n),
        Primitive::Float(x) => Value::float(x),
        Primitive::Str(s) => Value::string(s),
        Primitive::Bool(b) => Value::bool(b),
        Primitive::List(items) => Value::list(
            items
                .into_iter()
                .map(wrap)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Primitive::Map(entries) => Value::map(
            entries
                .into_iter()
                .map(|(key, value)| Ok((key, wrap(value)?)))
                .collect::<Result<BTreeMap<_, _>, WrapError>>()?,
        ),
    };
    Ok(value)
}

/// Convert a [`Value`] into its primitive form, recursing into lists and
/// maps. Functions, names and unassigned values become `Nil`.
///
/// `wrap(unwrap(v)) == v` for strings, integers, floats, booleans, and lists
/// and maps built from them. The ignored flag is not carried.
pub fn unwrap(value: &Value) -> Primitive {
    match value.kind() {
        ValueKind::Str(s) => Primitive::Str(s.clone()),
        ValueKind::Int(n) => Primitive::Int(*n),
        ValueKind::Float(x) => Primitive::Float(*x),
        ValueKind::Bool(b) => Primitive::Bool(*b),
        ValueKind::List(items) => Primitive::List(items.iter().map(unwrap).collect()),
        ValueKind::Map(entries) => Primitive::Map(
            entries
                .iter()
                .map(|(key, value)| (key.clone(), unwrap(value)))
                .collect(),
        ),
        ValueKind::Unassigned | ValueKind::Name(_) | ValueKind::Function(_) => Primitive::Nil,
    }
}
