//! Parsed forms.
//!
//! A program parses into a forest of [`Form`]s. S-expressions are not
//! first-class values: they live only in that forest and inside the body of a
//! user-defined [`Function`](crate::Function).

use crate::{Name, Value};

/// One parsed node: an atom or a parenthesized form.
#[derive(Clone, Debug, PartialEq)]
pub enum Form {
    Value(Value),
    SExpr(SExpression),
}

impl Form {
    /// Shorthand for building an S-expression node.
    pub fn sexpr(form_name: impl Into<Name>, children: Vec<Form>) -> Self {
        Form::SExpr(SExpression::new(form_name, children))
    }

    /// Shorthand for a name atom.
    pub fn name(identifier: impl Into<Name>) -> Self {
        Form::Value(Value::name(identifier))
    }

    /// The S-expression inside this form, if it is one.
    pub fn as_sexpr(&self) -> Option<&SExpression> {
        match self {
            Form::SExpr(sexpr) => Some(sexpr),
            Form::Value(_) => None,
        }
    }

    /// The value inside this form, if it is an atom.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Form::Value(value) => Some(value),
            Form::SExpr(_) => None,
        }
    }
}

impl From<Value> for Form {
    fn from(value: Value) -> Self {
        Form::Value(value)
    }
}

impl From<SExpression> for Form {
    fn from(sexpr: SExpression) -> Self {
        Form::SExpr(sexpr)
    }
}

/// `(form_name child...)`: a special form or a function application.
#[derive(Clone, Debug, PartialEq)]
pub struct SExpression {
    pub form_name: Name,
    pub children: Vec<Form>,
}

impl SExpression {
    pub fn new(form_name: impl Into<Name>, children: Vec<Form>) -> Self {
        SExpression {
            form_name: form_name.into(),
            children,
        }
    }
}
