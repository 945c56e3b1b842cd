//! Function values.

use std::fmt;

use super::{NativeError, NativeFn, Primitive, Value};
use crate::{Environment, Form, Name};

/// What runs when a function is applied.
#[derive(Clone, Debug, PartialEq)]
pub enum FunctionBody {
    /// A Fig expression, evaluated in the function's scope.
    Form(Box<Form>),
    /// A native builtin, invoked with unwrapped arguments.
    Native(NativeFn),
}

/// A user-defined closure or a native builtin.
///
/// A user-defined function owns a flattened copy of the environment it was
/// created in. Natives carry an empty scope; their parameter names are
/// documentation only.
#[derive(Clone, PartialEq)]
pub struct Function {
    name: Name,
    params: Vec<Name>,
    body: FunctionBody,
    scope: Environment,
}

impl Function {
    /// Name given to functions created by the `function` form until a
    /// `define` binds them.
    pub const ANONYMOUS: &'static str = "<anonymous>";

    /// A user-defined function.
    pub fn user(name: impl Into<Name>, params: Vec<Name>, body: Form, scope: Environment) -> Self {
        Function {
            name: name.into(),
            params,
            body: FunctionBody::Form(Box::new(body)),
            scope,
        }
    }

    /// A native builtin with declared parameter names.
    pub fn native(name: impl Into<Name>, params: &[&str], callable: NativeFn) -> Self {
        Function {
            name: name.into(),
            params: params.iter().map(|param| Name::from(*param)).collect(),
            body: FunctionBody::Native(callable),
            scope: Environment::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &Name {
        &self.name
    }

    #[inline]
    pub fn params(&self) -> &[Name] {
        &self.params
    }

    #[inline]
    pub fn body(&self) -> &FunctionBody {
        &self.body
    }

    /// The captured scope.
    #[inline]
    pub fn scope(&self) -> &Environment {
        &self.scope
    }

    /// `true` for natives: apply with unwrapped primitives instead of
    /// evaluating a body.
    #[inline]
    pub fn is_callable(&self) -> bool {
        matches!(self.body, FunctionBody::Native(_))
    }

    /// Whether no `define` has named this function yet.
    pub fn is_anonymous(&self) -> bool {
        self.name.as_str() == Self::ANONYMOUS
    }

    /// The same function under another name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<Name>) -> Self {
        self.name = name.into();
        self
    }

    /// Invoke a native builtin.
    pub fn call_native(&self, args: &[Primitive]) -> Result<Value, NativeError> {
        match &self.body {
            FunctionBody::Native(callable) => callable.call(args),
            FunctionBody::Form(_) => Err(NativeError::new(format!(
                "{} is not a callable function",
                self.name
            ))),
        }
    }
}

// The captured scope routinely holds the whole standard library, so Debug
// reports its size instead of its contents.
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("body", &self.body)
            .field("scope_len", &self.scope.len())
            .finish()
    }
}
