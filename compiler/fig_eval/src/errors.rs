//! Evaluation errors.
//!
//! `EvalErrorKind` carries the structured category; factory functions build
//! the error and its message together. Errors from native builtins keep the
//! builtin's message verbatim.

use std::fmt;

use fig_ir::{NativeError, Value};

/// A fatal evaluation error. The form being evaluated is abandoned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Human-readable message, equal to `kind.to_string()`.
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Names
    UnboundVariable {
        name: String,
    },
    NoSuchFunction {
        name: String,
    },
    NotAFunction {
        name: String,
        type_name: &'static str,
    },

    // Special forms
    DefineNotAForm,
    DefineArity {
        name: String,
        got: usize,
    },
    IfArity {
        got: usize,
    },
    ConditionNotBoolean {
        type_name: &'static str,
    },
    FunctionArity {
        got: usize,
    },
    ParamsNotAForm,
    ParamNotAName,

    // Application
    NotEnoughArguments {
        function: String,
        expected: usize,
        got: usize,
    },
    Native {
        function: String,
        message: String,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundVariable { name } => write!(f, "variable {name} not assigned"),
            Self::NoSuchFunction { name } => write!(f, "no such function {name}"),
            Self::NotAFunction { name, type_name } => {
                write!(f, "{name} is not a function (found {type_name})")
            }
            Self::DefineNotAForm => f.write_str(
                "names to assign to and their values must be given as (name <expression>)",
            ),
            Self::DefineArity { name, got } => write!(
                f,
                "definition of {name} must have the form ({name} <expression>), found {got} expressions"
            ),
            Self::IfArity { got } => write!(
                f,
                "if expects one condition and two branches, found {got} expressions"
            ),
            Self::ConditionNotBoolean { type_name } => write!(
                f,
                "conditions for branching must evaluate to true or false, got {type_name}"
            ),
            Self::FunctionArity { got } => write!(
                f,
                "function expects an argument list and a body, found {got} expressions"
            ),
            Self::ParamsNotAForm => {
                f.write_str("function argument names must be declared in an S-expression")
            }
            Self::ParamNotAName => f.write_str("all items in a function argument list must be names"),
            Self::NotEnoughArguments {
                function,
                expected,
                got,
            } => write!(
                f,
                "not enough arguments passed to {function}: expected {expected}, got {got}"
            ),
            Self::Native { message, .. } => f.write_str(message),
        }
    }
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError { kind, message }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

/// Result of evaluating one node: the value and the environment that
/// follows it.
pub type EvalResult = Result<crate::Evaluation, EvalError>;

// Names

#[cold]
pub fn unbound_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn no_such_function(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NoSuchFunction {
        name: name.to_string(),
    })
}

#[cold]
pub fn not_a_function(name: &str, value: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAFunction {
        name: name.to_string(),
        type_name: value.type_name(),
    })
}

// Special forms

#[cold]
pub fn define_not_a_form() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DefineNotAForm)
}

#[cold]
pub fn define_arity(name: &str, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DefineArity {
        name: name.to_string(),
        got,
    })
}

#[cold]
pub fn if_arity(got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IfArity { got })
}

#[cold]
pub fn condition_not_boolean(value: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ConditionNotBoolean {
        type_name: value.type_name(),
    })
}

#[cold]
pub fn function_arity(got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::FunctionArity { got })
}

#[cold]
pub fn params_not_a_form() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ParamsNotAForm)
}

#[cold]
pub fn param_not_a_name() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ParamNotAName)
}

// Application

#[cold]
pub fn not_enough_arguments(function: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotEnoughArguments {
        function: function.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn native_error(function: &str, err: NativeError) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Native {
        function: function.to_string(),
        message: err.message().to_string(),
    })
}
