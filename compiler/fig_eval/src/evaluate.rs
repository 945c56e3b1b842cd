//! Evaluation of single nodes.

use fig_ir::{Environment, Form, SExpression, Value};
use fig_stack::ensure_sufficient_stack;

use crate::errors::{self, EvalError, EvalResult};
use crate::function_call::evaluate_application;
use crate::special_forms::SpecialForm;

/// A value together with the environment that follows its evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub value: Value,
    pub env: Environment,
}

impl Evaluation {
    pub fn new(value: Value, env: Environment) -> Self {
        Evaluation { value, env }
    }
}

/// Evaluate any node.
pub fn evaluate(form: &Form, env: Environment) -> EvalResult {
    match form {
        Form::Value(value) => evaluate_value(value, env),
        Form::SExpr(sexpr) => ensure_sufficient_stack(|| evaluate_sexpr(sexpr, env)),
    }
}

/// Resolve a name, or pass any other value through unchanged.
pub fn evaluate_value(value: &Value, env: Environment) -> EvalResult {
    let resolved = resolve(value, &env)?;
    Ok(Evaluation::new(resolved, env))
}

/// Special forms first, then general application.
#[tracing::instrument(level = "debug", skip_all, fields(form = %sexpr.form_name))]
pub fn evaluate_sexpr(sexpr: &SExpression, env: Environment) -> EvalResult {
    match SpecialForm::from_name(sexpr.form_name.as_str()) {
        Some(special) => special.evaluate(&sexpr.children, env),
        None => evaluate_application(sexpr, env),
    }
}

pub(crate) fn resolve(value: &Value, env: &Environment) -> Result<Value, EvalError> {
    match value.as_name() {
        Some(name) => env
            .get(name.as_str())
            .cloned()
            .ok_or_else(|| errors::unbound_variable(name.as_str())),
        None => Ok(value.clone()),
    }
}
