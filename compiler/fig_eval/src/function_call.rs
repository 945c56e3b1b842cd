//! General application.

use fig_ir::{unwrap, Environment, Function, FunctionBody, Primitive, SExpression, Value};

use crate::errors::{self, EvalError, EvalResult};
use crate::evaluate::{evaluate, resolve, Evaluation};

/// `(name arg ...)` where `name` is not a special form.
///
/// Arguments are evaluated left to right, each against the caller's
/// environment. The caller's environment is returned unchanged.
pub(crate) fn evaluate_application(sexpr: &SExpression, env: Environment) -> EvalResult {
    let name = sexpr.form_name.as_str();
    let callee = env.get(name).ok_or_else(|| errors::no_such_function(name))?;
    let function = callee
        .as_function()
        .ok_or_else(|| errors::not_a_function(name, callee))?
        .clone();

    let args = sexpr
        .children
        .iter()
        .map(|child| evaluate(child, env.clone()).map(|evaluated| evaluated.value))
        .collect::<Result<Vec<_>, _>>()?;

    let value = apply(&function, args, &env)?;
    Ok(Evaluation::new(value, env))
}

/// Apply `function` to already evaluated arguments.
///
/// Fails if fewer arguments than declared parameters are supplied; extra
/// arguments are ignored by user functions and passed on to natives.
/// Natives receive unwrapped primitives. User functions evaluate their body
/// in their captured scope, overlaid with `caller_env`, overlaid with the
/// parameter bindings. A name produced by the body is resolved once more in
/// that scope.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(function = %function.name(), args = args.len())
)]
pub fn apply(
    function: &Function,
    args: Vec<Value>,
    caller_env: &Environment,
) -> Result<Value, EvalError> {
    let params = function.params();
    if args.len() < params.len() {
        return Err(errors::not_enough_arguments(
            function.name().as_str(),
            params.len(),
            args.len(),
        ));
    }

    match function.body() {
        FunctionBody::Native(native) => {
            let primitives: Vec<Primitive> = args.iter().map(unwrap).collect();
            native
                .call(&primitives)
                .map_err(|err| errors::native_error(function.name().as_str(), err))
        }
        FunctionBody::Form(body) => {
            let mut scope = function.scope().clone();
            scope.merge_from(caller_env);
            for (param, arg) in params.iter().zip(args) {
                scope.define(param.as_str(), arg);
            }
            let result = evaluate(body, scope.clone())?.value;
            resolve(&result, &scope)
        }
    }
}
