//! `define`, `if` and `function`.

use fig_ir::{Environment, Form, Function, Name, SExpression, Value};

use crate::errors::{self, EvalError, EvalResult};
use crate::evaluate::{evaluate, Evaluation};

/// Parameter list of a function taking no arguments: `(function (_) body)`.
const NO_PARAMS: &str = "_";

/// Forms with their own evaluation rules. They are recognized by name
/// before any lookup, so binding `if` as a variable does not shadow them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpecialForm {
    Define,
    If,
    Function,
}

impl SpecialForm {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "define" => Some(SpecialForm::Define),
            "if" => Some(SpecialForm::If),
            "function" => Some(SpecialForm::Function),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SpecialForm::Define => "define",
            SpecialForm::If => "if",
            SpecialForm::Function => "function",
        }
    }

    pub(crate) fn evaluate(self, children: &[Form], env: Environment) -> EvalResult {
        match self {
            SpecialForm::Define => evaluate_define(children, env),
            SpecialForm::If => evaluate_if(children, env),
            SpecialForm::Function => evaluate_function(children, env),
        }
    }
}

/// `(define (name expr) ...)`: bind each name in turn. Later bindings see
/// earlier ones. Yields the last bound value.
fn evaluate_define(children: &[Form], mut env: Environment) -> EvalResult {
    let mut last = Value::unassigned();
    for child in children {
        let Form::SExpr(binding) = child else {
            return Err(errors::define_not_a_form());
        };
        let [expr] = binding.children.as_slice() else {
            return Err(errors::define_arity(
                binding.form_name.as_str(),
                binding.children.len(),
            ));
        };

        let evaluated = evaluate(expr, env)?;
        let value = named(evaluated.value, &binding.form_name);
        env = evaluated.env;
        env.define(binding.form_name.as_str(), value.clone());
        last = value;
    }
    Ok(Evaluation::new(last, env))
}

/// Give an anonymous function the name it is being bound to.
fn named(value: Value, name: &Name) -> Value {
    match value.as_function() {
        Some(function) if function.is_anonymous() => {
            Value::function(function.clone().with_name(name.clone()))
        }
        _ => value,
    }
}

/// `(if condition then else)`. Only the chosen branch is evaluated.
fn evaluate_if(children: &[Form], env: Environment) -> EvalResult {
    let [condition, then_branch, else_branch] = children else {
        return Err(errors::if_arity(children.len()));
    };
    let Evaluation { value, env } = evaluate(condition, env)?;
    let Some(flag) = value.as_bool() else {
        return Err(errors::condition_not_boolean(&value));
    };
    evaluate(if flag { then_branch } else { else_branch }, env)
}

/// `(function (param ...) body)`. The new function captures the current
/// environment as its scope.
fn evaluate_function(children: &[Form], env: Environment) -> EvalResult {
    let [params, body] = children else {
        return Err(errors::function_arity(children.len()));
    };
    let Form::SExpr(params) = params else {
        return Err(errors::params_not_a_form());
    };
    let params = parameter_names(params)?;
    let function = Function::user(Function::ANONYMOUS, params, body.clone(), env.clone());
    Ok(Evaluation::new(Value::function(function), env))
}

/// The list's form name followed by its children, each of which must be a
/// name. `(_)` alone declares no parameters.
fn parameter_names(list: &SExpression) -> Result<Vec<Name>, EvalError> {
    if list.form_name.as_str() == NO_PARAMS && list.children.is_empty() {
        return Ok(Vec::new());
    }
    let rest = list.children.iter().map(|child| {
        child
            .as_value()
            .and_then(Value::as_name)
            .cloned()
            .ok_or_else(errors::param_not_a_name)
    });
    std::iter::once(Ok(list.form_name.clone()))
        .chain(rest)
        .collect()
}
