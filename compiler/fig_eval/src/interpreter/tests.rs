#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;

use fig_ir::{Environment, Form, Value};
use fig_stdlib::{buffer_handler, silent_handler};

use super::*;
use crate::errors::EvalErrorKind;

fn forms(source: &str) -> Vec<Form> {
    let tokens = fig_lexer::lex(source).expect("source should lex");
    fig_parse::parse(&tokens).expect("source should parse")
}

fn quiet() -> Interpreter {
    Interpreter::builder().print_handler(silent_handler()).build()
}

#[test]
fn builder_preloads_the_standard_library() {
    let interpreter = quiet();
    assert!(interpreter.env().contains("+"));
    assert!(interpreter.env().contains("pi"));
}

#[test]
fn builder_without_stdlib_starts_empty() {
    let interpreter = Interpreter::builder().stdlib(false).build();
    assert!(interpreter.env().is_empty());
}

#[test]
fn builder_keeps_starting_environment() {
    let env: Environment = [("base", Value::int(1))].into_iter().collect();
    let interpreter = Interpreter::builder()
        .env(env)
        .print_handler(silent_handler())
        .build();
    assert_eq!(interpreter.env().get("base"), Some(&Value::int(1)));
    assert!(interpreter.env().contains("list"));
}

#[test]
fn stdlib_replaces_shadowing_bindings_on_install() {
    let mut interpreter = quiet();
    interpreter.eval_forms(&forms("(define (pi 3))")).unwrap();
    assert_eq!(interpreter.env().get("pi"), Some(&Value::int(3)));
    interpreter.install_stdlib();
    assert_eq!(
        interpreter.env().get("pi"),
        Some(&Value::float(std::f64::consts::PI))
    );
}

#[test]
fn later_forms_see_earlier_definitions() {
    let mut interpreter = quiet();
    let last = interpreter
        .eval_forms(&forms("(define (x 2)) (define (y (* x 3))) y\n"))
        .unwrap();
    assert_eq!(last, Value::int(6));
}

#[test]
fn error_keeps_effects_of_earlier_forms() {
    let mut interpreter = quiet();
    let err = interpreter
        .eval_forms(&forms("(define (a 1)) (define (b (nosuchfn))) (define (c 3))"))
        .unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::NoSuchFunction {
            name: "nosuchfn".to_string()
        }
    );
    assert!(interpreter.env().contains("a"));
    assert!(!interpreter.env().contains("b"));
    assert!(!interpreter.env().contains("c"));
}

#[test]
fn print_goes_to_the_configured_handler() {
    let handler = buffer_handler();
    let mut interpreter = Interpreter::builder()
        .print_handler(handler.clone())
        .build();
    interpreter
        .eval_forms(&forms("(print 'hello' (+ 1 2))"))
        .unwrap();
    assert_eq!(handler.get_output(), "hello 3\n");
    assert_eq!(interpreter.print_handler().get_output(), "hello 3\n");
}

#[test]
fn environment_can_be_carried_between_interpreters() {
    let mut first = quiet();
    first.eval_forms(&forms("(define (shared 'yes'))")).unwrap();

    let mut second = quiet();
    second.set_env(first.into_env());
    let value = second.eval(&Form::name("shared")).unwrap();
    assert_eq!(value, Value::string("yes"));
}

#[test]
fn empty_program_yields_unassigned() {
    let mut interpreter = quiet();
    assert!(interpreter.eval_forms(&[]).unwrap().is_unassigned());
}
