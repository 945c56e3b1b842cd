#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;

use fig_ir::{unwrap, Environment, Primitive, Value};

use super::*;

fn stdlib() -> Environment {
    standard_library(silent_handler())
}

fn call(env: &Environment, name: &str, args: &[Primitive]) -> Result<Value, String> {
    let function = env
        .get(name)
        .and_then(Value::as_function)
        .unwrap_or_else(|| panic!("{name} should be a builtin"));
    function
        .call_native(args)
        .map_err(|err| err.message().to_string())
}

fn ok(name: &str, args: &[Primitive]) -> Primitive {
    unwrap(&call(&stdlib(), name, args).unwrap())
}

fn err(name: &str, args: &[Primitive]) -> String {
    call(&stdlib(), name, args).unwrap_err()
}

fn int(n: i64) -> Primitive {
    Primitive::Int(n)
}

fn float(x: f64) -> Primitive {
    Primitive::Float(x)
}

fn s(text: &str) -> Primitive {
    Primitive::Str(text.to_string())
}

fn list(items: Vec<Primitive>) -> Primitive {
    Primitive::List(items)
}

fn map(pairs: &[(&str, Primitive)]) -> Primitive {
    Primitive::Map(
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), value.clone()))
            .collect(),
    )
}

// === Registration ===

#[test]
fn constants_are_registered() {
    let env = stdlib();
    assert_eq!(env.get("true"), Some(&Value::bool(true)));
    assert_eq!(env.get("false"), Some(&Value::bool(false)));
    assert_eq!(env.get("pi"), Some(&Value::float(std::f64::consts::PI)));
    for name in CONSTANT_NAMES {
        assert!(is_constant(name));
    }
    assert!(!is_constant("print"));
}

#[test]
fn every_builtin_is_a_named_native() {
    let env = stdlib();
    let builtins = [
        "+", "-", "*", "/", "%", ">", "<", ">=", "<=", "not", "zero?", "and", "or", "=",
        "concat", "substr", "index", "length", "upcase", "downcase", "split", "at", "list",
        "first", "tail", "append", "size", "mapping", "assoc", "get", "keys", "print", "env",
        "ignored",
    ];
    for name in builtins {
        let function = env.get(name).and_then(Value::as_function).unwrap();
        assert!(function.is_callable(), "{name} should be native");
        assert_eq!(function.name().as_str(), name);
    }
    assert_eq!(env.len(), builtins.len() + CONSTANT_NAMES.len());
}

// === Math ===

#[test]
fn integer_arithmetic() {
    assert_eq!(ok("+", &[int(1), int(2), int(3)]), int(6));
    assert_eq!(ok("-", &[int(10), int(3), int(2)]), int(5));
    assert_eq!(ok("*", &[int(5), int(5)]), int(25));
    assert_eq!(ok("/", &[int(7), int(2)]), int(3));
    assert_eq!(ok("/", &[int(-7), int(2)]), int(-3));
    assert_eq!(ok("%", &[int(7), int(3)]), int(1));
}

#[test]
fn any_float_makes_a_float() {
    assert_eq!(ok("+", &[int(1), float(0.5)]), float(1.5));
    assert_eq!(ok("*", &[float(2.0), int(3)]), float(6.0));
    assert_eq!(ok("/", &[int(7), float(2.0)]), float(3.5));
    assert_eq!(ok("-", &[float(1.0), int(1)]), float(0.0));
}

#[test]
fn arithmetic_errors() {
    assert_eq!(
        err("+", &[int(1)]),
        "+ expects at least 2 arguments, got 1"
    );
    assert_eq!(err("+", &[int(1), s("x")]), "+: expected number, got string");
    assert_eq!(err("/", &[int(1), int(0)]), "cannot divide by zero");
    assert_eq!(err("/", &[int(1), float(0.0)]), "cannot divide by zero");
    assert_eq!(
        err("%", &[int(1), int(0)]),
        "cannot take a remainder modulo zero"
    );
    assert_eq!(err("%", &[int(5), float(2.0)]), "%: expected integer, got float");
    assert_eq!(
        err("*", &[int(i64::MAX), int(2)]),
        "integer overflow in *"
    );
}

#[test]
fn comparisons_use_both_operands() {
    assert_eq!(ok(">", &[int(3), int(2)]), Primitive::Bool(true));
    assert_eq!(ok(">", &[int(2), int(3)]), Primitive::Bool(false));
    assert_eq!(ok("<", &[int(2), int(3)]), Primitive::Bool(true));
    assert_eq!(ok("<", &[int(3), int(3)]), Primitive::Bool(false));
    assert_eq!(ok(">=", &[int(3), int(3)]), Primitive::Bool(true));
    assert_eq!(ok(">=", &[int(2), int(3)]), Primitive::Bool(false));
    assert_eq!(ok("<=", &[float(2.5), int(3)]), Primitive::Bool(true));
    assert_eq!(ok("<=", &[int(4), float(3.5)]), Primitive::Bool(false));
}

#[test]
fn comparisons_take_exactly_two_numbers() {
    assert_eq!(
        err(">", &[int(1), int(2), int(3)]),
        "> expects exactly 2 arguments, got 3"
    );
    assert_eq!(err("<", &[s("a"), int(2)]), "<: expected number, got string");
}

// === Booleans ===

#[test]
fn boolean_logic() {
    let t = Primitive::Bool(true);
    let f = Primitive::Bool(false);
    assert_eq!(ok("not", &[t.clone()]), f.clone());
    assert_eq!(ok("and", &[t.clone(), t.clone(), f.clone()]), f.clone());
    assert_eq!(ok("and", &[t.clone(), t.clone()]), t.clone());
    assert_eq!(ok("or", &[f.clone(), f.clone(), t.clone()]), t.clone());
    assert_eq!(ok("or", &[f.clone(), f.clone()]), f.clone());
    assert_eq!(ok("zero?", &[int(0)]), t.clone());
    assert_eq!(ok("zero?", &[float(0.1)]), f);
    assert_eq!(err("not", &[int(1)]), "not: expected boolean, got integer");
    assert_eq!(
        err("and", &[Primitive::Bool(false), int(1)]),
        "and: expected boolean, got integer"
    );
    assert_eq!(err("not", &[]), "not expects exactly 1 argument, got 0");
}

#[test]
fn equality() {
    assert_eq!(ok("=", &[int(2), int(2), int(2)]), Primitive::Bool(true));
    assert_eq!(ok("=", &[s("a"), s("b")]), Primitive::Bool(false));
    assert_eq!(ok("=", &[int(1), float(1.0)]), Primitive::Bool(false));
    assert_eq!(
        ok("=", &[list(vec![int(1)]), list(vec![int(1)])]),
        Primitive::Bool(true)
    );
}

// === Strings ===

#[test]
fn string_builtins() {
    assert_eq!(ok("concat", &[s("con"), s("cat"), s("!")]), s("concat!"));
    assert_eq!(ok("substr", &[s("hello"), int(1), int(3)]), s("el"));
    assert_eq!(ok("substr", &[s("héllo"), int(1), int(2)]), s("é"));
    assert_eq!(ok("index", &[s("hello"), s("ll")]), int(2));
    assert_eq!(ok("index", &[s("hello"), s("z")]), int(-1));
    assert_eq!(ok("length", &[s("héllo")]), int(5));
    assert_eq!(ok("upcase", &[s("Fig")]), s("FIG"));
    assert_eq!(ok("downcase", &[s("Fig")]), s("fig"));
    assert_eq!(
        ok("split", &[s("a,b,,c"), s(",")]),
        list(vec![s("a"), s("b"), s(""), s("c")])
    );
    assert_eq!(ok("at", &[s("fig"), int(2)]), s("g"));
}

#[test]
fn string_bounds_are_checked() {
    assert_eq!(
        err("substr", &[s("abc"), int(-1), int(2)]),
        "substr: cannot start a substring at a negative index"
    );
    assert_eq!(
        err("substr", &[s("abc"), int(0), int(4)]),
        "substr: cannot end a substring past the end of the string"
    );
    assert_eq!(
        err("substr", &[s("abc"), int(2), int(1)]),
        "substr: start 2 is after end 1"
    );
    assert_eq!(
        err("at", &[s("abc"), int(3)]),
        "at: index 3 is out of range for \"abc\""
    );
    assert_eq!(
        err("at", &[s("abc"), int(-1)]),
        "at: index -1 is out of range for \"abc\""
    );
    assert_eq!(err("concat", &[s("a"), int(1)]), "concat: expected string, got integer");
}

// === Lists ===

#[test]
fn list_builtins() {
    let items = list(vec![int(1), int(2), int(3)]);
    assert_eq!(ok("list", &[int(1), int(2), int(3)]), items);
    assert_eq!(ok("list", &[]), list(vec![]));
    assert_eq!(ok("first", &[items.clone()]), int(1));
    assert_eq!(ok("tail", &[items.clone()]), list(vec![int(2), int(3)]));
    assert_eq!(ok("tail", &[list(vec![int(1)])]), list(vec![]));
    assert_eq!(
        ok("append", &[items.clone(), int(4), int(5)]),
        list(vec![int(1), int(2), int(3), int(4), int(5)])
    );
    assert_eq!(ok("size", &[items]), int(3));
}

#[test]
fn list_errors() {
    assert_eq!(
        err("first", &[list(vec![])]),
        "first expects a list with at least one value"
    );
    assert_eq!(
        err("tail", &[list(vec![])]),
        "tail expects a list with at least one value"
    );
    assert_eq!(err("size", &[s("abc")]), "size: expected list, got string");
    assert_eq!(
        err("list", &[int(1), Primitive::Nil]),
        "cannot wrap a nil as a Fig value"
    );
}

// === Maps ===

#[test]
fn map_builtins() {
    let m = ok("mapping", &[s("b"), int(2), s("a"), int(1)]);
    assert_eq!(m, map(&[("a", int(1)), ("b", int(2))]));
    assert_eq!(ok("mapping", &[]), Primitive::Map(BTreeMap::new()));
    assert_eq!(
        ok("assoc", &[m.clone(), s("c"), int(3), s("a"), int(10)]),
        map(&[("a", int(10)), ("b", int(2)), ("c", int(3))])
    );
    assert_eq!(ok("get", &[m.clone(), s("b")]), int(2));
    assert_eq!(ok("keys", &[m]), list(vec![s("a"), s("b")]));
}

#[test]
fn map_errors() {
    assert_eq!(
        err("mapping", &[s("a")]),
        "mapping expects keys and values in pairs"
    );
    assert_eq!(err("mapping", &[int(1), int(2)]), "mapping: expected string, got integer");
    assert_eq!(
        err("assoc", &[map(&[]), s("a")]),
        "assoc expects at least 3 arguments, got 2"
    );
    assert_eq!(
        err("get", &[map(&[("a", int(1))]), s("z")]),
        "get: key \"z\" not found in map"
    );
    assert_eq!(err("keys", &[list(vec![])]), "keys: expected map, got list");
}

// === I/O ===

#[test]
fn print_writes_through_the_handler() {
    let handler = buffer_handler();
    let env = standard_library(handler.clone());
    let result = call(&env, "print", &[s("x ="), int(5), list(vec![int(1), s("a")])]).unwrap();
    assert!(result.is_unassigned());
    assert_eq!(handler.get_output(), "x = 5 [1 a]\n");
}

#[test]
fn env_reads_process_variables() {
    assert_eq!(
        ok("env", &[s("FIG_STDLIB_TEST_SURELY_UNSET_VARIABLE")]),
        s("")
    );
    if let Ok(path) = std::env::var("PATH") {
        assert_eq!(ok("env", &[s("PATH")]), s(&path));
    }
    assert_eq!(err("env", &[int(1)]), "env: expected string, got integer");
}

#[test]
fn ignored_flags_the_value() {
    let value = call(&stdlib(), "ignored", &[int(3)]).unwrap();
    assert!(value.is_ignored());
    assert_eq!(value.as_int(), Some(3));
    assert_eq!(
        err("ignored", &[Primitive::Nil]),
        "cannot wrap a nil as a Fig value"
    );
}
