use pretty_assertions::assert_eq;

use fig_ir::{Function, Value};
use fig_stdlib::{silent_handler, standard_library};

use super::*;

#[test]
fn stdlib_alone_exports_nothing() {
    assert_eq!(export(&standard_library(silent_handler())), BTreeMap::new());
}

#[test]
fn export_filters_bindings() {
    let mut env = standard_library(silent_handler());
    env.define("port", Value::int(8080));
    env.define("host", Value::string("localhost"));
    env.define("secret", Value::string("hunter2").into_ignored());
    env.define("pending", Value::name("port"));
    env.define("nothing", Value::unassigned());
    env.define(
        "helper",
        Value::function(Function::user(
            "helper",
            Vec::new(),
            Value::int(1).into(),
            Environment::new(),
        )),
    );

    let exported = export(&env);
    assert_eq!(
        exported,
        BTreeMap::from([
            ("host".to_string(), Primitive::Str("localhost".to_string())),
            ("port".to_string(), Primitive::Int(8080)),
        ])
    );
}

#[test]
fn shadowed_constants_are_still_dropped() {
    let mut env = Environment::new();
    env.define("pi", Value::int(3));
    env.define("tau", Value::float(2.5));
    assert_eq!(
        export(&env),
        BTreeMap::from([("tau".to_string(), Primitive::Float(2.5))])
    );
}

#[test]
fn nested_collections_export_recursively() {
    let mut env = Environment::new();
    env.define(
        "servers",
        Value::list(vec![Value::map(BTreeMap::from([(
            "name".to_string(),
            Value::string("a"),
        )]))]),
    );
    assert_eq!(
        export(&env)["servers"],
        Primitive::List(vec![Primitive::Map(BTreeMap::from([(
            "name".to_string(),
            Primitive::Str("a".to_string())
        )]))])
    );
}
