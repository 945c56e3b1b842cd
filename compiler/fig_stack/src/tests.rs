use super::*;

fn nest(depth: u32) -> u32 {
    ensure_sufficient_stack(|| if depth == 0 { 0 } else { nest(depth - 1) + 1 })
}

#[test]
fn passes_through_the_closure_result() {
    assert_eq!(ensure_sufficient_stack(|| "form"), "form");
}

#[test]
fn passes_through_errors() {
    let result: Result<u8, String> = ensure_sufficient_stack(|| Err("unbound".to_string()));
    assert_eq!(result, Err("unbound".to_string()));
}

#[test]
fn survives_nesting_deeper_than_the_default_stack() {
    assert_eq!(nest(200_000), 200_000);
}
