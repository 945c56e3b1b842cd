use super::*;

#[test]
fn name_round_trips_identifier() {
    let name = Name::new("zero?");
    assert_eq!(name.as_str(), "zero?");
    assert_eq!(name.len(), 5);
    assert_eq!(name.into_string(), "zero?");
}

#[test]
fn name_display_is_bare_identifier() {
    assert_eq!(Name::from(">=").to_string(), ">=");
}

#[test]
fn name_debug_marks_it_as_a_reference() {
    assert_eq!(format!("{:?}", Name::from("x")), "Name(\"x\")");
}

#[test]
fn names_compare_by_identifier() {
    assert_eq!(Name::from("a"), Name::from(String::from("a")));
    assert_ne!(Name::from("a"), Name::from("b"));
    assert!(Name::default().is_empty());
}
