#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use fig_ir::Token::{
    EndComment, EndName, EndNumber, EndSexp, EndString, StartComment, StartName, StartNumber,
    StartSexp, StartString,
};

fn chars(s: &str) -> Vec<Token> {
    s.chars().map(Token::Char).collect()
}

// === Token sequences ===

#[test]
fn lex_parenthesized_number() {
    assert_eq!(
        lex("(3)").unwrap(),
        vec![StartSexp, StartNumber, Token::Char('3'), EndNumber, EndSexp]
    );
}

#[test]
fn lex_single_quoted_string_containing_double_quote() {
    assert_eq!(
        lex("'\"'").unwrap(),
        vec![StartString, Token::Char('"'), EndString]
    );
}

#[test]
fn lex_double_quoted_string_containing_single_quote() {
    let mut expected = vec![StartString];
    expected.extend(chars("it's"));
    expected.push(EndString);
    assert_eq!(lex("\"it's\"").unwrap(), expected);
}

#[test]
fn lex_define_form() {
    let mut expected = vec![StartSexp, StartName];
    expected.extend(chars("define"));
    expected.extend([EndName, StartSexp, StartName, Token::Char('x'), EndName]);
    expected.extend([StartNumber, Token::Char('5'), EndNumber, EndSexp, EndSexp]);
    assert_eq!(lex("(define (x 5))").unwrap(), expected);
}

#[test]
fn lex_nested_forms_after_close() {
    // The outer pass must resume after the nested `)`.
    let tokens = lex("(a (b) c)").unwrap();
    let mut expected = vec![StartSexp, StartName, Token::Char('a'), EndName];
    expected.extend([StartSexp, StartName, Token::Char('b'), EndName, EndSexp]);
    expected.extend([StartName, Token::Char('c'), EndName, EndSexp]);
    assert_eq!(tokens, expected);
}

#[test]
fn lex_close_paren_after_whitespace() {
    let tokens = lex("(f 1 )").unwrap();
    assert_eq!(tokens.last(), Some(&EndSexp));
    assert_eq!(tokens.iter().filter(|t| **t == EndSexp).count(), 1);
}

#[test]
fn lex_comment_emits_only_markers() {
    assert_eq!(
        lex("; a (comment)\n").unwrap(),
        vec![StartComment, EndComment]
    );
}

#[test]
fn lex_float_digits_and_dot() {
    assert_eq!(
        lex("3.14 ").unwrap(),
        vec![
            StartNumber,
            Token::Char('3'),
            Token::Char('.'),
            Token::Char('1'),
            Token::Char('4'),
            EndNumber
        ]
    );
}

#[test]
fn lex_empty_and_blank_input() {
    assert_eq!(lex("").unwrap(), Vec::<Token>::new());
    assert_eq!(lex(" \n\t ").unwrap(), Vec::<Token>::new());
}

#[test]
fn lex_multibyte_string_content() {
    assert_eq!(
        lex("'héllo'").unwrap().len(),
        "héllo".chars().count() + 2
    );
}

// === Errors ===

#[test]
fn no_transition_reports_state_and_char() {
    let err = lex("(f 3x)").unwrap_err();
    assert_eq!(
        err.kind,
        LexErrorKind::NoTransition {
            state: LexState::Number,
            found: 'x'
        }
    );
    assert_eq!(err.offset, 4);
}

#[test]
fn unknown_character_in_open_state() {
    let err = lex("[1 2]").unwrap_err();
    assert_eq!(
        err.kind,
        LexErrorKind::NoTransition {
            state: LexState::Open,
            found: '['
        }
    );
}

#[test]
fn dangling_string_is_unterminated() {
    let err = lex("(print 'oops)").unwrap_err();
    assert_eq!(
        err.kind,
        LexErrorKind::Unterminated {
            state: LexState::StringSingle
        }
    );
}

#[test]
fn dangling_name_number_and_comment_are_unterminated() {
    for (source, state) in [
        ("abc", LexState::Name),
        ("12", LexState::Number),
        ("; no newline", LexState::Comment),
    ] {
        assert_eq!(
            lex(source).unwrap_err().kind,
            LexErrorKind::Unterminated { state },
            "source {source:?}"
        );
    }
}

#[test]
fn unmatched_close_paren_truncates() {
    let lexed = lex_prefix("(a)) (b)").unwrap();
    assert_eq!(lexed.consumed, 3);
    assert_eq!(
        lex("(a)) (b)").unwrap_err().kind,
        LexErrorKind::Truncated {
            consumed: 3,
            len: 8
        }
    );
}

#[test]
fn unclosed_paren_consumes_everything() {
    // Left for the parser to reject.
    let lexed = lex_prefix("(a (b)").unwrap();
    assert_eq!(lexed.consumed, 6);
    assert_eq!(lexed.final_state, LexState::Open);
    let opens = lexed.tokens.iter().filter(|t| **t == StartSexp).count();
    let closes = lexed.tokens.iter().filter(|t| **t == EndSexp).count();
    assert_eq!((opens, closes), (2, 1));
}

#[test]
fn error_display_names_the_state() {
    let err = lex("(x 'open").unwrap_err();
    assert_eq!(
        err.to_string(),
        "input ended inside a single-quoted string (at byte 8)"
    );
}

// === Properties ===

fn atom() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,6}",
        "[0-9]{1,4}\\.[0-9]{1,4}",
        "[a-z][a-z0-9?!-]{0,6}",
        "'[a-z \"]{0,8}'",
        "\"[a-z ']{0,8}\"",
    ]
}

fn program() -> impl Strategy<Value = String> {
    let leaf = atom();
    leaf.prop_recursive(4, 32, 4, |inner| {
        ("[a-z]{1,5}", prop::collection::vec(inner, 0..4)).prop_map(|(head, children)| {
            let mut form = format!("({head}");
            for child in children {
                form.push(' ');
                form.push_str(&child);
            }
            form.push(')');
            form
        })
    })
}

proptest! {
    #[test]
    fn well_formed_programs_balance_markers(source in program()) {
        let source = format!("{source}\n");
        let lexed = lex_prefix(&source).unwrap();
        prop_assert_eq!(lexed.consumed, source.len());
        let opens = lexed.tokens.iter().filter(|t| **t == StartSexp).count();
        let closes = lexed.tokens.iter().filter(|t| **t == EndSexp).count();
        prop_assert_eq!(opens, closes);
        prop_assert!(lex(&source).is_ok());
    }

    #[test]
    fn digit_runs_are_single_number_tokens(digits in "[0-9]{1,12}") {
        let tokens = lex(&format!("{digits} ")).unwrap();
        prop_assert_eq!(tokens.first(), Some(&StartNumber));
        prop_assert_eq!(tokens.last(), Some(&EndNumber));
        prop_assert_eq!(tokens.len(), digits.len() + 2);
    }

    #[test]
    fn dotted_runs_are_single_number_tokens(text in "[0-9]{1,9}\\.[0-9]{1,9}") {
        let tokens = lex(&format!("{text} ")).unwrap();
        prop_assert_eq!(tokens.first(), Some(&StartNumber));
        prop_assert_eq!(tokens.last(), Some(&EndNumber));
        prop_assert_eq!(tokens.len(), text.len() + 2);
        prop_assert!(tokens.contains(&Token::Char('.')));
    }
}
