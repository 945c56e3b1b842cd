//! Parse errors.

use std::fmt;

use fig_ir::Token;

/// A fatal parse error. Parsing stops at the first one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Index into the token sequence.
    pub position: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A construct parser was entered on the wrong token. Indicates a
    /// dispatch bug, not bad input.
    WrongStartToken { expected: Token, found: Token },
    /// A structural marker inside a run of content characters.
    MalformedToken { expected_end: Token, found: Token },
    /// The tokens ran out before the closing marker.
    Unclosed { expected_end: Token },
    /// `(` followed by something other than a name.
    FormMustStartWithName { found: Option<Token> },
    /// No construct starts with this token.
    NoParserFor { found: Token },
    /// A digit run that is not a valid integer or float.
    InvalidNumber { text: String },
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, position: usize) -> Self {
        ParseError { kind, position }
    }
}

#[cold]
pub fn wrong_start_token(expected: Token, found: Token, position: usize) -> ParseError {
    ParseError::new(ParseErrorKind::WrongStartToken { expected, found }, position)
}

#[cold]
pub fn malformed_token(expected_end: Token, found: Token, position: usize) -> ParseError {
    ParseError::new(
        ParseErrorKind::MalformedToken {
            expected_end,
            found,
        },
        position,
    )
}

#[cold]
pub fn unclosed(expected_end: Token, position: usize) -> ParseError {
    ParseError::new(ParseErrorKind::Unclosed { expected_end }, position)
}

#[cold]
pub fn form_must_start_with_name(found: Option<Token>, position: usize) -> ParseError {
    ParseError::new(ParseErrorKind::FormMustStartWithName { found }, position)
}

#[cold]
pub fn no_parser_for(found: Token, position: usize) -> ParseError {
    ParseError::new(ParseErrorKind::NoParserFor { found }, position)
}

#[cold]
pub fn invalid_number(text: String, position: usize) -> ParseError {
    ParseError::new(ParseErrorKind::InvalidNumber { text }, position)
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongStartToken { expected, found } => {
                write!(f, "expected {expected}, got {found}")
            }
            Self::MalformedToken {
                expected_end,
                found,
            } => write!(f, "expected a character or {expected_end}, found {found}"),
            Self::Unclosed { expected_end } if *expected_end == Token::EndSexp => f.write_str(
                "unclosed S-expression; check that every '(' has a matching ')'",
            ),
            Self::Unclosed { expected_end } => {
                write!(f, "input ended before {expected_end}")
            }
            Self::FormMustStartWithName { found: Some(found) } => {
                write!(f, "form must start with a name, found {found}")
            }
            Self::FormMustStartWithName { found: None } => {
                f.write_str("form must start with a name, found end of input")
            }
            Self::NoParserFor { found } => write!(f, "no parser available for token {found}"),
            Self::InvalidNumber { text } => write!(f, "invalid number literal `{text}`"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at token {})", self.kind, self.position)
    }
}

impl std::error::Error for ParseError {}
