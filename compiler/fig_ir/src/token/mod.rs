//! Lexical tokens.
//!
//! The Fig lexer does not build literal text itself. It emits a start
//! marker, one [`Token::Char`] per literal character, and an end marker,
//! leaving assembly of names, numbers and strings to the parser.

use std::fmt;

/// A structural marker or a single literal character.
///
/// Tokens carry no source position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    StartSexp,
    EndSexp,
    StartString,
    EndString,
    StartComment,
    EndComment,
    StartNumber,
    EndNumber,
    StartName,
    EndName,
    /// Literal content of a string, number or name.
    Char(char),
}

impl Token {
    /// Returns `true` for every marker, `false` for literal characters.
    #[inline]
    pub fn is_structural(self) -> bool {
        !matches!(self, Token::Char(_))
    }

    /// The end marker matching a start marker.
    pub fn closing(self) -> Option<Token> {
        match self {
            Token::StartSexp => Some(Token::EndSexp),
            Token::StartString => Some(Token::EndString),
            Token::StartComment => Some(Token::EndComment),
            Token::StartNumber => Some(Token::EndNumber),
            Token::StartName => Some(Token::EndName),
            _ => None,
        }
    }

    /// Marker text as shown in diagnostics, e.g. `[START_SEXP]`.
    pub fn marker(self) -> &'static str {
        match self {
            Token::StartSexp => "[START_SEXP]",
            Token::EndSexp => "[END_SEXP]",
            Token::StartString => "[START_STRING]",
            Token::EndString => "[END_STRING]",
            Token::StartComment => "[START_COMMENT]",
            Token::EndComment => "[END_COMMENT]",
            Token::StartNumber => "[START_NUMBER]",
            Token::EndNumber => "[END_NUMBER]",
            Token::StartName => "[START_NAME]",
            Token::EndName => "[END_NAME]",
            Token::Char(_) => "[CHAR]",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Char(c) => write!(f, "{c:?}"),
            other => f.write_str(other.marker()),
        }
    }
}
