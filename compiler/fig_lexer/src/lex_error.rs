//! Lexer errors.

use std::fmt;

use crate::LexState;

/// A fatal lexical error. The lexer never recovers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexError {
    pub kind: LexErrorKind,
    /// Byte offset into the source.
    pub offset: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LexErrorKind {
    /// No transition exists for this state and character.
    NoTransition { state: LexState, found: char },
    /// Input ended while a string, comment, number or name was still open.
    Unterminated { state: LexState },
    /// Lexing stopped before the end of the input, at a `)` with no
    /// matching `(`.
    Truncated { consumed: usize, len: usize },
}

impl LexError {
    pub fn new(kind: LexErrorKind, offset: usize) -> Self {
        LexError { kind, offset }
    }
}

#[cold]
pub fn no_transition(state: LexState, found: char, offset: usize) -> LexError {
    LexError::new(LexErrorKind::NoTransition { state, found }, offset)
}

#[cold]
pub fn unterminated(state: LexState, offset: usize) -> LexError {
    LexError::new(LexErrorKind::Unterminated { state }, offset)
}

#[cold]
pub fn truncated(consumed: usize, len: usize) -> LexError {
    LexError::new(LexErrorKind::Truncated { consumed, len }, consumed)
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTransition { state, found } => {
                write!(f, "no transition from state {state} on input {found:?}")
            }
            Self::Unterminated { state } => {
                write!(f, "input ended inside {}", state.describe())
            }
            Self::Truncated { consumed, len } => write!(
                f,
                "could not lex to the end of the program (stopped at byte {consumed} of {len}); \
                 check for an unmatched ')'"
            ),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at byte {})", self.kind, self.offset)
    }
}

impl std::error::Error for LexError {}
