//! Fig lexer.
//!
//! Turns source text into a flat [`Token`] sequence with a finite-state
//! machine (see [`state`]). On `(` the lexer recurses into a nested pass
//! over the rest of the input; the nested pass returns at the matching `)`,
//! reporting where it stopped, and the outer pass splices its tokens in and
//! resumes after that position.
//!
//! [`lex_prefix`] runs the machine and reports how much input it consumed.
//! [`lex`] additionally insists that the whole input was consumed and that
//! no string, comment, number or name was left open.

mod lex_error;
pub mod state;

use fig_ir::Token;
use fig_stack::ensure_sufficient_stack;

pub use lex_error::{LexError, LexErrorKind};
pub use state::{CharClass, LexState};

use state::{transition, Directive};

/// Raw result of running the lexer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexed {
    pub tokens: Vec<Token>,
    /// Bytes consumed. Less than the input length means the top-level pass
    /// returned early at an unmatched `)`.
    pub consumed: usize,
    /// State the machine was in when input ran out.
    pub final_state: LexState,
}

/// How a single pass ended.
enum PassEnd {
    /// At the `)` found at this byte offset.
    Closed(usize),
    /// At end of input, in this state.
    Exhausted(LexState),
}

struct Pass {
    tokens: Vec<Token>,
    end: PassEnd,
}

struct Lexer<'src> {
    source: &'src str,
}

impl Lexer<'_> {
    /// Lex from byte `start` until the enclosing S-expression closes or the
    /// input runs out.
    fn pass(&self, start: usize) -> Result<Pass, LexError> {
        ensure_sufficient_stack(|| {
            let mut tokens = Vec::new();
            let mut state = LexState::Open;
            let mut pos = start;

            while let Some(c) = self.source[pos..].chars().next() {
                let Some(step) = transition(state, CharClass::of(c)) else {
                    return Err(lex_error::no_transition(state, c, pos));
                };
                step.emit.push_into(c, &mut tokens);

                match step.directive {
                    Directive::Continue => {
                        state = step.next;
                        pos += c.len_utf8();
                    }
                    Directive::Recurse => {
                        let nested = self.pass(pos + c.len_utf8())?;
                        tokens.extend(nested.tokens);
                        match nested.end {
                            PassEnd::Closed(close) => {
                                state = step.next;
                                pos = close + 1;
                            }
                            PassEnd::Exhausted(inner) => {
                                return Ok(Pass {
                                    tokens,
                                    end: PassEnd::Exhausted(inner),
                                });
                            }
                        }
                    }
                    Directive::Return => {
                        return Ok(Pass {
                            tokens,
                            end: PassEnd::Closed(pos),
                        });
                    }
                }
            }

            Ok(Pass {
                tokens,
                end: PassEnd::Exhausted(state),
            })
        })
    }
}

/// Run the lexer over `source`, reporting how far it got.
///
/// Fails only when some character has no transition.
pub fn lex_prefix(source: &str) -> Result<Lexed, LexError> {
    let pass = Lexer { source }.pass(0)?;
    let (consumed, final_state) = match pass.end {
        PassEnd::Closed(close) => (close, LexState::Open),
        PassEnd::Exhausted(state) => (source.len(), state),
    };
    Ok(Lexed {
        tokens: pass.tokens,
        consumed,
        final_state,
    })
}

/// Lex a whole program.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let lexed = lex_prefix(source)?;
    if lexed.consumed < source.len() {
        return Err(lex_error::truncated(lexed.consumed, source.len()));
    }
    if lexed.final_state != LexState::Open {
        return Err(lex_error::unterminated(lexed.final_state, source.len()));
    }
    Ok(lexed.tokens)
}

#[cfg(test)]
mod tests;
