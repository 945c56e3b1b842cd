//! Token cursor for navigating the token stream.

use fig_ir::Token;
use tracing::trace;

/// Position in a flat token sequence.
pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// The current token, or `None` past the end.
    #[inline]
    pub(crate) fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    /// Consume and return the current token.
    pub(crate) fn advance(&mut self) -> Option<Token> {
        let token = self.peek()?;
        trace!(pos = self.pos, token = %token, "advance");
        self.pos += 1;
        Some(token)
    }
}
