//! States, character classes and the transition table of the lexer.
//!
//! A transition is looked up by `(state, class of next char)` and yields the
//! next state, what to emit, and a [`Directive`] telling the driver whether
//! to recurse into a nested S-expression or return from one.

use std::fmt;

use fig_ir::Token;

/// Lexer state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexState {
    /// Between tokens.
    Open,
    /// Inside `'...'`. Double quotes are literal here.
    StringSingle,
    /// Inside `"..."`. Single quotes are literal here.
    StringDouble,
    /// After `;`, up to the end of the line.
    Comment,
    Number,
    Name,
    /// Terminal. No transition leaves it.
    Error,
}

impl LexState {
    /// What the state is lexing, for diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            LexState::Open => "whitespace between forms",
            LexState::StringSingle => "a single-quoted string",
            LexState::StringDouble => "a double-quoted string",
            LexState::Comment => "a comment",
            LexState::Number => "a number",
            LexState::Name => "a name",
            LexState::Error => "an error",
        }
    }
}

impl fmt::Display for LexState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LexState::Open => "OPEN",
            LexState::StringSingle => "STRING-SINGLE",
            LexState::StringDouble => "STRING-DOUBLE",
            LexState::Comment => "COMMENT",
            LexState::Number => "NUMBER",
            LexState::Name => "NAME",
            LexState::Error => "ERROR",
        };
        f.write_str(name)
    }
}

/// Symbols allowed in identifiers besides ASCII letters and digits.
pub const NAME_SYMBOLS: &str = "!@#$%^&*-_+=:<,>.?/";

/// Input character classes the table distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `\n`. Ends comments; otherwise plain whitespace.
    Newline,
    Whitespace,
    OpenParen,
    CloseParen,
    SingleQuote,
    DoubleQuote,
    Semicolon,
    Digit,
    /// `.`: continues numbers and names.
    Dot,
    /// ASCII letter or a member of [`NAME_SYMBOLS`] other than `.`.
    NameSymbol,
    Other,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        match c {
            '\n' => CharClass::Newline,
            '(' => CharClass::OpenParen,
            ')' => CharClass::CloseParen,
            '\'' => CharClass::SingleQuote,
            '"' => CharClass::DoubleQuote,
            ';' => CharClass::Semicolon,
            '.' => CharClass::Dot,
            '0'..='9' => CharClass::Digit,
            c if c.is_ascii_alphabetic() || NAME_SYMBOLS.contains(c) => CharClass::NameSymbol,
            c if c.is_whitespace() => CharClass::Whitespace,
            _ => CharClass::Other,
        }
    }

    fn continues_name(self) -> bool {
        matches!(self, CharClass::Digit | CharClass::Dot | CharClass::NameSymbol)
    }
}

/// What the driver does with the pass after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Directive {
    Continue,
    /// Lex a nested S-expression starting after this character and splice
    /// its tokens in.
    Recurse,
    /// The enclosing S-expression ends at this character.
    Return,
}

/// Tokens a transition produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emit {
    Nothing,
    Token(Token),
    /// The input character itself, as content.
    Char,
    /// A start marker followed by the input character.
    TokenAndChar(Token),
    /// An end marker followed by [`Token::EndSexp`].
    TokenAndEndSexp(Token),
}

impl Emit {
    pub fn push_into(self, c: char, tokens: &mut Vec<Token>) {
        match self {
            Emit::Nothing => {}
            Emit::Token(token) => tokens.push(token),
            Emit::Char => tokens.push(Token::Char(c)),
            Emit::TokenAndChar(token) => {
                tokens.push(token);
                tokens.push(Token::Char(c));
            }
            Emit::TokenAndEndSexp(token) => {
                tokens.push(token);
                tokens.push(Token::EndSexp);
            }
        }
    }
}

/// One row of the transition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub next: LexState,
    pub emit: Emit,
    pub directive: Directive,
}

const fn to(next: LexState, emit: Emit) -> Transition {
    Transition {
        next,
        emit,
        directive: Directive::Continue,
    }
}

const fn with(next: LexState, emit: Emit, directive: Directive) -> Transition {
    Transition {
        next,
        emit,
        directive,
    }
}

/// Look up the transition for `state` on input of class `class`.
///
/// `None` means the input is a lexical error in this state.
pub fn transition(state: LexState, class: CharClass) -> Option<Transition> {
    use CharClass as C;
    use LexState as S;

    let found = match (state, class) {
        (S::Open, C::Whitespace | C::Newline) => to(S::Open, Emit::Nothing),
        (S::Open, C::OpenParen) => with(S::Open, Emit::Token(Token::StartSexp), Directive::Recurse),
        (S::Open, C::CloseParen) => with(S::Open, Emit::Token(Token::EndSexp), Directive::Return),
        (S::Open, C::SingleQuote) => to(S::StringSingle, Emit::Token(Token::StartString)),
        (S::Open, C::DoubleQuote) => to(S::StringDouble, Emit::Token(Token::StartString)),
        (S::Open, C::Semicolon) => to(S::Comment, Emit::Token(Token::StartComment)),
        (S::Open, C::Digit) => to(S::Number, Emit::TokenAndChar(Token::StartNumber)),
        (S::Open, C::Dot | C::NameSymbol) => to(S::Name, Emit::TokenAndChar(Token::StartName)),

        (S::StringSingle, C::SingleQuote) => to(S::Open, Emit::Token(Token::EndString)),
        (S::StringSingle, _) => to(S::StringSingle, Emit::Char),

        (S::StringDouble, C::DoubleQuote) => to(S::Open, Emit::Token(Token::EndString)),
        (S::StringDouble, _) => to(S::StringDouble, Emit::Char),

        (S::Comment, C::Newline) => to(S::Open, Emit::Token(Token::EndComment)),
        (S::Comment, _) => to(S::Comment, Emit::Nothing),

        (S::Number, C::Whitespace | C::Newline) => to(S::Open, Emit::Token(Token::EndNumber)),
        (S::Number, C::CloseParen) => with(
            S::Open,
            Emit::TokenAndEndSexp(Token::EndNumber),
            Directive::Return,
        ),
        (S::Number, C::Digit | C::Dot) => to(S::Number, Emit::Char),

        (S::Name, C::Whitespace | C::Newline) => to(S::Open, Emit::Token(Token::EndName)),
        (S::Name, C::CloseParen) => with(
            S::Open,
            Emit::TokenAndEndSexp(Token::EndName),
            Directive::Return,
        ),
        (S::Name, class) if class.continues_name() => to(S::Name, Emit::Char),

        _ => return None,
    };
    Some(found)
}
