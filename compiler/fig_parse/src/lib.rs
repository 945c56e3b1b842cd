//! Fig parser.
//!
//! Recursive descent over the flat token sequence produced by `fig_lexer`.
//! Leaf parsers assemble names, numbers and strings from a start marker, a
//! run of [`Token::Char`]s and the matching end marker. Comments parse to
//! nothing and are dropped. The first error aborts the whole parse.

mod cursor;
mod parse_error;

use fig_ir::{Form, Name, SExpression, Token, Value};
use fig_stack::ensure_sufficient_stack;
use tracing::trace;

use cursor::Cursor;

pub use parse_error::{ParseError, ParseErrorKind};

/// Parse a whole token sequence into top-level forms.
pub fn parse(tokens: &[Token]) -> Result<Vec<Form>, ParseError> {
    Parser::new(tokens).parse_program()
}

/// Parser state: a cursor over the token sequence.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse every remaining top-level form.
    pub fn parse_program(&mut self) -> Result<Vec<Form>, ParseError> {
        let mut forms = Vec::new();
        while !self.cursor.is_at_end() {
            if let Some(form) = self.parse_form()? {
                forms.push(form);
            }
        }
        trace!(count = forms.len(), "parsed program");
        Ok(forms)
    }

    /// Dispatch on the current start marker. Comments yield `None`.
    fn parse_form(&mut self) -> Result<Option<Form>, ParseError> {
        let position = self.cursor.position();
        let Some(token) = self.cursor.peek() else {
            return Err(parse_error::unclosed(Token::EndSexp, position));
        };
        let form = match token {
            Token::StartSexp => Form::SExpr(self.parse_sexpr()?),
            Token::StartString => Form::Value(self.parse_string()?),
            Token::StartNumber => Form::Value(self.parse_number()?),
            Token::StartName => Form::Value(self.parse_name()?),
            Token::StartComment => {
                self.parse_comment()?;
                return Ok(None);
            }
            other => return Err(parse_error::no_parser_for(other, position)),
        };
        Ok(Some(form))
    }

    /// `[START_SEXP] name child... [END_SEXP]`
    pub fn parse_sexpr(&mut self) -> Result<SExpression, ParseError> {
        ensure_sufficient_stack(|| {
            self.expect_start(Token::StartSexp)?;

            let position = self.cursor.position();
            let form_name = match self.cursor.peek() {
                Some(Token::StartName) => self.parse_identifier()?,
                found => return Err(parse_error::form_must_start_with_name(found, position)),
            };
            trace!(form = %form_name, "parse_sexpr");

            let mut children = Vec::new();
            loop {
                match self.cursor.peek() {
                    Some(Token::EndSexp) => {
                        self.cursor.advance();
                        break;
                    }
                    None => {
                        return Err(parse_error::unclosed(
                            Token::EndSexp,
                            self.cursor.position(),
                        ))
                    }
                    Some(_) => {
                        if let Some(child) = self.parse_form()? {
                            children.push(child);
                        }
                    }
                }
            }
            Ok(SExpression {
                form_name,
                children,
            })
        })
    }

    pub fn parse_name(&mut self) -> Result<Value, ParseError> {
        self.parse_identifier().map(Value::name)
    }

    /// Integer unless the digit run contains a `.`.
    pub fn parse_number(&mut self) -> Result<Value, ParseError> {
        let position = self.cursor.position();
        let text = self.parse_content(Token::StartNumber)?;
        let parsed = if text.contains('.') {
            text.parse::<f64>().ok().map(Value::float)
        } else {
            text.parse::<i64>().ok().map(Value::int)
        };
        parsed.ok_or_else(|| parse_error::invalid_number(text, position))
    }

    pub fn parse_string(&mut self) -> Result<Value, ParseError> {
        self.parse_content(Token::StartString).map(Value::string)
    }

    /// Skip a comment, yielding the unassigned value it stands for.
    pub fn parse_comment(&mut self) -> Result<Value, ParseError> {
        self.expect_start(Token::StartComment)?;
        loop {
            match self.cursor.advance() {
                Some(Token::EndComment) => return Ok(Value::unassigned()),
                Some(_) => {}
                None => {
                    return Err(parse_error::unclosed(
                        Token::EndComment,
                        self.cursor.position(),
                    ))
                }
            }
        }
    }

    fn parse_identifier(&mut self) -> Result<Name, ParseError> {
        self.parse_content(Token::StartName).map(Name::from)
    }

    /// Consume `start`, a run of characters and the matching end marker,
    /// returning the characters.
    fn parse_content(&mut self, start: Token) -> Result<String, ParseError> {
        self.expect_start(start)?;
        let Some(end) = start.closing() else {
            return Err(parse_error::no_parser_for(start, self.cursor.position()));
        };

        let mut text = String::new();
        loop {
            let position = self.cursor.position();
            match self.cursor.advance() {
                Some(Token::Char(c)) => text.push(c),
                Some(token) if token == end => return Ok(text),
                Some(token) => return Err(parse_error::malformed_token(end, token, position)),
                None => return Err(parse_error::unclosed(end, position)),
            }
        }
    }

    fn expect_start(&mut self, expected: Token) -> Result<(), ParseError> {
        let position = self.cursor.position();
        match self.cursor.peek() {
            Some(found) if found == expected => {
                self.cursor.advance();
                Ok(())
            }
            Some(found) => Err(parse_error::wrong_start_token(expected, found, position)),
            None => Err(parse_error::unclosed(
                expected.closing().unwrap_or(expected),
                position,
            )),
        }
    }
}
