//! Recursive-descent parser for a single scalar JSON document.
//!
//! A parse call runs in one pass over an immutable input:
//!
//! 1. reset the output value to `null`,
//! 2. skip whitespace,
//! 3. dispatch on the lookahead byte to the literal matcher or the number
//!    validator and converter,
//! 4. skip whitespace,
//! 5. require end of input.
//!
//! Every error path leaves the output `null`; the caller never observes a
//! partially written value.

mod numbers;
mod scanner;


use core::str::FromStr;

use tracing::{debug, trace};

use crate::{
    error::{ParseError, ParseErrorKind},
    options::ParserOptions,
    value::Value,
};
use scanner::{Position, Scanner};

#[cfg(test)]
pub(crate) use numbers::validate as validate_number;

/// A configured parser.
///
/// `Parser` holds no per-call state, so one instance can be shared and used
/// from several threads at once. Each call needs its own output [`Value`].
///
/// # Examples
///
/// ```rust
/// use leptjson::{Parser, ParserOptions, ParseErrorKind, Value};
///
/// let parser = Parser::new(ParserOptions::default());
/// let mut v = Value::default();
/// parser.parse_into(&mut v, "false").unwrap();
/// assert_eq!(v, Value::Boolean(false));
///
/// let err = parser.parse_into(&mut v, "1 2").unwrap_err();
/// assert_eq!(err.kind(), ParseErrorKind::RootNotSingular);
/// assert!(v.is_null());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    /// Creates a parser with the given options.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// The options this parser was created with.
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parses `json` into `value`.
    ///
    /// On success `value` holds the parsed scalar and the whole input,
    /// ignoring surrounding whitespace, was consumed.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] describing the first problem found. `value`
    /// is [`Value::Null`] whenever an error is returned.
    pub fn parse_into(&self, value: &mut Value, json: &str) -> Result<(), ParseError> {
        *value = Value::Null;
        let mut scanner = Scanner::new(json);
        let result = self.parse_root(&mut scanner, value);
        if let Err(err) = &result {
            debug_assert!(value.is_null());
            debug!(
                kind = ?err.kind,
                line = err.line,
                column = err.column,
                "parse failed"
            );
        }
        result
    }

    fn parse_root(&self, s: &mut Scanner<'_>, value: &mut Value) -> Result<(), ParseError> {
        s.skip_whitespace(self.options.allow_unicode_whitespace);
        self.parse_value(s, value)?;
        s.skip_whitespace(self.options.allow_unicode_whitespace);
        if !s.is_eof() {
            *value = Value::Null;
            return Err(self.error(s.position(), ParseErrorKind::RootNotSingular));
        }
        Ok(())
    }

    fn parse_value(&self, s: &mut Scanner<'_>, value: &mut Value) -> Result<(), ParseError> {
        match s.peek_byte() {
            None => Err(self.error(s.position(), ParseErrorKind::ExpectValue)),
            Some(b't') => self.parse_literal(s, value, "true", Value::Boolean(true)),
            Some(b'f') => self.parse_literal(s, value, "false", Value::Boolean(false)),
            Some(b'n') => self.parse_literal(s, value, "null", Value::Null),
            Some(_) => self.parse_number(s, value),
        }
    }

    /// Matches `literal` at the cursor. The first byte has already been
    /// confirmed by dispatch.
    fn parse_literal(
        &self,
        s: &mut Scanner<'_>,
        value: &mut Value,
        literal: &'static str,
        parsed: Value,
    ) -> Result<(), ParseError> {
        let start = s.position();
        let bytes = literal.as_bytes();
        s.expect(bytes[0]);
        let tail = &bytes[1..];
        if !s.rest().starts_with(tail) {
            return Err(self.error(start, ParseErrorKind::InvalidValue));
        }
        s.advance_ascii(tail.len());
        trace!(literal, "matched literal");
        *value = parsed;
        Ok(())
    }

    fn parse_number(&self, s: &mut Scanner<'_>, value: &mut Value) -> Result<(), ParseError> {
        let start = s.position();
        let Some(len) = numbers::validate(s.rest()) else {
            return Err(self.error(start, ParseErrorKind::InvalidValue));
        };
        let span = s.slice(len);
        let n = numbers::convert(span).map_err(|kind| self.error(start, kind))?;
        trace!(number = span, "converted number");
        s.advance_ascii(len);
        *value = Value::Number(n);
        Ok(())
    }

    #[cfg_attr(not(any(test, feature = "fuzzing")), allow(clippy::unused_self))]
    fn error(&self, at: Position, kind: ParseErrorKind) -> ParseError {
        let err = ParseError {
            kind,
            line: at.line,
            column: at.column,
        };
        #[cfg(any(test, feature = "fuzzing"))]
        assert!(!self.options.panic_on_error, "{err}");
        err
    }
}

/// Parses `json` into `value` with default options.
///
/// # Errors
///
/// See [`Parser::parse_into`].
///
/// # Examples
///
/// ```rust
/// use leptjson::{Kind, ParseErrorKind, Value, get_type, parse};
///
/// let mut v = Value::default();
/// parse(&mut v, "true").unwrap();
/// assert_eq!(get_type(&v), Kind::True);
///
/// assert_eq!(parse(&mut v, "").unwrap_err().kind(), ParseErrorKind::ExpectValue);
/// assert_eq!(parse(&mut v, "nul").unwrap_err().kind(), ParseErrorKind::InvalidValue);
/// ```
pub fn parse(value: &mut Value, json: &str) -> Result<(), ParseError> {
    Parser::default().parse_into(value, json)
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut value = Value::Null;
        parse(&mut value, s)?;
        Ok(value)
    }
}
