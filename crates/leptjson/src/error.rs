use thiserror::Error;

/// A parse failure and the position of the character that caused it.
///
/// Positions are 1-based. `column` counts characters, not bytes. `line` advances
/// on `\n`, and with Unicode whitespace enabled also on U+0085, U+2028 and
/// U+2029.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at {line}:{column}")]
pub struct ParseError {
    pub(crate) kind: ParseErrorKind,
    pub(crate) line: usize,
    pub(crate) column: usize,
}

impl ParseError {
    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Line of the offending character.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Column of the offending character.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }
}

/// The category of a [`ParseError`].
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The input is empty or contains only whitespace.
    #[error("expected a value")]
    ExpectValue,
    /// The lookahead starts neither a literal nor a number, or the literal or
    /// number is malformed.
    #[error("invalid value")]
    InvalidValue,
    /// A value was parsed but non-whitespace content follows it.
    #[error("unexpected content after the root value")]
    RootNotSingular,
    /// A well-formed number whose magnitude does not fit in an `f64`.
    #[error("number too big")]
    NumberTooBig,
}
