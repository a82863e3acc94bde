//! Scalar JSON values.
//!
//! This module defines [`Value`], the result of a successful parse, and the
//! [`Kind`] tag callers use to inspect it without matching on the payload.
use core::fmt;

/// The kind of a parsed [`Value`].
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `null`
    Null,
    /// `false`
    False,
    /// `true`
    True,
    /// A decimal number.
    Number,
}

/// A scalar JSON value.
///
/// A `Value` starts out as [`Value::Null`] and is overwritten by
/// [`parse`](crate::parse). A failed parse always leaves it as `Null`.
///
/// # Examples
///
/// ```
/// use leptjson::{Kind, Value};
///
/// let v: Value = "3.25".parse().unwrap();
/// assert_eq!(v.kind(), Kind::Number);
/// assert_eq!(v.to_string(), "3.25");
/// ```
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Value {
    /// `null`
    #[default]
    Null,
    /// `true` or `false`
    Boolean(bool),
    /// A finite decimal number.
    Number(f64),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl Value {
    /// Returns the kind tag of this value.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Null => Kind::Null,
            Self::Boolean(false) => Kind::False,
            Self::Boolean(true) => Kind::True,
            Self::Number(_) => Kind::Number,
        }
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns the numeric payload, or `None` for any other kind.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the numeric payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a [`Number`](Value::Number). Reading the
    /// payload of another kind is a bug in the caller, not bad input.
    #[must_use]
    #[track_caller]
    pub fn number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            other => panic!("expected a number value, found {:?}", other.kind()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            // Parsed numbers are always finite.
            Value::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Returns the kind of `value`.
#[must_use]
pub fn get_type(value: &Value) -> Kind {
    value.kind()
}

/// Returns the numeric payload of `value`.
///
/// # Panics
///
/// Panics unless `get_type(value) == Kind::Number`.
#[must_use]
#[track_caller]
pub fn get_number(value: &Value) -> f64 {
    value.number()
}
