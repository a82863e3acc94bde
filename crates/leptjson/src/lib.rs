//! A strict, single-pass parser for the scalar subset of JSON.
//!
//! Four kinds of document are accepted: `null`, `true`, `false` and a
//! decimal number. Anything else (including strings, arrays and objects) is
//! rejected with a [`ParseErrorKind`] that says why.
//!
//! ```rust
//! use leptjson::{Kind, ParseErrorKind, Value, get_number, get_type, parse};
//!
//! let mut v = Value::default();
//! parse(&mut v, "  -0.5e-3  ").unwrap();
//! assert_eq!(get_type(&v), Kind::Number);
//! assert!((get_number(&v) + 0.0005).abs() < 1e-12);
//!
//! let err = parse(&mut v, "1e400").unwrap_err();
//! assert_eq!(err.kind(), ParseErrorKind::NumberTooBig);
//! assert_eq!(get_type(&v), Kind::Null);
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

mod error;
mod options;
mod parser;
mod value;

#[cfg(test)]
mod tests;

pub use error::{ParseError, ParseErrorKind};
pub use options::ParserOptions;
pub use parser::{Parser, parse};
pub use value::{Kind, Value, get_number, get_type};
