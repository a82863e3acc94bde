/// Configuration options for [`Parser`](crate::Parser).
///
/// # Examples
///
/// ```rust
/// use leptjson::{Parser, ParserOptions, Value};
///
/// let parser = Parser::new(ParserOptions {
///     allow_unicode_whitespace: true,
///     ..Default::default()
/// });
/// let mut v = Value::default();
/// parser.parse_into(&mut v, "\u{3000}true\u{2028}").unwrap();
/// assert_eq!(v, Value::Boolean(true));
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Whether to skip any Unicode whitespace around the root value.
    ///
    /// By default, the parser only recognizes the four whitespace characters
    /// defined by the JSON specification: space (U+0020), line feed (U+000A),
    /// carriage return (U+000D), and horizontal tab (U+0009).
    ///
    /// # Default
    ///
    /// `false`
    pub allow_unicode_whitespace: bool,

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panic on parse errors instead of returning them.
    ///
    /// Enabled only in test and fuzzing builds to produce backtraces on parse
    /// failures.
    pub panic_on_error: bool,
}
