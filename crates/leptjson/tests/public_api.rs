#![allow(missing_docs)]

use leptjson::{Kind, ParseErrorKind, Parser, ParserOptions, Value, get_number, get_type, parse};

#[test]
fn free_functions() {
    let mut v = Value::default();
    assert_eq!(get_type(&v), Kind::Null);

    parse(&mut v, "null").unwrap();
    assert_eq!(get_type(&v), Kind::Null);
    parse(&mut v, "true").unwrap();
    assert_eq!(get_type(&v), Kind::True);
    parse(&mut v, "false").unwrap();
    assert_eq!(get_type(&v), Kind::False);
    parse(&mut v, "  -0.5e-3  ").unwrap();
    assert_eq!(get_type(&v), Kind::Number);
    assert!((get_number(&v) + 0.0005).abs() < 1e-15);
}

#[test]
fn error_kinds_are_distinguishable() {
    let cases = [
        ("", ParseErrorKind::ExpectValue),
        ("nul", ParseErrorKind::InvalidValue),
        ("1 2", ParseErrorKind::RootNotSingular),
        ("1e400", ParseErrorKind::NumberTooBig),
    ];
    for (input, kind) in cases {
        let mut v = Value::Boolean(true);
        let err = parse(&mut v, input).unwrap_err();
        assert_eq!(err.kind(), kind, "{input:?}");
        assert_eq!(get_type(&v), Kind::Null, "{input:?}");
        let _: &dyn std::error::Error = &err;
    }
}

#[test]
fn from_str_and_display() {
    let v: Value = " 1.5 ".parse().unwrap();
    assert_eq!(v, Value::Number(1.5));
    assert_eq!(v.as_f64(), Some(1.5));
    assert!(v.is_number() && !v.is_bool() && !v.is_null());
    assert_eq!(v.to_string(), "1.5");

    let v: Value = "false".parse().unwrap();
    assert!(v.is_bool());
    assert_eq!(v, Value::from(false));

    assert!("x".parse::<Value>().is_err());
}

#[test]
fn configured_parser() {
    let parser = Parser::new(ParserOptions {
        allow_unicode_whitespace: true,
        ..Default::default()
    });
    assert!(parser.options().allow_unicode_whitespace);

    let mut v = Value::default();
    parser.parse_into(&mut v, "\u{feff}\u{00a0}true").unwrap_err();
    parser.parse_into(&mut v, "\u{00a0}true\u{2009}").unwrap();
    assert_eq!(v, Value::Boolean(true));
}

#[test]
#[should_panic(expected = "expected a number value")]
fn get_number_on_boolean_is_a_contract_violation() {
    let v: Value = "true".parse().unwrap();
    let _ = get_number(&v);
}
