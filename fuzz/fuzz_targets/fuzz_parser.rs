#![no_main]
use leptjson::{Kind, Parser, ParserOptions, Value};
use libfuzzer_sys::fuzz_target;

const HEADER: usize = 1; // 1 flag byte

fn parser(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }

    let flags = data[0];
    let input = String::from_utf8_lossy(&data[HEADER..]);
    let allow_unicode_whitespace = flags & 1 != 0;

    let parser = Parser::new(ParserOptions {
        allow_unicode_whitespace,
        panic_on_error: false,
    });
    let mut value = Value::Boolean(true);
    let result = parser.parse_into(&mut value, &input);

    if result.is_err() {
        assert_eq!(value.kind(), Kind::Null, "error left {value:?} for {input:?}");
        return;
    }

    // The reference parser only knows the four JSON whitespace characters.
    if allow_unicode_whitespace {
        return;
    }
    let reference: serde_json::Value = serde_json::from_str(&input)
        .unwrap_or_else(|e| panic!("accepted {input:?} but serde_json rejected it: {e}"));
    match (value, reference) {
        (Value::Null, serde_json::Value::Null) => {}
        (Value::Boolean(a), serde_json::Value::Bool(b)) => assert_eq!(a, b),
        (Value::Number(_), serde_json::Value::Number(_)) => {}
        (ours, theirs) => panic!("{input:?}: parsed {ours:?}, serde_json gave {theirs:?}"),
    }
}

fuzz_target!(|data: &[u8]| parser(data));
