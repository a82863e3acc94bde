use std::string::{String, ToString};

use quickcheck::{Arbitrary, Gen, QuickCheck};
use quickcheck_macros::quickcheck;

use crate::{ParseErrorKind, Value, parse, parser::validate_number};

/// A number literal that conforms to the grammar, built part by part.
#[derive(Clone, Debug)]
struct NumberLiteral(String);

fn digit(g: &mut Gen, digits: &[u8]) -> char {
    char::from(*g.choose(digits).unwrap())
}

impl Arbitrary for NumberLiteral {
    fn arbitrary(g: &mut Gen) -> Self {
        const ALL: &[u8] = b"0123456789";
        let mut text = String::new();
        if bool::arbitrary(g) {
            text.push('-');
        }
        let int_len = usize::arbitrary(g) % 24;
        if int_len == 0 {
            text.push('0');
        } else {
            text.push(digit(g, b"123456789"));
            for _ in 1..int_len {
                text.push(digit(g, ALL));
            }
        }
        if bool::arbitrary(g) {
            text.push('.');
            for _ in 0..=usize::arbitrary(g) % 12 {
                text.push(digit(g, ALL));
            }
        }
        if bool::arbitrary(g) {
            text.push(*g.choose(&['e', 'E']).unwrap());
            match u8::arbitrary(g) % 3 {
                0 => text.push('+'),
                1 => text.push('-'),
                _ => {}
            }
            for _ in 0..=usize::arbitrary(g) % 3 {
                text.push(digit(g, ALL));
            }
        }
        NumberLiteral(text)
    }
}

fn tests() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}

/// Property: the validator consumes a whole grammar-conforming literal and
/// stops right before any byte that cannot continue it.
#[test]
fn validator_length_is_maximal_prefix() {
    fn prop(lit: NumberLiteral, suffix: u8) -> bool {
        let NumberLiteral(text) = lit;
        let suffix = [" ", ",", "]", "}", "x", "\n", "-", "+", ""][usize::from(suffix) % 9];
        let input = text.clone() + suffix;
        validate_number(input.as_bytes()) == Some(text.len())
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(NumberLiteral, u8) -> bool);
}

/// Property: a valid literal parses to exactly what the standard library's
/// decimal conversion produces, or to `NumberTooBig` if that overflows.
#[test]
fn conversion_matches_std() {
    fn prop(lit: NumberLiteral) -> bool {
        let NumberLiteral(text) = lit;
        let expected: f64 = text.parse().unwrap();
        let mut v = Value::default();
        match parse(&mut v, &text) {
            Ok(()) => v.number().to_bits() == expected.to_bits(),
            Err(err) => {
                err.kind() == ParseErrorKind::NumberTooBig && expected.is_infinite() && v.is_null()
            }
        }
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(NumberLiteral) -> bool);
}

/// Property: any input either parses or leaves the value `null`.
#[quickcheck]
fn errors_always_leave_null(input: String) -> bool {
    let mut v = Value::Boolean(true);
    match parse(&mut v, &input) {
        Ok(()) => true,
        Err(_) => v.is_null(),
    }
}

/// Property: the display form of a parsed number parses back to the same
/// number.
#[quickcheck]
fn displayed_numbers_reparse(lit: NumberLiteral) -> bool {
    let Ok(v) = lit.0.parse::<Value>() else {
        return true;
    };
    v.to_string().parse::<Value>().map(|w| w.number().to_bits()) == Ok(v.number().to_bits())
}
