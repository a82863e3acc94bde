//! Number validation and conversion.
//!
//! Validation runs an explicit state machine over the unread bytes:
//!
//! ```text
//! number     := '-'? int-part frac-part? exp-part?
//! int-part   := '0' | [1-9] [0-9]*
//! frac-part  := '.' [0-9]+
//! exp-part   := ('e'|'E') ('+'|'-')? [0-9]+
//! ```
//!
//! Each state consumes its part of the grammar (or nothing, for the optional
//! parts) and moves to the next one, so every rejection is traceable to a
//! single state and lookahead. Bytes after the longest valid prefix are left
//! alone for the caller to judge. Conversion only ever sees a span that
//! validation accepted.

use crate::error::ParseErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberState {
    Start,
    PostSign,
    PostInt,
    PostFrac,
    End,
}

/// Outcome of a single transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Move to `state` with `at` bytes consumed in total.
    Next { state: NumberState, at: usize },
    /// The number is complete and `len` bytes long.
    Accept { len: usize },
    Reject,
}

#[inline]
fn is_digit(b: Option<&u8>) -> bool {
    matches!(b, Some(b'0'..=b'9'))
}

/// Index just past the run of ASCII digits starting at `at`.
#[inline]
fn digits_end(input: &[u8], at: usize) -> usize {
    at + input[at..].iter().take_while(|b| b.is_ascii_digit()).count()
}

/// The transition function: given a state and how much of `input` has been
/// consumed so far, decide the next state.
pub(crate) fn step(state: NumberState, input: &[u8], at: usize) -> Step {
    use NumberState::{End, PostFrac, PostInt, PostSign, Start};

    match state {
        Start => {
            let at = if input.get(at) == Some(&b'-') { at + 1 } else { at };
            Step::Next { state: PostSign, at }
        }
        // The integer part is mandatory, and may only start with `0` if `0`
        // is all of it.
        PostSign => match input.get(at) {
            Some(b'0') => Step::Next {
                state: PostInt,
                at: at + 1,
            },
            Some(b'1'..=b'9') => Step::Next {
                state: PostInt,
                at: digits_end(input, at + 1),
            },
            _ => Step::Reject,
        },
        PostInt => match input.get(at) {
            Some(b'.') if is_digit(input.get(at + 1)) => Step::Next {
                state: PostFrac,
                at: digits_end(input, at + 2),
            },
            Some(b'.') => Step::Reject,
            _ => Step::Next { state: PostFrac, at },
        },
        PostFrac => match input.get(at) {
            Some(b'e' | b'E') => {
                let mut exp = at + 1;
                if matches!(input.get(exp), Some(b'+' | b'-')) {
                    exp += 1;
                }
                if is_digit(input.get(exp)) {
                    Step::Next {
                        state: End,
                        at: digits_end(input, exp + 1),
                    }
                } else {
                    Step::Reject
                }
            }
            _ => Step::Next { state: End, at },
        },
        End => Step::Accept { len: at },
    }
}

/// Returns the length of the number at the start of `input`, or `None` if
/// `input` does not start with a well-formed number.
pub(crate) fn validate(input: &[u8]) -> Option<usize> {
    let mut state = NumberState::Start;
    let mut at = 0;
    loop {
        match step(state, input, at) {
            Step::Next { state: next, at: next_at } => {
                debug_assert!(next_at >= at);
                state = next;
                at = next_at;
            }
            Step::Accept { len } => return Some(len),
            Step::Reject => return None,
        }
    }
}

/// Converts a validated span to the nearest `f64`.
pub(crate) fn convert(span: &str) -> Result<f64, ParseErrorKind> {
    let n: f64 = span.parse().map_err(|_| ParseErrorKind::InvalidValue)?;
    if n.is_infinite() {
        return Err(ParseErrorKind::NumberTooBig);
    }
    Ok(n)
}
