//! Run-length string unpacking with backslash escapes
//!
//! This crate expands strings such as `a4bc2d5e` into `aaaabccddddde`.
//! Every emitted character may be followed by a single ASCII digit that acts
//! as its repeat count; a backslash turns the next digit or backslash into
//! literal data.
//!
//! # Grammar
//!
//! | Unit | Meaning | Example |
//! |------|---------|---------|
//! | `CHR` | emit the character once | `ab` → `ab` |
//! | `CHR DIG` | emit the character `DIG` times | `a4` → `aaaa`, `a0` → nothing |
//! | `\ DIG` | emit the literal digit, optionally repeated | `\4` → `4`, `\45` → `44444` |
//! | `\ \` | emit a literal backslash, optionally repeated | `\\` → `\`, `\\3` → `\\\` |
//!
//! Only ASCII `0`–`9` act as repeat counts. Digits from other scripts
//! (`১`, `੩`, ...) are ordinary characters.
//!
//! # Errors
//!
//! Every malformed construct maps to [`UnpackError::InvalidString`]:
//! a leading digit, a digit right after a repeat count, a backslash followed
//! by anything but a digit or backslash, a trailing raw backslash, and
//! (through [`unpack_bytes`]) ill-formed UTF-8. No partial output is
//! returned.
//!
//! # Examples
//!
//! ```rust
//! use coursework_unpack::{UnpackError, unpack};
//!
//! assert_eq!(unpack("a4bc2d5e").unwrap(), "aaaabccddddde");
//! assert_eq!(unpack(r"qwe\45").unwrap(), "qwe44444");
//! assert_eq!(unpack("aaa10b"), Err(UnpackError::InvalidString));
//! ```

use std::iter;
use thiserror::Error;

/// The escape marker.
pub const ESCAPE: char = '\\';

/// Error returned for any malformed input.
///
/// The error is opaque: compare it by identity, not by message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnpackError {
    #[error("invalid string")]
    InvalidString,
}

/// Expand a run-length encoded string.
///
/// # Errors
///
/// Returns [`UnpackError::InvalidString`] on the first malformed construct.
pub fn unpack(text: &str) -> Result<String, UnpackError> {
    let mut out = String::with_capacity(text.len());
    let mut window = Window::new();

    for c in text.chars() {
        if let Some(run) = window.step(c)? {
            run.write_to(&mut out);
        }
    }
    if let Some(run) = window.finish()? {
        run.write_to(&mut out);
    }

    Ok(out)
}

/// Expand raw bytes, rejecting ill-formed UTF-8 before scanning.
///
/// # Errors
///
/// Returns [`UnpackError::InvalidString`] if `bytes` is not valid UTF-8 or
/// the decoded text is malformed.
pub fn unpack_bytes(bytes: &[u8]) -> Result<String, UnpackError> {
    let text = std::str::from_utf8(bytes).map_err(|_| UnpackError::InvalidString)?;
    unpack(text)
}

/// A character together with the number of times it is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    ch: char,
    count: usize,
}

impl Run {
    const fn once(ch: char) -> Self {
        Self { ch, count: 1 }
    }

    fn write_to(self, out: &mut String) {
        out.extend(iter::repeat_n(self.ch, self.count));
    }
}

/// What the scanner remembers about the character before the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// Nothing has been read yet.
    Start,
    /// A character whose output is deferred until its successor is known.
    /// Holds plain characters as well as escaped digits and backslashes.
    Pending(char),
    /// A raw backslash waiting for the character it escapes.
    Escape,
    /// A repeat count that has already written its character.
    Counted,
}

/// Scanner state for a single `unpack` call.
///
/// Output for a character is decided only once its successor is seen, so
/// the window keeps one slot of lookbehind. `Start` and `Counted` are kept
/// apart because a digit is rejected in both, while a plain character after
/// `Counted` starts a fresh unit.
#[derive(Debug)]
struct Window {
    prev: Slot,
}

impl Window {
    const fn new() -> Self {
        Self { prev: Slot::Start }
    }

    fn step(&mut self, c: char) -> Result<Option<Run>, UnpackError> {
        let (run, next) = match (self.prev, c) {
            (Slot::Start | Slot::Counted, d) if d.is_ascii_digit() => {
                return Err(UnpackError::InvalidString);
            }
            (Slot::Escape, d) if d.is_ascii_digit() => (None, Slot::Pending(d)),
            (Slot::Pending(ch), d) if d.is_ascii_digit() => (
                Some(Run {
                    ch,
                    count: digit_value(d),
                }),
                Slot::Counted,
            ),

            (Slot::Escape, ESCAPE) => (None, Slot::Pending(ESCAPE)),
            (Slot::Escape, _) => return Err(UnpackError::InvalidString),
            (Slot::Pending(ch), ESCAPE) => (Some(Run::once(ch)), Slot::Escape),
            (Slot::Start | Slot::Counted, ESCAPE) => (None, Slot::Escape),

            (Slot::Pending(ch), other) => (Some(Run::once(ch)), Slot::Pending(other)),
            (Slot::Start | Slot::Counted, other) => (None, Slot::Pending(other)),
        };

        self.prev = next;
        Ok(run)
    }

    /// Flush whatever is still pending once the input is exhausted.
    fn finish(self) -> Result<Option<Run>, UnpackError> {
        match self.prev {
            Slot::Pending(ch) => Ok(Some(Run::once(ch))),
            Slot::Escape => Err(UnpackError::InvalidString),
            Slot::Start | Slot::Counted => Ok(None),
        }
    }
}

fn digit_value(d: char) -> usize {
    usize::from(d as u8 - b'0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpack_seed_scenarios() {
        let cases = [
            ("a4bc2d5e", "aaaabccddddde"),
            ("abccd", "abccd"),
            ("", ""),
            ("aaa0b", "aab"),
            ("🙃0", ""),
            ("d\n5abc", "d\n\n\n\n\nabc"),
            ("\n3", "\n\n\n"),
            ("线3▟0🤘2", "线线线🤘🤘"),
            ("১2২৩0", "১১২"),
            ("੩4", "੩੩੩੩"),
        ];

        for (input, expected) in cases {
            assert_eq!(
                unpack(input).as_deref(),
                Ok(expected),
                "unexpected output for {input:?}"
            );
        }
    }

    #[test]
    fn test_unpack_escapes() {
        let cases = [
            (r"qwe\4\5", "qwe45"),
            (r"qwe\45", "qwe44444"),
            (r"qwe\\5", r"qwe\\\\\"),
            (r"qwe\\\3", r"qwe\3"),
            (r"\1", "1"),
            (r"\\", r"\"),
            (r"\\0", ""),
            (r"\\\\", r"\\"),
            (r"a\\b", r"a\b"),
        ];

        for (input, expected) in cases {
            assert_eq!(
                unpack(input).as_deref(),
                Ok(expected),
                "unexpected output for {input:?}"
            );
        }
    }

    #[test]
    fn test_unpack_rejects_malformed_input() {
        let cases = [
            "3abc", "45", "aaa10b", r"\", r"\a", r"\\\", r"\\\a", r"ab\aba", r"\♬", r"a\",
            r"\401", "a00",
        ];

        for input in cases {
            assert_eq!(
                unpack(input),
                Err(UnpackError::InvalidString),
                "expected rejection for {input:?}"
            );
        }
    }

    #[test]
    fn test_only_ascii_digits_are_counts() {
        // Bengali and Devanagari digits are plain data on every path
        assert_eq!(unpack("a१২").as_deref(), Ok("a१২"));
        assert_eq!(unpack("১2").as_deref(), Ok("১১"));
        assert_eq!(unpack("a11"), Err(UnpackError::InvalidString));
    }

    #[test]
    fn test_replacement_character_is_ordinary_data() {
        assert_eq!(unpack("\u{FFFD}").as_deref(), Ok("\u{FFFD}"));
        assert_eq!(unpack("\u{FFFD}3").as_deref(), Ok("\u{FFFD}\u{FFFD}\u{FFFD}"));
        assert_eq!(unpack("a\u{FFFD}b").as_deref(), Ok("a\u{FFFD}b"));
    }

    #[test]
    fn test_unpack_bytes_rejects_ill_formed_utf8() {
        assert_eq!(unpack_bytes(b"\xff\xfe"), Err(UnpackError::InvalidString));
        assert_eq!(unpack_bytes(b"a3\xc3"), Err(UnpackError::InvalidString));
        assert_eq!(unpack_bytes("線2".as_bytes()).as_deref(), Ok("線線"));
    }

    #[test]
    fn test_window_defers_output_until_successor() {
        let mut window = Window::new();
        assert_eq!(window.step('a'), Ok(None));
        assert_eq!(window.step('b'), Ok(Some(Run::once('a'))));
        assert_eq!(window.step('3'), Ok(Some(Run { ch: 'b', count: 3 })));
        assert_eq!(window.step('c'), Ok(None));
        assert_eq!(window.finish(), Ok(Some(Run::once('c'))));
    }

    #[test]
    fn test_window_escape_transitions() {
        let mut window = Window::new();
        assert_eq!(window.step(ESCAPE), Ok(None));
        assert_eq!(window.step(ESCAPE), Ok(None));
        // The escaped backslash is data and can be repeated
        assert_eq!(window.step('2'), Ok(Some(Run { ch: ESCAPE, count: 2 })));
        assert_eq!(window.step(ESCAPE), Ok(None));
        assert_eq!(window.finish(), Err(UnpackError::InvalidString));
    }

    #[test]
    fn test_error_is_opaque_and_comparable() {
        let err = unpack("45").unwrap_err();
        assert_eq!(err, UnpackError::InvalidString);
        assert_eq!(err.to_string(), "invalid string");
    }
}
