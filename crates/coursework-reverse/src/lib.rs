//! String reversal demo
//!
//! Reverses text by Unicode scalar value, so multibyte characters survive
//! intact (`"привет"` becomes `"тевирп"`).

/// Greeting reversed when no input is given.
pub const GREETING: &str = "Hello, OTUS!";

/// Reverse `text` scalar by scalar.
#[must_use]
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}
