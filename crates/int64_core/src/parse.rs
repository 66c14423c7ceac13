//! String parsing.
//!
//! Parsing happens in two phases. First the text is matched against the
//! integer grammar; only a well-formed literal reaches the second phase,
//! which accumulates the magnitude in checked unsigned 64-bit arithmetic and
//! applies the sign.
//!
//! # Grammar
//!
//! ```text
//! literal  = space* "-"? digit* ( "." "0"* )? space*
//! space    = " " | "\t" | "\n" | "\v" | "\f" | "\r"
//! ```
//!
//! `digit` is any digit of the radix, letters in either case. At least one
//! digit must appear in the integer run or the zero fraction, so `".0"` and
//! `"0."` are zero while `"."` and `"-."` are malformed. A fraction may only
//! hold zeros: the grammar admits integer-valued decimal strings, nothing else.

use std::str::FromStr;

use crate::errors::{Int64Error, Int64Result};
use crate::{Int64, Radix};

/// Whitespace accepted around a literal.
#[inline]
fn is_space(c: char) -> bool {
    c == ' ' || ('\t'..='\r').contains(&c)
}

/// A literal that matched the grammar; `digits` may be empty for `".0"`.
#[derive(Debug, PartialEq, Eq)]
struct Literal<'a> {
    negative: bool,
    digits: &'a str,
}

/// Match `text` against the integer grammar.
fn scan(text: &str, radix: Radix) -> Int64Result<Literal<'_>> {
    let body = text.trim_matches(is_space);
    if body.is_empty() {
        return Err(Int64Error::EmptyString);
    }

    let (negative, rest) = match body.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, body),
    };

    let int_end = rest
        .find(|c: char| !c.is_digit(radix.get()))
        .unwrap_or(rest.len());
    let (digits, tail) = rest.split_at(int_end);

    let fraction_zeros = match tail.strip_prefix('.') {
        Some(fraction) if fraction.chars().all(|c| c == '0') => fraction.len(),
        Some(_) => return Err(Int64Error::InvalidString),
        None if tail.is_empty() => 0,
        None => return Err(Int64Error::InvalidString),
    };

    if digits.is_empty() && fraction_zeros == 0 {
        return Err(Int64Error::InvalidString);
    }

    Ok(Literal { negative, digits })
}

/// Accumulate the magnitude of a scanned digit run.
fn magnitude(digits: &str, radix: Radix) -> Int64Result<u64> {
    let base = u64::from(radix.get());
    digits.chars().try_fold(0u64, |acc, c| {
        let digit = c.to_digit(radix.get()).ok_or(Int64Error::InvalidString)?;
        acc.checked_mul(base)
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or(Int64Error::StringOutOfRange)
    })
}

impl Int64 {
    /// Parse `text` in the given radix.
    ///
    /// Grammar mismatches are type errors; well-formed literals outside the
    /// 64-bit range are range errors. The sign of zero is not preserved.
    pub fn parse(text: &str, radix: Radix) -> Int64Result<Self> {
        let literal = scan(text, radix)?;
        let magnitude = magnitude(literal.digits, radix)?;
        let value = if literal.negative {
            0i64.checked_sub_unsigned(magnitude)
        } else {
            i64::try_from(magnitude).ok()
        };
        value.map(Self::new).ok_or(Int64Error::StringOutOfRange)
    }

    /// Parse `text` in `radix`, validating the radix first.
    pub fn from_str_radix(text: &str, radix: u32) -> Int64Result<Self> {
        Self::parse(text, Radix::new(radix)?)
    }
}

impl FromStr for Int64 {
    type Err = Int64Error;

    fn from_str(s: &str) -> Int64Result<Self> {
        Self::parse(s, Radix::DECIMAL)
    }
}
