//! Radix-aware string rendering.

use crate::{Int64, Radix};

/// Longest rendering: 64 binary digits plus a sign.
const MAX_RENDERED_LEN: usize = 65;

/// Render an unsigned magnitude in the given radix, most significant first.
#[expect(
    clippy::arithmetic_side_effects,
    reason = "radix is validated to 2..=36, so division and remainder cannot fail"
)]
pub(crate) fn magnitude_digits(mut magnitude: u64, radix: Radix) -> String {
    let base = u64::from(radix.get());
    let mut digits = Vec::with_capacity(MAX_RENDERED_LEN);
    loop {
        let digit = u32::try_from(magnitude % base).unwrap_or_default();
        digits.push(char::from_digit(digit, radix.get()).unwrap_or('0'));
        magnitude /= base;
        if magnitude == 0 {
            break;
        }
    }
    digits.iter().rev().collect()
}

impl Int64 {
    /// Render the value as a signed string of digits in `radix`.
    ///
    /// Negative values are rendered from their unsigned magnitude, so
    /// [`Int64::MIN_VALUE`] needs no special case.
    pub fn to_string_radix(self, radix: Radix) -> String {
        let digits = magnitude_digits(self.raw().unsigned_abs(), radix);
        if self.is_negative() {
            let mut out = String::with_capacity(digits.len().saturating_add(1));
            out.push('-');
            out.push_str(&digits);
            out
        } else {
            digits
        }
    }
}
