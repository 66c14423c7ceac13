//! Argument validation for host calls.
//!
//! Each `require_*` helper takes the argument slot as an `Option`: `None`
//! means the caller passed nothing at that position, which is distinct from
//! an explicit `undefined`. Both are type errors wherever a value is
//! mandatory.

use int64_core::{Int64, Int64Error, Int64Result, Radix};

use crate::HostValue;

/// Type name reported when an argument slot is empty.
const NOTHING: &str = "nothing";

/// Exclusive upper bound of a 32-bit word as a float.
const WORD_RANGE: f64 = 4_294_967_296.0;

/// Host type name of an argument slot.
pub(crate) fn slot_type(arg: Option<&HostValue>) -> &'static str {
    arg.map_or(NOTHING, HostValue::type_name)
}

/// Extract a host number.
#[inline]
pub(crate) fn require_number(arg: Option<&HostValue>) -> Int64Result<f64> {
    match arg {
        Some(HostValue::Number(n)) => Ok(*n),
        other => Err(Int64Error::wrong_type("a number", slot_type(other))),
    }
}

/// Extract a host string.
#[inline]
pub(crate) fn require_string(arg: Option<&HostValue>) -> Int64Result<&str> {
    match arg {
        Some(HostValue::Str(s)) => Ok(s),
        other => Err(Int64Error::wrong_type("a string", slot_type(other))),
    }
}

/// Extract a host number that is an integer in `0..=u32::MAX`.
///
/// Used for shift counts and radix arguments. Anything else, including
/// negative or fractional numbers, is a type error.
pub(crate) fn require_uint32(arg: Option<&HostValue>) -> Int64Result<u32> {
    const EXPECTED: &str = "a 32-bit unsigned integer";
    let value = match arg {
        Some(HostValue::Number(n)) => *n,
        other => return Err(Int64Error::wrong_type(EXPECTED, slot_type(other))),
    };
    if value.fract() != 0.0 || !(0.0..WORD_RANGE).contains(&value) {
        return Err(Int64Error::wrong_type(EXPECTED, "number"));
    }
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value is a whole number in the u32 range"
    )]
    let word = value as u32;
    Ok(word)
}

/// Extract a radix: a 32-bit unsigned integer, then range-checked to 2..=36.
pub(crate) fn require_radix(arg: Option<&HostValue>) -> Int64Result<Radix> {
    Radix::new(require_uint32(arg)?)
}

/// Extract an optional radix, defaulting to decimal when the slot is empty.
pub(crate) fn optional_radix(arg: Option<&HostValue>) -> Int64Result<Radix> {
    match arg {
        None => Ok(Radix::DECIMAL),
        some => require_radix(some),
    }
}

/// Coerce an operand of a binary operator.
///
/// Integers pass through, numbers go through the safe-integer check, and
/// strings are parsed as decimal. Anything else, including a missing
/// operand, is a type error.
pub(crate) fn coerce_operand(arg: Option<&HostValue>) -> Int64Result<Int64> {
    match arg {
        Some(HostValue::Integer(n)) => Ok(*n),
        Some(HostValue::Number(n)) => Int64::from_f64(*n),
        Some(HostValue::Str(s)) => s.parse(),
        other => Err(Int64Error::wrong_type(
            "a number, string, or Integer",
            slot_type(other),
        )),
    }
}

/// Reduce a host number to a signed 32-bit word.
///
/// Truncates toward zero and wraps modulo 2^32. Non-finite values become 0.
pub(crate) fn to_int32(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    let wrapped = value.trunc().rem_euclid(WORD_RANGE);
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "rem_euclid leaves a whole number in [0, 2^32)"
    )]
    let word = wrapped as u32;
    i32::from_ne_bytes(word.to_ne_bytes())
}
