//! Static constructors of the host surface.
//!
//! The constructors accept an optional fallback ("default"). A default is
//! only consulted after the primary argument has passed its type check and
//! then failed on value grounds; a primary of the wrong type is always an
//! error. A default that cannot itself be converted yields
//! [`Int64Error::InvalidDefault`].

use int64_core::{Int64, Int64Error, Int64Result, Radix};

use crate::args::{optional_radix, require_number, require_string, to_int32};
use crate::HostValue;

/// Which kinds of default a constructor accepts besides an Integer.
#[derive(Copy, Clone, Debug)]
enum DefaultRule {
    /// Numbers, as for `fromNumber`.
    Number,
    /// Strings in the given radix, as for `fromString`.
    Text(Radix),
    /// Numbers or decimal strings, as for `of`.
    Any,
}

impl DefaultRule {
    fn expected(self) -> &'static str {
        match self {
            Self::Number => "a number or Integer default",
            Self::Text(_) => "a string or Integer default",
            Self::Any => "a number, string, or Integer default",
        }
    }
}

/// Replace a value failure with the converted default, when there is one.
fn fall_back(
    failure: Int64Error,
    default: Option<&HostValue>,
    rule: DefaultRule,
) -> Int64Result<Int64> {
    let Some(default) = default else {
        return Err(failure);
    };
    let converted = match (default, rule) {
        (HostValue::Integer(n), _) => Ok(*n),
        (HostValue::Number(n), DefaultRule::Number | DefaultRule::Any) => Int64::from_f64(*n),
        (HostValue::Str(s), DefaultRule::Text(radix)) => Int64::parse(s, radix),
        (HostValue::Str(s), DefaultRule::Any) => s.parse(),
        (other, _) => {
            return Err(Int64Error::wrong_type(rule.expected(), other.type_name()));
        }
    };
    match converted {
        Ok(value) => {
            tracing::debug!(%failure, %value, "substituting default value");
            Ok(value)
        }
        Err(err) => {
            tracing::debug!(%failure, %err, "default value rejected");
            Err(Int64Error::InvalidDefault)
        }
    }
}

/// Build an integer from any supported host value.
///
/// An empty slot yields zero. Numbers must be safe integers, strings are
/// parsed as decimal, and integers are copied.
pub fn of(value: Option<&HostValue>, default: Option<&HostValue>) -> Int64Result<Int64> {
    let result = match value {
        None => return Ok(Int64::ZERO),
        Some(HostValue::Integer(n)) => return Ok(*n),
        Some(HostValue::Number(n)) => Int64::from_f64(*n),
        Some(HostValue::Str(s)) => s.parse(),
        Some(other) => {
            return Err(Int64Error::wrong_type(
                "a number, string, or Integer",
                other.type_name(),
            ));
        }
    };
    result.or_else(|failure| fall_back(failure, default, DefaultRule::Any))
}

/// Build an integer from a host number.
pub fn from_number(value: Option<&HostValue>, default: Option<&HostValue>) -> Int64Result<Int64> {
    let number = require_number(value)?;
    Int64::from_f64(number).or_else(|failure| fall_back(failure, default, DefaultRule::Number))
}

/// Build an integer from a host string in an optional radix.
///
/// The text type is checked before the radix, and both before the default
/// is looked at.
pub fn from_string(
    text: Option<&HostValue>,
    radix: Option<&HostValue>,
    default: Option<&HostValue>,
) -> Int64Result<Int64> {
    let text = require_string(text)?;
    let radix = optional_radix(radix)?;
    Int64::parse(text, radix)
        .or_else(|failure| fall_back(failure, default, DefaultRule::Text(radix)))
}

/// Build an integer from its high and low 32-bit words.
///
/// Both words are host numbers reduced to signed 32-bit values the way the
/// host's own bitwise operators reduce them.
pub fn from_bits(high: Option<&HostValue>, low: Option<&HostValue>) -> Int64Result<Int64> {
    let high = to_int32(require_number(high)?);
    let low = to_int32(require_number(low)?);
    Ok(Int64::from_bits(high, low))
}

/// Check whether a host value is an integer instance.
pub fn is_instance(value: Option<&HostValue>) -> bool {
    matches!(value, Some(HostValue::Integer(_)))
}

/// Look up a named constant.
pub fn constant(name: &str) -> Option<Int64> {
    match name {
        "MAX_VALUE" => Some(Int64::MAX_VALUE),
        "MIN_VALUE" => Some(Int64::MIN_VALUE),
        "ZERO" => Some(Int64::ZERO),
        "ONE" => Some(Int64::ONE),
        "NEG_ONE" => Some(Int64::NEG_ONE),
        _ => None,
    }
}
