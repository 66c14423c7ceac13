//! Error types for integer construction, conversion, and arithmetic.
//!
//! # Error Categories
//!
//! Every failure belongs to exactly one of two categories, exposed through
//! [`Int64Error::kind`]:
//!
//! - [`ErrorKind::Type`]: the argument has the wrong type, a string does not
//!   match the integer grammar, or a shift count is outside its domain.
//! - [`ErrorKind::Range`]: the argument has an acceptable type but its value
//!   is outside the representable or valid domain (overflow, division by
//!   zero, unsafe host numbers, out-of-range radix).
//!
//! Callers match on the variant for structured handling and on the kind when
//! only the category matters (e.g. when mapping onto host exception types).

use std::fmt;

use thiserror::Error;

/// Result of a fallible integer operation.
pub type Int64Result<T> = Result<T, Int64Error>;

/// The two error categories a caller can observe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong argument type, malformed string, or invalid shift count.
    Type,
    /// Correct type, but the value is outside the valid domain.
    Range,
}

impl ErrorKind {
    /// Name of the host exception this kind corresponds to.
    pub const fn exception_name(self) -> &'static str {
        match self {
            Self::Type => "TypeError",
            Self::Range => "RangeError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.exception_name())
    }
}

/// Structured error for every fallible integer operation.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Int64Error {
    // Host numbers
    #[error("the given number is not an integer")]
    NotAnInteger { value: f64 },
    #[error("the precision of the given number cannot be guaranteed")]
    UnsafeNumber { value: f64 },
    #[error("cannot losslessly convert {value} to a number")]
    UnsafeConversion { value: i64 },

    // Strings
    #[error("the given string does not contain a number")]
    EmptyString,
    #[error("the given string contains non-integer characters")]
    InvalidString,
    #[error("the given string represents a number that is too large")]
    StringOutOfRange,
    #[error("radix argument must be within 2 - 36, got {radix}")]
    RadixOutOfRange { radix: u32 },

    // Arithmetic
    #[error("integer overflow in {operation}")]
    Overflow { operation: &'static str },
    #[error("divide by zero")]
    DivisionByZero,

    // Arguments
    #[error("expected {expected}, got {got}")]
    WrongType {
        expected: &'static str,
        got: &'static str,
    },
    #[error("the default value could not be converted to an Integer")]
    InvalidDefault,
    #[error("no method '{name}' on Integer")]
    UnknownMethod { name: String },
}

impl Int64Error {
    /// The category this error belongs to.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotAnInteger { .. }
            | Self::EmptyString
            | Self::InvalidString
            | Self::WrongType { .. }
            | Self::InvalidDefault
            | Self::UnknownMethod { .. } => ErrorKind::Type,
            Self::UnsafeNumber { .. }
            | Self::UnsafeConversion { .. }
            | Self::StringOutOfRange
            | Self::RadixOutOfRange { .. }
            | Self::Overflow { .. }
            | Self::DivisionByZero => ErrorKind::Range,
        }
    }

    /// Check if this is a type-category error.
    pub const fn is_type_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Type)
    }

    /// Check if this is a range-category error.
    pub const fn is_range_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Range)
    }

    /// Create an argument type error.
    pub const fn wrong_type(expected: &'static str, got: &'static str) -> Self {
        Self::WrongType { expected, got }
    }

    /// Create an overflow error for the named operation.
    pub const fn overflow(operation: &'static str) -> Self {
        Self::Overflow { operation }
    }
}
