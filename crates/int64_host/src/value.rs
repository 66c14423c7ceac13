//! Host values.
//!
//! A `HostValue` is an argument as the consuming runtime hands it over: it
//! may be a number, a string, an existing integer, or something else
//! entirely. Keeping the dynamic type around is what lets the host surface
//! tell a type error (wrong kind of argument) from a range error (right kind,
//! bad value).

use std::fmt;

use int64_core::Int64;

/// A dynamically typed host argument or result.
#[derive(Clone, Debug, PartialEq)]
pub enum HostValue {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    /// An instance of the integer type.
    Integer(Int64),
    Array(Vec<HostValue>),
    /// Any other object, tagged with its class name (e.g. `"Number"` for a
    /// boxed number, `"Object"` for a plain object).
    Object { class: String },
}

impl HostValue {
    // Factory methods

    #[inline]
    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    #[inline]
    pub fn string(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    #[inline]
    pub fn integer(value: impl Into<Int64>) -> Self {
        Self::Integer(value.into())
    }

    pub fn object(class: impl Into<String>) -> Self {
        Self::Object {
            class: class.into(),
        }
    }

    /// Get the host type name, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::Integer(_) => "Integer",
            Self::Array(_) => "array",
            Self::Object { .. } => "object",
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<Int64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<f64> for HostValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for HostValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for HostValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for HostValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for HostValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Int64> for HostValue {
    fn from(value: Int64) -> Self {
        Self::Integer(value)
    }
}

impl fmt::Display for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Integer(n) => write!(f, "Integer({n})"),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Object { class } => write!(f, "[object {class}]"),
        }
    }
}
