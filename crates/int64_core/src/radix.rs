//! Validated numeric base for string conversion.

use std::fmt;

use crate::errors::{Int64Error, Int64Result};

/// A numeric base in `2..=36`.
///
/// Digits above 9 are the letters `a`..`z`, accepted in either case when
/// parsing and written in lowercase when rendering.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Radix(u32);

impl Radix {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 36;

    pub const BINARY: Self = Self(2);
    pub const OCTAL: Self = Self(8);
    pub const DECIMAL: Self = Self(10);
    pub const HEXADECIMAL: Self = Self(16);

    /// Validate a radix. Values outside `2..=36` are a range error.
    pub const fn new(radix: u32) -> Int64Result<Self> {
        if radix < Self::MIN || radix > Self::MAX {
            return Err(Int64Error::RadixOutOfRange { radix });
        }
        Ok(Self(radix))
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for Radix {
    fn default() -> Self {
        Self::DECIMAL
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Radix {
    type Error = Int64Error;

    fn try_from(radix: u32) -> Int64Result<Self> {
        Self::new(radix)
    }
}
