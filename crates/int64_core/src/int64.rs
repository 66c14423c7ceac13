//! The `Int64` value type.
//!
//! `Int64` wraps `i64` and intentionally does NOT implement `Add`, `Sub`,
//! `Mul`, `Div`, `Rem`, or `Neg`. Arithmetic goes through the fallible
//! `try_*` methods ([`Int64::try_add`] and friends), which report overflow
//! and division by zero as [`Int64Error`](crate::Int64Error) values instead
//! of wrapping or panicking.
//!
//! Bitwise traits (`BitAnd`, `BitOr`, `BitXor`, `Not`) are implemented because
//! they cannot overflow. Shifts take their count modulo 64.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// An exact signed 64-bit integer.
///
/// Values are immutable and `Copy`; every operation returns a new value.
/// The value can also be viewed as two 32-bit words via [`Int64::high`] and
/// [`Int64::low`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct Int64(i64);

impl Int64 {
    /// The largest value, `2^63 - 1`.
    pub const MAX_VALUE: Self = Self(i64::MAX);

    /// The smallest value, `-2^63`.
    pub const MIN_VALUE: Self = Self(i64::MIN);

    /// The zero value.
    pub const ZERO: Self = Self(0);

    /// The one value.
    pub const ONE: Self = Self(1);

    /// The negative one value.
    pub const NEG_ONE: Self = Self(-1);

    /// The largest integer a 64-bit float represents exactly, `2^53 - 1`.
    pub const MAX_SAFE: Self = Self(9_007_199_254_740_991);

    /// The smallest integer a 64-bit float represents exactly, `-(2^53 - 1)`.
    pub const MIN_SAFE: Self = Self(-9_007_199_254_740_991);

    /// Create a new `Int64` from a raw `i64`.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Extract the raw `i64` value.
    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Assemble a value from its high and low 32-bit words.
    ///
    /// The words are taken as raw bit patterns: `from_bits(-1, -1)` is `-1`
    /// and `from_bits(0x7fff_ffff, -1)` is [`Int64::MAX_VALUE`].
    pub const fn from_bits(high: i32, low: i32) -> Self {
        let [h0, h1, h2, h3] = high.to_be_bytes();
        let [l0, l1, l2, l3] = low.to_be_bytes();
        Self(i64::from_be_bytes([h0, h1, h2, h3, l0, l1, l2, l3]))
    }

    /// The upper 32 bits, as a signed word.
    pub const fn high(self) -> i32 {
        let [b0, b1, b2, b3, ..] = self.0.to_be_bytes();
        i32::from_be_bytes([b0, b1, b2, b3])
    }

    /// The lower 32 bits, as a signed word.
    pub const fn low(self) -> i32 {
        let [.., b4, b5, b6, b7] = self.0.to_be_bytes();
        i32::from_be_bytes([b4, b5, b6, b7])
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_non_zero(self) -> bool {
        self.0 != 0
    }

    /// True for zero and every positive value.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 >= 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub const fn is_even(self) -> bool {
        self.0 & 1 == 0
    }

    #[inline]
    pub const fn is_odd(self) -> bool {
        self.0 & 1 != 0
    }

    /// Check if the value converts to a host number without precision loss.
    #[inline]
    pub const fn is_safe(self) -> bool {
        self.0 >= Self::MIN_SAFE.0 && self.0 <= Self::MAX_SAFE.0
    }

    #[inline]
    pub const fn is_unsafe(self) -> bool {
        !self.is_safe()
    }

    /// Number of bits needed to hold the magnitude.
    ///
    /// Zero needs one bit; [`Int64::MIN_VALUE`] needs all 64.
    pub const fn bit_size_abs(self) -> u32 {
        let bits = u64::BITS.saturating_sub(self.0.unsigned_abs().leading_zeros());
        if bits == 0 {
            1
        } else {
            bits
        }
    }

    /// Three-way comparison as `-1`, `0`, or `1`.
    pub fn compare(self, other: Self) -> i32 {
        match self.cmp(&other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Shift left by `count` modulo 64. Bits shifted out are discarded.
    #[inline]
    pub const fn shift_left(self, count: u32) -> Self {
        Self(self.0.wrapping_shl(count))
    }

    /// Arithmetic (sign-extending) shift right by `count` modulo 64.
    #[inline]
    pub const fn shift_right(self, count: u32) -> Self {
        Self(self.0.wrapping_shr(count))
    }
}

// Bitwise Traits (cannot overflow)

impl BitAnd for Int64 {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitOr for Int64 {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitXor for Int64 {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl Not for Int64 {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self(!self.0)
    }
}

// Conversions

impl From<i64> for Int64 {
    #[inline]
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<i32> for Int64 {
    #[inline]
    fn from(value: i32) -> Self {
        Self(i64::from(value))
    }
}

impl From<Int64> for i64 {
    #[inline]
    fn from(value: Int64) -> Self {
        value.0
    }
}

// Formatting

impl fmt::Debug for Int64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Int64({})", self.0)
    }
}

impl fmt::Display for Int64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(
            self.is_positive(),
            "",
            &crate::render::magnitude_digits(self.0.unsigned_abs(), crate::Radix::DECIMAL),
        )
    }
}
