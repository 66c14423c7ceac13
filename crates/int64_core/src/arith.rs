//! Checked arithmetic.
//!
//! Every operator computes the exact mathematical result and fails with a
//! range error when it does not fit in 64 bits. Division truncates toward
//! zero; the remainder takes the sign of the dividend.

use crate::errors::{Int64Error, Int64Result};
use crate::Int64;

impl Int64 {
    /// Checked addition.
    #[inline]
    pub fn try_add(self, rhs: Self) -> Int64Result<Self> {
        self.raw()
            .checked_add(rhs.raw())
            .map(Self::new)
            .ok_or(Int64Error::overflow("addition"))
    }

    /// Checked subtraction.
    #[inline]
    pub fn try_sub(self, rhs: Self) -> Int64Result<Self> {
        self.raw()
            .checked_sub(rhs.raw())
            .map(Self::new)
            .ok_or(Int64Error::overflow("subtraction"))
    }

    /// Checked multiplication.
    #[inline]
    pub fn try_mul(self, rhs: Self) -> Int64Result<Self> {
        self.raw()
            .checked_mul(rhs.raw())
            .map(Self::new)
            .ok_or(Int64Error::overflow("multiplication"))
    }

    /// Truncating division.
    ///
    /// Fails on a zero divisor and on `MIN_VALUE / -1`, the only quotient
    /// that does not fit.
    pub fn try_div(self, rhs: Self) -> Int64Result<Self> {
        if rhs.is_zero() {
            return Err(Int64Error::DivisionByZero);
        }
        self.raw()
            .checked_div(rhs.raw())
            .map(Self::new)
            .ok_or(Int64Error::overflow("division"))
    }

    /// Truncating remainder, signed like the dividend.
    ///
    /// `MIN_VALUE % -1` is zero: the remainder exists even though the
    /// matching quotient overflows.
    pub fn try_rem(self, rhs: Self) -> Int64Result<Self> {
        if rhs.is_zero() {
            return Err(Int64Error::DivisionByZero);
        }
        if rhs == Self::NEG_ONE {
            return Ok(Self::ZERO);
        }
        self.raw()
            .checked_rem(rhs.raw())
            .map(Self::new)
            .ok_or(Int64Error::overflow("remainder"))
    }

    /// Checked negation. Fails only for `MIN_VALUE`.
    #[inline]
    pub fn try_neg(self) -> Int64Result<Self> {
        self.raw()
            .checked_neg()
            .map(Self::new)
            .ok_or(Int64Error::overflow("negation"))
    }

    /// Checked absolute value. Fails only for `MIN_VALUE`.
    #[inline]
    pub fn try_abs(self) -> Int64Result<Self> {
        self.raw()
            .checked_abs()
            .map(Self::new)
            .ok_or(Int64Error::overflow("absolute value"))
    }
}
