//! Conversion to and from host floating-point numbers.
//!
//! Only integers within the safe range (`±(2^53 - 1)`) survive the trip
//! through an `f64` exactly; both directions reject anything else rather
//! than silently losing precision.

use crate::errors::{Int64Error, Int64Result};
use crate::Int64;

/// `2^53 - 1` as a float.
#[expect(
    clippy::cast_precision_loss,
    reason = "2^53 - 1 is exactly representable in f64"
)]
const MAX_SAFE_F64: f64 = Int64::MAX_SAFE.raw() as f64;

impl Int64 {
    /// Convert a host number.
    ///
    /// NaN, infinities, and fractional values are type errors; integers
    /// outside the safe range are range errors.
    pub fn from_f64(value: f64) -> Int64Result<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(Int64Error::NotAnInteger { value });
        }
        if value.abs() > MAX_SAFE_F64 {
            return Err(Int64Error::UnsafeNumber { value });
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "value is integral and within the safe range"
        )]
        let exact = value as i64;
        Ok(Self::new(exact))
    }

    /// Convert to a host number, failing outside the safe range.
    pub fn to_f64(self) -> Int64Result<f64> {
        if self.is_unsafe() {
            return Err(Int64Error::UnsafeConversion { value: self.raw() });
        }
        Ok(self.to_f64_lossy())
    }

    /// Convert to the nearest host number, rounding outside the safe range.
    #[expect(
        clippy::cast_precision_loss,
        reason = "lossy conversion is the point of this method"
    )]
    pub fn to_f64_lossy(self) -> f64 {
        self.raw() as f64
    }
}

impl TryFrom<f64> for Int64 {
    type Error = Int64Error;

    fn try_from(value: f64) -> Int64Result<Self> {
        Self::from_f64(value)
    }
}

impl TryFrom<Int64> for f64 {
    type Error = Int64Error;

    fn try_from(value: Int64) -> Int64Result<Self> {
        value.to_f64()
    }
}
