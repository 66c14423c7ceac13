#![deny(clippy::arithmetic_side_effects)]
//! Int64 Core - exact, overflow-checked signed 64-bit integers.
//!
//! This crate provides:
//! - The `Int64` value type and its constants
//! - Parsing from strings in any radix from 2 to 36, and from host numbers
//! - Radix-aware rendering
//! - Checked arithmetic, bitwise operators, and arithmetic shifts
//! - Structured errors (`Int64Error`) split into type and range categories
//!
//! # Error Model
//!
//! Nothing in this crate wraps silently. Overflow, division by zero, unsafe
//! float conversions, and malformed strings are all reported through
//! `Int64Error`, whose `kind()` tells callers whether the argument had the
//! wrong type or merely a value outside the valid domain.
//!
//! # Example
//!
//! ```
//! use int64_core::{Int64, Radix};
//!
//! let n = Int64::from_str_radix("zz", 36)?;
//! assert_eq!(n.to_string(), "1295");
//! assert_eq!(n.to_string_radix(Radix::HEXADECIMAL), "50f");
//! assert!(Int64::MAX_VALUE.try_add(Int64::ONE).is_err());
//! # Ok::<(), int64_core::Int64Error>(())
//! ```

mod arith;
mod errors;
mod int64;
mod number;
mod parse;
mod radix;
mod render;

pub use errors::{ErrorKind, Int64Error, Int64Result};
pub use int64::Int64;
pub use radix::Radix;
