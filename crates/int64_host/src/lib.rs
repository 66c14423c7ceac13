//! Int64 Host - the dynamically typed surface of `int64_core`.
//!
//! A scripting runtime hands arguments over without static types. This crate
//! validates them, maps them onto `Int64` operations, and reports failures
//! with the same two error categories the core uses:
//!
//! - Static constructors (`of`, `fromNumber`, `fromString`, `fromBits`) with
//!   optional fallback defaults, plus `isInstance` and named constants.
//! - Instance methods by canonical name or alias (`plus`, `div`, `shl`, ...).
//!
//! # Tracing
//!
//! Dispatch is instrumented with `tracing`. Call [`init_tracing`] once at
//! startup to print spans and events when `RUST_LOG` is set, e.g.
//! `RUST_LOG=int64_host=debug` to see default substitutions.

mod args;
mod construct;
mod dispatch;
mod methods;
mod value;

use std::sync::Once;

pub use construct::{constant, from_bits, from_number, from_string, is_instance, of};
pub use dispatch::{call_method, call_static, invoke};
pub use int64_core::{ErrorKind, Int64, Int64Error, Int64Result, Radix};
pub use methods::Method;
pub use value::HostValue;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing from the `RUST_LOG` environment variable.
///
/// Does nothing when `RUST_LOG` is unset. Safe to call more than once; only
/// the first call installs a subscriber.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
