//! Method and static-function dispatch.
//!
//! Arguments arrive as a slice of host values. Missing arguments are
//! reported as type errors; surplus arguments are ignored.

use int64_core::{Int64, Int64Error, Int64Result};

use crate::args::{coerce_operand, optional_radix, require_uint32};
use crate::construct;
use crate::methods::Method;
use crate::HostValue;

/// Call an instance method by canonical name or alias.
#[tracing::instrument(level = "trace", skip(args), fields(args = args.len()))]
pub fn call_method(receiver: Int64, name: &str, args: &[HostValue]) -> Int64Result<HostValue> {
    let Some(method) = Method::lookup(name) else {
        tracing::debug!(name, "unknown method");
        return Err(Int64Error::UnknownMethod {
            name: name.to_string(),
        });
    };
    invoke(receiver, method, args)
}

/// Invoke a resolved instance method.
pub fn invoke(receiver: Int64, method: Method, args: &[HostValue]) -> Int64Result<HostValue> {
    let operand = || coerce_operand(args.first());
    let shift = || require_uint32(args.first());

    let result: HostValue = match method {
        // Arithmetic
        Method::Add => receiver.try_add(operand()?)?.into(),
        Method::Subtract => receiver.try_sub(operand()?)?.into(),
        Method::Multiply => receiver.try_mul(operand()?)?.into(),
        Method::Divide => receiver.try_div(operand()?)?.into(),
        Method::Modulo => receiver.try_rem(operand()?)?.into(),
        Method::Negate => receiver.try_neg()?.into(),
        Method::Abs => receiver.try_abs()?.into(),

        // Bitwise
        Method::And => (receiver & operand()?).into(),
        Method::Or => (receiver | operand()?).into(),
        Method::Xor => (receiver ^ operand()?).into(),
        Method::Not => (!receiver).into(),
        Method::ShiftLeft => receiver.shift_left(shift()?).into(),
        Method::ShiftRight => receiver.shift_right(shift()?).into(),

        // Comparison
        Method::Equals => (receiver == operand()?).into(),
        Method::NotEquals => (receiver != operand()?).into(),
        Method::GreaterThan => (receiver > operand()?).into(),
        Method::GreaterThanOrEquals => (receiver >= operand()?).into(),
        Method::LessThan => (receiver < operand()?).into(),
        Method::LessThanOrEquals => (receiver <= operand()?).into(),
        Method::Compare => receiver.compare(operand()?).into(),

        // Predicates
        Method::IsEven => receiver.is_even().into(),
        Method::IsOdd => receiver.is_odd().into(),
        Method::IsPositive => receiver.is_positive().into(),
        Method::IsNegative => receiver.is_negative().into(),
        Method::IsZero => receiver.is_zero().into(),
        Method::IsNonZero => receiver.is_non_zero().into(),
        Method::IsSafe => receiver.is_safe().into(),
        Method::IsUnsafe => receiver.is_unsafe().into(),

        // Inspection and conversion
        Method::BitSizeAbs => HostValue::Number(f64::from(receiver.bit_size_abs())),
        Method::High => receiver.high().into(),
        Method::Low => receiver.low().into(),
        Method::ToNumber => receiver.to_f64()?.into(),
        Method::ToNumberUnsafe => receiver.to_f64_lossy().into(),
        Method::ToString => receiver
            .to_string_radix(optional_radix(args.first())?)
            .into(),
    };
    Ok(result)
}

/// Call a static function of the host integer type.
///
/// Constructors return the new integer; `isInstance` returns a boolean.
#[tracing::instrument(level = "trace", skip(args), fields(args = args.len()))]
pub fn call_static(name: &str, args: &[HostValue]) -> Int64Result<HostValue> {
    let arg = |index: usize| args.get(index);
    let value = match name {
        "of" => construct::of(arg(0), arg(1))?,
        "fromNumber" => construct::from_number(arg(0), arg(1))?,
        "fromString" => construct::from_string(arg(0), arg(1), arg(2))?,
        "fromBits" => construct::from_bits(arg(0), arg(1))?,
        "isInstance" => return Ok(construct::is_instance(arg(0)).into()),
        _ => {
            tracing::debug!(name, "unknown static function");
            return Err(Int64Error::UnknownMethod {
                name: name.to_string(),
            });
        }
    };
    Ok(value.into())
}
