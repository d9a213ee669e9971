//! Leading-digit rounding for synthetic numeric boundaries.
//!
//! Inserting 123 into a numeric column also indexes 100 and 200, so range
//! candidates can snap to round bucket edges the data itself never hits.

use crate::{
    types::{Float32, Float64},
    value::Value,
};
use num_traits::Float;

/// The two leading-significant-digit roundings of a numeric value, in the
/// value's own variant. `None` for text.
#[must_use]
pub fn leading_digit_bounds(value: &Value) -> Option<(Value, Value)> {
    match value {
        Value::Int(n) => {
            let (down, up) = round_integer(*n);

            Some((Value::Int(down), Value::Int(up)))
        }
        Value::Float32(v) => {
            let (down, up) = round_float(v.get());

            Some((
                Value::Float32(Float32::try_new(down).unwrap_or(*v)),
                Value::Float32(Float32::try_new(up).unwrap_or(*v)),
            ))
        }
        Value::Float64(v) => {
            let (down, up) = round_float(v.get());

            Some((
                Value::Float64(Float64::try_new(down).unwrap_or(*v)),
                Value::Float64(Float64::try_new(up).unwrap_or(*v)),
            ))
        }
        Value::Text(_) => None,
    }
}

fn round_integer(n: i64) -> (i64, i64) {
    if n == 0 {
        return (0, 0);
    }

    let magnitude = i128::from(n).unsigned_abs();
    let mut base: u128 = 1;
    while magnitude / base >= 10 {
        base *= 10;
    }
    let digit = magnitude / base;
    let down = digit * base;
    let up = (digit + 1) * base;

    if n > 0 {
        (clamp_i64(down), clamp_i64(up))
    } else {
        (-clamp_i64(up), -clamp_i64(down))
    }
}

#[allow(clippy::cast_possible_truncation)]
fn clamp_i64(magnitude: u128) -> i64 {
    if magnitude > i64::MAX as u128 {
        i64::MAX
    } else {
        magnitude as i64
    }
}

fn round_float<F: Float>(v: F) -> (F, F) {
    if v == F::zero() {
        return (v, v);
    }

    let ten = F::from(10.0).unwrap_or_else(F::one);
    let magnitude = v.abs();
    let base = ten.powf(magnitude.log10().floor());
    let mut digit = (magnitude / base).floor();

    // log10 imprecision can push the quotient outside a single digit
    if digit < F::one() {
        digit = F::one();
    }
    if digit >= ten {
        digit = ten - F::one();
    }

    let down = digit * base;
    let up = (digit + F::one()) * base;

    if v > F::zero() { (down, up) } else { (-up, -down) }
}
