use crate::value::{Value, tag};
use std::cmp::Ordering;

/// Total canonical comparator used by index and rendering surfaces.
///
/// Ordering rules:
/// 1. Canonical variant rank
/// 2. Variant-specific comparison for same-ranked values
///
/// Mixed-variant comparisons are rank-only and must remain deterministic.
#[must_use]
pub fn canonical_cmp(left: &Value, right: &Value) -> Ordering {
    let rank = tag::canonical_rank(left).cmp(&tag::canonical_rank(right));
    if rank != Ordering::Equal {
        return rank;
    }

    canonical_cmp_same_rank(left, right)
}

/// Cross-variant numeric comparator used by numerical domains.
///
/// Returns `None` when either side is non-numeric. Numeric variants are
/// compared through f64 promotion so an `Int` bound can cover a `Float64`
/// value and vice versa.
#[must_use]
pub fn numeric_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    let (a, b) = (left.as_f64()?, right.as_f64()?);

    // safe: as_f64 only yields finite payloads
    Some(a.partial_cmp(&b).unwrap())
}

fn canonical_cmp_same_rank(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Float32(a), Value::Float32(b)) => a.cmp(b),
        (Value::Float64(a), Value::Float64(b)) => a.cmp(b),
        (Value::Int(a), Value::Int(b)) => a.cmp(b),
        (Value::Text(a), Value::Text(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}
