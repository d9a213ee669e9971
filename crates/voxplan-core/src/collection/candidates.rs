//! Bounded candidate-domain generation.
//!
//! The per-attribute output is the search universe every planner draws
//! from; its size is combinatorial in the distinct-value count, so the
//! tolerance bounds are applied during enumeration, never after
//! materializing a full power set.

use crate::{
    collection::{AttributeKind, TupleCollection},
    config::ToleranceConfig,
    domain::{CategoricalDomain, NumericalDomain, ValueDomain},
    value::{Value, canonical_cmp, numeric_cmp},
};
use std::cmp::Ordering;
use tracing::warn;

/// Hard per-attribute ceiling on generated candidates. Pathological
/// cardinalities truncate deterministically instead of exhausting memory.
pub const MAX_CANDIDATES_PER_ATTRIBUTE: usize = 10_000;

impl TupleCollection {
    /// Candidate value domains per attribute index. The primary key
    /// (attribute 0) always yields an empty list.
    ///
    /// Categorical attributes contribute every non-empty subset of their
    /// distinct values up to `max_categorical_size`, in index order.
    /// Numerical attributes contribute every ordered bound pair over
    /// observed and synthetic boundary values whose width stays within
    /// `max_numerical_width`.
    #[must_use]
    pub fn candidate_assignments(&self, config: &ToleranceConfig) -> Vec<Vec<ValueDomain>> {
        (0..self.attributes().len())
            .map(|index| {
                if index == 0 {
                    Vec::new()
                } else {
                    self.attribute_candidates(index, config)
                }
            })
            .collect()
    }

    fn attribute_candidates(&self, index: usize, config: &ToleranceConfig) -> Vec<ValueDomain> {
        let attribute = &self.attributes()[index];

        let candidates = match self.attribute_kind(index) {
            AttributeKind::Categorical => categorical_candidates(
                attribute,
                &self.distinct_values(index).cloned().collect::<Vec<_>>(),
                config.max_categorical_size,
            ),
            AttributeKind::Numerical => {
                let mut values: Vec<Value> = self
                    .distinct_values(index)
                    .chain(self.boundary_values(index))
                    .cloned()
                    .collect();
                values.sort_by(|a, b| {
                    numeric_cmp(a, b).unwrap_or(Ordering::Equal).then_with(|| canonical_cmp(a, b))
                });
                values.dedup();

                numerical_candidates(attribute, &values, config.max_numerical_width)
            }
        };

        if candidates.len() >= MAX_CANDIDATES_PER_ATTRIBUTE {
            warn!(
                attribute = attribute.as_str(),
                cap = MAX_CANDIDATES_PER_ATTRIBUTE,
                "candidate generation truncated"
            );
        }

        candidates
    }
}

/// Every non-empty k-combination of `values` with `k <= max_size`,
/// enumerated lexicographically over value indices.
fn categorical_candidates(
    attribute: &str,
    values: &[Value],
    max_size: usize,
) -> Vec<ValueDomain> {
    let mut out = Vec::new();
    let cap = max_size.min(values.len());

    for size in 1..=cap {
        // explicit index stack; no recursion
        let mut picks: Vec<usize> = (0..size).collect();
        loop {
            let subset: Vec<Value> = picks.iter().map(|&i| values[i].clone()).collect();
            out.push(CategoricalDomain::new(attribute, subset).into());
            if out.len() >= MAX_CANDIDATES_PER_ATTRIBUTE {
                return out;
            }
            if !next_combination(&mut picks, values.len()) {
                break;
            }
        }
    }

    out
}

/// Advance `picks` to the next lexicographic k-combination of `0..n`.
/// Returns false once the last combination has been produced.
fn next_combination(picks: &mut [usize], n: usize) -> bool {
    let k = picks.len();

    let mut slot = k;
    while slot > 0 {
        slot -= 1;
        if picks[slot] < n - (k - slot) {
            picks[slot] += 1;
            for later in slot + 1..k {
                picks[later] = picks[later - 1] + 1;
            }
            return true;
        }
    }

    false
}

/// Every bound pair `(values[i], values[j])` with `i <= j` whose ratio
/// width stays within the tolerance.
fn numerical_candidates(attribute: &str, values: &[Value], max_width: f64) -> Vec<ValueDomain> {
    let mut out = Vec::new();

    for (i, lower) in values.iter().enumerate() {
        for upper in &values[i..] {
            let domain = NumericalDomain::new(attribute, lower.clone(), upper.clone());
            if domain.width() <= max_width {
                out.push(domain.into());
                if out.len() >= MAX_CANDIDATES_PER_ATTRIBUTE {
                    return out;
                }
            }
        }
    }

    out
}
