use crate::value::{Value, numeric_cmp};
use std::cmp::Ordering;

///
/// NumericalDomain
///
/// Inclusive numeric range for one attribute. Bounds are numeric values;
/// a misordered pair is swapped at construction. Width is the ratio of
/// the bounds, used to cap candidate generation.
///
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NumericalDomain {
    attribute: String,
    lower: Value,
    upper: Value,
}

impl NumericalDomain {
    /// Build a range over two numeric bounds, swapping if misordered.
    #[must_use]
    pub fn new(attribute: impl Into<String>, a: Value, b: Value) -> Self {
        let (lower, upper) = match numeric_cmp(&a, &b) {
            Some(Ordering::Greater) => (b, a),
            _ => (a, b),
        };

        Self {
            attribute: attribute.into(),
            lower,
            upper,
        }
    }

    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    #[must_use]
    pub const fn lower(&self) -> &Value {
        &self.lower
    }

    #[must_use]
    pub const fn upper(&self) -> &Value {
        &self.upper
    }

    /// True if the value lies inside the inclusive bounds.
    ///
    /// Non-numeric values are never contained.
    #[must_use]
    pub fn contains(&self, value: &Value) -> bool {
        let Some(low) = numeric_cmp(value, &self.lower) else {
            return false;
        };
        let Some(high) = numeric_cmp(value, &self.upper) else {
            return false;
        };

        low != Ordering::Less && high != Ordering::Greater
    }

    /// Ratio width of the range.
    ///
    /// The ratio `upper / lower` is undefined around zero, so the width
    /// convention is: equal bounds have width 1; strictly positive ranges
    /// use `upper / lower`; strictly negative ranges use the magnitude
    /// ratio `|lower| / |upper|`; ranges touching or straddling zero are
    /// infinitely wide and only survive an unbounded width tolerance.
    #[must_use]
    pub fn width(&self) -> f64 {
        let (Some(lower), Some(upper)) = (self.lower.as_f64(), self.upper.as_f64()) else {
            return f64::INFINITY;
        };

        if lower == upper {
            1.0
        } else if lower > 0.0 {
            upper / lower
        } else if upper < 0.0 {
            lower.abs() / upper.abs()
        } else {
            f64::INFINITY
        }
    }

    #[must_use]
    pub fn short_text(&self) -> String {
        self.render(Value::short_text)
    }

    #[must_use]
    pub fn spoken_text(&self) -> String {
        self.render(Value::spoken_text)
    }

    fn render(&self, mut word: impl FnMut(&Value) -> String) -> String {
        if self.lower == self.upper {
            return format!("{} {}", word(&self.lower), self.attribute);
        }

        format!(
            "between {} and {} {}",
            word(&self.lower),
            word(&self.upper),
            self.attribute
        )
    }
}
