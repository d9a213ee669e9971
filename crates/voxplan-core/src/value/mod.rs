mod compare;
mod speech;
mod tag;

#[cfg(test)]
mod tests;

use crate::types::{Float32, Float64};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

// re-exports
pub use compare::{canonical_cmp, numeric_cmp};
pub use speech::{spell_decimal, spell_integer};
pub use tag::ValueTag;

///
/// Value
///
/// Immutable tagged scalar produced once per source cell and shared by
/// reference afterwards. Equality implies identical tag and payload;
/// ordering is tag rank first, then natural order within the tag, so
/// mixed-type collections group by type.
///
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Value {
    Float32(Float32),
    Float64(Float64),
    Int(i64),
    Text(String),
}

impl Value {
    /// Build an integer value from a 32-bit source cell.
    #[must_use]
    pub const fn int(n: i32) -> Self {
        Self::Int(n as i64)
    }

    /// Build a text value from a source cell.
    #[must_use]
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Build a 32-bit float value; `None` for non-finite payloads.
    #[must_use]
    pub fn float32(v: f32) -> Option<Self> {
        Float32::try_new(v).map(Self::Float32)
    }

    /// Build a 64-bit float value; `None` for non-finite payloads.
    #[must_use]
    pub fn float64(v: f64) -> Option<Self> {
        Float64::try_new(v).map(Self::Float64)
    }

    /// Stable variant tag.
    #[must_use]
    pub const fn tag(&self) -> ValueTag {
        tag::canonical_tag(self)
    }

    /// True for the numeric variants.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Float32(_) | Self::Float64(_) | Self::Int(_))
    }

    /// Finite numeric payload promoted to f64; `None` for text.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float32(v) => Some(f64::from(v.get())),
            Self::Float64(v) => Some(v.get()),
            #[allow(clippy::cast_precision_loss)]
            Self::Int(n) => Some(*n as f64),
            Self::Text(_) => None,
        }
    }

    /// Literal rendering: digits for numbers, the text itself for text.
    #[must_use]
    pub fn short_text(&self) -> String {
        match self {
            Self::Float32(v) => v.to_string(),
            Self::Float64(v) => v.to_string(),
            Self::Int(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }

    /// Spoken rendering: numbers expanded to English words.
    #[must_use]
    pub fn spoken_text(&self) -> String {
        match self {
            Self::Float32(_) | Self::Float64(_) => speech::spell_decimal(&self.short_text()),
            Self::Int(n) => speech::spell_integer(i128::from(*n)),
            Self::Text(s) => s.clone(),
        }
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        canonical_cmp(self, other)
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_text())
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::text(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}
