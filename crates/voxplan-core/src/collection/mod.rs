mod candidates;
mod rounding;


use crate::{error::CollectionError, tuple::Tuple, value::Value};
use std::{collections::BTreeSet, sync::Arc};

// re-exports
pub use rounding::leading_digit_bounds;

///
/// SourceCell
///
/// Typed scalar as delivered by the data-source collaborator; converts
/// into a `Value` during row ingestion. Float cells must be finite.
///
#[derive(Clone, Debug, PartialEq)]
pub enum SourceCell {
    Int(i32),
    Float32(f32),
    Float64(f64),
    Text(String),
}

impl From<i32> for SourceCell {
    fn from(n: i32) -> Self {
        Self::Int(n)
    }
}

impl From<f32> for SourceCell {
    fn from(v: f32) -> Self {
        Self::Float32(v)
    }
}

impl From<f64> for SourceCell {
    fn from(v: f64) -> Self {
        Self::Float64(v)
    }
}

impl From<&str> for SourceCell {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for SourceCell {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

///
/// AttributeKind
///
/// A column is numerical while every observed value is numeric and flips
/// to categorical (permanently) once a text value arrives.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AttributeKind {
    Numerical,
    Categorical,
}

///
/// ColumnIndex
///
/// Per-attribute distinct-value bookkeeping. Observed values feed
/// categorical candidates; observed plus synthetic rounded boundaries
/// feed numerical candidates, so a kind flip never leaks synthetic
/// numbers into categorical candidates.
///
#[derive(Clone, Debug, Default)]
struct ColumnIndex {
    text_seen: bool,
    observed: BTreeSet<Value>,
    boundaries: BTreeSet<Value>,
}

impl ColumnIndex {
    fn kind(&self) -> AttributeKind {
        if self.text_seen {
            AttributeKind::Categorical
        } else {
            AttributeKind::Numerical
        }
    }

    fn insert(&mut self, value: &Value) {
        if let Some((down, up)) = rounding::leading_digit_bounds(value) {
            self.boundaries.insert(down);
            self.boundaries.insert(up);
        } else {
            self.text_seen = true;
        }

        self.observed.insert(value.clone());
    }
}

///
/// TupleCollection
///
/// The row store: an ordered attribute list (attribute 0 is the primary
/// key and never appears in candidate domains), tuples in insertion
/// order, and incrementally maintained distinct-value indices. Built once
/// per query result; append-only afterwards.
///
#[derive(Clone, Debug, Default)]
pub struct TupleCollection {
    attributes: Arc<[String]>,
    tuples: Vec<Tuple>,
    columns: Vec<ColumnIndex>,
}

impl TupleCollection {
    #[must_use]
    pub fn new(attributes: Vec<String>) -> Self {
        let columns = attributes.iter().map(|_| ColumnIndex::default()).collect();

        Self {
            attributes: attributes.into(),
            tuples: Vec::new(),
            columns,
        }
    }

    #[must_use]
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    #[must_use]
    pub fn tuples(&self) -> &[Tuple] {
        &self.tuples
    }

    #[must_use]
    pub fn tuple_count(&self) -> usize {
        self.tuples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty() || self.attributes.is_empty()
    }

    /// Current kind of an attribute column.
    #[must_use]
    pub fn attribute_kind(&self, index: usize) -> AttributeKind {
        self.columns[index].kind()
    }

    /// Distinct observed values of an attribute, in canonical order.
    pub fn distinct_values(&self, index: usize) -> impl Iterator<Item = &Value> {
        self.columns[index].observed.iter()
    }

    /// Synthetic rounded boundary values of an attribute.
    pub fn boundary_values(&self, index: usize) -> impl Iterator<Item = &Value> {
        self.columns[index].boundaries.iter()
    }

    /// Ingest one source row; cells align positionally with attributes.
    pub fn push_row(
        &mut self,
        cells: impl IntoIterator<Item = SourceCell>,
    ) -> Result<(), CollectionError> {
        let values = cells
            .into_iter()
            .enumerate()
            .map(|(index, cell)| self.cell_value(index, cell))
            .collect::<Result<Vec<_>, _>>()?;

        let tuple = Tuple::new(Arc::clone(&self.attributes), values)?;
        self.add_tuple(tuple)
    }

    /// Append one tuple and update the distinct-value indices.
    pub fn add_tuple(&mut self, tuple: Tuple) -> Result<(), CollectionError> {
        if tuple.values().len() != self.attributes.len() {
            return Err(CollectionError::ArityMismatch {
                expected: self.attributes.len(),
                got: tuple.values().len(),
            });
        }

        for (column, value) in self.columns.iter_mut().zip(tuple.values()) {
            column.insert(value);
        }
        self.tuples.push(tuple);

        Ok(())
    }

    fn cell_value(&self, index: usize, cell: SourceCell) -> Result<Value, CollectionError> {
        let non_finite = || CollectionError::NonFiniteFloat {
            attribute: self
                .attributes
                .get(index)
                .cloned()
                .unwrap_or_else(|| index.to_string()),
        };

        match cell {
            SourceCell::Int(n) => Ok(Value::int(n)),
            SourceCell::Float32(v) => Value::float32(v).ok_or_else(non_finite),
            SourceCell::Float64(v) => Value::float64(v).ok_or_else(non_finite),
            SourceCell::Text(s) => Ok(Value::Text(s)),
        }
    }
}
