use crate::{context::Context, error::CollectionError, value::Value};
use std::{
    fmt,
    sync::{Arc, OnceLock},
};

///
/// Tuple
///
/// One immutable row: an ordered attribute list (shared with its
/// collection) and exactly one value per attribute. Renders itself as
/// "value attribute" pairs, optionally eliding attributes a context fixes.
///
#[derive(Clone, Debug)]
pub struct Tuple {
    attributes: Arc<[String]>,
    values: Vec<Value>,
    short: OnceLock<String>,
}

impl Tuple {
    /// Build a tuple; the value list must align with the attribute list.
    pub fn new(attributes: Arc<[String]>, values: Vec<Value>) -> Result<Self, CollectionError> {
        if attributes.len() != values.len() {
            return Err(CollectionError::ArityMismatch {
                expected: attributes.len(),
                got: values.len(),
            });
        }

        Ok(Self {
            attributes,
            values,
            short: OnceLock::new(),
        })
    }

    #[must_use]
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// The value assigned to an attribute, if the attribute exists.
    #[must_use]
    pub fn value_of(&self, attribute: &str) -> Option<&Value> {
        let index = self.attributes.iter().position(|a| a == attribute)?;

        Some(&self.values[index])
    }

    /// Literal rendering with no elision, cached write-once.
    #[must_use]
    pub fn short_text(&self) -> &str {
        self.short.get_or_init(|| self.render_short(None))
    }

    /// Literal rendering, eliding attributes the context fixes.
    #[must_use]
    pub fn render_short(&self, context: Option<&Context>) -> String {
        self.render(context, Value::short_text)
    }

    /// Spoken rendering, eliding attributes the context fixes.
    #[must_use]
    pub fn render_spoken(&self, context: Option<&Context>) -> String {
        self.render(context, Value::spoken_text)
    }

    fn render(&self, context: Option<&Context>, mut word: impl FnMut(&Value) -> String) -> String {
        let parts: Vec<String> = self
            .attributes
            .iter()
            .zip(&self.values)
            .filter(|(attribute, _)| !context.is_some_and(|c| c.fixes(attribute)))
            .map(|(attribute, value)| format!("{} {attribute}", word(value)))
            .collect();

        parts.join(", ")
    }
}

impl PartialEq for Tuple {
    fn eq(&self, other: &Self) -> bool {
        self.attributes == other.attributes && self.values == other.values
    }
}

impl Eq for Tuple {}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CategoricalDomain;

    fn schema() -> Arc<[String]> {
        vec!["id".to_string(), "price".to_string(), "cuisine".to_string()].into()
    }

    fn row() -> Tuple {
        Tuple::new(
            schema(),
            vec![Value::int(1), Value::text("low"), Value::text("Italian")],
        )
        .unwrap()
    }

    #[test]
    fn rejects_arity_mismatch() {
        let err = Tuple::new(schema(), vec![Value::int(1)]).unwrap_err();
        assert_eq!(err, CollectionError::ArityMismatch { expected: 3, got: 1 });
    }

    #[test]
    fn renders_all_attributes() {
        assert_eq!(row().short_text(), "1 id, low price, Italian cuisine");
    }

    #[test]
    fn elides_context_fixed_attributes() {
        let mut context = Context::new();
        context.restrict(CategoricalDomain::new("price", vec![Value::text("low")]).into());

        assert_eq!(row().render_short(Some(&context)), "1 id, Italian cuisine");
    }

    #[test]
    fn cached_rendering_is_stable() {
        let tuple = row();
        let first = tuple.short_text().to_string();
        assert_eq!(tuple.short_text(), first);
    }

    #[test]
    fn value_lookup() {
        let tuple = row();
        assert_eq!(tuple.value_of("cuisine"), Some(&Value::text("Italian")));
        assert_eq!(tuple.value_of("rating"), None);
    }
}
