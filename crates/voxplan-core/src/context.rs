use crate::{domain::ValueDomain, tuple::Tuple};
use std::{collections::BTreeMap, fmt, sync::OnceLock};

///
/// Context
///
/// Immutable bundle of per-attribute restrictions shared by a group of
/// rows and spoken once as a preamble. At most one domain per attribute;
/// domains iterate in attribute-name order, which keeps every rendering
/// and tie-break deterministic.
///
#[derive(Clone, Debug, Default)]
pub struct Context {
    domains: BTreeMap<String, ValueDomain>,
    short: OnceLock<String>,
    spoken: OnceLock<String>,
}

impl Context {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from a domain list; a later domain on the same
    /// attribute replaces the earlier one.
    #[must_use]
    pub fn from_domains(domains: impl IntoIterator<Item = ValueDomain>) -> Self {
        let mut context = Self::new();
        for domain in domains {
            context.restrict(domain);
        }

        context
    }

    /// Fix an attribute to a domain, replacing any prior restriction.
    pub fn restrict(&mut self, domain: ValueDomain) {
        debug_assert!(
            self.short.get().is_none() && self.spoken.get().is_none(),
            "context must not change once rendered"
        );
        self.domains.insert(domain.attribute().to_string(), domain);
    }

    /// Number of fixed attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// True if the context restricts this attribute.
    #[must_use]
    pub fn fixes(&self, attribute: &str) -> bool {
        self.domains.contains_key(attribute)
    }

    /// Domains in attribute-name order.
    pub fn domains(&self) -> impl Iterator<Item = &ValueDomain> {
        self.domains.values()
    }

    /// True if every fixed attribute's value in the tuple satisfies its
    /// domain. The empty context matches everything trivially.
    #[must_use]
    pub fn matches(&self, tuple: &Tuple) -> bool {
        self.domains.iter().all(|(attribute, domain)| {
            tuple
                .value_of(attribute)
                .is_some_and(|value| domain.contains(value))
        })
    }

    /// Literal conjunction of the domains, cached write-once.
    #[must_use]
    pub fn short_text(&self) -> &str {
        self.short
            .get_or_init(|| self.render(ValueDomain::short_text))
    }

    /// Spoken conjunction of the domains, cached write-once.
    #[must_use]
    pub fn spoken_text(&self) -> &str {
        self.spoken
            .get_or_init(|| self.render(ValueDomain::spoken_text))
    }

    fn render(&self, mut phrase: impl FnMut(&ValueDomain) -> String) -> String {
        let parts: Vec<String> = self.domains.values().map(&mut phrase).collect();

        parts.join(" and ")
    }
}

impl PartialEq for Context {
    fn eq(&self, other: &Self) -> bool {
        self.domains == other.domains
    }
}

impl Eq for Context {}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{CategoricalDomain, NumericalDomain},
        value::Value,
    };
    use std::sync::Arc;

    fn schema() -> Arc<[String]> {
        vec!["id".to_string(), "price".to_string(), "cuisine".to_string()].into()
    }

    fn row(id: i32, price: &str, cuisine: &str) -> Tuple {
        Tuple::new(
            schema(),
            vec![Value::int(id), Value::text(price), Value::text(cuisine)],
        )
        .unwrap()
    }

    fn price_low() -> ValueDomain {
        CategoricalDomain::new("price", vec![Value::text("low")]).into()
    }

    fn cuisine_italian() -> ValueDomain {
        CategoricalDomain::new("cuisine", vec![Value::text("Italian")]).into()
    }

    #[test]
    fn one_domain_per_attribute() {
        let mut context = Context::new();
        context.restrict(price_low());
        context.restrict(CategoricalDomain::new("price", vec![Value::text("high")]).into());

        assert_eq!(context.len(), 1);
        assert_eq!(context.short_text(), "high price");
    }

    #[test]
    fn matches_requires_every_domain() {
        let context = Context::from_domains([price_low(), cuisine_italian()]);

        assert!(context.matches(&row(1, "low", "Italian")));
        assert!(!context.matches(&row(2, "low", "Mexican")));
        assert!(!context.matches(&row(3, "high", "Italian")));
    }

    #[test]
    fn empty_context_matches_trivially() {
        assert!(Context::new().matches(&row(1, "low", "Italian")));
    }

    #[test]
    fn renders_conjunction_in_attribute_order() {
        // insertion order reversed; rendering stays attribute-ordered
        let context = Context::from_domains([price_low(), cuisine_italian()]);
        assert_eq!(context.short_text(), "Italian cuisine and low price");
    }

    #[test]
    fn renders_numeric_domains_spoken() {
        let context = Context::from_domains([ValueDomain::from(NumericalDomain::new(
            "price",
            Value::int(100),
            Value::int(200),
        ))]);
        assert_eq!(
            context.spoken_text(),
            "between one hundred and two hundred price"
        );
    }
}
