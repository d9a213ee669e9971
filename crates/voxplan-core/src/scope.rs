use crate::{context::Context, tuple::Tuple, value::spell_integer};

///
/// Scope
///
/// One rendered group: an optional context plus the tuples assigned to
/// it. With a context, every tuple must satisfy `context.matches`;
/// contextless scopes hold leftover rows spoken in full.
///
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Scope {
    context: Option<Context>,
    tuples: Vec<Tuple>,
}

impl Scope {
    /// Leftover scope with no shared preamble.
    #[must_use]
    pub const fn contextless(tuples: Vec<Tuple>) -> Self {
        Self {
            context: None,
            tuples,
        }
    }

    /// Context-bearing scope; every tuple must match the context.
    #[must_use]
    pub fn with_context(context: Context, tuples: Vec<Tuple>) -> Self {
        debug_assert!(
            tuples.iter().all(|t| context.matches(t)),
            "scope tuple escapes its context"
        );

        Self {
            context: Some(context),
            tuples,
        }
    }

    #[must_use]
    pub const fn context(&self) -> Option<&Context> {
        self.context.as_ref()
    }

    #[must_use]
    pub fn tuples(&self) -> &[Tuple] {
        &self.tuples
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Literal rendering used for cost estimation.
    #[must_use]
    pub fn short_text(&self) -> String {
        self.render(
            |n| n.to_string(),
            |c| c.short_text().to_string(),
            Tuple::render_short,
        )
    }

    /// Spoken rendering used for narration.
    #[must_use]
    pub fn spoken_text(&self) -> String {
        self.render(
            |n| spell_integer(n as i128),
            |c| c.spoken_text().to_string(),
            Tuple::render_spoken,
        )
    }

    fn render(
        &self,
        count: impl Fn(usize) -> String,
        preamble: impl Fn(&Context) -> String,
        row: impl Fn(&Tuple, Option<&Context>) -> String,
    ) -> String {
        let rows: Vec<String> = self
            .tuples
            .iter()
            .map(|t| row(t, self.context.as_ref()))
            .collect();
        let rows = rows.join("; ");

        match &self.context {
            Some(context) => {
                let noun = if self.tuples.len() == 1 {
                    "entry"
                } else {
                    "entries"
                };

                format!(
                    "{} {noun} with {}: {rows}",
                    count(self.tuples.len()),
                    preamble(context)
                )
            }
            None => rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::CategoricalDomain, value::Value};
    use std::sync::Arc;

    fn schema() -> Arc<[String]> {
        vec!["id".to_string(), "cuisine".to_string()].into()
    }

    fn row(id: i32, cuisine: &str) -> Tuple {
        Tuple::new(schema(), vec![Value::int(id), Value::text(cuisine)]).unwrap()
    }

    fn italian() -> Context {
        Context::from_domains([
            CategoricalDomain::new("cuisine", vec![Value::text("Italian")]).into(),
        ])
    }

    #[test]
    fn contextless_scope_renders_rows() {
        let scope = Scope::contextless(vec![row(1, "Italian"), row(2, "Thai")]);
        assert_eq!(scope.short_text(), "1 id, Italian cuisine; 2 id, Thai cuisine");
    }

    #[test]
    fn context_scope_renders_preamble_and_elides() {
        let scope = Scope::with_context(italian(), vec![row(1, "Italian"), row(2, "Italian")]);
        assert_eq!(
            scope.short_text(),
            "2 entries with Italian cuisine: 1 id; 2 id"
        );
    }

    #[test]
    fn singular_entry_noun() {
        let scope = Scope::with_context(italian(), vec![row(1, "Italian")]);
        assert_eq!(scope.short_text(), "1 entry with Italian cuisine: 1 id");
    }

    #[test]
    fn spoken_form_spells_the_count() {
        let scope = Scope::with_context(italian(), vec![row(1, "Italian"), row(2, "Italian")]);
        assert_eq!(
            scope.spoken_text(),
            "two entries with Italian cuisine: one id; two id"
        );
    }
}
