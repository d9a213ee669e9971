use crate::scope::Scope;
use std::{fmt, sync::OnceLock};

///
/// OutputPlan
///
/// Ordered scope list with memoized renderings. Contextless scopes are
/// spoken first, then the context-bearing ones. All inputs are immutable,
/// so each rendering is computed at most once per plan instance.
///
#[derive(Clone, Debug, Default)]
pub struct OutputPlan {
    scopes: Vec<Scope>,
    short: OnceLock<String>,
    spoken: OnceLock<String>,
}

impl OutputPlan {
    /// Empty plan: no scopes, zero cost.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn new(scopes: Vec<Scope>) -> Self {
        Self {
            scopes,
            short: OnceLock::new(),
            spoken: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.iter().all(Scope::is_empty)
    }

    /// Literal rendering, cached write-once.
    #[must_use]
    pub fn short_text(&self) -> &str {
        self.short.get_or_init(|| self.render(Scope::short_text))
    }

    /// Spoken rendering, cached write-once.
    #[must_use]
    pub fn spoken_text(&self) -> &str {
        self.spoken.get_or_init(|| self.render(Scope::spoken_text))
    }

    /// Planning proxy cost: character count of the literal rendering.
    #[must_use]
    pub fn cost(&self) -> usize {
        self.short_text().chars().count()
    }

    /// Narration cost: character count of the spoken rendering.
    #[must_use]
    pub fn speech_cost(&self) -> usize {
        self.spoken_text().chars().count()
    }

    fn render(&self, scope_text: impl Fn(&Scope) -> String) -> String {
        let contextless = self
            .scopes
            .iter()
            .filter(|s| s.context().is_none() && !s.is_empty());
        let contextful = self
            .scopes
            .iter()
            .filter(|s| s.context().is_some() && !s.is_empty());

        let parts: Vec<String> = contextless.chain(contextful).map(|s| scope_text(s)).collect();
        if parts.is_empty() {
            return String::new();
        }

        let mut text = parts.join(". ");
        text.push('.');

        text
    }
}

impl PartialEq for OutputPlan {
    fn eq(&self, other: &Self) -> bool {
        self.scopes == other.scopes
    }
}

impl Eq for OutputPlan {}

impl fmt::Display for OutputPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_text())
    }
}
