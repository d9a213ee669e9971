use crate::value::Value;

///
/// CategoricalDomain
///
/// Explicit finite value set for one attribute. The value list is ordered
/// and never empty; duplicates are tolerated but carry no meaning. The
/// rendering depends on list order and size: one value reads "X attr",
/// two read "X or Y attr", more read as a comma list with a final "or".
///
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CategoricalDomain {
    attribute: String,
    values: Vec<Value>,
}

impl CategoricalDomain {
    /// Build a domain over a non-empty, ordered value list.
    #[must_use]
    pub fn new(attribute: impl Into<String>, values: Vec<Value>) -> Self {
        debug_assert!(!values.is_empty(), "categorical domain needs values");

        Self {
            attribute: attribute.into(),
            values,
        }
    }

    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// True if the value is one of the permitted values.
    #[must_use]
    pub fn contains(&self, value: &Value) -> bool {
        self.values.iter().any(|v| v == value)
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
        let words: Vec<String> = self.values.iter().map(&mut word).collect();

        let list = match words.as_slice() {
            [] => String::new(),
            [only] => only.clone(),
            [head @ .., last] => format!("{} or {last}", head.join(", ")),
        };

        format!("{list} {}", self.attribute)
    }
}
