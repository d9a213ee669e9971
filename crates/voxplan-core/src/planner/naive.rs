use crate::{
    collection::TupleCollection,
    config::ToleranceConfig,
    error::PlanningError,
    plan::OutputPlan,
    planner::Planner,
    scope::Scope,
};

///
/// NaivePlanner
///
/// One contextless scope with every tuple spoken in full. O(n), always
/// terminates, and doubles as the zero-context baseline other planners
/// measure savings against.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct NaivePlanner;

impl NaivePlanner {
    /// The naive plan, infallibly. The planning manager relies on this
    /// when substituting a fallback.
    #[must_use]
    pub fn naive_plan(collection: &TupleCollection) -> OutputPlan {
        if collection.is_empty() {
            return OutputPlan::empty();
        }

        OutputPlan::new(vec![Scope::contextless(collection.tuples().to_vec())])
    }
}

impl Planner for NaivePlanner {
    fn id(&self) -> String {
        "naive".to_string()
    }

    fn plan(
        &self,
        collection: &TupleCollection,
        _config: &ToleranceConfig,
    ) -> Result<OutputPlan, PlanningError> {
        Ok(Self::naive_plan(collection))
    }
}
