use crate::{
    collection::TupleCollection,
    config::ToleranceConfig,
    context::Context,
    domain::ValueDomain,
    error::PlanningError,
    plan::OutputPlan,
    planner::{Planner, cost, plan_from_contexts},
    tuple::Tuple,
};
use tracing::debug;

///
/// GreedyPlanner
///
/// Repeatedly add the single best new context for the still-unmatched
/// tuples, re-assemble, and keep the cheapest plan seen. Work per round
/// is bounded by the context-size tolerance; rounds are bounded by half
/// the tuple count.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPlanner;

impl Planner for GreedyPlanner {
    fn id(&self) -> String {
        "greedy".to_string()
    }

    fn plan(
        &self,
        collection: &TupleCollection,
        config: &ToleranceConfig,
    ) -> Result<OutputPlan, PlanningError> {
        if collection.is_empty() {
            return Ok(OutputPlan::empty());
        }

        let candidates = collection.candidate_assignments(config);
        let mut chosen: Vec<Context> = Vec::new();
        let mut plans = vec![plan_from_contexts(collection, &chosen)];

        for round in 0..collection.tuple_count() / 2 {
            let unmatched: Vec<&Tuple> = collection
                .tuples()
                .iter()
                .filter(|t| !chosen.iter().any(|c| c.matches(t)))
                .collect();
            if unmatched.is_empty() {
                break;
            }

            let Some((context, savings)) =
                best_context(&candidates, &unmatched, config.max_context_size)
            else {
                break;
            };
            if savings <= 0 {
                break;
            }

            debug!(round, savings, context = %context, "greedy picked context");
            chosen.push(context);
            plans.push(plan_from_contexts(collection, &chosen));
        }

        // first minimum wins, so the naive baseline survives ties
        plans
            .into_iter()
            .min_by_key(OutputPlan::cost)
            .ok_or_else(|| PlanningError::invariant("greedy produced no plans"))
    }
}

/// Best context of bounded size over the candidate universe, scored by
/// net savings against the given tuples.
///
/// Contexts are enumerated with an explicit work-stack: frames carry the
/// picked domains and the next attribute index, so attribute indices are
/// strictly increasing, every attribute contributes at most one domain,
/// and the search never recurses.
fn best_context(
    candidates: &[Vec<ValueDomain>],
    tuples: &[&Tuple],
    max_size: usize,
) -> Option<(Context, isize)> {
    if max_size == 0 {
        return None;
    }

    let mut best: Option<(Context, isize)> = None;
    let mut stack: Vec<(usize, Vec<ValueDomain>)> = vec![(0, Vec::new())];

    while let Some((start, picked)) = stack.pop() {
        for attr in start..candidates.len() {
            for domain in &candidates[attr] {
                let mut domains = picked.clone();
                domains.push(domain.clone());

                let context = Context::from_domains(domains.iter().cloned());
                let savings = cost::context_savings(&context, tuples.iter().copied());
                if best.as_ref().is_none_or(|(_, s)| savings > *s) {
                    best = Some((context, savings));
                }

                if domains.len() < max_size {
                    stack.push((attr + 1, domains));
                }
            }
        }
    }

    best
}
