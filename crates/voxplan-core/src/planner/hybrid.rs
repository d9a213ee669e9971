use crate::{
    collection::TupleCollection,
    config::ToleranceConfig,
    context::Context,
    error::PlanningError,
    plan::OutputPlan,
    planner::{ContextPruner, Planner, TopKPruner, TupleCoveringPruner, cost, plan_from_contexts},
};
use std::sync::Arc;
use tracing::debug;

///
/// HybridPlanner
///
/// Apriori-style breadth-first context generation with a pluggable
/// pruner: level k extends every surviving level-(k-1) context by one
/// domain on a strictly later attribute, useless contexts (preamble
/// outweighs gross savings) are discarded immediately, and the pruner
/// picks the working set handed to plan assembly.
///
#[derive(Clone)]
pub struct HybridPlanner {
    pruner: Arc<dyn ContextPruner>,
}

impl HybridPlanner {
    #[must_use]
    pub fn new(pruner: Arc<dyn ContextPruner>) -> Self {
        Self { pruner }
    }

    /// Hybrid planning with match-count ranking.
    #[must_use]
    pub fn top_k(keep: usize) -> Self {
        Self::new(Arc::new(TopKPruner::new(keep)))
    }

    /// Hybrid planning with greedy set-cover pruning.
    #[must_use]
    pub fn tuple_covering(keep: usize) -> Self {
        Self::new(Arc::new(TupleCoveringPruner::new(keep)))
    }
}

impl Planner for HybridPlanner {
    fn id(&self) -> String {
        format!("hybrid-{}", self.pruner.name())
    }

    fn plan(
        &self,
        collection: &TupleCollection,
        config: &ToleranceConfig,
    ) -> Result<OutputPlan, PlanningError> {
        if collection.is_empty() {
            return Ok(OutputPlan::empty());
        }

        let survivors = generate_contexts(collection, config);
        debug!(
            survivors = survivors.len(),
            pruner = self.pruner.name(),
            "apriori generation finished"
        );

        let pruned = self.pruner.prune(survivors, collection.tuples());
        let assembled = plan_from_contexts(collection, &pruned);
        let naive = plan_from_contexts(collection, &[]);

        // grouping must never lose to the ungrouped baseline
        if assembled.cost() <= naive.cost() {
            Ok(assembled)
        } else {
            Ok(naive)
        }
    }
}

/// Level-wise candidate generation. A context survives its level when its
/// net savings across all tuples stay positive; only survivors spawn the
/// next level.
fn generate_contexts(collection: &TupleCollection, config: &ToleranceConfig) -> Vec<Context> {
    let candidates = collection.candidate_assignments(config);

    // level frames carry the first attribute index the next extension may use
    let mut current: Vec<(Context, usize)> = vec![(Context::new(), 0)];
    let mut survivors: Vec<Context> = Vec::new();

    for _level in 1..=config.max_context_size {
        let mut next: Vec<(Context, usize)> = Vec::new();

        for (context, start) in &current {
            for attr in *start..candidates.len() {
                for domain in &candidates[attr] {
                    let extended = Context::from_domains(
                        context.domains().cloned().chain([domain.clone()]),
                    );

                    if cost::context_savings(&extended, collection.tuples()) > 0 {
                        next.push((extended, attr + 1));
                    }
                }
            }
        }

        if next.is_empty() {
            break;
        }
        survivors.extend(next.iter().map(|(context, _)| context.clone()));
        current = next;
    }

    survivors
}
