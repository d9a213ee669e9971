//! ## Crate layout
//! - `core`: value/domain model, rendering, candidate generation,
//!   planning strategies, and the planning manager.
//!
//! The `prelude` module mirrors the vocabulary surface callers use when
//! wiring a data source to a narration consumer.

pub use voxplan_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::{
        manager::{FallbackReason, PlanningManager, PlanningResult},
        planner::{
            ContextPruner, FantomPlanner, GreedyPlanner, HybridPlanner, NaivePlanner, Planner,
            TopKPruner, TupleCoveringPruner,
        },
        prelude::*,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use std::sync::Arc;

    #[test]
    fn end_to_end_through_the_facade() {
        let mut collection = TupleCollection::new(vec![
            "id".to_string(),
            "price".to_string(),
            "cuisine".to_string(),
        ]);
        for (id, price, cuisine) in
            [(1, "low", "Italian"), (2, "low", "Italian"), (3, "high", "Mexican")]
        {
            collection
                .push_row(vec![
                    SourceCell::from(id),
                    SourceCell::from(price),
                    SourceCell::from(cuisine),
                ])
                .unwrap();
        }

        let config = ToleranceConfig::default();
        let planner: Arc<dyn Planner> = Arc::new(GreedyPlanner);
        let result = PlanningManager::run(&planner, &Arc::new(collection), &config);

        assert!(result.completed());
        assert!(!result.plan.spoken_text().is_empty());
        assert!(result.plan.speech_cost() > 0);
    }
}
