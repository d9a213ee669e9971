use crate::{
    collection::TupleCollection,
    config::ToleranceConfig,
    plan::OutputPlan,
    planner::{NaivePlanner, Planner},
};
use std::{
    sync::{Arc, mpsc},
    thread,
    time::{Duration, Instant},
};
use tracing::warn;

///
/// FallbackReason
///
/// Why a planning invocation degraded to the naive plan.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FallbackReason {
    /// The planner missed the configured deadline.
    Timeout,
    /// The planner returned an error or its worker died.
    Failed,
}

///
/// PlanningResult
///
/// Outcome envelope of one managed planning invocation: the plan, the
/// planner that was asked for it, how long the call took, and what input
/// shape it ran against. `fallback` is set when the naive plan was
/// substituted.
///
#[derive(Clone, Debug)]
pub struct PlanningResult {
    pub plan: OutputPlan,
    pub planner: String,
    pub elapsed: Duration,
    pub tuple_count: usize,
    pub config: ToleranceConfig,
    pub fallback: Option<FallbackReason>,
}

impl PlanningResult {
    /// True when the returned plan came from the requested planner.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.fallback.is_none()
    }
}

///
/// PlanningManager
///
/// The only place deadlines and fallback exist: one planner invocation
/// runs on a worker thread while the caller blocks on a bounded wait. On
/// expiry or failure the worker's result is discarded — never merged —
/// and a fresh naive plan substitutes it, so a speakable output always
/// comes back.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct PlanningManager;

impl PlanningManager {
    /// Run one planner under the config's deadline.
    #[must_use]
    pub fn run(
        planner: &Arc<dyn Planner>,
        collection: &Arc<TupleCollection>,
        config: &ToleranceConfig,
    ) -> PlanningResult {
        let started = Instant::now();
        let planner_id = planner.id();

        let (sender, receiver) = mpsc::channel();
        let worker_planner = Arc::clone(planner);
        let worker_collection = Arc::clone(collection);
        let worker_config = config.clone();

        let spawned = thread::Builder::new()
            .name("voxplan-planner".to_string())
            .spawn(move || {
                let outcome = worker_planner.plan(&worker_collection, &worker_config);
                // the caller may have timed out and dropped the receiver
                let _ = sender.send(outcome);
            });

        let outcome = match spawned {
            Ok(_handle) => match receiver.recv_timeout(config.timeout()) {
                Ok(Ok(plan)) => Ok(plan),
                Ok(Err(err)) => {
                    warn!(planner = planner_id.as_str(), %err, "planner failed");
                    Err(FallbackReason::Failed)
                }
                Err(mpsc::RecvTimeoutError::Timeout) => {
                    warn!(planner = planner_id.as_str(), "planner deadline expired");
                    Err(FallbackReason::Timeout)
                }
                Err(mpsc::RecvTimeoutError::Disconnected) => {
                    warn!(planner = planner_id.as_str(), "planner worker died");
                    Err(FallbackReason::Failed)
                }
            },
            Err(err) => {
                warn!(planner = planner_id.as_str(), %err, "planner worker did not start");
                Err(FallbackReason::Failed)
            }
        };

        let (plan, fallback) = match outcome {
            Ok(plan) => (plan, None),
            Err(reason) => (NaivePlanner::naive_plan(collection), Some(reason)),
        };

        PlanningResult {
            plan,
            planner: planner_id,
            elapsed: started.elapsed(),
            tuple_count: collection.tuple_count(),
            config: config.clone(),
            fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        collection::{SourceCell, TupleCollection},
        error::PlanningError,
        planner::GreedyPlanner,
    };

    fn collection() -> Arc<TupleCollection> {
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

        Arc::new(collection)
    }

    fn config(timeout_seconds: u64) -> ToleranceConfig {
        ToleranceConfig::new(2, 2.0, 2, timeout_seconds, 0.1).unwrap()
    }

    /// Planner stub that never returns within any practical deadline.
    struct StallingPlanner;

    impl Planner for StallingPlanner {
        fn id(&self) -> String {
            "stalling".to_string()
        }

        fn plan(
            &self,
            _collection: &TupleCollection,
            _config: &ToleranceConfig,
        ) -> Result<OutputPlan, PlanningError> {
            thread::sleep(Duration::from_secs(3600));
            Ok(OutputPlan::empty())
        }
    }

    /// Planner stub that fails outright.
    struct FaultyPlanner;

    impl Planner for FaultyPlanner {
        fn id(&self) -> String {
            "faulty".to_string()
        }

        fn plan(
            &self,
            _collection: &TupleCollection,
            _config: &ToleranceConfig,
        ) -> Result<OutputPlan, PlanningError> {
            Err(PlanningError::invariant("intentional test fault"))
        }
    }

    /// Planner stub that panics on its worker thread.
    struct PanickingPlanner;

    impl Planner for PanickingPlanner {
        fn id(&self) -> String {
            "panicking".to_string()
        }

        fn plan(
            &self,
            _collection: &TupleCollection,
            _config: &ToleranceConfig,
        ) -> Result<OutputPlan, PlanningError> {
            panic!("intentional test panic");
        }
    }

    #[test]
    fn completes_within_deadline() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("voxplan_core=debug")
            .with_test_writer()
            .try_init();

        let planner: Arc<dyn Planner> = Arc::new(GreedyPlanner);
        let result = PlanningManager::run(&planner, &collection(), &config(30));

        assert!(result.completed());
        assert_eq!(result.planner, "greedy");
        assert_eq!(result.tuple_count, 3);
    }

    #[test]
    fn timeout_substitutes_the_naive_plan() {
        let source = collection();
        let planner: Arc<dyn Planner> = Arc::new(StallingPlanner);
        let result = PlanningManager::run(&planner, &source, &config(1));

        assert_eq!(result.fallback, Some(FallbackReason::Timeout));
        assert_eq!(result.plan, NaivePlanner::naive_plan(&source));
        assert_eq!(result.planner, "stalling");
        assert!(result.elapsed >= Duration::from_secs(1));
    }

    #[test]
    fn failure_substitutes_the_naive_plan() {
        let source = collection();
        let planner: Arc<dyn Planner> = Arc::new(FaultyPlanner);
        let result = PlanningManager::run(&planner, &source, &config(5));

        assert_eq!(result.fallback, Some(FallbackReason::Failed));
        assert_eq!(result.plan, NaivePlanner::naive_plan(&source));
    }

    #[test]
    fn worker_panic_substitutes_the_naive_plan() {
        let source = collection();
        let planner: Arc<dyn Planner> = Arc::new(PanickingPlanner);
        let result = PlanningManager::run(&planner, &source, &config(5));

        assert_eq!(result.fallback, Some(FallbackReason::Failed));
        assert_eq!(result.plan, NaivePlanner::naive_plan(&source));
    }
}
