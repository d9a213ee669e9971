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

/// Number of simultaneous constraint types on a context: the one-domain-
/// per-attribute matroid and the context-size knapsack.
const P: usize = 2;

///
/// FantomPlanner
///
/// Discovers one context per round by approximate submodular
/// maximization: a geometric sweep of density thresholds, each driving an
/// iterated greedy over a shrinking domain pool, each greedy result
/// refined by a bidirectional local search. The outer loop mirrors the
/// greedy planner: assemble after every discovered context, keep the
/// cheapest plan.
///
/// Knapsack weights are uniform, so a domain's density is its marginal
/// utility.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct FantomPlanner;

impl Planner for FantomPlanner {
    fn id(&self) -> String {
        "greedy-FANTOM".to_string()
    }

    fn plan(
        &self,
        collection: &TupleCollection,
        config: &ToleranceConfig,
    ) -> Result<OutputPlan, PlanningError> {
        if collection.is_empty() {
            return Ok(OutputPlan::empty());
        }

        let universe: Vec<ValueDomain> = collection
            .candidate_assignments(config)
            .into_iter()
            .flatten()
            .collect();

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

            let Some((context, utility)) = discover_context(&universe, &unmatched, config) else {
                break;
            };
            if utility <= 0 {
                break;
            }

            debug!(round, utility, context = %context, "fantom picked context");
            chosen.push(context);
            plans.push(plan_from_contexts(collection, &chosen));
        }

        plans
            .into_iter()
            .min_by_key(OutputPlan::cost)
            .ok_or_else(|| PlanningError::invariant("fantom produced no plans"))
    }
}

/// Net savings of a domain set's context against the given tuples.
fn utility(domains: &[ValueDomain], tuples: &[&Tuple]) -> isize {
    if domains.is_empty() {
        return 0;
    }

    let context = Context::from_domains(domains.iter().cloned());
    cost::context_savings(&context, tuples.iter().copied())
}

/// One FANTOM discovery pass: sweep density thresholds geometrically,
/// collect every greedy and locally-refined set, return the best.
fn discover_context(
    universe: &[ValueDomain],
    tuples: &[&Tuple],
    config: &ToleranceConfig,
) -> Option<(Context, isize)> {
    if universe.is_empty() || config.max_context_size == 0 {
        return None;
    }

    let singleton_best = universe
        .iter()
        .map(|d| utility(std::slice::from_ref(d), tuples))
        .max()?;
    if singleton_best <= 0 {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let m = singleton_best as f64;
    let gamma = 2.0 * P as f64 * m / (((P + 1) * (2 * P + 1)) as f64);
    let limit = gamma * universe.len() as f64;

    let mut best: Option<(Vec<ValueDomain>, isize)> = None;
    let mut rho = gamma;
    while rho <= limit {
        for set in iterated_greedy(universe, tuples, rho, config.max_context_size) {
            let score = utility(&set, tuples);
            if best.as_ref().is_none_or(|(_, s)| score > *s) {
                best = Some((set, score));
            }
        }
        rho *= 1.0 + config.epsilon;
    }

    let (domains, score) = best?;
    if domains.is_empty() {
        return None;
    }

    Some((Context::from_domains(domains), score))
}

/// Run the density-threshold greedy `P + 2` times over a shrinking pool,
/// refining each result with the unconstrained local search. Returns
/// every produced set; the caller scores them.
fn iterated_greedy(
    universe: &[ValueDomain],
    tuples: &[&Tuple],
    rho: f64,
    max_size: usize,
) -> Vec<Vec<ValueDomain>> {
    let mut pool: Vec<ValueDomain> = universe.to_vec();
    let mut produced = Vec::new();

    for _ in 0..P + 2 {
        let set = greedy_with_density(&pool, tuples, rho, max_size);
        if set.is_empty() {
            break;
        }

        produced.push(local_search(&set, tuples));
        pool.retain(|d| !set.contains(d));
        produced.push(set);
    }

    produced
}

/// Greedy set construction under a density floor: repeatedly add the
/// domain with the best marginal utility among those whose attribute is
/// still free and whose marginal meets the threshold, up to the size
/// bound. If the best unconstrained singleton beats the built set, the
/// singleton wins.
fn greedy_with_density(
    pool: &[ValueDomain],
    tuples: &[&Tuple],
    rho: f64,
    max_size: usize,
) -> Vec<ValueDomain> {
    let mut set: Vec<ValueDomain> = Vec::new();
    let mut current = 0isize;

    while set.len() < max_size {
        let mut step: Option<(usize, isize)> = None;
        for (index, domain) in pool.iter().enumerate() {
            if set.iter().any(|d| d.attribute() == domain.attribute()) {
                continue;
            }

            let mut extended = set.clone();
            extended.push(domain.clone());
            let marginal = utility(&extended, tuples) - current;
            #[allow(clippy::cast_precision_loss)]
            if (marginal as f64) < rho {
                continue;
            }
            if step.is_none_or(|(_, m)| marginal > m) {
                step = Some((index, marginal));
            }
        }

        let Some((index, marginal)) = step else {
            break;
        };
        set.push(pool[index].clone());
        current += marginal;
    }

    // an all-at-once singleton can beat a density-throttled set
    let singleton = pool
        .iter()
        .max_by_key(|d| utility(std::slice::from_ref(*d), tuples));
    if let Some(singleton) = singleton {
        let singleton_utility = utility(std::slice::from_ref(singleton), tuples);
        if singleton_utility > current {
            return vec![singleton.clone()];
        }
    }

    set
}

/// Deterministic bidirectional local search: every candidate moves to
/// whichever side of an accept/reject split has the better marginal, and
/// the accept side is returned.
fn local_search(set: &[ValueDomain], tuples: &[&Tuple]) -> Vec<ValueDomain> {
    let mut accept: Vec<ValueDomain> = Vec::new();
    let mut reject: Vec<ValueDomain> = set.to_vec();

    for domain in set {
        let mut grown = accept.clone();
        grown.push(domain.clone());
        let add_gain = utility(&grown, tuples) - utility(&accept, tuples);

        let shrunk: Vec<ValueDomain> = reject.iter().filter(|d| *d != domain).cloned().collect();
        let drop_gain = utility(&shrunk, tuples) - utility(&reject, tuples);

        if add_gain >= drop_gain {
            accept = grown;
        } else {
            reject = shrunk;
        }
    }

    accept
}
