use crate::{context::Context, tuple::Tuple};
use std::cmp::Reverse;

///
/// ContextPruner
///
/// Reduces the surviving Apriori candidates to a working set before plan
/// assembly. Pruners are pure and deterministic; ties resolve to the
/// earlier candidate.
///
pub trait ContextPruner: Send + Sync {
    /// Stable pruner name, spliced into the hybrid planner id.
    fn name(&self) -> &'static str;

    /// Select the contexts worth assembling into scopes.
    fn prune(&self, candidates: Vec<Context>, tuples: &[Tuple]) -> Vec<Context>;
}

///
/// TopKPruner
///
/// Rank candidates by raw tuple-match count and keep the best k.
///
#[derive(Clone, Copy, Debug)]
pub struct TopKPruner {
    keep: usize,
}

impl TopKPruner {
    #[must_use]
    pub const fn new(keep: usize) -> Self {
        Self { keep }
    }
}

impl ContextPruner for TopKPruner {
    fn name(&self) -> &'static str {
        "top-k"
    }

    fn prune(&self, candidates: Vec<Context>, tuples: &[Tuple]) -> Vec<Context> {
        let mut ranked: Vec<(usize, Context)> = candidates
            .into_iter()
            .map(|context| {
                let matched = tuples.iter().filter(|t| context.matches(t)).count();

                (matched, context)
            })
            .collect();

        // stable sort keeps insertion order among equal match counts
        ranked.sort_by_key(|(matched, _)| Reverse(*matched));
        ranked
            .into_iter()
            .take(self.keep)
            .map(|(_, context)| context)
            .collect()
    }
}

///
/// TupleCoveringPruner
///
/// Greedy weighted set cover: repeatedly keep the candidate matching the
/// most still-uncovered tuples, remove what it covers, and stop at k
/// selections or full coverage.
///
#[derive(Clone, Copy, Debug)]
pub struct TupleCoveringPruner {
    keep: usize,
}

impl TupleCoveringPruner {
    #[must_use]
    pub const fn new(keep: usize) -> Self {
        Self { keep }
    }
}

impl ContextPruner for TupleCoveringPruner {
    fn name(&self) -> &'static str {
        "tuple-covering"
    }

    fn prune(&self, candidates: Vec<Context>, tuples: &[Tuple]) -> Vec<Context> {
        let mut uncovered: Vec<&Tuple> = tuples.iter().collect();
        let mut remaining: Vec<Context> = candidates;
        let mut kept = Vec::new();

        while kept.len() < self.keep && !uncovered.is_empty() && !remaining.is_empty() {
            let mut best: Option<(usize, usize)> = None;
            for (index, context) in remaining.iter().enumerate() {
                let covered = uncovered.iter().filter(|t| context.matches(t)).count();
                if best.is_none_or(|(_, c)| covered > c) {
                    best = Some((index, covered));
                }
            }

            let Some((index, covered)) = best else {
                break;
            };
            if covered == 0 {
                break;
            }

            let winner = remaining.remove(index);
            uncovered.retain(|t| !winner.matches(t));
            kept.push(winner);
        }

        kept
    }
}
