//! Plan assembly shared by every context-selecting planner.
//!
//! One implementation of "assign each tuple to its best context and build
//! scopes" keeps the strategies from re-deriving near-identical logic and
//! keeps their tie-breaks identical.

use crate::{
    collection::TupleCollection,
    context::Context,
    plan::OutputPlan,
    planner::cost,
    scope::Scope,
    tuple::Tuple,
};

/// Build a plan from an ordered candidate-context list.
///
/// Tuples matched by at least one context go to the single context with
/// the largest per-tuple savings; ties resolve to the earliest candidate
/// in list order, which keeps assembly deterministic. Unmatched tuples
/// form one contextless leftover scope, spoken first.
pub(crate) fn plan_from_contexts(
    collection: &TupleCollection,
    contexts: &[Context],
) -> OutputPlan {
    if collection.is_empty() {
        return OutputPlan::empty();
    }

    let mut assigned: Vec<Vec<Tuple>> = vec![Vec::new(); contexts.len()];
    let mut leftovers: Vec<Tuple> = Vec::new();

    for tuple in collection.tuples() {
        match best_context_for(tuple, contexts) {
            Some(index) => assigned[index].push(tuple.clone()),
            None => leftovers.push(tuple.clone()),
        }
    }

    let mut scopes = Vec::with_capacity(contexts.len() + 1);
    if !leftovers.is_empty() {
        scopes.push(Scope::contextless(leftovers));
    }
    for (context, tuples) in contexts.iter().zip(assigned) {
        if !tuples.is_empty() {
            scopes.push(Scope::with_context(context.clone(), tuples));
        }
    }

    OutputPlan::new(scopes)
}

/// Index of the matching context with the largest per-tuple savings;
/// earliest wins ties. `None` when no context matches.
fn best_context_for(tuple: &Tuple, contexts: &[Context]) -> Option<usize> {
    let mut best: Option<(usize, isize)> = None;

    for (index, context) in contexts.iter().enumerate() {
        if !context.matches(tuple) {
            continue;
        }

        let savings = cost::tuple_savings(tuple, context);
        if best.is_none_or(|(_, s)| savings > s) {
            best = Some((index, savings));
        }
    }

    best.map(|(index, _)| index)
}
