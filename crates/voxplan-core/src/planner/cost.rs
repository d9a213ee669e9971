//! Shared character-cost model.
//!
//! Planners optimize the literal (short-form) rendering length; the
//! spoken form is what narration consumers receive, but its length moves
//! with the short form closely enough to serve as the proxy target.

use crate::{context::Context, tuple::Tuple};

/// Fixed framing characters a context scope adds around its preamble:
/// the entry count ("2 entries with "), the colon separator and the
/// scope separator in the plan rendering.
const SCOPE_FRAMING: usize = "2 entries with ".len() + ": ".len() + ". ".len();

/// Characters spent speaking the tuple with no context.
pub(crate) fn tuple_cost(tuple: &Tuple) -> usize {
    tuple.short_text().chars().count()
}

/// Characters spent speaking the tuple under a context's elision.
pub(crate) fn tuple_cost_under(tuple: &Tuple, context: &Context) -> usize {
    tuple.render_short(Some(context)).chars().count()
}

/// Characters saved by speaking the tuple under the context.
pub(crate) fn tuple_savings(tuple: &Tuple, context: &Context) -> isize {
    tuple_cost(tuple) as isize - tuple_cost_under(tuple, context) as isize
}

/// Characters the context costs once per scope: its rendered conjunction
/// plus the scope framing.
pub(crate) fn context_overhead(context: &Context) -> usize {
    context.short_text().chars().count() + SCOPE_FRAMING
}

/// Net character savings of grouping every matching tuple under the
/// context. Negative when the preamble outweighs the elision.
pub(crate) fn context_savings<'a>(
    context: &Context,
    tuples: impl IntoIterator<Item = &'a Tuple>,
) -> isize {
    let gross: isize = tuples
        .into_iter()
        .filter(|t| context.matches(t))
        .map(|t| tuple_savings(t, context))
        .sum();

    gross - context_overhead(context) as isize
}
