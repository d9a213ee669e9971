//! Core engine for Voxplan: the value and domain model, spoken-text
//! rendering, bounded candidate generation, the planning strategies, and
//! the deadline-enforcing planning manager.
//!
//! A relational result set rarely needs every attribute repeated for
//! every row: rows sharing attribute values can be spoken once under a
//! shared context preamble. Planners search the bounded candidate space
//! of such contexts for the cheapest total rendering; the naive
//! one-scope rendering is both the baseline they must beat and the
//! fallback the manager substitutes on a deadline miss.

// public exports are one module level down
pub mod collection;
pub mod config;
pub mod context;
pub mod domain;
pub mod error;
pub mod manager;
pub mod plan;
pub mod planner;
pub mod scope;
pub mod tuple;
pub mod types;
pub mod value;

///
/// Prelude
///
/// Prelude contains only domain vocabulary; planners and the manager are
/// imported from their modules.
///

pub mod prelude {
    pub use crate::{
        collection::{SourceCell, TupleCollection},
        config::ToleranceConfig,
        context::Context,
        domain::{CategoricalDomain, NumericalDomain, ValueDomain},
        plan::OutputPlan,
        scope::Scope,
        tuple::Tuple,
        value::Value,
    };
}
