use thiserror::Error as ThisError;

///
/// ConfigError
///
/// Raised eagerly at tolerance-configuration construction; planners never
/// receive an invalid config.
///
#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum ConfigError {
    #[error("numerical width tolerance must be a non-negative number, got {value}")]
    InvalidWidth { value: f64 },

    #[error("epsilon must be a positive finite number, got {value}")]
    InvalidEpsilon { value: f64 },

    #[error("timeout must be at least one second")]
    ZeroTimeout,
}

///
/// CollectionError
///
/// Raised while ingesting rows into a tuple collection.
///
#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum CollectionError {
    #[error("row has {got} values for {expected} attributes")]
    ArityMismatch { expected: usize, got: usize },

    #[error("non-finite float in column {attribute}")]
    NonFiniteFloat { attribute: String },
}

///
/// PlanningError
///
/// Unexpected internal planner fault. The planning manager degrades these
/// to the naive plan; they never surface as an empty result.
///
#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum PlanningError {
    #[error("planner invariant violated: {message}")]
    Invariant { message: String },
}

impl PlanningError {
    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        Self::Invariant {
            message: message.into(),
        }
    }
}
