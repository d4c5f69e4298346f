//! Error types for the simulator.

use arc_core::PlanError;

/// Errors raised before a simulation run starts.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// The die to simulate violates a structural invariant.
    #[error(transparent)]
    InvalidDie(#[from] PlanError),

    /// A die with no faces cannot be rolled.
    #[error("die '{0}' has no faces")]
    NoFaces(String),

    /// A run of zero rolls has no meaningful statistics.
    #[error("simulation requires at least one roll")]
    NoRolls,
}

/// Convenience result type for simulator operations.
pub type SimResult<T> = Result<T, SimError>;
