//! Precondition errors for swarm construction

use thiserror::Error;

/// A configuration that violates one of the engine's preconditions.
///
/// These are caller bugs: the engine refuses to start rather than coerce
/// the input into something runnable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PsoError {
    /// The swarm must contain at least one particle
    #[error("particle count must be positive")]
    NoParticles,

    /// The search space must have at least one dimension
    #[error("dimension must be positive")]
    NoDimensions,

    /// Bounds must be finite with low < high
    #[error("invalid bounds: low ({low}) must be finite and strictly below high ({high})")]
    InvalidBounds { low: f64, high: f64 },

    /// Inertia, cognitive and social weights must be finite
    #[error("coefficient {name} must be finite, got {value}")]
    NonFiniteCoefficient { name: &'static str, value: f64 },

    /// The objective returned NaN for a particle's position
    #[error("objective returned NaN for particle {particle} at iteration {iteration}")]
    NanObjective { particle: usize, iteration: usize },
}

pub type PsoResult<T> = Result<T, PsoError>;
