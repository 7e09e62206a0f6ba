use crate::error::{PsoError, PsoResult};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// A position in the search space together with its objective value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub position: Array1<f64>,
    pub value: f64,
}

impl Candidate {
    pub fn new(position: Array1<f64>, value: f64) -> Self {
        Self { position, value }
    }
}

/// Defines the objective to minimize.
///
/// Implementations must be deterministic and total over the search space:
/// the swarm calls `objective` once per particle per iteration and never
/// expects it to fail.
pub trait Problem {
    fn objective(&self, variables: &Array1<f64>) -> f64;
}

impl<F> Problem for F
where
    F: Fn(&Array1<f64>) -> f64,
{
    fn objective(&self, variables: &Array1<f64>) -> f64 {
        self(variables)
    }
}

/// Box bounds applied to every dimension of the initial draw.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub low: f64,
    pub high: f64,
}

impl Bounds {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, x: f64) -> bool {
        self.low <= x && x <= self.high
    }
}

/// Velocity update weights.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    /// Inertia: share of the previous velocity kept
    pub w: f64,
    /// Cognitive: pull toward the particle's own best
    pub c1: f64,
    /// Social: pull toward the swarm's best
    pub c2: f64,
}

/// How the `r1`/`r2` factors of the velocity update are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoefficientSampling {
    /// Fresh `r1, r2` for every dimension of every particle.
    #[default]
    PerDimension,
    /// One `r1, r2` pair per particle per step, shared by all dimensions.
    PerParticle,
}

/// Configuration for a swarm run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PsoConfig {
    pub n_particles: usize,
    pub n_iterations: usize,
    pub dim: usize,
    pub bounds: Bounds,
    pub coefficients: Coefficients,
    #[serde(default)]
    pub sampling: CoefficientSampling,
    /// Fixed seed for reproducible runs; `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for PsoConfig {
    /// 2-D Rastrigin setup: 30 particles, 100 iterations over [-5.12, 5.12].
    fn default() -> Self {
        Self {
            n_particles: 30,
            n_iterations: 100,
            dim: 2,
            bounds: Bounds::new(-5.12, 5.12),
            coefficients: Coefficients {
                w: 0.5,
                c1: 1.5,
                c2: 1.5,
            },
            sampling: CoefficientSampling::PerDimension,
            seed: None,
        }
    }
}

impl PsoConfig {
    /// Check every precondition the swarm relies on.
    pub fn validate(&self) -> PsoResult<()> {
        if self.n_particles == 0 {
            return Err(PsoError::NoParticles);
        }
        if self.dim == 0 {
            return Err(PsoError::NoDimensions);
        }

        let Bounds { low, high } = self.bounds;
        // `!(low < high)` also rejects NaN
        if !low.is_finite() || !high.is_finite() || !(low < high) {
            return Err(PsoError::InvalidBounds { low, high });
        }

        let Coefficients { w, c1, c2 } = self.coefficients;
        for (name, value) in [("w", w), ("c1", c1), ("c2", c2)] {
            if !value.is_finite() {
                return Err(PsoError::NonFiniteCoefficient { name, value });
            }
        }
        Ok(())
    }
}

/// The result of an optimization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub best_position: Array1<f64>,
    pub best_value: f64,
    /// Global best value after each completed iteration.
    pub history: Vec<f64>,
}
