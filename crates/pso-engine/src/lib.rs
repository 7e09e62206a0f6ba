//! Particle Swarm Optimization engine.
//!
//! A [`Swarm`](algorithms::Swarm) minimizes a caller-supplied objective over a
//! box-bounded search space for a fixed number of iterations. The
//! [`PSOSolver`](algorithms::PSOSolver) wraps the initialize/step loop and
//! records the convergence history.
//!
//! ```rust
//! use pso_engine::algorithms::PSOSolver;
//! use pso_engine::benchmarks::rastrigin;
//! use pso_engine::PsoConfig;
//!
//! let config = PsoConfig { seed: Some(7), ..PsoConfig::default() };
//! let result = PSOSolver::new(config).solve(&rastrigin).unwrap();
//! assert!(result.best_value >= 0.0);
//! ```

pub mod algorithms;
pub mod benchmarks;
pub mod common;
pub mod error;

/// Re-export common types
pub use common::*;
pub use error::{PsoError, PsoResult};
