//! Rastrigin PSO runner
//!
//! Drives the [`pso_engine`] swarm on the Rastrigin benchmark and turns the
//! final global best into a printable [`Report`].
//!
//! ```rust
//! use pso_engine::PsoConfig;
//!
//! let config = PsoConfig { seed: Some(1), ..PsoConfig::default() };
//! let report = pso_rastrigin::run(&config).unwrap();
//! assert!(report.best_value >= 0.0);
//! println!("{}", report);
//! ```

pub mod report;

pub use report::Report;

use pso_engine::algorithms::PSOSolver;
use pso_engine::benchmarks::rastrigin;
use pso_engine::{PsoConfig, PsoResult};
use tracing::info;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

/// Minimize Rastrigin with the given swarm configuration.
pub fn run(config: &PsoConfig) -> PsoResult<Report> {
    info!(
        n_particles = config.n_particles,
        n_iterations = config.n_iterations,
        dim = config.dim,
        "Running PSO on Rastrigin"
    );
    let result = PSOSolver::new(config.clone()).solve(&rastrigin)?;
    Ok(Report::from(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pso_engine::PsoError;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_run_propagates_config_errors() {
        let config = PsoConfig {
            dim: 0,
            ..PsoConfig::default()
        };
        assert_eq!(run(&config).unwrap_err(), PsoError::NoDimensions);
    }
}
