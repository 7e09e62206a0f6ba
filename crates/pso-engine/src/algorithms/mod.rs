pub mod pso;

pub use pso::{PSOSolver, Particle, Swarm};
