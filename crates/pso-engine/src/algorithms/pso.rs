use crate::common::{
    Bounds, Candidate, CoefficientSampling, Coefficients, OptimizationResult, Problem, PsoConfig,
};
use crate::error::{PsoError, PsoResult};
use ndarray::Array1;
use rand::prelude::*;
use rand::rngs::StdRng;
use tracing::{debug, info, trace};

/// One swarm member: where it is, how it moves, and the best it has seen.
#[derive(Clone, Debug)]
pub struct Particle {
    position: Array1<f64>,
    velocity: Array1<f64>,
    best: Candidate,
}

impl Particle {
    fn new(position: Array1<f64>, velocity: Array1<f64>, value: f64) -> Self {
        let best = Candidate::new(position.clone(), value);
        Self { position, velocity, best }
    }

    pub fn position(&self) -> &Array1<f64> {
        &self.position
    }

    pub fn velocity(&self) -> &Array1<f64> {
        &self.velocity
    }

    pub fn personal_best(&self) -> &Candidate {
        &self.best
    }

    /// Keep `fitness` as the personal best if it strictly improves.
    fn record(&mut self, fitness: f64) {
        if fitness < self.best.value {
            self.best.value = fitness;
            self.best.position.assign(&self.position);
        }
    }

    /// Velocity/position update against a fixed global best.
    fn accelerate<R: Rng + ?Sized>(
        &mut self,
        coefficients: Coefficients,
        sampling: CoefficientSampling,
        global_best: &Array1<f64>,
        rng: &mut R,
    ) {
        let Coefficients { w, c1, c2 } = coefficients;
        let shared = match sampling {
            CoefficientSampling::PerParticle => Some((rng.gen::<f64>(), rng.gen::<f64>())),
            CoefficientSampling::PerDimension => None,
        };

        for k in 0..self.position.len() {
            let (r1, r2) = match shared {
                Some(pair) => pair,
                None => (rng.gen::<f64>(), rng.gen::<f64>()),
            };
            let x = self.position[k];

            let inertia = w * self.velocity[k];
            let cognitive = c1 * r1 * (self.best.position[k] - x);
            let social = c2 * r2 * (global_best[k] - x);

            self.velocity[k] = inertia + cognitive + social;
            // Positions are never clamped back into the initial bounds
            self.position[k] += self.velocity[k];
        }
    }
}

/// The full swarm state for one run.
///
/// Created once by [`Swarm::initialize`], mutated in place by every
/// [`Swarm::step`]. The population size never changes.
#[derive(Clone, Debug)]
pub struct Swarm {
    particles: Vec<Particle>,
    global_best: Candidate,
    coefficients: Coefficients,
    sampling: CoefficientSampling,
    rng: StdRng,
    iteration: usize,
}

impl Swarm {
    /// Scatter the particles uniformly over the bounds and score them.
    ///
    /// Positions are drawn from `U(low, high)` and velocities from `U(-1, 1)`,
    /// independently per particle and dimension. Each particle starts as its
    /// own personal best; the global best is the lowest of those, first
    /// occurrence winning ties.
    pub fn initialize<P: Problem + ?Sized>(config: &PsoConfig, problem: &P) -> PsoResult<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let dim = config.dim;
        let Bounds { low, high } = config.bounds;

        // Interpolated rather than `low + u * (high - low)`, which overflows for wide bounds
        let positions: Vec<Array1<f64>> = (0..config.n_particles)
            .map(|_| {
                Array1::from_shape_fn(dim, |_| {
                    let u: f64 = rng.gen();
                    (low * (1.0 - u) + high * u).clamp(low, high)
                })
            })
            .collect();
        let velocities: Vec<Array1<f64>> = (0..config.n_particles)
            .map(|_| Array1::from_shape_fn(dim, |_| rng.gen_range(-1.0..1.0)))
            .collect();

        let particles = positions
            .into_iter()
            .zip(velocities)
            .enumerate()
            .map(|(particle, (position, velocity))| {
                let value = problem.objective(&position);
                if value.is_nan() {
                    return Err(PsoError::NanObjective {
                        particle,
                        iteration: 0,
                    });
                }
                Ok(Particle::new(position, velocity, value))
            })
            .collect::<PsoResult<Vec<Particle>>>()?;

        let global_best = particles[find_best(&particles)].best.clone();

        info!(
            n_particles = config.n_particles,
            dim,
            initial_best = global_best.value,
            "Swarm initialized"
        );

        Ok(Self {
            particles,
            global_best,
            coefficients: config.coefficients,
            sampling: config.sampling,
            rng,
            iteration: 0,
        })
    }

    /// Run one iteration.
    ///
    /// Pass 1 scores every particle and refreshes personal bests, then the
    /// global best. Pass 2 moves every particle against that global best,
    /// which stays fixed for the whole pass.
    ///
    /// A NaN score aborts the step before any state changes.
    pub fn step<P: Problem + ?Sized>(&mut self, problem: &P) -> PsoResult<()> {
        let scores: Vec<f64> = self
            .particles
            .iter()
            .map(|particle| problem.objective(&particle.position))
            .collect();
        if let Some(particle) = scores.iter().position(|value| value.is_nan()) {
            return Err(PsoError::NanObjective {
                particle,
                iteration: self.iteration + 1,
            });
        }
        for (particle, fitness) in self.particles.iter_mut().zip(scores) {
            particle.record(fitness);
        }

        let candidate = &self.particles[find_best(&self.particles)].best;
        if candidate.value < self.global_best.value {
            trace!(
                iteration = self.iteration,
                from = self.global_best.value,
                to = candidate.value,
                "Global best improved"
            );
            self.global_best = candidate.clone();
        }

        let coefficients = self.coefficients;
        let sampling = self.sampling;
        let global_best = &self.global_best.position;
        for particle in &mut self.particles {
            particle.accelerate(coefficients, sampling, global_best, &mut self.rng);
        }

        self.iteration += 1;
        Ok(())
    }

    /// Global best position and value.
    pub fn best(&self) -> (&Array1<f64>, f64) {
        (&self.global_best.position, self.global_best.value)
    }

    pub fn global_best(&self) -> &Candidate {
        &self.global_best
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of completed `step` calls.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn into_best(self) -> Candidate {
        self.global_best
    }
}

/// Index of the lowest personal best, first occurrence on ties.
fn find_best(particles: &[Particle]) -> usize {
    let mut best_idx = 0;
    for (i, particle) in particles.iter().enumerate() {
        if particle.best.value < particles[best_idx].best.value {
            best_idx = i;
        }
    }
    best_idx
}

/// Runs a [`Swarm`] for a fixed iteration budget.
pub struct PSOSolver {
    pub config: PsoConfig,
}

impl PSOSolver {
    pub fn new(config: PsoConfig) -> Self {
        Self { config }
    }

    pub fn solve<P: Problem + ?Sized>(&self, problem: &P) -> PsoResult<OptimizationResult> {
        let mut swarm = Swarm::initialize(&self.config, problem)?;
        let max_iterations = self.config.n_iterations;
        let mut history = Vec::with_capacity(max_iterations);

        for iter in 0..max_iterations {
            if iter % 10 == 0 {
                debug!(
                    "PSO Solver: Iteration {}/{} (best {})",
                    iter,
                    max_iterations,
                    swarm.global_best().value
                );
            }
            swarm.step(problem)?;
            history.push(swarm.global_best().value);
        }

        let best = swarm.into_best();
        info!(
            iterations = max_iterations,
            best_value = best.value,
            "PSO Solver finished"
        );

        Ok(OptimizationResult {
            best_position: best.position,
            best_value: best.value,
            history,
        })
    }
}
