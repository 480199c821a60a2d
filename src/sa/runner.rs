//! Annealing loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::AnnealConfig;
use super::types::{RunHistory, RunResult, Termination};
use crate::distance::{City, DistanceMatrix, DistanceModel};
use crate::error::AnnealResult;
use crate::neighbor::NeighborPolicy;
use crate::reheat::ReheatController;
use crate::route::{identity_route, route_cost};

/// Outer iterations between progress log lines.
const PROGRESS_INTERVAL: usize = 10_000;

/// Upper bound on history rows reserved up front.
const HISTORY_RESERVE_CAP: usize = 1 << 20;

fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Metropolis acceptance probability for a non-improving move, clamped to
/// `[0, 1]`. 0 when `temperature <= 0` or the ratio is not a number.
pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if temperature <= 0.0 {
        return 0.0;
    }
    let p = (-delta / temperature).exp();
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Mutable state of one run.
struct SearchState {
    current: Vec<usize>,
    current_cost: f64,
    best: Vec<usize>,
    best_cost: f64,
    /// Trials since the last new best.
    stagnation: usize,
    accepted_moves: usize,
    improving_moves: usize,
}

impl SearchState {
    fn new(route: Vec<usize>, cost: f64) -> Self {
        Self {
            best: route.clone(),
            best_cost: cost,
            current: route,
            current_cost: cost,
            stagnation: 0,
            accepted_moves: 0,
            improving_moves: 0,
        }
    }

    /// One proposal + Metropolis test at `temperature`.
    fn trial<R: Rng>(
        &mut self,
        policy: &NeighborPolicy,
        matrix: &DistanceMatrix,
        temperature: f64,
        rng: &mut R,
    ) {
        let candidate = policy.propose(&self.current, rng);
        let cost = route_cost(&candidate, matrix);
        self.consider(candidate, cost, temperature, rng);
    }

    /// Metropolis test of `candidate` (with tour cost `cost`) and the
    /// stagnation bookkeeping. Only a new best resets stagnation.
    fn consider<R: Rng>(
        &mut self,
        candidate: Vec<usize>,
        cost: f64,
        temperature: f64,
        rng: &mut R,
    ) {
        let delta = cost - self.current_cost;

        if delta < 0.0 {
            self.current = candidate;
            self.current_cost = cost;
            self.accepted_moves += 1;
            self.improving_moves += 1;

            if cost < self.best_cost {
                self.best.clone_from(&self.current);
                self.best_cost = cost;
                self.stagnation = 0;
            } else {
                self.stagnation += 1;
            }
        } else {
            let probability = acceptance_probability(delta, temperature);
            if rng.random::<f64>() < probability {
                self.current = candidate;
                self.current_cost = cost;
                self.accepted_moves += 1;
            }
            self.stagnation += 1;
        }
    }
}

/// Simulated Annealing solver for one instance and one configuration.
///
/// The distance model is shared read-only, so sibling solvers created with
/// [`AnnealSolver::with_config`] and runs on other threads never copy it.
///
/// # Examples
///
/// ```
/// use tsp_anneal::{AnnealConfig, AnnealSolver, City};
///
/// let cities: Vec<City> = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]
///     .into_iter()
///     .map(City::from)
///     .collect();
/// let config = AnnealConfig::default()
///     .with_initial_temperature(10.0)
///     .with_min_temperature(0.01)
///     .with_max_iterations(1000);
///
/// let solver = AnnealSolver::new(cities, config).unwrap();
/// let result = solver.solve();
/// assert_eq!(result.best_cost, 4.0);
/// ```
#[derive(Debug, Clone)]
pub struct AnnealSolver {
    model: Arc<DistanceModel>,
    config: AnnealConfig,
}

impl AnnealSolver {
    /// Builds the distance model and validates `config`.
    ///
    /// # Errors
    ///
    /// `InvalidInstance` for fewer than two cities or non-finite
    /// coordinates, `InvalidConfig` for out-of-range parameters.
    pub fn new(cities: Vec<City>, config: AnnealConfig) -> AnnealResult<Self> {
        config.validate()?;
        let model = DistanceModel::new(cities)?;
        Ok(Self {
            model: Arc::new(model),
            config,
        })
    }

    /// Solver over an existing, shared distance model.
    pub fn from_model(model: Arc<DistanceModel>, config: AnnealConfig) -> AnnealResult<Self> {
        config.validate()?;
        Ok(Self { model, config })
    }

    /// Solver for the same instance with a different configuration.
    pub fn with_config(&self, config: AnnealConfig) -> AnnealResult<Self> {
        Self::from_model(Arc::clone(&self.model), config)
    }

    pub fn model(&self) -> &DistanceModel {
        &self.model
    }

    pub fn config(&self) -> &AnnealConfig {
        &self.config
    }

    /// Runs with the configured seed.
    pub fn solve(&self) -> RunResult {
        self.solve_with_seed(self.config.seed)
    }

    /// Runs with an explicit seed.
    pub fn solve_with_seed(&self, seed: u64) -> RunResult {
        self.solve_with_cancel(seed, None)
    }

    /// Runs with an optional cancellation flag.
    ///
    /// The flag is checked before every outer iteration; when raised, the
    /// run stops with [`Termination::Cancelled`] and returns the best tour
    /// found so far.
    pub fn solve_with_cancel(&self, seed: u64, cancel: Option<Arc<AtomicBool>>) -> RunResult {
        let config = &self.config;
        let matrix = self.model.matrix(config.cost_matrix);
        let n = self.model.len();
        let t0 = config.initial_temperature;
        let t_min = config.min_temperature;

        let mut rng = create_rng(seed);
        let policy = NeighborPolicy::new(config.use_two_opt);
        let mut controller = ReheatController::new(config.reheat_policy());

        let initial_route = identity_route(n);
        let initial_cost = route_cost(&initial_route, matrix);
        let mut state = SearchState::new(initial_route.clone(), initial_cost);
        let mut history = RunHistory::with_capacity(config.max_iterations.min(HISTORY_RESERVE_CAP));

        tracing::info!(
            seed,
            cities = n,
            schedule = %config.schedule,
            sa_max = config.sa_max,
            initial_cost,
            "annealing started"
        );

        let mut termination = Termination::IterationBudget;
        let mut final_temperature = t0;
        let mut executed = 0usize;

        for iteration in 0..config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    termination = Termination::Cancelled;
                    break;
                }
            }

            let scheduled = config
                .schedule
                .temperature(iteration, config.max_iterations, t0, t_min);
            let step = controller.step(iteration, scheduled, &mut state.stagnation);
            if step.reheat_started {
                history.reheat_points.push(iteration);
            }
            let temperature = step.temperature;
            final_temperature = temperature;

            if temperature < t_min {
                termination = Termination::TemperatureFloor;
                break;
            }

            for _ in 0..config.sa_max {
                state.trial(&policy, matrix, temperature, &mut rng);
            }

            history.record(iteration, temperature, state.current_cost, state.best_cost);
            executed += 1;

            if iteration % PROGRESS_INTERVAL == 0 {
                tracing::debug!(
                    iteration,
                    temperature,
                    current_cost = state.current_cost,
                    best_cost = state.best_cost,
                    "progress"
                );
            }
        }

        let result = RunResult {
            initial_route,
            initial_cost,
            best_route: state.best,
            best_cost: state.best_cost,
            history,
            cities: self.model.cities().to_vec(),
            seed,
            iterations: executed,
            final_temperature,
            accepted_moves: state.accepted_moves,
            improving_moves: state.improving_moves,
            termination,
        };

        tracing::info!(
            seed,
            best_cost = result.best_cost,
            improvement_percent = result.improvement_percent(),
            reheats = result.reheat_count(),
            iterations = executed,
            termination = ?termination,
            "annealing finished"
        );

        result
    }

    /// One independent run per seed, in seed order.
    ///
    /// Runs execute on the rayon pool with the `parallel` feature and
    /// sequentially otherwise; results are identical either way.
    pub fn solve_seeds(&self, seeds: &[u64]) -> Vec<RunResult> {
        #[cfg(feature = "parallel")]
        let runs = {
            use rayon::prelude::*;
            seeds
                .par_iter()
                .map(|&seed| self.solve_with_seed(seed))
                .collect()
        };
        #[cfg(not(feature = "parallel"))]
        let runs = seeds
            .iter()
            .map(|&seed| self.solve_with_seed(seed))
            .collect();
        runs
    }
}
