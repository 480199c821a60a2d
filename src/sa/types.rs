//! Run history and results.

use crate::distance::City;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// `max_iterations` outer iterations completed.
    IterationBudget,
    /// The temperature fell below `min_temperature`.
    TemperatureFloor,
    /// The cancellation flag was raised.
    Cancelled,
}

/// Per-iteration trace of one run.
///
/// One row per outer iteration; `reheat_points` lists the iterations at
/// which a reheat started.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunHistory {
    /// Outer iteration index of each row.
    pub iterations: Vec<usize>,
    /// Temperature the row's trials ran at.
    pub temperatures: Vec<f64>,
    /// Current tour cost after the row's trials.
    pub current_costs: Vec<f64>,
    /// Best cost seen up to and including the row.
    pub best_costs: Vec<f64>,
    /// Iterations at which a reheat started.
    pub reheat_points: Vec<usize>,
}

impl RunHistory {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            iterations: Vec::with_capacity(capacity),
            temperatures: Vec::with_capacity(capacity),
            current_costs: Vec::with_capacity(capacity),
            best_costs: Vec::with_capacity(capacity),
            reheat_points: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, iteration: usize, temperature: f64, current: f64, best: f64) {
        self.iterations.push(iteration);
        self.temperatures.push(temperature);
        self.current_costs.push(current);
        self.best_costs.push(best);
    }

    /// Number of recorded outer iterations.
    pub fn len(&self) -> usize {
        self.iterations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.iterations.is_empty()
    }
}

/// Result of one annealing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    /// Starting tour (identity order).
    pub initial_route: Vec<usize>,

    /// Cost of `initial_route`.
    pub initial_cost: f64,

    /// Best tour seen during the run.
    pub best_route: Vec<usize>,

    /// Cost of `best_route`.
    pub best_cost: f64,

    /// Per-iteration trace.
    pub history: RunHistory,

    /// Cities of the instance, indexed by the routes.
    pub cities: Vec<City>,

    /// Seed the random source was created from.
    pub seed: u64,

    /// Outer iterations executed.
    pub iterations: usize,

    /// Temperature of the last executed iteration (or the one that hit
    /// the floor).
    pub final_temperature: f64,

    /// Accepted moves, including improvements.
    pub accepted_moves: usize,

    /// Strictly improving moves.
    pub improving_moves: usize,

    pub termination: Termination,
}

impl RunResult {
    /// Relative improvement of the best cost over the initial cost, in
    /// percent. 0 when the initial cost is 0.
    pub fn improvement_percent(&self) -> f64 {
        if self.initial_cost > 0.0 {
            (1.0 - self.best_cost / self.initial_cost) * 100.0
        } else {
            0.0
        }
    }

    /// Number of reheats during the run.
    pub fn reheat_count(&self) -> usize {
        self.history.reheat_points.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_record() {
        let mut history = RunHistory::with_capacity(2);
        assert!(history.is_empty());
        history.record(0, 10.0, 5.0, 5.0);
        history.record(1, 9.0, 6.0, 5.0);
        assert_eq!(history.len(), 2);
        assert_eq!(history.temperatures, vec![10.0, 9.0]);
        assert_eq!(history.best_costs, vec![5.0, 5.0]);
    }

    #[test]
    fn test_improvement_percent() {
        let result = RunResult {
            initial_route: vec![0, 1],
            initial_cost: 200.0,
            best_route: vec![0, 1],
            best_cost: 150.0,
            history: RunHistory::default(),
            cities: vec![],
            seed: 0,
            iterations: 0,
            final_temperature: 0.0,
            accepted_moves: 0,
            improving_moves: 0,
            termination: Termination::IterationBudget,
        };
        assert!((result.improvement_percent() - 25.0).abs() < 1e-12);
        assert_eq!(result.reheat_count(), 0);
    }
}
