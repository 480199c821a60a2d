//! Simulated Annealing for the symmetric TSP.
//!
//! Each outer iteration looks up a temperature from the cooling schedule
//! (or from the reheating controller while a reheat is active), runs
//! `sa_max` proposal/acceptance trials at that temperature, and appends
//! one row to the run history. A run stops after `max_iterations` outer
//! iterations or when the temperature falls below `min_temperature`.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod config;
mod runner;
mod types;

pub use config::{AnnealConfig, DEFAULT_REHEAT_FRACTION};
pub use runner::{acceptance_probability, AnnealSolver};
pub use types::{RunHistory, RunResult, Termination};
