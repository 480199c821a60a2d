//! Simulated Annealing for the symmetric Traveling Salesman Problem.
//!
//! The solver combines:
//!
//! - **Distance model** ([`distance`]): Euclidean matrix over 2-D cities,
//!   plus a normalized copy, built once and shared read-only.
//! - **Route cost** ([`route`]): cyclic tour length of a permutation.
//! - **Neighborhoods** ([`neighbor`]): random swap and 2-opt segment
//!   reversal, with position 0 pinned as the tour start.
//! - **Cooling schedules** ([`schedule`]): linear, exponential,
//!   exponential-quadratic, cosine and hyperbolic-tangent.
//! - **Reheating** ([`reheat`]): a two-state controller that injects a
//!   decaying heat burst when the search stagnates.
//! - **Annealing loop** ([`sa`]): Metropolis acceptance, best-tour
//!   tracking and a per-iteration history.
//!
//! [`instance`] reads TSPLIB-style coordinate files and [`stats`]
//! summarizes final costs across seeds.
//!
//! # Example
//!
//! ```
//! use tsp_anneal::{AnnealConfig, AnnealSolver, CoolingSchedule, CostSummary};
//!
//! let cities = tsp_anneal::parse_instance(
//!     "NODE_COORD_SECTION\n1 0 0\n2 0 2\n3 2 2\n4 2 0\n5 1 3\nEOF\n",
//! )
//! .unwrap();
//! let config = AnnealConfig::default()
//!     .with_initial_temperature(50.0)
//!     .with_min_temperature(0.01)
//!     .with_max_iterations(2_000)
//!     .with_schedule(CoolingSchedule::Exponential);
//!
//! let solver = AnnealSolver::new(cities, config).unwrap();
//! let runs = solver.solve_seeds(&[42, 123, 456]);
//! let summary = CostSummary::from_runs(&runs).unwrap();
//! assert!(summary.min <= summary.median && summary.median <= summary.max);
//! ```

pub mod distance;
pub mod error;
pub mod instance;
pub mod neighbor;
pub mod reheat;
pub mod route;
pub mod sa;
pub mod schedule;
pub mod stats;

pub use distance::{City, CostMatrix, DistanceMatrix, DistanceModel};
pub use error::{AnnealError, AnnealResult};
pub use instance::{load_instance, parse_instance};
pub use neighbor::{NeighborOperator, NeighborPolicy};
pub use reheat::{ReheatController, ReheatPhase, ReheatPolicy};
pub use route::{route_cost, Route};
pub use sa::{AnnealConfig, AnnealSolver, RunHistory, RunResult, Termination};
pub use schedule::CoolingSchedule;
pub use stats::CostSummary;
