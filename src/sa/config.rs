//! Annealing configuration.

use crate::distance::CostMatrix;
use crate::error::{AnnealError, AnnealResult};
use crate::reheat::ReheatPolicy;
use crate::schedule::CoolingSchedule;

/// Fraction of the initial temperature used as the default reheat target.
pub const DEFAULT_REHEAT_FRACTION: f64 = 0.3;

/// Configuration for one annealing solver.
///
/// # Examples
///
/// ```
/// use tsp_anneal::{AnnealConfig, CoolingSchedule};
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(1000.0)
///     .with_min_temperature(0.0005)
///     .with_max_iterations(400_000)
///     .with_schedule(CoolingSchedule::Cosine)
///     .with_sa_max(7)
///     .with_stagnation_limit(80_000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.reheat_temperature(), 300.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnnealConfig {
    /// Initial temperature `T0`.
    pub initial_temperature: f64,

    /// Temperature floor `Tmin`. The run stops when T drops below it.
    pub min_temperature: f64,

    /// Outer iteration budget `N`.
    pub max_iterations: usize,

    /// Cooling schedule.
    pub schedule: CoolingSchedule,

    /// Inner trials per outer iteration (same temperature).
    pub sa_max: usize,

    /// Mix 2-opt moves (70%) with swaps. Swap only when off.
    pub use_two_opt: bool,

    /// Reheat target. `None` means `0.3 * initial_temperature`.
    pub reheat_temperature: Option<f64>,

    /// Trials without a new best that trigger a reheat.
    pub stagnation_limit: usize,

    /// Geometric ramp after a reheat (`true`) or a constant plateau.
    pub progressive_cooling: bool,

    /// Decay rate of the progressive ramp, in (0, 1).
    pub reheat_cooling_rate: f64,

    /// Plateau length in outer iterations when `progressive_cooling` is off.
    pub reheat_iterations: usize,

    /// Matrix used for route costs.
    pub cost_matrix: CostMatrix,

    /// Seed for [`AnnealSolver::solve`](crate::sa::AnnealSolver::solve).
    pub seed: u64,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            min_temperature: 0.0005,
            max_iterations: 400_000,
            schedule: CoolingSchedule::default(),
            sa_max: 1,
            use_two_opt: true,
            reheat_temperature: None,
            stagnation_limit: 20_000,
            progressive_cooling: true,
            reheat_cooling_rate: 0.95,
            reheat_iterations: 50_000,
            cost_matrix: CostMatrix::default(),
            seed: 42,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_schedule(mut self, schedule: CoolingSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Sets the schedule from its identifier.
    ///
    /// # Errors
    ///
    /// [`AnnealError::UnknownSchedule`] for an unrecognized identifier.
    pub fn with_schedule_name(self, name: &str) -> AnnealResult<Self> {
        Ok(self.with_schedule(name.parse()?))
    }

    pub fn with_sa_max(mut self, n: usize) -> Self {
        self.sa_max = n;
        self
    }

    pub fn with_two_opt(mut self, enabled: bool) -> Self {
        self.use_two_opt = enabled;
        self
    }

    pub fn with_reheat_temperature(mut self, t: f64) -> Self {
        self.reheat_temperature = Some(t);
        self
    }

    pub fn with_stagnation_limit(mut self, n: usize) -> Self {
        self.stagnation_limit = n;
        self
    }

    pub fn with_progressive_cooling(mut self, enabled: bool) -> Self {
        self.progressive_cooling = enabled;
        self
    }

    pub fn with_reheat_cooling_rate(mut self, rate: f64) -> Self {
        self.reheat_cooling_rate = rate;
        self
    }

    pub fn with_reheat_iterations(mut self, n: usize) -> Self {
        self.reheat_iterations = n;
        self
    }

    pub fn with_cost_matrix(mut self, kind: CostMatrix) -> Self {
        self.cost_matrix = kind;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Effective reheat target.
    pub fn reheat_temperature(&self) -> f64 {
        self.reheat_temperature
            .unwrap_or(self.initial_temperature * DEFAULT_REHEAT_FRACTION)
    }

    /// Reheating parameters derived from this configuration.
    pub fn reheat_policy(&self) -> ReheatPolicy {
        ReheatPolicy {
            temperature: self.reheat_temperature(),
            stagnation_limit: self.stagnation_limit,
            cooling_rate: self.reheat_cooling_rate,
            progressive: self.progressive_cooling,
            plateau_iterations: self.reheat_iterations,
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AnnealResult<()> {
        let invalid = |msg: String| Err(AnnealError::InvalidConfig(msg));

        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return invalid(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            ));
        }
        if !(self.min_temperature.is_finite() && self.min_temperature > 0.0) {
            return invalid(format!(
                "min_temperature must be positive, got {}",
                self.min_temperature
            ));
        }
        if self.min_temperature >= self.initial_temperature {
            return invalid("min_temperature must be less than initial_temperature".into());
        }
        if self.max_iterations == 0 {
            return invalid("max_iterations must be at least 1".into());
        }
        if self.sa_max == 0 {
            return invalid("sa_max must be at least 1".into());
        }
        if self.stagnation_limit == 0 {
            return invalid("stagnation_limit must be at least 1".into());
        }
        let reheat = self.reheat_temperature();
        if !(reheat.is_finite() && reheat > 0.0) {
            return invalid(format!("reheat_temperature must be positive, got {reheat}"));
        }
        if !(self.reheat_cooling_rate > 0.0 && self.reheat_cooling_rate < 1.0) {
            return invalid(format!(
                "reheat_cooling_rate must be in (0, 1), got {}",
                self.reheat_cooling_rate
            ));
        }
        if !self.progressive_cooling && self.reheat_iterations == 0 {
            return invalid(
                "reheat_iterations must be at least 1 without progressive cooling".into(),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnnealConfig::default();
        assert_eq!(config.initial_temperature, 1000.0);
        assert_eq!(config.sa_max, 1);
        assert!(config.use_two_opt);
        assert_eq!(config.schedule, CoolingSchedule::Linear);
        assert!((config.reheat_temperature() - 300.0).abs() < 1e-12);
    }

    #[test]
    fn test_validate_ok() {
        assert!(AnnealConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = AnnealConfig::default().with_initial_temperature(-1.0);
        assert!(config.validate().is_err());
        let config = AnnealConfig::default().with_min_temperature(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_min_ge_initial() {
        let config = AnnealConfig::default()
            .with_initial_temperature(10.0)
            .with_min_temperature(20.0);
        assert!(matches!(
            config.validate(),
            Err(AnnealError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_zero_counts() {
        assert!(AnnealConfig::default().with_max_iterations(0).validate().is_err());
        assert!(AnnealConfig::default().with_sa_max(0).validate().is_err());
        assert!(AnnealConfig::default().with_stagnation_limit(0).validate().is_err());
    }

    #[test]
    fn test_validate_bad_reheat() {
        let config = AnnealConfig::default().with_reheat_cooling_rate(1.0);
        assert!(config.validate().is_err());
        let config = AnnealConfig::default().with_reheat_temperature(f64::NAN);
        assert!(config.validate().is_err());
        let config = AnnealConfig::default()
            .with_progressive_cooling(false)
            .with_reheat_iterations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_schedule_name() {
        let config = AnnealConfig::default().with_schedule_name("schedule_5").unwrap();
        assert_eq!(config.schedule, CoolingSchedule::Cosine);
        assert!(AnnealConfig::default().with_schedule_name("schedule_1").is_err());
    }

    #[test]
    fn test_reheat_policy() {
        let policy = AnnealConfig::default()
            .with_reheat_temperature(5.0)
            .with_stagnation_limit(7)
            .reheat_policy();
        assert_eq!(policy.temperature, 5.0);
        assert_eq!(policy.stagnation_limit, 7);
        assert!(policy.progressive);
    }
}
