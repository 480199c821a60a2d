//! Cooling schedules.
//!
//! Each schedule is a pure function `T(i, N, T0, Tmin)` of the outer
//! iteration `i`, the iteration budget `N` and the temperature bounds.
//! All schedules start at exactly `T0` and approach `Tmin` as `i → N`.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::error::AnnealError;

/// Temperature as a function of iteration progress.
///
/// # Examples
///
/// ```
/// use tsp_anneal::CoolingSchedule;
///
/// let schedule: CoolingSchedule = "cosine".parse().unwrap();
/// assert_eq!(schedule.temperature(0, 1000, 100.0, 0.1), 100.0);
/// assert!("schedule_3".parse::<CoolingSchedule>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CoolingSchedule {
    /// `T0 - i * (T0 - Tmin) / N`
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "schedule_0"))]
    Linear,

    /// `T0 * exp(-(ln(T0 / Tmin) / N) * i)`
    #[cfg_attr(feature = "serde", serde(alias = "schedule_8"))]
    Exponential,

    /// `T0 * exp(-(ln(T0 / Tmin) / N²) * i²)`
    ///
    /// Constant `T0` when `N = 0`, `Tmin <= 0` or `T0 <= 0`.
    #[cfg_attr(feature = "serde", serde(alias = "schedule_9"))]
    ExponentialQuadratic,

    /// `0.5 * (T0 - Tmin) * (1 + cos(i * PI / N)) + Tmin`
    #[cfg_attr(feature = "serde", serde(alias = "schedule_5"))]
    Cosine,

    /// `0.5 * (T0 - Tmin) * (1 - tanh(10 * i / N - 5)) + Tmin`
    #[cfg_attr(feature = "serde", serde(alias = "schedule_6"))]
    HyperbolicTangent,
}

impl CoolingSchedule {
    /// All schedules, in declaration order.
    pub const ALL: [CoolingSchedule; 5] = [
        CoolingSchedule::Linear,
        CoolingSchedule::Exponential,
        CoolingSchedule::ExponentialQuadratic,
        CoolingSchedule::Cosine,
        CoolingSchedule::HyperbolicTangent,
    ];

    /// Canonical identifier.
    pub fn name(self) -> &'static str {
        match self {
            CoolingSchedule::Linear => "linear",
            CoolingSchedule::Exponential => "exponential",
            CoolingSchedule::ExponentialQuadratic => "exponential-quadratic",
            CoolingSchedule::Cosine => "cosine",
            CoolingSchedule::HyperbolicTangent => "hyperbolic-tangent",
        }
    }

    /// Temperature at outer iteration `iteration` of `total`.
    ///
    /// Iteration 0 returns `t0` exactly for every schedule.
    pub fn temperature(self, iteration: usize, total: usize, t0: f64, t_min: f64) -> f64 {
        if iteration == 0 {
            return t0;
        }
        let i = iteration as f64;
        let n = total as f64;

        match self {
            CoolingSchedule::Linear => t0 - i * ((t0 - t_min) / n),

            CoolingSchedule::Exponential => t0 * (-((t0 / t_min).ln() / n) * i).exp(),

            CoolingSchedule::ExponentialQuadratic => {
                if total == 0 || t_min <= 0.0 || t0 <= 0.0 {
                    return t0;
                }
                t0 * (-((t0 / t_min).ln() / (n * n)) * (i * i)).exp()
            }

            CoolingSchedule::Cosine => 0.5 * (t0 - t_min) * (1.0 + (i * PI / n).cos()) + t_min,

            CoolingSchedule::HyperbolicTangent => {
                0.5 * (t0 - t_min) * (1.0 - (10.0 * i / n - 5.0).tanh()) + t_min
            }
        }
    }
}

impl fmt::Display for CoolingSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CoolingSchedule {
    type Err = AnnealError;

    /// Accepts the canonical names and the numbered `schedule_N` aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "linear" | "schedule_0" => Ok(CoolingSchedule::Linear),
            "exponential" | "schedule_8" => Ok(CoolingSchedule::Exponential),
            "exponential-quadratic" | "schedule_9" => Ok(CoolingSchedule::ExponentialQuadratic),
            "cosine" | "schedule_5" => Ok(CoolingSchedule::Cosine),
            "hyperbolic-tangent" | "schedule_6" => Ok(CoolingSchedule::HyperbolicTangent),
            other => Err(AnnealError::UnknownSchedule(other.to_string())),
        }
    }
}
