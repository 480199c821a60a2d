//! Stagnation-driven reheating.
//!
//! [`ReheatController`] sits between the cooling schedule and the annealing
//! loop. While [`ReheatPhase::Cooling`] it passes the schedule temperature
//! through; once the search has gone `stagnation_limit` trials without a new
//! best it switches to [`ReheatPhase::Reheating`], jumps to the reheat
//! temperature and cools back down until it is no hotter than the schedule
//! was at onset.

/// Parameters of the reheating controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReheatPolicy {
    /// Temperature used at reheat onset.
    pub temperature: f64,

    /// Trials without best-cost improvement that trigger a reheat.
    pub stagnation_limit: usize,

    /// Geometric decay rate of the reheat ramp, in (0, 1).
    pub cooling_rate: f64,

    /// `true`: geometric ramp back to the schedule.
    /// `false`: hold `temperature` for `plateau_iterations` iterations.
    pub progressive: bool,

    /// Length of the constant plateau when `progressive` is off.
    pub plateau_iterations: usize,
}

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ReheatPhase {
    /// Following the cooling schedule.
    #[default]
    Cooling,

    /// Overriding the schedule after a reheat.
    Reheating {
        /// Outer iteration at which the reheat began.
        started_at: usize,
        /// Schedule temperature at `started_at`.
        base_temperature: f64,
    },
}

/// Temperature chosen for one outer iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureStep {
    pub temperature: f64,
    /// A reheat started at this iteration.
    pub reheat_started: bool,
}

/// Two-state machine overriding the cooling schedule after stagnation.
#[derive(Debug, Clone)]
pub struct ReheatController {
    policy: ReheatPolicy,
    phase: ReheatPhase,
}

impl ReheatController {
    pub fn new(policy: ReheatPolicy) -> Self {
        Self {
            policy,
            phase: ReheatPhase::Cooling,
        }
    }

    pub fn phase(&self) -> ReheatPhase {
        self.phase
    }

    pub fn policy(&self) -> &ReheatPolicy {
        &self.policy
    }

    /// Resolves the temperature for outer iteration `iteration`.
    ///
    /// `scheduled` is the cooling schedule's value at this iteration.
    /// `stagnation` is reset to 0 when a reheat starts.
    pub fn step(
        &mut self,
        iteration: usize,
        scheduled: f64,
        stagnation: &mut usize,
    ) -> TemperatureStep {
        match self.phase {
            ReheatPhase::Cooling => {
                if *stagnation >= self.policy.stagnation_limit {
                    self.start(iteration, scheduled, stagnation)
                } else {
                    Self::scheduled(scheduled)
                }
            }
            ReheatPhase::Reheating {
                started_at,
                base_temperature,
            } => {
                let elapsed = iteration.saturating_sub(started_at);
                match self.ramp(elapsed, base_temperature) {
                    Some(temperature) => TemperatureStep {
                        temperature,
                        reheat_started: false,
                    },
                    None => {
                        self.finish(iteration);
                        Self::scheduled(scheduled)
                    }
                }
            }
        }
    }

    fn scheduled(temperature: f64) -> TemperatureStep {
        TemperatureStep {
            temperature,
            reheat_started: false,
        }
    }

    /// Cooling → Reheating.
    fn start(
        &mut self,
        iteration: usize,
        scheduled: f64,
        stagnation: &mut usize,
    ) -> TemperatureStep {
        self.phase = ReheatPhase::Reheating {
            started_at: iteration,
            base_temperature: scheduled,
        };
        *stagnation = 0;
        tracing::debug!(
            iteration,
            base_temperature = scheduled,
            reheat_temperature = self.policy.temperature,
            "reheat started"
        );
        TemperatureStep {
            temperature: self.policy.temperature,
            reheat_started: true,
        }
    }

    /// Reheating → Cooling.
    fn finish(&mut self, iteration: usize) {
        self.phase = ReheatPhase::Cooling;
        tracing::trace!(iteration, "reheat finished, schedule resumed");
    }

    /// Override temperature `elapsed` iterations after onset, or `None` once
    /// the reheat is over.
    fn ramp(&self, elapsed: usize, base_temperature: f64) -> Option<f64> {
        if self.policy.progressive {
            let exponent = i32::try_from(elapsed).unwrap_or(i32::MAX);
            let t = self.policy.temperature * self.policy.cooling_rate.powi(exponent);
            (t > base_temperature).then_some(t)
        } else {
            (elapsed < self.policy.plateau_iterations).then_some(self.policy.temperature)
        }
    }
}
