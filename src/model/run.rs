//! Time step and duration of a simulation run.

use crate::error::{Result, StateSpaceError};

/// Immutable run parameters: time step `h` and duration `T`.
///
/// The step count is `N = floor(T / h)`; a run records `N + 1` samples,
/// from `t = 0` up to approximately `t = N·h`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationRun {
    time_step: f64,
    duration: f64,
    steps: usize,
}

impl SimulationRun {
    /// Create run parameters, rejecting non-positive or non-finite values.
    pub fn new(time_step: f64, duration: f64) -> Result<Self> {
        if !time_step.is_finite() || time_step <= 0.0 {
            return Err(StateSpaceError::invalid_run(format!(
                "time step must be a positive finite number, got {}",
                time_step
            )));
        }
        if !duration.is_finite() || duration <= 0.0 {
            return Err(StateSpaceError::invalid_run(format!(
                "duration must be a positive finite number, got {}",
                duration
            )));
        }

        let ratio = (duration / time_step).floor();
        // usize::MAX is not exactly representable; stay well below it so the
        // sample count N + 1 cannot overflow either
        if !ratio.is_finite() || ratio >= usize::MAX as f64 / 2.0 {
            return Err(StateSpaceError::invalid_run(format!(
                "step count duration/h = {} is not representable",
                ratio
            )));
        }

        Ok(Self {
            time_step,
            duration,
            steps: ratio as usize,
        })
    }

    /// Integration time step `h` in seconds.
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Requested duration `T` in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Number of Euler steps `N = floor(T / h)`.
    pub fn step_count(&self) -> usize {
        self.steps
    }

    /// Number of recorded samples, `N + 1`.
    pub fn sample_count(&self) -> usize {
        self.steps + 1
    }

    /// Reject the run if it would record more than `max_samples` samples.
    ///
    /// The driver itself never enforces a limit; callers use this to guard
    /// memory before invoking it.
    pub fn check_sample_limit(&self, max_samples: usize) -> Result<()> {
        if self.sample_count() > max_samples {
            return Err(StateSpaceError::invalid_run(format!(
                "run would record {} samples, limit is {} (increase h or reduce the duration)",
                self.sample_count(),
                max_samples
            )));
        }
        Ok(())
    }
}
