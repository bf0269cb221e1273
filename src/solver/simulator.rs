//! Main simulator interface.

use crate::error::Result;
use crate::model::{SimulationRun, StateSpaceModel};

use super::integrator::{ForwardEuler, Integrator, StateEquations};
use super::result::SimulationResult;

/// Fixed-step simulation driver.
///
/// The simulator holds no per-run state: every call to [`Simulator::run`]
/// starts from the model's initial state and returns a fresh result, so one
/// simulator can serve any number of runs, including from several threads.
#[derive(Debug, Clone, Default)]
pub struct Simulator<I: Integrator = ForwardEuler> {
    integrator: I,
}

impl Simulator<ForwardEuler> {
    /// Create a forward Euler simulator.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<I: Integrator> Simulator<I> {
    /// Create a simulator with a custom integration strategy.
    pub fn with_integrator(integrator: I) -> Self {
        Self { integrator }
    }

    /// The integration strategy in use.
    pub fn integrator(&self) -> &I {
        &self.integrator
    }

    /// Simulate `model` over `run`.
    ///
    /// Records `N + 1` samples. At every sample the output is evaluated from
    /// the state at that same instant, before the state is advanced. Time
    /// advances by repeated addition of `h`, so late timestamps carry the
    /// accumulated rounding of that sum rather than being exactly `step·h`.
    ///
    /// Any error aborts the run; no partial result is returned.
    pub fn run(&self, model: &StateSpaceModel, run: &SimulationRun) -> Result<SimulationResult> {
        let h = run.time_step();
        let steps = run.step_count();
        let _span = tracing::info_span!(
            "simulate",
            integrator = self.integrator.name(),
            h,
            steps,
            states = model.state_dim(),
            outputs = model.output_dim()
        )
        .entered();

        let equations = StateEquations::new(model)?;
        let mut result =
            SimulationResult::with_capacity(run.sample_count(), model.state_dim(), model.output_dim());

        let mut x = model.initial_state().to_vec();
        let mut t = 0.0;
        let mut anomaly_reported = false;

        for step in 0..=steps {
            let y = equations.output(&x)?;

            if !anomaly_reported && x.iter().chain(&y).any(|v| !v.is_finite()) {
                tracing::warn!(step, t, "non-finite value in trajectory; the time step may be too large for this model");
                anomaly_reported = true;
            }

            result.push(t, x.clone(), y);

            self.integrator.step(&equations, t, &mut x, h)?;
            t += h;
        }

        tracing::debug!(samples = result.len(), final_time = t - h, "simulation finished");

        Ok(result)
    }
}

/// Simulate `model` over `run` with forward Euler.
pub fn simulate(model: &StateSpaceModel, run: &SimulationRun) -> Result<SimulationResult> {
    Simulator::new().run(model, run)
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::linalg::{mat_vec_mul, Matrix};

    fn scalar_model(a: f64, b: f64, x0: f64, v: f64) -> StateSpaceModel {
        StateSpaceModel::new(
            Matrix::from_rows(&[[a]]).unwrap(),
            Matrix::from_rows(&[[b]]).unwrap(),
            Matrix::from_rows(&[[1.0]]).unwrap(),
            Matrix::from_rows(&[[0.0]]).unwrap(),
            vec![x0],
            vec![v],
        )
        .unwrap()
    }

    fn two_state_model(x0: Vec<f64>, v: Vec<f64>) -> StateSpaceModel {
        StateSpaceModel::new(
            Matrix::from_rows(&[[-50.0, -10_000.0], [10.0, -1_000.0]]).unwrap(),
            Matrix::from_rows(&[[10_000.0], [0.0]]).unwrap(),
            Matrix::from_rows(&[[0.005, 0.0], [-0.005, -1.0]]).unwrap(),
            Matrix::from_rows(&[[0.0], [1.0]]).unwrap(),
            x0,
            v,
        )
        .unwrap()
    }

    #[test]
    fn test_sample_count() {
        let model = scalar_model(-1.0, 0.0, 1.0, 0.0);
        let run = SimulationRun::new(0.25, 1.1).unwrap();
        let result = simulate(&model, &run).unwrap();
        assert_eq!(result.len(), 5);
        assert_eq!(result.state_dim(), 1);
        assert_eq!(result.output_dim(), 1);
    }

    #[test]
    fn test_scalar_decay_closed_form() {
        let (a, h, x0) = (3.0, 0.01, 2.0);
        let model = scalar_model(-a, 0.0, x0, 0.0);
        let run = SimulationRun::new(h, 1.0).unwrap();
        let result = simulate(&model, &run).unwrap();

        for (step, sample) in result.samples().enumerate() {
            let expected = x0 * (1.0 - a * h).powi(step as i32);
            assert_relative_eq!(sample.state[0], expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_zero_input_zero_state_is_stationary() {
        let model = two_state_model(vec![0.0, 0.0], vec![0.0]);
        let run = SimulationRun::new(1e-4, 0.01).unwrap();
        let result = simulate(&model, &run).unwrap();
        for sample in result.samples() {
            assert!(sample.state.iter().all(|&v| v == 0.0));
            assert!(sample.output.iter().all(|&v| v == 0.0));
        }
    }

    #[test]
    fn test_output_uses_recorded_state() {
        let model = two_state_model(vec![10.0, 0.0], vec![0.05]);
        let run = SimulationRun::new(1e-4, 0.01).unwrap();
        let result = simulate(&model, &run).unwrap();

        let dv = mat_vec_mul(model.d(), model.sources()).unwrap();
        for sample in result.samples() {
            let cx = mat_vec_mul(model.c(), sample.state).unwrap();
            for i in 0..cx.len() {
                assert_abs_diff_eq!(sample.output[i], cx[i] + dv[i], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_first_sample_is_initial_condition() {
        let model = two_state_model(vec![10.0, 0.0], vec![0.05]);
        let run = SimulationRun::new(1e-4, 0.001).unwrap();
        let result = simulate(&model, &run).unwrap();
        assert_eq!(result.time(0), Some(0.0));
        assert_eq!(result.state(0), Some(&[10.0, 0.0][..]));
        // i2 = uC / R2, i3 = -uC / R2 - iL + J
        let y0 = result.output(0).unwrap();
        assert_abs_diff_eq!(y0[0], 0.05, epsilon = 1e-15);
        assert_abs_diff_eq!(y0[1], 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_time_accumulates_by_addition() {
        let model = scalar_model(-1.0, 1.0, 0.0, 5.0);
        let run = SimulationRun::new(0.001, 5.0).unwrap();
        let result = simulate(&model, &run).unwrap();

        let mut t: f64 = 0.0;
        for &recorded in result.times() {
            assert_eq!(recorded.to_bits(), t.to_bits());
            t += 0.001;
        }
        // repeated addition drifts away from 5000 * 0.001 == 5.0
        let last = result.time(5000).unwrap();
        assert_ne!(last, 5.0);
        assert_abs_diff_eq!(last, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_model_is_not_modified() {
        let model = two_state_model(vec![10.0, 0.0], vec![0.05]);
        let before = model.clone();
        let run = SimulationRun::new(1e-4, 0.005).unwrap();
        simulate(&model, &run).unwrap();
        assert_eq!(model, before);
    }

    #[test]
    fn test_idempotent_runs() {
        let model = two_state_model(vec![10.0, 0.0], vec![0.05]);
        let run = SimulationRun::new(1e-4, 0.05).unwrap();
        let simulator = Simulator::new();
        let first = simulator.run(&model, &run).unwrap();
        let second = simulator.run(&model, &run).unwrap();
        assert_eq!(first.len(), second.len());
        for (a, b) in first.samples().zip(second.samples()) {
            assert_eq!(a.time.to_bits(), b.time.to_bits());
            assert!(a.state.iter().zip(b.state).all(|(p, q)| p.to_bits() == q.to_bits()));
            assert!(a.output.iter().zip(b.output).all(|(p, q)| p.to_bits() == q.to_bits()));
        }
    }

    #[test]
    fn test_unstable_step_propagates_non_finite_values() {
        // a*h = 3000, so |1 - a*h| > 1 and the state blows up
        let model = scalar_model(-3_000.0, 0.0, 1.0, 0.0);
        let run = SimulationRun::new(1.0, 200.0).unwrap();
        let result = simulate(&model, &run).unwrap();
        assert_eq!(result.len(), 201);
        assert!(result.first_non_finite().is_some());
    }

    #[derive(Debug)]
    struct HoldState;

    impl Integrator for HoldState {
        fn name(&self) -> &'static str {
            "hold"
        }

        fn step(&self, _equations: &StateEquations<'_>, _t: f64, _x: &mut [f64], _h: f64) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_custom_integrator() {
        let model = scalar_model(-1.0, 0.0, 3.0, 0.0);
        let run = SimulationRun::new(0.1, 1.0).unwrap();
        let simulator = Simulator::with_integrator(HoldState);
        assert_eq!(simulator.integrator().name(), "hold");

        let result = simulator.run(&model, &run).unwrap();
        assert_eq!(result.len(), 11);
        assert_eq!(result.state_series(0), Some(vec![3.0; 11]));
    }
}
