//! Fixed-step time integrators.

use crate::error::Result;
use crate::linalg::{add_in_place, mat_vec_mul, scaled_add_in_place};
use crate::model::StateSpaceModel;

/// The model equations with the constant source terms evaluated once.
///
/// Because V is held fixed for the whole run, `B·V` and `D·V` are the same
/// at every step; they are computed up front and added to `A·X` and `C·X`.
#[derive(Debug)]
pub struct StateEquations<'a> {
    model: &'a StateSpaceModel,
    /// B·V
    forced_derivative: Vec<f64>,
    /// D·V
    feedthrough: Vec<f64>,
}

impl<'a> StateEquations<'a> {
    /// Evaluate the source terms of `model`.
    pub fn new(model: &'a StateSpaceModel) -> Result<Self> {
        let forced_derivative = mat_vec_mul(model.b(), model.sources())?;
        let feedthrough = mat_vec_mul(model.d(), model.sources())?;
        Ok(Self {
            model,
            forced_derivative,
            feedthrough,
        })
    }

    /// State derivative `dX = A·X + B·V`.
    pub fn derivative(&self, x: &[f64]) -> Result<Vec<f64>> {
        let mut dx = mat_vec_mul(self.model.a(), x)?;
        add_in_place(&mut dx, &self.forced_derivative)?;
        Ok(dx)
    }

    /// Output `Y = C·X + D·V`.
    pub fn output(&self, x: &[f64]) -> Result<Vec<f64>> {
        let mut y = mat_vec_mul(self.model.c(), x)?;
        add_in_place(&mut y, &self.feedthrough)?;
        Ok(y)
    }
}

/// Trait for time integrators.
///
/// An integrator advances the state by exactly one step of size `h`.
pub trait Integrator {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Advance `x` (the state at time `t`) in place to time `t + h`.
    fn step(&self, equations: &StateEquations<'_>, t: f64, x: &mut [f64], h: f64) -> Result<()>;
}

/// Forward Euler (explicit, 1st order).
///
/// `X(t + h) = X(t) + h · (A·X(t) + B·V)`. Stable only when `h` is small
/// relative to the fastest eigenvalue of A; choosing `h` is up to the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn name(&self) -> &'static str {
        "forward-euler"
    }

    fn step(&self, equations: &StateEquations<'_>, _t: f64, x: &mut [f64], h: f64) -> Result<()> {
        let dx = equations.derivative(x)?;
        scaled_add_in_place(x, h, &dx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::Matrix;

    fn rc_model() -> StateSpaceModel {
        StateSpaceModel::new(
            Matrix::from_rows(&[[-1.0]]).unwrap(),
            Matrix::from_rows(&[[1.0]]).unwrap(),
            Matrix::from_rows(&[[1e-3], [-1.0]]).unwrap(),
            Matrix::from_rows(&[[-1e-3], [1.0]]).unwrap(),
            vec![0.0],
            vec![5.0],
        )
        .unwrap()
    }

    #[test]
    fn test_derivative_and_output() {
        let model = rc_model();
        let eq = StateEquations::new(&model).unwrap();

        assert_eq!(eq.derivative(&[2.0]).unwrap(), vec![3.0]);

        let y = eq.output(&[2.0]).unwrap();
        assert!((y[0] - (-3e-3)).abs() < 1e-15);
        assert_eq!(y[1], 3.0);
    }

    #[test]
    fn test_forward_euler_step() {
        let model = rc_model();
        let eq = StateEquations::new(&model).unwrap();
        let mut x = vec![0.0];

        ForwardEuler.step(&eq, 0.0, &mut x, 0.1).unwrap();
        assert!((x[0] - 0.5).abs() < 1e-15);

        // 0.5 + 0.1 * (5 - 0.5)
        ForwardEuler.step(&eq, 0.1, &mut x, 0.1).unwrap();
        assert!((x[0] - 0.95).abs() < 1e-15);
    }

    #[test]
    fn test_step_rejects_wrong_state_length() {
        let model = rc_model();
        let eq = StateEquations::new(&model).unwrap();
        let mut x = vec![0.0, 0.0];
        assert!(ForwardEuler.step(&eq, 0.0, &mut x, 0.1).is_err());
    }
}
