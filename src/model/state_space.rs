//! Validated state-space model.

use crate::error::{ModelDim, Result, StateSpaceError};
use crate::linalg::Matrix;

/// An immutable, shape-checked state-space model.
///
/// With `n` states, `m` sources and `k` outputs:
/// - `A` is n×n, `B` is n×m, `C` is k×n, `D` is k×m
/// - `X0` has length n, `V` has length m
#[derive(Debug, Clone, PartialEq)]
pub struct StateSpaceModel {
    a: Matrix,
    b: Matrix,
    c: Matrix,
    d: Matrix,
    x0: Vec<f64>,
    v: Vec<f64>,
}

impl StateSpaceModel {
    /// Build a model, checking every dimension invariant.
    ///
    /// Fails with [`StateSpaceError::ModelShape`] naming the first mismatched
    /// pair of dimensions.
    pub fn new(a: Matrix, b: Matrix, c: Matrix, d: Matrix, x0: Vec<f64>, v: Vec<f64>) -> Result<Self> {
        let n = a.rows();
        let m = b.cols();
        let k = c.rows();

        // n = rows(A) = cols(A) = rows(B) = cols(C) = len(X0)
        check(ModelDim::ColsA, a.cols(), ModelDim::RowsA, n)?;
        check(ModelDim::RowsB, b.rows(), ModelDim::RowsA, n)?;
        check(ModelDim::ColsC, c.cols(), ModelDim::RowsA, n)?;
        check(ModelDim::LenX0, x0.len(), ModelDim::RowsA, n)?;

        // m = cols(B) = cols(D) = len(V)
        check(ModelDim::ColsD, d.cols(), ModelDim::ColsB, m)?;
        check(ModelDim::LenV, v.len(), ModelDim::ColsB, m)?;

        // k = rows(C) = rows(D)
        check(ModelDim::RowsD, d.rows(), ModelDim::RowsC, k)?;

        tracing::debug!(states = n, sources = m, outputs = k, "validated state-space model");

        Ok(Self { a, b, c, d, x0, v })
    }

    /// Number of states (n).
    pub fn state_dim(&self) -> usize {
        self.a.rows()
    }

    /// Number of sources (m).
    pub fn input_dim(&self) -> usize {
        self.b.cols()
    }

    /// Number of outputs (k).
    pub fn output_dim(&self) -> usize {
        self.c.rows()
    }

    /// State matrix A.
    pub fn a(&self) -> &Matrix {
        &self.a
    }

    /// Input matrix B.
    pub fn b(&self) -> &Matrix {
        &self.b
    }

    /// Output matrix C.
    pub fn c(&self) -> &Matrix {
        &self.c
    }

    /// Feedthrough matrix D.
    pub fn d(&self) -> &Matrix {
        &self.d
    }

    /// Initial state X0.
    pub fn initial_state(&self) -> &[f64] {
        &self.x0
    }

    /// Source vector V.
    pub fn sources(&self) -> &[f64] {
        &self.v
    }
}

fn check(left: ModelDim, left_value: usize, right: ModelDim, right_value: usize) -> Result<()> {
    if left_value != right_value {
        return Err(StateSpaceError::model_shape(left, left_value, right, right_value));
    }
    Ok(())
}
