//! Multiply-accumulate operations on vectors.

use crate::error::{Result, StateSpaceError};

use super::Matrix;

/// Compute `y = M · x`.
///
/// Requires `cols(M) == x.len()`; the result has `rows(M)` entries.
pub fn mat_vec_mul(m: &Matrix, x: &[f64]) -> Result<Vec<f64>> {
    if m.cols() != x.len() {
        return Err(StateSpaceError::dimension("mat_vec_mul", m.cols(), x.len()));
    }

    let y = m
        .row_iter()
        .map(|row| {
            let mut acc = 0.0;
            for (a, b) in row.iter().zip(x) {
                acc += a * b;
            }
            acc
        })
        .collect();

    Ok(y)
}

/// Elementwise `y += z`.
pub fn add_in_place(y: &mut [f64], z: &[f64]) -> Result<()> {
    if y.len() != z.len() {
        return Err(StateSpaceError::dimension("add_in_place", y.len(), z.len()));
    }
    for (yi, zi) in y.iter_mut().zip(z) {
        *yi += zi;
    }
    Ok(())
}

/// Elementwise `y += alpha * z`.
pub fn scaled_add_in_place(y: &mut [f64], alpha: f64, z: &[f64]) -> Result<()> {
    if y.len() != z.len() {
        return Err(StateSpaceError::dimension("scaled_add_in_place", y.len(), z.len()));
    }
    for (yi, zi) in y.iter_mut().zip(z) {
        *yi += alpha * zi;
    }
    Ok(())
}
