//! Dense matrix and vector primitives.
//!
//! The simulator only needs two kinds of operations:
//!
//! ```text
//! y = M · x            (mat_vec_mul)
//! y += z               (add_in_place)
//! y += alpha · z       (scaled_add_in_place)
//! ```
//!
//! Vectors are plain `[f64]` slices. Every operation checks operand shapes
//! and fails with [`StateSpaceError::Dimension`](crate::error::StateSpaceError::Dimension)
//! instead of panicking, so the primitives can be reused outside the driver.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::{add_in_place, mat_vec_mul, scaled_add_in_place};
