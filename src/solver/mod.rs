//! Time-domain simulation engine.
//!
//! The driver integrates
//!
//! ```text
//! dX/dt = A·X + B·V
//!     Y = C·X + D·V
//! ```
//!
//! on a fixed grid `t = 0, h, 2h, ..., N·h` with `N = floor(T / h)`. At each
//! grid point it records the current state and the output computed from that
//! same state, then advances the state with the configured [`Integrator`]
//! (forward Euler by default):
//!
//! ```text
//! X(t + h) = X(t) + h · dX/dt(t)
//! ```
//!
//! Forward Euler is first-order accurate and only conditionally stable:
//! every eigenvalue λ of A must satisfy `|1 + h·λ| < 1` for the trajectory to
//! stay bounded. The driver does not check this; an unstable step shows up as
//! growing or non-finite samples, see [`SimulationResult::first_non_finite`].

mod integrator;
mod result;
mod simulator;

pub use integrator::{ForwardEuler, Integrator, StateEquations};
pub use result::{Sample, SimulationResult};
pub use simulator::{simulate, Simulator};
