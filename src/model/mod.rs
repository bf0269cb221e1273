//! State-space model representation and run parameters.
//!
//! A linear time-invariant circuit is described by
//!
//! ```text
//! dX/dt = A·X + B·V
//!     Y = C·X + D·V
//! ```
//!
//! where X is the state vector (capacitor voltages, inductor currents),
//! V the constant source vector and Y the output vector. The
//! [`StateSpaceModel`] holds the six operands and validates their shapes once,
//! at construction. [`SimulationRun`] holds the time step and duration.

mod run;
mod state_space;

pub use run::SimulationRun;
pub use state_space::StateSpaceModel;
