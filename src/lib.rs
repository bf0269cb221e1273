//! # Circuit State-Space
//!
//! Time-domain simulation of linear time-invariant circuits written in
//! state-space form.
//!
//! This library provides:
//! - Dense matrix/vector primitives sized for small circuit models
//! - A validated state-space model `dX/dt = A·X + B·V`, `Y = C·X + D·V`
//! - A forward Euler simulation driver producing time series of X and Y
//! - Bundled example circuits (RLC, RC, RL, LC)
//! - A text format for model descriptions and CSV/JSON export
//!
//! ## Architecture
//!
//! - [`linalg`] - Matrix-vector product and in-place vector updates
//! - [`model`] - State-space model and run parameters with validation
//! - [`solver`] - Integration strategies, the simulation driver and results
//! - [`presets`] - Example circuits derived from physical parameters
//! - [`dsl`] - Parser for the model description format
//! - [`labels`] - Channel display names
//! - [`output`] - CSV and JSON writers
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! statesim preset rc --format csv > rc.csv
//! statesim run circuit.ssm --step 10u --duration 20m
//! ```
//!
//! ### Library
//!
//! ```
//! use circuit_statespace::{simulate, Preset};
//!
//! let setup = Preset::Rc.setup()?;
//! let result = simulate(&setup.model, &setup.run)?;
//! assert_eq!(result.len(), 5001);
//! # Ok::<(), circuit_statespace::StateSpaceError>(())
//! ```
//!
//! ## Simulation Method
//!
//! For each step of size h the driver records the current sample, then
//! advances the state with forward Euler: `X ← X + h·(A·X + B·V)`. The run
//! covers `N = floor(T/h)` steps and records `N + 1` samples. Explicit Euler
//! is only conditionally stable; a step that is too large for the circuit's
//! time constants makes the trajectory diverge.

pub mod dsl;
pub mod error;
pub mod labels;
pub mod linalg;
pub mod model;
pub mod output;
pub mod presets;
pub mod solver;

// Re-export main types for convenience
pub use error::{Result, StateSpaceError};
pub use labels::ChannelNames;
pub use model::{SimulationRun, StateSpaceModel};
pub use presets::Preset;
pub use solver::{simulate, SimulationResult, Simulator};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmSimulation;
