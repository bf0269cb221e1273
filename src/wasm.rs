//! WASM bindings for the state-space simulator.
//!
//! A browser page builds a simulation from a model description or a preset,
//! runs it once and reads whole channels back as typed arrays for charting.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmSimulation } from 'circuit_statespace';
//!
//! await init();
//!
//! const sim = WasmSimulation.fromPreset('rc');
//! sim.run(1_000_000);
//!
//! const t = sim.times();
//! for (let i = 0; i < sim.state_count; i++) {
//!   plot(sim.state_label(i), t, sim.state_series(i));
//! }
//! ```

use wasm_bindgen::prelude::*;

use crate::dsl;
use crate::error::StateSpaceError;
use crate::labels::{ChannelKind, ChannelNames};
use crate::model::{SimulationRun, StateSpaceModel};
use crate::presets::Preset;
use crate::solver::{SimulationResult, Simulator};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: StateSpaceError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// A model, its run parameters and, once run, the recorded result.
#[wasm_bindgen]
pub struct WasmSimulation {
    model: StateSpaceModel,
    run: SimulationRun,
    names: ChannelNames,
    result: Option<SimulationResult>,
}

#[wasm_bindgen]
impl WasmSimulation {
    /// Create a simulation from model description text.
    #[wasm_bindgen(constructor)]
    pub fn new(description: &str) -> Result<WasmSimulation, JsValue> {
        let desc = dsl::parse(description).map_err(to_js)?;
        Ok(WasmSimulation {
            model: desc.model,
            run: desc.run,
            names: desc.names,
            result: None,
        })
    }

    /// Create a simulation of a bundled example circuit.
    #[wasm_bindgen(js_name = fromPreset)]
    pub fn from_preset(id: &str) -> Result<WasmSimulation, JsValue> {
        let preset: Preset = id.parse().map_err(to_js)?;
        let setup = preset.setup().map_err(to_js)?;
        Ok(WasmSimulation {
            model: setup.model,
            run: setup.run,
            names: setup.names,
            result: None,
        })
    }

    /// Replace the time step and duration. Discards any previous result.
    #[wasm_bindgen]
    pub fn set_run(&mut self, time_step: f64, duration: f64) -> Result<(), JsValue> {
        self.run = SimulationRun::new(time_step, duration).map_err(to_js)?;
        self.result = None;
        Ok(())
    }

    /// Run the simulation, rejecting runs above `max_samples` samples.
    #[wasm_bindgen]
    pub fn run(&mut self, max_samples: usize) -> Result<(), JsValue> {
        self.run.check_sample_limit(max_samples).map_err(to_js)?;
        let result = Simulator::new().run(&self.model, &self.run).map_err(to_js)?;
        self.result = Some(result);
        Ok(())
    }

    /// Number of recorded samples (0 before `run`).
    #[wasm_bindgen(getter)]
    pub fn sample_count(&self) -> usize {
        self.result.as_ref().map_or(0, SimulationResult::len)
    }

    /// Number of state channels.
    #[wasm_bindgen(getter)]
    pub fn state_count(&self) -> usize {
        self.model.state_dim()
    }

    /// Number of output channels.
    #[wasm_bindgen(getter)]
    pub fn output_count(&self) -> usize {
        self.model.output_dim()
    }

    /// Time axis of the last run.
    #[wasm_bindgen]
    pub fn times(&self) -> Vec<f64> {
        self.result
            .as_ref()
            .map(|r| r.times().to_vec())
            .unwrap_or_default()
    }

    /// Trajectory of state channel `index`, or `undefined`.
    #[wasm_bindgen]
    pub fn state_series(&self, index: usize) -> Option<Vec<f64>> {
        self.result.as_ref()?.state_series(index)
    }

    /// Trajectory of output channel `index`, or `undefined`.
    #[wasm_bindgen]
    pub fn output_series(&self, index: usize) -> Option<Vec<f64>> {
        self.result.as_ref()?.output_series(index)
    }

    /// Display label of state channel `index`.
    #[wasm_bindgen]
    pub fn state_label(&self, index: usize) -> String {
        self.names.label(ChannelKind::State, index)
    }

    /// Display label of output channel `index`.
    #[wasm_bindgen]
    pub fn output_label(&self, index: usize) -> String {
        self.names.label(ChannelKind::Output, index)
    }

    /// Index of the first non-finite sample of the last run, or `undefined`.
    #[wasm_bindgen]
    pub fn first_non_finite(&self) -> Option<usize> {
        self.result.as_ref()?.first_non_finite()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
