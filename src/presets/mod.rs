//! Bundled example circuits.
//!
//! | Id | Circuit | h | T |
//! |----|---------|---|---|
//! | `rlc` | RLC network with a current source | 100 µs | 50 ms |
//! | `rc` | RC charging circuit | 1 ms | 5 s |
//! | `rl` | RL circuit | 100 µs | 50 ms |
//! | `lc` | Damped LC oscillator | 50 µs | 100 ms |
//!
//! A preset yields a validated [`StateSpaceModel`], a recommended
//! [`SimulationRun`] and display names for its channels.

mod circuits;

use std::fmt;
use std::str::FromStr;

pub use circuits::{LcOscillator, RcCircuit, RlCircuit, RlcCurrentSource};

use crate::error::{Result, StateSpaceError};
use crate::labels::ChannelNames;
use crate::model::{SimulationRun, StateSpaceModel};

/// One of the bundled example circuits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// RLC network driven by a current source
    RlcCurrentSource,
    /// RC circuit
    Rc,
    /// RL circuit
    Rl,
    /// Damped LC oscillator
    LcOscillator,
}

/// Everything needed to simulate and label a preset.
#[derive(Debug, Clone)]
pub struct PresetSetup {
    pub model: StateSpaceModel,
    pub run: SimulationRun,
    pub names: ChannelNames,
}

impl Preset {
    /// All presets in display order.
    pub const ALL: [Preset; 4] = [
        Preset::RlcCurrentSource,
        Preset::Rc,
        Preset::Rl,
        Preset::LcOscillator,
    ];

    /// Short identifier accepted by [`FromStr`].
    pub fn id(&self) -> &'static str {
        match self {
            Preset::RlcCurrentSource => "rlc",
            Preset::Rc => "rc",
            Preset::Rl => "rl",
            Preset::LcOscillator => "lc",
        }
    }

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Preset::RlcCurrentSource => "RLC circuit with a current source (R1=100, R2=200, L=0.1, C=100u, J=50m)",
            Preset::Rc => "RC circuit (R=1k, C=1m, Vin=5)",
            Preset::Rl => "RL circuit (R=100, L=0.5, Vin=10)",
            Preset::LcOscillator => "Damped LC oscillator (L=10m, C=100u, R=10, uC(0)=10)",
        }
    }

    /// Recommended time step and duration.
    pub fn recommended_run(&self) -> Result<SimulationRun> {
        match self {
            Preset::RlcCurrentSource => SimulationRun::new(1e-4, 0.05),
            Preset::Rc => SimulationRun::new(1e-3, 5.0),
            Preset::Rl => SimulationRun::new(1e-4, 0.05),
            Preset::LcOscillator => SimulationRun::new(5e-5, 0.1),
        }
    }

    /// Derive the state-space model from the preset's physical parameters.
    pub fn model(&self) -> Result<StateSpaceModel> {
        match self {
            Preset::RlcCurrentSource => RlcCurrentSource::default().model(),
            Preset::Rc => RcCircuit::default().model(),
            Preset::Rl => RlCircuit::default().model(),
            Preset::LcOscillator => LcOscillator::default().model(),
        }
    }

    /// Channel names for plotting.
    pub fn channel_names(&self) -> ChannelNames {
        match self {
            Preset::RlcCurrentSource => RlcCurrentSource::default().channel_names(),
            Preset::Rc => RcCircuit::default().channel_names(),
            Preset::Rl => RlCircuit::default().channel_names(),
            Preset::LcOscillator => LcOscillator::default().channel_names(),
        }
    }

    /// Model and recommended run parameters.
    pub fn build_model_and_run(&self) -> Result<(StateSpaceModel, SimulationRun)> {
        Ok((self.model()?, self.recommended_run()?))
    }

    /// Model, run parameters and channel names.
    pub fn setup(&self) -> Result<PresetSetup> {
        tracing::debug!(preset = self.id(), "loading preset");
        let (model, run) = self.build_model_and_run()?;
        Ok(PresetSetup {
            model,
            run,
            names: self.channel_names(),
        })
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Preset {
    type Err = StateSpaceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rlc" => Ok(Preset::RlcCurrentSource),
            "rc" => Ok(Preset::Rc),
            "rl" => Ok(Preset::Rl),
            "lc" => Ok(Preset::LcOscillator),
            _ => Err(StateSpaceError::UnknownPreset {
                name: s.to_string(),
            }),
        }
    }
}
