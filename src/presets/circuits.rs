//! Physical parameter sets for the example circuits.
//!
//! Each circuit turns a handful of component values into state-space
//! matrices with the closed-form circuit equations. `Default` gives the
//! reference values of the bundled presets.

use crate::error::Result;
use crate::labels::ChannelNames;
use crate::linalg::Matrix;
use crate::model::StateSpaceModel;

/// RLC network driven by a current source.
///
/// States: capacitor voltage `uC` and inductor current `iL`.
/// Outputs: branch currents `i2` (through R2) and `i3`.
/// The capacitor starts charged to `J·R2`, its steady-state voltage without
/// the RL branch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RlcCurrentSource {
    /// Series resistance of the inductive branch (Ω)
    pub r1: f64,
    /// Resistance in parallel with the capacitor (Ω)
    pub r2: f64,
    /// Inductance (H)
    pub inductance: f64,
    /// Capacitance (F)
    pub capacitance: f64,
    /// Source current (A)
    pub source_current: f64,
}

impl Default for RlcCurrentSource {
    fn default() -> Self {
        Self {
            r1: 100.0,
            r2: 200.0,
            inductance: 0.1,
            capacitance: 1e-4,
            source_current: 0.05,
        }
    }
}

impl RlcCurrentSource {
    /// Derive the state-space model.
    pub fn model(&self) -> Result<StateSpaceModel> {
        let Self {
            r1,
            r2,
            inductance: l,
            capacitance: c,
            source_current: j,
        } = *self;

        StateSpaceModel::new(
            Matrix::from_rows(&[[-1.0 / (c * r2), -1.0 / c], [1.0 / l, -r1 / l]])?,
            Matrix::from_rows(&[[1.0 / c], [0.0]])?,
            Matrix::from_rows(&[[1.0 / r2, 0.0], [-1.0 / r2, -1.0]])?,
            Matrix::from_rows(&[[0.0], [1.0]])?,
            vec![j * r2, 0.0],
            vec![j],
        )
    }

    /// Channel names.
    pub fn channel_names(&self) -> ChannelNames {
        ChannelNames::parse("uC, iL", "i2, i3", "J")
    }
}

/// First-order RC circuit driven by a voltage source.
///
/// State: capacitor voltage `uC`. Outputs: loop current `i` and resistor
/// voltage `uR`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RcCircuit {
    /// Resistance (Ω)
    pub resistance: f64,
    /// Capacitance (F)
    pub capacitance: f64,
    /// Source voltage (V)
    pub source_voltage: f64,
}

impl Default for RcCircuit {
    fn default() -> Self {
        Self {
            resistance: 1000.0,
            capacitance: 1e-3,
            source_voltage: 5.0,
        }
    }
}

impl RcCircuit {
    /// Derive the state-space model.
    pub fn model(&self) -> Result<StateSpaceModel> {
        let r = self.resistance;
        let tau = r * self.capacitance;

        StateSpaceModel::new(
            Matrix::from_rows(&[[-1.0 / tau]])?,
            Matrix::from_rows(&[[1.0 / tau]])?,
            Matrix::from_rows(&[[1.0 / r], [-1.0]])?,
            Matrix::from_rows(&[[-1.0 / r], [1.0]])?,
            vec![0.0],
            vec![self.source_voltage],
        )
    }

    /// Channel names.
    pub fn channel_names(&self) -> ChannelNames {
        ChannelNames::parse("uC", "i, uR", "Vin")
    }
}

/// First-order RL circuit driven by a voltage source.
///
/// State: inductor current `iL`. Outputs: inductor voltage `uL` and
/// resistor voltage `uR`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RlCircuit {
    /// Resistance (Ω)
    pub resistance: f64,
    /// Inductance (H)
    pub inductance: f64,
    /// Source voltage (V)
    pub source_voltage: f64,
}

impl Default for RlCircuit {
    fn default() -> Self {
        Self {
            resistance: 100.0,
            inductance: 0.5,
            source_voltage: 10.0,
        }
    }
}

impl RlCircuit {
    /// Derive the state-space model.
    pub fn model(&self) -> Result<StateSpaceModel> {
        let r = self.resistance;
        let l = self.inductance;

        StateSpaceModel::new(
            Matrix::from_rows(&[[-r / l]])?,
            Matrix::from_rows(&[[1.0 / l]])?,
            Matrix::from_rows(&[[-r], [r]])?,
            Matrix::from_rows(&[[1.0], [0.0]])?,
            vec![0.0],
            vec![self.source_voltage],
        )
    }

    /// Channel names.
    pub fn channel_names(&self) -> ChannelNames {
        ChannelNames::parse("iL", "uL, uR", "Vin")
    }
}

/// Series RLC oscillator released from a charged capacitor.
///
/// States: capacitor voltage `uC` and loop current `iL`; the output is the
/// loop current. The circuit has no source: B and D are zero and the single
/// source entry is 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LcOscillator {
    /// Inductance (H)
    pub inductance: f64,
    /// Capacitance (F)
    pub capacitance: f64,
    /// Damping resistance (Ω)
    pub resistance: f64,
    /// Initial capacitor voltage (V)
    pub initial_voltage: f64,
}

impl Default for LcOscillator {
    fn default() -> Self {
        Self {
            inductance: 0.01,
            capacitance: 1e-4,
            resistance: 10.0,
            initial_voltage: 10.0,
        }
    }
}

impl LcOscillator {
    /// Derive the state-space model.
    pub fn model(&self) -> Result<StateSpaceModel> {
        let l = self.inductance;
        let c = self.capacitance;
        let r = self.resistance;

        StateSpaceModel::new(
            Matrix::from_rows(&[[0.0, -1.0 / c], [1.0 / l, -r / l]])?,
            Matrix::zeros(2, 1),
            Matrix::from_rows(&[[0.0, 1.0]])?,
            Matrix::zeros(1, 1),
            vec![self.initial_voltage, 0.0],
            vec![0.0],
        )
    }

    /// Channel names.
    pub fn channel_names(&self) -> ChannelNames {
        ChannelNames::parse("uC, iL", "iL", "")
    }
}
