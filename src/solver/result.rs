//! Time series produced by a simulation run.

/// One recorded instant of a simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<'a> {
    /// Time in seconds
    pub time: f64,
    /// State vector X at `time`
    pub state: &'a [f64],
    /// Output vector Y at `time`
    pub output: &'a [f64],
}

/// The recorded trajectory of a run: `N + 1` samples of time, state and
/// output, all three sequences sharing the same indices.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    times: Vec<f64>,
    states: Vec<Vec<f64>>,
    outputs: Vec<Vec<f64>>,
    state_dim: usize,
    output_dim: usize,
}

impl SimulationResult {
    pub(crate) fn with_capacity(samples: usize, state_dim: usize, output_dim: usize) -> Self {
        Self {
            times: Vec::with_capacity(samples),
            states: Vec::with_capacity(samples),
            outputs: Vec::with_capacity(samples),
            state_dim,
            output_dim,
        }
    }

    pub(crate) fn push(&mut self, time: f64, state: Vec<f64>, output: Vec<f64>) {
        debug_assert_eq!(state.len(), self.state_dim);
        debug_assert_eq!(output.len(), self.output_dim);
        self.times.push(time);
        self.states.push(state);
        self.outputs.push(output);
    }

    /// Number of recorded samples.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// True if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Dimension n of every state vector.
    pub fn state_dim(&self) -> usize {
        self.state_dim
    }

    /// Dimension k of every output vector.
    pub fn output_dim(&self) -> usize {
        self.output_dim
    }

    /// Time of the i-th sample.
    pub fn time(&self, i: usize) -> Option<f64> {
        self.times.get(i).copied()
    }

    /// State vector of the i-th sample.
    pub fn state(&self, i: usize) -> Option<&[f64]> {
        self.states.get(i).map(Vec::as_slice)
    }

    /// Output vector of the i-th sample.
    pub fn output(&self, i: usize) -> Option<&[f64]> {
        self.outputs.get(i).map(Vec::as_slice)
    }

    /// The i-th sample.
    pub fn sample(&self, i: usize) -> Option<Sample<'_>> {
        Some(Sample {
            time: self.time(i)?,
            state: self.state(i)?,
            output: self.output(i)?,
        })
    }

    /// Iterate over all samples in time order.
    pub fn samples(&self) -> impl Iterator<Item = Sample<'_>> + '_ {
        self.times
            .iter()
            .zip(&self.states)
            .zip(&self.outputs)
            .map(|((&time, state), output)| Sample {
                time,
                state,
                output,
            })
    }

    /// The time axis.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Trajectory of one state channel, or `None` if `channel >= n`.
    pub fn state_series(&self, channel: usize) -> Option<Vec<f64>> {
        (channel < self.state_dim).then(|| self.states.iter().map(|x| x[channel]).collect())
    }

    /// Trajectory of one output channel, or `None` if `channel >= k`.
    pub fn output_series(&self, channel: usize) -> Option<Vec<f64>> {
        (channel < self.output_dim).then(|| self.outputs.iter().map(|y| y[channel]).collect())
    }

    /// Index of the first sample whose state or output holds NaN or infinity.
    ///
    /// Non-finite values are recorded as-is; this lets a consumer flag the
    /// anomaly (typically an unstable time step) instead of plotting garbage.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.samples()
            .position(|s| s.state.iter().chain(s.output).any(|v| !v.is_finite()))
    }
}
