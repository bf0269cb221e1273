//! Export of simulation results.
//!
//! Both writers take the channel names of the model; unnamed channels are
//! labeled by position (see [`ChannelNames::label`]).

use std::io::Write;

use crate::error::Result;
use crate::labels::{ChannelKind, ChannelNames};
use crate::solver::SimulationResult;

/// Write a simulation result as CSV.
///
/// Format:
/// ```csv
/// time,uC,i,uR
/// 0,0,0.005,5
/// 0.001,0.005,0.004995,4.995
/// ```
pub fn write_csv<W: Write>(result: &SimulationResult, names: &ChannelNames, writer: &mut W) -> Result<()> {
    // Header row
    write!(writer, "time")?;
    for label in names.labels(ChannelKind::State, result.state_dim()) {
        write!(writer, ",{}", label)?;
    }
    for label in names.labels(ChannelKind::Output, result.output_dim()) {
        write!(writer, ",{}", label)?;
    }
    writeln!(writer)?;

    // Data rows
    for sample in result.samples() {
        write!(writer, "{}", sample.time)?;
        for value in sample.state.iter().chain(sample.output) {
            write!(writer, ",{}", value)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize)]
struct Labels {
    states: Vec<String>,
    outputs: Vec<String>,
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize)]
struct SampleRecord<'a> {
    time: f64,
    state: &'a [f64],
    output: &'a [f64],
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize)]
struct Report<'a> {
    labels: Labels,
    samples: Vec<SampleRecord<'a>>,
}

/// Write a simulation result as a JSON object with `labels` and `samples`.
///
/// Non-finite values serialize as `null`.
#[cfg(feature = "serde")]
pub fn write_json<W: Write>(result: &SimulationResult, names: &ChannelNames, writer: &mut W) -> Result<()> {
    let report = Report {
        labels: Labels {
            states: names.labels(ChannelKind::State, result.state_dim()),
            outputs: names.labels(ChannelKind::Output, result.output_dim()),
        },
        samples: result
            .samples()
            .map(|s| SampleRecord {
                time: s.time,
                state: s.state,
                output: s.output,
            })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *writer, &report)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::Matrix;
    use crate::model::{SimulationRun, StateSpaceModel};
    use crate::solver::simulate;

    fn decay_result() -> SimulationResult {
        let model = StateSpaceModel::new(
            Matrix::from_rows(&[[-1.0]]).unwrap(),
            Matrix::zeros(1, 0),
            Matrix::from_rows(&[[1.0], [2.0]]).unwrap(),
            Matrix::zeros(2, 0),
            vec![1.0],
            vec![],
        )
        .unwrap();
        simulate(&model, &SimulationRun::new(0.5, 1.0).unwrap()).unwrap()
    }

    #[test]
    fn test_write_csv() {
        let names = ChannelNames::parse("x", "y1", "");
        let mut buf = Vec::new();
        write_csv(&decay_result(), &names, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "time,x,y1,output[1]");
        assert_eq!(lines[1], "0,1,1,2");
        assert_eq!(lines[2], "0.5,0.5,0.5,1");
        assert_eq!(lines[3], "1,0.25,0.25,0.5");
        assert_eq!(lines.len(), 4);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_write_json() {
        let names = ChannelNames::parse("x", "", "");
        let mut buf = Vec::new();
        write_json(&decay_result(), &names, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["labels"]["states"], serde_json::json!(["x"]));
        assert_eq!(
            value["labels"]["outputs"],
            serde_json::json!(["output[0]", "output[1]"])
        );
        let samples = value["samples"].as_array().unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[1]["time"], serde_json::json!(0.5));
        assert_eq!(samples[2]["state"], serde_json::json!([0.25]));
    }
}
