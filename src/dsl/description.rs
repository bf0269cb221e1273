//! Conversion of a parsed description into a validated model.

use super::ast::{MatrixDef, MatrixName, ModelAst};
use crate::error::{Result, StateSpaceError};
use crate::labels::ChannelNames;
use crate::linalg::Matrix;
use crate::model::{SimulationRun, StateSpaceModel};

/// Time step used when a description has no `.step` directive.
pub const DEFAULT_TIME_STEP: f64 = 1e-4;

/// Duration used when a description has no `.duration` directive.
pub const DEFAULT_DURATION: f64 = 0.05;

/// A model description ready for simulation.
#[derive(Debug, Clone)]
pub struct ModelDescription {
    pub model: StateSpaceModel,
    pub run: SimulationRun,
    pub names: ChannelNames,
}

impl ModelDescription {
    /// Build a description from a parsed AST.
    ///
    /// `A` and `C` are required. `B` and `V` must appear together; leaving
    /// both out gives a model without sources. `D` and `X0` default to zero.
    pub fn from_ast(mut ast: ModelAst) -> Result<Self> {
        let a = to_matrix(take_required(&mut ast, MatrixName::A)?)?;
        let c = to_matrix(take_required(&mut ast, MatrixName::C)?)?;
        let n = a.rows();
        let k = c.rows();

        let (b, v) = match (
            ast.matrices.remove(&MatrixName::B),
            ast.matrices.remove(&MatrixName::V),
        ) {
            (Some(b), Some(v)) => (to_matrix(b)?, to_vector(v)?),
            (None, None) => (Matrix::zeros(n, 0), Vec::new()),
            (Some(_), None) => return Err(missing(MatrixName::V)),
            (None, Some(_)) => return Err(missing(MatrixName::B)),
        };
        let m = b.cols();

        let d = match ast.matrices.remove(&MatrixName::D) {
            Some(def) => to_matrix(def)?,
            None => Matrix::zeros(k, m),
        };
        let x0 = match ast.matrices.remove(&MatrixName::X0) {
            Some(def) => to_vector(def)?,
            None => vec![0.0; n],
        };

        let model = StateSpaceModel::new(a, b, c, d, x0, v)?;
        let run = SimulationRun::new(
            ast.time_step.unwrap_or(DEFAULT_TIME_STEP),
            ast.duration.unwrap_or(DEFAULT_DURATION),
        )?;
        let names = ChannelNames {
            states: ast.state_names,
            outputs: ast.output_names,
            sources: ast.source_names,
        };

        tracing::debug!(
            states = model.state_dim(),
            sources = model.input_dim(),
            outputs = model.output_dim(),
            steps = run.step_count(),
            "built model from description"
        );
        Ok(Self { model, run, names })
    }
}

fn missing(name: MatrixName) -> StateSpaceError {
    StateSpaceError::MissingMatrix {
        name: name.to_string(),
    }
}

fn take_required(ast: &mut ModelAst, name: MatrixName) -> Result<MatrixDef> {
    ast.matrices.remove(&name).ok_or_else(|| missing(name))
}

fn to_matrix(def: MatrixDef) -> Result<Matrix> {
    if let Some(width) = def.rows.first().map(Vec::len) {
        if def.rows.iter().any(|r| r.len() != width) {
            return Err(StateSpaceError::parse(
                def.line,
                format!("rows of matrix '{}' have different lengths", def.name),
            ));
        }
    }
    Matrix::from_rows(&def.rows)
}

/// Accept a vector written either as one row or as one column.
fn to_vector(def: MatrixDef) -> Result<Vec<f64>> {
    debug_assert!(def.name.is_vector());
    match def.rows.len() {
        0 => Ok(Vec::new()),
        1 => Ok(def.rows.into_iter().flatten().collect()),
        _ if def.rows.iter().all(|r| r.len() == 1) => Ok(def.rows.into_iter().flatten().collect()),
        _ => Err(StateSpaceError::parse(
            def.line,
            format!("vector '{}' must be a single row or a single column", def.name),
        )),
    }
}
