//! Abstract Syntax Tree types for the model description language.

use std::collections::HashMap;
use std::fmt;

/// Complete AST representation of a parsed model description.
#[derive(Debug, Clone, Default)]
pub struct ModelAst {
    /// Matrix literals keyed by operand
    pub matrices: HashMap<MatrixName, MatrixDef>,
    /// Names from `.states`
    pub state_names: Vec<String>,
    /// Names from `.outputs`
    pub output_names: Vec<String>,
    /// Names from `.sources`
    pub source_names: Vec<String>,
    /// Value of `.step`
    pub time_step: Option<f64>,
    /// Value of `.duration`
    pub duration: Option<f64>,
}

impl ModelAst {
    /// Create a new empty model AST.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A matrix literal from the DSL.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixDef {
    /// Which operand this literal assigns
    pub name: MatrixName,
    /// Rows as written; not yet checked for equal length
    pub rows: Vec<Vec<f64>>,
    /// Source line number for error reporting
    pub line: usize,
}

/// The six state-space operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixName {
    A,
    B,
    C,
    D,
    X0,
    V,
}

impl MatrixName {
    /// Parse an operand name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            "C" => Some(Self::C),
            "D" => Some(Self::D),
            "X0" => Some(Self::X0),
            "V" => Some(Self::V),
            _ => None,
        }
    }

    /// True for the operands that are vectors rather than matrices.
    pub fn is_vector(&self) -> bool {
        matches!(self, Self::X0 | Self::V)
    }
}

impl fmt::Display for MatrixName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::X0 => "X0",
            Self::V => "V",
        };
        f.write_str(text)
    }
}
