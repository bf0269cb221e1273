//! Error types for the state-space circuit simulator.
//!
//! This module provides a unified error type [`StateSpaceError`] that covers
//! all error conditions that can occur during model construction, simulation,
//! model description parsing, and result export.

use std::fmt;

use thiserror::Error;

/// Result type alias using [`StateSpaceError`].
pub type Result<T> = std::result::Result<T, StateSpaceError>;

/// One dimension of a state-space operand, used to name the offending pair
/// when a model fails shape validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelDim {
    RowsA,
    ColsA,
    RowsB,
    ColsB,
    RowsC,
    ColsC,
    RowsD,
    ColsD,
    LenX0,
    LenV,
}

impl fmt::Display for ModelDim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ModelDim::RowsA => "rows(A)",
            ModelDim::ColsA => "cols(A)",
            ModelDim::RowsB => "rows(B)",
            ModelDim::ColsB => "cols(B)",
            ModelDim::RowsC => "rows(C)",
            ModelDim::ColsC => "cols(C)",
            ModelDim::RowsD => "rows(D)",
            ModelDim::ColsD => "cols(D)",
            ModelDim::LenX0 => "len(X0)",
            ModelDim::LenV => "len(V)",
        };
        f.write_str(text)
    }
}

/// Unified error type for all simulator operations.
#[derive(Error, Debug)]
pub enum StateSpaceError {
    // ============ Primitive Errors ============
    /// Operand shapes of a matrix/vector primitive are incompatible
    #[error("Dimension mismatch in {operation}: expected {expected}, found {found}")]
    Dimension {
        operation: &'static str,
        expected: usize,
        found: usize,
    },

    // ============ Model Errors ============
    /// A/B/C/D/X0/V shapes are mutually inconsistent
    #[error("Model shape mismatch: {left} = {left_value} but {right} = {right_value}")]
    ModelShape {
        left: ModelDim,
        left_value: usize,
        right: ModelDim,
        right_value: usize,
    },

    /// Time step or duration is unusable
    #[error("Invalid run parameters: {message}")]
    InvalidRunParameters { message: String },

    /// Unknown preset identifier
    #[error("Unknown preset '{name}' (expected one of: rlc, rc, rl, lc)")]
    UnknownPreset { name: String },

    // ============ Description Language Errors ============
    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// A required matrix is absent from the description
    #[error("Missing matrix '{name}'")]
    MissingMatrix { name: String },

    /// A matrix is assigned more than once
    #[error("Duplicate matrix '{name}' at line {line}")]
    DuplicateMatrix { name: String, line: usize },

    // ============ I/O Errors ============
    /// Error reading a model description file
    #[error("Failed to read model file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing exported results
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing exported results
    #[cfg(feature = "serde")]
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StateSpaceError {
    /// Create a dimension error for a primitive operation
    pub fn dimension(operation: &'static str, expected: usize, found: usize) -> Self {
        Self::Dimension {
            operation,
            expected,
            found,
        }
    }

    /// Create a model shape error naming the mismatched pair
    pub fn model_shape(left: ModelDim, left_value: usize, right: ModelDim, right_value: usize) -> Self {
        Self::ModelShape {
            left,
            left_value,
            right,
            right_value,
        }
    }

    /// Create an invalid run parameters error
    pub fn invalid_run(message: impl Into<String>) -> Self {
        Self::InvalidRunParameters {
            message: message.into(),
        }
    }

    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }
}
