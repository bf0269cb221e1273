//! Text format for state-space model descriptions.
//!
//! A description lists the system matrices, channel names and run
//! parameters. The format is line-oriented and human-editable.
//!
//! # Grammar Overview
//!
//! ```text
//! description = { line }
//! line        = comment | directive | matrix | empty
//! comment     = '#' { any_char }
//! directive   = '.' directive_name { argument }
//! matrix      = name '=' '[' { row } ']'
//! row         = value { [','] value } (';' | newline)
//!
//! directive_name = "states" | "outputs" | "sources" | "step" | "duration"
//! name        = "A" | "B" | "C" | "D" | "X0" | "V"
//! value       = number [unit_suffix]
//!
//! number      = ['-'|'+'] digit* ['.' digit+] [('e'|'E') ['-'|'+'] digit+]
//! unit_suffix = 'p' | 'n' | 'u' | 'm' | 'k' | 'M' | 'G'
//! ```
//!
//! # Directives
//!
//! | Directive | Description | Syntax |
//! |-----------|-------------|--------|
//! | .states | State channel names | `.states <name>, <name>, ...` |
//! | .outputs | Output channel names | `.outputs <name>, ...` |
//! | .sources | Source channel names | `.sources <name>, ...` |
//! | .step | Integration time step h (s) | `.step <value>` |
//! | .duration | Simulated duration T (s) | `.duration <value>` |
//!
//! # Example
//!
//! ```text
//! # RL circuit: R = 100, L = 0.5, Vin = 10
//! .states   iL
//! .outputs  uL, uR
//! .sources  Vin
//! .step     100u
//! .duration 50m
//!
//! A  = [ -200 ]
//! B  = [ 2 ]
//! C  = [ -100 ; 100 ]
//! D  = [ 1 ; 0 ]
//! X0 = [ 0 ]
//! V  = [ 10 ]
//! ```

mod ast;
mod description;
mod lexer;
mod parser;

pub use ast::*;
pub use description::{ModelDescription, DEFAULT_DURATION, DEFAULT_TIME_STEP};
pub use lexer::{parse_value, Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::error::Result;

/// Parse a model description string.
pub fn parse(input: &str) -> Result<ModelDescription> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer)?;
    let ast = parser.parse()?;
    ModelDescription::from_ast(ast)
}

/// Parse a model description file.
pub fn parse_file(path: &std::path::Path) -> Result<ModelDescription> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::StateSpaceError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), "parsing model description");
    parse(&content)
}
