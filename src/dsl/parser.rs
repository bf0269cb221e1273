//! Parser for the model description language.

use super::ast::*;
use super::lexer::{parse_value, Lexer, Token, TokenKind};
use crate::error::{Result, StateSpaceError};

/// Parser for model descriptions.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse the entire model description.
    pub fn parse(&mut self) -> Result<ModelAst> {
        let mut ast = ModelAst::new();

        while self.current.kind != TokenKind::Eof {
            // Skip empty lines
            if self.current.kind == TokenKind::Newline {
                self.advance()?;
                continue;
            }

            match self.current.kind {
                TokenKind::Directive => self.parse_directive(&mut ast)?,
                TokenKind::Identifier => {
                    let matrix = self.parse_matrix()?;
                    if ast.matrices.contains_key(&matrix.name) {
                        return Err(StateSpaceError::DuplicateMatrix {
                            name: matrix.name.to_string(),
                            line: matrix.line,
                        });
                    }
                    ast.matrices.insert(matrix.name, matrix);
                }
                _ => {
                    return Err(StateSpaceError::parse(
                        self.current.line,
                        format!("unexpected token: {:?}", self.current.text),
                    ));
                }
            }

            self.expect_line_end()?;
        }

        Ok(ast)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.current.kind == kind {
            let tok = self.current.clone();
            self.advance()?;
            Ok(tok)
        } else {
            Err(StateSpaceError::parse(
                self.current.line,
                format!("expected {:?}, got {:?}", kind, self.current.kind),
            ))
        }
    }

    fn expect_line_end(&mut self) -> Result<()> {
        match self.current.kind {
            TokenKind::Newline => self.advance(),
            TokenKind::Eof => Ok(()),
            _ => Err(StateSpaceError::parse(
                self.current.line,
                format!("unexpected {:?} at end of line", self.current.text),
            )),
        }
    }

    fn parse_number(&mut self) -> Result<f64> {
        let tok = self.expect(TokenKind::Number)?;
        parse_value(&tok.text)
            .ok_or_else(|| StateSpaceError::parse(tok.line, format!("invalid number: {}", tok.text)))
    }

    fn parse_directive(&mut self, ast: &mut ModelAst) -> Result<()> {
        let directive = self.current.text.clone();
        let line = self.current.line;
        self.advance()?;

        match directive.to_lowercase().as_str() {
            ".states" => ast.state_names = self.parse_name_list()?,
            ".outputs" => ast.output_names = self.parse_name_list()?,
            ".sources" => ast.source_names = self.parse_name_list()?,
            ".step" => ast.time_step = Some(self.parse_number()?),
            ".duration" => ast.duration = Some(self.parse_number()?),
            _ => {
                return Err(StateSpaceError::parse(
                    line,
                    format!("unknown directive: {}", directive),
                ));
            }
        }

        Ok(())
    }

    /// Comma-separated channel names up to the end of the line.
    fn parse_name_list(&mut self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut pending = String::new();

        while self.current.kind != TokenKind::Newline && self.current.kind != TokenKind::Eof {
            match self.current.kind {
                TokenKind::Comma => names.push(std::mem::take(&mut pending)),
                // "i L" is kept as one name; numbers allow names like "2"
                TokenKind::Identifier | TokenKind::Number => {
                    if !pending.is_empty() {
                        pending.push(' ');
                    }
                    pending.push_str(&self.current.text);
                }
                _ => {
                    return Err(StateSpaceError::parse(
                        self.current.line,
                        format!("unexpected {:?} in name list", self.current.text),
                    ));
                }
            }
            self.advance()?;
        }

        if !pending.is_empty() || !names.is_empty() {
            names.push(pending);
        }
        Ok(names)
    }

    fn parse_matrix(&mut self) -> Result<MatrixDef> {
        let name_tok = self.expect(TokenKind::Identifier)?;
        let line = name_tok.line;
        let name = MatrixName::from_str(&name_tok.text).ok_or_else(|| {
            StateSpaceError::parse(
                line,
                format!("unknown matrix '{}' (expected A, B, C, D, X0 or V)", name_tok.text),
            )
        })?;

        self.expect(TokenKind::Equals)?;
        self.expect(TokenKind::OpenBracket)?;

        let mut rows = Vec::new();
        let mut row = Vec::new();

        loop {
            match self.current.kind {
                TokenKind::Number => row.push(self.parse_number()?),
                TokenKind::Comma => self.advance()?,
                TokenKind::Semicolon | TokenKind::Newline => {
                    if !row.is_empty() {
                        rows.push(std::mem::take(&mut row));
                    }
                    self.advance()?;
                }
                TokenKind::CloseBracket => {
                    if !row.is_empty() {
                        rows.push(row);
                    }
                    self.advance()?;
                    break;
                }
                TokenKind::Eof => {
                    return Err(StateSpaceError::parse(
                        line,
                        format!("unterminated matrix '{}'", name),
                    ));
                }
                _ => {
                    return Err(StateSpaceError::parse(
                        self.current.line,
                        format!("unexpected {:?} in matrix '{}'", self.current.text, name),
                    ));
                }
            }
        }

        Ok(MatrixDef { name, rows, line })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<ModelAst> {
        Parser::new(Lexer::new(input))?.parse()
    }

    #[test]
    fn test_parse_matrix_rows() {
        let ast = parse("A = [ -1, 2 ; 3 4 ]").unwrap();
        let a = &ast.matrices[&MatrixName::A];
        assert_eq!(a.rows, vec![vec![-1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(a.line, 1);
    }

    #[test]
    fn test_parse_multiline_matrix() {
        let ast = parse("a = [\n  -50 -10k\n  10  -1k\n]\n").unwrap();
        assert_eq!(
            ast.matrices[&MatrixName::A].rows,
            vec![vec![-50.0, -10_000.0], vec![10.0, -1_000.0]]
        );
    }

    #[test]
    fn test_parse_directives() {
        let ast = parse(".states uC, iL\n.outputs i2,i3\n.sources\n.step 100u\n.duration 50m").unwrap();
        assert_eq!(ast.state_names, vec!["uC", "iL"]);
        assert_eq!(ast.output_names, vec!["i2", "i3"]);
        assert!(ast.source_names.is_empty());
        assert!((ast.time_step.unwrap() - 1e-4).abs() < 1e-18);
        assert!((ast.duration.unwrap() - 0.05).abs() < 1e-15);
    }

    #[test]
    fn test_parse_name_list_keeps_blank_entries() {
        let ast = parse(".outputs i2, , i4").unwrap();
        assert_eq!(ast.output_names, vec!["i2", "", "i4"]);
    }

    #[test]
    fn test_duplicate_matrix() {
        let err = parse("V = [1]\nV = [2]").unwrap_err();
        assert!(matches!(err, StateSpaceError::DuplicateMatrix { line: 2, .. }));
    }

    #[test]
    fn test_unknown_matrix_and_directive() {
        assert!(matches!(
            parse("E = [1]").unwrap_err(),
            StateSpaceError::ParseError { line: 1, .. }
        ));
        assert!(matches!(
            parse("\n.model x").unwrap_err(),
            StateSpaceError::ParseError { line: 2, .. }
        ));
    }

    #[test]
    fn test_unterminated_matrix() {
        let err = parse("A = [1 2\n3 4").unwrap_err();
        assert!(matches!(err, StateSpaceError::ParseError { .. }));
    }

    #[test]
    fn test_trailing_tokens_rejected() {
        let err = parse(".step 1m 2m").unwrap_err();
        assert!(matches!(err, StateSpaceError::ParseError { line: 1, .. }));
    }

    #[test]
    fn test_adjacent_numbers_rejected() {
        for input in ["X0 = [1.5.3]", "X0 = [1-2]"] {
            let err = parse(input).unwrap_err();
            assert!(
                matches!(err, StateSpaceError::LexerError { line: 1, .. }),
                "{}: {:?}",
                input,
                err
            );
        }
    }
}
