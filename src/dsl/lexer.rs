//! Lexer (tokenizer) for the model description language.

use crate::error::{Result, StateSpaceError};

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text
    pub text: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

/// Token types in the DSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// An identifier (matrix name, channel name)
    Identifier,
    /// A number (integer or floating point, possibly with suffix)
    Number,
    /// A directive (starts with '.')
    Directive,
    /// Open bracket '['
    OpenBracket,
    /// Close bracket ']'
    CloseBracket,
    /// Row separator ';'
    Semicolon,
    /// Comma ','
    Comma,
    /// Equals sign '='
    Equals,
    /// Newline
    Newline,
    /// End of file
    Eof,
}

/// Lexer for tokenizing model description input.
pub struct Lexer<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace_and_comments();

        let (pos, ch) = match self.chars.peek().copied() {
            Some(next) => next,
            None => return Ok(self.token(TokenKind::Eof, String::new(), self.line, self.column)),
        };

        let start_column = self.column;
        let start_line = self.line;

        let punctuation = match ch {
            '\n' => Some(TokenKind::Newline),
            '[' => Some(TokenKind::OpenBracket),
            ']' => Some(TokenKind::CloseBracket),
            ';' => Some(TokenKind::Semicolon),
            ',' => Some(TokenKind::Comma),
            '=' => Some(TokenKind::Equals),
            _ => None,
        };
        if let Some(kind) = punctuation {
            self.advance();
            return Ok(self.token(kind, ch.to_string(), start_line, start_column));
        }

        let token = match ch {
            // ".5" is a number, ".step" a directive
            '.' if self.input[pos + 1..].starts_with(|c: char| c.is_ascii_digit()) => {
                self.lex_number(start_line, start_column)?
            }
            '.' => {
                self.advance();
                let text = self.read_identifier();
                if text.is_empty() {
                    return Err(StateSpaceError::lexer(
                        start_line,
                        start_column,
                        "expected directive name after '.'",
                    ));
                }
                self.token(TokenKind::Directive, format!(".{}", text), start_line, start_column)
            }
            '-' | '+' | '0'..='9' => self.lex_number(start_line, start_column)?,
            _ if ch.is_alphabetic() || ch == '_' => {
                let text = self.read_identifier();
                self.token(TokenKind::Identifier, text, start_line, start_column)
            }
            _ => {
                return Err(StateSpaceError::lexer(
                    start_line,
                    start_column,
                    format!("unexpected character '{}'", ch),
                ));
            }
        };

        Ok(token)
    }

    fn token(&self, kind: TokenKind, text: String, line: usize, column: usize) -> Token {
        Token {
            kind,
            text,
            line,
            column,
        }
    }

    /// Read a number that must end at a separator: "1.5.3" and "1-2" are
    /// errors, not two entries.
    fn lex_number(&mut self, line: usize, column: usize) -> Result<Token> {
        let text = self.read_number();
        if let Some(&(_, next)) = self.chars.peek() {
            if next.is_alphanumeric() || matches!(next, '.' | '+' | '-' | '_') {
                return Err(StateSpaceError::lexer(
                    self.line,
                    self.column,
                    format!("unexpected '{}' after number '{}'", next, text),
                ));
            }
        }
        Ok(self.token(TokenKind::Number, text, line, column))
    }

    fn advance(&mut self) -> Option<char> {
        let (_, ch) = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch == ' ' || ch == '\t' || ch == '\r' {
                self.advance();
            } else if ch == '#' {
                // Skip comment until end of line
                while let Some(&(_, c)) = self.chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut text = String::new();
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        text
    }

    fn read_digits(&mut self, text: &mut String) {
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_number(&mut self) -> String {
        let mut text = String::new();

        // Optional sign
        if let Some(&(_, ch)) = self.chars.peek() {
            if ch == '-' || ch == '+' {
                text.push(ch);
                self.advance();
            }
        }

        // Integer part
        self.read_digits(&mut text);

        // Decimal part
        if let Some(&(_, '.')) = self.chars.peek() {
            text.push('.');
            self.advance();
            self.read_digits(&mut text);
        }

        // Exponent part
        if let Some(&(_, ch)) = self.chars.peek() {
            if ch == 'e' || ch == 'E' {
                text.push(ch);
                self.advance();
                if let Some(&(_, sign)) = self.chars.peek() {
                    if sign == '-' || sign == '+' {
                        text.push(sign);
                        self.advance();
                    }
                }
                self.read_digits(&mut text);
            }
        }

        // Unit suffix (p, n, u, m, k, M, G)
        if let Some(&(_, ch)) = self.chars.peek() {
            if matches!(ch, 'p' | 'n' | 'u' | 'µ' | 'm' | 'k' | 'K' | 'M' | 'G') {
                text.push(ch);
                self.advance();
            }
        }

        text
    }
}

/// Parse a number string with optional unit suffix.
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim();
    let last = text.chars().last()?;

    // Submultiples divide by an exact power of ten: "100u" is exactly 1e-4
    let (scale, divide) = match last {
        'p' => (1e12, true),
        'n' => (1e9, true),
        'u' | 'µ' => (1e6, true),
        'm' => (1e3, true),
        'k' | 'K' => (1e3, false),
        'M' => (1e6, false),
        'G' => (1e9, false),
        _ => return text.parse::<f64>().ok(),
    };

    let num_str = &text[..text.len() - last.len_utf8()];
    let value = num_str.parse::<f64>().ok()?;
    Some(if divide { value / scale } else { value * scale })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Option<f64>, b: Option<f64>) -> bool {
        match (a, b) {
            (Some(x), Some(y)) => (x - y).abs() < x.abs() * 1e-10 + 1e-15,
            (None, None) => true,
            _ => false,
        }
    }

    fn kinds(input: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(input);
        let mut out = Vec::new();
        loop {
            let tok = lexer.next_token().unwrap();
            out.push(tok.kind);
            if tok.kind == TokenKind::Eof {
                return out;
            }
        }
    }

    #[test]
    fn test_parse_value() {
        assert!(approx_eq(parse_value("10k"), Some(10_000.0)));
        assert!(approx_eq(parse_value("100n"), Some(100e-9)));
        assert!(approx_eq(parse_value("4.7u"), Some(4.7e-6)));
        assert!(approx_eq(parse_value("-1m"), Some(-1e-3)));
        assert!(approx_eq(parse_value("2.2"), Some(2.2)));
        assert!(approx_eq(parse_value("1e-9"), Some(1e-9)));
        assert!(approx_eq(parse_value(".5"), Some(0.5)));
        assert!(approx_eq(parse_value("-"), None));
        assert_eq!(parse_value("100u"), Some(1e-4));
        assert_eq!(parse_value("50m"), Some(0.05));
        assert!(approx_eq(parse_value(""), None));
    }

    #[test]
    fn test_lexer_matrix_assignment() {
        assert_eq!(
            kinds("A = [-1, 2; 3 4]\n"),
            vec![
                TokenKind::Identifier,
                TokenKind::Equals,
                TokenKind::OpenBracket,
                TokenKind::Number,
                TokenKind::Comma,
                TokenKind::Number,
                TokenKind::Semicolon,
                TokenKind::Number,
                TokenKind::Number,
                TokenKind::CloseBracket,
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lexer_directive_and_comment() {
        let mut lexer = Lexer::new("# header\n.step 1m # trailing");

        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Newline);

        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Directive);
        assert_eq!(tok.text, ".step");
        assert_eq!((tok.line, tok.column), (2, 1));

        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Number);
        assert_eq!(tok.text, "1m");

        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn test_lexer_rejects_unknown_character() {
        let mut lexer = Lexer::new("A = [1 $ 2]");
        for _ in 0..4 {
            lexer.next_token().unwrap();
        }
        let err = lexer.next_token().unwrap_err();
        assert!(matches!(
            err,
            StateSpaceError::LexerError {
                line: 1,
                column: 8,
                ..
            }
        ));
    }

    #[test]
    fn test_lexer_rejects_numbers_without_separator() {
        for input in ["1.5.3", "1-2", "2+3", "4x", "1meg"] {
            let mut lexer = Lexer::new(input);
            let err = lexer.next_token().unwrap_err();
            assert!(matches!(err, StateSpaceError::LexerError { line: 1, .. }), "{}", input);
        }

        let mut lexer = Lexer::new("1 -2,3");
        for text in ["1", "-2"] {
            assert_eq!(lexer.next_token().unwrap().text, text);
        }
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Comma);
    }
}
