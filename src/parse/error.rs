use std::fmt;

use crate::lex::{Token, TokenKind};

/// What went wrong while parsing a token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A token that no production accepts at this point.
    Unexpected {
        expected: Vec<TokenKind>,
        found: String,
    },
    /// The input ended in the middle of a production.
    UnterminatedExpression { expected: Vec<TokenKind> },
    /// Tokens remain after a complete rule.
    TrailingInput { found: String },
    /// A number that does not fit the rule model.
    NumberOutOfRange { text: String },
}

/// Errors produced when parsing rule tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    position: usize,
    kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(position: usize, kind: ParseErrorKind) -> Self {
        Self { position, kind }
    }

    /// Reports `found` against the set of kinds that would have been accepted.
    pub(crate) fn unexpected(found: Token<'_>, expected: &[TokenKind]) -> Self {
        let kind = match found.kind {
            TokenKind::Eof => ParseErrorKind::UnterminatedExpression {
                expected: expected.to_vec(),
            },
            _ => ParseErrorKind::Unexpected {
                expected: expected.to_vec(),
                found: found.text.to_owned(),
            },
        };
        Self::new(found.position, kind)
    }

    /// Byte offset into the rule text.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

fn write_expected(f: &mut fmt::Formatter<'_>, expected: &[TokenKind]) -> fmt::Result {
    match expected {
        [only] => write!(f, "expected {only}"),
        _ => {
            f.write_str("expected one of ")?;
            for (i, kind) in expected.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{kind}")?;
            }
            Ok(())
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse error at offset {}: ", self.position)?;
        match &self.kind {
            ParseErrorKind::Unexpected { expected, found } => {
                write_expected(f, expected)?;
                write!(f, ", found '{found}'")
            }
            ParseErrorKind::UnterminatedExpression { expected } => {
                f.write_str("unterminated expression, ")?;
                write_expected(f, expected)
            }
            ParseErrorKind::TrailingInput { found } => {
                write!(f, "trailing input '{found}'")
            }
            ParseErrorKind::NumberOutOfRange { text } => {
                write!(f, "number '{text}' is out of range")
            }
        }
    }
}

impl std::error::Error for ParseError {}
