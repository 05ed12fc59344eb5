use crate::lex::{Token, TokenKind};

use super::error::{ParseError, ParseErrorKind};

/// Cursor over a token slice with single-token lookahead.
///
/// Running past the end of the slice behaves as if an [`TokenKind::Eof`]
/// token sat right after the last token.
#[derive(Debug)]
pub(crate) struct Parser<'t, 'a> {
    tokens: &'t [Token<'a>],
    pos: usize,
}

impl<'t, 'a> Parser<'t, 'a> {
    pub(crate) fn new(tokens: &'t [Token<'a>]) -> Self {
        Self { tokens, pos: 0 }
    }

    pub(crate) fn peek(&self) -> Token<'a> {
        self.peek_nth(0)
    }

    pub(crate) fn peek_nth(&self, n: usize) -> Token<'a> {
        self.tokens
            .get(self.pos + n)
            .copied()
            .unwrap_or_else(|| self.end_marker())
    }

    fn end_marker(&self) -> Token<'a> {
        let position = self
            .tokens
            .last()
            .map_or(0, |t| t.position + t.text.len());
        Token::new(TokenKind::Eof, "", position)
    }

    pub(crate) fn advance(&mut self) -> Token<'a> {
        let tok = self.peek();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    /// Consume the next token if it has the given kind.
    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek().kind == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token<'a>, ParseError> {
        let tok = self.peek();
        if tok.kind == kind {
            Ok(self.advance())
        } else {
            Err(ParseError::unexpected(tok, &[kind]))
        }
    }

    pub(crate) fn number(tok: Token<'_>) -> Result<u32, ParseError> {
        tok.text.parse().map_err(|_| {
            ParseError::new(
                tok.position,
                ParseErrorKind::NumberOutOfRange {
                    text: tok.text.to_owned(),
                },
            )
        })
    }

    pub(crate) fn finish(&self) -> Result<(), ParseError> {
        let tok = self.peek();
        match tok.kind {
            TokenKind::Eof => Ok(()),
            _ => Err(ParseError::new(
                tok.position,
                ParseErrorKind::TrailingInput {
                    found: tok.text.to_owned(),
                },
            )),
        }
    }
}
