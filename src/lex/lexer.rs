use std::iter::FusedIterator;

use winnow::ascii::digit1;
use winnow::combinator::alt;
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::take_while;

use super::{LexError, Token, TokenKind};

// -- Fragments --------------------------------------------------------------

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn word<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        take_while(1.., |c: char| c.is_ascii_alphabetic()),
        take_while(0.., |c: char| c.is_ascii_alphanumeric()),
    )
        .take()
        .parse_next(input)
}

fn classify_word(word: &str) -> TokenKind {
    match word {
        "If" | "if" => TokenKind::If,
        "then" => TokenKind::Then,
        "and" => TokenKind::And,
        "or" => TokenKind::Or,
        "Y" | "N" => TokenKind::Boolean,
        "Gray" | "Green" | "Red" | "Yellow" => TokenKind::CeeScore,
        w if is_question(w) => TokenKind::Question,
        _ => TokenKind::Word,
    }
}

fn is_question(word: &str) -> bool {
    word.strip_prefix('Q')
        .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}

// Two-character operators are tried before their one-character prefixes.
fn operator(input: &mut &str) -> ModalResult<TokenKind> {
    alt((
        alt((">=", "≥")).value(TokenKind::Ge),
        '>'.value(TokenKind::Gt),
        alt(("=<", "≤")).value(TokenKind::Le),
        '<'.value(TokenKind::Lt),
        '='.value(TokenKind::Equal),
        '-'.value(TokenKind::Range),
        '#'.value(TokenKind::Selection),
        '%'.value(TokenKind::Percent),
        ','.value(TokenKind::Comma),
        ';'.value(TokenKind::Semi),
    ))
    .parse_next(input)
}

fn token_kind(input: &mut &str) -> ModalResult<TokenKind> {
    alt((
        word.map(classify_word),
        digit1.value(TokenKind::Digits),
        operator,
    ))
    .parse_next(input)
}

// -- Lexer ------------------------------------------------------------------

/// Lazy tokenizer over a single rule text.
///
/// Yields tokens left to right, ending with exactly one [`TokenKind::Eof`]
/// token. After the end marker or the first [`LexError`] the iterator is
/// exhausted; [`restart()`](Self::restart) rewinds it to the beginning.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    rest: &'a str,
    finished: bool,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            rest: source,
            finished: false,
        }
    }

    pub fn restart(&mut self) {
        self.rest = self.source;
        self.finished = false;
    }

    fn offset(&self) -> usize {
        self.source.len() - self.rest.len()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        self.rest = self.rest.trim_start_matches(is_whitespace);
        let position = self.offset();

        let Some(unexpected) = self.rest.chars().next() else {
            self.finished = true;
            return Some(Ok(Token::new(TokenKind::Eof, "", position)));
        };

        let mut input = self.rest;
        match token_kind.parse_next(&mut input) {
            Ok(kind) => {
                let text = &self.rest[..self.rest.len() - input.len()];
                self.rest = input;
                Some(Ok(Token::new(kind, text, position)))
            }
            Err(_) => {
                self.finished = true;
                Some(Err(LexError {
                    position,
                    unexpected,
                }))
            }
        }
    }
}

impl FusedIterator for Lexer<'_> {}

/// Tokenize a whole rule text, including the trailing [`TokenKind::Eof`].
///
/// # Errors
///
/// Returns [`LexError`] at the first character no lexical rule covers.
pub fn tokenize(text: &str) -> Result<Vec<Token<'_>>, LexError> {
    Lexer::new(text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<TokenKind> {
        tokenize(text)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn lex_boolean_scoring_rule() {
        assert_eq!(
            kinds("If Y = Green"),
            vec![
                TokenKind::If,
                TokenKind::Boolean,
                TokenKind::Equal,
                TokenKind::CeeScore,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn lex_skip_rule() {
        let tokens = tokenize("if N, then Q12").unwrap();
        let got: Vec<(TokenKind, &str)> = tokens.iter().map(|t| (t.kind, t.text)).collect();
        assert_eq!(
            got,
            vec![
                (TokenKind::If, "if"),
                (TokenKind::Boolean, "N"),
                (TokenKind::Comma, ","),
                (TokenKind::Then, "then"),
                (TokenKind::Question, "Q12"),
                (TokenKind::Eof, ""),
            ]
        );
    }

    #[test]
    fn lex_two_char_operators_first() {
        assert_eq!(
            kinds(">= > =< < = ≥ ≤"),
            vec![
                TokenKind::Ge,
                TokenKind::Gt,
                TokenKind::Le,
                TokenKind::Lt,
                TokenKind::Equal,
                TokenKind::Ge,
                TokenKind::Le,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn lex_percent_and_range_without_spaces() {
        assert_eq!(
            kinds("If>=80%=Green"),
            vec![
                TokenKind::If,
                TokenKind::Ge,
                TokenKind::Digits,
                TokenKind::Percent,
                TokenKind::Equal,
                TokenKind::CeeScore,
                TokenKind::Eof,
            ]
        );
        assert_eq!(
            kinds("3-5"),
            vec![
                TokenKind::Digits,
                TokenKind::Range,
                TokenKind::Digits,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn lex_selection_chain() {
        assert_eq!(
            kinds("#2 or #3;"),
            vec![
                TokenKind::Selection,
                TokenKind::Digits,
                TokenKind::Or,
                TokenKind::Selection,
                TokenKind::Digits,
                TokenKind::Semi,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(kinds("IF")[0], TokenKind::Word);
        assert_eq!(kinds("Then")[0], TokenKind::Word);
        assert_eq!(kinds("green")[0], TokenKind::Word);
        assert_eq!(kinds("y")[0], TokenKind::Word);
        assert_eq!(kinds("Q")[0], TokenKind::Word);
        assert_eq!(kinds("Yes")[0], TokenKind::Word);
    }

    #[test]
    fn positions_are_byte_offsets() {
        let tokens = tokenize("If ≥ 5").unwrap();
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 3, 7, 8]);
    }

    #[test]
    fn whitespace_only_yields_eof() {
        let tokens = tokenize(" \t\r\n ").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert_eq!(tokens[0].position, 5);
    }

    #[test]
    fn unexpected_character() {
        let err = tokenize("If Y @ Green").unwrap_err();
        assert_eq!(
            err,
            LexError {
                position: 5,
                unexpected: '@',
            }
        );
    }

    #[test]
    fn lexer_is_fused_and_restartable() {
        let mut lexer = Lexer::new("If Y");
        assert_eq!(lexer.by_ref().count(), 3);
        assert!(lexer.next().is_none());

        lexer.restart();
        let first = lexer.next().unwrap().unwrap();
        assert_eq!(first.kind, TokenKind::If);
    }

    #[test]
    fn lexer_stops_after_error() {
        let mut lexer = Lexer::new("! Y");
        assert!(lexer.next().unwrap().is_err());
        assert!(lexer.next().is_none());
    }
}
