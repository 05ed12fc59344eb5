mod error;
mod grammar;
mod parser;

pub use error::{ParseError, ParseErrorKind};

use crate::lex::Token;
use crate::Rule;

/// Parse one rule from a token stream produced by
/// [`tokenize`](crate::lex::tokenize).
///
/// # Errors
///
/// Returns [`ParseError`] if the tokens do not form exactly one scoring or
/// skip rule.
pub fn parse(tokens: &[Token<'_>]) -> Result<Rule, ParseError> {
    parser::Parser::new(tokens).rule()
}
