use thiserror::Error;

/// A character in the rule text that no lexical rule covers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("lex error at offset {position}: unexpected character '{unexpected}'")]
pub struct LexError {
    pub position: usize,
    pub unexpected: char,
}
