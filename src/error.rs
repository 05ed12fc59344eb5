use thiserror::Error;

use crate::lex::LexError;
use crate::parse::ParseError;
use crate::{EmitError, ValidationError};

/// Unified error type covering every stage of rule translation.
///
/// Returned by [`parse_rule()`](crate::parse_rule),
/// [`emit_expression()`](crate::emit_expression) and the
/// [`Translator`](crate::Translator) methods.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CeeError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Emit(#[from] EmitError),
}

impl CeeError {
    /// Byte offset into the rule text, for lexing and parsing failures.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::Lex(e) => Some(e.position),
            Self::Parse(e) => Some(e.position()),
            Self::Validation(_) | Self::Emit(_) => None,
        }
    }
}
