//! Scoring-logic cells holding several `;`-separated scoring rules.
//!
//! A cell such as `If >10% = Red; If >5% and =<10% = Yellow; If <5% = Green`
//! becomes one nested `if(...)` calculation. Rules are checked in the
//! order written, and the last rule's score is the final else branch.

use std::fmt;

use crate::emit::{Emitter, FieldRef, if_expr, quoted};
use crate::lex::{Token, TokenKind, tokenize};
use crate::parse::{ParseError, parse};
use crate::validate::validate_scoring;
use crate::{CeeError, EmitError, Rule, ScoringRule, ValidationPolicy};

/// The scoring rules of one cell, in source order. Never empty.
///
/// With the `serde` feature, deserializing does not re-validate the rules
/// or check that the list is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoringLogic {
    rules: Vec<ScoringRule>,
}

/// Split at `;`, ending every segment with an end marker placed where the
/// separator (or the real end of input) was.
fn segments<'a>(tokens: &[Token<'a>]) -> Vec<Vec<Token<'a>>> {
    let mut out = Vec::new();
    let mut current = Vec::new();
    for &tok in tokens {
        match tok.kind {
            TokenKind::Semi => {
                current.push(Token::new(TokenKind::Eof, "", tok.position));
                out.push(std::mem::take(&mut current));
            }
            TokenKind::Eof => {
                current.push(tok);
                out.push(std::mem::take(&mut current));
            }
            _ => current.push(tok),
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

impl ScoringLogic {
    /// Parse and validate every rule of a scoring-logic cell.
    ///
    /// # Errors
    ///
    /// Fails on the first rule that does not lex, parse or validate. Skip
    /// rules and empty segments are parse errors.
    pub fn parse(text: &str, policy: ValidationPolicy) -> Result<Self, CeeError> {
        let tokens = tokenize(text)?;
        let mut rules = Vec::new();
        for segment in segments(&tokens) {
            match parse(&segment)? {
                Rule::Scoring(rule) => {
                    validate_scoring(&rule, policy)?;
                    rules.push(rule);
                }
                Rule::Skip(_) => {
                    let at = segment
                        .iter()
                        .find(|t| t.kind == TokenKind::Comma)
                        .copied()
                        .unwrap_or(segment[0]);
                    return Err(ParseError::unexpected(at, &[TokenKind::Equal]).into());
                }
            }
        }
        Ok(Self { rules })
    }

    #[must_use]
    pub fn rules(&self) -> &[ScoringRule] {
        &self.rules
    }

    /// Fold the rules into nested `if(cond, 'score', else)` expressions.
    ///
    /// With `else_expr` every rule gets a branch and `else_expr` is the
    /// innermost else. Without it, the last rule supplies the else score
    /// and its condition is not rendered.
    ///
    /// # Errors
    ///
    /// [`EmitError::InvalidFieldRef`] for an illegal `field`, or
    /// [`EmitError::MissingFallback`] for a single rule with no `else_expr`.
    pub fn emit_calculation(
        &self,
        emitter: &Emitter<'_>,
        field: &str,
        else_expr: Option<&str>,
    ) -> Result<String, EmitError> {
        let field = FieldRef::new(field)?;
        let (innermost, branches) = match else_expr {
            Some(e) => (e.to_owned(), self.rules.as_slice()),
            None => match self.rules.split_last() {
                Some((last, rest)) if !rest.is_empty() => {
                    (quoted(last.target.choice_name()), rest)
                }
                _ => return Err(EmitError::MissingFallback),
            },
        };

        Ok(branches.iter().rev().fold(innermost, |acc, rule| {
            if_expr(
                &emitter.scoring_condition(&rule.condition, &field),
                &quoted(rule.target.choice_name()),
                &acc,
            )
        }))
    }
}

impl fmt::Display for ScoringLogic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{rule}")?;
        }
        Ok(())
    }
}

/// Chain the calculations of a section's questions: each question's
/// calculation is the else branch of the one before it. Questions without
/// scoring logic are skipped.
///
/// Returns `None` when no question carries scoring logic.
///
/// # Errors
///
/// Propagates [`ScoringLogic::emit_calculation`] failures, including
/// [`EmitError::MissingFallback`] when the last scored question has a
/// single rule.
pub fn section_calculation<'q>(
    emitter: &Emitter<'_>,
    questions: impl IntoIterator<Item = (&'q str, Option<&'q ScoringLogic>)>,
) -> Result<Option<String>, EmitError> {
    let scored: Vec<(&str, &ScoringLogic)> = questions
        .into_iter()
        .filter_map(|(field, logic)| logic.map(|l| (field, l)))
        .collect();

    let mut acc: Option<String> = None;
    for (field, logic) in scored.into_iter().rev() {
        acc = Some(logic.emit_calculation(emitter, field, acc.as_deref())?);
    }
    Ok(acc)
}
