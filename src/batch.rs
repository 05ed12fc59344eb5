//! Translating many checklist cells at once.
//!
//! A failing cell never stops the batch; it is reported with the row,
//! column and question it came from.

use std::fmt;

use crate::lex::{Token, TokenKind, tokenize};
use crate::parse::ParseError;
use crate::{CeeError, QuestionRef, Translator};

/// Which logic column of a checklist row a cell came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogicColumn {
    Scoring,
    Skip,
}

impl fmt::Display for LogicColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scoring => f.write_str("scoring_logic"),
            Self::Skip => f.write_str("skip_logic"),
        }
    }
}

/// One logic-bearing spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogicCell {
    pub row: usize,
    pub column: LogicColumn,
    /// The question the rule's condition binds to.
    pub field: String,
    pub text: String,
}

impl LogicCell {
    #[must_use]
    pub fn scoring(row: usize, field: &str, text: &str) -> Self {
        Self {
            row,
            column: LogicColumn::Scoring,
            field: field.to_owned(),
            text: text.to_owned(),
        }
    }

    #[must_use]
    pub fn skip(row: usize, field: &str, text: &str) -> Self {
        Self {
            row,
            column: LogicColumn::Skip,
            field: field.to_owned(),
            text: text.to_owned(),
        }
    }
}

/// A successfully translated cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TranslatedCell {
    pub row: usize,
    pub column: LogicColumn,
    pub field: String,
    /// The `calculation` (scoring) or `relevant` (skip) expression.
    pub expression: String,
    /// The question a skip rule jumps to. `None` for scoring cells.
    pub target_question: Option<QuestionRef>,
}

/// A cell that failed to translate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellFailure {
    pub row: usize,
    pub column: LogicColumn,
    pub field: String,
    pub error: CeeError,
}

impl fmt::Display for CellFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {}, {} of '{}': {}",
            self.row, self.column, self.field, self.error
        )
    }
}

/// Outcome of [`Translator::translate_batch()`].
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct BatchReport {
    translated: Vec<TranslatedCell>,
    failures: Vec<CellFailure>,
}

impl BatchReport {
    /// Translated cells, in input order.
    #[must_use]
    pub fn translated(&self) -> &[TranslatedCell] {
        &self.translated
    }

    /// Failed cells, in input order.
    #[must_use]
    pub fn failures(&self) -> &[CellFailure] {
        &self.failures
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translated: {}, failed: {}",
            self.translated.len(),
            self.failures.len()
        )?;
        for failure in &self.failures {
            write!(f, "\n  {failure}")?;
        }
        Ok(())
    }
}

impl Translator {
    /// Translate a single cell.
    ///
    /// Scoring cells may hold several `;`-separated rules; skip cells must
    /// hold exactly one skip rule.
    ///
    /// # Errors
    ///
    /// Returns the [`CeeError`] of the first stage that fails. A scoring
    /// rule in a skip column is a parse error at the `=`.
    pub fn translate_cell(&self, cell: &LogicCell) -> Result<TranslatedCell, CeeError> {
        let (expression, target_question) = match cell.column {
            LogicColumn::Scoring => (
                self.scoring_calculation(&cell.text, &cell.field, None)?,
                None,
            ),
            LogicColumn::Skip => {
                let rule = self.parse_rule(&cell.text)?;
                let Some(skip) = rule.as_skip() else {
                    return Err(scoring_in_skip_column(&cell.text));
                };
                (
                    self.emit_condition(&rule, &cell.field)?,
                    Some(skip.target_question),
                )
            }
        };
        Ok(TranslatedCell {
            row: cell.row,
            column: cell.column,
            field: cell.field.clone(),
            expression,
            target_question,
        })
    }

    /// Translate every cell, collecting failures instead of stopping.
    pub fn translate_batch<'c>(
        &self,
        cells: impl IntoIterator<Item = &'c LogicCell>,
    ) -> BatchReport {
        let mut report = BatchReport::default();
        for cell in cells {
            match self.translate_cell(cell) {
                Ok(done) => {
                    log::debug!(
                        "row {} {} of '{}': {}",
                        cell.row,
                        cell.column,
                        cell.field,
                        done.expression
                    );
                    report.translated.push(done);
                }
                Err(error) => {
                    let failure = CellFailure {
                        row: cell.row,
                        column: cell.column,
                        field: cell.field.clone(),
                        error,
                    };
                    log::warn!("skipping cell: {failure}");
                    report.failures.push(failure);
                }
            }
        }
        log::info!(
            "translated {} logic cells, {} failed",
            report.translated.len(),
            report.failures.len()
        );
        report
    }
}

fn scoring_in_skip_column(text: &str) -> CeeError {
    // The text already parsed as a scoring rule, so it lexes and has an `=`.
    let equal = tokenize(text)
        .ok()
        .and_then(|tokens| tokens.into_iter().find(|t| t.kind == TokenKind::Equal))
        .unwrap_or_else(|| Token::new(TokenKind::Eof, "", text.len()));
    ParseError::unexpected(equal, &[TokenKind::Comma]).into()
}
