mod batch;
mod emit;
mod error;
pub mod lex;
mod logic;
pub mod parse;
mod translator;
mod types;
mod validate;

pub use batch::{BatchReport, CellFailure, LogicCell, LogicColumn, TranslatedCell};
pub use emit::{Emitter, FieldRef, if_expr, option_choice_name};
pub use error::CeeError;
pub use logic::{ScoringLogic, section_calculation};
pub use translator::{Translator, TranslatorBuilder};
pub use types::{
    BooleanLiteral, CeeScore, Comparator, Comparison, ComparisonExpr, Count, EmitError,
    EmitOptions, QuestionRef, RangeExpr, Rule, ScoringCondition, ScoringRule, SelectionExpr,
    SkipCondition, SkipRule, UnknownScore, ValidationError, ValidationPolicy,
};
pub use validate::{validate, validate_with};

/// Lex, parse and validate one rule with the default configuration.
///
/// ```
/// use ceelang::CeeScore;
///
/// let rule = ceelang::parse_rule("If 3-5 = Yellow").unwrap();
/// assert_eq!(rule.as_scoring().map(|r| r.target), Some(CeeScore::Yellow));
/// ```
///
/// # Errors
///
/// Returns the [`CeeError`] of the first stage that fails.
pub fn parse_rule(text: &str) -> Result<Rule, CeeError> {
    Translator::default().parse_rule(text)
}

/// Render `rule` against `field` with the default [`EmitOptions`].
///
/// # Errors
///
/// Returns [`CeeError::Emit`] if `field` is not a legal field name.
pub fn emit_expression(rule: &Rule, field: &str) -> Result<String, CeeError> {
    Translator::default().emit_expression(rule, field)
}

/// Parse a `;`-separated scoring-logic cell with the default policy.
///
/// # Errors
///
/// See [`ScoringLogic::parse`].
pub fn parse_scoring_logic(text: &str) -> Result<ScoringLogic, CeeError> {
    ScoringLogic::parse(text, ValidationPolicy::default())
}
