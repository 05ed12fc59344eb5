use std::collections::HashSet;

use crate::{
    ComparisonExpr, RangeExpr, Rule, ScoringCondition, ScoringRule, SelectionExpr,
    SkipCondition, ValidationError, ValidationPolicy,
};

/// Check the invariants the grammar cannot express, with the default
/// [`ValidationPolicy`].
///
/// # Errors
///
/// Returns the first [`ValidationError`] found.
pub fn validate(rule: &Rule) -> Result<(), ValidationError> {
    validate_with(rule, ValidationPolicy::default())
}

/// Like [`validate`], with an explicit policy.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found.
pub fn validate_with(rule: &Rule, policy: ValidationPolicy) -> Result<(), ValidationError> {
    match rule {
        Rule::Scoring(r) => validate_scoring(r, policy),
        Rule::Skip(r) => {
            if r.target_question.number == 0 {
                return Err(ValidationError::ZeroQuestion);
            }
            check_skip(&r.condition)
        }
    }
}

pub(crate) fn validate_scoring(
    rule: &ScoringRule,
    policy: ValidationPolicy,
) -> Result<(), ValidationError> {
    check_scoring(&rule.condition, policy)
}

fn check_scoring(
    condition: &ScoringCondition,
    policy: ValidationPolicy,
) -> Result<(), ValidationError> {
    match condition {
        ScoringCondition::Boolean(_) | ScoringCondition::Count(_) => Ok(()),
        ScoringCondition::Comparison(expr) => check_comparison(expr),
        ScoringCondition::Range(range) => check_range(range),
        ScoringCondition::Selection(selection) => check_selection(selection, policy),
    }
}

fn check_skip(condition: &SkipCondition) -> Result<(), ValidationError> {
    match condition {
        SkipCondition::Boolean(_) | SkipCondition::Count(_) => Ok(()),
        SkipCondition::Comparison(expr) => check_comparison(expr),
    }
}

fn check_comparison(expr: &ComparisonExpr) -> Result<(), ValidationError> {
    for leaf in expr.leaves() {
        if leaf.is_percent && leaf.threshold > 100 {
            return Err(ValidationError::PercentOutOfRange {
                threshold: leaf.threshold,
            });
        }
    }
    Ok(())
}

fn check_range(range: &RangeExpr) -> Result<(), ValidationError> {
    if range.low > range.high {
        return Err(ValidationError::InvertedRange {
            low: range.low,
            high: range.high,
        });
    }
    Ok(())
}

fn check_selection(
    selection: &SelectionExpr,
    policy: ValidationPolicy,
) -> Result<(), ValidationError> {
    if selection.options.is_empty() {
        return Err(ValidationError::EmptySelection);
    }
    let mut seen = HashSet::new();
    for &index in &selection.options {
        if index == 0 {
            return Err(ValidationError::ZeroOption);
        }
        if !seen.insert(index) && !policy.allow_duplicate_options {
            return Err(ValidationError::DuplicateOption { index });
        }
    }
    Ok(())
}
