use std::fmt;

use super::condition::{
    BooleanLiteral, ComparisonExpr, Count, QuestionRef, RangeExpr, SelectionExpr,
};
use super::score::CeeScore;

/// Conditions accepted on the left of `= CeeScore`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoringCondition {
    Boolean(BooleanLiteral),
    Count(Count),
    Comparison(ComparisonExpr),
    Range(RangeExpr),
    Selection(SelectionExpr),
}

/// Conditions accepted before `, then Q<n>`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkipCondition {
    Boolean(BooleanLiteral),
    Count(Count),
    Comparison(ComparisonExpr),
}

/// `If <condition> = <score>`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoringRule {
    pub condition: ScoringCondition,
    pub target: CeeScore,
}

/// `If <condition>, then Q<n>`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkipRule {
    pub condition: SkipCondition,
    pub target_question: QuestionRef,
}

/// A single parsed rule cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rule {
    Scoring(ScoringRule),
    Skip(SkipRule),
}

impl Rule {
    #[must_use]
    pub fn as_scoring(&self) -> Option<&ScoringRule> {
        match self {
            Self::Scoring(r) => Some(r),
            Self::Skip(_) => None,
        }
    }

    #[must_use]
    pub fn as_skip(&self) -> Option<&SkipRule> {
        match self {
            Self::Skip(r) => Some(r),
            Self::Scoring(_) => None,
        }
    }
}

impl From<ScoringRule> for Rule {
    fn from(r: ScoringRule) -> Self {
        Rule::Scoring(r)
    }
}

impl From<SkipRule> for Rule {
    fn from(r: SkipRule) -> Self {
        Rule::Skip(r)
    }
}

impl From<BooleanLiteral> for ScoringCondition {
    fn from(b: BooleanLiteral) -> Self {
        ScoringCondition::Boolean(b)
    }
}

impl From<BooleanLiteral> for SkipCondition {
    fn from(b: BooleanLiteral) -> Self {
        SkipCondition::Boolean(b)
    }
}

impl From<Count> for ScoringCondition {
    fn from(c: Count) -> Self {
        ScoringCondition::Count(c)
    }
}

impl From<Count> for SkipCondition {
    fn from(c: Count) -> Self {
        SkipCondition::Count(c)
    }
}

impl From<ComparisonExpr> for ScoringCondition {
    fn from(e: ComparisonExpr) -> Self {
        ScoringCondition::Comparison(e)
    }
}

impl From<ComparisonExpr> for SkipCondition {
    fn from(e: ComparisonExpr) -> Self {
        SkipCondition::Comparison(e)
    }
}

impl From<RangeExpr> for ScoringCondition {
    fn from(r: RangeExpr) -> Self {
        ScoringCondition::Range(r)
    }
}

impl From<SelectionExpr> for ScoringCondition {
    fn from(s: SelectionExpr) -> Self {
        ScoringCondition::Selection(s)
    }
}

impl fmt::Display for ScoringCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Count(c) => write!(f, "{c}"),
            Self::Comparison(e) => write!(f, "{e}"),
            Self::Range(r) => write!(f, "{r}"),
            Self::Selection(s) => write!(f, "{s}"),
        }
    }
}

impl fmt::Display for SkipCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Count(c) => write!(f, "{c}"),
            Self::Comparison(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for ScoringRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "If {} = {}", self.condition, self.target)
    }
}

impl fmt::Display for SkipRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "If {}, then {}", self.condition, self.target_question)
    }
}

/// Renders the canonical rule text, which parses back to an equal rule.
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scoring(r) => write!(f, "{r}"),
            Self::Skip(r) => write!(f, "{r}"),
        }
    }
}
