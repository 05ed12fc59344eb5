use std::fmt;

use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::take_while;

use crate::{
    BooleanLiteral, Comparator, Comparison, ComparisonExpr, EmitError, EmitOptions, RangeExpr,
    Rule, ScoringCondition, SelectionExpr, SkipCondition,
};

// -- Field references -------------------------------------------------------

fn field_name<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        take_while(1, |c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| {
            c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
        }),
    )
        .take()
        .parse_next(input)
}

/// A field name that is legal inside an XLSForm `${...}` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRef<'a>(&'a str);

impl<'a> FieldRef<'a> {
    /// # Errors
    ///
    /// Returns [`EmitError::InvalidFieldRef`] unless `name` matches
    /// `[A-Za-z_][A-Za-z0-9_.-]*`.
    pub fn new(name: &'a str) -> Result<Self, EmitError> {
        field_name
            .parse(name)
            .map(FieldRef)
            .map_err(|_| EmitError::InvalidFieldRef {
                field: name.to_owned(),
            })
    }

    #[must_use]
    pub fn name(&self) -> &'a str {
        self.0
    }
}

impl fmt::Display for FieldRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${{{}}}", self.0)
    }
}

/// Choice name of answer option `index` of a select question.
#[must_use]
pub fn option_choice_name(field: &str, index: u32) -> String {
    format!("{field}_{index}")
}

/// `if(condition, then, else)`.
#[must_use]
pub fn if_expr(condition: &str, then: &str, otherwise: &str) -> String {
    format!("if({condition}, {then}, {otherwise})")
}

pub(crate) fn quoted(s: &str) -> String {
    format!("'{s}'")
}

// -- Emitter ----------------------------------------------------------------

/// Renders validated rules as XLSForm (XPath) expressions.
#[derive(Debug, Clone, Copy)]
pub struct Emitter<'o> {
    options: &'o EmitOptions,
}

impl<'o> Emitter<'o> {
    #[must_use]
    pub fn new(options: &'o EmitOptions) -> Self {
        Self { options }
    }

    /// The bare boolean condition of `rule`, bound to `field`.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::InvalidFieldRef`] if `field` is not a legal name.
    pub fn condition(&self, rule: &Rule, field: &str) -> Result<String, EmitError> {
        let field = FieldRef::new(field)?;
        Ok(match rule {
            Rule::Scoring(r) => self.scoring_condition(&r.condition, &field),
            Rule::Skip(r) => self.skip_condition(&r.condition, &field),
        })
    }

    /// The expression to embed in the form: a `relevant` condition for skip
    /// rules, an `if(...)` score calculation for scoring rules.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::InvalidFieldRef`] if `field` is not a legal name.
    pub fn expression(&self, rule: &Rule, field: &str) -> Result<String, EmitError> {
        let condition = self.condition(rule, field)?;
        Ok(match rule {
            Rule::Scoring(r) => if_expr(
                &condition,
                &quoted(r.target.choice_name()),
                &quoted(self.options.fallback_score.choice_name()),
            ),
            Rule::Skip(_) => condition,
        })
    }

    pub(crate) fn scoring_condition(
        &self,
        condition: &ScoringCondition,
        field: &FieldRef<'_>,
    ) -> String {
        match condition {
            ScoringCondition::Boolean(b) => self.boolean(*b, field),
            ScoringCondition::Count(c) => format!("count-selected({field}) = {}", c.0),
            ScoringCondition::Comparison(expr) => self.comparison_expr(expr, field),
            ScoringCondition::Range(range) => Self::range(range, field),
            ScoringCondition::Selection(selection) => Self::selection(selection, field),
        }
    }

    fn skip_condition(&self, condition: &SkipCondition, field: &FieldRef<'_>) -> String {
        match condition {
            SkipCondition::Boolean(b) => self.boolean(*b, field),
            SkipCondition::Count(c) => format!("count-selected({field}) = {}", c.0),
            SkipCondition::Comparison(expr) => self.comparison_expr(expr, field),
        }
    }

    fn boolean(&self, b: BooleanLiteral, field: &FieldRef<'_>) -> String {
        let (yes, no) = (&self.options.yes_choice, &self.options.no_choice);
        match (b, self.options.negate_boolean) {
            (BooleanLiteral::Yes, true) => format!("not(selected({field}, '{no}'))"),
            (BooleanLiteral::No, true) => format!("not(selected({field}, '{yes}'))"),
            (BooleanLiteral::Yes, false) => format!("selected({field}, '{yes}')"),
            (BooleanLiteral::No, false) => format!("selected({field}, '{no}')"),
        }
    }

    fn comparison_expr(&self, expr: &ComparisonExpr, field: &FieldRef<'_>) -> String {
        match expr {
            ComparisonExpr::Leaf(c) => self.comparison(c, field),
            ComparisonExpr::And(a, b) => format!(
                "{} and {}",
                self.operand(a, expr, false, field),
                self.operand(b, expr, true, field)
            ),
            ComparisonExpr::Or(a, b) => format!(
                "{} or {}",
                self.operand(a, expr, false, field),
                self.operand(b, expr, true, field)
            ),
        }
    }

    // XPath binds `and` tighter than `or`; the tree folds left at one
    // level, so a child is bracketed unless flattening keeps its meaning.
    fn operand(
        &self,
        child: &ComparisonExpr,
        parent: &ComparisonExpr,
        is_right: bool,
        field: &FieldRef<'_>,
    ) -> String {
        let rendered = self.comparison_expr(child, field);
        let bracket = match (child, parent) {
            (ComparisonExpr::Leaf(_), _) => false,
            (ComparisonExpr::And(..), ComparisonExpr::And(..))
            | (ComparisonExpr::Or(..), ComparisonExpr::Or(..)) => is_right,
            _ => true,
        };
        if bracket {
            format!("({rendered})")
        } else {
            rendered
        }
    }

    fn comparison(&self, c: &Comparison, field: &FieldRef<'_>) -> String {
        let op = match c.comparator {
            Comparator::Ge => ">=",
            Comparator::Gt => ">",
            Comparator::Le => "<=",
            Comparator::Lt => "<",
        };
        if !c.is_percent {
            return format!("count-selected({field}) {op} {}", c.threshold);
        }
        if self.options.percent_as_fraction {
            let fraction = f64::from(c.threshold) / 100.0;
            format!("number({field}) {op} {fraction}")
        } else {
            format!("number({field}) {op} {}", c.threshold)
        }
    }

    fn range(range: &RangeExpr, field: &FieldRef<'_>) -> String {
        format!(
            "count-selected({field}) >= {} and count-selected({field}) <= {}",
            range.low, range.high
        )
    }

    fn selection(selection: &SelectionExpr, field: &FieldRef<'_>) -> String {
        selection
            .options
            .iter()
            .map(|&index| {
                format!(
                    "selected({field}, '{}')",
                    option_choice_name(field.name(), index)
                )
            })
            .collect::<Vec<_>>()
            .join(" or ")
    }
}
