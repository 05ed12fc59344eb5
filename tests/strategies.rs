#![allow(dead_code)]

use ceelang::{
    BooleanLiteral, CeeScore, Comparator, Comparison, ComparisonExpr, Count, QuestionRef,
    RangeExpr, Rule, ScoringCondition, ScoringRule, SelectionExpr, SkipCondition, SkipRule,
};
use proptest::prelude::*;

const FIELDS: &[&str] = &["q1", "q_2", "sec1.q3", "Q10", "_tmp", "a-b"];
const TRAILING: &[&str] = &["Red", "Y", "5", "and", "foo", "Q2", ",", "=", "#", "then", "If"];

pub fn arb_score() -> impl Strategy<Value = CeeScore> {
    prop::sample::select(CeeScore::ALL.to_vec())
}

pub fn arb_field() -> impl Strategy<Value = &'static str> {
    prop::sample::select(FIELDS)
}

fn arb_boolean() -> impl Strategy<Value = BooleanLiteral> {
    prop_oneof![Just(BooleanLiteral::Yes), Just(BooleanLiteral::No)]
}

fn arb_comparator() -> impl Strategy<Value = Comparator> {
    prop_oneof![
        Just(Comparator::Ge),
        Just(Comparator::Gt),
        Just(Comparator::Le),
        Just(Comparator::Lt),
    ]
}

/// A comparison atom. Percent thresholds stay within 0..=100.
fn arb_comparison() -> impl Strategy<Value = Comparison> {
    prop_oneof![
        (arb_comparator(), 0_u32..=1_000).prop_map(|(op, n)| Comparison::new(op, n)),
        (arb_comparator(), 0_u32..=100).prop_map(|(op, n)| Comparison::new(op, n).percent()),
    ]
}

/// A comparison expression shaped the way the parser builds it: atoms
/// folded left, so every right operand is a leaf.
pub fn arb_comparison_expr() -> impl Strategy<Value = ComparisonExpr> {
    (
        arb_comparison(),
        prop::collection::vec((any::<bool>(), arb_comparison()), 0..4),
    )
        .prop_map(|(first, rest)| {
            rest.into_iter()
                .fold(ComparisonExpr::from(first), |acc, (is_and, c)| {
                    if is_and {
                        acc.and(c.into())
                    } else {
                        acc.or(c.into())
                    }
                })
        })
}

fn arb_range() -> impl Strategy<Value = RangeExpr> {
    (0_u32..50, 0_u32..50).prop_map(|(low, span)| RangeExpr {
        low,
        high: low + span,
    })
}

/// Distinct, 1-based option indices in source order.
fn arb_selection() -> impl Strategy<Value = SelectionExpr> {
    prop::collection::btree_set(1_u32..20, 1..5)
        .prop_flat_map(|set| Just(set.into_iter().collect::<Vec<_>>()).prop_shuffle())
        .prop_map(SelectionExpr::new)
}

pub fn arb_scoring_condition() -> impl Strategy<Value = ScoringCondition> {
    prop_oneof![
        arb_boolean().prop_map(ScoringCondition::from),
        (0_u32..100).prop_map(|n| ScoringCondition::from(Count(n))),
        arb_comparison_expr().prop_map(ScoringCondition::from),
        arb_range().prop_map(ScoringCondition::from),
        arb_selection().prop_map(ScoringCondition::from),
    ]
}

fn arb_skip_condition() -> impl Strategy<Value = SkipCondition> {
    prop_oneof![
        arb_boolean().prop_map(SkipCondition::from),
        (0_u32..100).prop_map(|n| SkipCondition::from(Count(n))),
        arb_comparison_expr().prop_map(SkipCondition::from),
    ]
}

pub fn arb_scoring_rule() -> impl Strategy<Value = ScoringRule> {
    (arb_scoring_condition(), arb_score())
        .prop_map(|(condition, target)| ScoringRule { condition, target })
}

pub fn arb_skip_rule() -> impl Strategy<Value = SkipRule> {
    (arb_skip_condition(), 1_u32..500).prop_map(|(condition, number)| SkipRule {
        condition,
        target_question: QuestionRef { number },
    })
}

/// Any rule that passes validation under the default policy.
pub fn arb_rule() -> impl Strategy<Value = Rule> {
    prop_oneof![
        arb_scoring_rule().prop_map(Rule::from),
        arb_skip_rule().prop_map(Rule::from),
    ]
}

/// Text that cannot extend a complete rule.
pub fn arb_trailing_token() -> impl Strategy<Value = &'static str> {
    prop::sample::select(TRAILING)
}
