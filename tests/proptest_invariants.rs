mod strategies;

use ceelang::lex::tokenize;
use ceelang::parse::{ParseErrorKind, parse};
use ceelang::{CeeError, Rule, Translator, emit_expression, parse_rule, validate};
use proptest::prelude::*;
use strategies::{arb_field, arb_rule, arb_scoring_rule, arb_trailing_token};

// ---------------------------------------------------------------------------
// Invariant 1: Canonical round-trip
//
// Rendering a rule and parsing the text back yields the same rule, and
// rendering that again yields the same text.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn render_parse_render(rule in arb_rule()) {
        let text = rule.to_string();
        let parsed = parse_rule(&text);
        prop_assert_eq!(parsed.as_ref(), Ok(&rule), "text: {}", text);
        let again = parsed.map(|r| r.to_string());
        prop_assert_eq!(again.as_deref(), Ok(text.as_str()));
    }

    #[test]
    fn generated_rules_validate(rule in arb_rule()) {
        prop_assert_eq!(validate(&rule), Ok(()));
    }
}

// ---------------------------------------------------------------------------
// Invariant 2: Trailing input is rejected
//
// Any token appended after a complete rule makes the whole text fail to
// parse, and the error points at that token.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn trailing_token_rejected(rule in arb_rule(), extra in arb_trailing_token()) {
        let rendered = rule.to_string();
        let text = format!("{rendered} {extra}");
        let tokens = tokenize(&text).unwrap();
        let err = parse(&tokens).unwrap_err();
        prop_assert_eq!(err.position(), rendered.len() + 1);
        prop_assert!(
            matches!(err.kind(), ParseErrorKind::TrailingInput { .. }),
            "unexpected error kind {:?}", err.kind()
        );
    }
}

// ---------------------------------------------------------------------------
// Invariant 3: Determinism
//
// Translating the same text twice gives identical results.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn translation_is_deterministic(rule in arb_rule(), field in arb_field()) {
        let text = rule.to_string();
        let first: Result<String, CeeError> =
            parse_rule(&text).and_then(|r| emit_expression(&r, field));
        for _ in 0..3 {
            let again = parse_rule(&text).and_then(|r| emit_expression(&r, field));
            prop_assert_eq!(&first, &again);
        }
    }

    #[test]
    fn arbitrary_text_never_panics(text in "[ -~≥≤]{0,40}") {
        let _ = parse_rule(&text);
    }
}

// ---------------------------------------------------------------------------
// Invariant 4: Emission is total on validated rules
//
// Every validated rule emits for every legal field, and the output
// references that field.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn emit_total(rule in arb_rule(), field in arb_field()) {
        let expr = emit_expression(&rule, field);
        prop_assert!(expr.is_ok(), "{:?}", expr);
        let expr = expr.unwrap_or_default();
        let field_ref = format!("${{{field}}}");
        prop_assert!(expr.contains(&field_ref));
    }

    #[test]
    fn scoring_expression_names_its_score(rule in arb_scoring_rule(), field in arb_field()) {
        let target = rule.target;
        let expr = emit_expression(&Rule::from(rule), field).unwrap_or_default();
        let quoted = format!("'{}'", target.choice_name());
        prop_assert!(expr.starts_with("if("));
        prop_assert!(expr.contains(&quoted));
    }

    #[test]
    fn fraction_mode_is_total(rule in arb_rule(), field in arb_field()) {
        let t = Translator::builder()
            .percent_as_fraction(true)
            .negate_boolean(false)
            .build();
        prop_assert!(t.emit_expression(&rule, field).is_ok());
    }
}
