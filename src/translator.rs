use crate::emit::{Emitter, quoted};
use crate::lex::tokenize;
use crate::logic::ScoringLogic;
use crate::parse::parse;
use crate::validate::validate_with;
use crate::{CeeError, CeeScore, EmitOptions, Rule, ValidationPolicy};

/// Builder for a [`Translator`].
///
/// # Example
///
/// ```
/// use ceelang::Translator;
///
/// let translator = Translator::builder()
///     .allow_duplicate_options(true)
///     .percent_as_fraction(true)
///     .build();
///
/// let rule = translator.parse_rule("If >=80% = Green").unwrap();
/// let expr = translator.emit_condition(&rule, "Q1").unwrap();
/// assert_eq!(expr, "number(${Q1}) >= 0.8");
/// ```
#[derive(Debug, Default)]
pub struct TranslatorBuilder {
    policy: ValidationPolicy,
    options: EmitOptions,
}

impl TranslatorBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn allow_duplicate_options(mut self, allow: bool) -> Self {
        self.policy.allow_duplicate_options = allow;
        self
    }

    #[must_use]
    pub fn yes_choice(mut self, name: &str) -> Self {
        name.clone_into(&mut self.options.yes_choice);
        self
    }

    #[must_use]
    pub fn no_choice(mut self, name: &str) -> Self {
        name.clone_into(&mut self.options.no_choice);
        self
    }

    #[must_use]
    pub fn negate_boolean(mut self, negate: bool) -> Self {
        self.options.negate_boolean = negate;
        self
    }

    #[must_use]
    pub fn percent_as_fraction(mut self, fraction: bool) -> Self {
        self.options.percent_as_fraction = fraction;
        self
    }

    #[must_use]
    pub fn fallback_score(mut self, score: CeeScore) -> Self {
        self.options.fallback_score = score;
        self
    }

    #[must_use]
    pub fn build(self) -> Translator {
        Translator {
            policy: self.policy,
            options: self.options,
        }
    }
}

/// Parses, validates and emits rule cells with a fixed configuration.
///
/// Immutable once built; share it behind `Arc` to translate from several
/// threads.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    policy: ValidationPolicy,
    options: EmitOptions,
}

impl Translator {
    #[must_use]
    pub fn builder() -> TranslatorBuilder {
        TranslatorBuilder::new()
    }

    #[must_use]
    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    #[must_use]
    pub fn options(&self) -> &EmitOptions {
        &self.options
    }

    #[must_use]
    pub fn emitter(&self) -> Emitter<'_> {
        Emitter::new(&self.options)
    }

    /// Lex, parse and validate one rule.
    ///
    /// # Errors
    ///
    /// Returns the [`CeeError`] of the first stage that fails.
    pub fn parse_rule(&self, text: &str) -> Result<Rule, CeeError> {
        let tokens = tokenize(text)?;
        let rule = parse(&tokens)?;
        validate_with(&rule, self.policy)?;
        Ok(rule)
    }

    /// See [`Emitter::expression`].
    ///
    /// # Errors
    ///
    /// Returns [`CeeError::Emit`] for an illegal field reference.
    pub fn emit_expression(&self, rule: &Rule, field: &str) -> Result<String, CeeError> {
        Ok(self.emitter().expression(rule, field)?)
    }

    /// See [`Emitter::condition`].
    ///
    /// # Errors
    ///
    /// Returns [`CeeError::Emit`] for an illegal field reference.
    pub fn emit_condition(&self, rule: &Rule, field: &str) -> Result<String, CeeError> {
        Ok(self.emitter().condition(rule, field)?)
    }

    /// Parse a `;`-separated scoring-logic cell.
    ///
    /// # Errors
    ///
    /// See [`ScoringLogic::parse`].
    pub fn parse_scoring_logic(&self, text: &str) -> Result<ScoringLogic, CeeError> {
        ScoringLogic::parse(text, self.policy)
    }

    /// Parse a scoring-logic cell and emit its calculation in one step.
    ///
    /// A cell with a single rule and no `else_expr` falls back to the
    /// configured fallback score.
    ///
    /// # Errors
    ///
    /// Returns the [`CeeError`] of the first stage that fails.
    pub fn scoring_calculation(
        &self,
        text: &str,
        field: &str,
        else_expr: Option<&str>,
    ) -> Result<String, CeeError> {
        let logic = self.parse_scoring_logic(text)?;
        let fallback;
        let else_expr = match else_expr {
            Some(e) => Some(e),
            None if logic.rules().len() == 1 => {
                fallback = quoted(self.options.fallback_score.choice_name());
                Some(fallback.as_str())
            }
            None => None,
        };
        Ok(logic.emit_calculation(&self.emitter(), field, else_expr)?)
    }
}
