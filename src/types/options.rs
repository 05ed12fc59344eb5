use super::score::CeeScore;

/// Controls which structural checks [`validate()`](crate::validate()) applies
/// beyond the grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationPolicy {
    /// Accept `#2 or #2`. Rejected by default.
    pub allow_duplicate_options: bool,
}

/// Rendering choices for emitted XLSForm expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmitOptions {
    /// Choice name of "yes" in the yes/no list.
    pub yes_choice: String,
    /// Choice name of "no" in the yes/no list.
    pub no_choice: String,
    /// Render `Y` as `not(selected(f, 'no'))` instead of
    /// `selected(f, 'yes')`, so an unanswered question matches `Y`.
    pub negate_boolean: bool,
    /// Render `80%` thresholds as `0.8`.
    pub percent_as_fraction: bool,
    /// Else branch of a lone scoring rule's `if(...)`.
    pub fallback_score: CeeScore,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            yes_choice: "yes".to_owned(),
            no_choice: "no".to_owned(),
            negate_boolean: true,
            percent_as_fraction: false,
            fallback_score: CeeScore::Gray,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = EmitOptions::default();
        assert_eq!(opts.yes_choice, "yes");
        assert_eq!(opts.no_choice, "no");
        assert!(opts.negate_boolean);
        assert!(!opts.percent_as_fraction);
        assert_eq!(opts.fallback_score, CeeScore::Gray);
        assert!(!ValidationPolicy::default().allow_duplicate_options);
    }
}
