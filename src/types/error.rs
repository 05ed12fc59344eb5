use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("inverted range {low}-{high}: lower bound exceeds upper bound")]
    InvertedRange { low: u32, high: u32 },

    #[error("selection has no options")]
    EmptySelection,

    #[error("option #{index} is selected more than once")]
    DuplicateOption { index: u32 },

    #[error("option #0 is not a valid answer option; indices start at 1")]
    ZeroOption,

    #[error("Q0 is not a valid skip target; question numbers start at 1")]
    ZeroQuestion,

    #[error("percentage threshold {threshold}% exceeds 100%")]
    PercentOutOfRange { threshold: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    #[error("'{field}' is not a valid field reference")]
    InvalidFieldRef { field: String },

    #[error("a single scoring rule needs an else expression to fall back on")]
    MissingFallback,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_range_message() {
        let err = ValidationError::InvertedRange { low: 10, high: 3 };
        assert_eq!(
            err.to_string(),
            "inverted range 10-3: lower bound exceeds upper bound"
        );
    }

    #[test]
    fn duplicate_option_message() {
        let err = ValidationError::DuplicateOption { index: 2 };
        assert_eq!(err.to_string(), "option #2 is selected more than once");
    }

    #[test]
    fn percent_out_of_range_message() {
        let err = ValidationError::PercentOutOfRange { threshold: 120 };
        assert_eq!(err.to_string(), "percentage threshold 120% exceeds 100%");
    }

    #[test]
    fn zero_question_message() {
        assert_eq!(
            ValidationError::ZeroQuestion.to_string(),
            "Q0 is not a valid skip target; question numbers start at 1"
        );
    }

    #[test]
    fn invalid_field_ref_message() {
        let err = EmitError::InvalidFieldRef {
            field: "1abc".into(),
        };
        assert_eq!(err.to_string(), "'1abc' is not a valid field reference");
    }

    #[test]
    fn missing_fallback_message() {
        assert_eq!(
            EmitError::MissingFallback.to_string(),
            "a single scoring rule needs an else expression to fall back on"
        );
    }
}
