mod condition;
mod error;
mod options;
mod rule;
mod score;

pub use condition::{
    BooleanLiteral, Comparator, Comparison, ComparisonExpr, Count, QuestionRef, RangeExpr,
    SelectionExpr,
};
pub use error::{EmitError, ValidationError};
pub use options::{EmitOptions, ValidationPolicy};
pub use rule::{Rule, ScoringCondition, ScoringRule, SkipCondition, SkipRule};
pub use score::{CeeScore, UnknownScore};
