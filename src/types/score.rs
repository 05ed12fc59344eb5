use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The four outcome categories a scoring rule may assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CeeScore {
    Gray,
    Green,
    Red,
    Yellow,
}

impl CeeScore {
    pub const ALL: [CeeScore; 4] = [Self::Gray, Self::Green, Self::Red, Self::Yellow];

    /// The choice name used for this score in generated forms.
    #[must_use]
    pub fn choice_name(self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Green => "green",
            Self::Red => "red",
            Self::Yellow => "yellow",
        }
    }
}

impl fmt::Display for CeeScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Gray => "Gray",
            Self::Green => "Green",
            Self::Red => "Red",
            Self::Yellow => "Yellow",
        };
        f.write_str(s)
    }
}

/// Returned when text is not one of `Gray`, `Green`, `Red` or `Yellow`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown cee score '{0}'")]
pub struct UnknownScore(pub String);

impl FromStr for CeeScore {
    type Err = UnknownScore;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Gray" => Ok(Self::Gray),
            "Green" => Ok(Self::Green),
            "Red" => Ok(Self::Red),
            "Yellow" => Ok(Self::Yellow),
            other => Err(UnknownScore(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_scores() {
        for score in CeeScore::ALL {
            assert_eq!(score.to_string().parse::<CeeScore>(), Ok(score));
        }
    }

    #[test]
    fn scores_are_case_sensitive() {
        assert_eq!(
            "green".parse::<CeeScore>(),
            Err(UnknownScore("green".into()))
        );
    }

    #[test]
    fn unknown_score_message() {
        let err = "Blue".parse::<CeeScore>().unwrap_err();
        assert_eq!(err.to_string(), "unknown cee score 'Blue'");
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn choice_names_are_lowercase() {
        let names: Vec<&str> = CeeScore::ALL.iter().map(|s| s.choice_name()).collect();
        assert_eq!(names, vec!["gray", "green", "red", "yellow"]);
    }
}
