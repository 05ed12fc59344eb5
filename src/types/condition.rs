use std::fmt;

/// `Y` / `N` in rule text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BooleanLiteral {
    Yes,
    No,
}

/// A bare number condition: the answer count equals exactly this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Count(pub u32);

/// Comparison operators supported in rule expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Comparator {
    Ge,
    Gt,
    Le,
    Lt,
}

/// A single `>=80%`-style atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison {
    pub comparator: Comparator,
    pub threshold: u32,
    pub is_percent: bool,
}

impl Comparison {
    #[must_use]
    pub fn new(comparator: Comparator, threshold: u32) -> Self {
        Self {
            comparator,
            threshold,
            is_percent: false,
        }
    }

    #[must_use]
    pub fn percent(mut self) -> Self {
        self.is_percent = true;
        self
    }
}

/// Comparison atoms composed with `and` / `or`.
///
/// Both operators bind at the same level and fold left to right, so
/// `>1 or >2 and <9` is `And(Or(>1, >2), <9)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComparisonExpr {
    Leaf(Comparison),
    And(Box<ComparisonExpr>, Box<ComparisonExpr>),
    Or(Box<ComparisonExpr>, Box<ComparisonExpr>),
}

impl ComparisonExpr {
    #[must_use]
    pub fn and(self, other: ComparisonExpr) -> ComparisonExpr {
        ComparisonExpr::And(Box::new(self), Box::new(other))
    }

    #[must_use]
    pub fn or(self, other: ComparisonExpr) -> ComparisonExpr {
        ComparisonExpr::Or(Box::new(self), Box::new(other))
    }

    /// Leaves in source order.
    #[must_use]
    pub fn leaves(&self) -> Vec<&Comparison> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Comparison>) {
        match self {
            Self::Leaf(c) => out.push(c),
            Self::And(a, b) | Self::Or(a, b) => {
                a.collect_leaves(out);
                b.collect_leaves(out);
            }
        }
    }
}

impl From<Comparison> for ComparisonExpr {
    fn from(c: Comparison) -> Self {
        ComparisonExpr::Leaf(c)
    }
}

/// `low-high`, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeExpr {
    pub low: u32,
    pub high: u32,
}

/// `#2 or #3`: any of these answer options was chosen.
///
/// Indices are kept in source order so errors can point at the offending one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionExpr {
    pub options: Vec<u32>,
}

impl SelectionExpr {
    #[must_use]
    pub fn new(options: impl IntoIterator<Item = u32>) -> Self {
        Self {
            options: options.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn or(mut self, option: u32) -> Self {
        self.options.push(option);
        self
    }
}

/// The question a skip rule jumps to, from a `Q<digits>` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestionRef {
    pub number: u32,
}

impl fmt::Display for BooleanLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => f.write_str("Y"),
            Self::No => f.write_str("N"),
        }
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ge => f.write_str(">="),
            Self::Gt => f.write_str(">"),
            Self::Le => f.write_str("=<"),
            Self::Lt => f.write_str("<"),
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.comparator, self.threshold)?;
        if self.is_percent {
            f.write_str("%")?;
        }
        Ok(())
    }
}

impl fmt::Display for ComparisonExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(c) => write!(f, "{c}"),
            Self::And(a, b) => write!(f, "{a} and {b}"),
            Self::Or(a, b) => write!(f, "{a} or {b}"),
        }
    }
}

impl fmt::Display for RangeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

impl fmt::Display for SelectionExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, option) in self.options.iter().enumerate() {
            if i > 0 {
                f.write_str(" or ")?;
            }
            write!(f, "#{option}")?;
        }
        Ok(())
    }
}

impl fmt::Display for QuestionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.number)
    }
}
