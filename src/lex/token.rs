use std::fmt;

/// The closed set of token kinds produced by the [`Lexer`](super::Lexer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `Y` or `N`.
    Boolean,
    /// `Gray`, `Green`, `Red` or `Yellow`.
    CeeScore,
    Digits,
    /// `Q` followed by digits, e.g. `Q5`.
    Question,
    /// `#`, introducing an answer option index.
    Selection,
    Percent,
    Comma,
    Semi,
    /// `If` or `if`.
    If,
    Then,
    And,
    Equal,
    /// `>=` or `≥`.
    Ge,
    Gt,
    /// `=<` or `≤`.
    Le,
    Lt,
    Or,
    /// `-` between the bounds of a range.
    Range,
    /// A run of letters that is not a keyword or literal. No production
    /// accepts it, so it always surfaces as a parse error at its position.
    Word,
    Eof,
}

impl TokenKind {
    /// `true` for `>=`, `>`, `=<` and `<`.
    #[must_use]
    pub fn is_comparator(self) -> bool {
        matches!(self, Self::Ge | Self::Gt | Self::Le | Self::Lt)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Boolean => "BOOLEAN",
            Self::CeeScore => "CEE_SCORE",
            Self::Digits => "DIGITS",
            Self::Question => "QUESTION",
            Self::Selection => "'#'",
            Self::Percent => "'%'",
            Self::Comma => "','",
            Self::Semi => "';'",
            Self::If => "'If'",
            Self::Then => "'then'",
            Self::And => "'and'",
            Self::Equal => "'='",
            Self::Ge => "'>='",
            Self::Gt => "'>'",
            Self::Le => "'=<'",
            Self::Lt => "'<'",
            Self::Or => "'or'",
            Self::Range => "'-'",
            Self::Word => "word",
            Self::Eof => "end of input",
        };
        f.write_str(s)
    }
}

/// A single lexed token. `position` is the byte offset of `text` in the
/// rule source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub position: usize,
}

impl<'a> Token<'a> {
    #[must_use]
    pub fn new(kind: TokenKind, text: &'a str, position: usize) -> Self {
        Self {
            kind,
            text,
            position,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "{}", self.kind),
            _ => write!(f, "'{}'", self.text),
        }
    }
}
