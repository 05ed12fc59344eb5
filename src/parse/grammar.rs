use crate::lex::{Token, TokenKind};
use crate::{
    BooleanLiteral, CeeScore, Comparator, Comparison, ComparisonExpr, Count, QuestionRef,
    RangeExpr, Rule, ScoringCondition, ScoringRule, SelectionExpr, SkipCondition, SkipRule,
};

use super::error::ParseError;
use super::parser::Parser;

const CONDITION_START: &[TokenKind] = &[
    TokenKind::Boolean,
    TokenKind::Digits,
    TokenKind::Ge,
    TokenKind::Gt,
    TokenKind::Le,
    TokenKind::Lt,
    TokenKind::Selection,
];

const COMPARATORS: &[TokenKind] = &[TokenKind::Ge, TokenKind::Gt, TokenKind::Le, TokenKind::Lt];

/// What follows a condition that may head either rule family.
enum Tail {
    Score(CeeScore),
    Skip(QuestionRef),
}

fn finish_rule<C>(condition: C, tail: Tail) -> Rule
where
    C: Into<ScoringCondition> + Into<SkipCondition>,
{
    match tail {
        Tail::Score(target) => Rule::Scoring(ScoringRule {
            condition: Into::<ScoringCondition>::into(condition),
            target,
        }),
        Tail::Skip(target_question) => Rule::Skip(SkipRule {
            condition: Into::<SkipCondition>::into(condition),
            target_question,
        }),
    }
}

// -- Top level --------------------------------------------------------------

impl Parser<'_, '_> {
    /// `If` followed by one of the eight rule shapes, then end of input.
    ///
    /// The token after `If` (plus one more for `DIGITS`) commits to a branch;
    /// nothing is ever re-parsed.
    pub(crate) fn rule(&mut self) -> Result<Rule, ParseError> {
        self.expect(TokenKind::If)?;

        let head = self.peek();
        let rule = match head.kind {
            TokenKind::Boolean => {
                let b = self.boolean()?;
                let tail = self.tail()?;
                finish_rule(b, tail)
            }
            TokenKind::Digits if self.peek_nth(1).kind == TokenKind::Range => {
                let range = self.range()?;
                let target = self.score_tail()?;
                Rule::Scoring(ScoringRule {
                    condition: ScoringCondition::Range(range),
                    target,
                })
            }
            TokenKind::Digits => {
                let count = Count(Self::number(self.advance())?);
                let tail = self.tail()?;
                finish_rule(count, tail)
            }
            kind if kind.is_comparator() => {
                let expr = self.comparison_expr()?;
                let tail = self.tail()?;
                finish_rule(expr, tail)
            }
            TokenKind::Selection => {
                let selection = self.selection_expr()?;
                let target = self.score_tail()?;
                Rule::Scoring(ScoringRule {
                    condition: ScoringCondition::Selection(selection),
                    target,
                })
            }
            _ => return Err(ParseError::unexpected(head, CONDITION_START)),
        };

        self.finish()?;
        Ok(rule)
    }

    /// `= CeeScore` or `, then QUESTION`.
    fn tail(&mut self) -> Result<Tail, ParseError> {
        let tok = self.peek();
        match tok.kind {
            TokenKind::Equal => self.score_tail().map(Tail::Score),
            TokenKind::Comma => {
                self.advance();
                self.expect(TokenKind::Then)?;
                let question = self.expect(TokenKind::Question)?;
                Ok(Tail::Skip(Self::question(question)?))
            }
            _ => Err(ParseError::unexpected(
                tok,
                &[TokenKind::Equal, TokenKind::Comma],
            )),
        }
    }

    /// `= CeeScore`.
    fn score_tail(&mut self) -> Result<CeeScore, ParseError> {
        self.expect(TokenKind::Equal)?;
        let tok = self.expect(TokenKind::CeeScore)?;
        tok.text
            .parse()
            .map_err(|_| ParseError::unexpected(tok, &[TokenKind::CeeScore]))
    }

    fn question(tok: Token<'_>) -> Result<QuestionRef, ParseError> {
        let Some(text) = tok.text.strip_prefix('Q').filter(|n| !n.is_empty()) else {
            return Err(ParseError::unexpected(tok, &[TokenKind::Question]));
        };
        let digits = Token::new(TokenKind::Digits, text, tok.position + 1);
        Ok(QuestionRef {
            number: Self::number(digits)?,
        })
    }

    // -- Conditions ---------------------------------------------------------

    fn boolean(&mut self) -> Result<BooleanLiteral, ParseError> {
        let tok = self.expect(TokenKind::Boolean)?;
        match tok.text {
            "Y" => Ok(BooleanLiteral::Yes),
            "N" => Ok(BooleanLiteral::No),
            _ => Err(ParseError::unexpected(tok, &[TokenKind::Boolean])),
        }
    }

    fn range(&mut self) -> Result<RangeExpr, ParseError> {
        let low = Self::number(self.expect(TokenKind::Digits)?)?;
        self.expect(TokenKind::Range)?;
        let high = Self::number(self.expect(TokenKind::Digits)?)?;
        Ok(RangeExpr { low, high })
    }

    /// Comparison atoms joined by `and` / `or`, folded left to right at a
    /// single precedence level.
    fn comparison_expr(&mut self) -> Result<ComparisonExpr, ParseError> {
        let mut expr = ComparisonExpr::Leaf(self.comparison()?);
        loop {
            match self.peek().kind {
                TokenKind::And => {
                    self.advance();
                    expr = expr.and(self.comparison()?.into());
                }
                TokenKind::Or => {
                    self.advance();
                    expr = expr.or(self.comparison()?.into());
                }
                _ => return Ok(expr),
            }
        }
    }

    /// `GE|GT|LE|LT DIGITS [%]`. The percent flag applies to this atom only.
    fn comparison(&mut self) -> Result<Comparison, ParseError> {
        let tok = self.peek();
        let comparator = match tok.kind {
            TokenKind::Ge => Comparator::Ge,
            TokenKind::Gt => Comparator::Gt,
            TokenKind::Le => Comparator::Le,
            TokenKind::Lt => Comparator::Lt,
            _ => return Err(ParseError::unexpected(tok, COMPARATORS)),
        };
        self.advance();

        let threshold = Self::number(self.expect(TokenKind::Digits)?)?;
        let is_percent = self.eat(TokenKind::Percent);
        Ok(Comparison {
            comparator,
            threshold,
            is_percent,
        })
    }

    fn selection_expr(&mut self) -> Result<SelectionExpr, ParseError> {
        let mut options = vec![self.option()?];
        while self.eat(TokenKind::Or) {
            options.push(self.option()?);
        }
        Ok(SelectionExpr { options })
    }

    /// `# DIGITS`.
    fn option(&mut self) -> Result<u32, ParseError> {
        self.expect(TokenKind::Selection)?;
        Self::number(self.expect(TokenKind::Digits)?)
    }
}
