//! Regex rule algebra.
//!
//! A [`Rule`] is an immutable expression tree over [`Chset`] leaves, built
//! with combinators: `>>` for sequence, `|` for alternation (two leaves
//! merge into one wider leaf), [`Rule::star`] for repetition,
//! [`Rule::plus`] for one-or-more and [`Rule::opt`] for optional-empty.
//! Negation and difference only make sense on character-set leaves and
//! report [`RuleError`] on anything else.

use crate::chset::Chset;
use crate::symbol::Symbol;

/// Misuse of the rule combinators, caught at construction time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("only character-set rules can be negated")]
    NegateComposite,
    #[error("difference requires character-set rules on both sides")]
    SubtractComposite,
}

/// A regex rule: the input alphabet of one automaton.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Single-symbol leaf guarded by a character set.
    Chset(Chset),
    /// All sub-rules in order.
    Seq(Vec<Rule>),
    /// Any one sub-rule.
    Alt(Vec<Rule>),
    /// Zero or more repetitions of the sub-rule.
    Star(Box<Rule>),
}

impl Rule {
    /// Zero-or-more repetitions.
    pub fn star(self) -> Rule {
        Rule::Star(Box::new(self))
    }

    /// One-or-more repetitions, as sequence-then-star.
    pub fn plus(self) -> Rule {
        self.clone() >> self.star()
    }

    /// Zero-or-one occurrence: an alternation with the empty sequence.
    pub fn opt(self) -> Rule {
        Rule::Alt(vec![self, Rule::Seq(Vec::new())])
    }

    /// Complement of a leaf within the chset domain.
    pub fn negate(&self) -> Result<Rule, RuleError> {
        match self {
            Rule::Chset(set) => Ok(Rule::Chset(set.complement())),
            _ => Err(RuleError::NegateComposite),
        }
    }

    /// Leaf difference.
    pub fn minus(&self, other: &Rule) -> Result<Rule, RuleError> {
        match (self, other) {
            (Rule::Chset(a), Rule::Chset(b)) => Ok(Rule::Chset(a.difference(b))),
            _ => Err(RuleError::SubtractComposite),
        }
    }
}

/// Leaf from a character-class spec string, e.g. `chset("a-zA-Z_")`.
pub fn chset(spec: &str) -> Rule {
    Rule::Chset(Chset::spec(spec))
}

/// Leaf matching exactly one symbol.
pub fn sym(s: Symbol) -> Rule {
    Rule::Chset(Chset::of(s))
}

/// Leaf from explicit inclusive symbol ranges.
pub fn ranges(rs: &[(Symbol, Symbol)]) -> Rule {
    Rule::Chset(Chset::from_ranges(rs))
}

/// Sequence matching the text's characters one by one.
pub fn chseq(text: &str) -> Rule {
    Rule::Seq(text.chars().map(|c| sym(c as Symbol)).collect())
}

/// Alternation of several literal strings.
pub fn strset(strs: &[&str]) -> Rule {
    Rule::Alt(strs.iter().map(|s| chseq(s)).collect())
}

/// Any symbol of the complement domain (includes the start-of-file
/// sentinel and the raw-string placeholder, excludes comment-begin and
/// end-of-file).
pub fn any_char() -> Rule {
    Rule::Chset(!Chset::new())
}

impl From<Chset> for Rule {
    fn from(set: Chset) -> Rule {
        Rule::Chset(set)
    }
}

impl std::ops::Shr for Rule {
    type Output = Rule;

    /// Sequence. Flattens a left-hand sequence so long chains stay shallow.
    fn shr(self, rhs: Rule) -> Rule {
        match self {
            Rule::Seq(mut subs) => {
                subs.push(rhs);
                Rule::Seq(subs)
            }
            other => Rule::Seq(vec![other, rhs]),
        }
    }
}

impl std::ops::BitOr for Rule {
    type Output = Rule;

    /// Alternation. Two leaves merge into a single wider leaf; a left-hand
    /// alternation is flattened.
    fn bitor(self, rhs: Rule) -> Rule {
        match (self, rhs) {
            (Rule::Chset(a), Rule::Chset(b)) => Rule::Chset(a | b),
            (Rule::Alt(mut subs), rhs) => {
                subs.push(rhs);
                Rule::Alt(subs)
            }
            (lhs, rhs) => Rule::Alt(vec![lhs, rhs]),
        }
    }
}

#[cfg(test)]
mod tests;
