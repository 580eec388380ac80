use crate::ability::AbilityCode;
use crate::common::*;
use std::fmt;

/// A parsed roll: one or more signed terms in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub terms: NonEmpty<SignedTerm>,
}

impl Expression {
    pub(crate) fn new(terms: NonEmpty<SignedTerm>) -> Self {
        Self { terms }
    }

    /// Total number of dice across every dice term, saturating.
    pub fn dice_count(&self) -> u64 {
        self.terms
            .iter()
            .filter_map(|t| match t.term {
                Term::Dice(dice) => Some(u64::from(dice.num.get())),
                _ => None,
            })
            .fold(0, u64::saturating_add)
    }
}

/// The canonical rendering: explicit dice counts, uppercase ability codes and
/// no whitespace.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 || term.sign.is_neg() {
                fmt::Display::fmt(&term.sign, f)?;
            }
            fmt::Display::fmt(&term.term, f)?;
        }
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SignedTerm {
    pub sign: Sign,
    pub term: Term,
}

impl SignedTerm {
    pub fn new(sign: Sign, term: Term) -> Self {
        Self { sign, term }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Term {
    Dice(Dice),
    Number(Int),
    Ability(AbilityCode),
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dice(dice) => fmt::Display::fmt(dice, f),
            Self::Number(x) => fmt::Display::fmt(x, f),
            Self::Ability(code) => fmt::Display::fmt(code, f),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Dice {
    pub num: Num,
    pub sides: NonZeroUInt,
}

impl Dice {
    pub fn new(num: Num, sides: NonZeroUInt) -> Self {
        Self { num, sides }
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.num, self.sides)
    }
}
