use crate::common::{Int, UInt};
use crate::parse::ast::Expression;
use serde::Serialize;
use std::fmt;

#[enum_dispatch::enum_dispatch]
pub trait Contribution {
    /// What this part adds to the roll total.
    fn contribution(&self) -> Int;
}

/// One entry of a roll's trace.
#[enum_dispatch::enum_dispatch(Contribution)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Part {
    Die(DiePart),
    Mod(ModPart),
}

impl Part {
    /// The rolled face, for die parts.
    pub fn face(&self) -> Option<UInt> {
        match self {
            Self::Die(die) => Some(die.value),
            Self::Mod(_) => None,
        }
    }
}

/// A single die as rolled. `value` is always the natural face; a die from a
/// subtracted group is marked `negated` and counts against the total.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct DiePart {
    pub value: UInt,
    pub sides: UInt,
    #[serde(skip_serializing_if = "is_false")]
    pub negated: bool,
}

impl DiePart {
    pub fn new(value: UInt, sides: UInt, negated: bool) -> Self {
        Self {
            value,
            sides,
            negated,
        }
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Contribution for DiePart {
    fn contribution(&self) -> Int {
        let value = Int::from(self.value);
        if self.negated {
            -value
        } else {
            value
        }
    }
}

/// A static modifier or resolved ability modifier, sign included.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct ModPart {
    pub value: Int,
}

impl ModPart {
    pub fn new(value: Int) -> Self {
        Self { value }
    }
}

impl Contribution for ModPart {
    fn contribution(&self) -> Int {
        self.value
    }
}

/// The outcome of one roll. Serializes as
/// `{"total": .., "exprNorm": .., "parts": [..]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RollResult {
    total: Int,
    expr_norm: String,
    parts: Vec<Part>,
    #[serde(skip)]
    expression: Expression,
}

impl RollResult {
    // Callers bound the magnitude of every term beforehand, so the sum cannot
    // overflow.
    pub(crate) fn new(expression: Expression, parts: Vec<Part>) -> Self {
        let total = parts.iter().map(Contribution::contribution).sum();
        Self {
            total,
            expr_norm: expression.to_string(),
            parts,
            expression,
        }
    }

    pub fn total(&self) -> Int {
        self.total
    }

    /// The canonical form of the rolled expression.
    pub fn expr_norm(&self) -> &str {
        &self.expr_norm
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn dice(&self) -> impl Iterator<Item = &DiePart> + '_ {
        self.parts.iter().filter_map(|part| match part {
            Part::Die(die) => Some(die),
            Part::Mod(_) => None,
        })
    }
}

impl fmt::Display for RollResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::SimpleStringifier::new().stringify(self))
    }
}
