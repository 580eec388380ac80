//! Ability codes and the score-to-modifier rule.

use crate::common::Int;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six ability scores an actor carries.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AbilityCode {
    Str,
    Dex,
    Con,
    Int,
    Wis,
    Cha,
}

impl AbilityCode {
    pub const ALL: [Self; 6] = [
        Self::Str,
        Self::Dex,
        Self::Con,
        Self::Int,
        Self::Wis,
        Self::Cha,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Str => "STR",
            Self::Dex => "DEX",
            Self::Con => "CON",
            Self::Int => "INT",
            Self::Wis => "WIS",
            Self::Cha => "CHA",
        }
    }
}

impl fmt::Display for AbilityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown ability code {0:?}")]
pub struct UnknownAbility(pub String);

impl FromStr for AbilityCode {
    type Err = UnknownAbility;

    /// Ability codes are matched without regard to case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAbility(s.to_string()))
    }
}

/// The standard derived modifier, `floor((score - 10) / 2)`, rounding toward
/// negative infinity so that a score of 9 yields -1.
pub const fn modifier(score: Int) -> Int {
    // Same value as `(score - 10).div_euclid(2)` without overflowing near
    // `Int::MIN`.
    score.div_euclid(2) - 5
}
