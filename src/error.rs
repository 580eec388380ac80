use crate::ability::AbilityCode;
use crate::parse::{ParseError, ParseErrorKind};
use serde::Serialize;

/// Everything that can make a roll expression unusable. Raised before any die
/// is drawn from the random source.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidRoll {
    #[error("{0}")]
    Syntax(#[from] ParseError),
    #[error("actor context required for ability term {0}")]
    MissingActor(AbilityCode),
    #[error("actor has no {0} score")]
    MissingAbility(AbilityCode),
    #[error("expression requests {requested} dice, more than the limit of {max}")]
    TooManyDice { requested: u64, max: u32 },
    #[error("roll total could exceed the supported integer range")]
    Overflow,
}

impl InvalidRoll {
    /// A stable, machine-readable discriminator for transport layers.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Syntax(e) => e.kind.code(),
            Self::MissingActor(_) => "missing_actor",
            Self::MissingAbility(_) => "missing_ability",
            Self::TooManyDice { .. } => "too_many_dice",
            Self::Overflow => "overflow",
        }
    }

    pub fn details(&self) -> Option<ErrorDetails> {
        Some(match self {
            Self::Syntax(e) if matches!(e.kind, ParseErrorKind::Empty) => return None,
            Self::Syntax(e) => ErrorDetails::Fragment(e.slice.clone()),
            Self::MissingActor(code) | Self::MissingAbility(code) => {
                ErrorDetails::MissingAbility(*code)
            }
            Self::TooManyDice { requested, max } => ErrorDetails::DiceLimit {
                requested_dice: *requested,
                max_dice: *max,
            },
            Self::Overflow => return None,
        })
    }
}

/// Structured detail attached to an [`InvalidRoll`], serialized as e.g.
/// `{"fragment":"3x6"}` or `{"missingAbility":"DEX"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorDetails {
    Fragment(String),
    MissingAbility(AbilityCode),
    #[serde(untagged)]
    DiceLimit {
        #[serde(rename = "requestedDice")]
        requested_dice: u64,
        #[serde(rename = "maxDice")]
        max_dice: u32,
    },
}

/// Failures of the actor-resolving entry point.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RollError {
    #[error(transparent)]
    Invalid(#[from] InvalidRoll),
    #[error("actor {0:?} not found")]
    ActorNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_json() {
        let missing = InvalidRoll::MissingAbility(AbilityCode::Dex);
        assert_eq!(
            serde_json::to_string(&missing.details()).unwrap(),
            r#"{"missingAbility":"DEX"}"#
        );

        let too_many = InvalidRoll::TooManyDice {
            requested: 2000,
            max: 1000,
        };
        assert_eq!(too_many.code(), "too_many_dice");
        assert_eq!(
            serde_json::to_string(&too_many.details()).unwrap(),
            r#"{"requestedDice":2000,"maxDice":1000}"#
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            InvalidRoll::MissingActor(AbilityCode::Str).to_string(),
            "actor context required for ability term STR"
        );
        assert_eq!(
            RollError::ActorNotFound("goblin-7".into()).to_string(),
            "actor \"goblin-7\" not found"
        );
    }
}
