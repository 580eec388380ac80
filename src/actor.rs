use crate::ability::{self, AbilityCode};
use crate::common::Int;
use crate::error::InvalidRoll;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// The slice of an actor the dice engine needs: raw ability scores and the
/// proficiency bonus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorContext {
    #[serde(default)]
    abilities: BTreeMap<AbilityCode, Int>,
    #[serde(default)]
    prof_bonus: Int,
}

impl ActorContext {
    pub fn new(prof_bonus: Int) -> Self {
        Self {
            abilities: BTreeMap::new(),
            prof_bonus,
        }
    }

    pub fn with_score(mut self, code: AbilityCode, score: Int) -> Self {
        self.abilities.insert(code, score);
        self
    }

    pub fn score(&self, code: AbilityCode) -> Option<Int> {
        self.abilities.get(&code).copied()
    }

    /// Carried for callers that build proficient checks; plain ability terms
    /// never add it.
    pub fn proficiency_bonus(&self) -> Int {
        self.prof_bonus
    }

    pub fn modifier(&self, code: AbilityCode) -> Result<Int, InvalidRoll> {
        self.score(code)
            .map(ability::modifier)
            .ok_or(InvalidRoll::MissingAbility(code))
    }
}

/// Resolves an actor id into the context used for ability terms.
pub trait ActorLookup {
    fn actor(&self, id: &str) -> Option<ActorContext>;
}

impl ActorLookup for HashMap<String, ActorContext> {
    fn actor(&self, id: &str) -> Option<ActorContext> {
        self.get(id).cloned()
    }
}

impl ActorLookup for BTreeMap<String, ActorContext> {
    fn actor(&self, id: &str) -> Option<ActorContext> {
        self.get(id).cloned()
    }
}
