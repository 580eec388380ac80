use serde::{Deserialize, Serialize};

/// Upper bound on the total number of dice one expression may request.
pub const DEFAULT_MAX_DICE: u32 = 1000;

/// Limits applied to every roll. Deserializes from a host's own config with
/// missing fields defaulted, e.g. `{"maxDice": 200}`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RollConfig {
    pub max_dice: u32,
}

impl RollConfig {
    pub fn with_max_dice(mut self, max_dice: u32) -> Self {
        self.max_dice = max_dice;
        self
    }
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            max_dice: DEFAULT_MAX_DICE,
        }
    }
}
