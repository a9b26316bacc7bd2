use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    BoostChange,
    ValidationError,
};

fn default_cooldown() -> u8 {
    2
}

/// The effect of activating an ability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AbilityEffect {
    /// Changes one of the user's stat stages.
    Boost(BoostChange),
    /// Restores a percentage of the user's maximum HP.
    Heal { percent: u8 },
}

/// Data about an Echo's signature ability.
///
/// Abilities are activated as a round's action and cannot be activated again until their cooldown
/// expires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityData {
    /// Name of the ability.
    pub name: String,
    /// Effect on activation.
    pub effect: AbilityEffect,
    /// Number of rounds after activation before the ability can be activated again.
    #[serde(default = "default_cooldown")]
    pub cooldown: u8,
}

impl AbilityData {
    /// Validates the ability data.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut error = ValidationError::new();
        if self.name.is_empty() {
            error.add("name cannot be empty");
        }
        match self.effect {
            AbilityEffect::Heal { percent } if percent == 0 || percent > 100 => error.add(format!(
                "heal percent must be between 1 and 100, got {percent}"
            )),
            AbilityEffect::Boost(BoostChange { stages: 0, .. }) => {
                error.add("boost stages cannot be zero")
            }
            _ => (),
        }
        error.into_result()
    }
}
