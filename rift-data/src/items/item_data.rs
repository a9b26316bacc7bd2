use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    BoostChange,
    StatusKind,
    ValidationError,
};

/// The effect of using an item on a combatant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemEffect {
    /// Restores a fixed amount of HP.
    Heal { amount: u32 },
    /// Removes a status effect.
    ///
    /// When no status is given, every status effect is removed.
    Cure {
        #[serde(default)]
        status: Option<StatusKind>,
    },
    /// Changes a stat stage.
    Boost(BoostChange),
}

/// Data about a particular battle item.
///
/// Items live in a team's bag and are consumed on use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemData {
    /// Name of the item.
    pub name: String,
    /// Effect when used.
    pub effect: ItemEffect,
}

impl ItemData {
    /// Validates the item data.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut error = ValidationError::new();
        if self.name.is_empty() {
            error.add("name cannot be empty");
        }
        match self.effect {
            ItemEffect::Heal { amount: 0 } => error.add("heal amount must be positive"),
            ItemEffect::Boost(BoostChange { stages: 0, .. }) => {
                error.add("boost stages cannot be zero")
            }
            _ => (),
        }
        error.into_result()
    }
}
