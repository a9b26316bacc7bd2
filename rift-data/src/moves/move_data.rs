use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    BoostChange,
    Element,
    MoveCategory,
    StatusKind,
    ValidationError,
};

fn default_accuracy() -> u8 {
    100
}

/// Data about a particular move.
///
/// Each round, a combatant may use one of its known moves. Damaging moves reduce the target's HP
/// using the attacker's stats. Any move may also inflict a status effect on the target or change
/// the user's own stat stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    /// Name of the move.
    pub name: String,
    /// Move category.
    pub category: MoveCategory,
    /// Move element.
    pub element: Element,
    /// Base power.
    #[serde(default)]
    pub power: u32,
    /// Base accuracy, out of 100.
    #[serde(default = "default_accuracy")]
    pub accuracy: u8,
    /// Status effect inflicted on the target.
    #[serde(default)]
    pub status: Option<StatusKind>,
    /// Chance of inflicting the status effect, out of 100.
    ///
    /// Missing means the status effect is always inflicted when the move connects.
    #[serde(default)]
    pub status_chance: Option<u8>,
    /// Overrides the default duration of the inflicted status effect.
    #[serde(default)]
    pub status_duration: Option<u8>,
    /// Stage change applied to the user after the move connects.
    #[serde(default)]
    pub self_boost: Option<BoostChange>,
}

impl Default for MoveData {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: MoveCategory::default(),
            element: Element::default(),
            power: 0,
            accuracy: default_accuracy(),
            status: None,
            status_chance: None,
            status_duration: None,
            self_boost: None,
        }
    }
}

impl MoveData {
    /// Checks if the move deals damage.
    pub fn is_damaging(&self) -> bool {
        self.category != MoveCategory::Status
    }

    /// The chance of inflicting the move's status effect, out of 100.
    pub fn status_chance(&self) -> u8 {
        self.status_chance.unwrap_or(100)
    }

    /// Validates the move data.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut error = ValidationError::new();
        if self.name.is_empty() {
            error.add("name cannot be empty");
        }
        if self.accuracy > 100 {
            error.add(format!(
                "accuracy must be between 0 and 100, got {}",
                self.accuracy
            ));
        }
        if let Some(chance) = self.status_chance {
            if chance > 100 {
                error.add(format!(
                    "status chance must be between 0 and 100, got {chance}"
                ));
            }
            if self.status.is_none() {
                error.add("status chance given without a status");
            }
        }
        error.into_result()
    }
}
