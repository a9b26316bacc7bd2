use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    AbilityData,
    Element,
    MoveData,
    StatTable,
    ValidationError,
};

/// Maximum number of moves an Echo can know.
pub const MAX_MOVES: usize = 4;

/// A single Echo, as provided to the battle engine.
///
/// Echoes are owned by collaborators outside of battle. The engine only reads them to build
/// combatants.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct EchoData {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    pub level: u8,
    pub element: Element,
    pub base_stats: StatTable,
    /// Stats at the current level, before bond multipliers.
    pub current_stats: StatTable,
    /// Known moves, in slot order.
    #[serde(default)]
    pub moves: Vec<MoveData>,
    /// Signature ability.
    #[serde(default)]
    pub ability: Option<AbilityData>,
}

impl EchoData {
    /// Validates the Echo for use in battle.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut error = ValidationError::new();
        if self.name.is_empty() {
            error.add("name cannot be empty");
        }
        if self.level == 0 || self.level > 100 {
            error.add(format!("level must be between 1 and 100, got {}", self.level));
        }
        if self.current_stats.hp == 0 {
            error.add("hp must be positive");
        }
        if self.moves.len() > MAX_MOVES {
            error.add(format!(
                "cannot know more than {MAX_MOVES} moves, got {}",
                self.moves.len()
            ));
        }
        for (i, mov) in self.moves.iter().enumerate() {
            if let Err(err) = mov.validate() {
                error.extend_with_context(format!("move {i}"), err);
            }
        }
        if let Some(ability) = &self.ability {
            if let Err(err) = ability.validate() {
                error.extend_with_context("ability", err);
            }
        }
        error.into_result()
    }
}
