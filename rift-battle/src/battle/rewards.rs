use rift_data::EchoData;
use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};
use uuid::Uuid;

const BASE_EXPERIENCE: f64 = 100.0;
const BASE_CURRENCY: f64 = 50.0;

/// Rewards earned by a single winning Echo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reward {
    pub experience: u64,
    pub currency: u64,
    /// Bonus for defeating several opponents, applied by the economy.
    pub bonus_multiplier: f64,
}

/// Calculates the rewards a winner earns for defeating the given losers.
///
/// Each loser is worth more when its level is above the winner's, and never less than half of its
/// base value.
pub fn calculate_rewards<'e, I>(winner: &EchoData, losers: I) -> Reward
where
    I: IntoIterator<Item = &'e EchoData>,
{
    let mut experience = 0;
    let mut currency = 0;
    let mut count = 0;
    for loser in losers {
        let level_diff = loser.level as i32 - winner.level as i32;
        let multiplier = (1.0 + 0.1 * level_diff as f64).max(0.5);
        experience += ((BASE_EXPERIENCE + 2.0 * loser.level as f64) * multiplier) as u64;
        currency += ((BASE_CURRENCY + loser.level as f64) * multiplier) as u64;
        count += 1;
    }
    let bonus_multiplier = if count > 1 {
        1.0 + 0.1 * (count - 1) as f64
    } else {
        1.0
    };
    Reward {
        experience,
        currency,
        bonus_multiplier,
    }
}

/// How a battle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BattleOutcome {
    /// The team is the only one with undefeated combatants.
    Victory { team: usize },
    /// The team escaped the battle.
    Escaped { team: usize },
    /// No team won.
    Draw,
}

impl BattleOutcome {
    /// The winning team, if any.
    pub fn winner(&self) -> Option<usize> {
        match self {
            Self::Victory { team } => Some(*team),
            _ => None,
        }
    }
}

/// The result of a battle from the point of view of a single Echo.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum BattleResult {
    #[string = "victory"]
    Victory,
    #[string = "defeat"]
    Defeat,
    #[string = "escaped"]
    Escaped,
    #[string = "draw"]
    Draw,
}

/// Event describing how a battle went for a single Echo.
///
/// Consumed by the bonding system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeEvent {
    /// Echo ID.
    pub echo: String,
    pub result: BattleResult,
    /// Highest level among the Echo's opponents.
    pub opponent_level: u8,
    /// The Echo was defeated at some point during the battle.
    pub fainted: bool,
}

/// Statistics about a finished battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleSummary {
    pub id: Uuid,
    pub outcome: BattleOutcome,
    pub rounds: u64,
    /// Names of the Echoes on the winning team.
    pub winners: Vec<String>,
    /// Names of the Echoes on every other team.
    pub losers: Vec<String>,
    pub action_count: usize,
    pub total_damage: u64,
    /// Milliseconds between the first and last log entry.
    pub duration: u128,
}
