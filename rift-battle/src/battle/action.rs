use rift_choice::Choice;
use serde::{
    Deserialize,
    Serialize,
};

/// The kind of action a combatant performs in a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionKind {
    /// Use the move in the given slot.
    Attack { slot: usize, target: Option<usize> },
    Defend,
    /// Activate the Echo's signature ability.
    Ability,
    /// Swap out for a reserve. Without a reserve, the first healthy one is used.
    Switch { reserve: Option<usize> },
    /// Use an item from the team bag. Without a target, the user is the target.
    Item { item: String, target: Option<usize> },
    Escape,
}

impl From<Choice> for ActionKind {
    fn from(choice: Choice) -> Self {
        match choice {
            Choice::Move(choice) => Self::Attack {
                slot: choice.slot,
                target: choice.target,
            },
            Choice::Defend => Self::Defend,
            Choice::Ability => Self::Ability,
            Choice::Switch(choice) => Self::Switch {
                reserve: choice.reserve,
            },
            Choice::Item(choice) => Self::Item {
                item: choice.item,
                target: choice.target,
            },
            Choice::Escape => Self::Escape,
        }
    }
}

/// One combatant's chosen action for a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleAction {
    pub round: u64,
    /// Registration position of the acting combatant.
    pub actor: usize,
    pub kind: ActionKind,
    /// Milliseconds since the Unix epoch, from the battle's clock.
    pub timestamp: u128,
}
