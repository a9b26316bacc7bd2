use rift_data::{
    Element,
    MoveCategory,
};
use serde::{
    Deserialize,
    Serialize,
};

/// A move the requested combatant may use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOption {
    pub slot: usize,
    pub name: String,
    pub category: MoveCategory,
    pub element: Element,
    pub power: u32,
    pub accuracy: u8,
}

/// A request for an action that a player must make before the battle can continue.
///
/// Every option listed here is legal at the time the request is made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub player_id: String,
    pub round: u64,
    /// Registration position of the combatant that must act.
    pub actor: usize,
    pub moves: Vec<MoveOption>,
    /// Opponents that can be targeted by moves.
    pub targets: Vec<usize>,
    /// Reserves on the same team that can be switched in.
    pub reserves: Vec<usize>,
    /// Names of items left in the team bag.
    pub items: Vec<String>,
    pub ability_ready: bool,
    pub can_escape: bool,
}
