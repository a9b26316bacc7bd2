use rift_prng::PseudoRandomNumberGenerator;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    battle::Combatant,
    error::BattleError,
};

/// A move and target chosen by a [`MoveSelector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSelection {
    /// Index into the attacker's move list.
    pub slot: usize,
    /// Registration position of the target.
    pub target: usize,
}

/// Decision maker for AI-controlled combatants.
pub trait MoveSelector: Send {
    /// Chooses a move for the attacker to use against one of the candidates.
    ///
    /// Defeated and inactive candidates are never chosen. Returns [`BattleError::NoLegalMove`] if
    /// no move or target remains.
    fn choose_move(
        &mut self,
        attacker: &Combatant,
        candidates: &[&Combatant],
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> Result<MoveSelection, BattleError>;
}

/// Filters the candidates down to those that can be targeted.
pub fn legal_targets<'c>(candidates: &[&'c Combatant]) -> Vec<&'c Combatant> {
    candidates
        .iter()
        .copied()
        .filter(|candidate| candidate.is_available())
        .collect()
}
