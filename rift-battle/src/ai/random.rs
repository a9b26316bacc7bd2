use rift_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::{
    ai::{
        MoveSelection,
        MoveSelector,
        legal_targets,
    },
    battle::Combatant,
    error::BattleError,
};

/// Selects a uniformly random move and target.
///
/// Draws the move first, then the target.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSelector;

impl MoveSelector for RandomSelector {
    fn choose_move(
        &mut self,
        attacker: &Combatant,
        candidates: &[&Combatant],
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> Result<MoveSelection, BattleError> {
        let targets = legal_targets(candidates);
        let no_legal_move = || BattleError::NoLegalMove(attacker.name().to_owned());
        if targets.is_empty() {
            return Err(no_legal_move());
        }
        let slots = (0..attacker.moves().len()).collect::<Vec<_>>();
        let slot = *rand_util::sample_slice(prng, &slots).ok_or_else(no_legal_move)?;
        let target = rand_util::sample_slice(prng, &targets).ok_or_else(no_legal_move)?;
        Ok(MoveSelection {
            slot,
            target: target.position,
        })
    }
}
