use rift_data::effectiveness;
use rift_prng::PseudoRandomNumberGenerator;

use crate::{
    ai::{
        MoveSelection,
        MoveSelector,
        legal_targets,
    },
    battle::Combatant,
    error::BattleError,
};

/// Weight of the target's remaining HP fraction, which pulls the selector toward weakened targets.
const HP_RATIO_PENALTY: f64 = 20.0;

/// Selects the move and target with the highest expected payoff.
///
/// A pairing scores `power * effectiveness * accuracy / 100 - hp_ratio * 20`, where the
/// effectiveness is that of the attacker's element against the target's. Ties go to the first
/// pairing seen, iterating moves first and targets second. Never draws from the PRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicSelector;

impl HeuristicSelector {
    fn score(attacker: &Combatant, power: u32, accuracy: u8, target: &Combatant) -> f64 {
        let multiplier = effectiveness(attacker.element(), target.element()).multiplier();
        let hp_ratio = target.hp as f64 / target.max_hp.max(1) as f64;
        power as f64 * multiplier * accuracy as f64 / 100.0 - hp_ratio * HP_RATIO_PENALTY
    }
}

impl MoveSelector for HeuristicSelector {
    fn choose_move(
        &mut self,
        attacker: &Combatant,
        candidates: &[&Combatant],
        _: &mut dyn PseudoRandomNumberGenerator,
    ) -> Result<MoveSelection, BattleError> {
        let targets = legal_targets(candidates);
        let mut best: Option<(f64, MoveSelection)> = None;
        for (slot, mov) in attacker.moves().iter().enumerate() {
            for target in &targets {
                let score = Self::score(attacker, mov.power, mov.accuracy, target);
                if best.is_none_or(|(best_score, _)| score > best_score) {
                    best = Some((
                        score,
                        MoveSelection {
                            slot,
                            target: target.position,
                        },
                    ));
                }
            }
        }
        best.map(|(_, selection)| selection)
            .ok_or_else(|| BattleError::NoLegalMove(attacker.name().to_owned()))
    }
}
