use rift_data::{
    Boost,
    MoveCategory,
    MoveData,
    TypeEffectiveness,
    effectiveness,
};
use rift_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::battle::{
    BattleEngineOptions,
    CombatProfile,
    RandomizeBaseDamage,
};

/// The result of calculating the damage of a single move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageResult {
    /// Damage before type effectiveness, STAB, critical hits, and the random roll.
    pub base_damage: f64,
    pub effectiveness: TypeEffectiveness,
    /// Same-element attack bonus.
    pub stab: f64,
    pub critical: bool,
    pub final_damage: u32,
    /// Accuracy of the move, in `[0, 1]`.
    pub accuracy: f64,
    pub hit: bool,
}

impl DamageResult {
    fn status_move(mov: &MoveData) -> Self {
        Self {
            base_damage: 0.0,
            effectiveness: TypeEffectiveness::Normal,
            stab: 1.0,
            critical: false,
            final_damage: 0,
            accuracy: mov.accuracy as f64 / 100.0,
            hit: true,
        }
    }
}

fn staged_stat(value: u32, profile: &CombatProfile, boost: Boost) -> f64 {
    (value as f64 * profile.boosts.multiplier(boost)).trunc()
}

/// Calculates the damage of a move used by the attacker against the defender.
///
/// Status moves never draw from the PRNG. Damaging moves draw, in order, the critical hit check,
/// the damage roll (only when randomized), and the accuracy check.
pub fn calculate_damage(
    attacker: &CombatProfile,
    defender: &CombatProfile,
    mov: &MoveData,
    prng: &mut dyn PseudoRandomNumberGenerator,
    options: &BattleEngineOptions,
) -> DamageResult {
    let (attack, defense) = match mov.category {
        MoveCategory::Status => return DamageResult::status_move(mov),
        MoveCategory::Physical => (
            staged_stat(attacker.stats.atk, attacker, Boost::Atk),
            staged_stat(defender.stats.def, defender, Boost::Def),
        ),
        MoveCategory::Special => (
            staged_stat(attacker.stats.spa, attacker, Boost::SpAtk),
            staged_stat(defender.stats.spd, defender, Boost::SpDef),
        ),
    };

    let level_factor = (2.0 * attacker.level as f64 / 5.0 + 2.0) / 250.0;
    let base_damage = level_factor * attack / defense.max(1.0) * mov.power as f64 + 2.0;

    let effectiveness = effectiveness(attacker.element, defender.element);
    let stab = if mov.element == attacker.element {
        options.stab_multiplier
    } else {
        1.0
    };

    let critical = rand_util::unit(prng) < options.critical_hit_chance;
    let critical_multiplier = if critical {
        options.critical_hit_multiplier
    } else {
        1.0
    };

    let roll = match options.randomize_base_damage {
        RandomizeBaseDamage::Randomize => {
            rand_util::uniform(prng, options.min_damage_roll, options.max_damage_roll)
        }
        RandomizeBaseDamage::Max => options.max_damage_roll,
        RandomizeBaseDamage::Min => options.min_damage_roll,
    };

    let accuracy = mov.accuracy as f64 / 100.0;
    let hit = rand_util::unit(prng) < accuracy;

    let final_damage = if hit {
        let damage =
            base_damage * effectiveness.multiplier() * stab * critical_multiplier * roll;
        (damage.round() as u32).max(1)
    } else {
        0
    };

    DamageResult {
        base_damage,
        effectiveness,
        stab,
        critical,
        final_damage,
        accuracy,
        hit,
    }
}
