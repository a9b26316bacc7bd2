use rift_data::StatusKind;
use serde::{
    Deserialize,
    Serialize,
};

use crate::battle::{
    BattleEngineOptions,
    Combatant,
};

/// A status effect active on a combatant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub kind: StatusKind,
    pub remaining_turns: u8,
}

/// The result of ticking a single status effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    pub kind: StatusKind,
    /// Residual damage dealt.
    pub damage: u32,
    /// The effect ran out and was removed.
    pub expired: bool,
}

/// Applies a status effect to the target.
///
/// Returns `false` if the target already has a status effect of the same kind or is defeated. A
/// duration of zero is treated as one round.
pub fn apply(target: &mut Combatant, kind: StatusKind, duration: u8) -> bool {
    if target.defeated || target.has_status(kind) {
        return false;
    }
    target.statuses.push(StatusEffect {
        kind,
        remaining_turns: duration.max(1),
    });
    true
}

/// Removes a status effect from the target.
///
/// Returns `false` if the target did not have the status effect.
pub fn cure(target: &mut Combatant, kind: StatusKind) -> bool {
    let before = target.statuses.len();
    target.statuses.retain(|status| status.kind != kind);
    target.statuses.len() != before
}

/// Removes every status effect from the target.
///
/// Returns the kinds removed.
pub fn cure_all(target: &mut Combatant) -> Vec<StatusKind> {
    target
        .statuses
        .drain(..)
        .map(|status| status.kind)
        .collect()
}

/// Sets the combatant's speed factor for the coming round from its current statuses.
///
/// Must run before the round's turn order is computed.
pub fn refresh_speed_factor(combatant: &mut Combatant, options: &BattleEngineOptions) {
    combatant.speed_factor = if combatant.has_status(StatusKind::Paralysis) {
        options.paralysis_speed_factor
    } else {
        1.0
    };
}

/// Runs the start-of-round effects of every status on the combatant.
///
/// The combatant's speed factor is recalculated from scratch. Effects stop being processed as soon
/// as the combatant is defeated.
pub fn tick(combatant: &mut Combatant, options: &BattleEngineOptions) -> Vec<TickOutcome> {
    combatant.speed_factor = 1.0;
    let mut outcomes = Vec::with_capacity(combatant.statuses.len());
    let mut i = 0;
    while i < combatant.statuses.len() && !combatant.defeated {
        let kind = combatant.statuses[i].kind;
        let mut damage = 0;
        match kind {
            StatusKind::Burn | StatusKind::Poison => {
                let residual =
                    (combatant.max_hp as f64 * options.residual_damage_fraction).floor() as u32;
                damage = combatant.take_damage(residual);
            }
            StatusKind::Paralysis => {
                combatant.speed_factor *= options.paralysis_speed_factor;
            }
            StatusKind::Sleep | StatusKind::Freeze => (),
        }

        let status = &mut combatant.statuses[i];
        status.remaining_turns = status.remaining_turns.saturating_sub(1);
        let expired = status.remaining_turns == 0;
        if expired {
            combatant.statuses.remove(i);
        } else {
            i += 1;
        }
        outcomes.push(TickOutcome {
            kind,
            damage,
            expired,
        });
    }
    outcomes
}
