use rift_data::Boost;
use serde::{
    Deserialize,
    Serialize,
};

use crate::battle::Combatant;

/// Lowest stage a stat can be dropped to.
pub const MIN_STAGE: i8 = -6;
/// Highest stage a stat can be boosted to.
pub const MAX_STAGE: i8 = 6;

/// Multipliers for every stage, from [`MIN_STAGE`] to [`MAX_STAGE`].
pub const STAGE_MULTIPLIERS: [f64; 13] = [
    0.25, 0.29, 0.33, 0.43, 0.50, 0.67, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0,
];

/// Resolves a stage to its stat multiplier.
///
/// Stages outside of `[-6, 6]` are clamped first.
pub fn stage_multiplier(stage: i8) -> f64 {
    let index = (stage.clamp(MIN_STAGE, MAX_STAGE) - MIN_STAGE) as usize;
    STAGE_MULTIPLIERS[index]
}

/// A full table of stat stages for a combatant.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoostTable {
    #[serde(default)]
    pub atk: i8,
    #[serde(default)]
    pub def: i8,
    #[serde(default)]
    pub spa: i8,
    #[serde(default)]
    pub spd: i8,
    #[serde(default)]
    pub spe: i8,
}

impl BoostTable {
    /// Returns the stage for the given boost.
    pub fn get(&self, boost: Boost) -> i8 {
        match boost {
            Boost::Atk => self.atk,
            Boost::Def => self.def,
            Boost::SpAtk => self.spa,
            Boost::SpDef => self.spd,
            Boost::Spe => self.spe,
        }
    }

    fn get_mut(&mut self, boost: Boost) -> &mut i8 {
        match boost {
            Boost::Atk => &mut self.atk,
            Boost::Def => &mut self.def,
            Boost::SpAtk => &mut self.spa,
            Boost::SpDef => &mut self.spd,
            Boost::Spe => &mut self.spe,
        }
    }

    /// Sets the stage for the given boost, clamped to the legal range.
    pub fn set(&mut self, boost: Boost, value: i8) {
        *self.get_mut(boost) = value.clamp(MIN_STAGE, MAX_STAGE);
    }

    /// Adds `delta` stages to the given boost.
    ///
    /// Returns the change actually applied after clamping.
    pub fn modify(&mut self, boost: Boost, delta: i8) -> i8 {
        let stage = self.get_mut(boost);
        let before = *stage;
        *stage = before.saturating_add(delta).clamp(MIN_STAGE, MAX_STAGE);
        *stage - before
    }

    /// The stat multiplier for the given boost.
    pub fn multiplier(&self, boost: Boost) -> f64 {
        stage_multiplier(self.get(boost))
    }

    /// Resets all stages to zero.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Modifies a combatant's stat stage.
///
/// Returns the stage change actually applied.
pub fn modify_stat(combatant: &mut Combatant, boost: Boost, delta: i8) -> i8 {
    combatant.boosts.modify(boost, delta)
}
