use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Stat,
    StatTable,
    ValidationError,
};

fn default_multiplier() -> f64 {
    1.0
}

/// Stat multipliers granted by an Echo's bond with its owner.
///
/// Multipliers are produced outside of battle and applied exactly once, when a combatant is
/// created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatMultipliers {
    #[serde(default = "default_multiplier")]
    pub hp: f64,
    #[serde(default = "default_multiplier")]
    pub atk: f64,
    #[serde(default = "default_multiplier")]
    pub def: f64,
    #[serde(default = "default_multiplier")]
    pub spa: f64,
    #[serde(default = "default_multiplier")]
    pub spd: f64,
    #[serde(default = "default_multiplier")]
    pub spe: f64,
}

impl Default for StatMultipliers {
    fn default() -> Self {
        Self {
            hp: default_multiplier(),
            atk: default_multiplier(),
            def: default_multiplier(),
            spa: default_multiplier(),
            spd: default_multiplier(),
            spe: default_multiplier(),
        }
    }
}

impl StatMultipliers {
    /// Returns the multiplier for the given stat.
    pub fn get(&self, stat: Stat) -> f64 {
        match stat {
            Stat::HP => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::SpAtk => self.spa,
            Stat::SpDef => self.spd,
            Stat::Spe => self.spe,
        }
    }

    /// Applies the multipliers to a stat table.
    ///
    /// Every resulting stat is rounded and at least 1.
    pub fn apply(&self, stats: &StatTable) -> StatTable {
        stats
            .entries()
            .map(|(stat, value)| {
                let scaled = (value as f64 * self.get(stat)).round();
                (stat, (scaled as u32).max(1))
            })
            .collect()
    }

    /// Validates that all multipliers are finite and positive.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut error = ValidationError::new();
        for stat in Stat::ALL {
            let multiplier = self.get(stat);
            if !multiplier.is_finite() || multiplier <= 0.0 {
                error.add(format!("{stat} multiplier must be positive, got {multiplier}"));
            }
        }
        error.into_result()
    }
}
