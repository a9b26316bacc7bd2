use ahash::HashSet;
use itertools::Itertools;
use rift_data::{
    EchoData,
    ItemData,
    StatMultipliers,
    ValidationError,
};
use rift_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    ai::{
        HeuristicSelector,
        MoveSelector,
    },
    battle::Controller,
    common::{
        Clock,
        SystemTimeClock,
    },
};

/// Battle engine option for how the damage roll should be chosen in the damage calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RandomizeBaseDamage {
    /// Roll uniformly between the minimum and maximum.
    ///
    /// This is the default behavior.
    Randomize,
    /// Only use the maximum roll.
    Max,
    /// Only use the minimum roll.
    Min,
}

/// How the battle engine should resolve exact ties when sorting by speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedTieResolution {
    /// Resolves ties randomly by advancing RNG.
    Random,
    /// Keep registration order of tied combatants.
    Keep,
    /// Reverse registration order of tied combatants.
    Reverse,
}

fn default_rng_factory() -> fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator> {
    |seed: Option<u64>| Box::new(RealPseudoRandomNumberGenerator::new(seed))
}

fn default_clock_factory() -> fn() -> Box<dyn Clock> {
    || Box::new(SystemTimeClock)
}

fn default_selector_factory() -> fn() -> Box<dyn MoveSelector> {
    || Box::new(HeuristicSelector)
}

fn default_critical_hit_chance() -> f64 {
    0.05
}

fn default_one_and_a_half() -> f64 {
    1.5
}

fn default_min_damage_roll() -> f64 {
    0.85
}

fn default_one() -> f64 {
    1.0
}

fn default_randomize() -> RandomizeBaseDamage {
    RandomizeBaseDamage::Randomize
}

fn default_speed_jitter() -> f64 {
    0.05
}

fn default_keep() -> SpeedTieResolution {
    SpeedTieResolution::Keep
}

fn default_residual_damage_fraction() -> f64 {
    0.125
}

fn default_half() -> f64 {
    0.5
}

fn default_quarter() -> f64 {
    0.25
}

fn default_escape_max_chance() -> f64 {
    0.9
}

fn default_max_rounds() -> u64 {
    1000
}

/// Options that change how the battle engine itself behaves, which is not specific to any
/// individual battle.
///
/// Every numeric constant of the battle formulas lives here, so balancing never requires a code
/// change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleEngineOptions {
    /// Probability of a damaging move landing a critical hit.
    #[serde(default = "default_critical_hit_chance")]
    pub critical_hit_chance: f64,

    /// Damage multiplier of a critical hit.
    #[serde(default = "default_one_and_a_half")]
    pub critical_hit_multiplier: f64,

    /// Damage multiplier when the move's element matches the attacker's element.
    #[serde(default = "default_one_and_a_half")]
    pub stab_multiplier: f64,

    /// Lower bound of the damage roll.
    #[serde(default = "default_min_damage_roll")]
    pub min_damage_roll: f64,

    /// Upper bound of the damage roll.
    #[serde(default = "default_one")]
    pub max_damage_roll: f64,

    /// Describes how the damage roll should be chosen.
    ///
    /// By default, the roll is random. Tests against the damage calculator can pin the roll to
    /// discover the minimum and maximum damage values.
    #[serde(default = "default_randomize")]
    pub randomize_base_damage: RandomizeBaseDamage,

    /// Each combatant's speed is multiplied by a random factor in `[1 - j, 1 + j]` every round.
    ///
    /// Zero disables jitter entirely, and no RNG is consumed for it.
    #[serde(default = "default_speed_jitter")]
    pub speed_jitter: f64,

    /// Describes how exact ties should be resolved when sorting combatants by speed.
    #[serde(default = "default_keep")]
    pub speed_tie_resolution: SpeedTieResolution,

    /// Fraction of max HP dealt by burn and poison every round.
    #[serde(default = "default_residual_damage_fraction")]
    pub residual_damage_fraction: f64,

    /// Speed multiplier applied by paralysis.
    #[serde(default = "default_half")]
    pub paralysis_speed_factor: f64,

    /// Damage multiplier applied to a defending combatant.
    #[serde(default = "default_half")]
    pub defend_multiplier: f64,

    /// Base probability of escaping.
    #[serde(default = "default_quarter")]
    pub escape_base_chance: f64,

    /// Escape probability gained per 100 points of speed.
    #[serde(default = "default_quarter")]
    pub escape_speed_bonus: f64,

    /// Highest possible escape probability.
    #[serde(default = "default_escape_max_chance")]
    pub escape_max_chance: f64,

    /// Battles still undecided after this many rounds end in a draw.
    #[serde(default = "default_max_rounds")]
    pub max_rounds: u64,

    /// Function for creating the battle's random number generator.
    ///
    /// Primarily useful for tests where we wish to have fine-grained control over battle RNG.
    #[serde(skip, default = "default_rng_factory")]
    pub rng_factory: fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator>,

    /// Function for creating the clock used for action and log timestamps.
    #[serde(skip, default = "default_clock_factory")]
    pub clock_factory: fn() -> Box<dyn Clock>,

    /// Function for creating the move selector used by AI-controlled combatants.
    #[serde(skip, default = "default_selector_factory")]
    pub selector_factory: fn() -> Box<dyn MoveSelector>,
}

impl Default for BattleEngineOptions {
    fn default() -> Self {
        Self {
            critical_hit_chance: default_critical_hit_chance(),
            critical_hit_multiplier: default_one_and_a_half(),
            stab_multiplier: default_one_and_a_half(),
            min_damage_roll: default_min_damage_roll(),
            max_damage_roll: default_one(),
            randomize_base_damage: default_randomize(),
            speed_jitter: default_speed_jitter(),
            speed_tie_resolution: default_keep(),
            residual_damage_fraction: default_residual_damage_fraction(),
            paralysis_speed_factor: default_half(),
            defend_multiplier: default_half(),
            escape_base_chance: default_quarter(),
            escape_speed_bonus: default_quarter(),
            escape_max_chance: default_escape_max_chance(),
            max_rounds: default_max_rounds(),
            rng_factory: default_rng_factory(),
            clock_factory: default_clock_factory(),
            selector_factory: default_selector_factory(),
        }
    }
}

impl BattleEngineOptions {
    /// Probability of escaping for a combatant with the given speed stat.
    pub fn escape_chance(&self, speed: u32) -> f64 {
        (self.escape_base_chance + speed as f64 / 100.0 * self.escape_speed_bonus)
            .min(self.escape_max_chance)
    }
}

/// A combatant registered for a battle.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantData {
    pub echo: EchoData,
    pub team: usize,
    #[serde(default)]
    pub controller: Controller,
    /// Reserves start outside of battle and enter when an active teammate is defeated or switched
    /// out.
    #[serde(default)]
    pub reserve: bool,
    /// Multipliers from the Echo's bond with its owner.
    #[serde(default)]
    pub bond: StatMultipliers,
}

/// A stack of identical items in a bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    #[serde(flatten)]
    pub item: ItemData,
    pub quantity: u32,
}

/// Items available to a single team.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamBag {
    pub team: usize,
    #[serde(default)]
    pub items: Vec<ItemStack>,
}

/// Options for a single battle.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleOptions {
    /// The initial seed for random number generation.
    ///
    /// This can be used to effectively replay or control a battle.
    pub seed: Option<u64>,
    /// Can players attempt to escape?
    #[serde(default)]
    pub escape_allowed: bool,
    #[serde(default)]
    pub bags: Vec<TeamBag>,
    /// Every combatant, in registration order.
    pub combatants: Vec<CombatantData>,
}

impl BattleOptions {
    /// Validates the battle options.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut error = ValidationError::new();
        let mut ids = HashSet::default();
        for (i, combatant) in self.combatants.iter().enumerate() {
            if let Err(err) = combatant.echo.validate() {
                error.extend_with_context(format!("combatant {i}"), err);
            }
            if let Err(err) = combatant.bond.validate() {
                error.extend_with_context(format!("combatant {i} bond"), err);
            }
            if !combatant.echo.id.is_empty() && !ids.insert(combatant.echo.id.as_str()) {
                error.add(format!(
                    "combatant {i} reuses echo id {}",
                    combatant.echo.id
                ));
            }
            if let Controller::Player { id } = &combatant.controller {
                if id.is_empty() {
                    error.add(format!("combatant {i} has an empty player id"));
                }
            }
        }

        let teams = self
            .combatants
            .iter()
            .filter(|combatant| !combatant.reserve)
            .map(|combatant| combatant.team)
            .sorted()
            .dedup()
            .collect::<Vec<_>>();
        if teams.len() < 2 {
            error.add("at least two teams must have an active combatant");
        }
        for combatant in self.combatants.iter().filter(|combatant| combatant.reserve) {
            if !teams.contains(&combatant.team) {
                error.add(format!(
                    "team {} has reserves but no active combatant",
                    combatant.team
                ));
            }
        }

        for bag in &self.bags {
            if !self
                .combatants
                .iter()
                .any(|combatant| combatant.team == bag.team)
            {
                error.add(format!("bag belongs to unknown team {}", bag.team));
            }
            for stack in &bag.items {
                if let Err(err) = stack.item.validate() {
                    error.extend_with_context(format!("item {}", stack.item.name), err);
                }
            }
        }
        error.into_result()
    }
}
