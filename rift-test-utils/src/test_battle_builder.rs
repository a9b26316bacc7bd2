use anyhow::Result;
use rift_battle::{
    ai::MoveSelector,
    battle::{
        Battle,
        BattleBuilder,
        BattleEngineOptions,
        CombatantData,
        Controller,
        ItemStack,
        RandomizeBaseDamage,
        SpeedTieResolution,
    },
};
use rift_data::{
    EchoData,
    StatMultipliers,
};

use crate::{
    ControlledRandomNumberGenerator,
    FixedClock,
    TickingClock,
};

/// Battle builder object for integration tests.
///
/// Battles use a [`FixedClock`] unless configured otherwise, so their logs are deterministic.
pub struct TestBattleBuilder {
    builder: BattleBuilder,
    engine_options: BattleEngineOptions,
    controlled_rng: bool,
}

impl TestBattleBuilder {
    /// Creates a new [`TestBattleBuilder`].
    pub fn new() -> Self {
        Self {
            builder: BattleBuilder::default(),
            engine_options: BattleEngineOptions {
                clock_factory: || Box::new(FixedClock),
                ..Default::default()
            },
            controlled_rng: false,
        }
    }

    /// Builds a new [`Battle`] from the battle builder.
    pub fn build(mut self) -> Result<Battle> {
        if self.controlled_rng {
            self.engine_options.rng_factory =
                |seed: Option<u64>| Box::new(ControlledRandomNumberGenerator::new(seed));
        }
        Ok(self.builder.build(self.engine_options)?)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.builder = self.builder.with_seed(seed);
        self
    }

    pub fn with_escape_allowed(mut self, escape_allowed: bool) -> Self {
        self.builder = self.builder.with_escape_allowed(escape_allowed);
        self
    }

    pub fn with_controlled_rng(mut self, controlled_rng: bool) -> Self {
        self.controlled_rng = controlled_rng;
        self
    }

    pub fn with_ticking_clock(mut self) -> Self {
        self.engine_options.clock_factory = || Box::new(TickingClock::default());
        self
    }

    pub fn with_selector(mut self, selector_factory: fn() -> Box<dyn MoveSelector>) -> Self {
        self.engine_options.selector_factory = selector_factory;
        self
    }

    pub fn with_speed_jitter(mut self, speed_jitter: f64) -> Self {
        self.engine_options.speed_jitter = speed_jitter;
        self
    }

    pub fn with_speed_tie_resolution(mut self, tie_resolution: SpeedTieResolution) -> Self {
        self.engine_options.speed_tie_resolution = tie_resolution;
        self
    }

    pub fn with_base_damage_randomization(mut self, randomize: RandomizeBaseDamage) -> Self {
        self.engine_options.randomize_base_damage = randomize;
        self
    }

    pub fn with_critical_hit_chance(mut self, critical_hit_chance: f64) -> Self {
        self.engine_options.critical_hit_chance = critical_hit_chance;
        self
    }

    pub fn with_max_rounds(mut self, max_rounds: u64) -> Self {
        self.engine_options.max_rounds = max_rounds;
        self
    }

    /// Removes every source of randomness except accuracy, status chances, and escapes.
    pub fn deterministic(self) -> Self {
        self.with_speed_jitter(0.0)
            .with_critical_hit_chance(0.0)
            .with_base_damage_randomization(RandomizeBaseDamage::Max)
    }

    /// Adds an AI-controlled combatant.
    pub fn add_ai(self, team: usize, echo: EchoData) -> Self {
        self.add_combatant(CombatantData {
            echo,
            team,
            ..Default::default()
        })
    }

    /// Adds a player-controlled combatant.
    pub fn add_player(self, player_id: &str, team: usize, echo: EchoData) -> Self {
        self.add_combatant(CombatantData {
            echo,
            team,
            controller: Controller::Player {
                id: player_id.to_owned(),
            },
            ..Default::default()
        })
    }

    /// Adds an AI-controlled reserve.
    pub fn add_reserve(self, team: usize, echo: EchoData) -> Self {
        self.add_combatant(CombatantData {
            echo,
            team,
            reserve: true,
            ..Default::default()
        })
    }

    /// Adds a player-controlled combatant with bond multipliers.
    pub fn add_bonded_player(
        self,
        player_id: &str,
        team: usize,
        echo: EchoData,
        bond: StatMultipliers,
    ) -> Self {
        self.add_combatant(CombatantData {
            echo,
            team,
            controller: Controller::Player {
                id: player_id.to_owned(),
            },
            bond,
            ..Default::default()
        })
    }

    pub fn add_combatant(mut self, combatant: CombatantData) -> Self {
        self.builder.add_combatant(combatant);
        self
    }

    pub fn add_items(mut self, team: usize, stack: ItemStack) -> Self {
        self.builder.add_items(team, stack);
        self
    }
}
