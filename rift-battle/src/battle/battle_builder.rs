use crate::{
    battle::{
        Battle,
        BattleEngineOptions,
        BattleOptions,
        CombatantData,
        ItemStack,
        TeamBag,
    },
    error::BattleError,
};

/// Object for dynamically building a battle prior to starting it.
///
/// Combatants and items can be added one at a time. The options are validated before the battle is
/// built.
#[derive(Debug, Default, Clone)]
pub struct BattleBuilder {
    options: BattleOptions,
}

impl BattleBuilder {
    /// Creates a new builder from existing battle options.
    pub fn new(options: BattleOptions) -> Self {
        Self { options }
    }

    /// Sets the seed of the battle's PRNG.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.options.seed = Some(seed);
        self
    }

    /// Allows or forbids escaping.
    pub fn with_escape_allowed(mut self, escape_allowed: bool) -> Self {
        self.options.escape_allowed = escape_allowed;
        self
    }

    /// Registers a combatant, returning its registration position.
    pub fn add_combatant(&mut self, combatant: CombatantData) -> usize {
        self.options.combatants.push(combatant);
        self.options.combatants.len() - 1
    }

    /// Adds items to a team's bag, merging with an existing stack of the same item.
    pub fn add_items(&mut self, team: usize, stack: ItemStack) {
        let bag = match self.options.bags.iter_mut().position(|bag| bag.team == team) {
            Some(index) => &mut self.options.bags[index],
            None => {
                self.options.bags.push(TeamBag {
                    team,
                    items: Vec::new(),
                });
                let last = self.options.bags.len() - 1;
                &mut self.options.bags[last]
            }
        };
        match bag
            .items
            .iter_mut()
            .find(|existing| existing.item == stack.item)
        {
            Some(existing) => existing.quantity += stack.quantity,
            None => bag.items.push(stack),
        }
    }

    /// The options the battle will be built with.
    pub fn options(&self) -> &BattleOptions {
        &self.options
    }

    /// Validates the battle options.
    pub fn validate(&self) -> Result<(), BattleError> {
        self.options.validate().map_err(|error| {
            ::log::warn!("invalid battle options: {error}");
            BattleError::from(error)
        })
    }

    /// Builds a new battle instance using the options.
    pub fn build(self, engine_options: BattleEngineOptions) -> Result<Battle, BattleError> {
        self.validate()?;
        Battle::new(self.options, engine_options)
    }
}
