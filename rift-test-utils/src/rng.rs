use std::any::Any;

use ahash::HashMap;
use rift_battle::battle::Battle;
use rift_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};

/// Seeded generator whose upcoming draws can be overridden.
///
/// The seeded sequence always advances, so overriding one draw leaves every later draw untouched.
pub struct ControlledRandomNumberGenerator {
    seeded: RealPseudoRandomNumberGenerator,
    drawn: usize,
    overrides: HashMap<usize, u64>,
}

impl ControlledRandomNumberGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            seeded: RealPseudoRandomNumberGenerator::new(seed),
            drawn: 0,
            overrides: HashMap::default(),
        }
    }

    /// Overrides upcoming draws. An offset of 1 is the next draw.
    pub fn override_upcoming<I>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (usize, u64)>,
    {
        let drawn = self.drawn;
        self.overrides.extend(
            overrides
                .into_iter()
                .map(|(offset, value)| (drawn + offset, value)),
        );
    }
}

impl PseudoRandomNumberGenerator for ControlledRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        self.seeded.initial_seed()
    }

    fn next(&mut self) -> u64 {
        let value = self.seeded.next();
        self.drawn += 1;
        self.overrides.remove(&self.drawn).unwrap_or(value)
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// The battle's generator, if the battle was built by [`crate::TestBattleBuilder`].
pub fn controlled_rng(battle: &mut Battle) -> Option<&mut ControlledRandomNumberGenerator> {
    battle
        .prng_mut()
        .as_any_mut()
        .downcast_mut::<ControlledRandomNumberGenerator>()
}
