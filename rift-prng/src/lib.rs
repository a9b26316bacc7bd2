//! Replayable randomness for the rift battle engine.
//!
//! A battle owns exactly one generator. Recording its seed is enough to replay every random
//! decision the battle made.

pub mod rand_util;

use std::any::Any;

use rand::Rng;

/// Source of every random draw in a battle.
///
/// Implementations must be deterministic for a given seed. Tests swap in controlled generators
/// through [`Self::as_any_mut`].
pub trait PseudoRandomNumberGenerator: Send + Sync {
    /// The seed the sequence started from.
    fn initial_seed(&self) -> u64;

    /// Advances the sequence, returning a value in `[0, 2^32)`.
    fn next(&mut self) -> u64;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

const MULTIPLIER: u64 = 0x5D58_8B65_6C07_8965;
const INCREMENT: u64 = 0x0026_9EC3;

/// 64-bit linear congruential generator, exposing only the high half of its state.
pub struct RealPseudoRandomNumberGenerator {
    initial_seed: u64,
    state: u64,
}

impl RealPseudoRandomNumberGenerator {
    /// Creates a generator from the given seed, or from OS entropy when no seed is given.
    pub fn new(seed: Option<u64>) -> Self {
        let initial_seed = seed.unwrap_or_else(|| rand::rng().random());
        Self {
            initial_seed,
            state: initial_seed,
        }
    }
}

impl PseudoRandomNumberGenerator for RealPseudoRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        self.initial_seed
    }

    fn next(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        // Low bits of an LCG have short periods.
        self.state >> 32
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
