use std::cmp::Ordering;

use rift_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::battle::{
    BattleEngineOptions,
    Combatant,
    SpeedTieResolution,
};

/// An object that can be ordered by speed.
pub trait SpeedOrderable {
    /// Speed. Highest speed goes first.
    fn speed(&self) -> f64;
}

impl<T> SpeedOrderable for &'_ T
where
    T: SpeedOrderable,
{
    #[inline]
    fn speed(&self) -> f64 {
        (*self).speed()
    }
}

/// A combatant's speed for a single round, after jitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedEntry {
    pub position: usize,
    pub speed: f64,
}

impl SpeedOrderable for SpeedEntry {
    fn speed(&self) -> f64 {
        self.speed
    }
}

/// Compares the speed of two objects. Faster objects are ordered first.
pub fn compare_speed<T>(a: &T, b: &T) -> Ordering
where
    T: SpeedOrderable,
{
    b.speed().total_cmp(&a.speed())
}

fn stable_move_to_position<T>(items: &mut [T], index: usize, target: usize) {
    if target == index {
        return;
    } else if index < target {
        for i in index..target {
            items.swap(i, i + 1);
        }
    } else {
        for i in ((target + 1)..=index).rev() {
            items.swap(i - 1, i);
        }
    }
}

/// Selection sort that resolves ties with the given strategy.
///
/// Tied elements keep their original relative order before the tie resolution is applied.
pub fn sort_with_ties<T, C>(
    items: &mut [T],
    comp: C,
    prng: &mut dyn PseudoRandomNumberGenerator,
    tie_resolution: SpeedTieResolution,
) where
    C: Fn(&T, &T) -> Ordering,
{
    let mut sorted = 0;
    while sorted + 1 < items.len() {
        // Find all indices that are tied for the smallest elements.
        let mut smallest_indices = Vec::from([sorted]);
        for i in (sorted + 1)..items.len() {
            match comp(&items[smallest_indices[0]], &items[i]) {
                Ordering::Less => continue,
                Ordering::Greater => smallest_indices = Vec::from([i]),
                Ordering::Equal => smallest_indices.push(i),
            }
        }
        // Move smallest elements to the beginning of the unsorted range.
        let ties = smallest_indices.len();
        for (i, item_index) in smallest_indices.into_iter().enumerate() {
            stable_move_to_position(items, item_index, sorted + i);
        }
        if ties > 1 {
            let tied = &mut items[sorted..(sorted + ties)];
            match tie_resolution {
                SpeedTieResolution::Random => rand_util::shuffle(prng, tied),
                SpeedTieResolution::Keep => (),
                SpeedTieResolution::Reverse => tied.reverse(),
            }
        }
        sorted += ties;
    }
}

/// Sorts the given items by speed, fastest first.
pub fn speed_sort<T>(
    items: &mut [T],
    prng: &mut dyn PseudoRandomNumberGenerator,
    tie_resolution: SpeedTieResolution,
) where
    T: SpeedOrderable,
{
    sort_with_ties(items, compare_speed, prng, tie_resolution);
}

/// Computes the order in which combatants act this round.
///
/// Only active, non-defeated combatants take part. Each of them draws a speed jitter factor in
/// registration order, unless jitter is disabled. Returns registration positions.
pub fn compute_turn_order(
    combatants: &[Combatant],
    prng: &mut dyn PseudoRandomNumberGenerator,
    options: &BattleEngineOptions,
) -> Vec<usize> {
    let jitter = options.speed_jitter;
    let mut entries = combatants
        .iter()
        .filter(|combatant| combatant.is_available())
        .map(|combatant| {
            let factor = if jitter > 0.0 {
                rand_util::uniform(prng, 1.0 - jitter, 1.0 + jitter)
            } else {
                1.0
            };
            SpeedEntry {
                position: combatant.position,
                speed: combatant.effective_speed() * factor,
            }
        })
        .collect::<Vec<_>>();
    speed_sort(&mut entries, prng, options.speed_tie_resolution);
    entries.into_iter().map(|entry| entry.position).collect()
}
