use std::sync::atomic::{
    AtomicU64,
    Ordering,
};

use rift_battle::common::Clock;

/// Time reported by test clocks, in milliseconds since the Unix epoch.
pub const FIXED_TIME: u128 = 1_700_000_000_000;

/// A clock that never advances, which keeps battle logs deterministic.
#[derive(Debug, Default)]
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> u128 {
        FIXED_TIME
    }
}

/// A clock that starts at [`FIXED_TIME`] and advances one millisecond per reading.
#[derive(Debug, Default)]
pub struct TickingClock {
    readings: AtomicU64,
}

impl Clock for TickingClock {
    fn now(&self) -> u128 {
        FIXED_TIME + self.readings.fetch_add(1, Ordering::Relaxed) as u128
    }
}
