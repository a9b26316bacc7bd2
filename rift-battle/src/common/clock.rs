use std::time::{
    SystemTime,
    UNIX_EPOCH,
};

/// A clock used to read the current time to attach to battle actions and the battle log.
pub trait Clock: Send + Sync {
    /// The current timestamp, in milliseconds.
    fn now(&self) -> u128;
}

/// A [`Clock`] backed by the system time.
#[derive(Debug, Default)]
pub struct SystemTimeClock;

impl Clock for SystemTimeClock {
    fn now(&self) -> u128 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|duration| duration.as_millis())
            .unwrap_or_default()
    }
}
