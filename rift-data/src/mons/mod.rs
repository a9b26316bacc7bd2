mod boost;
mod echo;
mod stat;
mod stat_multipliers;

pub use boost::{
    Boost,
    BoostChange,
};
pub use echo::{
    EchoData,
    MAX_MOVES,
};
pub use stat::{
    Stat,
    StatTable,
};
pub use stat_multipliers::StatMultipliers;
