mod log;

pub use log::{
    BattleLog,
    BattleLogEntry,
    LogKind,
};
