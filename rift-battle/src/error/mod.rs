mod battle_error;

pub use battle_error::BattleError;
