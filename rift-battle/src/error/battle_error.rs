use rift_data::ValidationError;
use thiserror::Error;

/// An error returned by the battle engine.
///
/// Errors caused by caller misuse never change battle state, so the caller can correct its input
/// and try again.
#[derive(Debug, Error)]
pub enum BattleError {
    #[error("combatant {0} cannot be targeted")]
    InvalidTarget(usize),
    #[error("{0} has no legal move")]
    NoLegalMove(String),
    #[error("battle already finished")]
    BattleAlreadyFinished,
    #[error("battle has not started")]
    BattleNotStarted,
    #[error("battle already started")]
    BattleAlreadyStarted,
    #[error("battle has not finished")]
    BattleNotFinished,
    #[error("no action is requested from {0}")]
    NotAwaitingAction(String),
    #[error("invalid choice")]
    InvalidChoice(#[source] anyhow::Error),
    #[error("move slot {0} does not exist")]
    InvalidMoveSlot(usize),
    #[error("{0} has no ability")]
    NoAbility(String),
    #[error("ability is on cooldown for {0} more rounds")]
    AbilityOnCooldown(u8),
    #[error("{0} is not available")]
    ItemUnavailable(String),
    #[error("no reserve can be switched in")]
    NoReserve,
    #[error("escape is not allowed in this battle")]
    EscapeNotAllowed,
    #[error("rewards already claimed")]
    RewardsAlreadyClaimed,
    #[error("battle options are invalid")]
    Validation(#[from] ValidationError),
}
