mod action;
mod battle_builder;
mod battle_options;
mod boosts;
mod combatant;
mod core_battle;
mod damage;
mod request;
mod rewards;
mod speed_order;
pub mod status;

pub use action::{
    ActionKind,
    BattleAction,
};
pub use battle_builder::BattleBuilder;
pub use battle_options::{
    BattleEngineOptions,
    BattleOptions,
    CombatantData,
    ItemStack,
    RandomizeBaseDamage,
    SpeedTieResolution,
    TeamBag,
};
pub use boosts::{
    BoostTable,
    MAX_STAGE,
    MIN_STAGE,
    STAGE_MULTIPLIERS,
    modify_stat,
    stage_multiplier,
};
pub use combatant::{
    CombatProfile,
    Combatant,
    Controller,
};
pub use core_battle::{
    Battle,
    BattleState,
};
pub use damage::{
    DamageResult,
    calculate_damage,
};
pub use request::{
    ActionRequest,
    MoveOption,
};
pub use rewards::{
    BattleOutcome,
    BattleResult,
    BattleSummary,
    OutcomeEvent,
    Reward,
    calculate_rewards,
};
pub use speed_order::{
    SpeedEntry,
    SpeedOrderable,
    compare_speed,
    compute_turn_order,
    sort_with_ties,
    speed_sort,
};
pub use status::{
    StatusEffect,
    TickOutcome,
};
