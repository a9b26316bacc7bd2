mod clock;
mod error_assert;
mod fixtures;
mod log_assert;
mod rng;
mod setup;
mod test_battle_builder;

pub use clock::{
    FIXED_TIME,
    FixedClock,
    TickingClock,
};
pub use error_assert::{
    assert_error_message,
    assert_error_message_contains,
};
pub use fixtures::{
    EchoBuilder,
    physical_move,
    special_move,
    status_move,
};
pub use log_assert::{
    assert_new_logs_eq,
    log_messages,
};
pub use rng::{
    ControlledRandomNumberGenerator,
    controlled_rng,
};
pub use setup::setup_test_environment;
pub use test_battle_builder::TestBattleBuilder;
