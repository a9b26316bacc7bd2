use anyhow::Result;
use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use rift_battle::{
    battle::{
        Battle,
        BattleOutcome,
        BattleResult,
    },
    error::BattleError,
};
use rift_data::Element;
use rift_test_utils::{
    EchoBuilder,
    TestBattleBuilder,
    assert_new_logs_eq,
    controlled_rng,
    log_messages,
    physical_move,
    setup_test_environment,
};

fn make_battle(escape_allowed: bool) -> Result<Battle> {
    TestBattleBuilder::new()
        .with_seed(0)
        .with_controlled_rng(true)
        .with_escape_allowed(escape_allowed)
        .deterministic()
        .add_player(
            "player-1",
            0,
            EchoBuilder::new("Pavis")
                .spe(100)
                .with_move(physical_move("Jab", Element::Light, 40))
                .build(),
        )
        .add_ai(
            1,
            EchoBuilder::new("Brute")
                .spe(10)
                .with_move(physical_move("Jab", Element::Light, 40))
                .build(),
        )
        .build()
}

#[test]
fn cannot_escape_when_not_allowed() {
    setup_test_environment();
    let mut battle = make_battle(false).unwrap();
    assert_matches!(battle.start(), Ok(()));
    assert!(!battle.active_request().unwrap().can_escape);
    assert_matches!(
        battle.submit_choice("player-1", "escape"),
        Err(BattleError::EscapeNotAllowed)
    );
    assert_new_logs_eq(&mut battle, &[]);
    assert!(battle.request_for_player("player-1").is_some());
}

#[test]
fn escape_can_fail_and_then_succeed() {
    setup_test_environment();
    let mut battle = make_battle(true).unwrap();
    assert_matches!(battle.start(), Ok(()));
    assert!(battle.active_request().unwrap().can_escape);

    controlled_rng(&mut battle)
        .unwrap()
        .override_upcoming([(1, u32::MAX as u64)]);
    assert_matches!(battle.submit_choice("player-1", "escape"), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "escape|round:1|actor:0",
            "attack|round:1|actor:1|target:0|damage:4",
        ],
    );
    assert!(!battle.finished());

    controlled_rng(&mut battle)
        .unwrap()
        .override_upcoming([(1, 0)]);
    assert_matches!(battle.submit_choice("player-1", "escape"), Ok(()));
    assert_eq!(
        log_messages(&mut battle),
        vec!["Pavis escaped!", "Team 0 escaped the battle!"]
    );
    assert_eq!(battle.outcome(), Some(BattleOutcome::Escaped { team: 0 }));
    assert_eq!(battle.round(), 2);
    assert_eq!(battle.active_request(), None);

    assert_matches!(battle.claim_rewards(), Ok(rewards) => {
        assert!(rewards.is_empty());
    });
    assert_eq!(
        battle
            .outcome_events()
            .unwrap()
            .into_iter()
            .map(|event| event.result)
            .collect::<Vec<_>>(),
        vec![BattleResult::Escaped, BattleResult::Draw]
    );
    assert_eq!(battle.summary().unwrap().winners, Vec::<String>::new());
}

#[test]
fn failed_escape_is_described() {
    setup_test_environment();
    let mut battle = make_battle(true).unwrap();
    assert_matches!(battle.start(), Ok(()));
    controlled_rng(&mut battle)
        .unwrap()
        .override_upcoming([(1, u32::MAX as u64)]);
    assert_matches!(battle.submit_choice("player-1", "escape"), Ok(()));
    assert_eq!(
        log_messages(&mut battle),
        vec![
            "Pavis tried to escape but couldn't get away!",
            "Brute used Jab!",
        ]
    );
}
