use anyhow::Result;
use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use rift_battle::{
    battle::{
        Battle,
        BattleOutcome,
        BattleState,
        MoveOption,
    },
    error::BattleError,
};
use rift_choice::{
    Choice,
    MoveChoice,
};
use rift_data::{
    Element,
    MoveCategory,
};
use rift_test_utils::{
    EchoBuilder,
    TestBattleBuilder,
    assert_error_message,
    assert_error_message_contains,
    assert_new_logs_eq,
    physical_move,
    setup_test_environment,
};

fn make_battle() -> Result<Battle> {
    TestBattleBuilder::new()
        .with_seed(0)
        .deterministic()
        .add_player(
            "player-1",
            0,
            EchoBuilder::new("Pavis")
                .spe(60)
                .with_move(physical_move("Jab", Element::Light, 40))
                .build(),
        )
        .add_ai(
            1,
            EchoBuilder::new("Brute")
                .hp(4)
                .spe(10)
                .with_move(physical_move("Jab", Element::Light, 40))
                .build(),
        )
        .build()
}

#[test]
fn request_lists_legal_options() {
    setup_test_environment();
    let mut battle = make_battle().unwrap();
    assert_matches!(
        battle.submit_choice("player-1", "move 0"),
        Err(BattleError::BattleNotStarted)
    );
    assert_matches!(battle.start(), Ok(()));
    assert_eq!(battle.state(), BattleState::ActionSelect);
    let request = battle.request_for_player("player-1").unwrap();
    assert_eq!(request.round, 1);
    assert_eq!(request.actor, 0);
    assert_eq!(
        request.moves,
        vec![MoveOption {
            slot: 0,
            name: "Jab".to_owned(),
            category: MoveCategory::Physical,
            element: Element::Light,
            power: 40,
            accuracy: 100,
        }]
    );
    assert_eq!(request.targets, vec![1]);
    assert!(request.reserves.is_empty());
    assert!(request.items.is_empty());
    assert!(!request.ability_ready);
    assert!(!request.can_escape);
    assert_eq!(battle.request_for_player("player-2"), None);
}

#[test]
fn rejected_choices_leave_battle_unchanged() {
    setup_test_environment();
    let mut battle = make_battle().unwrap();
    assert_matches!(battle.start(), Ok(()));
    let request = battle.active_request().cloned();

    assert_error_message(
        battle.submit_choice("player-2", "move 0"),
        "no action is requested from player-2",
    );
    assert_matches!(
        battle.submit_choice("player-1", "dance"),
        Err(BattleError::InvalidChoice(_))
    );
    assert_matches!(
        battle.submit_choice("player-1", "move x"),
        Err(BattleError::InvalidChoice(_))
    );
    assert_error_message_contains(battle.submit_choice("player-1", ""), "invalid choice");
    assert_matches!(
        battle.submit_choice("player-1", "move 5"),
        Err(BattleError::InvalidMoveSlot(5))
    );
    assert_matches!(
        battle.submit_choice("player-1", "move 0,0"),
        Err(BattleError::InvalidTarget(0))
    );
    assert_matches!(
        battle.submit_choice("player-1", "move 0,7"),
        Err(BattleError::InvalidTarget(7))
    );

    assert_new_logs_eq(&mut battle, &[]);
    assert_eq!(battle.active_request().cloned(), request);
    assert!(battle.actions().is_empty());
}

#[test]
fn typed_choice_finishes_battle() {
    setup_test_environment();
    let mut battle = make_battle().unwrap();
    assert_matches!(battle.start(), Ok(()));
    assert_matches!(
        battle.set_choice(
            "player-1",
            Choice::Move(MoveChoice {
                slot: 0,
                target: Some(1),
            }),
        ),
        Ok(())
    );
    assert_new_logs_eq(
        &mut battle,
        &["attack|round:1|actor:0|target:1|damage:4", "end|round:1"],
    );
    assert_eq!(battle.outcome(), Some(BattleOutcome::Victory { team: 0 }));
    assert_eq!(battle.active_request(), None);
    assert_matches!(
        battle.submit_choice("player-1", "move 0"),
        Err(BattleError::BattleAlreadyFinished)
    );
    assert_matches!(battle.start(), Err(BattleError::BattleAlreadyFinished));
}

#[test]
fn ai_without_moves_ends_battle() {
    setup_test_environment();
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .deterministic()
        .add_player(
            "player-1",
            0,
            EchoBuilder::new("Pavis")
                .spe(10)
                .with_move(physical_move("Jab", Element::Light, 40))
                .build(),
        )
        .add_ai(1, EchoBuilder::new("Husk").spe(60).build())
        .build()
        .unwrap();
    assert_matches!(battle.start(), Err(BattleError::NoLegalMove(name)) => {
        assert_eq!(name, "Husk");
    });
    assert!(battle.finished());
    assert_eq!(battle.outcome(), Some(BattleOutcome::Draw));
    assert_new_logs_eq(&mut battle, &["end|round:1"]);
}

#[test]
fn invalid_options_are_rejected() {
    setup_test_environment();
    assert_error_message(
        TestBattleBuilder::new()
            .add_ai(0, EchoBuilder::new("Pavis").build())
            .add_ai(0, EchoBuilder::new("Brute").build())
            .build(),
        "battle options are invalid",
    );
    assert_error_message(
        TestBattleBuilder::new()
            .add_ai(0, EchoBuilder::new("Pavis").level(0).build())
            .add_ai(1, EchoBuilder::new("Brute").build())
            .build(),
        "battle options are invalid",
    );
    assert_error_message(
        TestBattleBuilder::new()
            .add_ai(0, EchoBuilder::new("Pavis").build())
            .add_ai(1, EchoBuilder::new("Pavis").build())
            .build(),
        "battle options are invalid",
    );
}
