use anyhow::Result;
use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use rift_battle::battle::Battle;
use rift_data::{
    Element,
    MoveData,
    StatusKind,
};
use rift_test_utils::{
    EchoBuilder,
    TestBattleBuilder,
    assert_new_logs_eq,
    physical_move,
    setup_test_environment,
    status_move,
};

fn make_battle(player_speed: u32, mov: MoveData) -> Result<Battle> {
    TestBattleBuilder::new()
        .with_seed(0)
        .deterministic()
        .add_player(
            "player-1",
            0,
            EchoBuilder::new("Dozer")
                .spe(player_speed)
                .with_move(physical_move("Jab", Element::Light, 40))
                .build(),
        )
        .add_ai(
            1,
            EchoBuilder::new("Hush")
                .spe(40)
                .with_move(mov)
                .build(),
        )
        .build()
}

#[test]
fn sleep_prevents_acting_until_it_expires() {
    setup_test_environment();
    let mut battle = make_battle(90, status_move("Lullaby", StatusKind::Sleep)).unwrap();
    assert_matches!(battle.start(), Ok(()));
    assert_new_logs_eq(&mut battle, &[]);

    assert_matches!(battle.submit_choice("player-1", "move 0"), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "attack|round:1|actor:0|target:1|damage:4",
            "attack|round:1|actor:1|target:0|status:sleep",
            "residual|round:2|actor:0|status:sleep",
            "immobilized|round:2|actor:0|status:sleep",
            "attack|round:2|actor:1|target:0",
            "residual|round:3|actor:0|status:sleep",
            "immobilized|round:3|actor:0|status:sleep",
            "attack|round:3|actor:1|target:0",
            "residual|round:4|actor:0|status:sleep",
        ],
    );
    assert_eq!(
        battle
            .log()
            .entries()
            .skip(1)
            .take(3)
            .map(|entry| entry.message.as_str())
            .collect::<Vec<_>>(),
        vec![
            "Hush used Lullaby! Dozer is now asleep!",
            "Dozer is asleep.",
            "Dozer is asleep and cannot act!",
        ]
    );
    assert_eq!(
        battle.log().entries().last().unwrap().message,
        "Dozer is asleep. Dozer is no longer asleep."
    );
    assert_eq!(battle.active_request().unwrap().round, 4);
    assert!(battle.combatant(0).unwrap().statuses.is_empty());
}

#[test]
fn paralysis_slows_only_while_active() {
    setup_test_environment();
    let jolt = MoveData {
        status_duration: Some(1),
        ..status_move("Jolt", StatusKind::Paralysis)
    };
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .deterministic()
        .add_player(
            "player-1",
            0,
            EchoBuilder::new("Dozer")
                .spe(40)
                .with_move(physical_move("Jab", Element::Light, 40))
                .with_move(jolt)
                .build(),
        )
        .add_ai(
            1,
            EchoBuilder::new("Hush")
                .spe(60)
                .with_move(physical_move("Jab", Element::Light, 40))
                .build(),
        )
        .build()
        .unwrap();
    assert_matches!(battle.start(), Ok(()));
    assert_new_logs_eq(&mut battle, &["attack|round:1|actor:1|target:0|damage:4"]);

    // Hush is paralyzed for round 2 only, so it moves after Dozer.
    assert_matches!(battle.submit_choice("player-1", "move 1"), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "attack|round:1|actor:0|target:1|status:paralysis",
            "residual|round:2|actor:1|status:paralysis",
        ],
    );
    assert_eq!(battle.combatant(1).unwrap().turn_order, Some(1));
    assert!(battle.combatant(1).unwrap().statuses.is_empty());

    // The paralysis expired during round 2, so Hush is back at full speed in round 3.
    assert_matches!(battle.submit_choice("player-1", "move 0"), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "attack|round:2|actor:0|target:1|damage:4",
            "attack|round:2|actor:1|target:0|damage:4",
            "attack|round:3|actor:1|target:0|damage:4",
        ],
    );
    assert_eq!(battle.combatant(1).unwrap().turn_order, Some(0));
    assert_eq!(battle.active_request().unwrap().round, 3);
}

#[test]
fn status_chance_is_rolled() {
    setup_test_environment();
    let never = MoveData {
        status: Some(StatusKind::Burn),
        status_chance: Some(0),
        ..physical_move("Singe", Element::Light, 40)
    };
    let mut battle = make_battle(90, never).unwrap();
    assert_matches!(battle.start(), Ok(()));
    assert_matches!(battle.submit_choice("player-1", "move 0"), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "attack|round:1|actor:0|target:1|damage:4",
            "attack|round:1|actor:1|target:0|damage:4",
        ],
    );
    assert!(battle.combatant(0).unwrap().statuses.is_empty());
}
