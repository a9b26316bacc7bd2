use anyhow::Result;
use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use rift_battle::battle::{
    ActionKind,
    Battle,
    BattleAction,
};
use rift_data::Element;
use rift_test_utils::{
    EchoBuilder,
    FIXED_TIME,
    TestBattleBuilder,
    assert_new_logs_eq,
    log_messages,
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
                .hp(100)
                .spe(10)
                .with_move(physical_move("Smash", Element::Light, 200))
                .build(),
        )
        .build()
}

#[test]
fn defending_halves_damage_until_next_turn() {
    setup_test_environment();
    let mut battle = make_battle().unwrap();
    assert_matches!(battle.start(), Ok(()));
    assert_new_logs_eq(&mut battle, &[]);

    assert_matches!(battle.submit_choice("player-1", "defend"), Ok(()));
    assert_eq!(
        log_messages(&mut battle),
        vec!["Pavis is defending!", "Brute used Smash!"]
    );
    assert_eq!(battle.combatant(0).unwrap().hp, 45);
    assert_eq!(battle.round(), 2);
    assert!(!battle.combatant(0).unwrap().defending);

    assert_matches!(battle.submit_choice("player-1", "move 0"), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "attack|round:2|actor:0|target:1|damage:4",
            "attack|round:2|actor:1|target:0|damage:10",
        ],
    );
    assert_eq!(battle.combatant(0).unwrap().hp, 35);
}

#[test]
fn defend_is_recorded_as_action() {
    setup_test_environment();
    let mut battle = make_battle().unwrap();
    assert_matches!(battle.start(), Ok(()));
    assert_matches!(battle.submit_choice("player-1", "defend"), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "defend|round:1|actor:0",
            "attack|round:1|actor:1|target:0|damage:5",
        ],
    );
    assert_eq!(
        battle.actions()[0],
        BattleAction {
            round: 1,
            actor: 0,
            kind: ActionKind::Defend,
            timestamp: FIXED_TIME,
        }
    );
}
