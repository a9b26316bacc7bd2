use anyhow::Result;
use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use rift_battle::{
    battle::{
        Battle,
        BattleOutcome,
        BattleResult,
        BattleSummary,
        OutcomeEvent,
        Reward,
    },
    error::BattleError,
};
use rift_data::Element;
use rift_test_utils::{
    EchoBuilder,
    TestBattleBuilder,
    assert_new_logs_eq,
    log_messages,
    physical_move,
    setup_test_environment,
};

fn make_battle(builder: TestBattleBuilder) -> Result<Battle> {
    builder
        .with_seed(0)
        .deterministic()
        .add_ai(
            0,
            EchoBuilder::new("Warden")
                .spe(60)
                .with_move(physical_move("Crush", Element::Light, 200))
                .build(),
        )
        .add_ai(
            1,
            EchoBuilder::new("Lurker")
                .hp(20)
                .spe(10)
                .with_move(physical_move("Nip", Element::Light, 40))
                .build(),
        )
        .build()
}

#[test]
fn winner_claims_rewards_once() {
    setup_test_environment();
    let mut battle = make_battle(TestBattleBuilder::new()).unwrap();
    assert_matches!(
        battle.claim_rewards(),
        Err(BattleError::BattleNotFinished)
    );
    assert_matches!(battle.start(), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "attack|round:1|actor:0|target:1|damage:10",
            "attack|round:1|actor:1|target:0|damage:4",
            "attack|round:2|actor:0|target:1|damage:10",
            "end|round:2",
        ],
    );
    assert_eq!(battle.outcome(), Some(BattleOutcome::Victory { team: 0 }));

    assert_eq!(
        battle.claim_rewards().unwrap(),
        vec![(
            0,
            Reward {
                experience: 140,
                currency: 70,
                bonus_multiplier: 1.0,
            }
        )]
    );
    assert_matches!(
        battle.claim_rewards(),
        Err(BattleError::RewardsAlreadyClaimed)
    );
}

#[test]
fn finished_battle_is_summarized() {
    setup_test_environment();
    let mut battle = make_battle(TestBattleBuilder::new()).unwrap();
    assert_matches!(battle.outcome_events(), Err(BattleError::BattleNotFinished));
    assert_matches!(battle.start(), Ok(()));
    assert_eq!(
        log_messages(&mut battle),
        vec![
            "Warden used Crush!",
            "Lurker used Nip!",
            "Warden used Crush! Lurker has been defeated!",
            "Team 0 won the battle!",
        ]
    );
    assert_eq!(
        battle.summary().unwrap(),
        BattleSummary {
            id: battle.id(),
            outcome: BattleOutcome::Victory { team: 0 },
            rounds: 2,
            winners: vec!["Warden".to_owned()],
            losers: vec!["Lurker".to_owned()],
            action_count: 3,
            total_damage: 24,
            duration: 0,
        }
    );
    assert_eq!(
        battle.outcome_events().unwrap(),
        vec![
            OutcomeEvent {
                echo: "warden".to_owned(),
                result: BattleResult::Victory,
                opponent_level: 20,
                fainted: false,
            },
            OutcomeEvent {
                echo: "lurker".to_owned(),
                result: BattleResult::Defeat,
                opponent_level: 20,
                fainted: true,
            },
        ]
    );

    let snapshots = battle.snapshots().unwrap();
    assert_eq!(snapshots[0].hp, 46);
    assert_eq!(snapshots[1].hp, 0);
    assert!(snapshots[1].defeated);
}

#[test]
fn duration_follows_battle_clock() {
    setup_test_environment();
    let mut battle = make_battle(TestBattleBuilder::new().with_ticking_clock()).unwrap();
    assert_matches!(battle.start(), Ok(()));
    let entries = battle.log().entries().collect::<Vec<_>>();
    let summary = battle.summary().unwrap();
    assert!(summary.duration > 0);
    assert_eq!(
        summary.duration,
        entries[entries.len() - 1].timestamp - entries[0].timestamp
    );
}

#[test]
fn rewards_grow_with_defeated_opponents() {
    setup_test_environment();
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .deterministic()
        .add_ai(
            0,
            EchoBuilder::new("Warden")
                .hp(100)
                .spe(60)
                .with_move(physical_move("Crush", Element::Light, 200))
                .build(),
        )
        .add_ai(
            1,
            EchoBuilder::new("Lurker")
                .hp(10)
                .spe(10)
                .with_move(physical_move("Nip", Element::Light, 40))
                .build(),
        )
        .add_ai(
            1,
            EchoBuilder::new("Skulk")
                .level(22)
                .hp(10)
                .spe(5)
                .with_move(physical_move("Nip", Element::Light, 40))
                .build(),
        )
        .build()
        .unwrap();
    assert_matches!(battle.start(), Ok(()));
    assert_eq!(battle.outcome(), Some(BattleOutcome::Victory { team: 0 }));
    assert_eq!(battle.round(), 2);

    let rewards = battle.claim_rewards().unwrap();
    assert_eq!(rewards.len(), 1);
    let (position, reward) = &rewards[0];
    assert_eq!(*position, 0);
    // 140 + 144 * 1.2, 70 + 72 * 1.2
    assert_eq!(reward.experience, 312);
    assert_eq!(reward.currency, 156);
    assert!((reward.bonus_multiplier - 1.1).abs() < 1e-9);

    let events = battle.outcome_events().unwrap();
    assert_eq!(events[0].opponent_level, 22);
    assert_eq!(events[2].opponent_level, 20);
    assert_eq!(battle.summary().unwrap().losers, vec!["Lurker", "Skulk"]);
}
