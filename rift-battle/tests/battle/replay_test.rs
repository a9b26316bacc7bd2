use anyhow::Result;
use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use rift_battle::{
    ai::RandomSelector,
    battle::{
        Battle,
        SpeedTieResolution,
    },
};
use rift_data::{
    Element,
    StatusKind,
};
use rift_test_utils::{
    EchoBuilder,
    TestBattleBuilder,
    physical_move,
    setup_test_environment,
    special_move,
    status_move,
};

fn make_battle(builder: TestBattleBuilder, seed: u64) -> Result<Battle> {
    builder
        .with_seed(seed)
        .add_ai(
            0,
            EchoBuilder::new("Pyrox")
                .element(Element::Fire)
                .hp(80)
                .spe(55)
                .with_move(special_move("Flare", Element::Fire, 60))
                .with_move(status_move("Singe", StatusKind::Burn))
                .build(),
        )
        .add_ai(
            1,
            EchoBuilder::new("Tidal")
                .element(Element::Water)
                .hp(90)
                .spe(50)
                .with_move(special_move("Surge", Element::Water, 50))
                .with_move(physical_move("Ram", Element::Neutral, 70))
                .build(),
        )
        .build()
}

fn log_lines(battle: &Battle) -> Vec<(String, String)> {
    battle
        .log()
        .entries()
        .map(|entry| (entry.to_string(), entry.message.clone()))
        .collect()
}

#[test]
fn same_seed_replays_same_battle() {
    setup_test_environment();
    for seed in [0, 7, 12345] {
        let mut first = make_battle(TestBattleBuilder::new(), seed).unwrap();
        let mut second = make_battle(TestBattleBuilder::new(), seed).unwrap();
        assert_matches!(first.start(), Ok(()));
        assert_matches!(second.start(), Ok(()));
        assert_eq!(first.seed(), seed);
        assert_eq!(first.outcome(), second.outcome());
        assert_eq!(first.round(), second.round());
        assert_eq!(first.actions(), second.actions());
        assert_eq!(log_lines(&first), log_lines(&second));
        assert_ne!(first.id(), second.id());
    }
}

#[test]
fn random_selector_replays_same_battle() {
    setup_test_environment();
    let builder = || {
        TestBattleBuilder::new()
            .with_selector(|| Box::new(RandomSelector))
            .with_speed_tie_resolution(SpeedTieResolution::Random)
    };
    let mut first = make_battle(builder(), 99).unwrap();
    let mut second = make_battle(builder(), 99).unwrap();
    assert_matches!(first.start(), Ok(()));
    assert_matches!(second.start(), Ok(()));
    assert!(first.finished());
    assert_eq!(log_lines(&first), log_lines(&second));
}

#[test]
fn every_battle_finishes() {
    setup_test_environment();
    for seed in 0..10 {
        let mut battle = make_battle(TestBattleBuilder::new(), seed).unwrap();
        assert_matches!(battle.start(), Ok(()));
        assert!(battle.finished());
        assert!(battle.outcome().is_some());
        assert_eq!(
            battle.log().entries().last().unwrap().to_string(),
            format!("end|round:{}", battle.round())
        );
    }
}
