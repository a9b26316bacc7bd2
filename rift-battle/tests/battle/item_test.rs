use anyhow::Result;
use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use rift_battle::{
    battle::{
        Battle,
        ItemStack,
    },
    error::BattleError,
};
use rift_data::{
    Boost,
    BoostChange,
    Element,
    ItemData,
    ItemEffect,
    StatusKind,
};
use rift_test_utils::{
    EchoBuilder,
    TestBattleBuilder,
    assert_error_message,
    assert_new_logs_eq,
    log_messages,
    physical_move,
    setup_test_environment,
    status_move,
};

fn stack(name: &str, effect: ItemEffect) -> ItemStack {
    ItemStack {
        item: ItemData {
            name: name.to_owned(),
            effect,
        },
        quantity: 1,
    }
}

fn make_battle() -> Result<Battle> {
    TestBattleBuilder::new()
        .with_seed(0)
        .deterministic()
        .add_player("player-1", 0, EchoBuilder::new("Pyre").spe(10).build())
        .add_ai(
            1,
            EchoBuilder::new("Ember")
                .spe(90)
                .with_move(status_move("Ember Veil", StatusKind::Burn))
                .build(),
        )
        .add_items(0, stack("Potion", ItemEffect::Heal { amount: 20 }))
        .add_items(
            0,
            stack(
                "Burn Salve",
                ItemEffect::Cure {
                    status: Some(StatusKind::Burn),
                },
            ),
        )
        .add_items(
            0,
            stack(
                "X Attack",
                ItemEffect::Boost(BoostChange {
                    boost: Boost::Atk,
                    stages: 2,
                }),
            ),
        )
        .build()
}

#[test]
fn items_are_consumed_on_use() {
    setup_test_environment();
    let mut battle = make_battle().unwrap();
    assert_matches!(battle.start(), Ok(()));
    assert_eq!(
        log_messages(&mut battle),
        vec!["Ember used Ember Veil! Pyre is now burned!"]
    );
    assert_eq!(
        battle.active_request().unwrap().items,
        vec!["Potion", "Burn Salve", "X Attack"]
    );

    assert_matches!(battle.submit_choice("player-1", "item burn salve"), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "item|round:1|actor:0|target:0",
            "attack|round:2|actor:1|target:0|status:burn",
        ],
    );
    assert_eq!(
        battle.log().entries().nth(1).unwrap().message,
        "Pyre used Burn Salve! Pyre is no longer burned."
    );
    assert_eq!(
        battle.active_request().unwrap().items,
        vec!["Potion", "X Attack"]
    );

    assert_matches!(battle.submit_choice("player-1", "item X Attack"), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "item|round:2|actor:0|target:0",
            "residual|round:3|actor:0|damage:6|status:burn",
            "attack|round:3|actor:1|target:0",
        ],
    );
    assert_eq!(battle.combatant(0).unwrap().boost(Boost::Atk), 2);
    assert_eq!(battle.combatant(0).unwrap().hp, 44);

    assert_matches!(battle.submit_choice("player-1", "item potion"), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "item|round:3|actor:0|target:0|healing:6",
            "residual|round:4|actor:0|damage:6|status:burn",
            "attack|round:4|actor:1|target:0",
        ],
    );
    assert_eq!(
        battle.log().entries().nth(6).unwrap().message,
        "Pyre used Potion! Pyre restored 6 HP!"
    );

    assert_matches!(
        battle.submit_choice("player-1", "item potion"),
        Err(BattleError::ItemUnavailable(item)) => {
            assert_eq!(item, "potion");
        }
    );
    assert!(
        battle
            .bag(0)
            .unwrap()
            .items
            .iter()
            .all(|stack| stack.quantity == 0)
    );
    assert!(battle.active_request().unwrap().items.is_empty());
}

#[test]
fn item_target_must_be_teammate() {
    setup_test_environment();
    let mut battle = make_battle().unwrap();
    assert_matches!(battle.start(), Ok(()));
    assert_matches!(
        battle.submit_choice("player-1", "item Potion,1"),
        Err(BattleError::InvalidTarget(1))
    );
    assert_error_message(
        battle.submit_choice("player-1", "item Elixir"),
        "Elixir is not available",
    );
    assert_eq!(battle.bag(0).unwrap().items[0].quantity, 1);
}

#[test]
fn cure_without_status_has_no_effect() {
    setup_test_environment();
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .deterministic()
        .add_player(
            "player-1",
            0,
            EchoBuilder::new("Pyre")
                .spe(90)
                .with_move(physical_move("Jab", Element::Light, 40))
                .build(),
        )
        .add_ai(
            1,
            EchoBuilder::new("Ember")
                .spe(10)
                .with_move(physical_move("Jab", Element::Light, 40))
                .build(),
        )
        .add_items(0, stack("Full Heal", ItemEffect::Cure { status: None }))
        .build()
        .unwrap();
    assert_matches!(battle.start(), Ok(()));
    assert_matches!(battle.submit_choice("player-1", "item full heal"), Ok(()));
    assert_eq!(
        log_messages(&mut battle),
        vec!["Pyre used Full Heal! It had no effect.", "Ember used Jab!"]
    );
    assert_eq!(battle.bag(0).unwrap().items[0].quantity, 0);
}
