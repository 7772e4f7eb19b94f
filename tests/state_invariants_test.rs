//! Integration test: state invariants under long random action sequences
//!
//! A seeded player mashes every action in the surface. After each step the
//! capacity, equipped-identity, and monotonic-statistics invariants must hold,
//! and refusals must leave the state untouched.

use hugoland::core::actions::{apply_action, Action, ActionContext, ActionOutcome};
use hugoland::core::content::GameContent;
use hugoland::core::economy::Cost;
use hugoland::core::game_logic::ItemRef;
use hugoland::core::game_state::{GameMode, GameState, MultiplierKind};
use hugoland::expedition::types::ExpeditionModifierType;
use hugoland::items::chest::CHEST_COSTS;
use hugoland::items::generation::generate_item;
use hugoland::items::types::ItemKind;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn create_test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(12345)
}

fn random_item_ref(state: &GameState, rng: &mut impl Rng) -> ItemRef {
    let kind = if rng.gen_bool(0.5) {
        ItemKind::Weapon
    } else {
        ItemKind::Armor
    };
    let items = state.inventory.items(kind);
    if items.is_empty() || rng.gen_bool(0.1) {
        return ItemRef::new(kind, "missing");
    }
    let index = rng.gen_range(0..items.len());
    ItemRef::new(kind, items[index].id.clone())
}

fn random_action(state: &GameState, rng: &mut impl Rng) -> Action {
    match rng.gen_range(0..16) {
        0 | 1 => Action::StartCombat,
        2..=5 => Action::Attack {
            hit: rng.gen_bool(0.7),
            category: Some(["math", "science", "history"][rng.gen_range(0..3)].to_string()),
        },
        6 => Action::OpenChest {
            cost: CHEST_COSTS[rng.gen_range(0..CHEST_COSTS.len())],
        },
        7 => Action::EquipItem(random_item_ref(state, rng)),
        8 => Action::UpgradeItem(random_item_ref(state, rng)),
        9 => {
            if rng.gen_bool(0.5) {
                Action::SellItem(random_item_ref(state, rng))
            } else {
                Action::DiscardItem(random_item_ref(state, rng))
            }
        }
        10 => Action::MergeItems {
            first: random_item_ref(state, rng),
            second: random_item_ref(state, rng),
            name: "Fused".to_string(),
            cost: Cost::new(rng.gen_range(0..200), rng.gen_range(0..20)),
        },
        11 => Action::UpgradeResearch,
        12 => Action::PurchaseMultiplier {
            kind: MultiplierKind::Coins,
            cost: Cost::gems(rng.gen_range(0..100)),
        },
        13 => Action::RepairItem(random_item_ref(state, rng)),
        14 => Action::ClaimAfkGems,
        _ => Action::TickPassiveMining,
    }
}

#[test]
fn test_random_play_preserves_invariants() {
    let mut rng = create_test_rng();
    let mut player = ChaCha8Rng::seed_from_u64(999);
    let content = GameContent::default();
    let mut state = GameState::new(0);
    let mut now_ms = 0;

    for _ in 0..3_000 {
        now_ms += 7_000;
        let action = random_action(&state, &mut player);
        let before = state.clone();

        let mut ctx = ActionContext {
            rng: &mut rng,
            now_ms,
            content: &content,
        };
        let result = apply_action(&mut state, action.clone(), &mut ctx);

        if result.is_err() {
            assert_eq!(
                serde_json::to_value(&state).unwrap(),
                serde_json::to_value(&before).unwrap(),
                "refused {:?} changed the state",
                action
            );
            assert_eq!(state.in_combat, before.in_combat);
        }

        if matches!(action, Action::OpenChest { .. }) {
            assert!(state.inventory.total_items() <= state.inventory.max_items);
        }

        for kind in ItemKind::ALL {
            if let Some(id) = state.inventory.equipped_id(kind) {
                let owned = state.inventory.find(kind, id);
                assert!(owned.is_some(), "equipped {kind:?} {id} is not owned");
            }
        }

        let stats = &state.statistics;
        let prev = &before.statistics;
        assert!(stats.total_questions_answered >= prev.total_questions_answered);
        assert!(stats.correct_answers >= prev.correct_answers);
        assert!(stats.coins_earned >= prev.coins_earned);
        assert!(stats.gems_earned >= prev.gems_earned);
        assert!(stats.chests_opened >= prev.chests_opened);
        assert!(stats.items_collected >= prev.items_collected);
        assert!(state.zone >= before.zone);
        assert!(state.research.total_spent >= before.research.total_spent);
        assert!(state.player_stats.hp <= state.player_stats.max_hp);
    }

    assert!(state.statistics.total_questions_answered > 0);
}

#[test]
fn test_chest_never_overfills_inventory() {
    let mut rng = create_test_rng();
    let content = GameContent::default();
    let mut state = GameState::new(0);
    state.coins = 100_000;
    for _ in 0..4 {
        let item = generate_item(ItemKind::Armor, None, &mut rng);
        state.inventory.add(item);
    }

    let mut ctx = ActionContext {
        rng: &mut rng,
        now_ms: 0,
        content: &content,
    };
    let report = apply_action(&mut state, Action::OpenChest { cost: 100 }, &mut ctx).unwrap();
    let ActionOutcome::ChestOpened(reward) = report.outcome else {
        panic!("expected a chest reward");
    };
    assert_eq!(reward.items.len(), 1);
    assert_eq!(state.inventory.total_items(), 5);

    let full = apply_action(&mut state, Action::OpenChest { cost: 100 }, &mut ctx);
    assert!(full.is_err());
    assert_eq!(state.coins, 100_000 - 100);
}

#[test]
fn test_equipped_record_follows_upgrades() {
    let mut rng = create_test_rng();
    let content = GameContent::default();
    let mut state = GameState::new(0);
    state.gems = 1_000;
    let sword = generate_item(ItemKind::Weapon, None, &mut rng);
    let item = ItemRef::weapon(sword.id.clone());
    let base = sword.stat_bonus();
    state.inventory.add(sword);

    let mut ctx = ActionContext {
        rng: &mut rng,
        now_ms: 0,
        content: &content,
    };
    apply_action(&mut state, Action::EquipItem(item.clone()), &mut ctx).unwrap();
    for _ in 0..3 {
        apply_action(&mut state, Action::UpgradeItem(item.clone()), &mut ctx).unwrap();
    }

    let equipped = state.inventory.equipped(ItemKind::Weapon).unwrap();
    let owned = state.inventory.find(ItemKind::Weapon, &item.id).unwrap();
    assert_eq!(equipped, owned);
    assert_eq!(equipped.level, 4);
    assert_eq!(state.player_stats.atk, 50 + base + 30);
}

#[test]
fn test_bad_luck_expedition_limits_chest_rarity() {
    let mut rng = create_test_rng();
    let content = GameContent::default();
    let mut state = GameState::new(0);
    state.coins = 1_000_000;
    state.inventory.max_items = 1_000;

    let mut ctx = ActionContext {
        rng: &mut rng,
        now_ms: 0,
        content: &content,
    };
    apply_action(
        &mut state,
        Action::StartExpedition {
            modifiers: vec![ExpeditionModifierType::BadLuck],
        },
        &mut ctx,
    )
    .unwrap();
    for _ in 0..20 {
        apply_action(&mut state, Action::OpenChest { cost: 2000 }, &mut ctx).unwrap();
    }
    for item in state.inventory.weapons.iter().chain(state.inventory.armor.iter()) {
        assert!(item.rarity.index() <= 1, "{:?} escaped bad luck", item.rarity);
    }
}

#[test]
fn test_mode_switch_is_reversible() {
    let mut rng = create_test_rng();
    let content = GameContent::default();
    let mut state = GameState::new(0);
    let mut ctx = ActionContext {
        rng: &mut rng,
        now_ms: 0,
        content: &content,
    };
    let baseline = state.player_stats.clone();
    apply_action(&mut state, Action::SetGameMode(GameMode::Bloodlust), &mut ctx).unwrap();
    assert_eq!(state.player_stats.atk, 100);
    assert_eq!(state.player_stats.max_hp, 100);
    assert!(state.game_mode.speed_mode_active);

    apply_action(&mut state, Action::SetGameMode(GameMode::Normal), &mut ctx).unwrap();
    assert_eq!(state.player_stats.atk, baseline.atk);
    assert_eq!(state.player_stats.max_hp, baseline.max_hp);
}
