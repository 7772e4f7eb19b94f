//! Inventory, economy, and timer operations applied by the reducer.
//!
//! Every function validates before writing, so an `Err` leaves the state as
//! it was.

use super::economy::{afk_gems, research_cost, research_tier, Cost};
use super::error::{ActionError, ActionResult};
use super::game_state::{CheatKind, GameMode, GameState, MultiplierKind};
use crate::character::power_skills::{skill_for_tier, PowerSkill};
use crate::core::constants::MULTIPLIER_PURCHASE_STEP;
use crate::expedition::types::ExpeditionModifierType;
use crate::items::chest::{chest_rarity_weights, roll_bonus_gems, roll_chest_items, BAD_LUCK_WEIGHTS};
use crate::items::forge::{merge_items, repair_cost};
use crate::items::types::{Item, ItemKind};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Reference to an owned item by kind and id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemRef {
    pub kind: ItemKind,
    pub id: String,
}

impl ItemRef {
    pub fn new(kind: ItemKind, id: impl Into<String>) -> Self {
        Self { kind, id: id.into() }
    }

    pub fn weapon(id: impl Into<String>) -> Self {
        Self::new(ItemKind::Weapon, id)
    }

    pub fn armor(id: impl Into<String>) -> Self {
        Self::new(ItemKind::Armor, id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChestReward {
    pub items: Vec<Item>,
    pub bonus_gems: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResearchUpgrade {
    pub level: u32,
    pub tier: u32,
    pub cost: u64,
    pub power_skill: Option<PowerSkill>,
}

/// Fails unless the state can cover `cost`. Cheat flags waive the matching check.
fn ensure_funds(state: &GameState, cost: Cost) -> ActionResult<()> {
    if !state.cheats.infinite_coins && state.coins < cost.coins {
        return Err(ActionError::InsufficientCoins {
            required: cost.coins,
            available: state.coins,
        });
    }
    if !state.cheats.infinite_gems && state.gems < cost.gems {
        return Err(ActionError::InsufficientGems {
            required: cost.gems,
            available: state.gems,
        });
    }
    Ok(())
}

/// Deducts a cost already checked by `ensure_funds`.
fn pay(state: &mut GameState, cost: Cost) {
    if !state.cheats.infinite_coins {
        state.coins = state.coins.saturating_sub(cost.coins);
    }
    if !state.cheats.infinite_gems {
        state.gems = state.gems.saturating_sub(cost.gems);
    }
}

fn find_item<'a>(state: &'a GameState, item: &ItemRef) -> ActionResult<&'a Item> {
    state
        .inventory
        .find(item.kind, &item.id)
        .ok_or_else(|| ActionError::ItemNotFound {
            kind: item.kind,
            id: item.id.clone(),
        })
}

/// Buys a chest. The item count is capped at the free slots; `bad_luck`
/// limits rarities to common and rare.
pub fn open_chest(state: &mut GameState, cost: u64, rng: &mut impl Rng) -> ActionResult<ChestReward> {
    ensure_funds(state, Cost::coins(cost))?;
    if state.inventory.is_full() {
        return Err(ActionError::InventoryFull {
            capacity: state.inventory.max_items,
        });
    }

    let weights = if state
        .expedition
        .modifier_active(ExpeditionModifierType::BadLuck)
    {
        BAD_LUCK_WEIGHTS
    } else {
        chest_rarity_weights(cost)
    };
    let items = roll_chest_items(&weights, state.inventory.free_slots(), rng);
    let bonus_gems = roll_bonus_gems(
        state.knowledge_streak.multiplier,
        state.multipliers.gems,
        rng,
    );

    pay(state, Cost::coins(cost));
    state.earn_gems(bonus_gems);
    state.acquire_items(items.clone());
    state.statistics.chests_opened += 1;

    Ok(ChestReward { items, bonus_gems })
}

pub fn equip_item(state: &mut GameState, item: &ItemRef) -> ActionResult<()> {
    find_item(state, item)?;
    state
        .inventory
        .set_equipped(item.kind, Some(item.id.clone()));
    Ok(())
}

/// Spends gems to raise an item's level. Returns the new level.
pub fn upgrade_item(state: &mut GameState, item: &ItemRef) -> ActionResult<u32> {
    let cost = Cost::gems(find_item(state, item)?.upgrade_cost);
    ensure_funds(state, cost)?;
    pay(state, cost);

    let target = state
        .inventory
        .find_mut(item.kind, &item.id)
        .ok_or_else(|| ActionError::ItemNotFound {
            kind: item.kind,
            id: item.id.clone(),
        })?;
    target.apply_upgrade();
    Ok(target.level)
}

/// Sells an unequipped item for its sell price. Returns the coins gained.
pub fn sell_item(state: &mut GameState, item: &ItemRef) -> ActionResult<u64> {
    let price = find_item(state, item)?.sell_price;
    if state.inventory.is_equipped(item.kind, &item.id) {
        return Err(ActionError::ItemEquipped {
            id: item.id.clone(),
        });
    }
    state.inventory.remove(item.kind, &item.id);
    state.coins += price;
    Ok(price)
}

/// Throws an item away without refund, unequipping it if needed.
pub fn discard_item(state: &mut GameState, item: &ItemRef) -> ActionResult<Item> {
    state
        .inventory
        .remove(item.kind, &item.id)
        .ok_or_else(|| ActionError::ItemNotFound {
            kind: item.kind,
            id: item.id.clone(),
        })
}

/// Restores full durability for gems. Returns the gems spent.
pub fn repair_item(state: &mut GameState, item: &ItemRef) -> ActionResult<u64> {
    let gems = repair_cost(find_item(state, item)?);
    ensure_funds(state, Cost::gems(gems))?;
    pay(state, Cost::gems(gems));
    if let Some(target) = state.inventory.find_mut(item.kind, &item.id) {
        target.durability = target.max_durability;
    }
    Ok(gems)
}

/// Fuses two distinct items of the same kind into a new one.
pub fn merge_inventory_items(
    state: &mut GameState,
    first: &ItemRef,
    second: &ItemRef,
    name: &str,
    cost: Cost,
) -> ActionResult<Item> {
    if first == second {
        return Err(ActionError::SameItem {
            id: first.id.clone(),
        });
    }
    let first_item = find_item(state, first)?;
    let second_item = find_item(state, second)?;
    let merged = merge_items(first_item, second_item, name).ok_or(ActionError::CategoryMismatch {
        first: first.kind,
        second: second.kind,
    })?;
    ensure_funds(state, cost)?;

    pay(state, cost);
    state.inventory.remove(first.kind, &first.id);
    state.inventory.remove(second.kind, &second.id);
    state.inventory.add(merged.clone());
    Ok(merged)
}

/// Buys one research level. Crossing into a new tier grants the skill of the
/// following tier, once per skill.
pub fn upgrade_research(state: &mut GameState, skills: &[PowerSkill]) -> ActionResult<ResearchUpgrade> {
    let cost = research_cost(state.research.level);
    ensure_funds(state, Cost::coins(cost))?;
    pay(state, Cost::coins(cost));

    let previous_tier = state.research.tier;
    state.research.level += 1;
    state.research.tier = research_tier(state.research.level);
    state.research.total_spent += cost;

    let mut granted = None;
    if state.research.tier > previous_tier {
        if let Some(skill) = skill_for_tier(skills, state.research.tier + 1) {
            if !state.has_power_skill(&skill.id) {
                state.power_skills.push(skill.clone());
                granted = Some(skill.clone());
            }
        }
    }

    Ok(ResearchUpgrade {
        level: state.research.level,
        tier: state.research.tier,
        cost,
        power_skill: granted,
    })
}

pub fn set_game_mode(state: &mut GameState, mode: GameMode) {
    state.game_mode.current = mode;
    state.game_mode.speed_mode_active = mode.is_speed_mode();
}

/// Buys a +0.1 step on one multiplier.
pub fn purchase_multiplier(state: &mut GameState, kind: MultiplierKind, cost: Cost) -> ActionResult<f64> {
    ensure_funds(state, cost)?;
    pay(state, cost);
    state.multipliers.add(kind, MULTIPLIER_PURCHASE_STEP);
    Ok(state.multipliers.get(kind))
}

fn credit_mined_gems(state: &mut GameState, gems: u64, now_ms: i64) {
    state.earn_gems(gems);
    state.mining.total_gems_mined += gems;
    state.mining.last_afk_time = now_ms;
}

/// Pays out gems accrued since the last claim and restarts the AFK timer.
pub fn claim_afk_gems(state: &mut GameState, now_ms: i64) -> u64 {
    let gems = afk_gems(state.mining.last_afk_time, state.mining.efficiency, now_ms);
    credit_mined_gems(state, gems, now_ms);
    gems
}

/// One minute of passive mining. Restarts the AFK timer so the same minute
/// is not paid twice by a later claim.
pub fn tick_passive_mining(state: &mut GameState, now_ms: i64) -> u64 {
    let gems = state.mining.efficiency;
    credit_mined_gems(state, gems, now_ms);
    gems
}

pub fn tick_playtime(state: &mut GameState) {
    state.statistics.total_play_time += 1;
}

pub fn toggle_cheat(state: &mut GameState, cheat: CheatKind) {
    state.cheats.toggle(cheat);
}
