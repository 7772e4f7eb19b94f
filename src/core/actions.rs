//! The action surface and the reducer that applies it.

use super::content::GameContent;
use super::economy::Cost;
use super::error::ActionResult;
use super::game_logic::{self, ChestReward, ItemRef, ResearchUpgrade};
use super::game_state::{CheatKind, GameMode, GameState, MultiplierKind};
use crate::achievements::evaluator::apply_achievements;
use crate::achievements::types::AchievementId;
use crate::character::derived_stats::recalculate_player_stats;
use crate::combat::logic::{attack, start_combat, AttackOutcome};
use crate::combat::types::Enemy;
use crate::expedition::logic::{
    answer_expedition_question, end_expedition, start_expedition, ExpeditionProgress,
};
use crate::expedition::types::ExpeditionModifierType;
use crate::items::types::Item;
use crate::promo::{redeem_promo_code, PromoRedemption};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Every way the game state can change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    StartCombat,
    Attack {
        hit: bool,
        category: Option<String>,
    },
    OpenChest {
        cost: u64,
    },
    EquipItem(ItemRef),
    UpgradeItem(ItemRef),
    SellItem(ItemRef),
    DiscardItem(ItemRef),
    RepairItem(ItemRef),
    MergeItems {
        first: ItemRef,
        second: ItemRef,
        name: String,
        cost: Cost,
    },
    UpgradeResearch,
    RedeemPromoCode {
        code: String,
    },
    SetGameMode(GameMode),
    PurchaseMultiplier {
        kind: MultiplierKind,
        cost: Cost,
    },
    StartExpedition {
        modifiers: Vec<ExpeditionModifierType>,
    },
    EndExpedition,
    AnswerExpeditionQuestion {
        correct: bool,
    },
    ClaimAfkGems,
    ToggleCheat(CheatKind),
    GenerateCheatItem,
    TickPlaytime,
    TickPassiveMining,
    CheckAchievements,
}

impl Action {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::StartCombat => "start_combat",
            Action::Attack { .. } => "attack",
            Action::OpenChest { .. } => "open_chest",
            Action::EquipItem(_) => "equip_item",
            Action::UpgradeItem(_) => "upgrade_item",
            Action::SellItem(_) => "sell_item",
            Action::DiscardItem(_) => "discard_item",
            Action::RepairItem(_) => "repair_item",
            Action::MergeItems { .. } => "merge_items",
            Action::UpgradeResearch => "upgrade_research",
            Action::RedeemPromoCode { .. } => "redeem_promo_code",
            Action::SetGameMode(_) => "set_game_mode",
            Action::PurchaseMultiplier { .. } => "purchase_multiplier",
            Action::StartExpedition { .. } => "start_expedition",
            Action::EndExpedition => "end_expedition",
            Action::AnswerExpeditionQuestion { .. } => "answer_expedition_question",
            Action::ClaimAfkGems => "claim_afk_gems",
            Action::ToggleCheat(_) => "toggle_cheat",
            Action::GenerateCheatItem => "generate_cheat_item",
            Action::TickPlaytime => "tick_playtime",
            Action::TickPassiveMining => "tick_passive_mining",
            Action::CheckAchievements => "check_achievements",
        }
    }
}

/// What an applied action produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Applied,
    CombatStarted(Enemy),
    Attack(AttackOutcome),
    ChestOpened(ChestReward),
    ItemUpgraded { level: u32 },
    ItemSold { coins: u64 },
    ItemDiscarded(Item),
    ItemRepaired { gems: u64 },
    ItemsMerged(Item),
    ResearchUpgraded(ResearchUpgrade),
    PromoRedeemed(PromoRedemption),
    MultiplierPurchased { value: f64 },
    Expedition(ExpeditionProgress),
    GemsMined { gems: u64 },
}

/// Outcome plus the achievements the post-action hook unlocked.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionReport {
    pub outcome: ActionOutcome,
    pub unlocked: Vec<AchievementId>,
}

/// Collaborators an action may need: randomness, the clock, and content tables.
pub struct ActionContext<'a, R: Rng> {
    pub rng: &'a mut R,
    pub now_ms: i64,
    pub content: &'a GameContent,
}

/// Applies one action atomically. On success, derived stats are recomputed
/// and the achievement hook runs; on refusal nothing changes.
pub fn apply_action<R: Rng>(
    state: &mut GameState,
    action: Action,
    ctx: &mut ActionContext<'_, R>,
) -> ActionResult<ActionReport> {
    let name = action.name();
    let outcome = match dispatch(state, action, ctx) {
        Ok(outcome) => outcome,
        Err(err) => {
            debug!(action = name, error = %err, "action refused");
            return Err(err);
        }
    };

    recalculate_player_stats(state);
    let unlocked = apply_achievements(state, &ctx.content.achievements, ctx.now_ms);
    debug!(action = name, unlocked = unlocked.len(), "action applied");
    Ok(ActionReport { outcome, unlocked })
}

fn dispatch<R: Rng>(
    state: &mut GameState,
    action: Action,
    ctx: &mut ActionContext<'_, R>,
) -> ActionResult<ActionOutcome> {
    let outcome = match action {
        Action::StartCombat => ActionOutcome::CombatStarted(start_combat(state)?),
        Action::Attack { hit, category } => ActionOutcome::Attack(attack(
            state,
            hit,
            category.as_deref(),
            ctx.now_ms,
            &mut *ctx.rng,
        )?),
        Action::OpenChest { cost } => {
            ActionOutcome::ChestOpened(game_logic::open_chest(state, cost, &mut *ctx.rng)?)
        }
        Action::EquipItem(item) => {
            game_logic::equip_item(state, &item)?;
            ActionOutcome::Applied
        }
        Action::UpgradeItem(item) => ActionOutcome::ItemUpgraded {
            level: game_logic::upgrade_item(state, &item)?,
        },
        Action::SellItem(item) => ActionOutcome::ItemSold {
            coins: game_logic::sell_item(state, &item)?,
        },
        Action::DiscardItem(item) => {
            ActionOutcome::ItemDiscarded(game_logic::discard_item(state, &item)?)
        }
        Action::RepairItem(item) => ActionOutcome::ItemRepaired {
            gems: game_logic::repair_item(state, &item)?,
        },
        Action::MergeItems {
            first,
            second,
            name,
            cost,
        } => ActionOutcome::ItemsMerged(game_logic::merge_inventory_items(
            state, &first, &second, &name, cost,
        )?),
        Action::UpgradeResearch => ActionOutcome::ResearchUpgraded(game_logic::upgrade_research(
            state,
            &ctx.content.power_skills,
        )?),
        Action::RedeemPromoCode { code } => ActionOutcome::PromoRedeemed(redeem_promo_code(
            state,
            &ctx.content.promo_codes,
            &code,
        )?),
        Action::SetGameMode(mode) => {
            game_logic::set_game_mode(state, mode);
            ActionOutcome::Applied
        }
        Action::PurchaseMultiplier { kind, cost } => ActionOutcome::MultiplierPurchased {
            value: game_logic::purchase_multiplier(state, kind, cost)?,
        },
        Action::StartExpedition { modifiers } => {
            ActionOutcome::Expedition(start_expedition(state, &modifiers, &mut *ctx.rng))
        }
        Action::EndExpedition => ActionOutcome::Expedition(end_expedition(state)),
        Action::AnswerExpeditionQuestion { correct } => {
            ActionOutcome::Expedition(answer_expedition_question(state, correct)?)
        }
        Action::ClaimAfkGems => ActionOutcome::GemsMined {
            gems: game_logic::claim_afk_gems(state, ctx.now_ms),
        },
        Action::ToggleCheat(cheat) => {
            game_logic::toggle_cheat(state, cheat);
            ActionOutcome::Applied
        }
        Action::GenerateCheatItem => {
            debug!("cheat item generation is not available");
            ActionOutcome::Applied
        }
        Action::TickPlaytime => {
            game_logic::tick_playtime(state);
            ActionOutcome::Applied
        }
        Action::TickPassiveMining => ActionOutcome::GemsMined {
            gems: game_logic::tick_passive_mining(state, ctx.now_ms),
        },
        Action::CheckAchievements => ActionOutcome::Applied,
    };
    Ok(outcome)
}
