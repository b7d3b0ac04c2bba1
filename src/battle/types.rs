//! Battle records consumed by the presentation layer.

use crate::elementals::ElementalRarity;
use crate::elements::Element;
use serde::{Deserialize, Serialize};

/// Who won a resolved battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Player,
    Opponent,
    Draw,
}

/// The resolver's verdict: winner plus signed mana movement.
///
/// Deltas are a zero-sum transfer for non-draw, non-free battles;
/// `protection_saved` is the mana the loser's own elemental absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleOutcome {
    pub winner: Winner,
    pub player_mana_change: i64,
    pub opponent_mana_change: i64,
    pub protection_saved: u32,
}

/// Immutable record of one resolved battle. Created once per battle,
/// consumed by the result display, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleLog {
    pub player_element: Element,
    pub player_elemental: Option<ElementalRarity>,
    pub opponent_element: Element,
    pub opponent_elemental: Option<ElementalRarity>,
    pub wager: u32,
    pub protection_saved: u32,
    pub player_mana_change: i64,
    pub opponent_mana_change: i64,
    pub winner: Winner,
}

/// A synthesized opponent for one battle.
///
/// `rarity_label` is presentation flavor only; `elemental` (if any) is what
/// actually feeds protection into the resolver. Not persisted.
#[derive(Debug, Clone)]
pub struct Opponent {
    pub name: String,
    pub glyph: &'static str,
    pub level: u32,
    pub rarity_label: ElementalRarity,
    pub wager: u32,
    pub elemental: Option<ElementalRarity>,
}
