//! Persistent player state.

use crate::achievements::{AchievementId, UnlockedAchievement};
use crate::constants::STARTING_MANA;
use crate::elementals::ElementalCollection;
use crate::elements::Element;
use crate::locations::Location;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Transient pre-battle selection. Cleared after every battle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    pub location: Option<Location>,
    pub element: Option<Element>,
    pub elemental_id: Option<String>,
}

impl Selection {
    pub fn clear(&mut self) {
        *self = Selection::default();
    }
}

/// Aggregate player statistics, mutated after every battle and every
/// elemental purchase.
///
/// The struct-level `#[serde(default)]` merges saved fields over the
/// first-run defaults, so fields added later get sane values when old save
/// data loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStats {
    pub mana: u64,
    pub wins: u32,
    pub losses: u32,
    pub total_battles: u32,
    pub current_win_streak: u32,
    pub best_streak: u32,
    pub current_loss_streak: u32,
    pub max_loss_streak: u32,
    pub experience: u64,
    pub level: u32,
    /// Battles fought per element, indexed in `Element::ALL` order.
    /// Incremented on every battle regardless of outcome.
    pub element_uses: [u32; 3],
    pub total_mana_won: u64,
    pub total_mana_lost: u64,
    /// Append-only unlock records.
    pub achievements: HashMap<AchievementId, UnlockedAchievement>,
    pub selection: Selection,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            mana: STARTING_MANA,
            wins: 0,
            losses: 0,
            total_battles: 0,
            current_win_streak: 0,
            best_streak: 0,
            current_loss_streak: 0,
            max_loss_streak: 0,
            experience: 0,
            level: 1,
            element_uses: [0; 3],
            total_mana_won: 0,
            total_mana_lost: 0,
            achievements: HashMap::new(),
            selection: Selection::default(),
        }
    }
}

impl PlayerStats {
    /// The element with the highest usage tally, ties broken by
    /// `Element::ALL` order. `None` before the first battle.
    pub fn favorite_element(&self) -> Option<Element> {
        let mut favorite = None;
        let mut best = 0;
        for element in Element::ALL {
            let uses = self.element_uses[element.index()];
            if uses > best {
                best = uses;
                favorite = Some(element);
            }
        }
        favorite
    }
}

/// The single persisted record: stats plus the elemental collection.
///
/// The caller owns the canonical in-memory copy and synchronizes it to
/// storage after every mutation; the engine never reads storage itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerProfile {
    pub stats: PlayerStats,
    pub collection: ElementalCollection,
    /// Unix timestamp of the last successful save, stamped by persistence.
    pub last_saved: i64,
}
