//! Elemental rarity tiers and collection state.

use crate::elements::Element;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Rarity tier of an elemental companion.
///
/// Ordered from common to immortal. Rarity fixes the base protection
/// fraction, the level cap, the post-use cooldown, and the upgrade cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ElementalRarity {
    Common,
    Rare,
    Epic,
    Immortal,
}

impl ElementalRarity {
    /// All rarities in ascending tier order.
    pub const ALL: [ElementalRarity; 4] = [
        ElementalRarity::Common,
        ElementalRarity::Rare,
        ElementalRarity::Epic,
        ElementalRarity::Immortal,
    ];

    /// Display name for the rarity.
    pub fn name(&self) -> &'static str {
        match self {
            ElementalRarity::Common => "Common",
            ElementalRarity::Rare => "Rare",
            ElementalRarity::Epic => "Epic",
            ElementalRarity::Immortal => "Immortal",
        }
    }

    /// Fraction of a wagered loss shielded by an elemental of this rarity
    /// at level 1.
    pub fn base_protection(&self) -> f64 {
        match self {
            ElementalRarity::Common => 0.1,
            ElementalRarity::Rare => 0.2,
            ElementalRarity::Epic => 0.4,
            ElementalRarity::Immortal => 0.8,
        }
    }

    /// Level beyond which further leveling requires a rarity upgrade.
    pub fn level_cap(&self) -> u32 {
        match self {
            ElementalRarity::Common => 10,
            ElementalRarity::Rare => 20,
            ElementalRarity::Epic => 30,
            ElementalRarity::Immortal => 50,
        }
    }

    /// The next tier up, or `None` for immortal.
    pub fn next(&self) -> Option<ElementalRarity> {
        match self {
            ElementalRarity::Common => Some(ElementalRarity::Rare),
            ElementalRarity::Rare => Some(ElementalRarity::Epic),
            ElementalRarity::Epic => Some(ElementalRarity::Immortal),
            ElementalRarity::Immortal => None,
        }
    }

    /// Mana cost to upgrade into this tier from the one below.
    pub fn upgrade_cost(&self) -> u64 {
        match self {
            ElementalRarity::Common => 0,
            ElementalRarity::Rare => 500,
            ElementalRarity::Epic => 2000,
            ElementalRarity::Immortal => 10000,
        }
    }

    /// Post-battle cooldown in seconds. Higher tiers rest longer.
    pub fn cooldown_secs(&self) -> i64 {
        match self {
            ElementalRarity::Common => 5 * 60,
            ElementalRarity::Rare => 15 * 60,
            ElementalRarity::Epic => 30 * 60,
            ElementalRarity::Immortal => 60 * 60,
        }
    }

    /// Index into per-rarity tables, in `ALL` order.
    pub fn index(&self) -> usize {
        match self {
            ElementalRarity::Common => 0,
            ElementalRarity::Rare => 1,
            ElementalRarity::Epic => 2,
            ElementalRarity::Immortal => 3,
        }
    }
}

/// A persistent elemental companion instance.
///
/// Every (element, rarity) pair has exactly one slot in the player's
/// catalog; unowned slots are viewable but unusable. Instances are never
/// deleted.
///
/// IMPORTANT: when adding new fields, use `#[serde(default)]` so existing
/// save data keeps loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectedElemental {
    pub id: String,
    pub element: Element,
    pub rarity: ElementalRarity,
    pub owned: bool,
    pub level: u32,
    #[serde(default)]
    pub experience: u64,
    #[serde(default)]
    pub times_used: u32,
    /// Unix timestamp after which this elemental may battle again.
    /// Stamped only when the elemental is used in a battle.
    #[serde(default)]
    pub cooldown_until: i64,
}

impl CollectedElemental {
    /// Creates an unowned catalog slot for the given species.
    pub fn new(element: Element, rarity: ElementalRarity) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            element,
            rarity,
            owned: false,
            level: 1,
            experience: 0,
            times_used: 0,
            cooldown_until: 0,
        }
    }

    /// Species display name from the static catalog.
    pub fn species_name(&self) -> &'static str {
        super::data::species(self.element, self.rarity).name
    }

    /// Species glyph from the static catalog.
    pub fn species_glyph(&self) -> &'static str {
        super::data::species(self.element, self.rarity).glyph
    }
}

/// The player's full elemental catalog, keyed by instance id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementalCollection {
    pub elementals: HashMap<String, CollectedElemental>,
}

impl Default for ElementalCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementalCollection {
    /// Creates a collection with one unowned slot per (element, rarity)
    /// pair.
    pub fn new() -> Self {
        let mut elementals = HashMap::new();
        for element in Element::ALL {
            for rarity in ElementalRarity::ALL {
                let slot = CollectedElemental::new(element, rarity);
                elementals.insert(slot.id.clone(), slot);
            }
        }
        Self { elementals }
    }

    pub fn get(&self, id: &str) -> Option<&CollectedElemental> {
        self.elementals.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut CollectedElemental> {
        self.elementals.get_mut(id)
    }

    /// The catalog slot for a given species, owned or not.
    pub fn slot(&self, element: Element, rarity: ElementalRarity) -> Option<&CollectedElemental> {
        self.elementals
            .values()
            .find(|e| e.element == element && e.rarity == rarity)
    }

    /// Marks the slot for (element, rarity) as owned.
    ///
    /// Acquisition itself (shop, reward, gift) is the caller's concern.
    /// Returns the instance id on first acquisition, `None` if already
    /// owned.
    pub fn acquire(&mut self, element: Element, rarity: ElementalRarity) -> Option<String> {
        let slot = self
            .elementals
            .values_mut()
            .find(|e| e.element == element && e.rarity == rarity)?;
        if slot.owned {
            return None;
        }
        slot.owned = true;
        Some(slot.id.clone())
    }

    /// Owned elementals, in no particular order.
    pub fn owned(&self) -> impl Iterator<Item = &CollectedElemental> {
        self.elementals.values().filter(|e| e.owned)
    }

    pub fn owned_count(&self) -> usize {
        self.owned().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_order_and_protection() {
        let mut last = 0.0;
        for rarity in ElementalRarity::ALL {
            assert!(rarity.base_protection() > last);
            last = rarity.base_protection();
        }
    }

    #[test]
    fn test_immortal_has_no_next_tier() {
        assert_eq!(ElementalRarity::Common.next(), Some(ElementalRarity::Rare));
        assert_eq!(ElementalRarity::Rare.next(), Some(ElementalRarity::Epic));
        assert_eq!(ElementalRarity::Epic.next(), Some(ElementalRarity::Immortal));
        assert_eq!(ElementalRarity::Immortal.next(), None);
    }

    #[test]
    fn test_cooldown_scales_with_rarity() {
        let mut last = 0;
        for rarity in ElementalRarity::ALL {
            assert!(rarity.cooldown_secs() > last);
            last = rarity.cooldown_secs();
        }
    }

    #[test]
    fn test_new_collection_has_all_slots_unowned() {
        let collection = ElementalCollection::new();
        assert_eq!(collection.elementals.len(), 12);
        assert_eq!(collection.owned_count(), 0);
        for element in Element::ALL {
            for rarity in ElementalRarity::ALL {
                let slot = collection.slot(element, rarity).expect("slot must exist");
                assert_eq!(slot.level, 1);
                assert!(!slot.owned);
            }
        }
    }

    #[test]
    fn test_acquire_marks_owned_once() {
        let mut collection = ElementalCollection::new();
        let id = collection
            .acquire(Element::Fire, ElementalRarity::Common)
            .expect("first acquisition succeeds");
        assert!(collection.get(&id).unwrap().owned);
        assert_eq!(collection.owned_count(), 1);

        // Second acquisition of the same species is declined
        assert!(collection
            .acquire(Element::Fire, ElementalRarity::Common)
            .is_none());
        assert_eq!(collection.owned_count(), 1);
    }
}
