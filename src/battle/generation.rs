//! Opponent synthesis.
//!
//! Opponents are flavor wrapped around a location's wager: identity and
//! level are cosmetic, while the rolled elemental loadout (50% chance) is
//! what actually feeds protection into the resolver. All entropy comes from
//! the injected rng so generation is reproducible under a seed.

use super::types::Opponent;
use crate::constants::{OPPONENT_ELEMENTAL_CHANCE, OPPONENT_LEVEL_MAX, OPPONENT_LEVEL_MIN};
use crate::elementals::ElementalRarity;
use crate::elements::Element;
use crate::locations::Location;
use rand::Rng;

/// Opponent name pool.
pub const OPPONENT_NAMES: [&str; 12] = [
    "Morwen the Grey",
    "Kael Stormcaller",
    "Brannoc",
    "Sister Ilsa",
    "Thornfoot",
    "Vexa of the Mire",
    "Old Haddon",
    "Petra Ashveil",
    "Grimble",
    "Ser Odric",
    "Nyssa Tidewalker",
    "The Quiet Warden",
];

/// Opponent avatar glyph pool.
pub const OPPONENT_GLYPHS: [&str; 8] = ["🧙", "🧝", "🧟", "👺", "🧛", "🦹", "👻", "🤖"];

/// Synthesizes an opponent for a battle at the given location.
///
/// Pure function of (location, entropy); never fails. The battle element is
/// rolled separately via `roll_battle_element` when the fight starts.
pub fn generate_opponent(location: Location, rng: &mut impl Rng) -> Opponent {
    let name = OPPONENT_NAMES[rng.gen_range(0..OPPONENT_NAMES.len())].to_string();
    let glyph = OPPONENT_GLYPHS[rng.gen_range(0..OPPONENT_GLYPHS.len())];
    let level = rng.gen_range(OPPONENT_LEVEL_MIN..=OPPONENT_LEVEL_MAX);
    // Display flavor only; independent of the actual elemental roll below
    let rarity_label = roll_rarity(rng);

    let elemental = if rng.gen::<f64>() < OPPONENT_ELEMENTAL_CHANCE {
        Some(roll_rarity(rng))
    } else {
        None
    };

    Opponent {
        name,
        glyph,
        level,
        rarity_label,
        wager: location.wager(),
        elemental,
    }
}

/// Rolls the element an opponent fights with, uniform over the three.
pub fn roll_battle_element(rng: &mut impl Rng) -> Element {
    Element::ALL[rng.gen_range(0..Element::ALL.len())]
}

fn roll_rarity(rng: &mut impl Rng) -> ElementalRarity {
    ElementalRarity::ALL[rng.gen_range(0..ElementalRarity::ALL.len())]
}
