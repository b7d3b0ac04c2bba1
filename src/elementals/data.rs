//! Static elemental species catalog.

use super::types::ElementalRarity;
use crate::elements::Element;

/// Static definition of an elemental species.
#[derive(Debug, Clone)]
pub struct ElementalSpecies {
    pub element: Element,
    pub rarity: ElementalRarity,
    pub name: &'static str,
    pub glyph: &'static str,
}

/// All species, grouped by element, ascending rarity within each group.
/// Order matters: `species()` indexes into this table.
pub const ALL_SPECIES: &[ElementalSpecies] = &[
    // Earth
    ElementalSpecies {
        element: Element::Earth,
        rarity: ElementalRarity::Common,
        name: "Pebble Sprite",
        glyph: "🐹",
    },
    ElementalSpecies {
        element: Element::Earth,
        rarity: ElementalRarity::Rare,
        name: "Mossback Tortoise",
        glyph: "🐢",
    },
    ElementalSpecies {
        element: Element::Earth,
        rarity: ElementalRarity::Epic,
        name: "Granite Golem",
        glyph: "🗿",
    },
    ElementalSpecies {
        element: Element::Earth,
        rarity: ElementalRarity::Immortal,
        name: "Worldroot Colossus",
        glyph: "🏔️",
    },
    // Water
    ElementalSpecies {
        element: Element::Water,
        rarity: ElementalRarity::Common,
        name: "Dew Wisp",
        glyph: "🫧",
    },
    ElementalSpecies {
        element: Element::Water,
        rarity: ElementalRarity::Rare,
        name: "Tide Dancer",
        glyph: "🐬",
    },
    ElementalSpecies {
        element: Element::Water,
        rarity: ElementalRarity::Epic,
        name: "Maelstrom Serpent",
        glyph: "🐉",
    },
    ElementalSpecies {
        element: Element::Water,
        rarity: ElementalRarity::Immortal,
        name: "Abyssal Leviathan",
        glyph: "🌊",
    },
    // Fire
    ElementalSpecies {
        element: Element::Fire,
        rarity: ElementalRarity::Common,
        name: "Cinder Imp",
        glyph: "🦎",
    },
    ElementalSpecies {
        element: Element::Fire,
        rarity: ElementalRarity::Rare,
        name: "Ember Fox",
        glyph: "🦊",
    },
    ElementalSpecies {
        element: Element::Fire,
        rarity: ElementalRarity::Epic,
        name: "Pyre Drake",
        glyph: "🐲",
    },
    ElementalSpecies {
        element: Element::Fire,
        rarity: ElementalRarity::Immortal,
        name: "Sunforged Phoenix",
        glyph: "🦅",
    },
];

/// Looks up the species for an (element, rarity) pair.
///
/// The table is exhaustive over both closed enums, so every pair resolves.
pub fn species(element: Element, rarity: ElementalRarity) -> &'static ElementalSpecies {
    &ALL_SPECIES[element.index() * ElementalRarity::ALL.len() + rarity.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_pair() {
        assert_eq!(
            ALL_SPECIES.len(),
            Element::ALL.len() * ElementalRarity::ALL.len()
        );
        for element in Element::ALL {
            for rarity in ElementalRarity::ALL {
                let def = species(element, rarity);
                assert_eq!(def.element, element, "table order mismatch");
                assert_eq!(def.rarity, rarity, "table order mismatch");
            }
        }
    }

    #[test]
    fn test_species_names_are_unique() {
        for (i, a) in ALL_SPECIES.iter().enumerate() {
            for b in &ALL_SPECIES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
