//! Battle elements and their dominance relation.

use serde::{Deserialize, Serialize};

/// One of the three battle elements.
///
/// Dominance is cyclic: earth beats water, water beats fire, fire beats
/// earth. Every element beats exactly one other and loses to exactly one
/// other; equal elements tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Earth,
    Water,
    Fire,
}

impl Element {
    /// All elements in display order.
    pub const ALL: [Element; 3] = [Element::Earth, Element::Water, Element::Fire];

    /// Display name for the element.
    pub fn name(&self) -> &'static str {
        match self {
            Element::Earth => "Earth",
            Element::Water => "Water",
            Element::Fire => "Fire",
        }
    }

    /// Glyph shown next to the element in battle screens.
    pub fn glyph(&self) -> &'static str {
        match self {
            Element::Earth => "🪨",
            Element::Water => "💧",
            Element::Fire => "🔥",
        }
    }

    /// The element this one beats.
    pub fn beats(&self) -> Element {
        match self {
            Element::Earth => Element::Water,
            Element::Water => Element::Fire,
            Element::Fire => Element::Earth,
        }
    }

    /// Whether this element wins against `other`. Equal elements tie.
    pub fn defeats(&self, other: Element) -> bool {
        self.beats() == other
    }

    /// Index into per-element tally arrays, in `ALL` order.
    pub fn index(&self) -> usize {
        match self {
            Element::Earth => 0,
            Element::Water => 1,
            Element::Fire => 2,
        }
    }
}
