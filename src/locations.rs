//! Battle locations and their fixed mana wagers.

use serde::{Deserialize, Serialize};

/// A battle location. Each location fixes the mana wager for battles
/// fought there; the free grounds wager nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    FreeGrounds,
    Swamp,
    Village,
    Castle,
}

impl Location {
    /// All locations in ascending wager order.
    pub const ALL: [Location; 4] = [
        Location::FreeGrounds,
        Location::Swamp,
        Location::Village,
        Location::Castle,
    ];

    /// Display name for the location.
    pub fn name(&self) -> &'static str {
        match self {
            Location::FreeGrounds => "Free Grounds",
            Location::Swamp => "Murky Swamp",
            Location::Village => "Old Village",
            Location::Castle => "Storm Castle",
        }
    }

    /// Mana at stake in a battle fought here.
    pub fn wager(&self) -> u32 {
        match self {
            Location::FreeGrounds => 0,
            Location::Swamp => 100,
            Location::Village => 300,
            Location::Castle => 500,
        }
    }

    /// Whether a player with `mana` may select this location.
    /// The free grounds are always eligible.
    pub fn is_affordable(&self, mana: u64) -> bool {
        u64::from(self.wager()) <= mana
    }

    /// Locations the player can currently afford, in wager order.
    pub fn affordable(mana: u64) -> Vec<Location> {
        Location::ALL
            .into_iter()
            .filter(|l| l.is_affordable(mana))
            .collect()
    }
}
