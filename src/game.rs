//! Game façade: owns the canonical profile and drives battles end-to-end.
//!
//! The engine performs no I/O here; callers persist `self.profile` after
//! every mutation. Entropy and the clock are injected so every path is
//! reproducible under a seeded rng and a fixed `now`.

use crate::achievements::AchievementId;
use crate::battle::generation::{generate_opponent, roll_battle_element};
use crate::battle::logic::resolve_outcome;
use crate::battle::types::{BattleLog, Opponent};
use crate::elementals::logic::{
    effective_protection, is_on_cooldown, mark_used, try_level_up, try_upgrade_rarity,
};
use crate::elementals::ElementalRarity;
use crate::elements::Element;
use crate::locations::Location;
use crate::player::types::PlayerProfile;
use chrono::Utc;
use rand::Rng;

/// Why a battle (or selection) was declined before any state changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleDenied {
    /// Location or element was never selected. Callers should not reach
    /// `fight` in this state; treated as a precondition violation.
    MissingSelection,
    /// The location's wager exceeds the current mana balance.
    UnaffordableWager,
    /// The selected elemental id is not in the catalog.
    UnknownElemental,
    /// The selected elemental has not been acquired yet.
    ElementalNotOwned,
    /// The selected elemental is still resting.
    ElementalOnCooldown,
}

/// Everything the presentation layer needs from one battle.
#[derive(Debug, Clone)]
pub struct BattleReport {
    pub log: BattleLog,
    pub opponent: Opponent,
    pub newly_unlocked: Vec<AchievementId>,
}

/// The game engine. Owns the profile; all mutation flows through here.
#[derive(Debug, Clone, Default)]
pub struct Game {
    pub profile: PlayerProfile,
    /// Opponent synthesized for the selected location, awaiting the fight.
    /// Callers may delay between synthesis and reveal for pacing; the
    /// engine itself is synchronous.
    current_opponent: Option<Opponent>,
}

impl Game {
    /// A fresh first-run game: 500 mana, level 1, empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes from a loaded profile.
    pub fn from_profile(profile: PlayerProfile) -> Self {
        Self {
            profile,
            current_opponent: None,
        }
    }

    /// Locations the player can currently afford.
    pub fn affordable_locations(&self) -> Vec<Location> {
        Location::affordable(self.profile.stats.mana)
    }

    /// Selects the battle location. Declined if the wager is unaffordable.
    /// Any opponent met for a previous location is discarded.
    pub fn select_location(&mut self, location: Location) -> Result<(), BattleDenied> {
        if !location.is_affordable(self.profile.stats.mana) {
            return Err(BattleDenied::UnaffordableWager);
        }
        self.profile.stats.selection.location = Some(location);
        self.current_opponent = None;
        Ok(())
    }

    /// Synthesizes the opponent for the selected location and holds it for
    /// the upcoming fight. Safe to call again; each call meets a fresh
    /// opponent.
    pub fn meet_opponent(&mut self, rng: &mut impl Rng) -> Result<Opponent, BattleDenied> {
        let location = self
            .profile
            .stats
            .selection
            .location
            .ok_or(BattleDenied::MissingSelection)?;
        let opponent = generate_opponent(location, rng);
        self.current_opponent = Some(opponent.clone());
        Ok(opponent)
    }

    /// Selects the battle element.
    pub fn select_element(&mut self, element: Element) {
        self.profile.stats.selection.element = Some(element);
    }

    /// Selects an elemental companion, or `None` to fight without one.
    /// Declined if the elemental is unknown, unowned, or resting.
    pub fn select_elemental(
        &mut self,
        elemental_id: Option<&str>,
        now: i64,
    ) -> Result<(), BattleDenied> {
        if let Some(id) = elemental_id {
            let elemental = self
                .profile
                .collection
                .get(id)
                .ok_or(BattleDenied::UnknownElemental)?;
            if !elemental.owned {
                return Err(BattleDenied::ElementalNotOwned);
            }
            if is_on_cooldown(elemental, now) {
                return Err(BattleDenied::ElementalOnCooldown);
            }
        }
        self.profile.stats.selection.elemental_id = elemental_id.map(|s| s.to_string());
        Ok(())
    }

    /// Fights one battle from the current selection.
    ///
    /// Re-validates every precondition against `now` (cooldowns may have
    /// been stamped since selection), synthesizes the opponent from the
    /// injected rng, resolves the outcome, stamps the used elemental's
    /// cooldown, applies the result, and clears the selection.
    pub fn fight(&mut self, rng: &mut impl Rng, now: i64) -> Result<BattleReport, BattleDenied> {
        let selection = self.profile.stats.selection.clone();
        let location = selection.location.ok_or(BattleDenied::MissingSelection)?;
        let element = selection.element.ok_or(BattleDenied::MissingSelection)?;
        if !location.is_affordable(self.profile.stats.mana) {
            return Err(BattleDenied::UnaffordableWager);
        }

        let player_loadout = match selection.elemental_id.as_deref() {
            Some(id) => {
                let elemental = self
                    .profile
                    .collection
                    .get(id)
                    .ok_or(BattleDenied::UnknownElemental)?;
                if !elemental.owned {
                    return Err(BattleDenied::ElementalNotOwned);
                }
                if is_on_cooldown(elemental, now) {
                    return Err(BattleDenied::ElementalOnCooldown);
                }
                Some((id.to_string(), elemental.rarity, effective_protection(elemental)))
            }
            None => None,
        };

        // Fight the opponent met for this location, or meet one now.
        // The battle element is rolled only when the fight actually starts.
        let opponent = match self.current_opponent.take() {
            Some(o) => o,
            None => generate_opponent(location, rng),
        };
        let opponent_element = roll_battle_element(rng);
        let opponent_fraction = opponent
            .elemental
            .map(|r| r.base_protection())
            .unwrap_or(0.0);

        let (player_elemental, player_fraction) = match &player_loadout {
            Some((_, rarity, fraction)) => (Some(*rarity), *fraction),
            None => (None, 0.0),
        };

        let outcome = resolve_outcome(
            element,
            player_fraction,
            opponent_element,
            opponent_fraction,
            opponent.wager,
        );

        // Battle use stamps the cooldown even for free battles
        if let Some((id, _, _)) = &player_loadout {
            if let Some(elemental) = self.profile.collection.get_mut(id) {
                mark_used(elemental, now);
            }
        }

        let log = BattleLog {
            player_element: element,
            player_elemental,
            opponent_element,
            opponent_elemental: opponent.elemental,
            wager: opponent.wager,
            protection_saved: outcome.protection_saved,
            player_mana_change: outcome.player_mana_change,
            opponent_mana_change: outcome.opponent_mana_change,
            winner: outcome.winner,
        };

        let newly_unlocked =
            crate::player::progression::apply_battle_result(&mut self.profile.stats, &log, now);
        self.profile.stats.selection.clear();

        Ok(BattleReport {
            log,
            opponent,
            newly_unlocked,
        })
    }

    /// `fight` against the wall clock.
    pub fn fight_now(&mut self, rng: &mut impl Rng) -> Result<BattleReport, BattleDenied> {
        self.fight(rng, Utc::now().timestamp())
    }

    /// Marks an elemental slot as acquired. Returns the instance id, or
    /// `None` if it was already owned.
    pub fn acquire_elemental(
        &mut self,
        element: Element,
        rarity: ElementalRarity,
    ) -> Option<String> {
        self.profile.collection.acquire(element, rarity)
    }

    /// Levels up an elemental, spending profile mana.
    /// Returns (new_level, cost_paid), or `None` as a declined no-op.
    pub fn level_up_elemental(&mut self, elemental_id: &str) -> Option<(u32, u64)> {
        let profile = &mut self.profile;
        let elemental = profile.collection.get_mut(elemental_id)?;
        try_level_up(elemental, &mut profile.stats.mana)
    }

    /// Upgrades an elemental to the next rarity, spending profile mana.
    /// Returns (new_rarity, cost_paid), or `None` as a declined no-op.
    pub fn upgrade_elemental(&mut self, elemental_id: &str) -> Option<(ElementalRarity, u64)> {
        let profile = &mut self.profile;
        let elemental = profile.collection.get_mut(elemental_id)?;
        try_upgrade_rarity(elemental, &mut profile.stats.mana)
    }
}
