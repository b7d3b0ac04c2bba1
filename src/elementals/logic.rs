//! Elemental leveling, rarity upgrades, and cooldown handling.
//!
//! Mutating actions follow the `can_*` / `try_*` convention: callers check
//! affordability first, and the `try_*` functions decline as no-ops
//! (returning `None`) if a final guard fails. Nothing here panics.

use super::types::{CollectedElemental, ElementalRarity};
use crate::constants::{ELEMENTAL_USE_EXPERIENCE, LEVEL_UP_COST_BASE, PROTECTION_CEILING};

/// Effective protection fraction for a rarity at a given level.
///
/// Level adds half the distance to the next tier's base fraction, spread
/// linearly from level 1 (no bonus) to the rarity's cap. A max-level
/// elemental therefore lands exactly halfway to the next tier and never
/// matches the next rarity's base. Immortal scales toward a 1.0 ceiling,
/// topping out at 0.9.
pub fn protection_at_level(rarity: ElementalRarity, level: u32) -> f64 {
    let base = rarity.base_protection();
    let next = rarity
        .next()
        .map(|r| r.base_protection())
        .unwrap_or(PROTECTION_CEILING);
    let cap = rarity.level_cap();
    let level = level.clamp(1, cap);
    base + (next - base) * 0.5 * (level - 1) as f64 / (cap - 1) as f64
}

/// Effective protection fraction for a collected elemental.
pub fn effective_protection(elemental: &CollectedElemental) -> f64 {
    protection_at_level(elemental.rarity, elemental.level)
}

/// Mana cost to level up from `current_level`. Strictly increasing.
pub fn level_up_cost(current_level: u32) -> u64 {
    LEVEL_UP_COST_BASE * u64::from(current_level)
}

/// Whether the elemental can level up: owned, below its rarity's cap, and
/// the player can cover the cost.
pub fn can_level_up(elemental: &CollectedElemental, mana: u64) -> bool {
    elemental.owned
        && elemental.level < elemental.rarity.level_cap()
        && mana >= level_up_cost(elemental.level)
}

/// Attempt a level-up, spending mana. Returns (new_level, cost_paid) on
/// success. Experience is cosmetic progress toward the next level and is
/// reset by the level-up; it never gates the decision.
pub fn try_level_up(elemental: &mut CollectedElemental, mana: &mut u64) -> Option<(u32, u64)> {
    if !can_level_up(elemental, *mana) {
        return None;
    }
    let cost = level_up_cost(elemental.level);
    *mana -= cost;
    elemental.level += 1;
    elemental.experience = 0;
    Some((elemental.level, cost))
}

/// Whether the elemental can be upgraded to the next rarity: owned, at its
/// current cap, a next tier exists, and the player can cover the cost.
pub fn can_upgrade_rarity(elemental: &CollectedElemental, mana: u64) -> bool {
    let next = match elemental.rarity.next() {
        Some(r) => r,
        None => return false,
    };
    elemental.owned && elemental.level == elemental.rarity.level_cap() && mana >= next.upgrade_cost()
}

/// Attempt a rarity upgrade, spending mana. Returns (new_rarity, cost_paid)
/// on success. Level and experience reset; the cap becomes the new tier's.
pub fn try_upgrade_rarity(
    elemental: &mut CollectedElemental,
    mana: &mut u64,
) -> Option<(ElementalRarity, u64)> {
    if !can_upgrade_rarity(elemental, *mana) {
        return None;
    }
    let next = elemental.rarity.next()?;
    let cost = next.upgrade_cost();
    *mana -= cost;
    elemental.rarity = next;
    elemental.level = 1;
    elemental.experience = 0;
    Some((next, cost))
}

/// Stamps the post-battle cooldown and usage bookkeeping.
///
/// Not idempotent: re-selecting the elemental re-stamps the cooldown from
/// the new `now`.
pub fn mark_used(elemental: &mut CollectedElemental, now: i64) {
    elemental.cooldown_until = now + elemental.rarity.cooldown_secs();
    elemental.times_used += 1;
    elemental.experience += ELEMENTAL_USE_EXPERIENCE;
}

/// Whether the elemental is resting. Evaluated lazily against the
/// caller-supplied clock; no timers run anywhere.
pub fn is_on_cooldown(elemental: &CollectedElemental, now: i64) -> bool {
    now < elemental.cooldown_until
}

/// Seconds until the elemental may battle again (0 if ready).
pub fn cooldown_remaining(elemental: &CollectedElemental, now: i64) -> i64 {
    (elemental.cooldown_until - now).max(0)
}

/// Formats a remaining cooldown as `H:MM:SS`, dropping the hour field when
/// it is zero.
pub fn format_cooldown(secs: i64) -> String {
    let secs = secs.max(0);
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}
