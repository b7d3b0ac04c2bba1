//! Applies battle results to persistent player statistics.

use super::types::PlayerStats;
use crate::achievements::{check_achievements, AchievementId};
use crate::battle::types::{BattleLog, Winner};
use crate::constants::{LEVEL_EXPERIENCE_UNIT, WIN_EXPERIENCE};

/// Experience required to advance past the given level.
pub fn experience_for_next_level(level: u32) -> u64 {
    u64::from(level) * LEVEL_EXPERIENCE_UNIT
}

/// Applies one resolved battle to the player's stats.
///
/// Mana, win/loss counts, streaks, lifetime ledgers, experience, and the
/// per-element tally are all updated, then every achievement predicate is
/// swept against the new state. Returns the newly unlocked achievements.
///
/// The mana delta can never drive the balance negative: losses are bounded
/// by `wager - protection_saved ≤ wager`, and the wager was validated
/// affordable before the battle started.
pub fn apply_battle_result(
    stats: &mut PlayerStats,
    log: &BattleLog,
    now: i64,
) -> Vec<AchievementId> {
    apply_mana_change(stats, log.player_mana_change);

    match log.winner {
        Winner::Player => {
            stats.wins += 1;
            stats.current_win_streak += 1;
            stats.current_loss_streak = 0;
            stats.best_streak = stats.best_streak.max(stats.current_win_streak);
            stats.total_mana_won += log.player_mana_change.unsigned_abs();
            apply_win_experience(stats);
        }
        Winner::Opponent => {
            stats.losses += 1;
            stats.current_loss_streak += 1;
            stats.current_win_streak = 0;
            stats.max_loss_streak = stats.max_loss_streak.max(stats.current_loss_streak);
            stats.total_mana_lost += log.player_mana_change.unsigned_abs();
        }
        Winner::Draw => {}
    }
    stats.total_battles = stats.wins + stats.losses;

    // Every battle counts toward the element tally, win or lose
    stats.element_uses[log.player_element.index()] += 1;

    check_achievements(stats, now)
}

/// Grants the per-win experience and processes any level-ups.
///
/// Thresholds are consumed iteratively, so a large award can carry the
/// player through several levels at once.
fn apply_win_experience(stats: &mut PlayerStats) {
    stats.experience += WIN_EXPERIENCE;
    loop {
        let needed = experience_for_next_level(stats.level);
        if stats.experience < needed {
            break;
        }
        stats.experience -= needed;
        stats.level += 1;
    }
}

fn apply_mana_change(stats: &mut PlayerStats, delta: i64) {
    if delta >= 0 {
        stats.mana += delta as u64;
    } else {
        stats.mana = stats.mana.saturating_sub(delta.unsigned_abs());
    }
}
