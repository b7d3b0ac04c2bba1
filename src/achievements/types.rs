//! Achievement system types and unlock bookkeeping.

use crate::player::types::PlayerStats;
use serde::{Deserialize, Serialize};

/// Unique identifier for each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementId {
    // First steps
    FirstVictory,
    // Battle count milestones
    Battler,
    Veteran,
    // Win milestones
    Champion,
    Conqueror,
    // Win streak milestones
    WinStreakI,
    WinStreakII,
    WinStreakIII,
    // Mana balance milestones
    ManaHoarder,
    ManaBaron,
    ManaDragon,
    // Lifetime winnings milestones
    BigEarner,
    HighRoller,
    // Player level milestones
    Level5,
    Level10,
    Level20,
    // Element usage
    Elementalist,
    // Secret
    HardLuck,
}

/// Static definition of an achievement.
///
/// `check` is the unlock predicate, evaluated against the player state
/// after every battle. Predicates only ever flip from false to true for a
/// progressing player; once unlocked, an achievement is never re-evaluated.
#[derive(Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub secret: bool,
    pub check: fn(&PlayerStats) -> bool,
}

/// Record of an unlocked achievement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnlockedAchievement {
    pub unlocked_at: i64,
}

/// Evaluates every achievement predicate against the current player state
/// and unlocks any that newly hold.
///
/// Returns the newly unlocked ids for notification purposes. The unlocked
/// map is append-only; nothing is ever removed or re-evaluated to false.
pub fn check_achievements(stats: &mut PlayerStats, now: i64) -> Vec<AchievementId> {
    let mut newly_unlocked = Vec::new();
    for def in super::data::ALL_ACHIEVEMENTS {
        if stats.achievements.contains_key(&def.id) {
            continue;
        }
        if (def.check)(stats) {
            stats
                .achievements
                .insert(def.id, UnlockedAchievement { unlocked_at: now });
            newly_unlocked.push(def.id);
        }
    }
    newly_unlocked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_victory_unlocks_once() {
        let mut stats = PlayerStats::default();
        stats.wins = 1;
        stats.total_battles = 1;

        let unlocked = check_achievements(&mut stats, 1000);
        assert!(unlocked.contains(&AchievementId::FirstVictory));
        assert_eq!(stats.achievements[&AchievementId::FirstVictory].unlocked_at, 1000);

        // Second sweep finds nothing new
        let again = check_achievements(&mut stats, 2000);
        assert!(again.is_empty());
        assert_eq!(stats.achievements[&AchievementId::FirstVictory].unlocked_at, 1000);
    }

    #[test]
    fn test_unlocked_set_never_shrinks() {
        let mut stats = PlayerStats::default();
        stats.wins = 1;
        check_achievements(&mut stats, 0);
        let count_before = stats.achievements.len();

        // Even if the underlying condition stops holding, the unlock stays
        stats.wins = 0;
        check_achievements(&mut stats, 0);
        assert!(stats.achievements.len() >= count_before);
        assert!(stats.achievements.contains_key(&AchievementId::FirstVictory));
    }

    #[test]
    fn test_multiple_unlocks_in_one_sweep() {
        let mut stats = PlayerStats::default();
        stats.wins = 25;
        stats.total_battles = 25;
        stats.best_streak = 25;

        let unlocked = check_achievements(&mut stats, 0);
        assert!(unlocked.contains(&AchievementId::FirstVictory));
        assert!(unlocked.contains(&AchievementId::Champion));
        assert!(unlocked.contains(&AchievementId::Battler));
        assert!(unlocked.contains(&AchievementId::WinStreakIII));
    }
}
