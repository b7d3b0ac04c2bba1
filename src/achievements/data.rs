//! Static achievement definitions.

use super::types::{AchievementDef, AchievementId};

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: AchievementId::FirstVictory,
        name: "First Victory",
        description: "Win your first battle",
        icon: "🏆",
        secret: false,
        check: |s| s.wins >= 1,
    },
    AchievementDef {
        id: AchievementId::Battler,
        name: "Battler",
        description: "Fight 10 battles",
        icon: "⚔️",
        secret: false,
        check: |s| s.total_battles >= 10,
    },
    AchievementDef {
        id: AchievementId::Veteran,
        name: "Veteran",
        description: "Fight 100 battles",
        icon: "🛡️",
        secret: false,
        check: |s| s.total_battles >= 100,
    },
    AchievementDef {
        id: AchievementId::Champion,
        name: "Champion",
        description: "Win 25 battles",
        icon: "🥇",
        secret: false,
        check: |s| s.wins >= 25,
    },
    AchievementDef {
        id: AchievementId::Conqueror,
        name: "Conqueror",
        description: "Win 100 battles",
        icon: "👑",
        secret: false,
        check: |s| s.wins >= 100,
    },
    AchievementDef {
        id: AchievementId::WinStreakI,
        name: "On a Roll",
        description: "Win 3 battles in a row",
        icon: "🔥",
        secret: false,
        check: |s| s.best_streak >= 3,
    },
    AchievementDef {
        id: AchievementId::WinStreakII,
        name: "Hot Hand",
        description: "Win 5 battles in a row",
        icon: "🔥",
        secret: false,
        check: |s| s.best_streak >= 5,
    },
    AchievementDef {
        id: AchievementId::WinStreakIII,
        name: "Untouchable",
        description: "Win 10 battles in a row",
        icon: "⚡",
        secret: false,
        check: |s| s.best_streak >= 10,
    },
    AchievementDef {
        id: AchievementId::ManaHoarder,
        name: "Mana Hoarder",
        description: "Hold 1,000 mana",
        icon: "💎",
        secret: false,
        check: |s| s.mana >= 1_000,
    },
    AchievementDef {
        id: AchievementId::ManaBaron,
        name: "Mana Baron",
        description: "Hold 5,000 mana",
        icon: "💎",
        secret: false,
        check: |s| s.mana >= 5_000,
    },
    AchievementDef {
        id: AchievementId::ManaDragon,
        name: "Mana Dragon",
        description: "Hold 10,000 mana",
        icon: "🐉",
        secret: false,
        check: |s| s.mana >= 10_000,
    },
    AchievementDef {
        id: AchievementId::BigEarner,
        name: "Big Earner",
        description: "Win 2,500 mana lifetime",
        icon: "💰",
        secret: false,
        check: |s| s.total_mana_won >= 2_500,
    },
    AchievementDef {
        id: AchievementId::HighRoller,
        name: "High Roller",
        description: "Win 10,000 mana lifetime",
        icon: "🎲",
        secret: false,
        check: |s| s.total_mana_won >= 10_000,
    },
    AchievementDef {
        id: AchievementId::Level5,
        name: "Apprentice",
        description: "Reach level 5",
        icon: "📈",
        secret: false,
        check: |s| s.level >= 5,
    },
    AchievementDef {
        id: AchievementId::Level10,
        name: "Adept",
        description: "Reach level 10",
        icon: "📈",
        secret: false,
        check: |s| s.level >= 10,
    },
    AchievementDef {
        id: AchievementId::Level20,
        name: "Archmage",
        description: "Reach level 20",
        icon: "🌟",
        secret: false,
        check: |s| s.level >= 20,
    },
    AchievementDef {
        id: AchievementId::Elementalist,
        name: "Elementalist",
        description: "Battle with all three elements",
        icon: "🌀",
        secret: false,
        check: |s| s.element_uses.iter().all(|&uses| uses >= 1),
    },
    AchievementDef {
        id: AchievementId::HardLuck,
        name: "Hard Luck",
        description: "Lose 5 battles in a row",
        icon: "🌧️",
        secret: true,
        check: |s| s.max_loss_streak >= 5,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_achievement_ids_are_unique() {
        for (i, a) in ALL_ACHIEVEMENTS.iter().enumerate() {
            for b in &ALL_ACHIEVEMENTS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_no_achievement_unlocks_on_a_fresh_profile() {
        let stats = crate::player::types::PlayerStats::default();
        for def in ALL_ACHIEVEMENTS {
            assert!(
                !(def.check)(&stats),
                "{} must not unlock at first run",
                def.name
            );
        }
    }
}
