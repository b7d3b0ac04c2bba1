//! Elemental Arena - Casual Elemental Wagering Battle Engine
//!
//! A deterministic rules and state-transition engine: battle outcome
//! resolution with loss protection, elemental collection economics with
//! post-use cooldowns, and player progression with achievements. No network
//! or rendering; a presentation layer supplies selections and renders the
//! returned records.

pub mod achievements;
pub mod battle;
pub mod constants;
pub mod elementals;
pub mod elements;
pub mod game;
pub mod locations;
pub mod persistence;
pub mod player;
pub mod save_manager;

pub use achievements::AchievementId;
pub use battle::{BattleLog, Opponent, Winner};
pub use elementals::{CollectedElemental, ElementalCollection, ElementalRarity};
pub use elements::Element;
pub use game::{BattleDenied, BattleReport, Game};
pub use locations::Location;
pub use player::{PlayerProfile, PlayerStats};
pub use save_manager::SaveManager;
