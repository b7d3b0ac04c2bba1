// Player economy constants
pub const STARTING_MANA: u64 = 500;

// Experience and progression constants
pub const WIN_EXPERIENCE: u64 = 50;
pub const LEVEL_EXPERIENCE_UNIT: u64 = 100;

// Elemental economy constants
pub const LEVEL_UP_COST_BASE: u64 = 50;
pub const ELEMENTAL_USE_EXPERIENCE: u64 = 10;

// Stands in for the base fraction of the (nonexistent) tier above immortal
// when scaling protection by level.
pub const PROTECTION_CEILING: f64 = 1.0;

// Opponent generation constants
pub const OPPONENT_LEVEL_MIN: u32 = 1;
pub const OPPONENT_LEVEL_MAX: u32 = 10;
pub const OPPONENT_ELEMENTAL_CHANCE: f64 = 0.5;

// Save system constants
pub const BACKUP_VERSION_MAGIC: u64 = 0x454C454D41524E41; // "ELEMARNA" in hex
pub const PROFILE_FILENAME: &str = "profile.json";
