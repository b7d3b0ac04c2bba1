//! JSON profile persistence under `~/.elemental-arena/`.
//!
//! Loading merges saved fields over first-run defaults (via the profile's
//! `#[serde(default)]`), so save data written by older versions keeps
//! working when new fields appear. The engine never calls these during a
//! battle; the caller saves after each mutation.

use crate::constants::PROFILE_FILENAME;
use crate::player::types::PlayerProfile;
use chrono::Utc;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Get the `~/.elemental-arena/` directory path, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".elemental-arena");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a save file in `~/.elemental-arena/`.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(data_dir()?.join(filename))
}

/// Load a JSON file, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    let path = match save_path(filename) {
        Ok(p) => p,
        Err(_) => return T::default(),
    };
    match fs::read_to_string(&path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => T::default(),
    }
}

/// Save a value as pretty-printed JSON.
pub fn save_json<T: serde::Serialize>(filename: &str, data: &T) -> io::Result<()> {
    let path = save_path(filename)?;
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}

/// Load the player profile, or a first-run default if none exists.
pub fn load_profile() -> PlayerProfile {
    load_json_or_default(PROFILE_FILENAME)
}

/// Save the player profile, stamping `last_saved`.
pub fn save_profile(profile: &mut PlayerProfile) -> io::Result<()> {
    profile.last_saved = Utc::now().timestamp();
    save_json(PROFILE_FILENAME, profile)
}
