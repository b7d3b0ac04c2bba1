//! Checksummed binary profile backups.
//!
//! The everyday save path is the JSON profile (`persistence`); this module
//! produces compact snapshots suitable for manual export/import between
//! machines, with corruption detected on load.
//!
//! Snapshot format:
//! - Version magic (8 bytes)
//! - Payload length (4 bytes)
//! - Bincode-serialized profile (variable)
//! - SHA-256 checksum over everything above (32 bytes)

use crate::constants::BACKUP_VERSION_MAGIC;
use crate::player::types::PlayerProfile;
use directories::ProjectDirs;
use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Writes and verifies profile backup snapshots.
pub struct SaveManager {
    backup_path: PathBuf,
}

impl SaveManager {
    /// Creates a SaveManager targeting the platform data directory.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "elemental-arena").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine data directory")
        })?;
        let data_dir = project_dirs.data_dir();
        fs::create_dir_all(data_dir)?;
        Ok(Self {
            backup_path: data_dir.join("backup.dat"),
        })
    }

    /// Creates a SaveManager targeting an explicit file path.
    pub fn with_path(backup_path: PathBuf) -> Self {
        Self { backup_path }
    }

    /// Serializes the profile into a checksummed snapshot on disk.
    pub fn export(&self, profile: &PlayerProfile) -> io::Result<()> {
        let payload = bincode::serialize(profile)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let payload_len = payload.len() as u32;

        let mut snapshot =
            Vec::with_capacity(8 + 4 + payload.len() + Sha256::output_size());
        snapshot.extend_from_slice(&BACKUP_VERSION_MAGIC.to_le_bytes());
        snapshot.extend_from_slice(&payload_len.to_le_bytes());
        snapshot.extend_from_slice(&payload);

        let checksum = Sha256::digest(&snapshot);
        snapshot.extend_from_slice(&checksum);

        fs::write(&self.backup_path, snapshot)
    }

    /// Loads and verifies a snapshot.
    ///
    /// Fails with `InvalidData` on a wrong magic, a truncated file, or a
    /// checksum mismatch.
    pub fn import(&self) -> io::Result<PlayerProfile> {
        let snapshot = fs::read(&self.backup_path)?;
        if snapshot.len() < 8 + 4 + 32 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Backup file is truncated",
            ));
        }

        let mut magic_bytes = [0u8; 8];
        magic_bytes.copy_from_slice(&snapshot[0..8]);
        let magic = u64::from_le_bytes(magic_bytes);
        if magic != BACKUP_VERSION_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Invalid backup version: expected 0x{:016X}, got 0x{:016X}",
                    BACKUP_VERSION_MAGIC, magic
                ),
            ));
        }

        let mut length_bytes = [0u8; 4];
        length_bytes.copy_from_slice(&snapshot[8..12]);
        let payload_len = u32::from_le_bytes(length_bytes) as usize;
        let checksum_start = 8 + 4 + payload_len;
        if snapshot.len() != checksum_start + 32 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Backup length does not match its header",
            ));
        }

        let computed = Sha256::digest(&snapshot[..checksum_start]);
        if snapshot[checksum_start..] != computed[..] {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Checksum verification failed",
            ));
        }

        bincode::deserialize(&snapshot[12..checksum_start])
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Whether a backup snapshot exists.
    pub fn backup_exists(&self) -> bool {
        self.backup_path.exists()
    }
}
