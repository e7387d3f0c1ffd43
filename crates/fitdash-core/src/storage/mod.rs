mod config;
pub mod database;
pub mod persistence;
pub mod store;

pub use config::{Config, GoalsConfig, UiConfig, XpConfig};
pub use database::SqliteStore;
pub use persistence::{LoadOutcome, Persistence};
pub use store::{KeyValueStore, MemoryStore};

use std::path::PathBuf;

use crate::error::StorageError;

/// Storage key for the user profile record.
pub const PROFILE_KEY: &str = "userData";
/// Storage key for the accumulated activity counters.
pub const DAILY_STATS_KEY: &str = "dailyStats";
/// Storage key for journal entries (newest first).
pub const JOURNAL_KEY: &str = "journalEntries";
/// Storage key for level, XP and badges.
pub const GAMIFICATION_KEY: &str = "gamificationData";

/// Returns the FitDash data directory, creating it if needed.
///
/// `FITDASH_DATA_DIR` wins when set. Otherwise `~/.config/fitdash[-dev]/`
/// based on `FITDASH_ENV`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("FITDASH_DATA_DIR") {
        Some(explicit) => PathBuf::from(explicit),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("FITDASH_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("fitdash-dev")
            } else {
                base_dir.join("fitdash")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| StorageError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
