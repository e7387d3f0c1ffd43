//! Shared plumbing for commands: opening the tracker and printing results.

use fitdash_core::error::Result;
use fitdash_core::{Config, KeyValueStore, MemoryStore, Notification, SqliteStore, Tracker};
use serde::Serialize;

pub type CliResult = Result<()>;

pub type CliTracker = Tracker<Box<dyn KeyValueStore>>;

/// Open the on-disk store, or keep going in memory if it can't be opened.
pub fn open_tracker(config: &Config) -> CliTracker {
    let store: Box<dyn KeyValueStore> = match SqliteStore::open() {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(error = %e, "could not open store");
            eprintln!("warning: storage unavailable, changes will not be saved ({e})");
            Box::new(MemoryStore::new())
        }
    };
    Tracker::open(store, config.rules())
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Surface notifications on stderr so stdout stays machine-readable.
pub fn announce(notifications: &[Notification]) {
    for n in notifications {
        match n {
            Notification::StorageDegraded { .. } => eprintln!("warning: {}", n.headline()),
            _ => eprintln!("{}", n.headline()),
        }
    }
}
