//! # FitDash Core Library
//!
//! Business logic for the FitDash activity tracker: step, water, workout and
//! meal logging, a journal, and a small gamification layer (levels, XP,
//! badges). The CLI binary is a thin presentation layer over this crate.
//!
//! ## Architecture
//!
//! - **Storage**: a string key-value store (SQLite or in-memory) holding
//!   four JSON records, plus TOML configuration
//! - **Model**: the four records and their input validation
//! - **Progress**: pure XP, level-up and badge rules
//! - **Tracker**: the single owner of state; every mutation persists and
//!   returns notifications
//!
//! ## Key Components
//!
//! - [`Tracker`]: state container and mutation entry points
//! - [`ProgressRules`]: the gamification state machine
//! - [`SqliteStore`] / [`MemoryStore`]: key-value backends
//! - [`Config`]: goals, XP rates and UI settings

pub mod clock;
pub mod error;
pub mod events;
pub mod model;
pub mod progress;
pub mod storage;
pub mod tracker;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use events::Notification;
pub use model::{
    Badge, Badges, DailyStats, GamificationState, Journal, JournalEntry, Meal, Mood, Profile,
    ProfileUpdate, Workout,
};
pub use progress::{motivational_quote, random_quote, ProgressRules};
pub use storage::{Config, KeyValueStore, MemoryStore, Persistence, SqliteStore};
pub use tracker::{Dashboard, Outcome, Snapshot, Tracker, MAX_STEPS_PER_CALL};
