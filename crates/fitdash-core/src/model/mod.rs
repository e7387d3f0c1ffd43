//! The four persisted records.

mod gamification;
mod journal;
mod profile;
mod stats;

pub use gamification::{Badge, Badges, GamificationState};
pub use journal::{Journal, JournalEntry, Mood, NewJournalEntry};
pub use profile::{Profile, ProfileUpdate, MAX_AGE};
pub use stats::{new_meal, new_workout, progress_pct, DailyStats, Meal, Workout};
