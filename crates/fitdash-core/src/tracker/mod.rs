//! The state container.
//!
//! A [`Tracker`] owns the four records, the store they mirror to, the clock
//! and the progress rules. It is built once at startup and handed by
//! reference to whatever needs to read or mutate state.
//!
//! Every mutation:
//! 1. validates its input, returning an error without touching state,
//! 2. applies the change and runs the progress rules,
//! 3. rewrites all four records to the store,
//! 4. returns the updated record and any notifications.
//!
//! If the store rejects a write the tracker keeps running in memory and
//! reports [`Notification::StorageDegraded`] once.

mod snapshot;

pub use snapshot::{Dashboard, Snapshot};

use serde::de::DeserializeOwned;

use crate::clock::{Clock, SystemClock};
use crate::error::{StorageError, ValidationError};
use crate::events::Notification;
use crate::model::{
    new_meal, new_workout, DailyStats, GamificationState, Journal, JournalEntry, Mood,
    NewJournalEntry, Profile, ProfileUpdate,
};
use crate::progress::ProgressRules;
use crate::storage::persistence::encode;
use crate::storage::{
    KeyValueStore, LoadOutcome, Persistence, DAILY_STATS_KEY, GAMIFICATION_KEY, JOURNAL_KEY,
    PROFILE_KEY,
};

/// Largest batch [`Tracker::add_steps`] accepts in one call.
pub const MAX_STEPS_PER_CALL: u64 = 100_000;

/// Result of a mutation: the record after the change plus anything the
/// user should be told about.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    pub record: T,
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Clone, PartialEq)]
enum StorageMode {
    Persistent,
    InMemory { reason: String, announced: bool },
}

pub struct Tracker<S, C = SystemClock> {
    persistence: Persistence<S>,
    clock: C,
    rules: ProgressRules,
    mode: StorageMode,
    profile: Profile,
    stats: DailyStats,
    journal: Journal,
    gamification: GamificationState,
}

impl<S: KeyValueStore> Tracker<S, SystemClock> {
    /// Open with the system clock.
    pub fn open(store: S, rules: ProgressRules) -> Self {
        Self::with_clock(store, SystemClock, rules)
    }
}

impl<S: KeyValueStore, C: Clock> Tracker<S, C> {
    /// Load each record independently. Anything missing or unreadable
    /// starts from its default.
    pub fn with_clock(store: S, clock: C, rules: ProgressRules) -> Self {
        let persistence = Persistence::new(store);
        let mut unavailable = None;

        let profile: Profile = load_record(&persistence, PROFILE_KEY, &mut unavailable);
        let stats: DailyStats = load_record(&persistence, DAILY_STATS_KEY, &mut unavailable);
        let journal: Journal = load_record(&persistence, JOURNAL_KEY, &mut unavailable);
        let gamification: GamificationState =
            load_record::<_, GamificationState>(&persistence, GAMIFICATION_KEY, &mut unavailable)
                .normalized();

        let mode = match unavailable {
            Some(reason) => {
                tracing::warn!(%reason, "store unreadable, running in memory");
                StorageMode::InMemory {
                    reason,
                    announced: false,
                }
            }
            None => StorageMode::Persistent,
        };

        tracing::debug!(
            steps = stats.steps,
            level = gamification.level,
            journal = journal.len(),
            "tracker loaded"
        );

        Self {
            persistence,
            clock,
            rules,
            mode,
            profile,
            stats,
            journal,
            gamification,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn stats(&self) -> &DailyStats {
        &self.stats
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn gamification(&self) -> &GamificationState {
        &self.gamification
    }

    pub fn rules(&self) -> &ProgressRules {
        &self.rules
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn store(&self) -> &S {
        self.persistence.store()
    }

    pub fn into_store(self) -> S {
        self.persistence.into_inner()
    }

    /// False once the store has failed and changes only live in memory.
    pub fn is_persistent(&self) -> bool {
        self.mode == StorageMode::Persistent
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::build(
            &self.profile,
            &self.stats,
            &self.journal,
            &self.gamification,
            &self.rules,
        )
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            profile: self.profile.clone(),
            stats: self.stats.clone(),
            journal: self.journal.clone(),
            gamification: self.gamification.clone(),
            dashboard: self.dashboard(),
        }
    }

    pub fn search_journal(&self, term: &str, tag: Option<&str>) -> Vec<&JournalEntry> {
        self.journal.search(term, tag)
    }

    // ── Activity ─────────────────────────────────────────────────────

    /// One step.
    pub fn increment_steps(&mut self) -> Outcome<DailyStats> {
        self.stats.steps = self.stats.steps.saturating_add(1);
        let notes = self.rules.on_step(&mut self.gamification, self.stats.steps);
        self.finish_stats(notes)
    }

    /// `count` individual steps, each earning XP and checking the goal.
    /// The records are written once at the end.
    ///
    /// # Errors
    /// Rejects more than [`MAX_STEPS_PER_CALL`] steps; state is left unchanged.
    pub fn add_steps(&mut self, count: u64) -> Result<Outcome<DailyStats>, ValidationError> {
        if count > MAX_STEPS_PER_CALL {
            return Err(ValidationError::invalid(
                "count",
                format!("must be at most {MAX_STEPS_PER_CALL}"),
            ));
        }
        let mut notes = Vec::new();
        for _ in 0..count {
            self.stats.steps = self.stats.steps.saturating_add(1);
            notes.extend(self.rules.on_step(&mut self.gamification, self.stats.steps));
        }
        Ok(self.finish_stats(notes))
    }

    /// Undo up to `by` steps. Badges and XP are untouched.
    pub fn decrement_steps(&mut self, by: u64) -> Outcome<DailyStats> {
        self.stats.decrement_steps(by);
        self.finish_stats(Vec::new())
    }

    pub fn add_water(&mut self) -> Outcome<DailyStats> {
        self.stats.water_glasses += 1;
        let notes = self
            .rules
            .on_glass(&mut self.gamification, self.stats.water_glasses);
        self.finish_stats(notes)
    }

    pub fn remove_water(&mut self) -> Outcome<DailyStats> {
        self.stats.decrement_water();
        self.finish_stats(Vec::new())
    }

    /// # Errors
    /// Rejects a blank type or zero duration; state is left unchanged.
    pub fn log_workout(
        &mut self,
        kind: &str,
        duration_minutes: u32,
        calories: u32,
    ) -> Result<Outcome<DailyStats>, ValidationError> {
        let workout = new_workout(kind, duration_minutes, calories, self.clock.time_of_day())?;
        self.stats.push_workout(workout);
        let notes = self.rules.on_workout(&mut self.gamification, calories);
        Ok(self.finish_stats(notes))
    }

    /// # Errors
    /// Rejects a blank meal name; state is left unchanged.
    pub fn log_meal(
        &mut self,
        name: &str,
        calories: u32,
    ) -> Result<Outcome<DailyStats>, ValidationError> {
        let meal = new_meal(name, calories, self.clock.time_of_day())?;
        self.stats.push_meal(meal);
        let notes = self.rules.on_meal(&mut self.gamification, calories);
        Ok(self.finish_stats(notes))
    }

    // ── Journal & profile ────────────────────────────────────────────

    /// Create an entry at the head of the journal.
    ///
    /// # Errors
    /// Rejects a blank title; state is left unchanged.
    pub fn add_journal_entry(
        &mut self,
        title: &str,
        mood: Mood,
        content: &str,
        tags: &[String],
    ) -> Result<Outcome<JournalEntry>, ValidationError> {
        let now = self.clock.now();
        let id = self.journal.next_id(now.timestamp_millis());
        let entry = NewJournalEntry {
            title: title.to_string(),
            mood,
            content: content.to_string(),
            tags: tags.to_vec(),
        }
        .into_entry(id, now.to_rfc3339())?;

        self.journal.prepend(entry.clone());
        let mut notes = Vec::new();
        self.persist(&mut notes);
        Ok(Outcome {
            record: entry,
            notifications: notes,
        })
    }

    /// Replace the profile wholesale.
    ///
    /// # Errors
    /// Returns the first invalid field; the stored profile is unchanged.
    pub fn update_profile(
        &mut self,
        update: ProfileUpdate,
    ) -> Result<Outcome<Profile>, ValidationError> {
        self.profile = update.validate()?;
        let mut notes = Vec::new();
        self.persist(&mut notes);
        Ok(Outcome {
            record: self.profile.clone(),
            notifications: notes,
        })
    }

    // ── Persistence ──────────────────────────────────────────────────

    fn finish_stats(&mut self, mut notes: Vec<Notification>) -> Outcome<DailyStats> {
        self.persist(&mut notes);
        Outcome {
            record: self.stats.clone(),
            notifications: notes,
        }
    }

    fn persist(&mut self, notes: &mut Vec<Notification>) {
        if let StorageMode::InMemory { reason, announced } = &mut self.mode {
            if !*announced {
                *announced = true;
                notes.push(Notification::StorageDegraded {
                    message: reason.clone(),
                });
            }
            return;
        }

        if let Err(e) = self.write_all() {
            tracing::warn!(error = %e, "store rejected write, continuing in memory");
            let reason = e.to_string();
            notes.push(Notification::StorageDegraded {
                message: reason.clone(),
            });
            self.mode = StorageMode::InMemory {
                reason,
                announced: true,
            };
        }
    }

    /// Encode everything first, then hand the store one batch so the
    /// records are never stored out of step with each other.
    fn write_all(&mut self) -> Result<(), StorageError> {
        let batch = [
            (PROFILE_KEY, encode(PROFILE_KEY, &self.profile)?),
            (DAILY_STATS_KEY, encode(DAILY_STATS_KEY, &self.stats)?),
            (JOURNAL_KEY, encode(JOURNAL_KEY, &self.journal)?),
            (GAMIFICATION_KEY, encode(GAMIFICATION_KEY, &self.gamification)?),
        ];
        self.persistence.save_all(&batch)
    }
}

fn load_record<S: KeyValueStore, T: DeserializeOwned + Default>(
    persistence: &Persistence<S>,
    key: &str,
    unavailable: &mut Option<String>,
) -> T {
    match persistence.load(key) {
        LoadOutcome::Loaded(value) => value,
        LoadOutcome::Missing | LoadOutcome::Malformed(_) => T::default(),
        LoadOutcome::Unavailable(e) => {
            unavailable.get_or_insert_with(|| e.to_string());
            T::default()
        }
    }
}
