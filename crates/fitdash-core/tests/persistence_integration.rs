//! Integration tests for loading and saving tracker state.

use chrono::{Duration, TimeZone, Utc};
use fitdash_core::storage::{DAILY_STATS_KEY, GAMIFICATION_KEY, JOURNAL_KEY, PROFILE_KEY};
use fitdash_core::{
    FixedClock, KeyValueStore, MemoryStore, Mood, Persistence, ProfileUpdate, ProgressRules,
    SqliteStore, Tracker,
};

fn clock() -> FixedClock {
    FixedClock::new(Utc.with_ymd_and_hms(2026, 10, 19, 6, 45, 0).unwrap())
}

fn profile() -> ProfileUpdate {
    ProfileUpdate {
        name: "Robin".into(),
        age: 34,
        weight: 68.5,
        height: 172.0,
        goal: "endurance".into(),
    }
}

#[test]
fn sqlite_session_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fitdash.db");

    let before = {
        let store = SqliteStore::open_at(&path).unwrap();
        let mut t = Tracker::with_clock(store, clock(), ProgressRules::default());
        t.update_profile(profile()).unwrap();
        t.add_steps(25).unwrap();
        t.add_water();
        t.log_workout("Cycling", 40, 420).unwrap();
        t.log_meal("Porridge", 310).unwrap();
        t.clock().advance(Duration::minutes(5));
        t.add_journal_entry(
            "Long ride",
            Mood::Energetic,
            "Felt strong on the climbs",
            &["cardio".to_string(), "outdoor".to_string()],
        )
        .unwrap();
        t.snapshot()
    };

    let store = SqliteStore::open_at(&path).unwrap();
    let t = Tracker::with_clock(store, clock(), ProgressRules::default());
    assert_eq!(t.snapshot(), before);
    assert_eq!(t.stats().workouts[0].timestamp, "06:45:00");
    assert_eq!(t.journal().entries()[0].date, "2026-10-19T06:50:00+00:00");
}

#[test]
fn partial_store_loads_what_is_there() {
    let store = MemoryStore::with_entries([(
        DAILY_STATS_KEY,
        r#"{"steps":1200,"caloriesBurned":0,"foodCalories":0,"waterGlasses":3,"workouts":[],"meals":[]}"#,
    )]);
    let t = Tracker::with_clock(store, clock(), ProgressRules::default());
    assert_eq!(t.stats().steps, 1200);
    assert_eq!(t.stats().water_glasses, 3);
    assert_eq!(t.profile().name, "");
    assert_eq!(t.gamification().level, 1);
    assert!(t.journal().is_empty());
}

#[test]
fn corrupted_record_falls_back_to_default() {
    let store = MemoryStore::with_entries([
        (GAMIFICATION_KEY, "{\"level\": 4, \"xp\": "),
        (PROFILE_KEY, r#"{"name":"Lee","age":29,"weight":60,"height":165,"goal":"tone"}"#),
    ]);
    let mut t = Tracker::with_clock(store, clock(), ProgressRules::default());
    assert_eq!(t.gamification().level, 1);
    assert_eq!(t.profile().name, "Lee");
    assert!(t.is_persistent());

    // The next write replaces the corrupted value.
    t.add_water();
    let raw = t.store().get(GAMIFICATION_KEY).unwrap().unwrap();
    assert!(serde_json::from_str::<serde_json::Value>(&raw).is_ok());
}

#[test]
fn legacy_dashboard_records_load() {
    let store = MemoryStore::with_entries([
        (
            DAILY_STATS_KEY,
            r#"{"steps":10000,"caloriesBurned":300,"foodCalories":500,"waterGlasses":8,
                "workouts":[{"type":"Running","duration":30,"calories":300,"timestamp":"7:05:12 AM"}],
                "meals":[{"name":"Toast","calories":500,"timestamp":"8:00:00 AM"}]}"#,
        ),
        (
            JOURNAL_KEY,
            r#"[{"id":1760000000000,"date":"2025-10-09T09:33:20.000Z","title":"Rest day",
                 "mood":"sore","content":"Stretching only","tags":["recovery"]}]"#,
        ),
        (
            GAMIFICATION_KEY,
            r#"{"level":3,"xp":47.5,"badges":{"steps":true,"water":true,"streak":false}}"#,
        ),
    ]);
    let mut t = Tracker::with_clock(store, clock(), ProgressRules::default());
    assert_eq!(t.stats().workouts[0].duration_minutes, 30);
    assert_eq!(t.journal().entries()[0].mood, Mood::Sore);
    assert_eq!(t.gamification().xp, 47.5);

    // Badges already earned: crossing again pays nothing extra.
    let out = t.increment_steps();
    assert!(out.notifications.is_empty());
    assert_eq!(t.gamification().xp, 57.5);
}

#[test]
fn save_of_load_is_idempotent() {
    let mut t = Tracker::with_clock(MemoryStore::new(), clock(), ProgressRules::default());
    t.add_steps(3).unwrap();
    t.add_journal_entry("Note", Mood::Good, "", &[]).unwrap();
    let store = t.into_store();

    let mut persistence = Persistence::new(store.clone());
    for key in [PROFILE_KEY, DAILY_STATS_KEY, JOURNAL_KEY, GAMIFICATION_KEY] {
        let value: serde_json::Value = persistence.load(key).value().unwrap();
        persistence.save(key, &value).unwrap();
    }
    let resaved = persistence.into_inner();
    for key in [PROFILE_KEY, DAILY_STATS_KEY, JOURNAL_KEY, GAMIFICATION_KEY] {
        let a: serde_json::Value = serde_json::from_str(&store.get(key).unwrap().unwrap()).unwrap();
        let b: serde_json::Value =
            serde_json::from_str(&resaved.get(key).unwrap().unwrap()).unwrap();
        assert_eq!(a, b, "{key} changed after save(load())");
    }
}

#[test]
fn search_goes_through_tracker() {
    let mut t = Tracker::with_clock(MemoryStore::new(), clock(), ProgressRules::default());
    t.add_journal_entry("Intervals", Mood::Motivated, "8x400m", &["cardio".into()])
        .unwrap();
    t.clock().advance(Duration::seconds(1));
    t.add_journal_entry("Deadlifts", Mood::Sore, "Back is tight", &["strength".into()])
        .unwrap();

    let hits = t.search_journal("back", None);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Deadlifts");
    assert_eq!(t.search_journal("", Some("cardio"))[0].title, "Intervals");
}

#[test]
fn rejected_sqlite_write_keeps_records_in_step() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fitdash.db");

    let store = SqliteStore::open_at(&path).unwrap();
    let mut t = Tracker::with_clock(store, clock(), ProgressRules::default());
    t.add_water();

    // Refuse the third record of the next batch.
    let other = rusqlite::Connection::open(&path).unwrap();
    other
        .execute_batch(
            "CREATE TRIGGER reject_journal BEFORE INSERT ON kv
             WHEN NEW.key = 'journalEntries'
             BEGIN SELECT RAISE(ABORT, 'disk full'); END;",
        )
        .unwrap();

    let out = t.add_water();
    assert_eq!(out.record.water_glasses, 2);
    assert!(!t.is_persistent());
    drop(t);

    let reopened = SqliteStore::open_at(&path).unwrap();
    let t = Tracker::with_clock(reopened, clock(), ProgressRules::default());
    assert_eq!(t.stats().water_glasses, 1);
    assert_eq!(t.gamification().xp, 5.0);
}
