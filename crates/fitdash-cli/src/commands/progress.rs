//! Read-only views: gamification, dashboard, quote.

use fitdash_core::{motivational_quote, Config};

use crate::common::{open_tracker, print_json, CliResult};

pub fn run_progress() -> CliResult {
    let config = Config::load_or_default();
    let tracker = open_tracker(&config);
    let state = tracker.gamification();
    let multiplier = tracker.rules().level_multiplier;

    let badges: Vec<_> = state
        .badges
        .earned()
        .into_iter()
        .map(|b| b.title())
        .collect();

    print_json(&serde_json::json!({
        "level": state.level,
        "xp": state.xp,
        "xpThreshold": state.threshold(multiplier),
        "levelProgressPct": state.level_progress_pct(multiplier),
        "badges": state.badges,
        "earned": badges,
    }))
}

pub fn run_dashboard() -> CliResult {
    let config = Config::load_or_default();
    let tracker = open_tracker(&config);
    print_json(&tracker.dashboard())
}

pub fn run_quote() -> CliResult {
    println!("{}", motivational_quote());
    Ok(())
}
