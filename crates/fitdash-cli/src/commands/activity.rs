//! Step and water counters.

use clap::Subcommand;
use fitdash_core::{Config, MAX_STEPS_PER_CALL};

use crate::common::{announce, open_tracker, print_json, CliResult};

#[derive(Subcommand)]
pub enum StepsAction {
    /// Add steps (each one earns XP)
    Add {
        /// Number of steps to add
        #[arg(
            long,
            default_value = "1",
            value_parser = clap::value_parser!(u64).range(1..=MAX_STEPS_PER_CALL)
        )]
        count: u64,
    },
    /// Undo steps, never below zero
    Remove {
        /// Steps to remove (default: ui.step_decrement from config)
        #[arg(long)]
        by: Option<u64>,
    },
}

#[derive(Subcommand)]
pub enum WaterAction {
    /// Add one glass
    Add,
    /// Remove one glass
    Remove,
}

pub fn run_steps(action: StepsAction) -> CliResult {
    let config = Config::load_or_default();
    let mut tracker = open_tracker(&config);

    let outcome = match action {
        StepsAction::Add { count } => tracker.add_steps(count)?,
        StepsAction::Remove { by } => {
            tracker.decrement_steps(by.unwrap_or(u64::from(config.ui.step_decrement)))
        }
    };

    announce(&outcome.notifications);
    print_json(&serde_json::json!({
        "steps": outcome.record.steps,
        "stepGoal": tracker.rules().step_goal,
        "level": tracker.gamification().level,
        "xp": tracker.gamification().xp,
    }))
}

pub fn run_water(action: WaterAction) -> CliResult {
    let config = Config::load_or_default();
    let mut tracker = open_tracker(&config);

    let outcome = match action {
        WaterAction::Add => tracker.add_water(),
        WaterAction::Remove => tracker.remove_water(),
    };

    announce(&outcome.notifications);
    print_json(&serde_json::json!({
        "waterGlasses": outcome.record.water_glasses,
        "waterGoal": tracker.rules().water_goal,
        "level": tracker.gamification().level,
        "xp": tracker.gamification().xp,
    }))
}
