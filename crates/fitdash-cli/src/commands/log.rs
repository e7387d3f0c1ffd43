//! Workout and meal logs.

use clap::Subcommand;
use fitdash_core::Config;

use crate::common::{announce, open_tracker, print_json, CliResult};

#[derive(Subcommand)]
pub enum WorkoutAction {
    /// Log a workout
    Log {
        /// Workout type, e.g. "Running"
        kind: String,
        /// Duration in minutes
        minutes: u32,
        /// Calories burned
        calories: u32,
    },
    /// List logged workouts
    List,
}

#[derive(Subcommand)]
pub enum MealAction {
    /// Log a meal
    Log {
        /// Meal name
        name: String,
        /// Calories eaten
        calories: u32,
    },
    /// List logged meals
    List,
}

pub fn run_workout(action: WorkoutAction) -> CliResult {
    let config = Config::load_or_default();
    let mut tracker = open_tracker(&config);

    match action {
        WorkoutAction::Log {
            kind,
            minutes,
            calories,
        } => {
            let outcome = tracker.log_workout(&kind, minutes, calories)?;
            announce(&outcome.notifications);
            if let Some(workout) = outcome.record.workouts.last() {
                print_json(workout)?;
            }
        }
        WorkoutAction::List => print_json(&tracker.stats().workouts)?,
    }
    Ok(())
}

pub fn run_meal(action: MealAction) -> CliResult {
    let config = Config::load_or_default();
    let mut tracker = open_tracker(&config);

    match action {
        MealAction::Log { name, calories } => {
            let outcome = tracker.log_meal(&name, calories)?;
            announce(&outcome.notifications);
            if let Some(meal) = outcome.record.meals.last() {
                print_json(meal)?;
            }
        }
        MealAction::List => print_json(&tracker.stats().meals)?,
    }
    Ok(())
}
