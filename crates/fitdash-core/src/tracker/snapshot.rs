use serde::{Deserialize, Serialize};

use crate::model::{
    progress_pct, Badges, DailyStats, GamificationState, Journal, Profile,
};
use crate::progress::ProgressRules;

/// Totals and progress bars for the dashboard view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub steps: u64,
    pub step_goal: u64,
    pub steps_pct: f64,
    pub water_glasses: u64,
    pub water_goal: u64,
    pub water_pct: f64,
    pub calories_burned: u64,
    pub food_calories: u64,
    pub calorie_target: u64,
    pub food_calories_pct: f64,
    pub workouts: usize,
    pub meals: usize,
    pub journal_entries: usize,
    pub level: u32,
    pub xp: f64,
    pub xp_threshold: f64,
    pub level_pct: f64,
    pub badges: Badges,
    pub bmi: Option<f64>,
}

impl Dashboard {
    pub fn build(
        profile: &Profile,
        stats: &DailyStats,
        journal: &Journal,
        gamification: &GamificationState,
        rules: &ProgressRules,
    ) -> Self {
        Self {
            steps: stats.steps,
            step_goal: rules.step_goal,
            steps_pct: progress_pct(stats.steps, rules.step_goal),
            water_glasses: stats.water_glasses,
            water_goal: rules.water_goal,
            water_pct: progress_pct(stats.water_glasses, rules.water_goal),
            calories_burned: stats.calories_burned,
            food_calories: stats.food_calories,
            calorie_target: rules.calorie_target,
            food_calories_pct: progress_pct(stats.food_calories, rules.calorie_target),
            workouts: stats.workouts.len(),
            meals: stats.meals.len(),
            journal_entries: journal.len(),
            level: gamification.level,
            xp: gamification.xp,
            xp_threshold: gamification.threshold(rules.level_multiplier),
            level_pct: gamification.level_progress_pct(rules.level_multiplier),
            badges: gamification.badges,
            bmi: profile.bmi(),
        }
    }
}

/// Copy of every record plus derived values, handed to whatever renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub profile: Profile,
    pub stats: DailyStats,
    pub journal: Journal,
    pub gamification: GamificationState,
    pub dashboard: Dashboard,
}
