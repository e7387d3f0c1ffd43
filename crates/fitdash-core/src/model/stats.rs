//! Accumulated activity counters, workouts and meals.
//!
//! Counters never roll over at a day boundary; they grow across sessions.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "duration", alias = "durationMinutes")]
    pub duration_minutes: u32,
    pub calories: u32,
    /// Local wall-clock time the workout was logged, `HH:MM:SS`.
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub calories: u32,
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DailyStats {
    pub steps: u64,
    pub calories_burned: u64,
    pub food_calories: u64,
    pub water_glasses: u64,
    pub workouts: Vec<Workout>,
    pub meals: Vec<Meal>,
}

impl DailyStats {
    /// Remove up to `by` steps. Never goes below zero.
    pub fn decrement_steps(&mut self, by: u64) {
        self.steps = self.steps.saturating_sub(by);
    }

    /// Remove one glass. Never goes below zero.
    pub fn decrement_water(&mut self) {
        self.water_glasses = self.water_glasses.saturating_sub(1);
    }

    pub fn push_workout(&mut self, workout: Workout) {
        self.calories_burned += u64::from(workout.calories);
        self.workouts.push(workout);
    }

    pub fn push_meal(&mut self, meal: Meal) {
        self.food_calories += u64::from(meal.calories);
        self.meals.push(meal);
    }

    /// Total minutes across all logged workouts.
    pub fn workout_minutes(&self) -> u64 {
        self.workouts
            .iter()
            .map(|w| u64::from(w.duration_minutes))
            .sum()
    }
}

/// Percentage of `target` reached, capped at 100. Zero target reads as 0%.
pub fn progress_pct(value: u64, target: u64) -> f64 {
    if target == 0 {
        return 0.0;
    }
    (value as f64 / target as f64 * 100.0).min(100.0)
}

/// Validate workout input and stamp it.
///
/// # Errors
/// Returns an error for a blank type or a zero duration.
pub fn new_workout(
    kind: &str,
    duration_minutes: u32,
    calories: u32,
    timestamp: String,
) -> Result<Workout, ValidationError> {
    let kind = kind.trim();
    if kind.is_empty() {
        return Err(ValidationError::MissingField("type".into()));
    }
    if duration_minutes == 0 {
        return Err(ValidationError::invalid(
            "duration",
            "must be at least one minute",
        ));
    }
    Ok(Workout {
        kind: kind.to_string(),
        duration_minutes,
        calories,
        timestamp,
    })
}

/// Validate meal input and stamp it.
///
/// # Errors
/// Returns an error for a blank meal name.
pub fn new_meal(name: &str, calories: u32, timestamp: String) -> Result<Meal, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingField("name".into()));
    }
    Ok(Meal {
        name: name.to_string(),
        calories,
        timestamp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decrement_floors_at_zero() {
        let mut stats = DailyStats {
            steps: 50,
            water_glasses: 0,
            ..DailyStats::default()
        };
        stats.decrement_steps(100);
        stats.decrement_water();
        assert_eq!(stats.steps, 0);
        assert_eq!(stats.water_glasses, 0);
    }

    #[test]
    fn workouts_accumulate_calories() {
        let mut stats = DailyStats::default();
        stats.push_workout(new_workout("Run", 30, 300, "07:00:00".into()).unwrap());
        stats.push_workout(new_workout("Swim", 20, 150, "18:00:00".into()).unwrap());
        assert_eq!(stats.calories_burned, 450);
        assert_eq!(stats.workout_minutes(), 50);
        assert_eq!(stats.workouts[0].kind, "Run");
    }

    #[test]
    fn meals_accumulate_food_calories() {
        let mut stats = DailyStats::default();
        stats.push_meal(new_meal("Oats", 350, "08:00:00".into()).unwrap());
        assert_eq!(stats.food_calories, 350);
        assert_eq!(stats.meals.len(), 1);
    }

    #[test]
    fn workout_validation() {
        assert_eq!(
            new_workout(" ", 10, 10, String::new()).unwrap_err(),
            ValidationError::MissingField("type".into())
        );
        assert_eq!(
            new_workout("Run", 0, 10, String::new()).unwrap_err().field(),
            "duration"
        );
        assert!(new_meal("", 10, String::new()).is_err());
    }

    #[test]
    fn progress_is_capped() {
        assert_eq!(progress_pct(5_000, 10_000), 50.0);
        assert_eq!(progress_pct(12, 8), 100.0);
        assert_eq!(progress_pct(3, 0), 0.0);
    }

    #[test]
    fn persisted_shape_matches_dashboard_layout() {
        let mut stats = DailyStats::default();
        stats.push_workout(new_workout("Yoga", 45, 120, "06:30:00".into()).unwrap());
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["caloriesBurned"], 120);
        assert_eq!(json["waterGlasses"], 0);
        assert_eq!(json["workouts"][0]["type"], "Yoga");
        assert_eq!(json["workouts"][0]["duration"], 45);
    }

    #[test]
    fn accepts_duration_minutes_alias() {
        let workout: Workout = serde_json::from_str(
            r#"{"type":"Row","durationMinutes":15,"calories":90,"timestamp":"10:00:00"}"#,
        )
        .unwrap();
        assert_eq!(workout.duration_minutes, 15);
    }
}
