//! XP awards, level-ups and goal badges.
//!
//! ## State machine
//!
//! ```text
//! xp' = xp + amount
//! xp' >= level * 100  ->  (level + 1, 0)   + LevelUp
//! otherwise           ->  (level, xp')
//! ```
//!
//! A single award levels up at most once and drops any excess XP.

use serde::{Deserialize, Serialize};

use crate::events::Notification;
use crate::model::{Badge, GamificationState};

/// Thresholds and XP rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRules {
    pub step_goal: u64,
    pub water_goal: u64,
    pub xp_per_step: f64,
    pub xp_per_glass: f64,
    pub workout_calorie_divisor: f64,
    pub meal_calorie_divisor: f64,
    pub step_goal_bonus: f64,
    pub water_goal_bonus: f64,
    pub level_multiplier: u32,
    /// Dashboard target for food calories. Not used for XP.
    pub calorie_target: u64,
}

impl Default for ProgressRules {
    fn default() -> Self {
        Self {
            step_goal: 10_000,
            water_goal: 8,
            xp_per_step: 10.0,
            xp_per_glass: 5.0,
            workout_calorie_divisor: 10.0,
            meal_calorie_divisor: 20.0,
            step_goal_bonus: 50.0,
            water_goal_bonus: 30.0,
            level_multiplier: 100,
            calorie_target: 2_000,
        }
    }
}

impl ProgressRules {
    /// Add XP and level up once if the threshold is reached.
    ///
    /// Negative or non-finite amounts are ignored.
    pub fn award_xp(&self, state: &mut GamificationState, amount: f64) -> Option<Notification> {
        if !amount.is_finite() || amount < 0.0 {
            tracing::warn!(amount, "ignoring invalid XP award");
            return None;
        }

        state.xp += amount;
        if state.xp >= state.threshold(self.level_multiplier) {
            state.level = state.level.saturating_add(1);
            state.xp = 0.0;
            tracing::info!(level = state.level, "level up");
            Some(Notification::LevelUp { level: state.level })
        } else {
            None
        }
    }

    /// Unlock the step badge the first time `steps` reaches the goal.
    pub fn check_step_goal(&self, state: &mut GamificationState, steps: u64) -> Vec<Notification> {
        if steps < self.step_goal {
            return Vec::new();
        }
        self.unlock(
            state,
            Badge::Steps,
            self.step_goal_bonus,
            Notification::step_goal(self.step_goal, self.step_goal_bonus),
        )
    }

    /// Unlock the water badge the first time `glasses` reaches the goal.
    pub fn check_water_goal(
        &self,
        state: &mut GamificationState,
        glasses: u64,
    ) -> Vec<Notification> {
        if glasses < self.water_goal {
            return Vec::new();
        }
        self.unlock(
            state,
            Badge::Water,
            self.water_goal_bonus,
            Notification::water_goal(self.water_goal, self.water_goal_bonus),
        )
    }

    fn unlock(
        &self,
        state: &mut GamificationState,
        badge: Badge,
        bonus: f64,
        announcement: Notification,
    ) -> Vec<Notification> {
        if !state.badges.earn(badge) {
            return Vec::new();
        }
        tracing::info!(badge = badge.title(), "badge unlocked");
        let mut out = vec![announcement];
        out.extend(self.award_xp(state, bonus));
        out
    }

    /// One step was added; `steps` is the new total.
    pub fn on_step(&self, state: &mut GamificationState, steps: u64) -> Vec<Notification> {
        let mut out = self.check_step_goal(state, steps);
        out.extend(self.award_xp(state, self.xp_per_step));
        out
    }

    /// One glass was added; `glasses` is the new total.
    pub fn on_glass(&self, state: &mut GamificationState, glasses: u64) -> Vec<Notification> {
        let mut out = self.check_water_goal(state, glasses);
        out.extend(self.award_xp(state, self.xp_per_glass));
        out
    }

    pub fn workout_xp(&self, calories: u32) -> f64 {
        divide(calories, self.workout_calorie_divisor)
    }

    pub fn meal_xp(&self, calories: u32) -> f64 {
        divide(calories, self.meal_calorie_divisor)
    }

    pub fn on_workout(&self, state: &mut GamificationState, calories: u32) -> Vec<Notification> {
        self.award_xp(state, self.workout_xp(calories)).into_iter().collect()
    }

    pub fn on_meal(&self, state: &mut GamificationState, calories: u32) -> Vec<Notification> {
        self.award_xp(state, self.meal_xp(calories)).into_iter().collect()
    }
}

fn divide(calories: u32, divisor: f64) -> f64 {
    if divisor > 0.0 {
        f64::from(calories) / divisor
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_ups(notes: &[Notification]) -> usize {
        notes
            .iter()
            .filter(|n| matches!(n, Notification::LevelUp { .. }))
            .count()
    }

    #[test]
    fn ten_steps_reach_level_two() {
        let rules = ProgressRules::default();
        let mut state = GamificationState::default();
        let mut notes = Vec::new();
        for steps in 1..=9 {
            notes.extend(rules.on_step(&mut state, steps));
        }
        assert_eq!(state.xp, 90.0);
        assert!(notes.is_empty());

        notes.extend(rules.on_step(&mut state, 10));
        assert_eq!((state.level, state.xp), (2, 0.0));
        assert_eq!(notes, vec![Notification::LevelUp { level: 2 }]);
    }

    #[test]
    fn large_award_levels_up_once_and_discards_excess() {
        let rules = ProgressRules::default();
        let mut state = GamificationState::default();
        let note = rules.award_xp(&mut state, 450.0);
        assert_eq!(note, Some(Notification::LevelUp { level: 2 }));
        assert_eq!((state.level, state.xp), (2, 0.0));
    }

    #[test]
    fn level_saturates_at_max() {
        let rules = ProgressRules::default();
        let mut state = GamificationState {
            level: u32::MAX,
            ..GamificationState::default()
        };
        let threshold = state.threshold(rules.level_multiplier);
        let note = rules.award_xp(&mut state, threshold);
        assert_eq!(note, Some(Notification::LevelUp { level: u32::MAX }));
        assert_eq!((state.level, state.xp), (u32::MAX, 0.0));
    }

    #[test]
    fn fractional_xp_accumulates() {
        let rules = ProgressRules::default();
        let mut state = GamificationState::default();
        rules.on_meal(&mut state, 250);
        assert_eq!(state.xp, 12.5);
        rules.on_workout(&mut state, 35);
        assert_eq!(state.xp, 16.0);
    }

    #[test]
    fn step_goal_fires_once() {
        let rules = ProgressRules::default();
        let mut state = GamificationState::default();
        let notes = rules.on_step(&mut state, 10_000);
        assert!(state.badges.steps);
        assert_eq!(notes.len(), 1);
        assert!(matches!(
            notes[0],
            Notification::GoalAchieved { goal: Badge::Steps, .. }
        ));
        // 50 bonus + 10 per-step
        assert_eq!(state.xp, 60.0);

        let notes = rules.on_step(&mut state, 10_001);
        assert!(notes.is_empty());
        assert_eq!(state.xp, 70.0);
    }

    #[test]
    fn goal_bonus_can_trigger_level_up() {
        let rules = ProgressRules::default();
        let mut state = GamificationState {
            xp: 80.0,
            ..GamificationState::default()
        };
        let notes = rules.check_water_goal(&mut state, 8);
        assert_eq!(notes.len(), 2);
        assert_eq!(level_ups(&notes), 1);
        assert_eq!((state.level, state.xp), (2, 0.0));
    }

    #[test]
    fn below_goal_does_nothing() {
        let rules = ProgressRules::default();
        let mut state = GamificationState::default();
        assert!(rules.check_step_goal(&mut state, 9_999).is_empty());
        assert!(rules.check_water_goal(&mut state, 7).is_empty());
        assert!(!state.badges.steps && !state.badges.water);
    }

    #[test]
    fn invalid_amounts_are_ignored() {
        let rules = ProgressRules::default();
        let mut state = GamificationState::default();
        assert!(rules.award_xp(&mut state, -5.0).is_none());
        assert!(rules.award_xp(&mut state, f64::NAN).is_none());
        assert_eq!(state.xp, 0.0);
    }

    #[test]
    fn zero_divisor_awards_nothing() {
        let rules = ProgressRules {
            meal_calorie_divisor: 0.0,
            ..ProgressRules::default()
        };
        assert_eq!(rules.meal_xp(500), 0.0);
    }
}
