use serde::{Deserialize, Serialize};

use crate::model::Badge;

/// Something the presentation layer should surface to the user.
/// Mutations return these; nothing in the core renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notification {
    /// A daily goal was reached for the first time and its badge unlocked.
    GoalAchieved {
        goal: Badge,
        title: String,
        message: String,
        bonus_xp: f64,
    },
    LevelUp {
        level: u32,
    },
    /// The store rejected a write. Raised once; state keeps living in memory.
    StorageDegraded {
        message: String,
    },
}

impl Notification {
    pub fn step_goal(goal: u64, bonus_xp: f64) -> Self {
        Notification::GoalAchieved {
            goal: Badge::Steps,
            title: "Step Goal Achieved!".to_string(),
            message: format!(
                "Congratulations! You have reached your daily step goal of {goal} steps!"
            ),
            bonus_xp,
        }
    }

    pub fn water_goal(goal: u64, bonus_xp: f64) -> Self {
        Notification::GoalAchieved {
            goal: Badge::Water,
            title: "Water Goal Achieved!".to_string(),
            message: format!(
                "Great job! You have reached your daily water intake goal of {goal} glasses!"
            ),
            bonus_xp,
        }
    }

    /// One-line text for terminals and logs.
    pub fn headline(&self) -> String {
        match self {
            Notification::GoalAchieved { title, message, .. } => format!("{title} {message}"),
            Notification::LevelUp { level } => {
                format!("Level Up! Congratulations! You've reached Level {level}!")
            }
            Notification::StorageDegraded { message } => {
                format!("Storage unavailable, changes are kept in memory only: {message}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_serialization() {
        let json = serde_json::to_value(Notification::LevelUp { level: 3 }).unwrap();
        assert_eq!(json["type"], "level_up");
        assert_eq!(json["level"], 3);

        let json = serde_json::to_value(Notification::step_goal(10_000, 50.0)).unwrap();
        assert_eq!(json["type"], "goal_achieved");
        assert_eq!(json["goal"], "steps");
    }

    #[test]
    fn headlines_mention_the_detail() {
        assert!(Notification::LevelUp { level: 4 }.headline().contains("Level 4"));
        assert!(Notification::water_goal(8, 30.0).headline().contains("8 glasses"));
    }
}
