//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Daily goals (steps, water, calorie target)
//! - XP rates and bonuses
//! - Presentation settings
//!
//! Configuration is stored at `~/.config/fitdash/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::ConfigError;
use crate::progress::ProgressRules;

/// Daily goal thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalsConfig {
    #[serde(default = "default_step_goal")]
    pub step_goal: u32,
    #[serde(default = "default_water_goal")]
    pub water_goal: u32,
    /// Food calories shown as 100% on the dashboard.
    #[serde(default = "default_calorie_target")]
    pub calorie_target: u32,
    #[serde(default = "default_streak_days")]
    pub streak_days: u32,
}

/// XP rates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XpConfig {
    #[serde(default = "default_per_step")]
    pub per_step: f64,
    #[serde(default = "default_per_glass")]
    pub per_glass: f64,
    #[serde(default = "default_workout_divisor")]
    pub workout_calorie_divisor: f64,
    #[serde(default = "default_meal_divisor")]
    pub meal_calorie_divisor: f64,
    #[serde(default = "default_step_goal_bonus")]
    pub step_goal_bonus: f64,
    #[serde(default = "default_water_goal_bonus")]
    pub water_goal_bonus: f64,
    /// XP needed per level: threshold is `level * level_multiplier`.
    #[serde(default = "default_level_multiplier")]
    pub level_multiplier: u32,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub dark_mode: bool,
    /// How many steps a single "remove" takes off.
    #[serde(default = "default_step_decrement")]
    pub step_decrement: u32,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/fitdash/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub goals: GoalsConfig,
    #[serde(default)]
    pub xp: XpConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

// Default functions
fn default_step_goal() -> u32 {
    10_000
}
fn default_water_goal() -> u32 {
    8
}
fn default_calorie_target() -> u32 {
    2_000
}
fn default_streak_days() -> u32 {
    7
}
fn default_per_step() -> f64 {
    10.0
}
fn default_per_glass() -> f64 {
    5.0
}
fn default_workout_divisor() -> f64 {
    10.0
}
fn default_meal_divisor() -> f64 {
    20.0
}
fn default_step_goal_bonus() -> f64 {
    50.0
}
fn default_water_goal_bonus() -> f64 {
    30.0
}
fn default_level_multiplier() -> u32 {
    100
}
fn default_step_decrement() -> u32 {
    100
}

impl Default for GoalsConfig {
    fn default() -> Self {
        Self {
            step_goal: default_step_goal(),
            water_goal: default_water_goal(),
            calorie_target: default_calorie_target(),
            streak_days: default_streak_days(),
        }
    }
}

impl Default for XpConfig {
    fn default() -> Self {
        Self {
            per_step: default_per_step(),
            per_glass: default_per_glass(),
            workout_calorie_divisor: default_workout_divisor(),
            meal_calorie_divisor: default_meal_divisor(),
            step_goal_bonus: default_step_goal_bonus(),
            water_goal_bonus: default_water_goal_bonus(),
            level_multiplier: default_level_multiplier(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            step_decrement: default_step_decrement(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<u64>() {
                            serde_json::Value::Number(n.into())
                        } else if let Ok(n) = value.parse::<f64>() {
                            serde_json::Number::from_f64(n)
                                .map(serde_json::Value::Number)
                                .ok_or_else(|| {
                                    invalid(format!("cannot parse '{value}' as number"))
                                })?
                        } else {
                            return Err(invalid(format!("cannot parse '{value}' as number")));
                        }
                    }
                    serde_json::Value::Object(_) => return Err(unknown()),
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("config.toml"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from the default location, writing defaults if nothing is there.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path, writing defaults if the file is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
        }
    }

    /// Persist to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key in memory. Returns error if the key is
    /// unknown or the value does not fit the field's type.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be parsed.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Progress rules derived from the goal and XP sections.
    pub fn rules(&self) -> ProgressRules {
        ProgressRules {
            step_goal: u64::from(self.goals.step_goal),
            water_goal: u64::from(self.goals.water_goal),
            xp_per_step: self.xp.per_step,
            xp_per_glass: self.xp.per_glass,
            workout_calorie_divisor: self.xp.workout_calorie_divisor,
            meal_calorie_divisor: self.xp.meal_calorie_divisor,
            step_goal_bonus: self.xp.step_goal_bonus,
            water_goal_bonus: self.xp.water_goal_bonus,
            level_multiplier: self.xp.level_multiplier,
            calorie_target: u64::from(self.goals.calorie_target),
        }
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(error = %e, "using default configuration");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.goals.step_goal, 10_000);
        assert_eq!(parsed.xp.level_multiplier, 100);
        assert!(!parsed.ui.dark_mode);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let parsed: Config = toml::from_str("[goals]\nwater_goal = 10\n").unwrap();
        assert_eq!(parsed.goals.water_goal, 10);
        assert_eq!(parsed.goals.step_goal, 10_000);
        assert_eq!(parsed.ui.step_decrement, 100);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("ui.dark_mode").as_deref(), Some("false"));
        assert_eq!(cfg.get("goals.step_goal").as_deref(), Some("10000"));
        assert!(cfg.get("ui.missing_key").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn set_updates_nested_values() {
        let mut cfg = Config::default();
        cfg.set("ui.dark_mode", "true").unwrap();
        cfg.set("goals.water_goal", "10").unwrap();
        cfg.set("xp.per_step", "2.5").unwrap();
        assert!(cfg.ui.dark_mode);
        assert_eq!(cfg.goals.water_goal, 10);
        assert_eq!(cfg.xp.per_step, 2.5);
    }

    #[test]
    fn set_accepts_integer_for_float_field() {
        let mut cfg = Config::default();
        cfg.set("xp.step_goal_bonus", "75").unwrap();
        assert_eq!(cfg.xp.step_goal_bonus, 75.0);
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut cfg = Config::default();
        let err = cfg.set("ui.nonexistent_key", "value").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKey(_)));
        assert!(cfg.set("goals", "1").is_err());
    }

    #[test]
    fn set_rejects_invalid_type() {
        let mut cfg = Config::default();
        assert!(cfg.set("ui.dark_mode", "not_a_bool").is_err());
        assert!(cfg.set("goals.step_goal", "many").is_err());
        // Negative values don't fit an unsigned field.
        assert!(cfg.set("goals.step_goal", "-5").is_err());
        assert_eq!(cfg.goals.step_goal, 10_000);
    }

    #[test]
    fn load_from_writes_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.goals.step_goal, 10_000);
        assert!(path.exists());
    }

    #[test]
    fn load_from_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "goals = [[[").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::LoadFailed { .. })
        ));
    }

    #[test]
    fn rules_follow_config() {
        let mut cfg = Config::default();
        cfg.goals.step_goal = 5_000;
        let rules = cfg.rules();
        assert_eq!(rules.step_goal, 5_000);
        assert_eq!(rules.water_goal, 8);
        assert_eq!(rules.xp_per_step, 10.0);
    }
}
