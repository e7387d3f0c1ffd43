//! User profile and BMI.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Oldest age accepted from input.
pub const MAX_AGE: u32 = 150;

/// User profile, replaced wholesale on every update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    /// Kilograms.
    pub weight: f64,
    /// Centimetres.
    pub height: f64,
    pub goal: String,
}

impl Profile {
    /// Body-mass index, or `None` until both weight and height are known.
    pub fn bmi(&self) -> Option<f64> {
        if self.weight > 0.0 && self.height > 0.0 {
            let height_m = self.height / 100.0;
            Some(self.weight / (height_m * height_m))
        } else {
            None
        }
    }

    /// BMI rounded to one decimal for display, e.g. `"22.9"`, or `"N/A"`.
    pub fn bmi_label(&self) -> String {
        match self.bmi() {
            Some(bmi) => format!("{bmi:.1}"),
            None => "N/A".to_string(),
        }
    }
}

/// Raw profile form input, validated before it replaces the stored profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub age: u32,
    pub weight: f64,
    pub height: f64,
    pub goal: String,
}

impl ProfileUpdate {
    /// Check every field and build the new profile.
    ///
    /// # Errors
    /// Returns the first field that fails validation.
    pub fn validate(self) -> Result<Profile, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField("name".into()));
        }
        if self.age > MAX_AGE {
            return Err(ValidationError::invalid(
                "age",
                format!("must be at most {MAX_AGE}"),
            ));
        }
        check_positive("weight", self.weight)?;
        check_positive("height", self.height)?;
        let goal = self.goal.trim();
        if goal.is_empty() {
            return Err(ValidationError::MissingField("goal".into()));
        }

        Ok(Profile {
            name: name.to_string(),
            age: self.age,
            weight: self.weight,
            height: self.height,
            goal: goal.to_string(),
        })
    }
}

fn check_positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::invalid(field, "must be a number"));
    }
    if value <= 0.0 {
        return Err(ValidationError::invalid(field, "must be greater than zero"));
    }
    Ok(())
}
