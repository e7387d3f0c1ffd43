//! Level, XP and badges.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    Steps,
    Water,
    Streak,
}

impl Badge {
    pub fn title(&self) -> &'static str {
        match self {
            Badge::Steps => "Step Master",
            Badge::Water => "Hydration Hero",
            Badge::Streak => "7-Day Streak",
        }
    }
}

/// Earned badges. A flag only ever goes from false to true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Badges {
    pub steps: bool,
    pub water: bool,
    /// Never awarded; kept so stored records keep their shape.
    pub streak: bool,
}

impl Badges {
    pub fn has(&self, badge: Badge) -> bool {
        match badge {
            Badge::Steps => self.steps,
            Badge::Water => self.water,
            Badge::Streak => self.streak,
        }
    }

    /// Set a badge. Returns true if it was not already earned.
    pub fn earn(&mut self, badge: Badge) -> bool {
        let slot = match badge {
            Badge::Steps => &mut self.steps,
            Badge::Water => &mut self.water,
            Badge::Streak => &mut self.streak,
        };
        let newly = !*slot;
        *slot = true;
        newly
    }

    pub fn earned(&self) -> Vec<Badge> {
        [Badge::Steps, Badge::Water, Badge::Streak]
            .into_iter()
            .filter(|b| self.has(*b))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GamificationState {
    pub level: u32,
    /// XP inside the current level. Fractional amounts are kept as-is.
    pub xp: f64,
    pub badges: Badges,
}

impl Default for GamificationState {
    fn default() -> Self {
        Self {
            level: 1,
            xp: 0.0,
            badges: Badges::default(),
        }
    }
}

impl GamificationState {
    /// XP needed to leave the current level.
    pub fn threshold(&self, level_multiplier: u32) -> f64 {
        f64::from(self.level) * f64::from(level_multiplier)
    }

    /// 0.0 ..= 100.0 progress through the current level.
    pub fn level_progress_pct(&self, level_multiplier: u32) -> f64 {
        let threshold = self.threshold(level_multiplier);
        if threshold <= 0.0 {
            return 0.0;
        }
        (self.xp / threshold * 100.0).clamp(0.0, 100.0)
    }

    /// Repair values no code path can produce, e.g. from a hand-edited
    /// store: level below one or negative XP.
    pub fn normalized(mut self) -> Self {
        if self.level == 0 {
            self.level = 1;
        }
        if !self.xp.is_finite() || self.xp < 0.0 {
            self.xp = 0.0;
        }
        self
    }
}
