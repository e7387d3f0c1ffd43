//! Journal entries, newest first.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Energetic,
    Good,
    Tired,
    Sore,
    Motivated,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Energetic,
        Mood::Good,
        Mood::Tired,
        Mood::Sore,
        Mood::Motivated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Energetic => "energetic",
            Mood::Good => "good",
            Mood::Tired => "tired",
            Mood::Sore => "sore",
            Mood::Motivated => "motivated",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Energetic => "🔋",
            Mood::Good => "😊",
            Mood::Tired => "😴",
            Mood::Sore => "🤕",
            Mood::Motivated => "💪",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Mood::ALL
            .into_iter()
            .find(|m| m.as_str() == wanted)
            .ok_or_else(|| {
                ValidationError::invalid(
                    "mood",
                    format!("expected one of energetic, good, tired, sore, motivated; got '{s}'"),
                )
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Creation time in epoch milliseconds.
    pub id: i64,
    /// Creation time, RFC 3339.
    pub date: String,
    pub title: String,
    pub mood: Mood,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl JournalEntry {
    fn matches(&self, needle: &str, tag: Option<&str>) -> bool {
        let text_hit = needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle);
        let tag_hit = tag.map_or(true, |t| self.tags.contains(t));
        text_hit && tag_hit
    }
}

/// Ordered journal. Index 0 is the most recent entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&JournalEntry> {
        self.entries.first()
    }

    /// Insert at the head.
    pub fn prepend(&mut self, entry: JournalEntry) {
        self.entries.insert(0, entry);
    }

    /// Id for an entry created at `now_ms`. Bumped past the newest id when
    /// the clock hasn't moved since the last entry.
    pub fn next_id(&self, now_ms: i64) -> i64 {
        match self.latest() {
            Some(latest) if latest.id >= now_ms => latest.id + 1,
            _ => now_ms,
        }
    }

    /// Entries whose title or content contains `term` (case-insensitive),
    /// optionally restricted to those carrying `tag`. Newest first.
    pub fn search(&self, term: &str, tag: Option<&str>) -> Vec<&JournalEntry> {
        let needle = term.trim().to_lowercase();
        let tag = tag.map(str::trim).filter(|t| !t.is_empty());
        self.entries
            .iter()
            .filter(|e| e.matches(&needle, tag))
            .collect()
    }

    /// Every tag in use, sorted.
    pub fn tags(&self) -> BTreeSet<&str> {
        self.entries
            .iter()
            .flat_map(|e| e.tags.iter().map(String::as_str))
            .collect()
    }
}

/// Journal form input.
#[derive(Debug, Clone)]
pub struct NewJournalEntry {
    pub title: String,
    pub mood: Mood,
    pub content: String,
    pub tags: Vec<String>,
}

impl NewJournalEntry {
    /// Validate and stamp the entry.
    ///
    /// # Errors
    /// Returns an error when the title is blank.
    pub fn into_entry(self, id: i64, date: String) -> Result<JournalEntry, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingField("title".into()));
        }
        let tags = self
            .tags
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        Ok(JournalEntry {
            id,
            date,
            title: title.to_string(),
            mood: self.mood,
            content: self.content,
            tags,
        })
    }
}
