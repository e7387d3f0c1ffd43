//! Journal commands.

use clap::Subcommand;
use fitdash_core::{Config, Mood};

use crate::common::{announce, open_tracker, print_json, CliResult};

#[derive(Subcommand)]
pub enum JournalAction {
    /// Write a new entry
    Add {
        /// Entry title
        title: String,
        /// energetic, good, tired, sore or motivated
        #[arg(long)]
        mood: String,
        /// Entry text
        #[arg(long, default_value = "")]
        content: String,
        /// Tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// List entries, newest first
    List {
        /// Only entries whose title or content contains this text
        #[arg(long, default_value = "")]
        search: String,
        /// Only entries with this tag
        #[arg(long)]
        tag: Option<String>,
    },
}

pub fn run(action: JournalAction) -> CliResult {
    let config = Config::load_or_default();
    let mut tracker = open_tracker(&config);

    match action {
        JournalAction::Add {
            title,
            mood,
            content,
            tags,
        } => {
            let mood: Mood = mood.parse()?;
            let outcome = tracker.add_journal_entry(&title, mood, &content, &tags)?;
            announce(&outcome.notifications);
            eprintln!("{} Journal entry saved!", outcome.record.mood.emoji());
            print_json(&outcome.record)?;
        }
        JournalAction::List { search, tag } => {
            let hits = tracker.search_journal(&search, tag.as_deref());
            print_json(&hits)?;
        }
    }
    Ok(())
}
