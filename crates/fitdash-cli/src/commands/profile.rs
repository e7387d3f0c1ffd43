use clap::Subcommand;
use fitdash_core::{Config, ProfileUpdate};

use crate::common::{announce, open_tracker, print_json, CliResult};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the profile and BMI
    Show,
    /// Replace the profile
    Set {
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: u32,
        /// Weight in kilograms
        #[arg(long)]
        weight: f64,
        /// Height in centimetres
        #[arg(long)]
        height: f64,
        /// Fitness goal, e.g. "lose-weight"
        #[arg(long)]
        goal: String,
    },
}

pub fn run(action: ProfileAction) -> CliResult {
    let config = Config::load_or_default();
    let mut tracker = open_tracker(&config);

    let profile = match action {
        ProfileAction::Show => tracker.profile().clone(),
        ProfileAction::Set {
            name,
            age,
            weight,
            height,
            goal,
        } => {
            let outcome = tracker.update_profile(ProfileUpdate {
                name,
                age,
                weight,
                height,
                goal,
            })?;
            announce(&outcome.notifications);
            eprintln!("Profile Updated");
            outcome.record
        }
    };

    print_json(&serde_json::json!({
        "profile": profile,
        "bmi": profile.bmi_label(),
    }))
}
