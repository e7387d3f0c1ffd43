use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "fitdash", version, about = "FitDash activity tracker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Step counter
    Steps {
        #[command(subcommand)]
        action: commands::activity::StepsAction,
    },
    /// Water intake
    Water {
        #[command(subcommand)]
        action: commands::activity::WaterAction,
    },
    /// Workout log
    Workout {
        #[command(subcommand)]
        action: commands::log::WorkoutAction,
    },
    /// Meal log
    Meal {
        #[command(subcommand)]
        action: commands::log::MealAction,
    },
    /// Journal entries
    Journal {
        #[command(subcommand)]
        action: commands::journal::JournalAction,
    },
    /// Profile and BMI
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Level, XP and badges
    Progress,
    /// Totals and goal progress
    Dashboard,
    /// Print a motivational quote
    Quote,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Steps { action } => commands::activity::run_steps(action),
        Commands::Water { action } => commands::activity::run_water(action),
        Commands::Workout { action } => commands::log::run_workout(action),
        Commands::Meal { action } => commands::log::run_meal(action),
        Commands::Journal { action } => commands::journal::run(action),
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Progress => commands::progress::run_progress(),
        Commands::Dashboard => commands::progress::run_dashboard(),
        Commands::Quote => commands::progress::run_quote(),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
