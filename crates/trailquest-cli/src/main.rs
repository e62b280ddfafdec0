use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "trailquest", version, about = "TrailQuest CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Treasure hunt progress
    Hunt {
        #[command(subcommand)]
        action: commands::hunt::HuntAction,
    },
    /// Account session and tier
    Account {
        #[command(subcommand)]
        action: commands::account::AccountAction,
    },
    /// Bookings and the service catalog
    Booking {
        #[command(subcommand)]
        action: commands::booking::BookingAction,
    },
    /// Leaderboard standings
    Leaderboard {
        #[command(subcommand)]
        action: commands::leaderboard::LeaderboardAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Hunt { action } => commands::hunt::run(action),
        Commands::Account { action } => commands::account::run(action),
        Commands::Booking { action } => commands::booking::run(action),
        Commands::Leaderboard { action } => commands::leaderboard::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
