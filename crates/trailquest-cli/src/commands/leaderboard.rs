use clap::Subcommand;
use trailquest_core::storage::session;
use trailquest_core::Leaderboard;

#[derive(Subcommand)]
pub enum LeaderboardAction {
    /// Print the rankings
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the top three podium
    Podium,
}

/// Demo standings with the signed-in player's row merged in.
fn build_board() -> Result<Leaderboard, Box<dyn std::error::Error>> {
    let store = session::load()?;
    let mut board = Leaderboard::seed();
    if let Some(account) = store.account().user() {
        board.record_player(
            account,
            store.hunt().found_count() as u32,
            store.hunt().completion_pct().round() as u32,
        );
    }
    Ok(board)
}

pub fn run(action: LeaderboardAction) -> Result<(), Box<dyn std::error::Error>> {
    let board = build_board()?;

    match action {
        LeaderboardAction::Show { json } => {
            let standings = board.standings();
            if json {
                println!("{}", serde_json::to_string_pretty(&standings)?);
            } else {
                for ranked in &standings {
                    let you = if ranked.standing.is_current_user {
                        " (you)"
                    } else {
                        ""
                    };
                    println!(
                        "#{:<2} {:<16} {:>7} pts  {}{}",
                        ranked.rank,
                        ranked.standing.name,
                        ranked.standing.score,
                        ranked.standing.tier,
                        you
                    );
                }
            }
        }
        LeaderboardAction::Podium => {
            for ranked in board.top(3) {
                println!(
                    "#{} {} -- {} pts ({})",
                    ranked.rank, ranked.standing.name, ranked.standing.score, ranked.standing.tier
                );
            }
        }
    }

    Ok(())
}
