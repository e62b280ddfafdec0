use clap::Subcommand;
use trailquest_core::storage::session;
use trailquest_core::{Command, Config};

#[derive(Subcommand)]
pub enum HuntAction {
    /// List the treasure catalog
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the current session snapshot as JSON
    Status,
    /// Simulate scanning for a treasure, then mark it found
    Scan {
        /// Catalog item id (see `hunt list`)
        item_id: String,
        /// Skip the simulated scan delay
        #[arg(long)]
        no_wait: bool,
    },
    /// Clear all finds and the session score
    Reset,
}

pub fn run(action: HuntAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = session::load()?;

    match action {
        HuntAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(store.hunt().items())?);
            } else {
                for item in store.hunt().items() {
                    let mark = if item.is_found { "found" } else { "     " };
                    println!(
                        "[{mark}] {:<26} {:<20} {:>4} pts  {:?}",
                        item.id, item.area, item.points, item.difficulty
                    );
                }
                println!(
                    "{} of {} found, score {}",
                    store.hunt().found_count(),
                    store.hunt().items().len(),
                    store.hunt().total_score()
                );
            }
        }
        HuntAction::Status => {
            println!("{}", serde_json::to_string_pretty(&store.snapshot())?);
        }
        HuntAction::Scan { item_id, no_wait } => {
            let config = Config::load_or_default();

            for event in store.dispatch(Command::StartScan)? {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }

            // The scan delay is pure presentation; the engine never waits.
            if !no_wait && config.scan.simulate_delay_secs > 0 {
                std::thread::sleep(std::time::Duration::from_secs(
                    config.scan.simulate_delay_secs,
                ));
            }

            let events = store.dispatch(Command::MarkFound {
                item_id: item_id.clone(),
            })?;
            if events.is_empty() {
                eprintln!("nothing new found for '{item_id}'");
                println!("{}", serde_json::to_string_pretty(&store.snapshot())?);
            } else {
                for event in events {
                    println!("{}", serde_json::to_string_pretty(&event)?);
                }
            }

            for event in store.dispatch(Command::StopScan)? {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
        }
        HuntAction::Reset => {
            for event in store.dispatch(Command::ResetHunt)? {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
        }
    }

    session::save(&store)?;
    Ok(())
}
