use clap::Subcommand;
use trailquest_core::storage::session;
use trailquest_core::{Command, Config};

#[derive(Subcommand)]
pub enum AccountAction {
    /// Sign in with a demo identity
    Login {
        /// Display name (defaults to the configured profile)
        name: Option<String>,
        /// Contact email (defaults to the configured profile)
        email: Option<String>,
    },
    /// Sign out
    Logout,
    /// Print the signed-in account as JSON
    Status,
    /// Add points to the account score (negative deltas allowed)
    Credit {
        #[arg(allow_hyphen_values = true)]
        delta: i64,
    },
    /// Print progress toward the next tier as JSON
    Progress,
}

pub fn run(action: AccountAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = session::load()?;

    match action {
        AccountAction::Login { name, email } => {
            let config = Config::load_or_default();
            let name = name.unwrap_or(config.profile.name);
            let email = email.unwrap_or(config.profile.email);
            for event in store.dispatch(Command::SignIn { name, email })? {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
        }
        AccountAction::Logout => {
            let events = store.dispatch(Command::SignOut)?;
            if events.is_empty() {
                eprintln!("not signed in");
            }
            for event in events {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
        }
        AccountAction::Status => match store.account().user() {
            Some(account) => println!("{}", serde_json::to_string_pretty(account)?),
            None => println!("{{}}"),
        },
        AccountAction::Credit { delta } => {
            let events = store.dispatch(Command::AddScore { delta })?;
            if events.is_empty() {
                eprintln!("not signed in; sign in before crediting points");
                std::process::exit(1);
            }
            for event in events {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
        }
        AccountAction::Progress => match store.account().progress() {
            Some(progress) => println!("{}", serde_json::to_string_pretty(&progress)?),
            None => println!("{{}}"),
        },
    }

    session::save(&store)?;
    Ok(())
}
