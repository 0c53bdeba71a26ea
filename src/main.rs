//! Entry point: load configuration, parse CLI and dispatch to command handlers.

use clap::Parser;
use steam_analytics::{
    cli::{Commands, SteamAnalytics},
    commands::{export::handle_export, summary::handle_summary},
    config::Credentials,
    telemetry, Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_subscriber("info");

    let app = SteamAnalytics::parse();

    match app.command {
        Commands::Summary { account } => {
            let creds = Credentials::from_env(account.steam_id)?;
            handle_summary(&creds).await?
        }

        Commands::Export { account, out_dir } => {
            let creds = Credentials::from_env(account.steam_id)?;
            handle_export(&creds, &out_dir).await?
        }
    }

    Ok(())
}
