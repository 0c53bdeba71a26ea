//! Summary command: player profile plus owned games on the console.

use reqwest::Client;

use crate::{
    config::Credentials,
    report::{format_missing_player, format_owned_games, format_player_summary},
    steam::http::{
        build_client, get_owned_games_with_base_url, get_player_summary_with_base_url,
        STEAM_API_URL,
    },
    Result,
};

/// Handle the summary command
pub async fn handle_summary(creds: &Credentials) -> Result<()> {
    let client = build_client()?;
    // tarpaulin::skip - HTTP call, tested via integration tests
    let report = build_summary_report(&client, STEAM_API_URL, creds).await?;

    println!("{report}");

    Ok(())
}

/// Fetch the player summary, then owned games, and render both.
pub async fn build_summary_report(
    client: &Client,
    base_url: &str,
    creds: &Credentials,
) -> Result<String> {
    let mut report = match get_player_summary_with_base_url(client, base_url, creds).await? {
        Some(summary) => format_player_summary(&summary)?,
        None => format_missing_player(creds.steam_id),
    };

    let games = get_owned_games_with_base_url(client, base_url, creds).await?;
    report.push_str(&format_owned_games(&games));

    Ok(report)
}
