//! Export command: owned games, recent games and achievements to CSV.

use reqwest::Client;
use std::path::Path;
use tracing::info;

use crate::{
    config::Credentials,
    export::{export_achievements, export_owned_games, export_recent_games, ExportSummary},
    steam::http::{
        build_client, get_all_achievements_with_base_url, get_owned_games_with_base_url,
        get_recent_games_with_base_url, STEAM_API_URL,
    },
    Result,
};

/// Handle the export command
pub async fn handle_export(creds: &Credentials, out_dir: &Path) -> Result<()> {
    let client = build_client()?;
    // tarpaulin::skip - HTTP/file I/O call, tested via integration tests
    let summary = run_export(&client, STEAM_API_URL, creds, out_dir).await?;

    if summary == ExportSummary::default() {
        println!("Nothing to export for Steam ID {}", creds.steam_id);
    } else {
        println!("✓ Export finished in {}", out_dir.display());
    }

    Ok(())
}

/// Fetch each collection in turn and write it to `out_dir`.
///
/// Achievements are requested once per owned game, sequentially.
pub async fn run_export(
    client: &Client,
    base_url: &str,
    creds: &Credentials,
    out_dir: &Path,
) -> Result<ExportSummary> {
    let mut summary = ExportSummary::default();

    let owned_games = get_owned_games_with_base_url(client, base_url, creds).await?;
    summary.owned_games = export_owned_games(out_dir, &owned_games)?;
    if summary.owned_games > 0 {
        println!("Owned games data saved.");
    }

    let recent_games = get_recent_games_with_base_url(client, base_url, creds).await?;
    summary.recent_games = export_recent_games(out_dir, &recent_games)?;
    if summary.recent_games > 0 {
        println!("Recent games data saved.");
    }

    info!(
        games = owned_games.len(),
        "fetching achievements for owned games"
    );
    let achievements =
        get_all_achievements_with_base_url(client, base_url, creds, &owned_games).await?;
    summary.achievements = export_achievements(out_dir, &achievements)?;
    if summary.achievements > 0 {
        println!("Achievements data saved.");
    }

    Ok(summary)
}
