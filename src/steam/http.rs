use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{
    cli::types::AppId,
    config::Credentials,
    steam::types::{
        Achievement, AchievementRecord, GamesEnvelope, OwnedGame, PlayerStatsEnvelope,
        PlayerSummary, PlayerSummaryEnvelope, RecentGame,
    },
    Result,
};


/// Base URL of the public Steam Web API.
pub const STEAM_API_URL: &str = "https://api.steampowered.com";

pub const PLAYER_SUMMARY_PATH: &str = "/ISteamUser/GetPlayerSummaries/v0002/";
pub const OWNED_GAMES_PATH: &str = "/IPlayerService/GetOwnedGames/v0001/";
pub const RECENT_GAMES_PATH: &str = "/IPlayerService/GetRecentlyPlayedGames/v0001/";
pub const PLAYER_ACHIEVEMENTS_PATH: &str = "/ISteamUserStats/GetPlayerAchievements/v0001/";

/// Build the HTTP client shared by every request of a run.
pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(concat!("steam-analytics/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// GET `url` and decode the body.
///
/// Any status other than 200 is logged with its body and yields `Ok(None)`;
/// transport and decoding failures are returned as errors.
async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    params: &[(&str, String)],
    what: &str,
) -> Result<Option<T>> {
    debug!(url, what, "GET");

    let response = client.get(url).query(params).send().await?;
    let status = response.status();

    if status != StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), body = %body, "Failed to fetch {what}");
        return Ok(None);
    }

    let bytes = response.bytes().await?;
    Ok(Some(serde_json::from_slice(&bytes)?))
}

fn auth_params(creds: &Credentials, steam_id_key: &'static str) -> Vec<(&'static str, String)> {
    vec![
        ("key", creds.api_key.clone()),
        (steam_id_key, creds.steam_id.to_string()),
    ]
}

/// Fetch the public profile for `creds.steam_id`.
///
/// Returns `None` when the request fails or the account is unknown.
pub async fn get_player_summary(
    client: &Client,
    creds: &Credentials,
) -> Result<Option<PlayerSummary>> {
    get_player_summary_with_base_url(client, STEAM_API_URL, creds).await
}

pub async fn get_player_summary_with_base_url(
    client: &Client,
    base_url: &str,
    creds: &Credentials,
) -> Result<Option<PlayerSummary>> {
    let url = format!("{base_url}{PLAYER_SUMMARY_PATH}");
    let params = auth_params(creds, "steamids");

    let envelope: Option<PlayerSummaryEnvelope> =
        get_json(client, &url, &params, "player summary").await?;

    Ok(envelope.and_then(|e| e.response.players.into_iter().next()))
}

/// Fetch every game owned by the account, free-to-play titles included.
pub async fn get_owned_games(client: &Client, creds: &Credentials) -> Result<Vec<OwnedGame>> {
    get_owned_games_with_base_url(client, STEAM_API_URL, creds).await
}

pub async fn get_owned_games_with_base_url(
    client: &Client,
    base_url: &str,
    creds: &Credentials,
) -> Result<Vec<OwnedGame>> {
    let url = format!("{base_url}{OWNED_GAMES_PATH}");
    let mut params = auth_params(creds, "steamid");
    params.push(("include_appinfo", "true".to_string()));
    params.push(("include_played_free_games", "true".to_string()));

    let envelope: Option<GamesEnvelope<OwnedGame>> =
        get_json(client, &url, &params, "owned games").await?;

    Ok(envelope.map(|e| e.response.games).unwrap_or_default())
}

/// Fetch the games played in the last two weeks.
pub async fn get_recent_games(client: &Client, creds: &Credentials) -> Result<Vec<RecentGame>> {
    get_recent_games_with_base_url(client, STEAM_API_URL, creds).await
}

pub async fn get_recent_games_with_base_url(
    client: &Client,
    base_url: &str,
    creds: &Credentials,
) -> Result<Vec<RecentGame>> {
    let url = format!("{base_url}{RECENT_GAMES_PATH}");
    let mut params = auth_params(creds, "steamid");
    params.push(("format", "json".to_string()));

    let envelope: Option<GamesEnvelope<RecentGame>> =
        get_json(client, &url, &params, "recent games").await?;

    Ok(envelope.map(|e| e.response.games).unwrap_or_default())
}

/// Fetch the account's achievements for a single game.
///
/// Games without stats answer with a 400; that is logged and treated as
/// "no achievements".
pub async fn get_achievements(
    client: &Client,
    creds: &Credentials,
    app_id: AppId,
) -> Result<Vec<Achievement>> {
    get_achievements_with_base_url(client, STEAM_API_URL, creds, app_id).await
}

pub async fn get_achievements_with_base_url(
    client: &Client,
    base_url: &str,
    creds: &Credentials,
    app_id: AppId,
) -> Result<Vec<Achievement>> {
    let url = format!("{base_url}{PLAYER_ACHIEVEMENTS_PATH}");
    let mut params = auth_params(creds, "steamid");
    params.push(("appid", app_id.to_string()));
    params.push(("format", "json".to_string()));

    let what = format!("achievements for {app_id}");
    let envelope: Option<PlayerStatsEnvelope> = get_json(client, &url, &params, &what).await?;

    Ok(envelope
        .map(|e| e.playerstats.achievements)
        .unwrap_or_default())
}

/// Fetch achievements for every game in `games`, one request per game, in order.
///
/// Each record carries the app id and display name of the game it came from.
pub async fn get_all_achievements(
    client: &Client,
    creds: &Credentials,
    games: &[OwnedGame],
) -> Result<Vec<AchievementRecord>> {
    get_all_achievements_with_base_url(client, STEAM_API_URL, creds, games).await
}

pub async fn get_all_achievements_with_base_url(
    client: &Client,
    base_url: &str,
    creds: &Credentials,
    games: &[OwnedGame],
) -> Result<Vec<AchievementRecord>> {
    let mut records = Vec::new();

    for game in games {
        let achievements =
            get_achievements_with_base_url(client, base_url, creds, game.appid).await?;

        records.extend(achievements.into_iter().map(|achievement| AchievementRecord {
            appid: game.appid,
            game_name: game.name.clone(),
            achievement,
        }));
    }

    Ok(records)
}
