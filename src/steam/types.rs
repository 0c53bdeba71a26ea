use crate::cli::types::AppId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};


/// Public profile metadata for one account (`ISteamUser/GetPlayerSummaries`).
///
/// Held as the raw JSON object, in the order the API sent it, so the printed
/// summary matches the response field for field.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct PlayerSummary {
    fields: Map<String, Value>,
}

impl PlayerSummary {
    pub fn steamid(&self) -> Option<&str> {
        self.get("steamid").and_then(Value::as_str)
    }

    pub fn personaname(&self) -> Option<&str> {
        self.get("personaname").and_then(Value::as_str)
    }

    /// 1 = private/friends only, 3 = public
    pub fn community_visibility_state(&self) -> Option<u64> {
        self.get("communityvisibilitystate").and_then(Value::as_u64)
    }

    /// 0 = offline, 1 = online, 2 = busy, 3 = away, 4 = snooze, ...
    pub fn persona_state(&self) -> Option<u64> {
        self.get("personastate").and_then(Value::as_u64)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

/// A game owned by the account (`IPlayerService/GetOwnedGames`).
///
/// Fields the tool computes with are typed; the rest of the API object is
/// kept in `extra` and exported as-is.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OwnedGame {
    pub appid: AppId,
    /// Only present when `include_appinfo` is requested
    #[serde(default)]
    pub name: String,
    /// Minutes
    #[serde(default)]
    pub playtime_forever: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playtime_2weeks: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_icon_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OwnedGame {
    pub fn playtime_hours(&self) -> f64 {
        minutes_to_hours(self.playtime_forever)
    }
}

/// A game played in the trailing two weeks (`IPlayerService/GetRecentlyPlayedGames`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RecentGame {
    pub appid: AppId,
    #[serde(default)]
    pub name: String,
    /// Minutes within the two-week window
    #[serde(default)]
    pub playtime_2weeks: u64,
    #[serde(default)]
    pub playtime_forever: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_icon_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RecentGame {
    pub fn playtime_hours(&self) -> f64 {
        minutes_to_hours(self.playtime_2weeks)
    }
}

/// One achievement of one game (`ISteamUserStats/GetPlayerAchievements`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Achievement {
    pub apiname: String,
    /// 1 when unlocked
    #[serde(default)]
    pub achieved: u8,
    /// Unix seconds, 0 while locked
    #[serde(default)]
    pub unlocktime: u64,
    /// Display name and description only come back when a language is requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Achievement {
    pub fn is_unlocked(&self) -> bool {
        self.achieved != 0
    }
}

/// An achievement tagged with the owning game, as exported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementRecord {
    pub appid: AppId,
    pub game_name: String,
    pub achievement: Achievement,
}

pub fn minutes_to_hours(minutes: u64) -> f64 {
    minutes as f64 / 60.0
}

/// Top-level envelope for player summaries
#[derive(Debug, Default, Deserialize)]
pub struct PlayerSummaryEnvelope {
    #[serde(default)]
    pub response: PlayersResponse,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayersResponse {
    #[serde(default)]
    pub players: Vec<PlayerSummary>,
}

/// Top-level envelope shared by owned and recently played games
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "G: Deserialize<'de>"))]
pub struct GamesEnvelope<G> {
    #[serde(default = "GamesResponse::empty")]
    pub response: GamesResponse<G>,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "G: Deserialize<'de>"))]
pub struct GamesResponse<G> {
    #[serde(default)]
    pub game_count: Option<u32>,
    #[serde(default)]
    pub games: Vec<G>,
}

impl<G> GamesResponse<G> {
    fn empty() -> Self {
        Self {
            game_count: None,
            games: Vec::new(),
        }
    }
}

/// Top-level envelope for player achievements
#[derive(Debug, Default, Deserialize)]
pub struct PlayerStatsEnvelope {
    #[serde(default)]
    pub playerstats: PlayerStats,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayerStats {
    #[serde(rename = "gameName", default)]
    pub game_name: Option<String>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub error: Option<String>,
}
