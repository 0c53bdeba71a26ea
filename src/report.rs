//! Console formatting for the `summary` command.

use crate::{
    steam::types::{OwnedGame, PlayerSummary},
    Result, SteamId,
};

/// Indented JSON block for a player summary, under its heading.
pub fn format_player_summary(summary: &PlayerSummary) -> Result<String> {
    let body = serde_json::to_string_pretty(summary)?;
    Ok(format!("Player Summary:\n{body}"))
}

pub fn format_missing_player(steam_id: SteamId) -> String {
    format!("No player found for Steam ID {steam_id}")
}

/// `"{name} - Playtime: {hours} hours"` with two decimals.
pub fn format_owned_game(game: &OwnedGame) -> String {
    format!(
        "{} - Playtime: {:.2} hours",
        game.name,
        game.playtime_hours()
    )
}

/// Heading plus one line per game; empty when there is nothing to list.
pub fn format_owned_games(games: &[OwnedGame]) -> String {
    if games.is_empty() {
        return String::new();
    }

    let mut out = String::from("\nOwned Games:");
    for game in games {
        out.push('\n');
        out.push_str(&format_owned_game(game));
    }
    out
}
