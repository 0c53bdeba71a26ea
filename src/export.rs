//! CSV export of fetched collections.
//!
//! Every field the API returned becomes a column, in first-seen order, and
//! playtime minutes gain a derived `playtime_hours` column. Empty collections
//! are never written, so a previous export of that collection stays on disk
//! untouched. The output directory must already exist.

use serde::Serialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{
    steam::types::{AchievementRecord, OwnedGame, RecentGame},
    Result,
};

#[cfg(test)]
mod tests;

pub const OWNED_GAMES_FILE: &str = "owned_games.csv";
pub const RECENT_GAMES_FILE: &str = "recent_games.csv";
pub const ACHIEVEMENTS_FILE: &str = "achievements.csv";

/// Rows written per file by one export run (0 = file skipped).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub owned_games: usize,
    pub recent_games: usize,
    pub achievements: usize,
}

/// One CSV row: column name to value, in column order.
pub type Row = Map<String, Value>;

fn to_row<T: Serialize>(value: &T) -> Result<Row> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => {
            let mut row = Row::new();
            row.insert("value".to_string(), other);
            Ok(row)
        }
    }
}

fn owned_game_row(game: &OwnedGame) -> Result<Row> {
    let mut row = to_row(game)?;
    row.insert(
        "playtime_hours".to_string(),
        Value::String(format_hours(game.playtime_hours())),
    );
    Ok(row)
}

fn recent_game_row(game: &RecentGame) -> Result<Row> {
    let mut row = to_row(game)?;
    row.insert(
        "playtime_hours".to_string(),
        Value::String(format_hours(game.playtime_hours())),
    );
    Ok(row)
}

fn achievement_row(record: &AchievementRecord) -> Result<Row> {
    let mut row = to_row(&record.achievement)?;
    row.insert("appid".to_string(), Value::from(record.appid.as_u32()));
    row.insert("game_name".to_string(), Value::String(record.game_name.clone()));
    Ok(row)
}

fn format_hours(hours: f64) -> String {
    format!("{hours:.2}")
}

/// Render one JSON value as a CSV cell. Missing and null values are empty.
fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Union of all row keys, in the order they are first seen.
fn columns(rows: &[Row]) -> Vec<&str> {
    let mut columns: Vec<&str> = Vec::new();
    for key in rows.iter().flat_map(|row| row.keys()) {
        if !columns.contains(&key.as_str()) {
            columns.push(key);
        }
    }
    columns
}

/// Write `rows` to `path` with a header row, replacing any existing file.
///
/// Returns the number of rows written. Nothing is touched when `rows` is
/// empty. A missing parent directory is an error.
pub fn write_csv(path: &Path, rows: &[Row]) -> Result<usize> {
    if rows.is_empty() {
        debug!(path = %path.display(), "nothing to write, skipping");
        return Ok(0);
    }

    let columns = columns(rows);

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&columns)?;
    for row in rows {
        writer.write_record(columns.iter().map(|column| cell(row.get(*column))))?;
    }
    writer.flush()?;

    Ok(rows.len())
}

pub fn owned_games_path(out_dir: &Path) -> PathBuf {
    out_dir.join(OWNED_GAMES_FILE)
}

pub fn recent_games_path(out_dir: &Path) -> PathBuf {
    out_dir.join(RECENT_GAMES_FILE)
}

pub fn achievements_path(out_dir: &Path) -> PathBuf {
    out_dir.join(ACHIEVEMENTS_FILE)
}

pub fn export_owned_games(out_dir: &Path, games: &[OwnedGame]) -> Result<usize> {
    let rows = games.iter().map(owned_game_row).collect::<Result<Vec<_>>>()?;
    write_csv(&owned_games_path(out_dir), &rows)
}

pub fn export_recent_games(out_dir: &Path, games: &[RecentGame]) -> Result<usize> {
    let rows = games.iter().map(recent_game_row).collect::<Result<Vec<_>>>()?;
    write_csv(&recent_games_path(out_dir), &rows)
}

pub fn export_achievements(out_dir: &Path, records: &[AchievementRecord]) -> Result<usize> {
    let rows = records.iter().map(achievement_row).collect::<Result<Vec<_>>>()?;
    write_csv(&achievements_path(out_dir), &rows)
}
