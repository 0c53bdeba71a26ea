//! Unit tests for CSV export

use super::*;
use crate::{steam::types::Achievement, AppId};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn owned_game(appid: u32, name: &str, playtime_forever: u64) -> OwnedGame {
    serde_json::from_value(json!({
        "appid": appid,
        "name": name,
        "playtime_forever": playtime_forever
    }))
    .unwrap()
}

fn recent_game(appid: u32, name: &str, playtime_2weeks: u64) -> RecentGame {
    serde_json::from_value(json!({
        "appid": appid,
        "name": name,
        "playtime_2weeks": playtime_2weeks,
        "playtime_forever": playtime_2weeks * 10
    }))
    .unwrap()
}

fn achievement(value: serde_json::Value) -> Achievement {
    serde_json::from_value(value).unwrap()
}

fn read_rows(path: &Path) -> (csv::StringRecord, Vec<csv::StringRecord>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers = reader.headers().unwrap().clone();
    let rows = reader.records().map(|r| r.unwrap()).collect();
    (headers, rows)
}

fn column(headers: &csv::StringRecord, name: &str) -> usize {
    headers
        .iter()
        .position(|h| h == name)
        .unwrap_or_else(|| panic!("missing column {name}"))
}

#[cfg(test)]
mod export_tests {
    use super::*;

    #[test]
    fn test_owned_games_playtime_hours_two_decimals() {
        let dir = TempDir::new().unwrap();

        let written = export_owned_games(dir.path(), &[owned_game(440, "Team Fortress 2", 120)])
            .unwrap();
        assert_eq!(written, 1);

        let (headers, rows) = read_rows(&owned_games_path(dir.path()));
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][column(&headers, "appid")], "440");
        assert_eq!(&rows[0][column(&headers, "name")], "Team Fortress 2");
        assert_eq!(&rows[0][column(&headers, "playtime_forever")], "120");
        assert_eq!(&rows[0][column(&headers, "playtime_hours")], "2.00");
    }

    #[test]
    fn test_owned_games_header_row() {
        let dir = TempDir::new().unwrap();
        export_owned_games(dir.path(), &[owned_game(1, "A", 1)]).unwrap();

        let (headers, _) = read_rows(&owned_games_path(dir.path()));
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            ["appid", "name", "playtime_forever", "playtime_hours"]
        );
    }

    #[test]
    fn test_owned_games_export_every_api_field() {
        let dir = TempDir::new().unwrap();
        let game: OwnedGame = serde_json::from_value(json!({
            "appid": 440,
            "name": "Team Fortress 2",
            "playtime_forever": 120,
            "playtime_2weeks": 30,
            "img_icon_url": "icon",
            "playtime_deck_forever": 5,
            "img_logo_url": "abc",
            "has_community_visible_stats": true,
            "content_descriptorids": [2, 5]
        }))
        .unwrap();

        export_owned_games(dir.path(), &[game]).unwrap();

        let (headers, rows) = read_rows(&owned_games_path(dir.path()));
        assert_eq!(&rows[0][column(&headers, "playtime_2weeks")], "30");
        assert_eq!(&rows[0][column(&headers, "img_icon_url")], "icon");
        assert_eq!(&rows[0][column(&headers, "playtime_deck_forever")], "5");
        assert_eq!(&rows[0][column(&headers, "img_logo_url")], "abc");
        assert_eq!(&rows[0][column(&headers, "has_community_visible_stats")], "true");
        assert_eq!(&rows[0][column(&headers, "content_descriptorids")], "[2,5]");
        assert_eq!(headers.iter().last(), Some("playtime_hours"));
    }

    #[test]
    fn test_columns_are_union_of_all_rows() {
        let dir = TempDir::new().unwrap();
        let with_logo: OwnedGame = serde_json::from_value(json!({
            "appid": 620,
            "name": "Portal 2",
            "playtime_forever": 60,
            "img_logo_url": "logo"
        }))
        .unwrap();

        export_owned_games(dir.path(), &[owned_game(440, "Team Fortress 2", 120), with_logo])
            .unwrap();

        let (headers, rows) = read_rows(&owned_games_path(dir.path()));
        let logo = column(&headers, "img_logo_url");
        assert_eq!(&rows[0][logo], "");
        assert_eq!(&rows[1][logo], "logo");
        assert_eq!(rows[0].len(), headers.len());
        assert_eq!(rows[1].len(), headers.len());
    }

    #[test]
    fn test_empty_collection_does_not_create_file() {
        let dir = TempDir::new().unwrap();

        assert_eq!(export_owned_games(dir.path(), &[]).unwrap(), 0);
        assert_eq!(export_recent_games(dir.path(), &[]).unwrap(), 0);
        assert_eq!(export_achievements(dir.path(), &[]).unwrap(), 0);

        assert!(!owned_games_path(dir.path()).exists());
        assert!(!recent_games_path(dir.path()).exists());
        assert!(!achievements_path(dir.path()).exists());
    }

    #[test]
    fn test_empty_collection_does_not_overwrite_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = owned_games_path(dir.path());
        fs::write(&path, "previous export\n").unwrap();

        export_owned_games(dir.path(), &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "previous export\n");
    }

    #[test]
    fn test_existing_file_is_overwritten() {
        let dir = TempDir::new().unwrap();
        let path = owned_games_path(dir.path());
        fs::write(&path, "stale,data\n1,2\n3,4\n5,6\n").unwrap();

        export_owned_games(dir.path(), &[owned_game(620, "Portal 2", 45)]).unwrap();

        let (headers, rows) = read_rows(&path);
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][column(&headers, "playtime_hours")], "0.75");
    }

    #[test]
    fn test_missing_out_dir_is_not_created() {
        let dir = TempDir::new().unwrap();
        let out_dir = dir.path().join("data");

        let result = export_owned_games(&out_dir, &[owned_game(1, "A", 60)]);

        assert!(result.is_err());
        assert!(!out_dir.exists());
    }

    #[test]
    fn test_recent_games_hours_from_two_week_playtime() {
        let dir = TempDir::new().unwrap();

        let written = export_recent_games(
            dir.path(),
            &[recent_game(570, "Dota 2", 90), recent_game(730, "Counter-Strike 2", 10)],
        )
        .unwrap();
        assert_eq!(written, 2);

        let (headers, rows) = read_rows(&recent_games_path(dir.path()));
        let hours = column(&headers, "playtime_hours");
        assert_eq!(&rows[0][hours], "1.50");
        assert_eq!(&rows[1][hours], "0.17");
        assert_eq!(&rows[0][column(&headers, "playtime_forever")], "900");
    }

    #[test]
    fn test_recent_games_keep_platform_playtimes() {
        let dir = TempDir::new().unwrap();
        let game: RecentGame = serde_json::from_value(json!({
            "appid": 570,
            "name": "Dota 2",
            "playtime_2weeks": 60,
            "playtime_forever": 600,
            "playtime_windows_forever": 400,
            "playtime_linux_forever": 200
        }))
        .unwrap();

        export_recent_games(dir.path(), &[game]).unwrap();

        let (headers, rows) = read_rows(&recent_games_path(dir.path()));
        assert_eq!(&rows[0][column(&headers, "playtime_windows_forever")], "400");
        assert_eq!(&rows[0][column(&headers, "playtime_linux_forever")], "200");
    }

    #[test]
    fn test_achievements_carry_game_name() {
        let dir = TempDir::new().unwrap();
        let records = vec![
            AchievementRecord {
                appid: AppId::new(440),
                game_name: "Team Fortress 2".to_string(),
                achievement: achievement(json!({
                    "apiname": "TF_A",
                    "achieved": 1,
                    "unlocktime": 1290000000
                })),
            },
            AchievementRecord {
                appid: AppId::new(620),
                game_name: "Portal 2, Co-op".to_string(),
                achievement: achievement(json!({
                    "apiname": "PORTAL_A",
                    "achieved": 0,
                    "unlocktime": 0
                })),
            },
        ];

        assert_eq!(export_achievements(dir.path(), &records).unwrap(), 2);

        let (headers, rows) = read_rows(&achievements_path(dir.path()));
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            ["apiname", "achieved", "unlocktime", "appid", "game_name"]
        );
        let game_name = column(&headers, "game_name");
        assert_eq!(&rows[0][column(&headers, "apiname")], "TF_A");
        assert_eq!(&rows[0][column(&headers, "achieved")], "1");
        assert_eq!(&rows[0][column(&headers, "unlocktime")], "1290000000");
        assert_eq!(&rows[0][game_name], "Team Fortress 2");
        // Commas in names survive quoting
        assert_eq!(&rows[1][game_name], "Portal 2, Co-op");
        assert_eq!(&rows[1][column(&headers, "appid")], "620");
    }

    #[test]
    fn test_achievement_name_column_only_when_returned() {
        let dir = TempDir::new().unwrap();
        let records = vec![AchievementRecord {
            appid: AppId::new(440),
            game_name: "Team Fortress 2".to_string(),
            achievement: achievement(json!({
                "apiname": "TF_A",
                "achieved": 1,
                "unlocktime": 10,
                "name": "Head of the Class",
                "description": "Play a complete round with every class."
            })),
        }];

        export_achievements(dir.path(), &records).unwrap();

        let (headers, rows) = read_rows(&achievements_path(dir.path()));
        assert_eq!(&rows[0][column(&headers, "name")], "Head of the Class");
        assert_eq!(
            &rows[0][column(&headers, "description")],
            "Play a complete round with every class."
        );
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(2.0), "2.00");
        assert_eq!(format_hours(1.0 / 3.0), "0.33");
        assert_eq!(format_hours(0.0), "0.00");
    }

    #[test]
    fn test_cell_rendering() {
        assert_eq!(cell(None), "");
        assert_eq!(cell(Some(&json!(null))), "");
        assert_eq!(cell(Some(&json!("text"))), "text");
        assert_eq!(cell(Some(&json!(42))), "42");
        assert_eq!(cell(Some(&json!(false))), "false");
    }
}
