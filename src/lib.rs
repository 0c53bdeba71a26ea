//! Steam player analytics library
//!
//! Fetches a player's profile summary, owned games, recently played games and
//! per-game achievements from the Steam Web API, then prints them or exports
//! them to CSV.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use steam_analytics::{config::Credentials, steam::http::*};
//!
//! # async fn example() -> steam_analytics::Result<()> {
//! let creds = Credentials::from_env(None)?;
//! let client = build_client()?;
//!
//! for game in get_owned_games(&client, &creds).await? {
//!     println!("{} - {:.2} hours", game.name, game.playtime_hours());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Both values are required and may also live in a `.env` file:
//! ```bash
//! export STEAM_API_KEY=XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX
//! export STEAM_ID=76561197960287930
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod report;
pub mod steam;
pub mod telemetry;

// Re-export commonly used types
pub use cli::types::{AppId, SteamId};
pub use config::Credentials;
pub use error::{Result, SteamError};
pub use steam::types::{Achievement, AchievementRecord, OwnedGame, PlayerSummary, RecentGame};

pub const API_KEY_ENV_VAR: &str = "STEAM_API_KEY";
pub const STEAM_ID_ENV_VAR: &str = "STEAM_ID";
