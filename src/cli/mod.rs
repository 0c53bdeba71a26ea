//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::SteamId;

/// Default directory the exporter writes its CSV files into.
pub const DEFAULT_OUT_DIR: &str = "data";

/// Account selection shared between commands
#[derive(Debug, Args)]
pub struct AccountArgs {
    /// Steam ID to query (or set `STEAM_ID` env var).
    #[clap(long, short = 'i')]
    pub steam_id: Option<SteamId>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the player summary and owned games with playtime.
    Summary {
        #[clap(flatten)]
        account: AccountArgs,
    },

    /// Export owned games, recently played games and achievements to CSV.
    ///
    /// Achievements are fetched one owned game at a time, so large libraries
    /// take a while.
    Export {
        #[clap(flatten)]
        account: AccountArgs,

        /// Directory the CSV files are written into.
        #[clap(long, short, default_value = DEFAULT_OUT_DIR)]
        out_dir: PathBuf,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "steam-analytics", version, about = "Steam Web API player analytics")]
pub struct SteamAnalytics {
    #[clap(subcommand)]
    pub command: Commands,
}
