//! Error types for the Steam analytics CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, SteamError>;

#[derive(Error, Debug)]
pub enum SteamError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing {env_var}. Set it in a .env file or as an environment variable.")]
    MissingCredential { env_var: String },

    #[error("Failed to parse Steam ID: {0}")]
    InvalidSteamId(#[from] std::num::ParseIntError),
}
