//! Credential loading from the process environment.

use crate::{
    error::{Result, SteamError},
    SteamId, API_KEY_ENV_VAR, STEAM_ID_ENV_VAR,
};
use std::fmt;


/// Everything a fetcher needs to authenticate and pick an account.
///
/// Built once at process entry and passed by reference to every request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub steam_id: SteamId,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("steam_id", &self.steam_id)
            .finish()
    }
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, steam_id: SteamId) -> Self {
        Self {
            api_key: api_key.into(),
            steam_id,
        }
    }

    /// Load `STEAM_API_KEY` and `STEAM_ID` from the environment.
    ///
    /// `steam_id_override` (the `--steam-id` flag) takes precedence over the
    /// `STEAM_ID` variable. Values from a `.env` file are visible here once
    /// `dotenvy::dotenv()` has run.
    pub fn from_env(steam_id_override: Option<SteamId>) -> Result<Self> {
        Self::from_lookup(steam_id_override, |name| std::env::var(name).ok())
    }

    /// Resolve credentials through an arbitrary variable lookup.
    ///
    /// Empty or whitespace-only values count as missing.
    pub fn from_lookup<F>(steam_id_override: Option<SteamId>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = required(&lookup, API_KEY_ENV_VAR)?;

        let steam_id = match steam_id_override {
            Some(id) => id,
            None => required(&lookup, STEAM_ID_ENV_VAR)?.parse()?,
        };

        Ok(Self::new(api_key, steam_id))
    }
}

fn required<F>(lookup: &F, env_var: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(env_var)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| SteamError::MissingCredential {
            env_var: env_var.to_string(),
        })
}
