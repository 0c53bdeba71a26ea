//! ID types for the Steam Web API.

use crate::error::{Result, SteamError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for 64-bit Steam account IDs.
///
/// The Web API takes these as decimal strings in the `steamid`/`steamids`
/// query parameters and returns them as strings in player summaries.
///
/// # Examples
///
/// ```rust
/// use steam_analytics::SteamId;
///
/// let steam_id: SteamId = "76561197960287930".parse().unwrap();
/// assert_eq!(steam_id.as_u64(), 76561197960287930);
/// assert_eq!(steam_id.to_string(), "76561197960287930");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SteamId(pub u64);

impl SteamId {
    /// Create a new SteamId from a u64 value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying u64 value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SteamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SteamId {
    type Err = SteamError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Type-safe wrapper for Steam application (game) IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(pub u32);

impl AppId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
