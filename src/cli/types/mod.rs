//! Type-safe wrappers for Steam identifiers.

pub mod ids;

pub use ids::{AppId, SteamId};
