//! Command implementations for the Steam analytics CLI

pub mod export;
pub mod summary;
