//! Steam Web API client: response types and request functions.

pub mod http;
pub mod types;
