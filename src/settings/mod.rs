//! Settings module
//!
//! Persistent defaults (host, API key, pagination scheme, output format)
//! and their resolution against CLI flags and the environment.

mod commands;
mod models;
mod resolve;
mod store;

pub use commands::run_config_command;
pub use models::{mask_secret, Settings};
pub use resolve::{resolve_api_key, resolve_host};
pub use store::SettingsStore;
